use crate::eval::constraint_lhs;
use crate::problem::{ConstraintOp, ProblemModel};

/// Per-constraint breakdown for a chosen assignment, one row per
/// constraint in declaration order. Immutable once built.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    pub rows: Vec<ReportRow>,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReportRow {
    /// Constraint name
    pub constraint: String,
    /// Left-hand side value at the chosen assignment
    pub lhs: f64,
    /// Right-hand side bound
    pub rhs: f64,
    /// Comparison operator
    pub op: ConstraintOp,
    /// Remaining headroom: `rhs - lhs` for <=, `lhs - rhs` for >=,
    /// always 0 for = (no tolerance accounting)
    pub slack: f64,
}

impl Report {
    /// Build the report for one assignment. No feasibility check is
    /// performed; slack values are only meaningful for feasible input.
    pub fn build(problem: &ProblemModel, values: &[u64]) -> Self {
        let rows = problem
            .constraints
            .iter()
            .map(|c| {
                let lhs = constraint_lhs(c, values);
                let slack = match c.op {
                    ConstraintOp::Le => c.rhs - lhs,
                    ConstraintOp::Ge => lhs - c.rhs,
                    ConstraintOp::Eq => 0.0,
                };
                ReportRow {
                    constraint: c.name.clone(),
                    lhs,
                    rhs: c.rhs,
                    op: c.op,
                    slack,
                }
            })
            .collect();
        Self { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Variable;

    fn problem() -> ProblemModel {
        let mut p = ProblemModel::new(vec![
            Variable {
                name: "x".to_string(),
                ub: 10,
            },
            Variable {
                name: "y".to_string(),
                ub: 10,
            },
        ]);
        p.add_constraint("cap", vec![1.0, 1.0], ConstraintOp::Le, 8.0);
        p.add_constraint("floor", vec![1.0, 0.0], ConstraintOp::Ge, 2.0);
        p.add_constraint("exact", vec![0.0, 1.0], ConstraintOp::Eq, 3.0);
        p
    }

    #[test]
    fn test_slack_per_sense() {
        let report = Report::build(&problem(), &[3, 3]);
        assert_eq!(report.rows.len(), 3);

        // <=: rhs - lhs = 8 - 6
        assert_eq!(report.rows[0].constraint, "cap");
        assert!((report.rows[0].lhs - 6.0).abs() < 1e-9);
        assert!((report.rows[0].slack - 2.0).abs() < 1e-9);

        // >=: lhs - rhs = 3 - 2
        assert_eq!(report.rows[1].constraint, "floor");
        assert!((report.rows[1].slack - 1.0).abs() < 1e-9);

        // =: always 0
        assert_eq!(report.rows[2].constraint, "exact");
        assert!((report.rows[2].slack).abs() < 1e-9);
    }

    #[test]
    fn test_eq_slack_zero_even_when_off() {
        // Report does not re-check feasibility; an = row still reports 0
        let report = Report::build(&problem(), &[3, 5]);
        assert!((report.rows[2].lhs - 5.0).abs() < 1e-9);
        assert!((report.rows[2].slack).abs() < 1e-9);
    }

    #[test]
    fn test_rows_follow_declaration_order() {
        let report = Report::build(&problem(), &[2, 3]);
        let names: Vec<&str> = report.rows.iter().map(|r| r.constraint.as_str()).collect();
        assert_eq!(names, vec!["cap", "floor", "exact"]);
    }
}
