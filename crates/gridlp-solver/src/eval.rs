use crate::problem::{Constraint, ConstraintOp, ProblemModel};

/// Left-hand side of a constraint for a candidate assignment.
pub fn constraint_lhs(constraint: &Constraint, values: &[u64]) -> f64 {
    constraint
        .coefficients
        .iter()
        .zip(values)
        .map(|(&coef, &val)| coef * val as f64)
        .sum()
}

/// Whether a candidate assignment satisfies a single constraint.
///
/// Equality constraints compare with exact `==` on f64. The integer grid
/// keeps lhs values exact for integer coefficients; fractional coefficients
/// can make equality unreachable through rounding.
pub fn satisfies(constraint: &Constraint, values: &[u64]) -> bool {
    let lhs = constraint_lhs(constraint, values);
    match constraint.op {
        ConstraintOp::Le => lhs <= constraint.rhs,
        ConstraintOp::Ge => lhs >= constraint.rhs,
        ConstraintOp::Eq => lhs == constraint.rhs,
    }
}

/// Whether a candidate assignment satisfies every constraint.
/// Short-circuits on the first violation.
pub fn is_feasible(problem: &ProblemModel, values: &[u64]) -> bool {
    problem.constraints.iter().all(|c| satisfies(c, values))
}

/// Objective value of a candidate assignment.
pub fn objective_value(problem: &ProblemModel, values: &[u64]) -> f64 {
    problem
        .objective
        .coefficients
        .iter()
        .zip(values)
        .map(|(&coef, &val)| coef * val as f64)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{ObjectiveSense, Variable};

    fn two_var_problem() -> ProblemModel {
        let mut problem = ProblemModel::new(vec![
            Variable {
                name: "x".to_string(),
                ub: 10,
            },
            Variable {
                name: "y".to_string(),
                ub: 10,
            },
        ]);
        problem.set_objective(ObjectiveSense::Max, vec![2.0, 3.0]);
        problem
    }

    #[test]
    fn test_le_feasibility() {
        let mut problem = two_var_problem();
        problem.add_constraint("cap", vec![1.0, 1.0], ConstraintOp::Le, 5.0);
        assert!(is_feasible(&problem, &[2, 3]));
        assert!(is_feasible(&problem, &[0, 5]));
        assert!(!is_feasible(&problem, &[3, 3]));
    }

    #[test]
    fn test_ge_feasibility() {
        let mut problem = two_var_problem();
        problem.add_constraint("floor", vec![1.0, 1.0], ConstraintOp::Ge, 4.0);
        assert!(is_feasible(&problem, &[2, 2]));
        assert!(is_feasible(&problem, &[5, 0]));
        assert!(!is_feasible(&problem, &[1, 2]));
    }

    #[test]
    fn test_eq_feasibility() {
        let mut problem = two_var_problem();
        problem.add_constraint("exact", vec![1.0, 1.0], ConstraintOp::Eq, 5.0);
        assert!(is_feasible(&problem, &[2, 3]));
        assert!(!is_feasible(&problem, &[2, 2]));
        assert!(!is_feasible(&problem, &[3, 3]));
    }

    #[test]
    fn test_zero_coefficient_ignores_variable() {
        let mut problem = two_var_problem();
        // y has coefficient 0, so only x counts
        problem.add_constraint("x_only", vec![1.0, 0.0], ConstraintOp::Le, 3.0);
        assert!(is_feasible(&problem, &[3, 10]));
        assert!(!is_feasible(&problem, &[4, 0]));
    }

    #[test]
    fn test_short_circuit_order_independent() {
        let mut a = two_var_problem();
        a.add_constraint("first", vec![1.0, 0.0], ConstraintOp::Le, 1.0);
        a.add_constraint("second", vec![0.0, 1.0], ConstraintOp::Le, 1.0);

        let mut b = two_var_problem();
        b.add_constraint("second", vec![0.0, 1.0], ConstraintOp::Le, 1.0);
        b.add_constraint("first", vec![1.0, 0.0], ConstraintOp::Le, 1.0);

        for values in [[0, 0], [2, 0], [0, 2], [2, 2]] {
            assert_eq!(is_feasible(&a, &values), is_feasible(&b, &values));
        }
    }

    #[test]
    fn test_objective_value() {
        let problem = two_var_problem();
        assert!((objective_value(&problem, &[2, 3]) - 13.0).abs() < 1e-9);
        assert!((objective_value(&problem, &[0, 0])).abs() < 1e-9);
    }
}
