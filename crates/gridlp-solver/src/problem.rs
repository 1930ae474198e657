/// Represents a small integer linear-programming problem
#[derive(Debug, Clone)]
pub struct ProblemModel {
    /// Decision variables, in declaration order
    pub variables: Vec<Variable>,
    /// Objective function
    pub objective: Objective,
    /// Constraints, in declaration order
    pub constraints: Vec<Constraint>,
}

/// A decision variable. The lower bound is always zero; only
/// non-negative integer values up to `ub` are searched.
#[derive(Debug, Clone)]
pub struct Variable {
    pub name: String,
    /// Inclusive upper bound
    pub ub: u64,
}

#[derive(Debug, Clone)]
pub struct Objective {
    /// Whether to maximize or minimize
    pub sense: ObjectiveSense,
    /// Coefficients for each variable (aligned with `variables`)
    pub coefficients: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ObjectiveSense {
    #[default]
    Max,
    Min,
}

#[derive(Debug, Clone)]
pub struct Constraint {
    /// Name/label for the constraint (reporting only, not required unique)
    pub name: String,
    /// Coefficients for each variable (aligned with `variables`)
    pub coefficients: Vec<f64>,
    /// Comparison operator
    pub op: ConstraintOp,
    /// Right-hand side value
    pub rhs: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstraintOp {
    /// Less than or equal (<=)
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "<="))]
    Le,
    /// Greater than or equal (>=)
    #[cfg_attr(feature = "serde", serde(rename = ">="))]
    Ge,
    /// Equal (=)
    #[cfg_attr(feature = "serde", serde(rename = "="))]
    Eq,
}

impl std::fmt::Display for ConstraintOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstraintOp::Le => write!(f, "<="),
            ConstraintOp::Ge => write!(f, ">="),
            ConstraintOp::Eq => write!(f, "="),
        }
    }
}

impl ProblemModel {
    pub fn new(variables: Vec<Variable>) -> Self {
        let n = variables.len();
        Self {
            variables,
            objective: Objective {
                sense: ObjectiveSense::Max,
                coefficients: vec![0.0; n],
            },
            constraints: Vec::new(),
        }
    }

    pub fn set_objective(&mut self, sense: ObjectiveSense, coefficients: Vec<f64>) {
        self.objective = Objective { sense, coefficients };
    }

    pub fn add_constraint(
        &mut self,
        name: impl Into<String>,
        coefficients: Vec<f64>,
        op: ConstraintOp,
        rhs: f64,
    ) {
        self.constraints.push(Constraint {
            name: name.into(),
            coefficients,
            op,
            rhs,
        });
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Index of a variable by name, if declared.
    pub fn variable_index(&self, name: &str) -> Option<usize> {
        self.variables.iter().position(|v| v.name == name)
    }

    /// Number of grid points the exhaustive search visits for a given step.
    /// Callers are responsible for keeping this tractable.
    pub fn grid_size(&self, step: u64) -> u128 {
        self.variables
            .iter()
            .map(|v| (v.ub / step + 1) as u128)
            .product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str, ub: u64) -> Variable {
        Variable {
            name: name.to_string(),
            ub,
        }
    }

    #[test]
    fn test_variable_index() {
        let problem = ProblemModel::new(vec![var("x", 3), var("y", 5)]);
        assert_eq!(problem.variable_index("x"), Some(0));
        assert_eq!(problem.variable_index("y"), Some(1));
        assert_eq!(problem.variable_index("z"), None);
    }

    #[test]
    fn test_grid_size() {
        let problem = ProblemModel::new(vec![var("x", 10), var("y", 5)]);
        assert_eq!(problem.grid_size(1), 11 * 6);
        // step 3 over [0, 10] visits 0, 3, 6, 9
        assert_eq!(problem.grid_size(3), 4 * 2);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ObjectiveSense::default(), ObjectiveSense::Max);
        assert_eq!(ConstraintOp::default(), ConstraintOp::Le);
    }

    #[test]
    fn test_op_display() {
        assert_eq!(ConstraintOp::Le.to_string(), "<=");
        assert_eq!(ConstraintOp::Ge.to_string(), ">=");
        assert_eq!(ConstraintOp::Eq.to_string(), "=");
    }
}
