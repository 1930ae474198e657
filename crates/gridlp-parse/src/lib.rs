//! JSON front end for the gridlp solver.
//!
//! Parses the structured problem description produced by the
//! natural-language extraction step:
//!
//! ```json
//! {
//!   "objective": {"sense": "max", "coeff": {"x": 2.0}},
//!   "vars": {"x": {"ub": 10}},
//!   "constraints": [
//!     {"name": "cap", "coeff": {"x": 1.0}, "sense": "<=", "rhs": 7}
//!   ]
//! }
//! ```
//!
//! Sparse coefficient maps are densified against the declared variables;
//! a coefficient for an undeclared variable is an error. The declaration
//! order of `vars` is preserved (it fixes enumeration order and hence
//! tie-breaking), which relies on serde_json's `preserve_order` feature.

use serde_json::{Map, Value};
use thiserror::Error;

use gridlp_solver::{ConstraintOp, ObjectiveSense, ProblemModel, Variable};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("problem description must be a JSON object")]
    NotAnObject,
    #[error("missing required key `{0}`")]
    MissingKey(&'static str),
    #[error("`{key}` must be {expected}")]
    WrongType {
        key: String,
        expected: &'static str,
    },
    #[error("variable `{variable}` needs a non-negative integer `ub`")]
    InvalidUpperBound { variable: String },
    #[error("{context} references unknown variable `{variable}`")]
    UnknownVariable { context: String, variable: String },
    #[error("unknown objective sense `{0}` (expected \"max\" or \"min\")")]
    UnknownObjectiveSense(String),
    #[error("unknown constraint sense `{0}` (expected \"<=\", \">=\", or \"=\")")]
    UnknownConstraintSense(String),
}

/// Parse a problem description from a JSON string.
pub fn parse_problem(source: &str) -> Result<ProblemModel, ParseError> {
    let value: Value = serde_json::from_str(source)?;
    problem_from_value(&value)
}

/// Build a [`ProblemModel`] from an already-parsed JSON value.
pub fn problem_from_value(value: &Value) -> Result<ProblemModel, ParseError> {
    let root = value.as_object().ok_or(ParseError::NotAnObject)?;

    let objective = require(root, "objective")?;
    let vars = require(root, "vars")?;
    let constraints = require(root, "constraints")?;

    let mut problem = ProblemModel::new(parse_variables(vars)?);

    let (sense, coefficients) = parse_objective(objective, &problem)?;
    problem.set_objective(sense, coefficients);

    let constraints = constraints.as_array().ok_or(ParseError::WrongType {
        key: "constraints".to_string(),
        expected: "an array",
    })?;
    for (i, entry) in constraints.iter().enumerate() {
        parse_constraint(entry, i, &mut problem)?;
    }

    Ok(problem)
}

fn require<'a>(object: &'a Map<String, Value>, key: &'static str) -> Result<&'a Value, ParseError> {
    object.get(key).ok_or(ParseError::MissingKey(key))
}

fn parse_variables(vars: &Value) -> Result<Vec<Variable>, ParseError> {
    let vars = vars.as_object().ok_or(ParseError::WrongType {
        key: "vars".to_string(),
        expected: "an object",
    })?;

    let mut variables = Vec::with_capacity(vars.len());
    for (name, entry) in vars {
        let ub = entry
            .as_object()
            .and_then(|s| s.get("ub"))
            .and_then(Value::as_u64)
            .ok_or_else(|| ParseError::InvalidUpperBound {
                variable: name.clone(),
            })?;
        variables.push(Variable {
            name: name.clone(),
            ub,
        });
    }
    Ok(variables)
}

fn parse_objective(
    objective: &Value,
    problem: &ProblemModel,
) -> Result<(ObjectiveSense, Vec<f64>), ParseError> {
    let objective = objective.as_object().ok_or(ParseError::WrongType {
        key: "objective".to_string(),
        expected: "an object",
    })?;

    let sense = match objective.get("sense").and_then(Value::as_str) {
        None => ObjectiveSense::Max,
        Some("max") => ObjectiveSense::Max,
        Some("min") => ObjectiveSense::Min,
        Some(other) => return Err(ParseError::UnknownObjectiveSense(other.to_string())),
    };

    let coeff = objective.get("coeff").ok_or(ParseError::MissingKey("objective.coeff"))?;
    let coefficients = densify(coeff, "objective.coeff", "objective", problem)?;
    Ok((sense, coefficients))
}

fn parse_constraint(
    entry: &Value,
    index: usize,
    problem: &mut ProblemModel,
) -> Result<(), ParseError> {
    let key = |field: &str| format!("constraints[{index}].{field}");

    let entry = entry.as_object().ok_or_else(|| ParseError::WrongType {
        key: format!("constraints[{index}]"),
        expected: "an object",
    })?;

    let name = entry
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| ParseError::WrongType {
            key: key("name"),
            expected: "a string",
        })?
        .to_string();

    let op = match entry.get("sense").and_then(Value::as_str) {
        None => ConstraintOp::Le,
        Some("<=") => ConstraintOp::Le,
        Some(">=") => ConstraintOp::Ge,
        Some("=") => ConstraintOp::Eq,
        Some(other) => return Err(ParseError::UnknownConstraintSense(other.to_string())),
    };

    let rhs = entry
        .get("rhs")
        .and_then(Value::as_f64)
        .ok_or_else(|| ParseError::WrongType {
            key: key("rhs"),
            expected: "a number",
        })?;

    let coeff = entry
        .get("coeff")
        .ok_or(ParseError::MissingKey("coeff"))?;
    let context = format!("constraint `{name}`");
    let coefficients = densify(coeff, &key("coeff"), &context, problem)?;

    problem.add_constraint(name, coefficients, op, rhs);
    Ok(())
}

/// Expand a sparse `{var: coefficient}` map into a dense vector aligned
/// with the declared variables. Missing variables get 0.
fn densify(
    coeff: &Value,
    key: &str,
    context: &str,
    problem: &ProblemModel,
) -> Result<Vec<f64>, ParseError> {
    let coeff = coeff.as_object().ok_or_else(|| ParseError::WrongType {
        key: key.to_string(),
        expected: "an object",
    })?;

    let mut dense = vec![0.0; problem.num_variables()];
    for (name, value) in coeff {
        let index = problem
            .variable_index(name)
            .ok_or_else(|| ParseError::UnknownVariable {
                context: context.to_string(),
                variable: name.clone(),
            })?;
        dense[index] = value.as_f64().ok_or_else(|| ParseError::WrongType {
            key: format!("{key}.{name}"),
            expected: "a number",
        })?;
    }
    Ok(dense)
}
