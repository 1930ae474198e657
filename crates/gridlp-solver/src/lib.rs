mod error;
mod eval;
mod problem;
mod report;
mod sample;
mod search;
mod solution;

pub use error::SolveError;
pub use eval::{constraint_lhs, is_feasible, objective_value, satisfies};
pub use problem::{Constraint, ConstraintOp, Objective, ObjectiveSense, ProblemModel, Variable};
pub use report::{Report, ReportRow};
pub use sample::Sampler;
pub use search::{ExhaustiveSearch, SearchObserver, Silent};
pub use solution::{Sample, Solution};
