use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// No assignment on the searched grid satisfies every constraint.
    #[error("no feasible solution found")]
    Infeasible,
    /// Step must be a positive integer.
    #[error("step must be at least 1, got {0}")]
    InvalidStep(u64),
}
