use crate::report::Report;

/// The result of an exhaustive search.
///
/// `values` is the best assignment, aligned with the problem's variable
/// order, kept separate from the objective rather than merged into one
/// map with a synthetic key.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    /// Best value for each variable
    pub values: Vec<u64>,
    /// Objective value achieved by `values`
    pub objective: f64,
    /// How many feasible combinations the search visited
    pub feasible_count: u64,
    /// Constraint breakdown at the best assignment
    pub report: Report,
}

/// One feasible draw retained by the stochastic sampler.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sample {
    /// Drawn value for each variable
    pub values: Vec<u64>,
    /// Objective value of the draw
    pub objective: f64,
}
