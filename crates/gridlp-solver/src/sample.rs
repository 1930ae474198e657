use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::eval::{is_feasible, objective_value};
use crate::problem::ProblemModel;
use crate::solution::Sample;

/// How many of the best feasible draws are kept.
const TOP_K: usize = 10;

/// Monte-Carlo sampler for quick "good enough" solutions.
///
/// Draws each variable uniformly from `[0, ub]` (step does not apply),
/// discards infeasible draws, and keeps the top 10 by objective value.
pub struct Sampler {
    num_samples: usize,
    seed: Option<u64>,
}

impl Default for Sampler {
    fn default() -> Self {
        Self {
            num_samples: 20_000,
            seed: None,
        }
    }
}

impl Sampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_samples(mut self, num_samples: usize) -> Self {
        self.num_samples = num_samples;
        self
    }

    /// Fix the RNG seed for reproducible draws.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run the sampler. Returns up to 10 feasible draws sorted by
    /// objective descending; the sort direction does not follow the
    /// objective sense. An empty vec means no draw was feasible.
    pub fn sample(&self, problem: &ProblemModel) -> Vec<Sample> {
        let mut rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let mut feasible = Vec::new();
        for _ in 0..self.num_samples {
            let values: Vec<u64> = problem
                .variables
                .iter()
                .map(|v| rng.gen_range(0..=v.ub))
                .collect();

            if !is_feasible(problem, &values) {
                continue;
            }
            let objective = objective_value(problem, &values);
            feasible.push(Sample { values, objective });
        }

        // stable sort: equal objectives keep draw order
        feasible.sort_by(|a, b| b.objective.total_cmp(&a.objective));
        feasible.truncate(TOP_K);
        feasible
    }
}
