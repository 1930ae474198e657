use crate::error::SolveError;
use crate::eval::{is_feasible, objective_value};
use crate::problem::{ObjectiveSense, ProblemModel};
use crate::report::Report;
use crate::solution::Solution;

/// Receives progress notifications during an exhaustive search.
///
/// Advisory only: observers must not block or influence the search.
/// Counts refer to feasible combinations, not grid points visited.
pub trait SearchObserver {
    /// Called on every Nth feasible combination (N set on the searcher).
    fn on_feasible(&mut self, _count: u64, _problem: &ProblemModel, _values: &[u64]) {}
    /// Called once when the grid is exhausted.
    fn on_complete(&mut self, _total_feasible: u64) {}
}

/// Observer that ignores all notifications.
pub struct Silent;

impl SearchObserver for Silent {}

/// Exhaustive searcher over the integer grid
pub struct ExhaustiveSearch {
    /// Grid spacing for each variable
    step: u64,
    /// Notify the observer every Nth feasible combination (None = never)
    notify_every: Option<u64>,
}

impl Default for ExhaustiveSearch {
    fn default() -> Self {
        Self {
            step: 1,
            notify_every: None,
        }
    }
}

impl ExhaustiveSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_step(mut self, step: u64) -> Self {
        self.step = step;
        self
    }

    pub fn with_notify_every(mut self, every: u64) -> Self {
        self.notify_every = Some(every);
        self
    }

    /// Solve without progress notifications.
    pub fn solve(&self, problem: &ProblemModel) -> Result<Solution, SolveError> {
        self.solve_with_observer(problem, &mut Silent)
    }

    /// Enumerate every assignment where each variable takes values
    /// `0, step, 2*step, ..., <= ub`, tracking the best feasible one.
    ///
    /// Enumeration follows variable declaration order, outermost to
    /// innermost (the last variable varies fastest). Ties on the
    /// objective keep the assignment found first.
    pub fn solve_with_observer(
        &self,
        problem: &ProblemModel,
        observer: &mut dyn SearchObserver,
    ) -> Result<Solution, SolveError> {
        if self.step == 0 {
            return Err(SolveError::InvalidStep(0));
        }

        let mut values = vec![0u64; problem.num_variables()];
        let mut best: Option<(Vec<u64>, f64)> = None;
        let mut feasible_count: u64 = 0;

        loop {
            if is_feasible(problem, &values) {
                feasible_count += 1;
                if let Some(every) = self.notify_every {
                    if every > 0 && feasible_count % every == 0 {
                        observer.on_feasible(feasible_count, problem, &values);
                    }
                }

                let obj = objective_value(problem, &values);
                let better = match &best {
                    None => true,
                    // strict comparison: first-found wins ties
                    Some((_, best_obj)) => match problem.objective.sense {
                        ObjectiveSense::Max => obj > *best_obj,
                        ObjectiveSense::Min => obj < *best_obj,
                    },
                };
                if better {
                    best = Some((values.clone(), obj));
                }
            }

            if !self.advance(problem, &mut values) {
                break;
            }
        }

        observer.on_complete(feasible_count);

        let (values, objective) = best.ok_or(SolveError::Infeasible)?;
        let report = Report::build(problem, &values);
        Ok(Solution {
            values,
            objective,
            feasible_count,
            report,
        })
    }

    /// Mixed-radix odometer step over the grid. Returns false once the
    /// whole grid has been visited.
    fn advance(&self, problem: &ProblemModel, values: &mut [u64]) -> bool {
        for i in (0..values.len()).rev() {
            let next = values[i] + self.step;
            if next <= problem.variables[i].ub {
                values[i] = next;
                return true;
            }
            values[i] = 0;
        }
        false
    }
}
