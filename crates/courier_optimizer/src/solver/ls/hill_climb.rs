use rand::Rng;
use tracing::{debug, instrument, trace};

use crate::{
    problem::cost_matrix::CostMatrix,
    solver::{assignment::Assignment, solution::Solution},
};

use super::swap::SwapOperator;

/// Single trajectory of first-improvement hill climbing over random city swaps.
///
/// Exactly `iterations` swaps are proposed. A proposal is accepted only when it is
/// strictly cheaper than the current solution, so the returned cost never exceeds the
/// cost of the starting assignment.
#[derive(Debug, Clone, Copy)]
pub struct HillClimb {
    iterations: usize,
}

impl HillClimb {
    pub fn new(iterations: usize) -> Self {
        HillClimb { iterations }
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    #[instrument(skip_all, level = "debug")]
    pub fn climb<R: Rng>(&self, initial: Assignment, costs: &CostMatrix, rng: &mut R) -> Solution {
        let num_cities = costs.num_cities();
        let mut current = Solution::evaluate(initial, costs);
        let initial_cost = current.cost();
        let mut accepted = 0;

        for iteration in 0..self.iterations {
            let Some(operator) = SwapOperator::random(num_cities, rng) else {
                // Fewer than two deliveries, no neighbour exists
                break;
            };

            let candidate = Solution::evaluate(operator.candidate(current.assignment()), costs);

            if candidate.cost() < current.cost() {
                trace!(
                    iteration,
                    from = current.cost(),
                    to = candidate.cost(),
                    first = %operator.first(),
                    second = %operator.second(),
                    "accepted swap"
                );

                accepted += 1;
                current = candidate;
            }
        }

        debug!(
            initial_cost,
            final_cost = current.cost(),
            accepted,
            "hill climb finished"
        );

        current
    }
}
