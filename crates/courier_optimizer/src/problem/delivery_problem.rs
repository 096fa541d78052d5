use crate::{solver::solver_error::SolverError, timer_debug};

use super::{city_graph::CityGraph, cost_matrix::CostMatrix, fleet::Fleet, resolver};

/// A fleet and the fully resolved costs between every pair of cities.
///
/// The graph is resolved once, when the problem is built, and never changes afterwards.
#[derive(Debug, Clone)]
pub struct DeliveryProblem {
    costs: CostMatrix,
    fleet: Fleet,
}

impl DeliveryProblem {
    pub fn new(graph: &CityGraph, fleet: Fleet) -> Result<Self, SolverError> {
        fleet.ensure_can_serve(graph.num_deliveries())?;

        let costs = timer_debug!("Resolve city graph", resolver::resolve(graph));

        Ok(DeliveryProblem { costs, fleet })
    }

    /// Builds a problem from an already resolved matrix.
    pub fn from_cost_matrix(costs: CostMatrix, fleet: Fleet) -> Result<Self, SolverError> {
        fleet.ensure_can_serve(costs.num_cities().saturating_sub(1))?;

        Ok(DeliveryProblem { costs, fleet })
    }

    pub fn costs(&self) -> &CostMatrix {
        &self.costs
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Number of cities, depot included.
    pub fn num_cities(&self) -> usize {
        self.costs.num_cities()
    }

    pub fn num_deliveries(&self) -> usize {
        self.num_cities().saturating_sub(1)
    }
}
