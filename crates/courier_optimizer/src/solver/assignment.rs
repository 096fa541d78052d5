use fxhash::FxHashSet;
use serde::Serialize;

use crate::problem::{
    city::CityIdx,
    cost_matrix::{Cost, CostMatrix},
    fleet::Fleet,
    truck::TruckIdx,
};

/// Ordered delivery cities per truck, in fleet order. The depot is implied at the start
/// of every route and never stored.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Assignment {
    routes: Vec<Vec<CityIdx>>,
}

impl Assignment {
    pub fn new(routes: Vec<Vec<CityIdx>>) -> Self {
        Assignment { routes }
    }

    pub fn from_indices(routes: Vec<Vec<usize>>) -> Self {
        Assignment {
            routes: routes
                .into_iter()
                .map(|route| route.into_iter().map(CityIdx::new).collect())
                .collect(),
        }
    }

    pub fn routes(&self) -> &[Vec<CityIdx>] {
        &self.routes
    }

    pub fn route(&self, truck_id: TruckIdx) -> &[CityIdx] {
        &self.routes[truck_id.get()]
    }

    pub(crate) fn routes_mut(&mut self) -> &mut [Vec<CityIdx>] {
        &mut self.routes
    }

    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    pub fn cities_iter(&self) -> impl Iterator<Item = CityIdx> + '_ {
        self.routes.iter().flatten().copied()
    }

    /// Sum of every route's cost, each starting from the depot.
    pub fn total_cost(&self, costs: &CostMatrix) -> Cost {
        self.routes
            .iter()
            .map(|route| costs.route_cost(route))
            .fold(0, Cost::saturating_add)
    }

    /// Every delivery city `1..num_cities` appears exactly once and no route is longer
    /// than its truck's capacity.
    pub fn is_feasible(&self, fleet: &Fleet, num_cities: usize) -> bool {
        if self.routes.len() != fleet.len() {
            return false;
        }

        let within_capacity = fleet
            .trucks_iter()
            .all(|(truck_id, truck)| self.route(truck_id).len() <= truck.capacity());
        if !within_capacity {
            return false;
        }

        let mut seen = FxHashSet::default();
        for city in self.cities_iter() {
            if city.is_depot() || city.get() >= num_cities || !seen.insert(city) {
                return false;
            }
        }

        seen.len() == num_cities.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_cost() {
        let costs = CostMatrix::from_rows(vec![
            vec![0, 4, 6],
            vec![4, 0, 10],
            vec![6, 10, 0],
        ])
        .unwrap();

        let assignment = Assignment::from_indices(vec![vec![1], vec![2]]);
        assert_eq!(assignment.total_cost(&costs), 10);

        let assignment = Assignment::from_indices(vec![vec![2, 1], vec![]]);
        assert_eq!(assignment.total_cost(&costs), 16);
    }

    #[test]
    fn test_is_feasible() {
        let fleet = Fleet::from_capacities(&[2, 1]);

        assert!(Assignment::from_indices(vec![vec![3, 1], vec![2]]).is_feasible(&fleet, 4));
        assert!(!Assignment::from_indices(vec![vec![3], vec![2]]).is_feasible(&fleet, 3));
    }

    #[test]
    fn test_is_not_feasible_with_duplicates_or_missing_cities() {
        let fleet = Fleet::from_capacities(&[2, 2]);

        // duplicate
        assert!(!Assignment::from_indices(vec![vec![1, 2], vec![2]]).is_feasible(&fleet, 4));
        // missing 3
        assert!(!Assignment::from_indices(vec![vec![1], vec![2]]).is_feasible(&fleet, 4));
        // depot is never a delivery
        assert!(!Assignment::from_indices(vec![vec![0, 1], vec![2]]).is_feasible(&fleet, 3));
    }

    #[test]
    fn test_is_not_feasible_over_capacity() {
        let fleet = Fleet::from_capacities(&[1, 2]);

        assert!(!Assignment::from_indices(vec![vec![1, 2], vec![3]]).is_feasible(&fleet, 4));
    }

    #[test]
    fn test_cities_iter() {
        let assignment = Assignment::from_indices(vec![vec![3, 1], vec![], vec![2]]);

        assert_eq!(
            assignment.cities_iter().collect::<Vec<_>>(),
            vec![CityIdx::new(3), CityIdx::new(1), CityIdx::new(2)]
        );
    }
}
