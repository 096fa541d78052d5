use serde::Serialize;

use super::{
    city::{CityIdx, DEPOT},
    city_graph::GraphError,
};

pub type Cost = u64;

/// Cost of a pair of cities with no path between them. Sums saturate at this value.
pub const UNREACHABLE: Cost = Cost::MAX;

/// Complete, symmetric matrix of pairwise travel costs, produced by resolving a
/// [`CityGraph`](super::city_graph::CityGraph).
///
/// Stored flat: the cost from `from` to `to` lives at `from * num_cities + to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostMatrix {
    costs: Vec<Cost>,
    num_cities: usize,
}

impl CostMatrix {
    pub(crate) fn from_flat(costs: Vec<Cost>, num_cities: usize) -> Self {
        debug_assert_eq!(costs.len(), num_cities * num_cities);
        CostMatrix { costs, num_cities }
    }

    /// Builds a matrix from `n` rows of `n` costs each.
    pub fn from_rows(rows: Vec<Vec<Cost>>) -> Result<Self, GraphError> {
        let num_cities = rows.len();
        if num_cities == 0 {
            return Err(GraphError::Empty);
        }

        let mut costs = Vec::with_capacity(num_cities * num_cities);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != num_cities {
                return Err(GraphError::NotSquare {
                    row,
                    expected: num_cities,
                    found: values.len(),
                });
            }

            costs.extend(values);
        }

        Ok(CostMatrix { costs, num_cities })
    }

    #[inline(always)]
    fn index(&self, from: CityIdx, to: CityIdx) -> usize {
        from.get() * self.num_cities + to.get()
    }

    #[inline(always)]
    pub fn travel_cost(&self, from: CityIdx, to: CityIdx) -> Cost {
        self.costs[self.index(from, to)]
    }

    pub fn is_reachable(&self, from: CityIdx, to: CityIdx) -> bool {
        self.travel_cost(from, to) != UNREACHABLE
    }

    pub fn num_cities(&self) -> usize {
        self.num_cities
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.num_cities).all(|i| {
            (i + 1..self.num_cities).all(|j| {
                self.costs[i * self.num_cities + j] == self.costs[j * self.num_cities + i]
            })
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cost]> {
        // `chunks` panics on zero, an empty matrix simply has no rows
        self.costs.chunks(self.num_cities.max(1))
    }

    /// Cost of visiting `route` in order, starting from the depot. No return leg.
    pub fn route_cost(&self, route: &[CityIdx]) -> Cost {
        let mut previous = DEPOT;
        let mut cost: Cost = 0;

        for &city in route {
            cost = cost.saturating_add(self.travel_cost(previous, city));
            previous = city;
        }

        cost
    }
}
