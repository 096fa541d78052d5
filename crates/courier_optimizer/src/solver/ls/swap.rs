use rand::Rng;

use crate::{problem::city::CityIdx, solver::assignment::Assignment};

/// **City Swap**
///
/// Exchanges two delivery cities, wherever they are.
///
/// ```text
/// SAME ROUTE (visiting order changes):
///    T1: ... -> [first] -> ... -> [second] -> ...
///    T1: ... -> [second] -> ... -> [first] -> ...
///
/// DIFFERENT ROUTES (membership changes, lengths do not):
///    T1: ... -> [first] -> ...      T2: ... -> [second] -> ...
///    T1: ... -> [second] -> ...     T2: ... -> [first] -> ...
/// ```
///
/// Route lengths never change, so a feasible assignment stays feasible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapOperator {
    first: CityIdx,
    second: CityIdx,
}

impl SwapOperator {
    pub fn new(first: CityIdx, second: CityIdx) -> Self {
        if first == second {
            panic!("SwapOperator: 'first' and 'second' cities must be different.");
        }

        SwapOperator { first, second }
    }

    /// Draws two distinct delivery cities uniformly from `1..num_cities`, drawing the
    /// second again until it differs from the first. Returns `None` when there are
    /// fewer than two delivery cities to choose from.
    pub fn random<R: Rng>(num_cities: usize, rng: &mut R) -> Option<Self> {
        if num_cities < 3 {
            return None;
        }

        let first = rng.random_range(1..num_cities);
        let mut second = rng.random_range(1..num_cities);
        while second == first {
            second = rng.random_range(1..num_cities);
        }

        Some(SwapOperator::new(CityIdx::new(first), CityIdx::new(second)))
    }

    pub fn first(&self) -> CityIdx {
        self.first
    }

    pub fn second(&self) -> CityIdx {
        self.second
    }

    /// Routes are scanned in truck order. A route holding both cities swaps their
    /// positions and ends the scan; otherwise each route replaces its first occurrence
    /// of one city with the other. A city found in no route leaves the others untouched.
    pub fn apply(&self, assignment: &mut Assignment) {
        for route in assignment.routes_mut() {
            let first_pos = route.iter().position(|&city| city == self.first);
            let second_pos = route.iter().position(|&city| city == self.second);

            match (first_pos, second_pos) {
                (Some(first_pos), Some(second_pos)) => {
                    route.swap(first_pos, second_pos);
                    break;
                }
                (Some(first_pos), None) => route[first_pos] = self.second,
                (None, Some(second_pos)) => route[second_pos] = self.first,
                (None, None) => {}
            }
        }
    }

    /// Copy of `assignment` with the swap applied. The original is left untouched.
    pub fn candidate(&self, assignment: &Assignment) -> Assignment {
        let mut candidate = assignment.clone();
        self.apply(&mut candidate);
        candidate
    }
}
