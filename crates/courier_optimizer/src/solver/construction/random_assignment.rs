use rand::{Rng, seq::SliceRandom};
use tracing::trace;

use crate::{
    problem::{city::delivery_cities, fleet::Fleet},
    solver::{assignment::Assignment, solver_error::SolverError},
};

/// Random feasible starting point for a hill climb.
///
/// The delivery cities are shuffled, then handed out in truck order, each truck taking
/// cities until it is full or none are left. Any partition that respects the
/// capacities in truck order can come out of it.
pub fn random_assignment<R: Rng>(
    fleet: &Fleet,
    num_cities: usize,
    rng: &mut R,
) -> Result<Assignment, SolverError> {
    let deliveries = num_cities.saturating_sub(1);
    fleet.ensure_can_serve(deliveries)?;

    let mut cities = delivery_cities(num_cities).collect::<Vec<_>>();
    cities.shuffle(rng);

    let routes = fleet
        .trucks()
        .iter()
        .map(|truck| {
            let take = truck.capacity().min(cities.len());
            cities.split_off(cities.len() - take)
        })
        .collect::<Vec<_>>();

    trace!(?routes, "random assignment");

    Ok(Assignment::new(routes))
}
