use serde::Serialize;

use crate::solver::solver_error::SolverError;

use super::truck::{Truck, TruckIdx};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    trucks: Vec<Truck>,
}

impl Fleet {
    pub fn new(trucks: Vec<Truck>) -> Self {
        Fleet { trucks }
    }

    /// Fleet of trucks labelled `truck_1`, `truck_2`, ... with the given capacities.
    pub fn from_capacities(capacities: &[usize]) -> Self {
        Fleet {
            trucks: capacities
                .iter()
                .enumerate()
                .map(|(index, &capacity)| Truck::new(format!("truck_{}", index + 1), capacity))
                .collect(),
        }
    }

    #[inline]
    pub fn trucks(&self) -> &[Truck] {
        &self.trucks
    }

    #[inline]
    pub fn truck(&self, truck_id: TruckIdx) -> &Truck {
        &self.trucks[truck_id]
    }

    pub fn trucks_iter(&self) -> impl Iterator<Item = (TruckIdx, &Truck)> {
        self.trucks
            .iter()
            .enumerate()
            .map(|(index, truck)| (TruckIdx::new(index), truck))
    }

    pub fn len(&self) -> usize {
        self.trucks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trucks.is_empty()
    }

    pub fn total_capacity(&self) -> usize {
        self.trucks
            .iter()
            .fold(0usize, |total, truck| total.saturating_add(truck.capacity()))
    }

    /// Checks the fleet can take every one of `deliveries` cities.
    pub fn ensure_can_serve(&self, deliveries: usize) -> Result<(), SolverError> {
        if self.is_empty() {
            return Err(SolverError::EmptyFleet);
        }

        let capacity = self.total_capacity();
        if capacity < deliveries {
            return Err(SolverError::InfeasibleFleet {
                capacity,
                deliveries,
            });
        }

        Ok(())
    }
}
