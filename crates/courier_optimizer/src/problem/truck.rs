use serde::Serialize;

use crate::define_index_newtype;

define_index_newtype!(TruckIdx, Truck);

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Truck {
    external_id: String,
    /// Maximum number of delivery cities the truck may serve.
    capacity: usize,
}

impl Truck {
    pub fn new(external_id: impl Into<String>, capacity: usize) -> Self {
        Truck {
            external_id: external_id.into(),
            capacity,
        }
    }

    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
