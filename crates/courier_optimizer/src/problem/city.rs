use crate::define_index_newtype;

define_index_newtype!(CityIdx);

/// The courier station. Every route implicitly starts here and it is never a delivery target.
pub const DEPOT: CityIdx = CityIdx::new(0);

impl CityIdx {
    pub const fn is_depot(&self) -> bool {
        self.get() == DEPOT.get()
    }
}

/// Iterates over every delivery city of a graph with `num_cities` cities, depot excluded.
pub fn delivery_cities(num_cities: usize) -> impl DoubleEndedIterator<Item = CityIdx> + Clone {
    (1..num_cities).map(CityIdx::new)
}
