/// Default number of swap proposals per hill climb.
pub const DEFAULT_ITERATIONS: usize = 20;

#[derive(Clone, Debug)]
pub struct SolverParams {
    /// Swap proposals tried by each hill climb, whether they are accepted or not.
    pub iterations: usize,

    /// Number of random restarts. `None` uses the number of cities squared.
    pub restarts: Option<usize>,

    pub threads: Threads,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Threads {
    Single,
    Auto,
    Multi(usize),
}

impl Threads {
    pub fn number_of_threads(&self) -> usize {
        match self {
            Threads::Single => 1,
            Threads::Multi(num) => (*num).max(1),
            Threads::Auto => std::thread::available_parallelism().map_or(1, |n| n.get()),
        }
    }
}

impl SolverParams {
    /// Restart budget for a graph of `num_cities` cities. Always runs at least one trial.
    pub fn restarts_for(&self, num_cities: usize) -> usize {
        self.restarts
            .unwrap_or_else(|| num_cities.saturating_mul(num_cities))
            .max(1)
    }
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            restarts: None,
            threads: Threads::Single,
        }
    }
}
