use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Fleet has no trucks")]
    EmptyFleet,

    #[error("Fleet capacity {capacity} cannot cover {deliveries} delivery cities")]
    InfeasibleFleet { capacity: usize, deliveries: usize },

    #[error("Failed to build the search thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use rayon::ThreadPoolBuilder;

    use super::*;

    #[test]
    fn test_thread_pool_error_keeps_source() {
        // the global pool can only be built once
        let _ = ThreadPoolBuilder::new().build_global();
        let build_error = ThreadPoolBuilder::new().build_global().unwrap_err();
        let message = build_error.to_string();

        let error = SolverError::from(build_error);

        assert_eq!(error.to_string(), "Failed to build the search thread pool");
        assert_eq!(error.source().map(|source| source.to_string()), Some(message));
    }
}
