pub mod assignment;
pub mod construction;
pub mod ls;
pub mod solution;
#[allow(clippy::module_inception)]
pub mod solver;
pub mod solver_error;
pub mod solver_params;
