pub mod hill_climb;
pub mod swap;
