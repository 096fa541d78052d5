pub mod random_assignment;
