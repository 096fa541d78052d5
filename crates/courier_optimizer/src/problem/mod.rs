pub mod city;
pub mod city_graph;
pub mod cost_matrix;
pub mod delivery_problem;
pub mod fleet;
pub mod resolver;
pub mod truck;
