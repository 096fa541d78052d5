use rand::{SeedableRng, rngs::SmallRng};

use crate::{
    problem::{
        city_graph::CityGraph, cost_matrix::CostMatrix, delivery_problem::DeliveryProblem,
        fleet::Fleet,
    },
    solver::{assignment::Assignment, construction::random_assignment::random_assignment},
};

pub fn create_graph(rows: &[&[&str]]) -> CityGraph {
    CityGraph::from_str_rows::<&[&str], &str>(rows).unwrap()
}

pub fn create_costs(rows: Vec<Vec<u64>>) -> CostMatrix {
    CostMatrix::from_rows(rows).unwrap()
}

/// Cities sitting on a line at positions `0..num_cities`, the cost being their distance.
pub fn create_line_costs(num_cities: usize) -> CostMatrix {
    CostMatrix::from_rows(
        (0..num_cities)
            .map(|from| {
                (0..num_cities)
                    .map(|to| from.abs_diff(to) as u64)
                    .collect()
            })
            .collect(),
    ).unwrap()
}

pub fn create_line_problem(num_cities: usize, capacities: &[usize]) -> DeliveryProblem {
    DeliveryProblem::from_cost_matrix(
        create_line_costs(num_cities),
        Fleet::from_capacities(capacities),
    )
    .unwrap()
}

pub fn shuffled_assignment(capacities: &[usize], num_cities: usize, seed: u64) -> Assignment {
    random_assignment(
        &Fleet::from_capacities(capacities),
        num_cities,
        &mut SmallRng::seed_from_u64(seed),
    )
    .unwrap()
}
