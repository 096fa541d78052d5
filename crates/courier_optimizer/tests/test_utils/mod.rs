#![allow(dead_code)]

use courier_optimizer::{
    parsers::{city_map::CityMapParser, parser::DatasetParser},
    problem::delivery_problem::DeliveryProblem,
};
use rand::RngCore;

/// Replays `data` as the generator's 64-bit outputs, wrapping around at the end.
pub struct MockRng {
    data: Vec<u64>,
    index: usize,
}

impl MockRng {
    pub fn new(data: Vec<u64>) -> Self {
        MockRng { data, index: 0 }
    }
}

impl RngCore for MockRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let value = self.data[self.index];
        self.index = (self.index + 1) % self.data.len();
        value
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

pub fn problem_from_input(input: &str) -> DeliveryProblem {
    CityMapParser.parse_str(input).unwrap()
}

/// Ring of `num_cities` cities where only neighbours on the ring are connected.
pub fn ring_input(num_cities: usize, capacities: &[usize]) -> String {
    let mut input = String::new();

    for from in 0..num_cities {
        let row = (0..num_cities)
            .map(|to| {
                let distance = from.abs_diff(to);
                if from == to {
                    String::from("0")
                } else if distance == 1 || distance == num_cities - 1 {
                    ((from + to) % 7 + 1).to_string()
                } else {
                    String::from("N")
                }
            })
            .collect::<Vec<_>>();

        input.push_str(&row.join(","));
        input.push('\n');
    }

    for (index, capacity) in capacities.iter().enumerate() {
        input.push_str(&format!("truck_{}#{}\n", index + 1, capacity));
    }

    input
}
