use serde::Serialize;

use crate::{
    problem::{city::CityIdx, cost_matrix::Cost, fleet::Fleet},
    solver::solution::Solution,
};

/// External name of a city: `1 -> a`, `2 -> b`, ... `26 -> z`, `27 -> aa`. The depot is `0`.
pub fn city_name(city: CityIdx) -> String {
    let mut remaining = city.get();
    if remaining == 0 {
        return String::from("0");
    }

    let mut letters = Vec::new();
    while remaining > 0 {
        remaining -= 1;
        letters.push(b'a' + (remaining % 26) as u8);
        remaining /= 26;
    }

    letters.iter().rev().map(|&letter| letter as char).collect()
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TruckPlan {
    pub truck: String,
    pub cities: Vec<String>,
}

/// Delivery plan with city names in place of indices, ready to be written out.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PlanReport {
    pub trucks: Vec<TruckPlan>,
    /// `None` when some route has no path.
    pub cost: Option<Cost>,
}

impl PlanReport {
    pub fn new(fleet: &Fleet, solution: &Solution) -> Self {
        let trucks = fleet
            .trucks_iter()
            .map(|(truck_id, truck)| TruckPlan {
                truck: truck.external_id().to_owned(),
                cities: solution
                    .assignment()
                    .route(truck_id)
                    .iter()
                    .map(|&city| city_name(city))
                    .collect(),
            })
            .collect();

        PlanReport {
            trucks,
            cost: solution.is_reachable().then_some(solution.cost()),
        }
    }

    /// One `<truck>#<city>,<city>,...` line per truck, then the total cost on its own line.
    pub fn to_text(&self) -> String {
        let mut text = String::new();

        for plan in &self.trucks {
            text.push_str(&plan.truck);
            text.push('#');
            text.push_str(&plan.cities.join(","));
            text.push('\n');
        }

        match self.cost {
            Some(cost) => text.push_str(&cost.to_string()),
            None => text.push_str("inf"),
        }

        text
    }
}
