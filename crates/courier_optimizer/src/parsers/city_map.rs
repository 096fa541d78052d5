use anyhow::{anyhow, bail};

use crate::{
    parsers::parser::DatasetParser,
    problem::{
        city_graph::CityGraph, delivery_problem::DeliveryProblem, fleet::Fleet, truck::Truck,
    },
};

/// Reads the courier input format:
///
/// ```text
/// 0,5,3        <- n comma separated entries per row, `N` for a missing road
/// 5,0,N
/// 3,N,0
/// truck_1#2    <- one truck per line after the matrix, `<id>#<capacity>`
/// ```
pub struct CityMapParser;

impl DatasetParser for CityMapParser {
    fn parse_str(&self, content: &str) -> Result<DeliveryProblem, anyhow::Error> {
        let instance = parse(content)?;

        Ok(DeliveryProblem::new(&instance.graph, instance.fleet)?)
    }
}

#[derive(Debug, Clone)]
pub struct CityMapInstance {
    pub graph: CityGraph,
    pub fleet: Fleet,
}

pub fn parse(text: &str) -> Result<CityMapInstance, anyhow::Error> {
    let lines = text
        .lines()
        .enumerate()
        .map(|(number, line)| (number + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect::<Vec<_>>();

    let Some(&(_, first_line)) = lines.first() else {
        bail!("Input is empty");
    };

    let num_cities = first_line.split(',').count();
    if lines.len() < num_cities {
        bail!("Expected {} matrix rows, found {}", num_cities, lines.len());
    }

    let (matrix_lines, truck_lines) = lines.split_at(num_cities);

    let rows = matrix_lines
        .iter()
        .map(|(_, line)| line.split(',').collect::<Vec<_>>())
        .collect::<Vec<_>>();
    let graph = CityGraph::from_str_rows(&rows)?;

    if truck_lines.is_empty() {
        bail!("Missing trucks after the city matrix");
    }

    let trucks = truck_lines
        .iter()
        .enumerate()
        .map(|(index, &(number, line))| {
            parse_truck(line, index).map_err(|error| anyhow!("Line {number}: {error}"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CityMapInstance {
        graph,
        fleet: Fleet::new(trucks),
    })
}

/// `truck_3#4` -> truck `truck_3` with capacity 4. The capacity follows the last `#`.
fn parse_truck(line: &str, index: usize) -> Result<Truck, anyhow::Error> {
    let (id, capacity) = line
        .rsplit_once('#')
        .ok_or_else(|| anyhow!("Invalid truck {line:?}, expected <id>#<capacity>"))?;

    let capacity = capacity
        .trim()
        .parse::<usize>()
        .map_err(|_| anyhow!("Invalid truck capacity: {}", capacity.trim()))?;

    let id = id.trim();
    let id = if id.is_empty() {
        format!("truck_{}", index + 1)
    } else {
        id.to_owned()
    };

    Ok(Truck::new(id, capacity))
}
