use tracing::{debug, instrument};

use super::{
    city::CityIdx,
    city_graph::{CityGraph, GraphEntry},
    cost_matrix::{Cost, CostMatrix, UNREACHABLE},
};

/// Converts a partially specified graph into a complete cost matrix.
///
/// Known entries are copied as they are (a known `0` stays `0` even though it is never
/// used as a road). Every unknown pair gets the cost of the cheapest path between its
/// two cities, or [`UNREACHABLE`] when no such path exists. The diagonal is always `0`.
///
/// Single source searches are run lazily and shared by every unknown pair with the
/// same source city.
#[instrument(skip_all, level = "debug", fields(num_cities = graph.num_cities()))]
pub fn resolve(graph: &CityGraph) -> CostMatrix {
    let num_cities = graph.num_cities();
    let mut costs = vec![0; num_cities * num_cities];
    let mut searches: Vec<Option<Vec<Cost>>> = vec![None; num_cities];
    let mut resolved_pairs = 0;

    for from in 0..num_cities {
        for to in from + 1..num_cities {
            let (source, target) = (CityIdx::new(from), CityIdx::new(to));

            let cost = match graph.entry(source, target) {
                GraphEntry::Known(cost) => cost,
                GraphEntry::Unknown => {
                    resolved_pairs += 1;
                    searches[from].get_or_insert_with(|| shortest_path_costs(graph, source))[to]
                }
            };

            costs[from * num_cities + to] = cost;
            costs[to * num_cities + from] = cost;
        }
    }

    debug!(
        resolved_pairs,
        searches = searches.iter().filter(|search| search.is_some()).count(),
        "resolved unknown edges"
    );

    CostMatrix::from_flat(costs, num_cities)
}

/// Dijkstra over the usable roads of `graph`, returning the cheapest cost from `source`
/// to every city. Cities outside the source's component are left at [`UNREACHABLE`].
///
/// Uses the dense `O(n^2)` formulation: the input is an adjacency matrix, so every
/// settled city scans a full row anyway.
pub fn shortest_path_costs(graph: &CityGraph, source: CityIdx) -> Vec<Cost> {
    let num_cities = graph.num_cities();
    let mut visited = vec![false; num_cities];
    let mut distance = vec![UNREACHABLE; num_cities];
    distance[source.get()] = 0;

    for _ in 0..num_cities {
        let closest = (0..num_cities)
            .filter(|&city| !visited[city] && distance[city] != UNREACHABLE)
            .min_by_key(|&city| distance[city]);

        // Everything left belongs to another component
        let Some(closest) = closest else {
            break;
        };

        visited[closest] = true;

        for (neighbour, edge_cost) in graph.neighbours(CityIdx::new(closest)) {
            if visited[neighbour.get()] {
                continue;
            }

            let candidate = distance[closest].saturating_add(edge_cost);
            if candidate < distance[neighbour.get()] {
                distance[neighbour.get()] = candidate;
            }
        }
    }

    distance
}
