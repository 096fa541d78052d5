use thiserror::Error;

use super::{
    city::CityIdx,
    cost_matrix::{Cost, CostMatrix, UNREACHABLE},
};

/// Marker used in input files for a pair of cities without a direct road.
pub const UNKNOWN_EDGE: &str = "N";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("City graph has no rows")]
    Empty,

    #[error("Row {row} has {found} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid edge cost {value:?} at row {row}, column {column}")]
    UnresolvableGraphEntry {
        row: usize,
        column: usize,
        value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphEntry {
    Known(Cost),
    Unknown,
}

impl GraphEntry {
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value == UNKNOWN_EDGE {
            return Some(GraphEntry::Unknown);
        }

        value.parse::<Cost>().ok().map(GraphEntry::Known)
    }

    /// Cost of traversing this edge during shortest path search. Unknown and zero-cost
    /// entries are not roads.
    #[inline]
    pub fn traversal_cost(&self) -> Option<Cost> {
        match *self {
            GraphEntry::Known(cost) if cost > 0 => Some(cost),
            _ => None,
        }
    }
}

/// Partially specified city adjacency matrix, as read from the input.
///
/// The upper triangle (`from <= to`) is authoritative, [`CityGraph::entry`] mirrors it
/// for the lower one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityGraph {
    entries: Vec<GraphEntry>,
    num_cities: usize,
}

impl CityGraph {
    pub fn new(rows: Vec<Vec<GraphEntry>>) -> Result<Self, GraphError> {
        let num_cities = rows.len();
        if num_cities == 0 {
            return Err(GraphError::Empty);
        }

        let mut entries = Vec::with_capacity(num_cities * num_cities);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != num_cities {
                return Err(GraphError::NotSquare {
                    row,
                    expected: num_cities,
                    found: values.len(),
                });
            }

            entries.extend(values);
        }

        Ok(CityGraph {
            entries,
            num_cities,
        })
    }

    /// Builds a graph from textual entries, either [`UNKNOWN_EDGE`] or a non-negative integer.
    pub fn from_str_rows<R, S>(rows: &[R]) -> Result<Self, GraphError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let parsed = rows
            .iter()
            .enumerate()
            .map(|(row, values)| {
                values
                    .as_ref()
                    .iter()
                    .enumerate()
                    .map(|(column, value)| {
                        GraphEntry::parse(value.as_ref()).ok_or_else(|| {
                            GraphError::UnresolvableGraphEntry {
                                row,
                                column,
                                value: value.as_ref().to_owned(),
                            }
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        CityGraph::new(parsed)
    }

    /// Turns a resolved matrix back into a graph, unreachable pairs becoming unknown edges.
    pub fn from_cost_matrix(costs: &CostMatrix) -> Self {
        let num_cities = costs.num_cities();
        let entries = costs
            .rows()
            .flat_map(|row| row.iter())
            .map(|&cost| {
                if cost == UNREACHABLE {
                    GraphEntry::Unknown
                } else {
                    GraphEntry::Known(cost)
                }
            })
            .collect();

        CityGraph {
            entries,
            num_cities,
        }
    }

    #[inline(always)]
    fn index(&self, from: usize, to: usize) -> usize {
        from * self.num_cities + to
    }

    pub fn num_cities(&self) -> usize {
        self.num_cities
    }

    pub fn num_deliveries(&self) -> usize {
        self.num_cities.saturating_sub(1)
    }

    /// Entry for the unordered pair `{a, b}`, read from the upper triangle.
    #[inline]
    pub fn entry(&self, a: CityIdx, b: CityIdx) -> GraphEntry {
        let (from, to) = if a <= b { (a, b) } else { (b, a) };
        self.entries[self.index(from.get(), to.get())]
    }

    /// Cities reachable from `city` through a single usable road, with the road's cost.
    pub fn neighbours(&self, city: CityIdx) -> impl Iterator<Item = (CityIdx, Cost)> + '_ {
        (0..self.num_cities)
            .map(CityIdx::new)
            .filter(move |&other| other != city)
            .filter_map(move |other| {
                self.entry(city, other)
                    .traversal_cost()
                    .map(|cost| (other, cost))
            })
    }

    pub fn has_unknown_entries(&self) -> bool {
        self.entries.contains(&GraphEntry::Unknown)
    }
}
