use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use comfy_table::Table;
use courier_optimizer::{
    parsers::city_map,
    problem::{
        city::CityIdx,
        cost_matrix::{CostMatrix, UNREACHABLE},
        resolver,
    },
    report::city_name,
};

#[derive(Args)]
pub struct ResolveArgs {
    /// The city map to resolve
    #[arg(short = 'i', long)]
    input: PathBuf,
}

pub fn run(args: ResolveArgs) -> Result<(), anyhow::Error> {
    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let instance = city_map::parse(&content)?;

    let costs = resolver::resolve(&instance.graph);

    println!("{}", cost_table(&costs));

    Ok(())
}

fn cost_table(costs: &CostMatrix) -> Table {
    let names = (0..costs.num_cities())
        .map(|city| city_name(CityIdx::new(city)))
        .collect::<Vec<_>>();

    let mut table = Table::new();
    table.set_header(std::iter::once(String::new()).chain(names.iter().cloned()));

    for (name, row) in names.iter().zip(costs.rows()) {
        table.add_row(
            std::iter::once(name.clone()).chain(row.iter().map(|&cost| {
                if cost == UNREACHABLE {
                    String::from("inf")
                } else {
                    cost.to_string()
                }
            })),
        );
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_table_marks_unreachable() {
        let costs = CostMatrix::from_rows(vec![
            vec![0, 3, UNREACHABLE],
            vec![3, 0, UNREACHABLE],
            vec![UNREACHABLE, UNREACHABLE, 0],
        ])
        .unwrap();

        let table = cost_table(&costs).to_string();

        assert!(table.contains("inf"));
        assert!(table.contains('b'));
        assert_eq!(table.matches("inf").count(), 4);
    }
}
