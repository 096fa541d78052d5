use std::path::Path;

use anyhow::Context;

use crate::problem::delivery_problem::DeliveryProblem;

pub trait DatasetParser {
    fn parse_str(&self, content: &str) -> Result<DeliveryProblem, anyhow::Error>;

    fn parse<P: AsRef<Path>>(&self, file: P) -> Result<DeliveryProblem, anyhow::Error> {
        let path = file.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        self.parse_str(&content)
            .with_context(|| format!("Invalid input file {}", path.display()))
    }
}
