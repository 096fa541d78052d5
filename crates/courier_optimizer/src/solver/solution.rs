use serde::Serialize;

use crate::problem::cost_matrix::{Cost, CostMatrix, UNREACHABLE};

use super::assignment::Assignment;

/// An assignment together with its total travel cost.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    cost: Cost,
    assignment: Assignment,
}

impl Solution {
    pub fn evaluate(assignment: Assignment, costs: &CostMatrix) -> Self {
        Solution {
            cost: assignment.total_cost(costs),
            assignment,
        }
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Whether every leg of every route follows an existing path.
    pub fn is_reachable(&self) -> bool {
        self.cost != UNREACHABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate() {
        let costs = CostMatrix::from_rows(vec![
            vec![0, 5, 3],
            vec![5, 0, 8],
            vec![3, 8, 0],
        ])
        .unwrap();

        let solution = Solution::evaluate(Assignment::from_indices(vec![vec![2, 1]]), &costs);

        assert_eq!(solution.cost(), 11);
        assert!(solution.is_reachable());
    }

    #[test]
    fn test_unreachable_solution() {
        let costs = CostMatrix::from_rows(vec![
            vec![0, UNREACHABLE],
            vec![UNREACHABLE, 0],
        ])
        .unwrap();

        let solution = Solution::evaluate(Assignment::from_indices(vec![vec![1]]), &costs);

        assert!(!solution.is_reachable());
    }
}
