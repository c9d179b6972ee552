//! Allocation items and solutions.

/// An investment item: taken whole or not at all.
///
/// Budget and costs are unsigned, so a negative budget or cost is
/// unrepresentable rather than rejected at run time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Display name (carried into the solution's selected list).
    pub name: String,

    /// Budget consumed when the item is taken.
    pub cost: usize,

    /// Benefit obtained when the item is taken.
    pub benefit: u64,
}

impl Item {
    pub fn new(name: impl Into<String>, cost: usize, benefit: u64) -> Self {
        Self {
            name: name.into(),
            cost,
            benefit,
        }
    }

    /// Benefit per unit of cost; zero-cost items rank above
    /// everything else.
    pub(crate) fn ratio(&self) -> f64 {
        if self.cost == 0 {
            f64::INFINITY
        } else {
            self.benefit as f64 / self.cost as f64
        }
    }
}

/// A selected subset of items with its totals.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocationSolution {
    /// Names of selected items, in input order.
    pub selected: Vec<String>,

    /// Sum of selected item costs.
    pub total_cost: usize,

    /// Sum of selected item benefits.
    pub total_benefit: u64,

    /// Budget consumed (equals `total_cost`).
    pub budget_used: usize,

    /// Budget left over.
    pub budget_remaining: usize,
}

impl AllocationSolution {
    pub(crate) fn empty(budget: usize) -> Self {
        Self {
            selected: Vec::new(),
            total_cost: 0,
            total_benefit: 0,
            budget_used: 0,
            budget_remaining: budget,
        }
    }
}

/// Side-by-side DP and greedy solutions for the same instance.
///
/// `benefit_gap` is the DP advantage; it is never negative.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyComparison {
    /// Exact DP solution.
    pub dp: AllocationSolution,

    /// Greedy benefit/cost-ratio heuristic solution.
    pub greedy: AllocationSolution,

    /// `dp.total_benefit - greedy.total_benefit`.
    pub benefit_gap: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio() {
        assert!((Item::new("a", 4, 8).ratio() - 2.0).abs() < 1e-9);
        assert!(Item::new("free", 0, 1).ratio().is_infinite());
    }

    #[test]
    fn test_empty_solution() {
        let solution = AllocationSolution::empty(30);
        assert!(solution.selected.is_empty());
        assert_eq!(solution.budget_remaining, 30);
        assert_eq!(solution.total_benefit, 0);
    }
}
