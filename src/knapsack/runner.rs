//! Knapsack DP solvers and the greedy comparison.

use super::types::{AllocationSolution, GreedyComparison, Item};

/// 0/1 knapsack solvers.
pub struct KnapsackSolver;

impl KnapsackSolver {
    /// Standard DP solver. `O(n x budget)` time and space.
    ///
    /// Builds the full `dp[i][w]` table, then reconstructs the
    /// selected set by walking backward from `dp[n][budget]`: item
    /// `i` was taken exactly when `dp[i][w] != dp[i-1][w]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use transopt::knapsack::{Item, KnapsackSolver};
    ///
    /// let items = [Item::new("A", 100, 200), Item::new("B", 100, 150)];
    /// let solution = KnapsackSolver::solve(&items, 100);
    /// assert_eq!(solution.selected, vec!["A"]);
    /// assert_eq!(solution.total_benefit, 200);
    /// ```
    pub fn solve(items: &[Item], budget: usize) -> AllocationSolution {
        let n = items.len();
        if n == 0 {
            return AllocationSolution::empty(budget);
        }

        let table = dp_table_internal(items, budget);

        // Backward reconstruction
        let mut selected_idx = Vec::new();
        let mut w = budget;
        for i in (1..=n).rev() {
            if table[i][w] != table[i - 1][w] {
                selected_idx.push(i - 1);
                w -= items[i - 1].cost;
            }
        }
        selected_idx.reverse();

        build_solution(items, &selected_idx, budget)
    }

    /// Space-optimized DP solver: a single `budget + 1` array scanned
    /// high-to-low per item (so an item is never reused within one
    /// pass), plus a per-item selection table kept purely for
    /// backward reconstruction.
    ///
    /// Produces the same `total_cost` and `total_benefit` as
    /// [`KnapsackSolver::solve`] for every input.
    pub fn solve_space_optimized(items: &[Item], budget: usize) -> AllocationSolution {
        let n = items.len();
        if n == 0 {
            return AllocationSolution::empty(budget);
        }

        let mut dp = vec![0u64; budget + 1];
        let mut taken = vec![vec![false; budget + 1]; n];

        for (i, item) in items.iter().enumerate() {
            if item.cost > budget {
                continue; // structurally excluded
            }
            for w in (item.cost..=budget).rev() {
                let with_item = dp[w - item.cost] + item.benefit;
                if with_item > dp[w] {
                    dp[w] = with_item;
                    taken[i][w] = true;
                }
            }
        }

        let mut selected_idx = Vec::new();
        let mut w = budget;
        for i in (0..n).rev() {
            if taken[i][w] {
                selected_idx.push(i);
                w -= items[i].cost;
            }
        }
        selected_idx.reverse();

        build_solution(items, &selected_idx, budget)
    }

    /// Full DP table, for callers that want to show how the optimum
    /// is built up. `table[i][w]` is the best benefit using the first
    /// `i` items within budget `w`.
    pub fn dp_table(items: &[Item], budget: usize) -> Vec<Vec<u64>> {
        dp_table_internal(items, budget)
    }

    /// Runs the exact DP solver and the greedy benefit/cost-ratio
    /// heuristic side by side.
    ///
    /// The greedy pass sorts items by descending ratio (stable: ties
    /// keep input order) and takes whatever still fits. DP benefit is
    /// always greater than or equal to the greedy benefit.
    pub fn compare_with_greedy(items: &[Item], budget: usize) -> GreedyComparison {
        let dp = Self::solve(items, budget);

        let mut by_ratio: Vec<usize> = (0..items.len()).collect();
        by_ratio.sort_by(|&a, &b| items[b].ratio().total_cmp(&items[a].ratio()));

        let mut selected_idx = Vec::new();
        let mut spent = 0usize;
        for &i in &by_ratio {
            if spent + items[i].cost <= budget {
                selected_idx.push(i);
                spent += items[i].cost;
            }
        }
        selected_idx.sort_unstable(); // report in input order
        let greedy = build_solution(items, &selected_idx, budget);

        GreedyComparison {
            benefit_gap: dp.total_benefit - greedy.total_benefit,
            dp,
            greedy,
        }
    }
}

fn dp_table_internal(items: &[Item], budget: usize) -> Vec<Vec<u64>> {
    let n = items.len();
    let mut table = vec![vec![0u64; budget + 1]; n + 1];

    for i in 1..=n {
        let item = &items[i - 1];
        for w in 0..=budget {
            let mut best = table[i - 1][w];
            if item.cost <= w {
                best = best.max(table[i - 1][w - item.cost] + item.benefit);
            }
            table[i][w] = best;
        }
    }
    table
}

fn build_solution(items: &[Item], selected_idx: &[usize], budget: usize) -> AllocationSolution {
    let total_cost: usize = selected_idx.iter().map(|&i| items[i].cost).sum();
    let total_benefit: u64 = selected_idx.iter().map(|&i| items[i].benefit).sum();
    AllocationSolution {
        selected: selected_idx.iter().map(|&i| items[i].name.clone()).collect(),
        total_cost,
        total_benefit,
        budget_used: total_cost,
        budget_remaining: budget - total_cost,
    }
}
