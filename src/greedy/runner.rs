//! Greedy allocation passes.

use super::types::{Assignment, FractionalAllocation, Project, UnitDistribution};

/// Executes the greedy allocation heuristics.
pub struct GreedyPlanner;

impl GreedyPlanner {
    /// Splits a divisible budget across projects by descending
    /// benefit/cost ratio.
    ///
    /// Projects are funded fully in ratio order until the budget runs
    /// out; the first project that no longer fits is funded
    /// fractionally and the rest get nothing. For divisible projects
    /// this greedy choice is optimal.
    ///
    /// # Examples
    ///
    /// ```
    /// use transopt::greedy::{GreedyPlanner, Project};
    ///
    /// let projects = [Project::new("a", 50.0, 100.0), Project::new("b", 50.0, 60.0)];
    /// let allocation = GreedyPlanner::fractional_allocation(&projects, 75.0).unwrap();
    /// assert_eq!(allocation.assignments.len(), 2);
    /// assert!((allocation.assignments[1].fraction - 0.5).abs() < 1e-9);
    /// assert!((allocation.total_benefit - 130.0).abs() < 1e-9);
    /// ```
    pub fn fractional_allocation(
        projects: &[Project],
        budget: f64,
    ) -> Result<FractionalAllocation, String> {
        if !budget.is_finite() || budget < 0.0 {
            return Err(format!("budget must be finite and non-negative, got {budget}"));
        }
        for project in projects {
            if !project.cost.is_finite() || project.cost <= 0.0 {
                return Err(format!(
                    "project '{}' cost must be positive, got {}",
                    project.name, project.cost
                ));
            }
            if !project.benefit.is_finite() || project.benefit < 0.0 {
                return Err(format!(
                    "project '{}' benefit must be finite and non-negative, got {}",
                    project.name, project.benefit
                ));
            }
        }

        let mut by_ratio: Vec<&Project> = projects.iter().collect();
        by_ratio.sort_by(|a, b| b.ratio().total_cmp(&a.ratio()));

        let mut assignments = Vec::new();
        let mut remaining = budget;
        let mut total_benefit = 0.0;

        for project in by_ratio {
            if remaining <= 0.0 {
                break;
            }
            let amount = remaining.min(project.cost);
            let fraction = amount / project.cost;
            let benefit = project.benefit * fraction;
            total_benefit += benefit;
            remaining -= amount;
            assignments.push(Assignment {
                name: project.name.clone(),
                amount,
                fraction,
                benefit,
            });
        }

        Ok(FractionalAllocation {
            assignments,
            total_benefit,
            budget_remaining: remaining,
        })
    }

    /// Distributes an integer amount over container sizes, largest
    /// first, using as many of each size as fit.
    ///
    /// Whatever no container covers is reported as `remainder`
    /// (greedy is not guaranteed to minimize it for arbitrary size
    /// sets, matching the dispatch behavior this mirrors).
    pub fn unit_distribution(amount: usize, sizes: &[usize]) -> Result<UnitDistribution, String> {
        if sizes.is_empty() {
            return Err("at least one container size is required".into());
        }
        if sizes.contains(&0) {
            return Err("container sizes must be positive".into());
        }

        let mut ordered: Vec<usize> = sizes.to_vec();
        ordered.sort_unstable_by(|a, b| b.cmp(a));
        ordered.dedup();

        let mut counts = Vec::new();
        let mut remaining = amount;
        for size in ordered {
            let count = remaining / size;
            if count > 0 {
                counts.push((size, count));
                remaining -= count * size;
            }
        }

        Ok(UnitDistribution {
            counts,
            delivered: amount - remaining,
            remainder: remaining,
        })
    }
}
