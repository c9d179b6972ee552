//! Backtracking search over visiting orders.

use super::config::SequenceConfig;
use super::types::{SequenceProblem, SequenceSolution};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Mutable search state, updated in place and rolled back on
/// backtrack (classic try/undo). Never shared across branches.
struct SearchState {
    sequence: Vec<usize>,
    visited: Vec<bool>,
    cost: f64,
    distance: f64,
    priority: f64,
}

/// Best-so-far accumulator threaded through the recursion by
/// reference, keeping the search reentrant across concurrent calls.
struct Incumbent {
    sequence: Vec<usize>,
    cost: f64,
    distance: f64,
    priority: f64,
    found: bool,
    cancelled: bool,
}

/// Executes the backtracking sequence search.
pub struct SequenceRunner;

impl SequenceRunner {
    /// Finds the visiting order maximizing total priority under the
    /// configured cost and distance ceilings.
    ///
    /// All stops must appear in the sequence; an instance where no
    /// permutation satisfies both ceilings yields an empty solution
    /// with `feasible = false` (a normal outcome, not an error).
    pub fn run(
        problem: &SequenceProblem,
        config: &SequenceConfig,
    ) -> Result<SequenceSolution, String> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the search with an optional cancellation token, polled at
    /// each node expansion.
    pub fn run_with_cancel(
        problem: &SequenceProblem,
        config: &SequenceConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SequenceSolution, String> {
        config.validate()?;
        problem.validate()?;

        let n = problem.stops.len();
        if n == 0 {
            return Ok(SequenceSolution::empty());
        }

        let mut state = SearchState {
            sequence: Vec::with_capacity(n),
            visited: vec![false; n],
            cost: 0.0,
            distance: 0.0,
            priority: 0.0,
        };
        let mut incumbent = Incumbent {
            sequence: Vec::new(),
            cost: 0.0,
            distance: 0.0,
            priority: 0.0,
            found: false,
            cancelled: false,
        };

        backtrack(problem, config, &mut state, &mut incumbent, cancel.as_deref());

        let names = incumbent
            .sequence
            .iter()
            .map(|&i| problem.stops[i].name.clone())
            .collect();

        Ok(SequenceSolution {
            names,
            total_cost: incumbent.cost,
            total_distance: incumbent.distance,
            total_priority: incumbent.priority,
            feasible: incumbent.found,
            cancelled: incumbent.cancelled,
            sequence: incumbent.sequence,
        })
    }
}

fn backtrack(
    problem: &SequenceProblem,
    config: &SequenceConfig,
    state: &mut SearchState,
    incumbent: &mut Incumbent,
    cancel: Option<&AtomicBool>,
) {
    if incumbent.cancelled {
        return;
    }
    if let Some(flag) = cancel {
        if flag.load(Ordering::Relaxed) {
            incumbent.cancelled = true;
            return;
        }
    }

    // Hard prune: either ceiling already exceeded
    if state.cost > config.max_cost || state.distance > config.max_distance {
        return;
    }

    let n = problem.stops.len();

    if state.sequence.len() == n {
        // Accept on strictly greater priority, or equal priority at
        // strictly lower cost
        if !incumbent.found
            || state.priority > incumbent.priority
            || (state.priority == incumbent.priority && state.cost < incumbent.cost)
        {
            incumbent.sequence.clone_from(&state.sequence);
            incumbent.cost = state.cost;
            incumbent.distance = state.distance;
            incumbent.priority = state.priority;
            incumbent.found = true;
        }
        return;
    }

    // Optimistic prune: even collecting every remaining priority
    // cannot beat the incumbent
    if incumbent.found {
        let remaining: f64 = (0..n)
            .filter(|&i| !state.visited[i])
            .map(|i| problem.stops[i].priority)
            .sum();
        if state.priority + remaining < incumbent.priority {
            return;
        }
    }

    for i in 0..n {
        if state.visited[i] {
            continue;
        }

        // The first stop incurs no travel; later stops need a direct
        // route from the current tail (absent entry = no route)
        let (step_cost, step_distance) = match state.sequence.last() {
            None => (0.0, 0.0),
            Some(&last) => {
                let Some(cost) = problem.costs.get(last, i) else {
                    continue;
                };
                let Some(distance) = problem.distance(last, i) else {
                    continue;
                };
                (cost, distance)
            }
        };

        state.sequence.push(i);
        state.visited[i] = true;
        state.cost += step_cost;
        state.distance += step_distance;
        state.priority += problem.stops[i].priority;

        backtrack(problem, config, state, incumbent, cancel);

        state.priority -= problem.stops[i].priority;
        state.distance -= step_distance;
        state.cost -= step_cost;
        state.visited[i] = false;
        state.sequence.pop();

        if incumbent.cancelled {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CostMatrix, Stop};

    /// Three stops, fully connected, asymmetric-free costs:
    /// a-b = 10, b-c = 5, a-c = 8.
    fn three_stops() -> SequenceProblem {
        let stops = vec![
            Stop::new("a", 3.0),
            Stop::new("b", 2.0),
            Stop::new("c", 1.0),
        ];
        let mut costs = CostMatrix::new(3);
        costs.set_symmetric(0, 1, 10.0).unwrap();
        costs.set_symmetric(1, 2, 5.0).unwrap();
        costs.set_symmetric(0, 2, 8.0).unwrap();
        SequenceProblem::new(stops, costs)
    }

    #[test]
    fn test_unbounded_visits_all_at_min_cost() {
        let solution = SequenceRunner::run(&three_stops(), &SequenceConfig::default()).unwrap();
        assert!(solution.feasible);
        assert_eq!(solution.sequence.len(), 3);
        // All permutations collect priority 6; the cheapest orders
        // avoid the 10-cost leg: a-c-b or b-c-a, both cost 13
        assert_eq!(solution.total_priority, 6.0);
        assert!((solution.total_cost - 13.0).abs() < 1e-9);
    }

    #[test]
    fn test_ceiling_infeasible() {
        let config = SequenceConfig::default().with_max_cost(10.0);
        let solution = SequenceRunner::run(&three_stops(), &config).unwrap();
        assert!(!solution.feasible);
        assert!(solution.sequence.is_empty());
        assert_eq!(solution.total_priority, 0.0);
    }

    #[test]
    fn test_distance_ceiling_binds() {
        let config = SequenceConfig::default().with_max_distance(12.0);
        let solution = SequenceRunner::run(&three_stops(), &config).unwrap();
        // Cheapest complete order costs 13 > 12
        assert!(!solution.feasible);
    }

    #[test]
    fn test_feasible_solution_respects_ceilings() {
        let config = SequenceConfig::default()
            .with_max_cost(14.0)
            .with_max_distance(14.0);
        let solution = SequenceRunner::run(&three_stops(), &config).unwrap();
        assert!(solution.feasible);
        assert!(solution.total_cost <= 14.0);
        assert!(solution.total_distance <= 14.0);
    }

    #[test]
    fn test_empty_problem() {
        let problem = SequenceProblem::new(Vec::new(), CostMatrix::new(0));
        let solution = SequenceRunner::run(&problem, &SequenceConfig::default()).unwrap();
        assert!(!solution.feasible);
        assert!(solution.sequence.is_empty());
    }

    #[test]
    fn test_missing_route_skipped() {
        // b unreachable from a and c: only orders starting anywhere
        // but never crossing the missing legs survive
        let stops = vec![Stop::new("a", 1.0), Stop::new("b", 5.0)];
        let costs = CostMatrix::new(2); // no edges at all
        let problem = SequenceProblem::new(stops, costs);
        let solution = SequenceRunner::run(&problem, &SequenceConfig::default()).unwrap();
        assert!(!solution.feasible);
    }

    #[test]
    fn test_separate_distance_matrix() {
        let stops = vec![Stop::new("a", 1.0), Stop::new("b", 1.0)];
        let mut costs = CostMatrix::new(2);
        costs.set_symmetric(0, 1, 10.0).unwrap();
        let mut distances = CostMatrix::new(2);
        distances.set_symmetric(0, 1, 99.0).unwrap();
        let problem = SequenceProblem::new(stops, costs).with_distances(distances);

        let solution = SequenceRunner::run(&problem, &SequenceConfig::default()).unwrap();
        assert!((solution.total_cost - 10.0).abs() < 1e-9);
        assert!((solution.total_distance - 99.0).abs() < 1e-9);

        let config = SequenceConfig::default().with_max_distance(50.0);
        let solution = SequenceRunner::run(&problem, &config).unwrap();
        assert!(!solution.feasible);
    }

    #[test]
    fn test_priority_beats_cost() {
        // Priorities identical => tie broken by lower cost
        let stops = vec![
            Stop::new("a", 1.0),
            Stop::new("b", 1.0),
            Stop::new("c", 1.0),
        ];
        let mut costs = CostMatrix::new(3);
        costs.set_symmetric(0, 1, 1.0).unwrap();
        costs.set_symmetric(1, 2, 1.0).unwrap();
        costs.set_symmetric(0, 2, 100.0).unwrap();
        let problem = SequenceProblem::new(stops, costs);

        let solution = SequenceRunner::run(&problem, &SequenceConfig::default()).unwrap();
        assert!((solution.total_cost - 2.0).abs() < 1e-9);
        let mid = solution.sequence[1];
        assert_eq!(mid, 1, "cheapest orders route through b");
    }

    #[test]
    fn test_names_follow_sequence() {
        let solution = SequenceRunner::run(&three_stops(), &SequenceConfig::default()).unwrap();
        let expected: Vec<String> = solution
            .sequence
            .iter()
            .map(|&i| three_stops().stops[i].name.clone())
            .collect();
        assert_eq!(solution.names, expected);
    }

    #[test]
    fn test_cancellation() {
        let cancel = Arc::new(AtomicBool::new(true));
        let solution =
            SequenceRunner::run_with_cancel(&three_stops(), &SequenceConfig::default(), Some(cancel))
                .unwrap();
        assert!(solution.cancelled);
        assert!(!solution.feasible);
    }

    #[test]
    fn test_cancellation_mid_search() {
        // 13 fully-connected stops: far too many permutations to
        // enumerate, so the search only terminates via the token.
        let n = 13;
        let stops = (0..n).map(|i| Stop::new(format!("s{i}"), 1.0)).collect();
        let mut costs = CostMatrix::new(n);
        for a in 0..n {
            for b in (a + 1)..n {
                costs
                    .set_symmetric(a, b, ((a * 7 + b * 13) % 17 + 1) as f64)
                    .unwrap();
            }
        }
        let problem = SequenceProblem::new(stops, costs);

        let cancel = Arc::new(AtomicBool::new(false));
        let cancel_clone = cancel.clone();
        std::thread::spawn(move || {
            std::thread::sleep(std::time::Duration::from_millis(50));
            cancel_clone.store(true, Ordering::Relaxed);
        });

        let solution =
            SequenceRunner::run_with_cancel(&problem, &SequenceConfig::default(), Some(cancel))
                .unwrap();

        assert!(solution.cancelled, "expected cancelled result");
        // Depth-first reaches complete permutations long before the
        // token flips, so the incumbent found so far is kept
        assert!(solution.feasible);
        assert_eq!(solution.sequence.len(), n);
        assert!((problem.costs.path_cost(&solution.sequence).unwrap() - solution.total_cost).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = SequenceConfig::default().with_max_cost(-5.0);
        assert!(SequenceRunner::run(&three_stops(), &config).is_err());
    }
}
