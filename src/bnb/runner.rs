//! Best-first branch & bound search loop.

use super::config::RouteConfig;
use super::types::{RouteProblem, RouteSolution, SearchNode};
use crate::frontier::MinFrontier;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Executes the branch & bound route search.
pub struct RouteRunner;

impl RouteRunner {
    /// Finds the minimum-cost route visiting all stops exactly once,
    /// starting at stop 0, under the configured ceilings.
    ///
    /// An instance where no route satisfies both ceilings yields an
    /// empty solution with `feasible = false` plus the explored and
    /// pruned counters (a normal outcome, not an error).
    pub fn run(problem: &RouteProblem, config: &RouteConfig) -> Result<RouteSolution, String> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the search with an optional cancellation token, polled at
    /// each node expansion.
    pub fn run_with_cancel(
        problem: &RouteProblem,
        config: &RouteConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<RouteSolution, String> {
        config.validate()?;
        problem.validate()?;

        let n = problem.stops.len();
        if n == 0 {
            return Ok(RouteSolution::empty());
        }

        let mut best: Option<SearchNode> = None;
        let mut best_cost = f64::INFINITY;
        let mut nodes_explored = 0usize;
        let mut nodes_pruned = 0usize;
        let mut cancelled = false;

        let root = SearchNode {
            path: vec![0],
            cost: 0.0,
            distance: 0.0,
            priority: problem.stops[0].priority,
            lower_bound: lower_bound(problem, &[0]),
        };

        let mut frontier = MinFrontier::new();
        frontier.push(root.lower_bound, root);

        while let Some((_, node)) = frontier.pop() {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if config.max_nodes > 0 && nodes_explored + nodes_pruned >= config.max_nodes {
                break;
            }

            // Prune: bound already beaten by the incumbent, or a
            // ceiling breached
            if node.cost + node.lower_bound >= best_cost
                || node.cost > config.max_cost
                || node.distance > config.max_distance
            {
                nodes_pruned += 1;
                continue;
            }

            nodes_explored += 1;

            if node.path.len() == n {
                if let Some(complete) = complete_route(problem, config, node) {
                    if complete.cost < best_cost {
                        best_cost = complete.cost;
                        best = Some(complete);
                    }
                }
                continue;
            }

            // Branch: one child per unvisited stop with a direct route
            // from the current tail
            let last = *node.path.last().unwrap_or(&0);
            for next in 0..n {
                if node.path.contains(&next) {
                    continue;
                }
                let Some(step_cost) = problem.costs.get(last, next) else {
                    continue;
                };
                let Some(step_distance) = problem.distance(last, next) else {
                    continue;
                };

                let mut path = node.path.clone();
                path.push(next);
                let bound = lower_bound(problem, &path);

                let child = SearchNode {
                    cost: node.cost + step_cost,
                    distance: node.distance + step_distance,
                    priority: node.priority + problem.stops[next].priority,
                    lower_bound: bound,
                    path,
                };
                frontier.push(child.cost + child.lower_bound, child);
            }
        }

        let mut solution = match best {
            Some(node) => {
                let names = node
                    .path
                    .iter()
                    .map(|&i| problem.stops[i].name.clone())
                    .collect();
                RouteSolution {
                    names,
                    total_cost: node.cost,
                    total_distance: node.distance,
                    total_priority: node.priority,
                    feasible: true,
                    nodes_explored: 0,
                    nodes_pruned: 0,
                    cancelled: false,
                    route: node.path,
                }
            }
            None => RouteSolution::empty(),
        };
        solution.nodes_explored = nodes_explored;
        solution.nodes_pruned = nodes_pruned;
        solution.cancelled = cancelled;
        Ok(solution)
    }
}

/// Finalizes a node whose path covers all stops: appends the return
/// leg when a closed tour is requested and re-checks both ceilings.
///
/// Returns `None` when the return leg is missing or a ceiling is
/// breached by the completed route.
fn complete_route(
    problem: &RouteProblem,
    config: &RouteConfig,
    node: SearchNode,
) -> Option<SearchNode> {
    let mut node = node;

    if config.return_to_origin && problem.stops.len() > 1 {
        let last = *node.path.last()?;
        let return_cost = problem.costs.get(last, 0)?;
        let return_distance = problem.distance(last, 0)?;
        node.cost += return_cost;
        node.distance += return_distance;
        node.path.push(0);
    }

    if node.cost > config.max_cost || node.distance > config.max_distance {
        return None;
    }
    node.lower_bound = 0.0;
    Some(node)
}

/// Nearest-visited-neighbor lower bound: for each unvisited stop, the
/// cheapest edge into it from any visited stop. Unvisited stops with
/// no such edge contribute 0 (a safe underestimate — they may become
/// reachable once more stops are visited).
fn lower_bound(problem: &RouteProblem, path: &[usize]) -> f64 {
    let n = problem.stops.len();
    let mut bound = 0.0;

    for target in 0..n {
        if path.contains(&target) {
            continue;
        }
        let cheapest = path
            .iter()
            .filter_map(|&visited| problem.costs.get(visited, target))
            .min_by(f64::total_cmp);
        if let Some(cost) = cheapest {
            bound += cost;
        }
    }
    bound
}
