//! Route optimization problem and solution types.

use crate::model::{CostMatrix, Stop, MAX_STOPS};

/// A route optimization instance: stops to visit plus the travel
/// matrices between them. The route always starts at stop 0.
///
/// Shaped like the sequence-planning instance but owned by this
/// component; the two searches share nothing beyond the leaf
/// utilities and the request-local data model.
#[derive(Debug, Clone)]
pub struct RouteProblem {
    /// Stops to visit, indexed `0..n`. Index 0 is the origin.
    pub stops: Vec<Stop>,

    /// Travel cost between stops. `None` entries mean no direct route.
    pub costs: CostMatrix,

    /// Travel distance between stops, if tracked separately.
    pub distances: Option<CostMatrix>,
}

impl RouteProblem {
    pub fn new(stops: Vec<Stop>, costs: CostMatrix) -> Self {
        Self {
            stops,
            costs,
            distances: None,
        }
    }

    /// Attaches a separate distance matrix.
    pub fn with_distances(mut self, distances: CostMatrix) -> Self {
        self.distances = Some(distances);
        self
    }

    /// Distance of the direct move `from -> to`, falling back to the
    /// cost matrix when no distance matrix is attached.
    pub fn distance(&self, from: usize, to: usize) -> Option<f64> {
        match &self.distances {
            Some(matrix) => matrix.get(from, to),
            None => self.costs.get(from, to),
        }
    }

    /// Rejects inconsistent instances before any search runs.
    pub fn validate(&self) -> Result<(), String> {
        if self.costs.len() != self.stops.len() {
            return Err(format!(
                "cost matrix is {}x{} but there are {} stops",
                self.costs.len(),
                self.costs.len(),
                self.stops.len()
            ));
        }
        if let Some(distances) = &self.distances {
            if distances.len() != self.costs.len() {
                return Err(format!(
                    "distance matrix is {}x{} but cost matrix is {}x{}",
                    distances.len(),
                    distances.len(),
                    self.costs.len(),
                    self.costs.len()
                ));
            }
        }
        if self.stops.len() > MAX_STOPS {
            return Err(format!(
                "{} stops exceeds the search limit of {MAX_STOPS}",
                self.stops.len()
            ));
        }
        for stop in &self.stops {
            if !stop.priority.is_finite() || stop.priority < 0.0 {
                return Err(format!(
                    "stop '{}' priority must be finite and non-negative, got {}",
                    stop.name, stop.priority
                ));
            }
        }
        Ok(())
    }
}

/// A node in the branch & bound search tree.
///
/// Immutable once pushed to the frontier; branching creates fresh
/// child nodes rather than mutating the parent.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    /// Partial route, starting at stop 0.
    pub path: Vec<usize>,

    /// Accumulated travel cost along `path`.
    pub cost: f64,

    /// Accumulated travel distance along `path`.
    pub distance: f64,

    /// Accumulated priority of visited stops.
    pub priority: f64,

    /// Lower-bound estimate of the cost still needed to visit the
    /// remaining stops.
    pub lower_bound: f64,
}

/// Best route found by the branch & bound search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSolution {
    /// Stop indices in visiting order (origin repeated at the end
    /// when return-to-origin is requested); empty when infeasible.
    pub route: Vec<usize>,

    /// Stop names in visiting order, for reporting.
    pub names: Vec<String>,

    /// Total travel cost of the route.
    pub total_cost: f64,

    /// Total travel distance of the route.
    pub total_distance: f64,

    /// Sum of visited stop priorities.
    pub total_priority: f64,

    /// Whether a complete route satisfying both ceilings was found.
    pub feasible: bool,

    /// Nodes popped and expanded (or completed).
    pub nodes_explored: usize,

    /// Nodes discarded by the bound or ceiling prunes.
    pub nodes_pruned: usize,

    /// Whether the search was cancelled externally.
    pub cancelled: bool,
}

impl RouteSolution {
    pub(crate) fn empty() -> Self {
        Self {
            route: Vec::new(),
            names: Vec::new(),
            total_cost: 0.0,
            total_distance: 0.0,
            total_priority: 0.0,
            feasible: false,
            nodes_explored: 0,
            nodes_pruned: 0,
            cancelled: false,
        }
    }

    /// Fraction of visited nodes eliminated by pruning; 0.0 when no
    /// node was visited.
    pub fn efficiency(&self) -> f64 {
        let visited = self.nodes_explored + self.nodes_pruned;
        if visited == 0 {
            0.0
        } else {
            self.nodes_pruned as f64 / visited as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dimension_mismatch() {
        let problem = RouteProblem::new(vec![Stop::new("a", 1.0)], CostMatrix::new(2));
        assert!(problem.validate().is_err());
    }

    #[test]
    fn test_validate_too_many_stops() {
        let n = MAX_STOPS + 1;
        let stops = (0..n).map(|i| Stop::new(format!("s{i}"), 0.0)).collect();
        let problem = RouteProblem::new(stops, CostMatrix::new(n));
        assert!(problem.validate().is_err());
    }

    #[test]
    fn test_efficiency_ratio() {
        let mut solution = RouteSolution::empty();
        assert_eq!(solution.efficiency(), 0.0);
        solution.nodes_explored = 3;
        solution.nodes_pruned = 1;
        assert!((solution.efficiency() - 0.25).abs() < 1e-9);
    }
}
