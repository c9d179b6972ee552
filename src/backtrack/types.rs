//! Sequence planning problem and solution types.

use crate::model::{CostMatrix, Stop, MAX_STOPS};

/// A sequence planning instance: stops to visit plus the travel
/// matrices between them.
///
/// The distance matrix is optional; when absent, distances fall back
/// to the cost matrix (the common case where route cost is derived
/// from distance).
#[derive(Debug, Clone)]
pub struct SequenceProblem {
    /// Stops to visit, indexed `0..n`.
    pub stops: Vec<Stop>,

    /// Travel cost between stops. `None` entries mean no direct route.
    pub costs: CostMatrix,

    /// Travel distance between stops, if tracked separately.
    pub distances: Option<CostMatrix>,
}

impl SequenceProblem {
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

/// Best visiting order found by the backtracking search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequenceSolution {
    /// Stop indices in visiting order; empty when nothing feasible.
    pub sequence: Vec<usize>,

    /// Stop names in visiting order, for reporting.
    pub names: Vec<String>,

    /// Total travel cost along the sequence.
    pub total_cost: f64,

    /// Total travel distance along the sequence.
    pub total_distance: f64,

    /// Sum of visited stop priorities.
    pub total_priority: f64,

    /// Whether a complete sequence satisfying both ceilings was found.
    pub feasible: bool,

    /// Whether the search was cancelled externally.
    pub cancelled: bool,
}

impl SequenceSolution {
    pub(crate) fn empty() -> Self {
        Self {
            sequence: Vec::new(),
            names: Vec::new(),
            total_cost: 0.0,
            total_distance: 0.0,
            total_priority: 0.0,
            feasible: false,
            cancelled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dimension_mismatch() {
        let problem = SequenceProblem::new(vec![Stop::new("a", 1.0)], CostMatrix::new(2));
        assert!(problem.validate().is_err());
    }

    #[test]
    fn test_validate_distance_mismatch() {
        let stops = vec![Stop::new("a", 1.0), Stop::new("b", 1.0)];
        let problem =
            SequenceProblem::new(stops, CostMatrix::new(2)).with_distances(CostMatrix::new(3));
        assert!(problem.validate().is_err());
    }

    #[test]
    fn test_validate_too_many_stops() {
        let n = MAX_STOPS + 1;
        let stops = (0..n).map(|i| Stop::new(format!("s{i}"), 0.0)).collect();
        let problem = SequenceProblem::new(stops, CostMatrix::new(n));
        assert!(problem.validate().is_err());
    }

    #[test]
    fn test_validate_bad_priority() {
        let problem = SequenceProblem::new(vec![Stop::new("a", -1.0)], CostMatrix::new(1));
        assert!(problem.validate().is_err());
    }

    #[test]
    fn test_distance_falls_back_to_cost() {
        let stops = vec![Stop::new("a", 1.0), Stop::new("b", 1.0)];
        let mut costs = CostMatrix::new(2);
        costs.set(0, 1, 7.0).unwrap();
        let problem = SequenceProblem::new(stops, costs);
        assert_eq!(problem.distance(0, 1), Some(7.0));
        assert_eq!(problem.distance(1, 0), None);
    }
}
