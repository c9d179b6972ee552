//! Request-local data model shared by the sequence and route planners.
//!
//! A caller (typically a thin service layer over persisted centers and
//! routes) builds a [`CostMatrix`] and a list of [`Stop`]s per request
//! and hands them to a planner. Nothing here is persisted or shared
//! between invocations.

/// Hard cap on the number of stops accepted by the search planners.
///
/// Backtracking and branch & bound are exponential; recursion depth
/// and frontier growth are bounded by rejecting larger inputs up
/// front instead of letting a pathological request run unbounded.
pub const MAX_STOPS: usize = 20;

/// A location to visit, with its visit priority.
///
/// Mapping a stop index back to a real center identifier is the
/// caller's concern; planners work purely on indices `0..n`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    /// Display name (carried through into solutions for reporting).
    pub name: String,

    /// Visit priority. Higher is more important.
    pub priority: f64,
}

impl Stop {
    pub fn new(name: impl Into<String>, priority: f64) -> Self {
        Self {
            name: name.into(),
            priority,
        }
    }
}

/// Square location-to-location cost matrix.
///
/// May be asymmetric. An absent entry means "no direct edge", not
/// zero cost: planners skip moves over absent entries rather than
/// substituting a default.
///
/// # Examples
///
/// ```
/// use transopt::model::CostMatrix;
///
/// let mut matrix = CostMatrix::new(3);
/// matrix.set(0, 1, 10.0).unwrap();
/// matrix.set_symmetric(1, 2, 4.0).unwrap();
/// assert_eq!(matrix.get(0, 1), Some(10.0));
/// assert_eq!(matrix.get(1, 0), None);
/// assert_eq!(matrix.get(2, 1), Some(4.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostMatrix {
    size: usize,
    costs: Vec<Option<f64>>,
}

impl CostMatrix {
    /// Creates an `n x n` matrix with no edges.
    pub fn new(n: usize) -> Self {
        Self {
            size: n,
            costs: vec![None; n * n],
        }
    }

    /// Matrix dimension (number of locations).
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the matrix has zero locations.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Sets the directed cost `from -> to`.
    ///
    /// Rejects self-loops, out-of-range indices, and negative or
    /// non-finite costs.
    pub fn set(&mut self, from: usize, to: usize, cost: f64) -> Result<(), String> {
        if from >= self.size || to >= self.size {
            return Err(format!(
                "index out of range: ({from}, {to}) in {n}x{n} matrix",
                n = self.size
            ));
        }
        if from == to {
            return Err(format!("self-loop not allowed: ({from}, {to})"));
        }
        if !cost.is_finite() || cost < 0.0 {
            return Err(format!("cost must be finite and non-negative, got {cost}"));
        }
        self.costs[from * self.size + to] = Some(cost);
        Ok(())
    }

    /// Sets the cost in both directions.
    pub fn set_symmetric(&mut self, a: usize, b: usize, cost: f64) -> Result<(), String> {
        self.set(a, b, cost)?;
        self.set(b, a, cost)
    }

    /// Returns the directed cost `from -> to`, or `None` if there is
    /// no direct edge.
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        if from >= self.size || to >= self.size {
            return None;
        }
        self.costs[from * self.size + to]
    }

    /// Total cost of walking `path` edge by edge.
    ///
    /// Returns `None` if any consecutive pair has no direct edge.
    pub fn path_cost(&self, path: &[usize]) -> Option<f64> {
        let mut total = 0.0;
        for pair in path.windows(2) {
            total += self.get(pair[0], pair[1])?;
        }
        Some(total)
    }
}
