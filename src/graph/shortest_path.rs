//! Dijkstra shortest paths.

use super::types::{validate_adjacency, Adjacency, UNREACHABLE};
use crate::frontier::MinFrontier;

/// Distances and predecessor trail from a single source.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPaths {
    /// Source vertex the distances are measured from.
    pub source: usize,

    /// `distances[v]` is the shortest distance to `v`, or
    /// [`UNREACHABLE`] if `v` cannot be reached.
    pub distances: Vec<f64>,

    /// `predecessors[v]` is the vertex preceding `v` on its shortest
    /// path, `None` for the source and unreachable vertices.
    pub predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Whether `v` is reachable from the source.
    pub fn is_reachable(&self, v: usize) -> bool {
        self.distances.get(v).is_some_and(|d| d.is_finite())
    }
}

/// A reconstructed shortest path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    /// Vertices from source to destination, inclusive.
    pub path: Vec<usize>,

    /// Total path distance.
    pub distance: f64,
}

/// Dijkstra single-source shortest distances. `O((V + E) log V)`.
///
/// Classic relaxation with a min frontier keyed by tentative distance
/// and lazy deletion of stale entries. Weights must be non-negative;
/// validation rejects anything else.
///
/// # Examples
///
/// ```
/// use transopt::graph::{dijkstra, UNREACHABLE};
///
/// // 0 -> 1 (4), 0 -> 2 (1), 2 -> 1 (2), 1 -> 3 (2), 2 -> 3 (5)
/// let adjacency = vec![
///     vec![(1, 4.0), (2, 1.0)],
///     vec![(3, 2.0)],
///     vec![(1, 2.0), (3, 5.0)],
///     vec![],
/// ];
/// let paths = dijkstra(4, 0, &adjacency).unwrap();
/// assert_eq!(paths.distances, vec![0.0, 3.0, 1.0, 5.0]);
/// ```
pub fn dijkstra(vertices: usize, source: usize, adjacency: &Adjacency) -> Result<ShortestPaths, String> {
    dijkstra_until(vertices, source, None, adjacency)
}

/// Dijkstra with path reconstruction to a single destination.
///
/// Finalizing the destination stops the search early; the path is
/// then recovered by walking predecessors backward. Returns `None`
/// when the destination is unreachable.
pub fn dijkstra_path(
    vertices: usize,
    source: usize,
    destination: usize,
    adjacency: &Adjacency,
) -> Result<Option<PathResult>, String> {
    if destination >= vertices {
        return Err(format!(
            "destination {destination} out of range for {vertices} vertices"
        ));
    }

    let paths = dijkstra_until(vertices, source, Some(destination), adjacency)?;
    if !paths.is_reachable(destination) {
        return Ok(None);
    }

    let mut path = vec![destination];
    let mut current = destination;
    while let Some(prev) = paths.predecessors[current] {
        path.push(prev);
        current = prev;
    }
    path.reverse();

    Ok(Some(PathResult {
        path,
        distance: paths.distances[destination],
    }))
}

fn dijkstra_until(
    vertices: usize,
    source: usize,
    destination: Option<usize>,
    adjacency: &Adjacency,
) -> Result<ShortestPaths, String> {
    validate_adjacency(vertices, adjacency)?;
    if source >= vertices {
        return Err(format!("source {source} out of range for {vertices} vertices"));
    }

    let mut distances = vec![UNREACHABLE; vertices];
    let mut predecessors = vec![None; vertices];
    let mut finalized = vec![false; vertices];
    distances[source] = 0.0;

    let mut frontier = MinFrontier::new();
    frontier.push(0.0, source);

    while let Some((_, u)) = frontier.pop() {
        if finalized[u] {
            continue; // stale entry
        }
        finalized[u] = true;

        if destination == Some(u) {
            break;
        }

        for &(v, weight) in &adjacency[u] {
            let candidate = distances[u] + weight;
            if !finalized[v] && candidate < distances[v] {
                distances[v] = candidate;
                predecessors[v] = Some(u);
                frontier.push(candidate, v);
            }
        }
    }

    Ok(ShortestPaths {
        source,
        distances,
        predecessors,
    })
}
