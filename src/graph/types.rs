//! Graph representation types.

/// Sentinel distance for vertices Dijkstra never reaches.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// A weighted edge between two vertex indices.
///
/// Graphs are treated as undirected unless an algorithm states
/// otherwise. Self-loops are invalid; duplicate edges are permitted
/// and simply compete during MST and shortest-path computation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

impl Edge {
    pub fn new(from: usize, to: usize, weight: f64) -> Self {
        Self { from, to, weight }
    }
}

/// Adjacency list: `adjacency[v]` holds `(neighbor, weight)` pairs.
pub type Adjacency = Vec<Vec<(usize, f64)>>;

/// Builds an adjacency list from an edge list.
///
/// With `directed = false` every edge is inserted in both directions.
/// Rejects the same malformed input as [`validate_edges`].
pub fn adjacency_from_edges(
    vertices: usize,
    edges: &[Edge],
    directed: bool,
) -> Result<Adjacency, String> {
    validate_edges(vertices, edges)?;

    let mut adjacency: Adjacency = vec![Vec::new(); vertices];
    for edge in edges {
        adjacency[edge.from].push((edge.to, edge.weight));
        if !directed {
            adjacency[edge.to].push((edge.from, edge.weight));
        }
    }
    Ok(adjacency)
}

/// Rejects empty graphs, out-of-range endpoints, self-loops, and
/// negative or non-finite weights.
pub(crate) fn validate_edges(vertices: usize, edges: &[Edge]) -> Result<(), String> {
    if vertices == 0 {
        return Err("graph must have at least one vertex".into());
    }
    for edge in edges {
        if edge.from >= vertices || edge.to >= vertices {
            return Err(format!(
                "edge ({}, {}) out of range for {vertices} vertices",
                edge.from, edge.to
            ));
        }
        if edge.from == edge.to {
            return Err(format!("self-loop not allowed: vertex {}", edge.from));
        }
        if !edge.weight.is_finite() || edge.weight < 0.0 {
            return Err(format!(
                "edge ({}, {}) weight must be finite and non-negative, got {}",
                edge.from, edge.to, edge.weight
            ));
        }
    }
    Ok(())
}

/// Rejects empty graphs, adjacency lists whose length disagrees with
/// the vertex count, out-of-range neighbors, and negative weights.
pub(crate) fn validate_adjacency(vertices: usize, adjacency: &Adjacency) -> Result<(), String> {
    if vertices == 0 {
        return Err("graph must have at least one vertex".into());
    }
    if adjacency.len() != vertices {
        return Err(format!(
            "adjacency list has {} entries, expected {vertices}",
            adjacency.len()
        ));
    }
    for (v, neighbors) in adjacency.iter().enumerate() {
        for &(u, weight) in neighbors {
            if u >= vertices {
                return Err(format!("neighbor {u} of vertex {v} out of range"));
            }
            if !weight.is_finite() || weight < 0.0 {
                return Err(format!(
                    "edge ({v}, {u}) weight must be finite and non-negative, got {weight}"
                ));
            }
        }
    }
    Ok(())
}
