//! Breadth-first and depth-first traversal, simple-path enumeration.

use super::types::{validate_adjacency, Adjacency};
use std::collections::VecDeque;

/// Result of a breadth-first traversal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BfsResult {
    /// Vertices in level order.
    pub order: Vec<usize>,

    /// `distances[v]` is the hop count from the source, `None` when
    /// unreachable.
    pub distances: Vec<Option<usize>>,

    /// `predecessors[v]` is the vertex `v` was discovered from.
    pub predecessors: Vec<Option<usize>>,
}

/// Result of a depth-first traversal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DfsResult {
    /// Vertices in preorder.
    pub order: Vec<usize>,

    /// Maximal explored paths: each is the recursion stack snapshot
    /// taken when the walk could not be extended further.
    pub paths: Vec<Vec<usize>>,
}

/// Breadth-first traversal from `source`. `O(V + E)`.
pub fn bfs(vertices: usize, source: usize, adjacency: &Adjacency) -> Result<BfsResult, String> {
    validate_adjacency(vertices, adjacency)?;
    if source >= vertices {
        return Err(format!("source {source} out of range for {vertices} vertices"));
    }

    let mut distances = vec![None; vertices];
    let mut predecessors = vec![None; vertices];
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    distances[source] = Some(0);
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        order.push(u);
        for &(v, _) in &adjacency[u] {
            if distances[v].is_none() {
                distances[v] = distances[u].map(|d| d + 1);
                predecessors[v] = Some(u);
                queue.push_back(v);
            }
        }
    }

    Ok(BfsResult {
        order,
        distances,
        predecessors,
    })
}

/// Recursive depth-first traversal from `source`. `O(V + E)`.
///
/// Besides the preorder visit order, records every maximal explored
/// path as a side artifact (useful for route visualization over small
/// center networks).
pub fn dfs(vertices: usize, source: usize, adjacency: &Adjacency) -> Result<DfsResult, String> {
    validate_adjacency(vertices, adjacency)?;
    if source >= vertices {
        return Err(format!("source {source} out of range for {vertices} vertices"));
    }

    let mut visited = vec![false; vertices];
    let mut result = DfsResult {
        order: Vec::new(),
        paths: Vec::new(),
    };
    let mut stack = Vec::new();

    dfs_visit(source, adjacency, &mut visited, &mut stack, &mut result);
    Ok(result)
}

fn dfs_visit(
    u: usize,
    adjacency: &Adjacency,
    visited: &mut [bool],
    stack: &mut Vec<usize>,
    result: &mut DfsResult,
) {
    visited[u] = true;
    result.order.push(u);
    stack.push(u);

    let mut extended = false;
    for &(v, _) in &adjacency[u] {
        if !visited[v] {
            extended = true;
            dfs_visit(v, adjacency, visited, stack, result);
        }
    }

    if !extended {
        result.paths.push(stack.clone());
    }
    stack.pop();
}

/// Enumerates every simple path from `source` to `target`.
///
/// Frontier-based path expansion: each frontier entry carries its
/// path-so-far, and a vertex already on that path is never revisited
/// (no cycles). Exponential in the worst case; intended for small
/// graphs only.
pub fn all_simple_paths(
    vertices: usize,
    source: usize,
    target: usize,
    adjacency: &Adjacency,
) -> Result<Vec<Vec<usize>>, String> {
    validate_adjacency(vertices, adjacency)?;
    if source >= vertices || target >= vertices {
        return Err(format!(
            "source {source} or target {target} out of range for {vertices} vertices"
        ));
    }

    let mut paths = Vec::new();
    let mut frontier = vec![vec![source]];

    while let Some(path) = frontier.pop() {
        let last = *path.last().unwrap_or(&source);
        if last == target {
            paths.push(path);
            continue;
        }
        for &(v, _) in &adjacency[last] {
            if !path.contains(&v) {
                let mut extended = path.clone();
                extended.push(v);
                frontier.push(extended);
            }
        }
    }

    Ok(paths)
}
