use std::collections::HashSet;

use crate::error::Result;
use crate::graph::Graph;

/// Depth-first search from `start` toward `goal`.
///
/// Same counting and termination convention as [`bfs_search`], but with a
/// LIFO frontier. Neighbors are pushed in reverse so expansion follows
/// each node's declared left-to-right order despite stack semantics.
///
/// [`bfs_search`]: crate::search::bfs_search
#[tracing::instrument(skip(graph), fields(start = %start, goal = %goal))]
pub fn dfs_search(start: &str, goal: &str, graph: &Graph) -> Result<usize> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut stack: Vec<String> = vec![start.to_string()];
    let mut nodes_visited = 0;

    while let Some(node) = stack.pop() {
        nodes_visited += 1;

        if node == goal {
            return Ok(nodes_visited);
        }

        if !visited.contains(&node) {
            visited.insert(node.clone());
            for neighbor in graph.neighbors(&node)?.iter().rev() {
                if !visited.contains(neighbor) {
                    stack.push(neighbor.clone());
                }
            }
        }
    }

    Ok(nodes_visited)
}
