use std::collections::{HashSet, VecDeque};

use crate::error::Result;
use crate::graph::Graph;

/// Breadth-first search from `start` toward `goal`.
///
/// Returns the number of nodes dequeued up to and including the goal, or
/// the full expansion count when the goal is unreachable. A node is
/// counted on every dequeue, before the visited check, so a node queued
/// twice before its first expansion is counted twice.
#[tracing::instrument(skip(graph), fields(start = %start, goal = %goal))]
pub fn bfs_search(start: &str, goal: &str, graph: &Graph) -> Result<usize> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<String> = VecDeque::new();
    let mut nodes_visited = 0;

    queue.push_back(start.to_string());

    while let Some(node) = queue.pop_front() {
        nodes_visited += 1;

        if node == goal {
            return Ok(nodes_visited);
        }

        if !visited.contains(&node) {
            visited.insert(node.clone());
            for neighbor in graph.neighbors(&node)? {
                if !visited.contains(neighbor) {
                    queue.push_back(neighbor.clone());
                }
            }
        }
    }

    Ok(nodes_visited)
}
