use std::collections::{HashSet, VecDeque};

use crate::error::Result;
use crate::graph::Graph;

/// One direction's frontier and discovery set
struct Wavefront {
    queue: VecDeque<String>,
    visited: HashSet<String>,
}

impl Wavefront {
    fn seeded(origin: &str) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(origin.to_string());
        let mut visited = HashSet::new();
        visited.insert(origin.to_string());
        Self { queue, visited }
    }
}

/// Bidirectional search between `start` and `goal`.
///
/// Two breadth-first wavefronts, one seeded at each endpoint, advance
/// alternately (forward first, the full step) sharing a single node
/// counter. The search ends when a wavefront discovers a node the
/// opposite side has already seen, or when either frontier drains.
#[tracing::instrument(skip(graph), fields(start = %start, goal = %goal))]
pub fn bidirectional_search(start: &str, goal: &str, graph: &Graph) -> Result<usize> {
    if start == goal {
        return Ok(1);
    }

    let mut forward = Wavefront::seeded(start);
    let mut backward = Wavefront::seeded(goal);
    let mut nodes_visited = 0;

    while !forward.queue.is_empty() && !backward.queue.is_empty() {
        if let Some(count) = advance(&mut forward, &backward, graph, &mut nodes_visited)? {
            return Ok(count);
        }
        if let Some(count) = advance(&mut backward, &forward, graph, &mut nodes_visited)? {
            return Ok(count);
        }
    }

    Ok(nodes_visited)
}

/// Advance one wavefront by a single node expansion.
///
/// Returns the final count as soon as a neighbor turns out to be known
/// to the opposite wavefront: the two searches have met.
fn advance(
    active: &mut Wavefront,
    opposite: &Wavefront,
    graph: &Graph,
    nodes_visited: &mut usize,
) -> Result<Option<usize>> {
    let Some(node) = active.queue.pop_front() else {
        return Ok(None);
    };
    *nodes_visited += 1;

    for neighbor in graph.neighbors(&node)? {
        if opposite.visited.contains(neighbor) {
            return Ok(Some(*nodes_visited));
        }
        if !active.visited.contains(neighbor) {
            active.visited.insert(neighbor.clone());
            active.queue.push_back(neighbor.clone());
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::demo_graph;

    #[test]
    fn test_bidirectional_demo_graph_golden_count() {
        // The backward wavefront starts at the sink '8', whose neighbor
        // list is empty, so its frontier drains after one step and the
        // run ends with two nodes counted.
        let graph = demo_graph();
        assert_eq!(bidirectional_search("1", "8", &graph).unwrap(), 2);
    }

    #[test]
    fn test_bidirectional_start_equals_goal() {
        let graph = demo_graph();
        assert_eq!(bidirectional_search("4", "4", &graph).unwrap(), 1);
    }

    #[test]
    fn test_bidirectional_wavefronts_meet() {
        // a -> m and g -> m: the forward step from 'a' discovers 'm',
        // the backward step from 'g' then sees 'm' in the forward
        // visited set.
        let mut graph = Graph::new();
        graph.insert("a", &["m"]);
        graph.insert("g", &["m"]);
        graph.insert("m", &[]);
        assert_eq!(bidirectional_search("a", "g", &graph).unwrap(), 2);
    }

    #[test]
    fn test_bidirectional_adjacent_endpoints() {
        // The forward step from '4' finds '8' already in the backward
        // visited set.
        let graph = demo_graph();
        assert_eq!(bidirectional_search("4", "8", &graph).unwrap(), 1);
    }

    #[test]
    fn test_bidirectional_is_idempotent() {
        let graph = demo_graph();
        let first = bidirectional_search("1", "8", &graph).unwrap();
        let second = bidirectional_search("1", "8", &graph).unwrap();
        assert_eq!(first, second);
    }
}
