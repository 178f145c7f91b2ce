use std::collections::HashSet;

use serde::Serialize;

use crate::error::Result;
use crate::graph::Graph;

/// Outcome of a depth-limited search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DepthLimitedOutcome {
    pub found: bool,
    pub nodes_visited: usize,
}

/// Visitation state threaded through the whole recursive call tree
struct DlsState {
    visited: HashSet<String>,
    nodes_visited: usize,
}

/// Depth-limited search from `start` toward `goal`.
///
/// `limit` bounds the remaining recursion depth. One visited set and one
/// counter span the entire call tree; they are not reset per branch. The
/// goal node is counted at the moment of the match without entering the
/// visited set, and a node reached with an exhausted limit is not
/// counted at all.
#[tracing::instrument(skip(graph), fields(start = %start, goal = %goal, limit = limit))]
pub fn depth_limited_search(
    start: &str,
    goal: &str,
    graph: &Graph,
    limit: usize,
) -> Result<DepthLimitedOutcome> {
    let mut state = DlsState {
        visited: HashSet::new(),
        nodes_visited: 0,
    };

    let found = descend(start, goal, graph, limit, &mut state)?;

    Ok(DepthLimitedOutcome {
        found,
        nodes_visited: state.nodes_visited,
    })
}

fn descend(
    start: &str,
    goal: &str,
    graph: &Graph,
    limit: usize,
    state: &mut DlsState,
) -> Result<bool> {
    if start == goal {
        state.nodes_visited += 1;
        return Ok(true);
    }

    if limit == 0 {
        return Ok(false);
    }

    state.visited.insert(start.to_string());
    state.nodes_visited += 1;

    for neighbor in graph.neighbors(start)? {
        if state.visited.contains(neighbor) {
            continue;
        }
        // Stop at the first branch that reaches the goal; remaining
        // siblings stay unexplored.
        if descend(neighbor, goal, graph, limit - 1, state)? {
            return Ok(true);
        }
    }

    Ok(false)
}
