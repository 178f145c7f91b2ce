use crate::error::Result;
use crate::graph::Graph;
use crate::search::dls::depth_limited_search;

/// Iterative deepening search from `start` toward `goal`.
///
/// Runs depth-limited passes at limits 0 through `max_depth` inclusive
/// and sums the node count of every pass tried, not just the successful
/// one. Returns the running sum as soon as a pass finds the goal, or the
/// full sum after exhausting all limits.
#[tracing::instrument(skip(graph), fields(start = %start, goal = %goal, max_depth = max_depth))]
pub fn iterative_deepening_search(
    start: &str,
    goal: &str,
    graph: &Graph,
    max_depth: usize,
) -> Result<usize> {
    let mut total_nodes_visited = 0;

    for limit in 0..=max_depth {
        let outcome = depth_limited_search(start, goal, graph, limit)?;
        total_nodes_visited += outcome.nodes_visited;
        if outcome.found {
            tracing::debug!(limit, total_nodes_visited, "goal found");
            return Ok(total_nodes_visited);
        }
    }

    Ok(total_nodes_visited)
}
