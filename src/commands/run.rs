//! Run the full uninformed-search suite against the demonstration graph

use serde::Serialize;
use tracing::debug;

use searchlab_core::error::Result;
use searchlab_core::graph::{demo_graph, Graph, DEMO_GOAL, DEMO_START};
use searchlab_core::measure::measure;
use searchlab_core::search::{
    bfs_search, bidirectional_search, depth_limited_search, dfs_search,
    iterative_deepening_search,
};

use crate::cli::{Cli, OutputFormat};

/// Maximum depth tried by iterative deepening
const IDS_MAX_DEPTH: usize = 10;
/// Depth limit for the standalone depth-limited run
const DLS_LIMIT: usize = 3;

/// One algorithm's reported outcome
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmReport {
    pub name: String,
    pub nodes_visited: usize,
    pub elapsed_seconds: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth_limit: Option<usize>,
}

impl AlgorithmReport {
    fn timed(name: &str, nodes_visited: usize, elapsed_seconds: f64) -> Self {
        AlgorithmReport {
            name: name.to_string(),
            nodes_visited,
            elapsed_seconds,
            depth_limit: None,
        }
    }

    fn human_line(&self) -> String {
        match self.depth_limit {
            Some(limit) => format!(
                "{} with limit {} -> Nodes Visited: {}, Execution Time: {:.6} seconds",
                self.name, limit, self.nodes_visited, self.elapsed_seconds
            ),
            None => format!(
                "{} -> Nodes Visited: {}, Execution Time: {:.6} seconds",
                self.name, self.nodes_visited, self.elapsed_seconds
            ),
        }
    }
}

/// Summary of a full suite run
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub start: String,
    pub goal: String,
    pub runs: Vec<AlgorithmReport>,
}

/// Run BFS, DFS, IDS, DLS, and Bidirectional in that order.
///
/// Every run except DLS goes through the timing harness; DLS is invoked
/// directly and its row reports a literal zero elapsed time.
pub fn run_suite(graph: &Graph, start: &str, goal: &str) -> Result<SuiteReport> {
    let mut runs = Vec::with_capacity(5);

    let (result, elapsed) = measure(|| bfs_search(start, goal, graph));
    let nodes_visited = result?;
    debug!(nodes_visited, elapsed = ?elapsed, "bfs");
    runs.push(AlgorithmReport::timed(
        "Breadth-First Search (BFS)",
        nodes_visited,
        elapsed.as_secs_f64(),
    ));

    let (result, elapsed) = measure(|| dfs_search(start, goal, graph));
    let nodes_visited = result?;
    debug!(nodes_visited, elapsed = ?elapsed, "dfs");
    runs.push(AlgorithmReport::timed(
        "Depth-First Search (DFS)",
        nodes_visited,
        elapsed.as_secs_f64(),
    ));

    let (result, elapsed) = measure(|| iterative_deepening_search(start, goal, graph, IDS_MAX_DEPTH));
    let nodes_visited = result?;
    debug!(nodes_visited, elapsed = ?elapsed, "ids");
    runs.push(AlgorithmReport::timed(
        "Iterative Deepening Search (IDS)",
        nodes_visited,
        elapsed.as_secs_f64(),
    ));

    let outcome = depth_limited_search(start, goal, graph, DLS_LIMIT)?;
    debug!(nodes_visited = outcome.nodes_visited, found = outcome.found, "dls");
    runs.push(AlgorithmReport {
        name: "Depth-Limited Search (DLS)".to_string(),
        nodes_visited: outcome.nodes_visited,
        elapsed_seconds: 0.0,
        depth_limit: Some(DLS_LIMIT),
    });

    let (result, elapsed) = measure(|| bidirectional_search(start, goal, graph));
    let nodes_visited = result?;
    debug!(nodes_visited, elapsed = ?elapsed, "bidirectional");
    runs.push(AlgorithmReport::timed(
        "Bidirectional Search",
        nodes_visited,
        elapsed.as_secs_f64(),
    ));

    Ok(SuiteReport {
        start: start.to_string(),
        goal: goal.to_string(),
        runs,
    })
}

pub fn run_all_algorithms(cli: &Cli) -> Result<()> {
    let graph = demo_graph();
    let report = run_suite(&graph, DEMO_START, DEMO_GOAL)?;

    match cli.format {
        OutputFormat::Human => {
            for run in &report.runs {
                println!("{}", run.human_line());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suite_golden_counts() {
        let graph = demo_graph();
        let report = run_suite(&graph, DEMO_START, DEMO_GOAL).unwrap();

        let counts: Vec<usize> = report.runs.iter().map(|r| r.nodes_visited).collect();
        assert_eq!(counts, vec![8, 4, 8, 4, 2]);
    }

    #[test]
    fn test_suite_run_order_and_names() {
        let graph = demo_graph();
        let report = run_suite(&graph, DEMO_START, DEMO_GOAL).unwrap();

        let names: Vec<&str> = report.runs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Breadth-First Search (BFS)",
                "Depth-First Search (DFS)",
                "Iterative Deepening Search (IDS)",
                "Depth-Limited Search (DLS)",
                "Bidirectional Search",
            ]
        );
    }

    #[test]
    fn test_dls_row_reports_zero_time_and_limit() {
        let graph = demo_graph();
        let report = run_suite(&graph, DEMO_START, DEMO_GOAL).unwrap();

        let dls = &report.runs[3];
        assert_eq!(dls.depth_limit, Some(3));
        assert_eq!(dls.elapsed_seconds, 0.0);
    }

    #[test]
    fn test_human_line_format() {
        let report = AlgorithmReport::timed("Breadth-First Search (BFS)", 8, 0.00001);
        assert_eq!(
            report.human_line(),
            "Breadth-First Search (BFS) -> Nodes Visited: 8, Execution Time: 0.000010 seconds"
        );
    }

    #[test]
    fn test_human_line_embeds_depth_limit() {
        let report = AlgorithmReport {
            name: "Depth-Limited Search (DLS)".to_string(),
            nodes_visited: 4,
            elapsed_seconds: 0.0,
            depth_limit: Some(3),
        };
        assert_eq!(
            report.human_line(),
            "Depth-Limited Search (DLS) with limit 3 -> Nodes Visited: 4, Execution Time: 0.000000 seconds"
        );
    }

    #[test]
    fn test_suite_elapsed_times_non_negative() {
        let graph = demo_graph();
        let report = run_suite(&graph, DEMO_START, DEMO_GOAL).unwrap();
        assert!(report.runs.iter().all(|r| r.elapsed_seconds >= 0.0));
    }
}
