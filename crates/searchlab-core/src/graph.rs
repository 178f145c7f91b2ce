//! Adjacency-list graph and the fixed demonstration instance
//!
//! The graph is an immutable mapping from node label to neighbors in
//! declared order. It is built once at startup and passed by reference
//! to every search call; nothing mutates it afterwards.

use std::collections::BTreeMap;

use crate::error::{Result, SearchError};

/// Start node used by the demonstration runner
pub const DEMO_START: &str = "1";
/// Goal node used by the demonstration runner
pub const DEMO_GOAL: &str = "8";

/// Immutable directed graph stored as an adjacency list
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: BTreeMap<String, Vec<String>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and its neighbors, preserving neighbor order.
    /// Re-inserting a node replaces its neighbor list.
    pub fn insert(&mut self, id: &str, neighbors: &[&str]) {
        self.adjacency.insert(
            id.to_string(),
            neighbors.iter().map(|n| n.to_string()).collect(),
        );
    }

    /// Neighbors of `id` in declared order
    pub fn neighbors(&self, id: &str) -> Result<&[String]> {
        self.adjacency
            .get(id)
            .map(Vec::as_slice)
            .ok_or_else(|| SearchError::NodeNotFound { id: id.to_string() })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Check that every neighbor reference resolves to a graph key.
    ///
    /// Search frontiers only ever hold identifiers taken from neighbor
    /// lists, so a validated graph guarantees lookups cannot fail
    /// mid-search.
    pub fn validate(&self) -> Result<()> {
        for (id, neighbors) in &self.adjacency {
            for neighbor in neighbors {
                if !self.adjacency.contains_key(neighbor) {
                    return Err(SearchError::InvalidGraph {
                        id: id.clone(),
                        neighbor: neighbor.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// The fixed 8-node demonstration graph
///
/// A directed acyclic graph with designated start [`DEMO_START`] and
/// goal [`DEMO_GOAL`]; leaf nodes map to an empty neighbor list.
pub fn demo_graph() -> Graph {
    let mut graph = Graph::new();
    graph.insert("1", &["2", "3"]);
    graph.insert("2", &["4", "5"]);
    graph.insert("3", &["6", "7"]);
    graph.insert("4", &["8"]);
    graph.insert("5", &[]);
    graph.insert("6", &[]);
    graph.insert("7", &[]);
    graph.insert("8", &[]);
    graph
}
