//! Uninformed search strategies over the demonstration graph
//!
//! Contains concrete implementations of the five strategies:
//! - `bfs`: Breadth-first search with a FIFO frontier
//! - `dfs`: Depth-first search with a LIFO frontier
//! - `dls`: Recursive depth-limited search
//! - `ids`: Iterative deepening over depth-limited passes
//! - `bidirectional`: Two breadth-first wavefronts advanced alternately
//!
//! Every call builds its own frontier, visited set, and counter, so no
//! state survives between invocations. The reported metric is the node
//! count: how many nodes the run dequeued, popped, or recursed into.

pub mod bfs;
pub mod bidirectional;
pub mod dfs;
pub mod dls;
pub mod ids;

pub use bfs::bfs_search;
pub use bidirectional::bidirectional_search;
pub use dfs::dfs_search;
pub use dls::{depth_limited_search, DepthLimitedOutcome};
pub use ids::iterative_deepening_search;
