//! Searchlab Core Library
//!
//! Core domain logic for the searchlab demonstration: the fixed graph,
//! the five uninformed search strategies, and the timing harness.

pub mod error;
pub mod graph;
pub mod logging;
pub mod measure;
pub mod search;
