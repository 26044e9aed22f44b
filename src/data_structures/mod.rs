//! Data structures for the Trie Shell.
//!
//! This module contains the in-memory structures the shell operates on.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Expected failures reported as values, never as panics
//! - No recursion proportional to key length

pub mod points_trie;

// Re-export common data structures
pub use points_trie::{Points, PointsTrie, PointsTrieError, PointsTrieResult};
