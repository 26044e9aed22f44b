//! Trie Shell Library
//!
//! This library contains the core components of the Trie Shell: an
//! arena-backed trie mapping lowercase names to points, the command
//! interpreter driving it, and the configuration and error plumbing around
//! them. The library is designed to be used by the binary crate, but can also
//! be used as a dependency by other projects.
//!
//! # Architecture
//!
//! - `data_structures`: the trie itself, with no knowledge of the shell
//! - `shell`: command parsing, validation and the read-eval-print loop
//! - `config`: layered settings from defaults, file and environment
//! - `error`: error taxonomy shared by the above

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod shell;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;
