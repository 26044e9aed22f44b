//! Test modules for the Trie Shell.
//!
//! This module contains the cross-cutting test infrastructure:
//! - Configuration loading and validation tests
//! - Error type tests
//! - Property-based tests of the trie against a map model
//! - Shared proptest strategies and fixtures

pub mod config_tests;
pub mod points_trie_property_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{key_strategy, operations_strategy, Operation, TestFixture};
