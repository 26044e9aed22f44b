//! Error types for the points trie.
//!
//! The trie's primary operations report expected failures through `bool` and
//! `Option`. These errors back the `try_*` variants for callers that want to
//! propagate with `?`.

/// Errors that can occur in points trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PointsTrieError {
    /// The key already carries a value.
    #[error("Key '{0}' already has a value")]
    DuplicateKey(String),

    /// No node for the key, or the node is purely structural.
    #[error("Key '{0}' has no value")]
    KeyNotFound(String),

    /// The key is empty or contains bytes outside `a..=z`.
    #[error("Key '{0}' is not a non-empty lowercase ASCII word")]
    InvalidKey(String),
}
