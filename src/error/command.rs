//! Command error module.
//!
//! These are the locally recoverable failures of a shell session. Their
//! `Display` text is exactly what the user sees after the error prefix.

use thiserror::Error;

/// Reasons a command line is rejected or fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command word, blank line, or wrong number of arguments.
    #[error("invalid command, see 'help' for more information")]
    InvalidCommand,

    /// The name contains uppercase letters.
    #[error("invalid argument for name, names can only be lowercase")]
    UppercaseName,

    /// The name is empty or contains anything but `a..z`.
    #[error("invalid argument for name, names can only be lowercase letters from the standard alphabet (a-z)")]
    NonAlphabeticName,

    /// The name exceeds the configured maximum length.
    #[error("invalid argument for name, names can be at most {max} letters long")]
    NameTooLong {
        /// Configured maximum length.
        max: usize,
    },

    /// The points argument is not an integer in range.
    #[error("invalid argument for points, points needs to be an integer value")]
    InvalidPoints,

    /// The points argument is negative.
    #[error("invalid argument for points, points needs to be an integer value greater or equal to 0")]
    NegativePoints,

    /// `add` on a name that already has points.
    #[error("an entry with the given name already exists")]
    DuplicateKey,

    /// `change`, `delete` or `points` on a name without points.
    #[error("an entry with the given name does not exist")]
    KeyNotFound,
}
