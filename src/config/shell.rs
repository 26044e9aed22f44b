//! Shell configuration module.
//!
//! This module defines how the interactive session presents itself and how
//! strictly it reads command words and names.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// How the first token of a line is matched against command names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CommandMatching {
    /// The full command word must match (`add`, `delete`, ...)
    #[default]
    Exact,
    /// Only the first letter counts, case-insensitively (`a`, `Add`, `abc`, ...)
    FirstLetter,
}

/// Shell session configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShellSettings {
    /// Prompt written before each line is read
    pub prompt: String,

    /// Whether the prompt is written at all (disabled for scripts)
    pub show_prompt: bool,

    /// Prefix of every error line
    pub error_prefix: String,

    /// Command word matching mode
    pub command_matching: CommandMatching,

    /// Optional upper bound on name length
    pub max_name_length: Option<usize>,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            prompt: "trie> ".to_string(),
            show_prompt: true,
            error_prefix: "Error! ".to_string(),
            command_matching: CommandMatching::default(),
            max_name_length: None,
        }
    }
}

impl Validate for ShellSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.prompt.contains('\n') || self.error_prefix.contains('\n') {
            return Err(ConfigError::ValidationError(
                "prompt and error_prefix must fit on a single line".to_string(),
            ));
        }

        if self.max_name_length == Some(0) {
            return Err(ConfigError::ValidationError(
                "max_name_length must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
