//! Command parsing for the Trie Shell.
//!
//! A line is split on whitespace; the first token selects the command and the
//! remaining tokens are its arguments. Names and points are validated here so
//! that only well-formed keys ever reach the trie.

use crate::config::{CommandMatching, ShellSettings};
use crate::data_structures::Points;
use crate::error::command::CommandError;

/// A validated shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Discard the current trie and start an empty one
    New,
    /// Insert a new name
    Add { name: String, points: Points },
    /// Overwrite the points of an existing name
    Change { name: String, points: Points },
    /// Remove a name
    Delete { name: String },
    /// Print the points of a name
    Points { name: String },
    /// Print the serialized trie
    Trie,
    /// Print the usage text
    Help,
    /// End the session
    Quit,
}

/// Command words without their arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    New,
    Add,
    Change,
    Delete,
    Points,
    Trie,
    Help,
    Quit,
}

impl Keyword {
    fn from_word(word: &str, matching: CommandMatching) -> Option<Self> {
        match matching {
            CommandMatching::Exact => match word {
                "new" => Some(Self::New),
                "add" => Some(Self::Add),
                "change" => Some(Self::Change),
                "delete" => Some(Self::Delete),
                "points" => Some(Self::Points),
                "trie" => Some(Self::Trie),
                "help" => Some(Self::Help),
                "quit" => Some(Self::Quit),
                _ => None,
            },
            CommandMatching::FirstLetter => {
                match word.chars().next()?.to_ascii_lowercase() {
                    'n' => Some(Self::New),
                    'a' => Some(Self::Add),
                    'c' => Some(Self::Change),
                    'd' => Some(Self::Delete),
                    'p' => Some(Self::Points),
                    't' => Some(Self::Trie),
                    'h' => Some(Self::Help),
                    'q' => Some(Self::Quit),
                    _ => None,
                }
            }
        }
    }

    /// Number of arguments the command takes.
    fn arity(self) -> usize {
        match self {
            Self::Add | Self::Change => 2,
            Self::Delete | Self::Points => 1,
            Self::New | Self::Trie | Self::Help | Self::Quit => 0,
        }
    }
}

impl Command {
    /// Parses and validates one input line.
    pub fn parse(line: &str, settings: &ShellSettings) -> Result<Self, CommandError> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens
            .next()
            .and_then(|word| Keyword::from_word(word, settings.command_matching))
            .ok_or(CommandError::InvalidCommand)?;

        let args: Vec<&str> = tokens.collect();
        if args.len() != keyword.arity() {
            return Err(CommandError::InvalidCommand);
        }

        let name = |index: usize| -> Result<String, CommandError> {
            let name = args.get(index).copied().unwrap_or_default();
            validate_name(name, settings.max_name_length)?;
            Ok(name.to_string())
        };
        let points = |index: usize| parse_points(args.get(index).copied().unwrap_or_default());

        Ok(match keyword {
            Keyword::New => Self::New,
            Keyword::Add => Self::Add {
                name: name(0)?,
                points: points(1)?,
            },
            Keyword::Change => Self::Change {
                name: name(0)?,
                points: points(1)?,
            },
            Keyword::Delete => Self::Delete { name: name(0)? },
            Keyword::Points => Self::Points { name: name(0)? },
            Keyword::Trie => Self::Trie,
            Keyword::Help => Self::Help,
            Keyword::Quit => Self::Quit,
        })
    }
}

/// Checks that `name` is one or more letters `a..z`.
///
/// Uppercase letters are reported separately from other characters.
pub fn validate_name(name: &str, max_len: Option<usize>) -> Result<(), CommandError> {
    if name.chars().any(char::is_uppercase) {
        return Err(CommandError::UppercaseName);
    }
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(CommandError::NonAlphabeticName);
    }
    match max_len {
        Some(max) if name.len() > max => Err(CommandError::NameTooLong { max }),
        _ => Ok(()),
    }
}

/// Parses a non-negative integer that fits [`Points`].
pub fn parse_points(raw: &str) -> Result<Points, CommandError> {
    let value: i64 = raw.parse().map_err(|_| CommandError::InvalidPoints)?;
    if value < 0 {
        return Err(CommandError::NegativePoints);
    }
    Points::try_from(value).map_err(|_| CommandError::InvalidPoints)
}
