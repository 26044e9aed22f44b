//! Interactive shell over a [`PointsTrie`].
//!
//! The shell reads one command per line, applies it to the current trie and
//! writes results and error messages to its output. Rejected commands never
//! end the session; only `quit`, end of input or a stream I/O failure do.

pub mod command;

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::config::ShellSettings;
use crate::data_structures::PointsTrie;
use crate::error::command::CommandError;
use crate::error::ShellResult;

pub use command::Command;

/// Usage text printed by `help`.
pub const HELP_TEXT: &str = "\
new - creates a new trie
add <name> <points> - adds a new name with the given points
change <name> <points> - changes the points of the given name
delete <name> - deletes the given name
points <name> - returns the points of the given name
trie - prints the trie
help - prints this help message
quit - quits the program";

/// Result of executing one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading; print the line if there is one
    Continue(Option<String>),
    /// End the session
    Quit,
}

/// A shell session owning the current trie.
#[derive(Debug, Clone, Default)]
pub struct Shell {
    trie: PointsTrie,
    settings: ShellSettings,
}

impl Shell {
    /// Creates a session with an empty trie.
    pub fn new(settings: ShellSettings) -> Self {
        Self {
            trie: PointsTrie::new(),
            settings,
        }
    }

    /// The trie the session currently operates on.
    pub fn trie(&self) -> &PointsTrie {
        &self.trie
    }

    pub fn settings(&self) -> &ShellSettings {
        &self.settings
    }

    /// Applies a parsed command to the session.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, CommandError> {
        debug!(?command, "executing command");

        match command {
            Command::New => {
                self.trie = PointsTrie::new();
                Ok(Outcome::Continue(None))
            }
            Command::Add { name, points } => {
                if self.trie.insert(&name, points) {
                    Ok(Outcome::Continue(None))
                } else {
                    Err(CommandError::DuplicateKey)
                }
            }
            Command::Change { name, points } => {
                if self.trie.update(&name, points) {
                    Ok(Outcome::Continue(None))
                } else {
                    Err(CommandError::KeyNotFound)
                }
            }
            Command::Delete { name } => {
                if self.trie.delete(&name) {
                    Ok(Outcome::Continue(None))
                } else {
                    Err(CommandError::KeyNotFound)
                }
            }
            Command::Points { name } => self
                .trie
                .lookup(&name)
                .map(|points| Outcome::Continue(Some(points.to_string())))
                .ok_or(CommandError::KeyNotFound),
            Command::Trie => Ok(Outcome::Continue(Some(self.trie.serialize()))),
            Command::Help => Ok(Outcome::Continue(Some(HELP_TEXT.to_string()))),
            Command::Quit => Ok(Outcome::Quit),
        }
    }

    /// Parses and applies one input line.
    pub fn execute_line(&mut self, line: &str) -> Result<Outcome, CommandError> {
        let command = Command::parse(line, &self.settings)?;
        self.execute(command)
    }

    /// Runs the read-eval-print loop until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Only I/O failures on `input` or `output` end the loop with an error.
    pub fn run<R, W>(&mut self, mut input: R, mut output: W) -> ShellResult<()>
    where
        R: BufRead,
        W: Write,
    {
        info!("shell session started");
        let mut buffer = Vec::new();

        loop {
            if self.settings.show_prompt {
                write!(output, "{}", self.settings.prompt)?;
                output.flush()?;
            }

            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            // Undecodable bytes become U+FFFD and fail name validation.
            let decoded = String::from_utf8_lossy(&buffer);
            let line = decoded.trim_end_matches(['\n', '\r']);

            match self.execute_line(line) {
                Ok(Outcome::Quit) => break,
                Ok(Outcome::Continue(Some(text))) => writeln!(output, "{text}")?,
                Ok(Outcome::Continue(None)) => {}
                Err(err) => {
                    debug!(%err, line, "command rejected");
                    writeln!(output, "{}{}", self.settings.error_prefix, err)?;
                }
            }
        }

        output.flush()?;
        info!(keys = self.trie.len(), "shell session ended");
        Ok(())
    }
}
