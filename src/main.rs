//! Trie Shell - Main entrypoint.
//!
//! This is the main entry point for the Trie Shell application.
//! It loads configuration, initializes the logging system and runs a shell
//! session on standard input or on a script file.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trie_shell_lib::config::{ConfigLoader, LogConfig, TrieShellConfig, ENV_PREFIX};
use trie_shell_lib::error::{ErrorContext, ErrorReporter, ShellError, TracingErrorReporter};
use trie_shell_lib::shell::Shell;

/// Command line arguments for the Trie Shell.
#[derive(Parser, Debug)]
#[clap(name = "Trie Shell", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Start an interactive session on stdin/stdout
    Repl,

    /// Execute the commands of a file without prompts
    Run {
        /// Path to the script
        script: PathBuf,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system. Logs go to stderr; stdout belongs to the shell.
fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| anyhow::anyhow!("Failed to set global tracing subscriber: {e}"))
}

fn load_config(args: &Args) -> TrieShellConfig {
    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    match loader.load() {
        Ok(config) => config,
        Err(e) => {
            // Logging is not configured yet; fall back to defaults for the reporter.
            if let Err(init_err) = init_logging(&LogConfig::default()) {
                eprintln!("{init_err}");
            }
            let source = match &args.config {
                Some(path) => format!("file {}", path.display()),
                None => "defaults and environment".to_string(),
            };
            let context = ErrorContext::new(ShellError::from(e), "config")
                .with_details(format!("loaded from {source}, env prefix {ENV_PREFIX}"));
            TracingErrorReporter.report(context);
            process::exit(1);
        }
    }
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = <Args as clap::Parser>::parse();

    if let Some(Command::GenConfig { output }) = &args.command {
        let toml = TrieShellConfig::default().to_toml()?;
        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(output, toml)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        println!("Default configuration written to {}", output.display());
        return Ok(());
    }

    let config = load_config(&args);
    init_logging(&config.log)?;

    match args.command.unwrap_or(Command::Repl) {
        Command::Repl => {
            info!("Starting interactive session");
            let stdin = io::stdin();
            let stdout = io::stdout();
            Shell::new(config.shell).run(stdin.lock(), stdout.lock())?;
        }
        Command::Run { script } => {
            info!(script = %script.display(), "Running script");
            let file = File::open(&script)
                .with_context(|| format!("Failed to open script {}", script.display()))?;
            let mut settings = config.shell;
            settings.show_prompt = false;
            Shell::new(settings).run(BufReader::new(file), io::stdout().lock())?;
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            println!("Configuration is valid");
        }
        Command::GenConfig { .. } => {}
    }

    Ok(())
}
