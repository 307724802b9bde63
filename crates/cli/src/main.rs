//! Promter CLI
//!
//! Main entry point for the promter command-line tool.
//! Asks one interactive question and prints the answer to stdout, so shell
//! scripts can collect typed, validated input.

mod commands;

use clap::{Parser, Subcommand};
use commands::{
    Answer, OptionalTextCommand, SelectCommand, TextCommand, UrlCommand, YesNoCommand,
};
use promter_core::{config::AppConfig, logging, AppResult};
use promter_prompt::{PromptBackend, Prompter};
use std::path::PathBuf;

/// Promter - typed interactive prompts for shell scripts
#[derive(Parser, Debug)]
#[command(name = "promter")]
#[command(about = "Typed interactive prompts with defaults and retries", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file (default: .promter/config.yaml)
    #[arg(short, long, global = true, env = "PROMTER_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    /// Return the first failure instead of asking again
    #[arg(long, global = true)]
    no_retries: bool,

    /// Print the answer as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask a Yes/No question
    YesNo(YesNoCommand),

    /// Pick one item from a list
    Select(SelectCommand),

    /// Ask for non-empty text
    Text(TextCommand),

    /// Ask for text that may be left empty
    OptionalText(OptionalTextCommand),

    /// Ask for an http(s) URL
    Url(UrlCommand),
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::YesNo(_) => "yes-no",
            Commands::Select(_) => "select",
            Commands::Text(_) => "text",
            Commands::OptionalText(_) => "optional-text",
            Commands::Url(_) => "url",
        }
    }

    fn execute<B: PromptBackend>(&self, prompter: &mut Prompter<B>) -> AppResult<Answer> {
        match self {
            Commands::YesNo(cmd) => cmd.execute(prompter),
            Commands::Select(cmd) => cmd.execute(prompter),
            Commands::Text(cmd) => cmd.execute(prompter),
            Commands::OptionalText(cmd) => cmd.execute(prompter),
            Commands::Url(cmd) => cmd.execute(prompter),
        }
    }
}

fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load configuration from file and environment
    let config = AppConfig::load(cli.config.as_deref())?;

    // Apply CLI overrides
    let config = config.with_overrides(cli.log_level, cli.verbose, cli.no_color, cli.no_retries);

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::debug!("Config file: {:?}", config.config_file);
    tracing::debug!("Retries enabled: {}", config.prompter.handle_retries());

    let _span = tracing::info_span!("command", name = cli.command.name()).entered();

    let mut prompter = Prompter::from_config(&config);
    let result = cli
        .command
        .execute(&mut prompter)
        .and_then(|answer| answer.render(cli.json));

    match &result {
        Ok(output) => {
            println!("{}", output);
            tracing::debug!("Command completed successfully");
        }
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result.map(|_| ())
}
