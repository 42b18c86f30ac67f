//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use super::commands;
use wordrev::core::models::Bounds;
use wordrev::output::OutputMode;

/// wordrev - Reverse the word order of text lines
#[derive(Parser, Debug)]
#[command(
    name = "wordrev",
    version,
    about = "Reverse the word order of text lines",
    long_about = "Collect lines of text and print each one with its word order reversed.\n\n\
                  Lines are validated against a character-count range before processing;\n\
                  a line outside the range gets a validation message instead of a result.\n\
                  Without a subcommand, an interactive session prompts for a case count\n\
                  and then for each line."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Minimum accepted line length, in characters
    #[arg(long, global = true, default_value_t = Bounds::DEFAULT_MIN)]
    pub min_length: usize,

    /// Maximum accepted line length, in characters
    #[arg(long, global = true, default_value_t = Bounds::DEFAULT_MAX)]
    pub max_length: usize,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Reverse lines given as arguments, or piped on stdin
    Reverse {
        /// Lines to process; reads stdin when none are given
        lines: Vec<String>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let bounds = Bounds::new(cli.min_length, cli.max_length)?;

    match cli.command {
        Some(Command::Reverse { lines }) => commands::reverse(&lines, bounds, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("wordrev v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => commands::session(bounds, output_mode),
    }
}
