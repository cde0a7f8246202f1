//! StressCam CLI - Command-line interface for stress-score analysis.
//!
//! Usage:
//!   stresscam analyze <FILE>    Score an observation stream
//!   stresscam demo              Run a built-in demo scenario
//!   stresscam info <FILE>       Show observation stream information
//!   stresscam validate <FILE>   Validate an observation stream
//!   stresscam config            Show or initialize the configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use stresscam_session::DemoScenario;

mod commands;

#[derive(Parser)]
#[command(
    name = "stresscam",
    about = "Stress estimation from facial emotion observations",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an observation stream and report the stress trend
    Analyze {
        /// Path to the observations JSONL file
        path: PathBuf,

        /// History capacity (number of scores in the rolling average);
        /// defaults to the saved configuration (50 out of the box)
        #[arg(long)]
        capacity: Option<usize>,

        /// Append a zero to the history on faceless frames
        /// (reference-variant behavior; default skips the append)
        #[arg(long)]
        append_zero: bool,

        /// Pick the frame's dominant emotion from the last face instead of
        /// the face with the highest peak probability
        #[arg(long)]
        last_face_dominant: bool,

        /// Emit per-frame readings as JSONL instead of a text report
        #[arg(long)]
        json: bool,
    },

    /// Run a built-in demo scenario through a fresh session
    Demo {
        /// Scenario to run: calm, stressed, or recovery
        #[arg(long, default_value = "stressed")]
        scenario: DemoScenario,

        /// Number of frames to generate
        #[arg(long, default_value = "60")]
        frames: usize,
    },

    /// Show observation stream information
    Info {
        /// Path to the observations JSONL file
        path: PathBuf,
    },

    /// Validate an observation stream
    Validate {
        /// Path to the observations JSONL file
        path: PathBuf,
    },

    /// Show or initialize the application configuration
    Config {
        /// Write the default configuration to the standard location
        #[arg(long)]
        init: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    stresscam_common::logging::init_logging(&stresscam_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command {
        Commands::Analyze {
            path,
            capacity,
            append_zero,
            last_face_dominant,
            json,
        } => commands::analyze::run(path, capacity, append_zero, last_face_dominant, json),
        Commands::Demo { scenario, frames } => commands::demo::run(scenario, frames),
        Commands::Info { path } => commands::info::run(path),
        Commands::Validate { path } => commands::validate::run(path),
        Commands::Config { init } => commands::config::run(init),
    }
}
