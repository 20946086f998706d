use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tautmap")]
#[command(about = "Find tautological tests that never exercise production code", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze test files and report tautological tests
    Analyze {
        /// Root directory to search for test files
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format (defaults to the config file's choice, then markdown)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .tautmap.toml)
        #[arg(short, long, env = "TAUTMAP_CONFIG")]
        config: Option<PathBuf>,

        /// Number of worker threads (0 = all cores, 1 = sequential)
        #[arg(short = 'j', long = "jobs", default_value = "0")]
        jobs: usize,

        /// Always exit 0, even when the verdict is blocking
        #[arg(long = "no-fail")]
        no_fail: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize a .tautmap.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Markdown,
    Json,
}

impl Commands {
    /// Verbosity requested on the command line; `init` is always quiet.
    pub fn verbosity(&self) -> u8 {
        match self {
            Commands::Analyze { verbosity, .. } => *verbosity,
            Commands::Init { .. } => 0,
        }
    }
}

/// Map `-v` occurrences onto a default log filter
pub fn log_filter(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}
