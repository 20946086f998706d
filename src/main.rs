use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tautmap::cli::{self, Cli, Commands};
use tautmap::commands::{self, AnalyzeConfig};
use tautmap::Verdict;

/// Exit status when the verdict blocks merge-readiness
const BLOCKING_EXIT_CODE: u8 = 2;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli::log_filter(cli.command.verbosity()))
        .parse_default_env()
        .init();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            config,
            jobs,
            no_fail,
            verbosity: _,
        } => {
            let verdict = commands::handle_analyze(AnalyzeConfig {
                path,
                format,
                output,
                config,
                jobs,
            })?;
            Ok(exit_code(verdict, no_fail))
        }
        Commands::Init { force } => {
            commands::init_config(force)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn exit_code(verdict: Verdict, no_fail: bool) -> ExitCode {
    match verdict {
        Verdict::Blocking if !no_fail => {
            log::warn!("Tautological tests exceed the blocking threshold");
            ExitCode::from(BLOCKING_EXIT_CODE)
        }
        _ => ExitCode::SUCCESS,
    }
}
