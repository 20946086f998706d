use crate::analysis::{analyze_batch, analyze_batch_parallel};
use crate::cli::OutputFormat;
use crate::config::{self, TautmapConfig};
use crate::core::RunResult;
use crate::io::{self, FileWalker};
use crate::report::{self, Verdict};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub jobs: usize,
}

/// Run discovery, analysis and reporting; returns the run's verdict.
pub fn handle_analyze(config: AnalyzeConfig) -> Result<Verdict> {
    let settings = resolve_settings(&config)?;
    let format = config
        .format
        .or_else(|| settings.default_format())
        .unwrap_or(OutputFormat::Markdown);

    let result = analyze_project(&config.path, &settings, config.jobs)?;
    let rendered = render(&result, format)?;

    match &config.output {
        Some(path) => {
            io::write_file(path, &rendered)?;
            log::info!("Report written to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(report::verdict(&result))
}

fn resolve_settings(options: &AnalyzeConfig) -> Result<TautmapConfig> {
    if let Some(path) = &options.config {
        return config::load_config_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }
    let start = options
        .path
        .canonicalize()
        .unwrap_or_else(|_| options.path.clone());
    Ok(config::find_config(start).unwrap_or_else(config::load_config))
}

pub fn analyze_project(root: &Path, settings: &TautmapConfig, jobs: usize) -> Result<RunResult> {
    if !root.is_dir() {
        anyhow::bail!("{} is not a directory", root.display());
    }

    let discovery = settings.discovery();
    let paths = FileWalker::from_config(root.to_path_buf(), &discovery)?.walk()?;
    log::info!("Discovered {} test files under {}", paths.len(), root.display());

    let files = io::read_test_files(root, &paths, discovery.max_file_bytes);

    let result = if jobs == 1 {
        analyze_batch(&files)
    } else {
        configure_thread_pool(jobs);
        analyze_batch_parallel(&files)
    };
    Ok(result)
}

fn render(result: &RunResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Markdown => Ok(report::render_report(result)),
        OutputFormat::Json => Ok(report::render_json(result)?),
    }
}

/// Configure rayon global thread pool once per process
pub fn configure_thread_pool(jobs: usize) {
    let mut builder = rayon::ThreadPoolBuilder::new();

    if jobs > 0 {
        builder = builder.num_threads(jobs);
    }

    if let Err(e) = builder.build_global() {
        log::debug!("Thread pool already configured: {}", e);
    }
}
