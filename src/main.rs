// Autodocstring
// Main entry point

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use autodocstring::config::{load_config, Config};
use autodocstring::oracle::OpenAIOracle;
use autodocstring::refine::RefinementController;
use autodocstring::runner::{normalize_arg, run_batch};

#[derive(Parser)]
#[command(name = "autodocstring")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Verify and refine Python module docstrings with an LLM", long_about = None)]
struct Cli {
    /// Source files to document
    #[arg(required = true)]
    files: Vec<String>,

    /// Config file (default: ~/.autodocstring/config.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Model identifier
    #[arg(long)]
    model: Option<String>,

    /// Maximum tokens per reply
    #[arg(long)]
    max_tokens: Option<u32>,

    /// Sampling temperature
    #[arg(long)]
    temperature: Option<f32>,

    /// System instruction sent with every request
    #[arg(long)]
    system: Option<String>,

    /// Replay earlier turns into every request (cost grows each round)
    #[arg(long)]
    memory: bool,

    /// Refinement rounds per file
    #[arg(long)]
    rounds: Option<usize>,

    /// Attempts at a parseable verdict per round
    #[arg(long)]
    retries: Option<usize>,

    /// Extension of files to process
    #[arg(long)]
    extension: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(model) = &self.model {
            config.oracle.model = model.clone();
        }
        if let Some(max_tokens) = self.max_tokens {
            config.oracle.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            config.oracle.temperature = temperature;
        }
        if let Some(system) = &self.system {
            config.oracle.system_message = Some(system.clone());
        }
        if self.memory {
            config.oracle.save_messages = true;
        }
        if let Some(rounds) = self.rounds {
            config.refine.max_refinement_depth = rounds;
        }
        if let Some(retries) = self.retries {
            config.refine.max_retry_depth = retries;
        }
        if let Some(ext) = &self.extension {
            config.source_extension = ext.trim_start_matches('.').to_string();
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "autodocstring=debug"
    } else {
        "autodocstring=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    tracing::debug!("Called with {} file argument(s)", cli.files.len());

    let mut config = load_config(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config.validate().context("Configuration validation failed")?;

    let oracle = OpenAIOracle::new(config.api_key.clone(), config.oracle.clone())
        .context("Failed to create oracle")?;
    let mut controller = RefinementController::new(oracle, config.refine);

    let files: Vec<PathBuf> = cli.files.iter().map(|f| normalize_arg(f)).collect();
    let report = run_batch(&mut controller, &files, &config.source_extension).await;

    if report.has_failures() {
        for (path, error) in &report.failed {
            eprintln!("✗ {}: {}", path.display(), error);
        }
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
