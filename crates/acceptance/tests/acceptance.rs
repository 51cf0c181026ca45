//! Scenario runner entry point
//!
//! Replays the YAML scenarios against a recorded snapshot of the
//! application's pages. Run with: cargo test --package worblehat-acceptance --test acceptance

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use worblehat_acceptance::runner::SuiteResult;
use worblehat_acceptance::{
    demo_book, BlankPolicy, HarnessConfig, InMemoryCatalog, ScenarioRunner, SnapshotRenderer,
    VerifyResult,
};

#[derive(Parser, Debug)]
#[command(name = "worblehat-acceptance")]
#[command(about = "Acceptance scenarios for the Worblehat booklist")]
#[command(ignore_errors = true)]
struct Args {
    /// Harness configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to scenario directory
    #[arg(short, long)]
    scenarios: Option<PathBuf>,

    /// Recorded page snapshot to replay
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Canonical catalog records (YAML list of books)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Run only scenarios matching this tag
    #[arg(short, long)]
    tag: Option<String>,

    /// Run only a specific scenario by name
    #[arg(short, long)]
    name: Option<String>,

    /// What counts as an empty borrower cell
    #[arg(long, value_enum)]
    blank_borrower: Option<BlankPolicy>,

    /// Output directory for results
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Test filters passed through by cargo; ignored
    #[arg(hide = true)]
    filters: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn load_config(args: &Args) -> VerifyResult<HarnessConfig> {
    let mut config = match &args.config {
        Some(path) => HarnessConfig::from_file(path)?,
        None => HarnessConfig::default(),
    };
    config.apply_env()?;

    if let Some(dir) = &args.scenarios {
        config.scenarios_dir = dir.clone();
    }
    if let Some(snapshot) = &args.snapshot {
        config.snapshot = snapshot.clone();
    }
    if let Some(catalog) = &args.catalog {
        config.catalog = Some(catalog.clone());
    }
    if let Some(policy) = args.blank_borrower {
        config.blank_borrower = policy;
    }
    if let Some(output) = &args.output {
        config.output_dir = output.clone();
    }
    Ok(config)
}

fn run(args: Args) -> VerifyResult<bool> {
    let config = load_config(&args)?;

    let renderer = SnapshotRenderer::from_file(&config.snapshot)?;
    let catalog = match &config.catalog {
        Some(path) => serde_yaml::from_str(&std::fs::read_to_string(path)?)?,
        None => InMemoryCatalog::new(vec![demo_book()]),
    };

    let mut runner = ScenarioRunner::new(&config, renderer, catalog);

    let results = if let Some(name) = &args.name {
        let result = runner.run_named(name)?;
        let duration_ms = result.duration_ms;
        SuiteResult::from_results(vec![result], duration_ms)
    } else if let Some(tag) = &args.tag {
        runner.run_tagged(tag)?
    } else {
        runner.run_all()?
    };

    runner.write_results(&results)?;

    Ok(results.failed == 0)
}
