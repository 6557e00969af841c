//! Linkatlas main entry point
//!
//! This is the command-line interface for the linkatlas report
//! renderer.

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use linkatlas::config::{load_config, Config, OverwriteMode};
use linkatlas::output::{AlwaysOverwrite, NeverOverwrite, OverwritePolicy, ReportWriter};
use linkatlas::storage::SnapshotStore;
use linkatlas::ReportDriver;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Linkatlas: a link-graph report renderer
///
/// Linkatlas reads the snapshot database a site crawler produced and
/// renders it as a set of cross-linked HTML report pages.
#[derive(Parser, Debug)]
#[command(name = "linkatlas")]
#[command(version)]
#[command(about = "Renders a crawled link graph as HTML reports", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be generated without writing anything
    #[arg(long, conflicts_with = "list_reports")]
    dry_run: bool,

    /// List all available reports and exit
    #[arg(long, conflicts_with = "dry_run")]
    list_reports: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    if cli.list_reports {
        handle_list_reports();
        return Ok(());
    }

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = load_config(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;

    if cli.dry_run {
        handle_dry_run(&config)?;
    } else {
        handle_generate(&config)?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("linkatlas=info,warn"),
            1 => EnvFilter::new("linkatlas=debug,info"),
            2 => EnvFilter::new("linkatlas=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --list-reports mode: prints the report registry
fn handle_list_reports() {
    println!("Available reports:\n");
    for report in linkatlas::report::registry() {
        match report.description() {
            Some(description) => {
                println!("  {:<10} {} - {}", report.name(), report.title(), description)
            }
            None => println!("  {:<10} {}", report.name(), report.title()),
        }
    }
}

/// Handles the --dry-run mode: validates config and shows what would be generated
fn handle_dry_run(config: &Config) -> anyhow::Result<()> {
    let driver = ReportDriver::new(config)?;

    println!("=== Linkatlas Dry Run ===\n");

    println!("Site:");
    println!("  Base URL: {}", config.site.base_url);
    if let Some(title) = &config.site.title {
        println!("  Title: {}", title);
    }

    println!("\nInput:");
    println!("  Snapshot: {}", config.input.database_path);

    println!("\nOutput:");
    println!("  Directory: {}", config.output.directory);
    println!("  Overwrite: {:?}", config.output.overwrite);

    println!("\nReports ({}):", driver.reports().len());
    for (index, report) in driver.reports().iter().enumerate() {
        println!("  - {} -> {}", report.title(), driver.filename(index));
    }

    println!("\nLimits:");
    println!("  Site map depth: {}", config.reports.sitemap_depth);
    println!("  What's-new age: {} days", config.reports.whatsnew_age);
    println!("  Anchor bad links: {}", config.reports.anchor_bad_links);

    println!("\n✓ Configuration is valid");
    Ok(())
}

/// Handles the main report generation
fn handle_generate(config: &Config) -> anyhow::Result<()> {
    let driver = ReportDriver::new(config)?;

    tracing::info!("Opening snapshot: {}", config.input.database_path);
    let store = SnapshotStore::open(std::path::Path::new(&config.input.database_path))
        .with_context(|| format!("failed to open snapshot {}", config.input.database_path))?;

    let graph = store
        .load_graph(&config.site.base_url, Utc::now())
        .context("failed to load link graph from snapshot")?;
    tracing::info!("Loaded {} links, base {}", graph.len(), graph.base_url());

    let policy: Box<dyn OverwritePolicy> = match config.output.overwrite {
        OverwriteMode::Always => Box::new(AlwaysOverwrite),
        OverwriteMode::Never => Box::new(NeverOverwrite),
    };
    let mut writer = ReportWriter::new(&config.output.directory, policy);

    match driver.generate(&graph, &mut writer) {
        Ok(written) => {
            tracing::info!("Generated {} pages in {}", written.len(), config.output.directory);
            Ok(())
        }
        Err(e) if e.is_abort() => {
            // a declined overwrite is a deliberate stop, not a failure
            tracing::info!("Aborted by request: {}", e);
            println!("Aborted.");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Report generation failed: {}", e);
            Err(e.into())
        }
    }
}
