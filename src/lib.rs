//! Imgcheck: cross-checks a documentation tree's markdown articles against
//! its image assets.
//!
//! A documentation root holds an `articles/` tree of `.markdown` files and a
//! flat `images/` directory. Every standalone image tag in an article is
//! checked three ways: its file name must exist in `images/`, every file in
//! `images/` must be referenced somewhere, and the path as written must
//! resolve to a file relative to the article.
//!
//! # Modules
//!
//! - [`model`]: Articles, image references, and image files
//! - [`locate`]: Article discovery and image listing
//! - [`extract`]: Image reference extraction from article text
//! - [`reconcile`]: The three reconciliation passes and their report
//! - [`check`]: End-to-end check of a documentation tree
//! - [`error`]: Error types for imgcheck operations

pub mod check;
pub mod config;
pub mod error;
pub mod extract;
pub mod locate;
pub mod model;
pub mod reconcile;

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

pub use check::{check_doc_dir, check_images};
pub use config::CheckConfig;
pub use error::ImgcheckError;
pub use reconcile::{Discrepancy, DiscrepancyKind, ReconciliationReport};

/// The imgcheck CLI application.
#[derive(Parser)]
#[command(name = "imgcheck")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Check image references of a documentation tree.
    Check(CheckArgs),
}

/// Arguments for the check subcommand.
#[derive(clap::Args)]
struct CheckArgs {
    /// Documentation root containing the articles and images directories.
    #[arg(env = "IMGCHECK_DOC_DIR")]
    doc_dir: PathBuf,

    /// File-name suffix identifying articles.
    #[arg(long, default_value = config::DEFAULT_ARTICLE_EXTENSION)]
    extension: String,

    /// Name of the articles subdirectory.
    #[arg(long, default_value = config::DEFAULT_ARTICLES_DIR)]
    articles_dir: String,

    /// Name of the images subdirectory.
    #[arg(long, default_value = config::DEFAULT_IMAGES_DIR)]
    images_dir: String,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

impl From<&CheckArgs> for CheckConfig {
    fn from(args: &CheckArgs) -> Self {
        CheckConfig::new(&args.doc_dir)
            .with_article_extension(&args.extension)
            .with_articles_dir_name(&args.articles_dir)
            .with_images_dir_name(&args.images_dir)
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    error_count: usize,
    discrepancies: &'a [Discrepancy],
}

/// Run the imgcheck CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), ImgcheckError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Check(args)) => run_check(args),
        None => {
            println!("imgcheck {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Cross-check markdown image references against image assets.");
            println!();
            println!("Run 'imgcheck --help' for usage information.");
            Ok(())
        }
    }
}

/// Installs a stderr log subscriber. `RUST_LOG` overrides the default level.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when embedded in another tool.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Execute the check subcommand.
fn run_check(args: CheckArgs) -> Result<(), ImgcheckError> {
    let config = CheckConfig::from(&args);

    match args.output.as_str() {
        "text" => check_images(&config),
        "json" => {
            let report = check_doc_dir(&config)?;
            let json = serde_json::to_string_pretty(&JsonReport {
                error_count: report.error_count(),
                discrepancies: &report.discrepancies,
            })?;
            println!("{}", json);
            report.into_result()
        }
        other => Err(ImgcheckError::UnsupportedOutput(format!(
            "'{}' (supported: text, json)",
            other
        ))),
    }
}
