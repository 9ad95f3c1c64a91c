//! Gutendraft CLI - draft a Standard-Ebooks-style project from a Gutenberg
//! HTML release or a Markdown manuscript

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use gutendraft_core::{BookMetadata, Config, Pipeline, SourceFormat, WorkType};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gutendraft")]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .args(["html", "markdown"])
))]
struct Cli {
    /// Path to a Project Gutenberg HTML file
    #[arg(long, value_name = "PATH")]
    html: Option<PathBuf>,

    /// Path to a Markdown manuscript
    #[arg(long, value_name = "PATH")]
    markdown: Option<PathBuf>,

    /// Author name, e.g. "Jane Doe"
    author: String,

    /// Book title
    title: String,

    /// Language code (BCP 47)
    #[arg(long, default_value = "en-US")]
    language: String,

    /// Original publication year
    #[arg(long)]
    year: Option<i32>,

    /// Work type (novel, short-story, novella, anthology, non-fiction)
    #[arg(long = "type", default_value = "novel", value_parser = WorkType::from_str)]
    work_type: WorkType,

    /// Subject tags, e.g. --subjects "Fiction" "Romance"
    #[arg(long, num_args = 0.., value_name = "SUBJECT")]
    subjects: Vec<String>,

    /// Directory under which the project directory is created
    #[arg(long, default_value = ".", value_name = "DIR")]
    output_root: PathBuf,

    /// Explicit path to the 'se' executable (default: probe the usual
    /// install locations)
    #[arg(long, value_name = "PATH")]
    se_command: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "gutendraft_cli=debug,gutendraft_core=debug"
    } else {
        "gutendraft_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let (input, format) = match (&cli.html, &cli.markdown) {
        (Some(path), None) => (path.clone(), SourceFormat::Html),
        (None, Some(path)) => (path.clone(), SourceFormat::Markdown),
        // clap's ArgGroup guarantees exactly one is set
        _ => unreachable!("input group is required and exclusive"),
    };

    let mut meta = BookMetadata::new(cli.author, cli.title)
        .with_language(cli.language)
        .with_work_type(cli.work_type)
        .with_subjects(cli.subjects);
    if let Some(year) = cli.year {
        meta = meta.with_year(year);
    }

    let config = Config {
        output_root: cli.output_root,
        se_command: cli.se_command,
        run_toolchain: true,
    };

    // Spinner while the pipeline (and the external toolchain) runs
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Drafting '{}'...", meta.title));

    tracing::info!(
        "Drafting '{}' by {} from {}",
        meta.title,
        meta.author,
        input.display()
    );

    let result = Pipeline::new(config).run(&input, format, &meta);
    match result {
        Ok(project) => {
            pb.finish_with_message(format!("Draft ready at {}", project.display()));
            tracing::info!("Draft complete: {}", project.display());
            println!("Project created at: {}", project.display());
            println!();
            println!("Remaining manual steps:");
            println!("  1. Review anything reported by 'se lint'");
            println!("  2. Add cover art");
            println!("  3. Complete any missing metadata");
            Ok(())
        }
        Err(err) => {
            pb.finish_and_clear();
            tracing::error!("Drafting failed: {err}");
            Err(err).context("drafting failed")
        }
    }
}
