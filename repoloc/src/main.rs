//! # repoloc
//!
//! A CLI tool for breaking down the lines of code in a repository by language.
//!
//! ## Overview
//!
//! repoloc is built on top of repoloclib. It takes a GitHub repository URL or
//! a local directory, stages it on disk (cloning remotes into a temporary
//! directory), walks it and reports line totals per language.
//!
//! ## Usage
//!
//! ```bash
//! # Analyze a GitHub repository
//! repoloc https://github.com/owner/repo
//!
//! # Analyze a local checkout, with per-file breakdown
//! repoloc . --verbose
//!
//! # Count documentation too, skipping vendored code
//! repoloc . --include-docs --exclude "vendor/*"
//!
//! # Output as JSON
//! repoloc . --output json
//! ```

use std::process::ExitCode;
use std::str::FromStr;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use repoloclib::{
    scan, ExclusionRules, OrderBy, Ordering, RepoSource, ReportTable, ScanOptions, ScanQuerySet,
    DEFAULT_TOP_FILES,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod render;

use render::{render_report, OutputFormat};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("repoloc")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Lines of code by language for a GitHub repository or local directory")
        .arg(
            Arg::new("repo")
                .required(true)
                .help("GitHub repository URL or local directory to analyze"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("List the largest files of each language"),
        )
        .arg(
            Arg::new("include-docs")
                .short('d')
                .long("include-docs")
                .action(ArgAction::SetTrue)
                .help("Also count documentation files (Markdown, reStructuredText, text)"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Exclude paths matching glob pattern (can be specified multiple times)"),
        )
        .arg(
            Arg::new("top")
                .short('n')
                .long("top")
                .value_parser(clap::value_parser!(usize))
                .default_value("10")
                .help("Number of files listed per language in verbose mode"),
        )
        .arg(
            Arg::new("sort")
                .short('s')
                .long("sort")
                .value_parser(["lines", "name"])
                .default_value("lines")
                .help("Order languages and files by line count or by name"),
        )
        .arg(
            Arg::new("parallel")
                .short('j')
                .long("parallel")
                .action(ArgAction::SetTrue)
                .help("Count files on all cores"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Log filter (e.g. debug, info, warn); overrides RUST_LOG"),
        )
}

/// Install the stderr log subscriber.
///
/// `--log-level` wins over `RUST_LOG`; without either, progress messages at
/// info level are shown.
fn setup_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false),
        )
        .with(filter)
        .init();
}

fn build_options(matches: &ArgMatches) -> anyhow::Result<ScanOptions> {
    let patterns: Vec<&String> = matches
        .get_many::<String>("exclude")
        .map(|v| v.collect())
        .unwrap_or_default();
    let exclusions = ExclusionRules::new().exclude_many(&patterns)?;

    Ok(ScanOptions::new()
        .verbose(matches.get_flag("verbose"))
        .include_docs(matches.get_flag("include-docs"))
        .exclusions(exclusions)
        .parallel(matches.get_flag("parallel")))
}

fn build_ordering(matches: &ArgMatches) -> anyhow::Result<Ordering> {
    let by = matches
        .get_one::<String>("sort")
        .map(|s| OrderBy::from_str(s))
        .transpose()
        .map_err(|e| anyhow::anyhow!(e))?
        .unwrap_or_default();

    Ok(match by {
        OrderBy::Lines => Ordering::by_lines(),
        OrderBy::Label => Ordering::by_label(),
    })
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let input = matches
        .get_one::<String>("repo")
        .context("missing repository argument")?;
    let source = RepoSource::parse(input)?;
    let options = build_options(matches)?;
    let ordering = build_ordering(matches)?;
    let top = matches
        .get_one::<usize>("top")
        .copied()
        .unwrap_or(DEFAULT_TOP_FILES);
    let format = OutputFormat::from_name(
        matches
            .get_one::<String>("output")
            .map(String::as_str)
            .unwrap_or("table"),
    );

    let staged = source
        .stage()
        .with_context(|| format!("could not stage {}", input))?;

    info!("Analyzing code statistics...");
    let result = scan(staged.path(), options)?;

    let qs = ScanQuerySet::from_result(&result, ordering, top);
    let table = ReportTable::from_queryset(&qs, &source.display_name());
    let output = render_report(&table, format)?;
    println!("{}", output);

    if staged.is_temporary() {
        info!("Cleaning up temporary files...");
    }
    drop(staged);

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    setup_logging(matches.get_one::<String>("log-level").map(String::as_str));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
