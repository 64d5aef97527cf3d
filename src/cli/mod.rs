//! # CLI Module
//!
//! Command-line interface for digest recovery.
//!
//! ## Usage
//! ```bash
//! # Search length-4 candidates over the default alphabet
//! hashsmash -s hashes.txt -l 4
//!
//! # Use 8 workers and a fixed prefix
//! hashsmash -s hashes.txt -l 6 -c 8 -p pw
//!
//! # Progress bar and summary
//! hashsmash -s hashes.txt -l 5 -o pretty
//!
//! # Machine-readable result
//! hashsmash -s hashes.txt -l 4 -o json
//! ```

use clap::{Parser, ValueEnum};
use console::{style, Term};
use hashsmash::core::alphabet::{Alphabet, DEFAULT_ALPHABET};
use hashsmash::core::pipeline::{CrackResult, Pipeline};
use hashsmash::error::Result;
use hashsmash::events::{Event, EventChannel, PipelineEvent, SearchEvent, TargetsEvent};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::thread;

/// hashsmash - recover passwords behind MD5 digests by exhaustive search
#[derive(Parser, Debug)]
#[command(name = "hashsmash")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Alphabet to use in permutations
    #[arg(short, long, default_value = DEFAULT_ALPHABET)]
    alphabet: String,

    /// CPU cores to use
    #[arg(short, long, default_value_t = 1)]
    cores: usize,

    /// Length of permutations
    #[arg(short, long, default_value_t = 1)]
    length: usize,

    /// Prefix for all permutations
    #[arg(short, long, default_value = "")]
    prefix: String,

    /// Path of hashes file
    #[arg(short = 's', long = "hashes", default_value = "hashes.txt")]
    hashes: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "plain")]
    output: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Recovered candidates only, one per line
    Plain,
    /// JSON result document for scripting
    Json,
    /// Progress bar and summary with colors
    Pretty,
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    hashsmash::init_tracing(cli.verbose);

    let alphabet: Alphabet = cli.alphabet.parse().map_err(hashsmash::CrackerError::from)?;

    let pipeline = Pipeline::builder()
        .alphabet(alphabet)
        .length(cli.length)
        .prefix(cli.prefix)
        .cores(cli.cores)
        .targets_path(cli.hashes)
        .build()?;

    match cli.output {
        OutputFormat::Plain => run_plain(&pipeline),
        OutputFormat::Json => run_json(&pipeline),
        OutputFormat::Pretty => run_pretty(&pipeline, cli.verbose),
    }
}

fn run_plain(pipeline: &Pipeline) -> Result<()> {
    let result = pipeline.run()?;
    for candidate in &result.matches {
        println!("{}", candidate);
    }
    Ok(())
}

fn run_json(pipeline: &Pipeline) -> Result<()> {
    let result = pipeline.run()?;
    println!("{}", serde_json::to_string_pretty(&result).unwrap());
    Ok(())
}

fn run_pretty(pipeline: &Pipeline, verbose: bool) -> Result<()> {
    let term = Term::stderr();

    term.write_line(&format!(
        "{} {}",
        style("hashsmash").bold().cyan(),
        style(concat!("v", env!("CARGO_PKG_VERSION"))).dim()
    ))
    .ok();
    term.write_line("").ok();

    // Progress bar driven by search events
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("█▓░"),
    );

    let (sender, receiver) = EventChannel::new();
    let progress_clone = progress.clone();

    let event_thread = thread::spawn(move || {
        for event in receiver.iter() {
            match event {
                Event::Targets(TargetsEvent::Loaded { count }) => {
                    progress_clone.set_message(format!("{} targets", count));
                }
                Event::Search(SearchEvent::Started {
                    total_candidates, ..
                }) => {
                    progress_clone.set_length(total_candidates);
                }
                Event::Search(SearchEvent::MatchFound { candidate }) => {
                    progress_clone.println(format!(
                        "  {} {}",
                        style("✓").green().bold(),
                        candidate
                    ));
                }
                Event::Search(SearchEvent::UnitCompleted {
                    prefix, candidates, ..
                }) => {
                    progress_clone.inc(candidates);
                    if verbose {
                        progress_clone.set_message(format!("finished '{}'", prefix));
                    }
                }
                Event::Pipeline(PipelineEvent::Completed { .. }) => {
                    progress_clone.finish_and_clear();
                }
                _ => {}
            }
        }
    });

    let result = pipeline.run_with_events(&sender);

    // Drop sender to signal event thread to finish
    drop(sender);
    event_thread.join().ok();
    progress.finish_and_clear();

    let result = result?;
    print_pretty_results(&term, &result);

    Ok(())
}

fn print_pretty_results(term: &Term, result: &CrackResult) {
    term.write_line("").ok();
    term.write_line(&format!("{} Search Complete", style("✓").green().bold()))
        .ok();
    term.write_line("").ok();

    // Summary
    term.write_line(&format!(
        "  {} candidates checked in {:.1}s",
        style(result.candidates_checked).cyan(),
        result.duration_ms as f64 / 1000.0
    ))
    .ok();

    term.write_line(&format!(
        "  {} target digests",
        style(result.targets).cyan()
    ))
    .ok();

    term.write_line(&format!(
        "  {} recovered",
        style(result.matches.len()).cyan()
    ))
    .ok();

    term.write_line("").ok();

    if result.matches.is_empty() {
        term.write_line(&format!(
            "  {} Nothing matched in this search space.",
            style("∅").dim()
        ))
        .ok();
        return;
    }

    term.write_line(&format!(
        "{}",
        style("Recovered candidates:").bold().underlined()
    ))
    .ok();
    term.write_line("").ok();

    // Matches go to stdout so they can still be piped
    for candidate in &result.matches {
        println!("{}", candidate);
    }
}
