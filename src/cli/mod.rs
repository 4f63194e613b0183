use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::info;
use std::path::PathBuf;

use crate::classifier::{classify_record, MatchMode, LIBRARIES};
use crate::config::Settings;
use crate::corpus::{load_corpus, load_record};
use crate::index::ReverseIndex;
use crate::report::{self, ReportFormat, CATEGORIES};

#[derive(Parser, Debug)]
#[command(name = "nlascan")]
#[command(version, about = "NLA library usage analyzer for application survey corpora", long_about = None)]
pub struct Args {
    /// Corpus directory of JSON survey records
    #[arg(value_name = "CORPUS")]
    pub corpus: Option<PathBuf>,

    /// Report layout: grouped (by category) or flat (ranked)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Print per-application classification detail after the report
    #[arg(short, long)]
    pub audit: bool,

    /// Require word boundaries around library names instead of bare
    /// substring matching
    #[arg(short = 'w', long)]
    pub word_boundary: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (suppress output)
    #[arg(short, long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate survey records without classifying
    Check {
        /// Record files to check
        records: Vec<PathBuf>,
    },

    /// List recognizable libraries and their surface variants
    Libraries,

    /// Show the category taxonomy
    Categories,
}

pub fn run(args: Args) -> Result<()> {
    // Set up logging; RUST_LOG still wins when the user sets it
    let default_level = if args.verbose && !args.quiet {
        log::LevelFilter::Debug
    } else if args.quiet {
        log::LevelFilter::Error
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();
    info!("Starting nlascan v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Some(Commands::Check { ref records }) => {
            check_records(records)?;
        }
        Some(Commands::Libraries) => {
            show_libraries();
        }
        Some(Commands::Categories) => {
            show_categories();
        }
        None => {
            analyze_corpus(&args)?;
        }
    }

    Ok(())
}

/// Resolved run options: config file values overridden by CLI flags.
struct RunOptions {
    mode: MatchMode,
    format: ReportFormat,
    audit: bool,
}

fn resolve_options(args: &Args) -> Result<RunOptions> {
    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let mode = if args.word_boundary {
        MatchMode::WordBoundary
    } else {
        settings.match_mode()?.unwrap_or_default()
    };

    let format = match &args.format {
        Some(raw) => ReportFormat::from_str(raw)
            .with_context(|| format!("unknown report format: {}", raw))?,
        None => settings.format()?.unwrap_or_default(),
    };

    let audit = args.audit || settings.audit.unwrap_or(false);

    Ok(RunOptions { mode, format, audit })
}

fn analyze_corpus(args: &Args) -> Result<()> {
    let corpus_dir = args
        .corpus
        .as_ref()
        .context("a corpus directory is required")?;
    let options = resolve_options(args)?;

    let records = load_corpus(corpus_dir)?;
    info!("Loaded {} records from {}", records.len(), corpus_dir.display());

    let classified: Vec<_> = records
        .iter()
        .map(|record| (record.name().to_string(), classify_record(record, options.mode)))
        .collect();

    let index = ReverseIndex::from_classifications(
        classified
            .iter()
            .map(|(name, classification)| (name.as_str(), classification)),
    );
    info!("Indexed {} libraries", index.len());

    if !args.quiet {
        let rendered = match options.format {
            ReportFormat::Flat => report::render_flat(&index),
            ReportFormat::Grouped => report::render_grouped(&index),
        };
        print!("{}", rendered);

        if options.audit {
            println!();
            print!("{}", report::render_audit(&classified));
        }
    }

    Ok(())
}

fn check_records(records: &[PathBuf]) -> Result<()> {
    for path in records {
        match load_record(path) {
            Ok(record) => {
                println!(
                    "{} {} - {} ({} fields)",
                    "✓".green(),
                    path.display(),
                    record.name(),
                    record.field_count()
                );
            }
            Err(e) => {
                println!("{} {} - {}", "✗".red(), path.display(), e);
            }
        }
    }

    Ok(())
}

fn show_libraries() {
    println!("{}", "Recognizable libraries:".bold());
    println!("{}", "-".repeat(30));

    for spec in LIBRARIES {
        println!("{:<20} {}", spec.canonical, spec.variants.join(", "));
    }
}

fn show_categories() {
    println!("{}", "Category taxonomy:".bold());
    println!("{}", "-".repeat(30));

    for category in CATEGORIES {
        println!("\n{}:", category.name.cyan().bold());
        for library in category.libraries {
            println!("  {}", library);
        }
    }
}
