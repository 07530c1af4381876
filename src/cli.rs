//! Command-line entry point: count first-hand wins in a file of matchups.
use crate::batch::Matchup;
use crate::batch::Policy;
use crate::batch::Tally;
use anyhow::Context;
use clap::Parser;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Count how often the first of two poker hands wins",
    long_about = None
)]
pub struct Args {
    /// File with one matchup (ten card tokens) per line
    pub path: PathBuf,
    /// Skip malformed lines instead of aborting the run
    #[arg(long)]
    pub skip_invalid: bool,
    /// Print every matchup with both classifications
    #[arg(long)]
    pub explain: bool,
    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
    /// Worker threads, one per CPU by default
    #[arg(long)]
    pub threads: Option<usize>,
    /// Log at debug level
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
    /// Also write debug-level logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn policy(&self) -> Policy {
        if self.skip_invalid {
            Policy::Skip
        } else {
            Policy::Abort
        }
    }
    pub fn level(&self) -> log::LevelFilter {
        match (self.verbose, self.quiet) {
            (true, _) => log::LevelFilter::Debug,
            (_, true) => log::LevelFilter::Warn,
            _ => log::LevelFilter::Info,
        }
    }
    pub fn threads(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get).max(1)
    }
}

pub fn run(args: Args) -> anyhow::Result<()> {
    log(args.level(), args.log_file.as_deref())?;
    let text = std::fs::read_to_string(&args.path)
        .with_context(|| format!("Error opening file {}", args.path.display()))?;
    log::info!("settling {} on {} threads", args.path.display(), args.threads());
    if args.explain {
        explain(&text);
    }
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads())
        .build()
        .context("build worker pool")?;
    let summary = pool.install(|| Tally::from(args.policy()).count(&text))?;
    if summary.skipped() > 0 {
        log::warn!("{} malformed lines skipped", summary.skipped());
    }
    match args.json {
        true => println!("{}", serde_json::to_string(&summary)?),
        false => println!("{}", summary),
    }
    Ok(())
}

fn explain(text: &str) {
    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        match Matchup::try_from(line) {
            Ok(matchup) => println!("{}", matchup.explain()),
            Err(e) => println!("{} ({})", line.trim(), e),
        }
    }
}

/// Initialize terminal logging on stderr, plus an optional debug-level
/// log file. Stdout stays reserved for results.
pub fn log(level: log::LevelFilter, file: Option<&Path>) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )];
    if let Some(path) = file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("create log file {}", path.display()))?;
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config.clone(),
            file,
        ));
    }
    simplelog::CombinedLogger::init(loggers).context("initialize logger")
}
