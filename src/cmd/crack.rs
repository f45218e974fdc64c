use crate::reports;
use clap::{ArgMatches, Args};
use monocrack::api::{self, CrackReport};
use monocrack::config::Config;
use monocrack::error::CrResult;
use monocrack::optimizer::runner::ProgressCallback;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Args, Debug, Clone)]
pub struct CrackArgs {
    #[command(flatten)]
    pub config: Config,

    /// Encrypted text file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Where the cracked text is written
    #[arg(short, long)]
    pub output: PathBuf,

    /// Word list, one word per line
    #[arg(short, long)]
    pub dictionary: PathBuf,

    /// JSON file with search/scoring parameters; flags override it
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    /// Also write a JSON summary of the run here
    #[arg(long)]
    pub report: Option<PathBuf>,
}

struct LogProgress;

impl ProgressCallback for LogProgress {
    fn on_progress(&self, chain: usize, iteration: usize, score: usize) -> bool {
        debug!("Chain {:2} | It {:6} | Score {}", chain, iteration, score);
        true
    }
}

pub fn run(args: CrackArgs, matches: &ArgMatches) -> CrResult<()> {
    let config = match &args.config_file {
        Some(path) => {
            info!("⚖️  Loading parameters from: {}", path.display());
            let mut file_config = Config::load_from_file(path)?;
            file_config.merge_from_cli(&args.config, matches);
            file_config
        }
        None => args.config.clone(),
    };

    info!(
        "🔥 Cracking with {} chain(s) x {} iterations (words > {} letters)",
        config.search.chains.max(1),
        config.search.iterations,
        config.scoring.min_word_len
    );

    let outcome = api::crack_file(&args.input, &args.output, &args.dictionary, config, &LogProgress)?;

    reports::print_crack_summary(&outcome);
    reports::print_mapping_grid("RECOVERED", &outcome.mapping());

    if let Some(path) = &args.report {
        api::write_report(path, &CrackReport::from(&outcome))?;
        info!("📝 Report written to {}", path.display());
    }

    println!("Done: cracked text written to {}", args.output.display());
    Ok(())
}
