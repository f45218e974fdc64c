use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encrypt or decrypt a file with a keyword cipher
    Cipher(cmd::cipher::CipherArgs),
    /// Recover plaintext from a keyword-cipher file without the key
    Crack(cmd::crack::CrackArgs),
    /// Print the keyed alphabet a keyword produces
    Alphabet(cmd::cipher::AlphabetArgs),
}

fn main() {
    // 1. Parse raw matches (so config merging can tell typed flags from defaults)
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    info!("🚀 monocrack {}", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Commands::Cipher(args) => cmd::cipher::run(args),
        Commands::Crack(args) => match matches.subcommand_matches("crack") {
            Some(sub) => cmd::crack::run(args, sub),
            None => cmd::crack::run(args, &matches),
        },
        Commands::Alphabet(args) => cmd::cipher::show_alphabet(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
