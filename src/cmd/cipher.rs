use crate::reports;
use clap::Args;
use monocrack::api::{self, KeySource};
use monocrack::error::CrResult;
use monocrack::keyed::{KeyedCipher, Mode};
use monocrack::mapping::Mapping;
use std::path::PathBuf;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct CipherArgs {
    /// encrypt (1) or decrypt (2)
    #[arg(short, long)]
    pub mode: String,

    #[arg(short, long)]
    pub input: PathBuf,

    #[arg(short, long)]
    pub output: PathBuf,

    #[command(flatten)]
    pub key: KeyArgs,
}

#[derive(Args, Debug, Clone)]
pub struct KeyArgs {
    /// Keyword typed on the command line
    #[arg(short, long)]
    pub key: Option<String>,

    /// File holding the keyword
    #[arg(long)]
    pub key_file: Option<PathBuf>,

    /// Save a command-line keyword to this file
    #[arg(long)]
    pub save_key: Option<PathBuf>,
}

impl KeyArgs {
    pub fn resolve(&self) -> CrResult<String> {
        let source = KeySource::from_options(self.key.clone(), self.key_file.clone())?;
        let key = source.resolve()?;

        if let Some(path) = &self.save_key {
            match source {
                KeySource::Inline(_) => api::save_key(path, &key)?,
                KeySource::File(_) => warn!("--save-key ignored: key already comes from a file"),
            }
        }
        Ok(key)
    }
}

#[derive(Args, Debug, Clone)]
pub struct AlphabetArgs {
    #[command(flatten)]
    pub key: KeyArgs,
}

pub fn run(args: CipherArgs) -> CrResult<()> {
    let mode: Mode = args.mode.parse()?;
    let key = args.key.resolve()?;
    api::transform_file(mode, &args.input, &args.output, &key)?;
    println!("Done: file {}ed.", mode);
    Ok(())
}

pub fn show_alphabet(args: AlphabetArgs) -> CrResult<()> {
    let key = args.key.resolve()?;
    let cipher = KeyedCipher::new(&key)?;
    let keyed = cipher.keyed_alphabet();
    println!("Keyed alphabet: {}", keyed);
    let mapping = Mapping::from_plain_letters(keyed.as_bytes())?;
    reports::print_mapping_grid("ENCRYPT (plain -> cipher)", &mapping);
    Ok(())
}
