// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Command-line shell: key generation, encrypt-and-embed, extract-and-decrypt.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::{info, LevelFilter};

use ternstego::{
    decrypt_with_key, encrypt_and_embed, estimate_capacity, EncryptedSource, Stage, TernaryKey,
};

#[derive(Parser)]
#[command(
    name = "ternstego",
    author,
    version,
    about = "Ternary cipher + red-channel LSB steganography"
)]
struct Cli {
    /// Enable debug logging.
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive a 2187-symbol key from seed text.
    Keygen {
        #[arg(long)]
        seed: String,
        /// Write the key here instead of stdout.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Encrypt a message and hide it in a cover image.
    Encrypt {
        #[command(flatten)]
        message: MessageArgs,
        #[command(flatten)]
        key: EncryptKeyArgs,
        #[arg(long, value_name = "FILE")]
        cover: PathBuf,
        /// Stego image output (always PNG).
        #[arg(long, value_name = "FILE")]
        out: PathBuf,
        /// Also write the framed text artifact.
        #[arg(long, value_name = "FILE")]
        text_out: Option<PathBuf>,
        /// Also write the key file.
        #[arg(long, value_name = "FILE")]
        key_out: Option<PathBuf>,
    },
    /// Recover a message from a stego image or framed text.
    Decrypt {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        key: KeyArgs,
        /// Write the message here instead of stdout.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Report how many characters a cover image can hold.
    Capacity {
        #[arg(long, value_name = "FILE")]
        cover: PathBuf,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct MessageArgs {
    #[arg(long, value_name = "TEXT")]
    message: Option<String>,
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct EncryptKeyArgs {
    /// Generate the key from this seed text.
    #[arg(long)]
    seed: Option<String>,
    #[arg(long, value_name = "SYMBOLS")]
    key: Option<String>,
    #[arg(long, value_name = "FILE")]
    key_file: Option<PathBuf>,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct KeyArgs {
    #[arg(long, value_name = "SYMBOLS")]
    key: Option<String>,
    #[arg(long, value_name = "FILE")]
    key_file: Option<PathBuf>,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct SourceArgs {
    /// Stego image produced by `encrypt`.
    #[arg(long, value_name = "FILE")]
    image: Option<PathBuf>,
    /// File holding BEGIN_ENCRYPTED_DATA...END_ENCRYPTED_DATA text.
    #[arg(long, value_name = "FILE")]
    text_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match cli.command {
        Commands::Keygen { seed, out } => {
            let key = TernaryKey::generate(&seed)?;
            emit(out.as_deref(), &key.to_symbols())?;
        }
        Commands::Encrypt { message, key, cover, out, text_out, key_out } => {
            let message = match (message.message, message.input) {
                (Some(text), _) => text,
                (None, Some(path)) => read_text(&path)?,
                (None, None) => bail!("either --message or --input is required"),
            };
            let key = match (key.seed, key.key, key.key_file) {
                (Some(seed), _, _) => TernaryKey::generate(&seed)?,
                (None, key, file) => load_key(key, file)?,
            };
            let cover_bytes = fs::read(&cover)
                .with_context(|| format!("failed to read cover image {}", cover.display()))?;

            let artifacts = encrypt_and_embed(&message, &key, &cover_bytes, log_stage)?;

            fs::write(&out, &artifacts.stego_png)
                .with_context(|| format!("failed to write {}", out.display()))?;
            info!("stego image written to {}", out.display());
            if let Some(path) = text_out {
                fs::write(&path, &artifacts.framed_text)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!("encrypted text written to {}", path.display());
            }
            if let Some(path) = key_out {
                fs::write(&path, key.to_symbols())
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!("key written to {}", path.display());
            }
        }
        Commands::Decrypt { source, key, out } => {
            let key = load_key(key.key, key.key_file)?;
            let text = match (source.image, source.text_file) {
                (Some(path), _) => {
                    let bytes = fs::read(&path)
                        .with_context(|| format!("failed to read {}", path.display()))?;
                    decrypt_with_key(EncryptedSource::Image(&bytes), &key, log_stage)?
                }
                (None, Some(path)) => {
                    let framed = read_text(&path)?;
                    decrypt_with_key(EncryptedSource::Text(&framed), &key, log_stage)?
                }
                (None, None) => bail!("either --image or --text-file is required"),
            };
            emit(out.as_deref(), &text)?;
        }
        Commands::Capacity { cover } => {
            let bytes = fs::read(&cover)
                .with_context(|| format!("failed to read cover image {}", cover.display()))?;
            let chars = estimate_capacity(&bytes)?;
            println!("{chars}");
        }
    }

    Ok(())
}

fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn log_stage(stage: Stage, percent: u8) {
    info!("[{percent:>3}%] {stage}");
}

/// Resolve a key from `--key` or `--key-file`. Key files may carry a
/// trailing newline, so surrounding whitespace is trimmed.
fn load_key(key: Option<String>, file: Option<PathBuf>) -> Result<TernaryKey> {
    let symbols = match (key, file) {
        (Some(symbols), _) => symbols,
        (None, Some(path)) => read_text(&path)?,
        (None, None) => bail!("a key (--key or --key-file) is required"),
    };
    TernaryKey::parse(symbols.trim()).context("key rejected")
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn emit(out: Option<&Path>, text: &str) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
            info!("written to {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}
