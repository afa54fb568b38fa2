//! TitanWall CLI - command-line front end for the TitanWall ciphers.
//!
//! Provides commands for:
//! - Printing keystream bytes as hex
//! - XOR-encrypting files with the stream cipher
//! - Encrypting and decrypting block-aligned files with the block cipher

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use zeroize::Zeroizing;

use titanwall::{TitanWallBlockCipher, TitanWallStreamCipher, BLOCK_BYTES};

/// TitanWall block and stream cipher tool.
#[derive(Parser)]
#[command(name = "titanwall")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    key: KeyArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct KeyArgs {
    /// Key given as text; its UTF-8 bytes are the key
    #[arg(short, long)]
    key: Option<String>,

    /// File whose raw bytes are the key
    #[arg(long)]
    key_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print keystream bytes as hex
    Keystream {
        /// Number of bytes to generate
        #[arg(short, long, default_value_t = 32)]
        len: usize,
    },

    /// XOR a file with the keystream (encrypts and decrypts)
    Stream {
        /// Input file
        input: PathBuf,

        /// Output file
        output: PathBuf,
    },

    /// Encrypt a file whose length is a multiple of 32 bytes
    Encrypt {
        /// Plaintext file
        input: PathBuf,

        /// Ciphertext output file
        output: PathBuf,
    },

    /// Decrypt a file produced by `encrypt`
    Decrypt {
        /// Ciphertext file
        input: PathBuf,

        /// Plaintext output file
        output: PathBuf,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set up logging")?;

    let key = load_key(&mut cli.key)?;

    match cli.command {
        Commands::Keystream { len } => cmd_keystream(&key, len),
        Commands::Stream { input, output } => cmd_stream(&key, &input, &output),
        Commands::Encrypt { input, output } => cmd_block(&key, &input, &output, true),
        Commands::Decrypt { input, output } => cmd_block(&key, &input, &output, false),
    }
}

/// Takes the key out of the parsed arguments into a buffer scrubbed on drop.
fn load_key(args: &mut KeyArgs) -> Result<Zeroizing<Vec<u8>>> {
    let key = match (args.key.take(), &args.key_file) {
        (Some(text), _) => Zeroizing::new(text.into_bytes()),
        (None, Some(path)) => Zeroizing::new(
            fs::read(path)
                .with_context(|| format!("Failed to read key file: {}", path.display()))?,
        ),
        (None, None) => bail!("A key is required (--key or --key-file)"),
    };
    if key.is_empty() {
        bail!("Key must not be empty");
    }
    Ok(key)
}

fn cmd_keystream(key: &[u8], len: usize) -> Result<()> {
    let mut cipher = TitanWallStreamCipher::new(key)?;
    let mut bytes = vec![0u8; len];
    cipher.generate_pseudo_random_bytes(&mut bytes)?;
    println!("{}", hex::encode(&bytes));
    Ok(())
}

fn cmd_stream(key: &[u8], input: &Path, output: &Path) -> Result<()> {
    let mut data =
        fs::read(input).with_context(|| format!("Failed to read input: {}", input.display()))?;
    info!(len = data.len(), "applying keystream");

    let mut cipher = TitanWallStreamCipher::new(key)?;
    cipher.apply_keystream(&mut data)?;

    fs::write(output, &data)
        .with_context(|| format!("Failed to write output: {}", output.display()))?;
    println!("[ok] wrote {} bytes -> {}", data.len(), output.display());
    Ok(())
}

fn cmd_block(key: &[u8], input: &Path, output: &Path, encrypt: bool) -> Result<()> {
    let data =
        fs::read(input).with_context(|| format!("Failed to read input: {}", input.display()))?;
    if !data.len().is_multiple_of(BLOCK_BYTES) {
        bail!(
            "Input is {} bytes; block mode needs a multiple of {} bytes",
            data.len(),
            BLOCK_BYTES
        );
    }
    info!(blocks = data.len() / BLOCK_BYTES, encrypt, "running block cipher");

    let cipher = TitanWallBlockCipher::new(key)?;
    let result = if encrypt {
        cipher.encrypt_bytes(&data)?
    } else {
        cipher.decrypt_bytes(&data)?
    };

    fs::write(output, &result)
        .with_context(|| format!("Failed to write output: {}", output.display()))?;
    println!("[ok] wrote {} bytes -> {}", result.len(), output.display());
    Ok(())
}
