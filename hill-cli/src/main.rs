mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use hill_cipher::key::{HillCipher, KeyMatrix};
use hill_cipher::ring::Ring;

use std::io;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::init();

    let cli = Cli::parse();
    let output = run(&cli)?;
    println!("{}", output);

    Ok(())
}

/// Executes the parsed command and returns the text to print.
fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Commands::Encrypt { text } => {
            let cipher = HillCipher::new(load_key(cli)?);
            let text = read_text(text.clone(), "Please enter some plaintext to encrypt.")?;
            Ok(cipher.encrypt(&text).context("Encryption failed")?)
        }
        Commands::Decrypt { text } => {
            let cipher = HillCipher::new(load_key(cli)?);
            let text = read_text(text.clone(), "Please enter some ciphertext to decrypt.")?;
            Ok(cipher.decrypt(&text).context("Decryption failed")?)
        }
        Commands::Inverse => {
            let key = load_key(cli)?;
            let inverse = key.inverse().context("Inversion failed")?;
            Ok(format!("{}\n{}", inverse, inverse.to_json()?))
        }
        Commands::Determinant => {
            let key = load_key(cli)?;
            let det = key.determinant();
            let det_line = match Ring::alphabet().inv(det) {
                Some(inv) => format!("det = {} (inverse {} mod 26)", det, inv),
                None => format!("det = {} (no inverse mod 26)", det),
            };
            Ok(format!("{}\ninvertible: {}", det_line, key.is_invertible()))
        }
        Commands::Keygen => {
            let key = KeyMatrix::random_invertible(cli.size, &mut rand::rng())
                .context("Key generation failed")?;
            Ok(key.to_json()?)
        }
    }
}

fn load_key(cli: &Cli) -> Result<KeyMatrix> {
    let key = match &cli.key {
        Some(json) => KeyMatrix::from_json(json).context("Invalid key matrix")?,
        None => KeyMatrix::default_for_size(cli.size).context("Invalid key size")?,
    };
    log::debug!("using {}x{} key {:?}", key.size(), key.size(), key.rows());
    Ok(key)
}

fn read_text(arg: Option<String>, empty_message: &str) -> Result<String> {
    let text = match arg {
        Some(text) => text,
        None => io::read_to_string(io::stdin()).context("Failed to read stdin")?,
    };
    if text.trim().is_empty() {
        bail!("{}", empty_message);
    }
    Ok(text)
}
