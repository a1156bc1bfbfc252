mod args;

use args::{Cli, CommonArgs, Commands};
use clap::Parser;

use std::process::ExitCode;
use std::time::Instant;

use aesmodes::{AesCtrRng, Cipher, Key, Mode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid --{name} hex: {source}")]
    InvalidHex {
        name: &'static str,
        source: hex::FromHexError,
    },

    #[error("--iv is only valid with --mode cbc, cfb or ofb")]
    IvInvalidMode,

    #[error("--nonce is only valid with --mode ctr")]
    NonceInvalidMode,

    #[error("--{0} is required to decrypt in this mode")]
    Missing(&'static str),

    #[error(transparent)]
    Aes(#[from] aesmodes::Error),
}

fn main() -> ExitCode {
    match aes_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn aes_cli() -> Result<(), CliError> {
    let args = Cli::parse();

    match args.command {
        Commands::Encrypt(enc) => {
            let mode: Mode = enc.common.mode.into();
            let plaintext = decode("input", &enc.common.input)?;
            let mut rng = AesCtrRng::new()?;

            // supplied or generated key
            let key = match &enc.key {
                Some(hex) => Key::try_from_slice(&decode("key", hex)?)?,
                None => rng.generate_key(enc.key_size.into()),
            };
            let param = mode_param(mode, &enc.common, Some(&mut rng))?;

            let start = Instant::now();
            let ciphertext = Cipher::new(&key).encrypt(mode, &plaintext, &param)?;
            let duration = start.elapsed();

            println!("ciphertext: {}", hex::encode(&ciphertext));
            println!("key:        {}", hex::encode(key.as_bytes()));
            if mode.needs_iv() {
                println!("iv:         {}", hex::encode(&param));
            } else if mode.needs_nonce() {
                println!("nonce:      {}", hex::encode(&param));
            }
            eprintln!(
                "Encrypted {} bytes in {} ms",
                plaintext.len(),
                duration.as_millis()
            );
            Ok(())
        }
        Commands::Decrypt(dec) => {
            let mode: Mode = dec.common.mode.into();
            let ciphertext = decode("input", &dec.common.input)?;
            let key = Key::try_from_slice(&decode("key", &dec.key)?)?;
            let param = mode_param(mode, &dec.common, None)?;

            let start = Instant::now();
            let plaintext = Cipher::new(&key).decrypt(mode, &ciphertext, &param)?;
            let duration = start.elapsed();

            println!("plaintext: {}", hex::encode(&plaintext));
            eprintln!(
                "Decrypted {} bytes in {} ms",
                plaintext.len(),
                duration.as_millis()
            );
            Ok(())
        }
    }
}

/// IV or nonce for `mode`. When one is needed but not given it is drawn from `rng`, or is an
/// error if there is no generator (decryption).
fn mode_param(
    mode: Mode,
    common: &CommonArgs,
    rng: Option<&mut AesCtrRng>,
) -> Result<Vec<u8>, CliError> {
    if common.iv.is_some() && !mode.needs_iv() {
        return Err(CliError::IvInvalidMode);
    }
    if common.nonce.is_some() && !mode.needs_nonce() {
        return Err(CliError::NonceInvalidMode);
    }

    let (name, given) = if mode.needs_iv() {
        ("iv", &common.iv)
    } else if mode.needs_nonce() {
        ("nonce", &common.nonce)
    } else {
        return Ok(Vec::new());
    };

    match (given, rng) {
        (Some(hex), _) => decode(name, hex),
        (None, Some(rng)) if mode.needs_iv() => Ok(rng.generate_iv().to_vec()),
        (None, Some(rng)) => Ok(rng.generate_nonce().to_vec()),
        (None, None) => Err(CliError::Missing(name)),
    }
}

fn decode(name: &'static str, s: &str) -> Result<Vec<u8>, CliError> {
    let trimmed: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(trimmed).map_err(|source| CliError::InvalidHex { name, source })
}
