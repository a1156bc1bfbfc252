//! Core AES implementation: GF(2^8) arithmetic, key schedule, and encryption and decryption
//! of a single 16 byte block.

pub mod constants;
pub mod gf;
mod decryption;
mod encryption;
mod schedule;
mod util;

pub use decryption::decrypt_block;
pub use encryption::encrypt_block;
pub use schedule::{expand_key, schedule_len};

use zeroize::Zeroizing;

use crate::key::Key;

/// Encrypts one block, deriving the key schedule for this call only.
/// Use a [Cipher](crate::Cipher) to expand the key once for many blocks.
pub fn encrypt(block: &[u8; 16], key: &Key) -> [u8; 16] {
    let round_keys = Zeroizing::new(expand_key(key));
    encrypt_block(block, &round_keys)
}

/// Decrypts one block, deriving the key schedule for this call only.
pub fn decrypt(block: &[u8; 16], key: &Key) -> [u8; 16] {
    let round_keys = Zeroizing::new(expand_key(key));
    decrypt_block(block, &round_keys)
}
