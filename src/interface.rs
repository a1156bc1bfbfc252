//! Mode-of-operation entry points over raw byte slices.
//!
//! Every function returns `(output, success)`. Bad key, IV or nonce lengths, malformed ciphertext,
//! invalid padding and panics below this layer all produce `(Vec::new(), false)`; no error or
//! panic reaches the caller.

use std::panic::{self, UnwindSafe};

use crate::cipher::Cipher;
use crate::error::Result;
use crate::key::Key;
use crate::modes::Mode;

fn guarded<F>(op: F) -> (Vec<u8>, bool)
where
    F: FnOnce() -> Result<Vec<u8>> + UnwindSafe,
{
    match panic::catch_unwind(op) {
        Ok(Ok(output)) => (output, true),
        Ok(Err(_)) | Err(_) => (Vec::new(), false),
    }
}

fn run(encrypt: bool, mode: Mode, input: &[u8], key: &[u8], param: &[u8]) -> (Vec<u8>, bool) {
    guarded(|| {
        let cipher = Cipher::new(&Key::try_from_slice(key)?);
        if encrypt {
            cipher.encrypt(mode, input, param)
        } else {
            cipher.decrypt(mode, input, param)
        }
    })
}

/// ECB encryption with PKCS#7 padding.
pub fn encrypt_ecb(input: &[u8], key: &[u8]) -> (Vec<u8>, bool) {
    run(true, Mode::Ecb, input, key, &[])
}

/// ECB decryption. Fails on unaligned input or invalid padding.
pub fn decrypt_ecb(input: &[u8], key: &[u8]) -> (Vec<u8>, bool) {
    run(false, Mode::Ecb, input, key, &[])
}

/// CBC encryption with a 16-byte IV.
pub fn encrypt_cbc(input: &[u8], key: &[u8], iv: &[u8]) -> (Vec<u8>, bool) {
    run(true, Mode::Cbc, input, key, iv)
}

/// CBC decryption with a 16-byte IV.
pub fn decrypt_cbc(input: &[u8], key: &[u8], iv: &[u8]) -> (Vec<u8>, bool) {
    run(false, Mode::Cbc, input, key, iv)
}

/// CFB-128 encryption with a 16-byte IV.
pub fn encrypt_cfb(input: &[u8], key: &[u8], iv: &[u8]) -> (Vec<u8>, bool) {
    run(true, Mode::Cfb, input, key, iv)
}

/// CFB-128 decryption with a 16-byte IV.
pub fn decrypt_cfb(input: &[u8], key: &[u8], iv: &[u8]) -> (Vec<u8>, bool) {
    run(false, Mode::Cfb, input, key, iv)
}

/// OFB encryption with a 16-byte IV.
pub fn encrypt_ofb(input: &[u8], key: &[u8], iv: &[u8]) -> (Vec<u8>, bool) {
    run(true, Mode::Ofb, input, key, iv)
}

/// OFB decryption with a 16-byte IV.
pub fn decrypt_ofb(input: &[u8], key: &[u8], iv: &[u8]) -> (Vec<u8>, bool) {
    run(false, Mode::Ofb, input, key, iv)
}

/// CTR encryption with an 8-byte nonce.
pub fn encrypt_ctr(input: &[u8], key: &[u8], nonce: &[u8]) -> (Vec<u8>, bool) {
    run(true, Mode::Ctr, input, key, nonce)
}

/// CTR decryption with an 8-byte nonce.
pub fn decrypt_ctr(input: &[u8], key: &[u8], nonce: &[u8]) -> (Vec<u8>, bool) {
    run(false, Mode::Ctr, input, key, nonce)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn panics_become_failure() {
        let (out, ok) = guarded(|| panic!("fault below the boundary"));
        assert!(!ok);
        assert!(out.is_empty());
    }

    #[test]
    fn errors_become_failure() {
        let (out, ok) = guarded(|| Err(Error::InvalidPadding));
        assert!(!ok);
        assert!(out.is_empty());
    }

    #[test]
    fn bad_lengths_fail() {
        let key = [0u8; 16];
        assert!(!encrypt_ecb(b"abc", &key[..10]).1);
        assert!(!encrypt_cbc(b"abc", &key, &[0u8; 8]).1);
        assert!(!encrypt_ctr(b"abc", &key, &[0u8; 16]).1);
        assert!(!decrypt_ofb(&[0u8; 16], &key, &[]).1);
    }

    #[test]
    fn ecb_full_block_round_trip() {
        let key = [7u8; 24];
        let (ct, ok) = encrypt_ecb(b"sixteen byte msg", &key);
        assert!(ok);
        assert_eq!(ct.len(), 32);
        assert_eq!(decrypt_ecb(&ct, &key), (b"sixteen byte msg".to_vec(), true));
    }
}
