use zeroize::Zeroize;

use crate::block::{decrypt_block, encrypt_block, expand_key};
use crate::error::{Error, Result};
use crate::key::Key;
use crate::modes::*;

/// Provides encryption and decryption functions for AES in modes [ECB](crate::Cipher::encrypt_ecb),
/// [CBC](crate::Cipher::encrypt_cbc), [CFB](crate::Cipher::encrypt_cfb), [OFB](crate::Cipher::encrypt_ofb)
/// and [CTR](crate::Cipher::encrypt_ctr).
/// Instantiated with an AES [Key], which is expanded into round keys once and stored in the instance.
///
/// Every mode PKCS#7 pads the plaintext, so ciphertext is always a non-empty multiple of 16 bytes,
/// and decryption validates the padding before returning.
///
/// ```
/// # fn main() -> aesmodes::Result<()> {
/// use aesmodes::{Cipher, Key};
///
/// let key = Key::try_from_slice(&[0x2b; 16])?;
/// let cipher = Cipher::new(&key);
/// let iv = [0x0f; 16];
///
/// let ciphertext = cipher.encrypt_cbc(b"Hello, World!", &iv)?;
/// assert_eq!(ciphertext.len(), 16);
/// assert_eq!(cipher.decrypt_cbc(&ciphertext, &iv)?, b"Hello, World!");
/// # Ok(())
/// # }
/// ```
pub struct Cipher {
    round_keys: Vec<[u8; 16]>,
}

impl Cipher {
    /// Generates round keys from provided key and stores in the returned instance.
    pub fn new(key: &Key) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    /// Getter for internal round keys. Returned as a slice of 16-byte arrays.
    pub fn get_round_keys(&self) -> &[[u8; 16]] {
        &self.round_keys
    }

    /// Encrypts a single block.
    pub fn encrypt_block(&self, block: &[u8; 16]) -> [u8; 16] {
        encrypt_block(block, &self.round_keys)
    }

    /// Decrypts a single block.
    pub fn decrypt_block(&self, block: &[u8; 16]) -> [u8; 16] {
        decrypt_block(block, &self.round_keys)
    }

    /// **Electronic codebook** encryption.
    ///
    /// Encrypts each 16-byte block entirely independently
    /// and chains them together. **Vulnerable to pattern emergence in the ciphertext.**
    pub fn encrypt_ecb(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        ecb_encrypt(&pad(plaintext), &self.round_keys)
    }

    /// **Electronic codebook** decryption.
    pub fn decrypt_ecb(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        check_ciphertext(ciphertext, "ECB")?;
        finish(ecb_decrypt(ciphertext, &self.round_keys)?)
    }

    /// **Cipher block chaining** encryption.
    ///
    /// Each plaintext block is `XOR`'d with the previous ciphertext block (the IV for the first)
    /// before encryption, so identical blocks no longer produce identical ciphertext.
    /// The IV must be unpredictable for every message.
    pub fn encrypt_cbc(&self, plaintext: &[u8], iv: &[u8; 16]) -> Result<Vec<u8>> {
        cbc_encrypt(&pad(plaintext), &self.round_keys, iv)
    }

    /// **Cipher block chaining** decryption.
    pub fn decrypt_cbc(&self, ciphertext: &[u8], iv: &[u8; 16]) -> Result<Vec<u8>> {
        check_ciphertext(ciphertext, "CBC")?;
        finish(cbc_decrypt(ciphertext, &self.round_keys, iv)?)
    }

    /// **Cipher feedback** encryption (128-bit feedback).
    ///
    /// The previous ciphertext block (the IV for the first) is encrypted to form the keystream
    /// for the next plaintext block.
    pub fn encrypt_cfb(&self, plaintext: &[u8], iv: &[u8; 16]) -> Result<Vec<u8>> {
        Ok(cfb_encrypt(&pad(plaintext), &self.round_keys, iv))
    }

    /// **Cipher feedback** decryption. Only the forward cipher is used.
    pub fn decrypt_cfb(&self, ciphertext: &[u8], iv: &[u8; 16]) -> Result<Vec<u8>> {
        check_ciphertext(ciphertext, "CFB")?;
        finish(cfb_decrypt(ciphertext, &self.round_keys, iv))
    }

    /// **Output feedback** encryption.
    ///
    /// The IV is encrypted repeatedly to form a keystream that is independent of the data.
    /// **Important**: reusing an IV with the same key reuses the keystream.
    pub fn encrypt_ofb(&self, plaintext: &[u8], iv: &[u8; 16]) -> Result<Vec<u8>> {
        Ok(ofb_apply(&pad(plaintext), &self.round_keys, iv))
    }

    /// **Output feedback** decryption.
    pub fn decrypt_ofb(&self, ciphertext: &[u8], iv: &[u8; 16]) -> Result<Vec<u8>> {
        check_ciphertext(ciphertext, "OFB")?;
        finish(ofb_apply(ciphertext, &self.round_keys, iv))
    }

    /// **Counter mode** encryption.
    ///
    /// For each 16-byte block of plaintext:
    /// 1. The 8-byte nonce and 8-byte big-endian counter (starts at zero) form a 16-byte block.
    /// 2. The `Nonce || Counter` block is encrypted using the round keys.
    /// 3. The plaintext block is `XOR`'d with the encrypted counter block.
    /// 4. The counter is incremented, wrapping without carrying into the nonce.
    ///
    /// **Important**: the same nonce must never be reused with the same key.
    pub fn encrypt_ctr(&self, plaintext: &[u8], nonce: &[u8; 8]) -> Result<Vec<u8>> {
        Ok(ctr_apply(&pad(plaintext), &self.round_keys, nonce, 0))
    }

    /// **Counter mode** decryption.
    pub fn decrypt_ctr(&self, ciphertext: &[u8], nonce: &[u8; 8]) -> Result<Vec<u8>> {
        check_ciphertext(ciphertext, "CTR")?;
        finish(ctr_apply(ciphertext, &self.round_keys, nonce, 0))
    }

    /// Encrypts with the given mode. `param` is the 16-byte IV for CBC/CFB/OFB, the 8-byte
    /// nonce for CTR, and is ignored for ECB.
    pub fn encrypt(&self, mode: Mode, plaintext: &[u8], param: &[u8]) -> Result<Vec<u8>> {
        match mode {
            Mode::Ecb => self.encrypt_ecb(plaintext),
            Mode::Cbc => self.encrypt_cbc(plaintext, &iv_from(param)?),
            Mode::Cfb => self.encrypt_cfb(plaintext, &iv_from(param)?),
            Mode::Ofb => self.encrypt_ofb(plaintext, &iv_from(param)?),
            Mode::Ctr => self.encrypt_ctr(plaintext, &nonce_from(param)?),
        }
    }

    /// Decrypts with the given mode. `param` as for [encrypt](crate::Cipher::encrypt).
    pub fn decrypt(&self, mode: Mode, ciphertext: &[u8], param: &[u8]) -> Result<Vec<u8>> {
        match mode {
            Mode::Ecb => self.decrypt_ecb(ciphertext),
            Mode::Cbc => self.decrypt_cbc(ciphertext, &iv_from(param)?),
            Mode::Cfb => self.decrypt_cfb(ciphertext, &iv_from(param)?),
            Mode::Ofb => self.decrypt_ofb(ciphertext, &iv_from(param)?),
            Mode::Ctr => self.decrypt_ctr(ciphertext, &nonce_from(param)?),
        }
    }
}

impl Drop for Cipher {
    fn drop(&mut self) {
        self.round_keys.zeroize();
    }
}

/// Padded ciphertext is always at least one whole block.
fn check_ciphertext(ciphertext: &[u8], context: &'static str) -> Result<()> {
    if ciphertext.is_empty() || ciphertext.len() % 16 != 0 {
        return Err(Error::InvalidCiphertext {
            len: ciphertext.len(),
            context,
        });
    }
    Ok(())
}

fn finish(mut plaintext: Vec<u8>) -> Result<Vec<u8>> {
    unpad(&mut plaintext)?;
    Ok(plaintext)
}

fn iv_from(bytes: &[u8]) -> Result<[u8; 16]> {
    bytes
        .try_into()
        .map_err(|_| Error::InvalidIvLength { len: bytes.len() })
}

fn nonce_from(bytes: &[u8]) -> Result<[u8; 8]> {
    bytes
        .try_into()
        .map_err(|_| Error::InvalidNonceLength { len: bytes.len() })
}
