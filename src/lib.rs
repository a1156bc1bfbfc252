//! AES (FIPS-197) built up from GF(2^8) arithmetic, with ECB, CBC, CFB, OFB and CTR modes of
//! operation, PKCS#7 padding, and an AES-CTR random generator for keys, IVs and nonces.
//!
//! Two layers are exposed:
//! - a typed API: [Cipher] expands a [Key] once and returns [Result] from every mode;
//! - byte-slice functions such as [encrypt_cbc] that return `(output, success)` and never
//!   surface an error or panic to the caller.
//!
//! Lookup tables are fixed, so execution time depends on secret data. Not suitable where
//! side channels matter.
//!
//! ```
//! use aesmodes::{AesCtrRng, KeySize, decrypt_ctr, encrypt_ctr};
//!
//! # fn main() -> aesmodes::Result<()> {
//! let mut rng = AesCtrRng::new()?;
//! let key = rng.generate_key(KeySize::Bits128);
//! let nonce = rng.generate_nonce();
//!
//! let (ciphertext, ok) = encrypt_ctr(b"attack at dawn", key.as_bytes(), &nonce);
//! assert!(ok);
//! assert_eq!(decrypt_ctr(&ciphertext, key.as_bytes(), &nonce), (b"attack at dawn".to_vec(), true));
//! # Ok(())
//! # }
//! ```

mod block;
mod cipher;
mod error;
mod interface;
mod key;
mod modes;
mod rng;

pub use block::constants::{RCON, SBOX, SBOX_INV};
pub use block::gf;
pub use block::{decrypt, decrypt_block, encrypt, encrypt_block, expand_key, schedule_len};
pub use cipher::Cipher;
pub use error::{Error, Result};
pub use interface::{
    decrypt_cbc, decrypt_cfb, decrypt_ctr, decrypt_ecb, decrypt_ofb, encrypt_cbc, encrypt_cfb,
    encrypt_ctr, encrypt_ecb, encrypt_ofb,
};
pub use key::{Key, KeySize};
pub use modes::{
    Mode, PARALLEL_THRESHOLD, cbc_decrypt, cbc_encrypt, cfb_decrypt, cfb_encrypt, ctr_apply,
    ecb_decrypt, ecb_encrypt, increment_counter, ofb_apply, pad, unpad,
};
pub use rng::AesCtrRng;
