use rand::rand_core;
use thiserror::Error;

/// AES Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// AES Error type.
///
/// Returned by the typed API ([Cipher](crate::Cipher), [Key](crate::Key),
/// [AesCtrRng](crate::AesCtrRng)). The `(output, success)` mode functions never
/// expose it.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to instantiate an AES key with an input size that is not 128, 192, or 256 bits.
    #[error("invalid key length: {len} bytes (expected 16, 24, or 32)")]
    InvalidKeyLength { len: usize },

    /// CBC, CFB and OFB require a 16-byte initialisation vector.
    #[error("invalid IV length: {len} bytes (expected 16)")]
    InvalidIvLength { len: usize },

    /// CTR requires an 8-byte nonce.
    #[error("invalid nonce length: {len} bytes (expected 8)")]
    InvalidNonceLength { len: usize },

    /// Provided ciphertext that did not match the expected format of the mode of operation.
    #[error("invalid ciphertext length: {len} bytes ({context})")]
    InvalidCiphertext { len: usize, context: &'static str },

    /// ECB and CBC cores only accept whole 16-byte blocks.
    #[error("input length {len} is not a multiple of the 16-byte block size")]
    UnalignedInput { len: usize },

    /// Decrypted data did not end in well-formed PKCS#7 padding.
    #[error("invalid PKCS#7 padding")]
    InvalidPadding,

    /// OS RNG failed while seeding the generator.
    #[error("OS RNG failed while seeding")]
    Rng(#[from] rand_core::OsError),
}
