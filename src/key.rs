//! Defines the [`Key`] struct, which holds a valid AES key of 128, 192, or 256 bits.
//! Keys can be drawn from a cryptographic RNG or constructed from an existing byte slice.

use rand::CryptoRng;
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Supported AES key sizes.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum KeySize {
    Bits128,
    Bits192,
    Bits256,
}

impl KeySize {
    /// Key length in bytes.
    pub const fn bytes(self) -> usize {
        match self {
            KeySize::Bits128 => 16,
            KeySize::Bits192 => 24,
            KeySize::Bits256 => 32,
        }
    }

    /// Number of rounds (Nr) for this key size.
    pub const fn rounds(self) -> usize {
        self.bytes() / 4 + 6
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
enum KeyBytes {
    K128([u8; 16]),
    K192([u8; 24]),
    K256([u8; 32]),
}

/// Contains a valid AES key. Can be drawn from a random generator, or built from a slice
/// of bytes that is 16, 24, or 32 bytes long.
/// A `Key` is required to instantiate a [Cipher](crate::Cipher).
///
/// Key bytes are zeroed when the `Key` is dropped.
///
/// ## Examples
/// ```
/// # fn main() -> aesmodes::Result<()> {
/// use aesmodes::{AesCtrRng, Key, KeySize};
///
/// // Draw a random key from the AES-CTR generator:
/// let mut rng = AesCtrRng::new()?;
/// let rk_256 = rng.generate_key(KeySize::Bits256);
/// assert_eq!(rk_256.as_bytes().len(), 32);
///
/// // Instantiate keys from slice:
/// let key_bytes: [u8; 32] = [0xBA, 0x32, 0x82, 0x9A, 0x43, 0x8A, 0x48, 0xED,
///                            0xC2, 0xEA, 0x10, 0x73, 0x26, 0xF8, 0xA9, 0x62,
///                            0xDE, 0x82, 0x06, 0xBA, 0x53, 0xC2, 0xC7, 0x55,
///                            0x2C, 0x72, 0xC5, 0x37, 0xBF, 0xD4, 0xDB, 0x5E];
/// let my_key_128 = Key::try_from_slice(&key_bytes[..16])?;
/// let my_key_192 = Key::try_from_slice(&key_bytes[..24])?;
/// assert_eq!(my_key_128.as_bytes(), &key_bytes[..16]);
/// assert_eq!(my_key_192.size(), KeySize::Bits192);
///
/// // Anything other than 16, 24, or 32 bytes is rejected:
/// assert!(Key::try_from_slice(&key_bytes[..20]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Key {
    bytes: KeyBytes,
}

impl Key {
    /// Draws a key of the requested size from a cryptographic RNG.
    pub fn from_rng<R: CryptoRng + ?Sized>(rng: &mut R, size: KeySize) -> Self {
        let bytes = match size {
            KeySize::Bits128 => {
                let mut k = [0u8; 16];
                rng.fill_bytes(&mut k);
                KeyBytes::K128(k)
            }
            KeySize::Bits192 => {
                let mut k = [0u8; 24];
                rng.fill_bytes(&mut k);
                KeyBytes::K192(k)
            }
            KeySize::Bits256 => {
                let mut k = [0u8; 32];
                rng.fill_bytes(&mut k);
                KeyBytes::K256(k)
            }
        };
        Self { bytes }
    }

    /// Attempts to build a key from a slice of bytes. Will return an InvalidKeyLength error
    /// if the input slice is anything other than 16, 24, or 32 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let invalid = || Error::InvalidKeyLength { len: bytes.len() };
        Ok(match bytes.len() {
            16 => Self {
                bytes: KeyBytes::K128(bytes.try_into().map_err(|_| invalid())?),
            },
            24 => Self {
                bytes: KeyBytes::K192(bytes.try_into().map_err(|_| invalid())?),
            },
            32 => Self {
                bytes: KeyBytes::K256(bytes.try_into().map_err(|_| invalid())?),
            },
            _ => return Err(invalid()),
        })
    }

    /// Returns a reference to the internal key as an array of bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.bytes {
            KeyBytes::K128(k) => k,
            KeyBytes::K192(k) => k,
            KeyBytes::K256(k) => k,
        }
    }

    /// Size of this key.
    pub fn size(&self) -> KeySize {
        match self.bytes {
            KeyBytes::K128(_) => KeySize::Bits128,
            KeyBytes::K192(_) => KeySize::Bits192,
            KeyBytes::K256(_) => KeySize::Bits256,
        }
    }
}

impl From<[u8; 16]> for Key {
    fn from(k: [u8; 16]) -> Self {
        Self {
            bytes: KeyBytes::K128(k),
        }
    }
}

impl From<[u8; 24]> for Key {
    fn from(k: [u8; 24]) -> Self {
        Self {
            bytes: KeyBytes::K192(k),
        }
    }
}

impl From<[u8; 32]> for Key {
    fn from(k: [u8; 32]) -> Self {
        Self {
            bytes: KeyBytes::K256(k),
        }
    }
}

impl Drop for Key {
    fn drop(&mut self) {
        match &mut self.bytes {
            KeyBytes::K128(k) => k.zeroize(),
            KeyBytes::K192(k) => k.zeroize(),
            KeyBytes::K256(k) => k.zeroize(),
        }
    }
}
