//! AES-CTR pseudorandom generator. AES-256 keyed by host entropy is run as a PRF over a
//! 128-bit counter; each counter value yields one 16-byte output block.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore, SeedableRng, TryRngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::block::{encrypt_block, expand_key};
use crate::error::Result;
use crate::key::{Key, KeySize};

/// Counter-mode random generator used to supply keys, IVs and nonces.
///
/// Key and counter are zeroed when the generator is dropped. Each thread should own its own
/// instance.
///
/// ```
/// # fn main() -> aesmodes::Result<()> {
/// use aesmodes::AesCtrRng;
///
/// let mut rng = AesCtrRng::new()?;
/// let iv = rng.generate_iv();
/// let bytes = rng.generate_bytes(20);
/// assert_eq!(bytes.len(), 20);
/// # let _ = iv;
/// # Ok(())
/// # }
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct AesCtrRng {
    key: [u8; 32],
    counter: [u8; 16],
}

impl AesCtrRng {
    /// Creates a generator seeded from the operating system.
    pub fn new() -> Result<Self> {
        let mut rng = Self {
            key: [0u8; 32],
            counter: [0u8; 16],
        };
        rng.seed()?;
        Ok(rng)
    }

    /// Replaces the key with 32 bytes of host entropy, read as eight little-endian 32-bit
    /// words, and resets the counter to zero.
    pub fn seed(&mut self) -> Result<()> {
        for word in self.key.chunks_exact_mut(4) {
            word.copy_from_slice(&OsRng.try_next_u32()?.to_le_bytes());
        }
        self.counter = [0u8; 16];
        Ok(())
    }

    /// Returns `n` pseudorandom bytes.
    pub fn generate_bytes(&mut self, n: usize) -> Vec<u8> {
        let mut out = vec![0u8; n];
        self.fill_bytes(&mut out);
        out
    }

    /// Draws a fresh AES key.
    pub fn generate_key(&mut self, size: KeySize) -> Key {
        Key::from_rng(self, size)
    }

    /// Draws a 16-byte IV for CBC, CFB or OFB.
    pub fn generate_iv(&mut self) -> [u8; 16] {
        let mut iv = [0u8; 16];
        self.fill_bytes(&mut iv);
        iv
    }

    /// Draws an 8-byte CTR nonce.
    pub fn generate_nonce(&mut self) -> [u8; 8] {
        let mut nonce = [0u8; 8];
        self.fill_bytes(&mut nonce);
        nonce
    }

    /// Full 128-bit big-endian increment.
    fn increment(&mut self) {
        self.counter = u128::from_be_bytes(self.counter).wrapping_add(1).to_be_bytes();
    }
}

impl RngCore for AesCtrRng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    /// Encrypts successive counter values, truncating the final block. The counter advances
    /// once per block, including a truncated one.
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        let round_keys = Zeroizing::new(expand_key(&Key::from(self.key)));
        for chunk in dst.chunks_mut(16) {
            let mut block = encrypt_block(&self.counter, &round_keys);
            chunk.copy_from_slice(&block[..chunk.len()]);
            block.zeroize();
            self.increment();
        }
    }
}

impl CryptoRng for AesCtrRng {}

impl SeedableRng for AesCtrRng {
    type Seed = [u8; 32];

    /// Deterministic generator keyed by `seed` with the counter at zero.
    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            key: seed,
            counter: [0u8; 16],
        }
    }
}
