use crate::block::{decrypt_block, encrypt_block};
use crate::error::Result;

use super::util::{check_aligned, map_blocks};

/// Core ECB encryption algorithm. Encrypts each 16-byte block of already padded input independently.
/// Returns [UnalignedInput](crate::Error::UnalignedInput) if `input` is not whole blocks.
pub fn ecb_encrypt(input: &[u8], round_keys: &[[u8; 16]]) -> Result<Vec<u8>> {
    check_aligned(input)?;
    Ok(map_blocks(input, |_, block| encrypt_block(block, round_keys)))
}

/// Core ECB decryption algorithm. Padding is left in place.
pub fn ecb_decrypt(input: &[u8], round_keys: &[[u8; 16]]) -> Result<Vec<u8>> {
    check_aligned(input)?;
    Ok(map_blocks(input, |_, block| decrypt_block(block, round_keys)))
}
