use crate::block::{decrypt_block, encrypt_block};
use crate::error::Result;

use super::util::{check_aligned, map_blocks, to_block, xor_block};

/// Core CBC encryption: `C0 = E(P0 ^ IV)`, `Ci = E(Pi ^ C(i-1))`. Input must be block aligned,
/// otherwise [UnalignedInput](crate::Error::UnalignedInput) is returned.
/// Each block depends on the previous ciphertext, so this is always serial.
pub fn cbc_encrypt(input: &[u8], round_keys: &[[u8; 16]], iv: &[u8; 16]) -> Result<Vec<u8>> {
    check_aligned(input)?;
    let mut output = Vec::with_capacity(input.len());
    let mut prev = *iv;

    for chunk in input.chunks_exact(16) {
        prev = encrypt_block(&xor_block(&to_block(chunk), &prev), round_keys);
        output.extend_from_slice(&prev);
    }

    Ok(output)
}

/// Core CBC decryption: `Pi = D(Ci) ^ C(i-1)` with `C(-1) = IV`. Every block only needs the
/// ciphertext, so blocks are decrypted in parallel for large inputs.
pub fn cbc_decrypt(input: &[u8], round_keys: &[[u8; 16]], iv: &[u8; 16]) -> Result<Vec<u8>> {
    check_aligned(input)?;
    Ok(map_blocks(input, |i, block| {
        let prev = match i {
            0 => *iv,
            _ => to_block(&input[(i - 1) * 16..i * 16]),
        };
        xor_block(&decrypt_block(block, round_keys), &prev)
    }))
}
