use rayon::prelude::*;
use zeroize::Zeroize;

use crate::error::{Error, Result};

pub const PARALLEL_THRESHOLD: usize = 4 * 1024; // process in parallel if input size gt 4 KiB

/// PKCS#7 padding to a multiple of 16 bytes. Always adds between 1 and 16 bytes, so
/// block-aligned input gains a full block of `0x10`.
pub fn pad(plaintext: &[u8]) -> Vec<u8> {
    let pad_len = 16 - plaintext.len() % 16;

    let mut out = Vec::with_capacity(plaintext.len() + pad_len);
    out.extend_from_slice(plaintext);
    out.resize(plaintext.len() + pad_len, pad_len as u8);
    out
}

/// Remove and validate PKCS#7 padding.
///
/// On failure the buffer is zeroed and emptied so no decrypted bytes outlive the error.
pub fn unpad(input: &mut Vec<u8>) -> Result<()> {
    let pad = input.last().copied().unwrap_or(0) as usize;
    let valid = (1..=16).contains(&pad)
        && pad <= input.len()
        && input[input.len() - pad..].iter().all(|&b| b as usize == pad);

    if !valid {
        input.zeroize();
        return Err(Error::InvalidPadding);
    }

    input.truncate(input.len() - pad);
    Ok(())
}

/// Block-chained cores have no defined output for a partial final block.
pub(crate) fn check_aligned(input: &[u8]) -> Result<()> {
    if input.len() % 16 != 0 {
        return Err(Error::UnalignedInput { len: input.len() });
    }
    Ok(())
}

/// Builds a CTR counter block: `nonce (8 bytes) || counter (8 bytes, big-endian)`.
#[inline(always)]
pub(crate) fn ctr_block(nonce: &[u8; 8], ctr: u64) -> [u8; 16] {
    let mut block = [0u8; 16];
    block[..8].copy_from_slice(nonce);
    block[8..].copy_from_slice(&ctr.to_be_bytes());
    block
}

/// Increments the low 8 bytes of a CTR counter block as a big-endian integer.
/// Carry stops at byte 8, so `..ff ff ff ff ff ff ff ff` wraps to zero and the nonce half is untouched.
pub fn increment_counter(counter: &mut [u8; 16]) {
    for byte in counter[8..].iter_mut().rev() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            break;
        }
    }
}

#[inline(always)]
pub(crate) fn to_block(chunk: &[u8]) -> [u8; 16] {
    let mut block = [0u8; 16];
    block.copy_from_slice(chunk);
    block
}

#[inline(always)]
pub(crate) fn xor_block(a: &[u8; 16], b: &[u8; 16]) -> [u8; 16] {
    std::array::from_fn(|i| a[i] ^ b[i])
}

/// XORs a chunk of 1-16 bytes with the leading bytes of a keystream block.
#[inline(always)]
pub(crate) fn xor_chunks(keystream: &[u8; 16], chunk: &[u8]) -> [u8; 16] {
    let mut out: [u8; 16] = *keystream;
    for (o, c) in out.iter_mut().zip(chunk) {
        *o ^= c;
    }
    out
}

/// Applies `f(block_index, block)` to every 16-byte block of `input`. The blocks must be independent
/// of each other's outputs; above [PARALLEL_THRESHOLD] they are processed on the rayon pool.
pub(crate) fn map_blocks<F>(input: &[u8], f: F) -> Vec<u8>
where
    F: Fn(usize, &[u8; 16]) -> [u8; 16] + Sync,
{
    let mut output = vec![0u8; input.len()];

    let apply = |(i, (out, block)): (usize, (&mut [u8], &[u8]))| {
        out.copy_from_slice(&f(i, &to_block(block)));
    };

    if input.len() > PARALLEL_THRESHOLD {
        output
            .par_chunks_exact_mut(16)
            .zip(input.par_chunks_exact(16))
            .enumerate()
            .for_each(apply);
    } else {
        output
            .chunks_exact_mut(16)
            .zip(input.chunks_exact(16))
            .enumerate()
            .for_each(apply);
    }

    output
}
