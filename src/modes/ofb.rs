use crate::block::encrypt_block;

use super::util::xor_chunks;

/// Core OFB algorithm (encryption and decryption are the same operation). `K0 = E(IV)`,
/// `Ki = E(K(i-1))`; the keystream never depends on the data.
pub fn ofb_apply(input: &[u8], round_keys: &[[u8; 16]], iv: &[u8; 16]) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len());
    let mut keystream = *iv;

    for chunk in input.chunks(16) {
        keystream = encrypt_block(&keystream, round_keys);
        output.extend_from_slice(&xor_chunks(&keystream, chunk)[..chunk.len()]);
    }

    output
}
