use crate::key::Key;

use super::constants::{RCON, SBOX};
use super::util::xor_words;

/// Number of bytes in the expanded schedule for a key of `key_len` bytes: 16 * (Nk + 7).
pub const fn schedule_len(key_len: usize) -> usize {
    16 * (key_len / 4 + 7)
}

#[inline(always)]
fn sub_word(w: [u8; 4]) -> [u8; 4] {
    [
        SBOX[w[0] as usize],
        SBOX[w[1] as usize],
        SBOX[w[2] as usize],
        SBOX[w[3] as usize],
    ]
}

/// AES key schedule. Returns a vector of 11, 13, or 15 round keys, corresponding with AES-128, AES-192,
/// and AES-256, respectively. The extra round key is the initial round key, which is not counted in most
/// documentation as it is simply the original key.
pub fn expand_key(key: &Key) -> Vec<[u8; 16]> {
    let key = key.as_bytes();

    // Variable names match FIPS-197, NIST specification: https://doi.org/10.6028/NIST.FIPS.197-upd1
    // Nk   The number of 32-bit words comprising the key
    // Nr   The number of rounds. 10, 12, and 14 for AES-128, AES-192, and AES-256, respectively
    // w    The result of the key schedule, an array of words that form round keys
    // Nw   The total number of words generated by the key schedule (including initial key)
    let nk = key.len() / 4;
    let nr = nk + 6;
    let nw = (nr + 1) * 4;

    let mut w: Vec<[u8; 4]> = vec![[0u8; 4]; nw];

    // first nk words of w are filled with the initial key
    for (i, byte) in key.iter().enumerate() {
        w[i / 4][i % 4] = *byte;
    }

    for i in nk..nw {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            // RotWord, SubWord, then Rcon on the first byte only
            temp = sub_word([temp[1], temp[2], temp[3], temp[0]]);
            temp[0] ^= RCON[i / nk - 1];
        } else if nk > 6 && i % nk == 4 {
            // extra substitution for AES-256 only
            temp = sub_word(temp);
        }

        // w[i] = temp ⊕ w[i − Nk]
        w[i] = xor_words(&temp, &w[i - nk]);
    }

    // words are columns of the round key, column-major like the state
    w.chunks_exact(4)
        .map(|words| {
            let mut round_key = [0u8; 16];
            for (col, word) in words.iter().enumerate() {
                round_key[col * 4..col * 4 + 4].copy_from_slice(word);
            }
            round_key
        })
        .collect()
}
