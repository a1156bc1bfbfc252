use rayon::prelude::*;

use crate::block::encrypt_block;

use super::util::{PARALLEL_THRESHOLD, ctr_block, increment_counter, xor_chunks};

/// Counter mode keystream applied to `input` (CTR is symmetric). The counter block is
/// `nonce || ctr_start + i` for block `i`, wrapping within the low 8 bytes.
pub fn ctr_apply(
    input: &[u8],
    round_keys: &[[u8; 16]],
    nonce: &[u8; 8],
    ctr_start: u64,
) -> Vec<u8> {
    if input.len() > PARALLEL_THRESHOLD {
        ctr_core_parallel(input, round_keys, nonce, ctr_start)
    } else {
        ctr_core_serial(input, round_keys, nonce, ctr_start)
    }
}

pub fn ctr_core_parallel(
    input: &[u8],
    round_keys: &[[u8; 16]],
    nonce: &[u8; 8],
    ctr_start: u64,
) -> Vec<u8> {
    let mut output = vec![0u8; input.len()];

    output
        .par_chunks_mut(16)
        .zip(input.par_chunks(16))
        .enumerate()
        .for_each(|(i, (out_chunk, in_chunk))| {
            let block = ctr_block(nonce, ctr_start.wrapping_add(i as u64));
            let keystream = encrypt_block(&block, round_keys);
            out_chunk.copy_from_slice(&xor_chunks(&keystream, in_chunk)[..in_chunk.len()]);
        });

    output
}

pub fn ctr_core_serial(
    input: &[u8],
    round_keys: &[[u8; 16]],
    nonce: &[u8; 8],
    ctr_start: u64,
) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len());
    let mut counter = ctr_block(nonce, ctr_start);

    for chunk in input.chunks(16) {
        let keystream = encrypt_block(&counter, round_keys);
        output.extend_from_slice(&xor_chunks(&keystream, chunk)[..chunk.len()]);
        increment_counter(&mut counter);
    }

    output
}

#[cfg(test)]
mod test_ctr {
    use super::*;
    use crate::block::expand_key;
    use crate::error::Result;
    use crate::key::Key;
    use crate::modes::util::test_util::{
        CTR_NONCE, CTR_START, KEY_128, KEY_192, KEY_256, PLAINTEXT, hex_to_bytes,
    };

    fn check(key: &[u8], expected_hex: &str) -> Result<()> {
        let expected = hex_to_bytes(expected_hex);
        let round_keys = expand_key(&Key::try_from_slice(key)?);

        for ctr_fn in [ctr_core_serial, ctr_core_parallel] {
            let encrypted = ctr_fn(&PLAINTEXT, &round_keys, &CTR_NONCE, CTR_START);
            assert_eq!(expected, encrypted, "encrypted result does not match expected");

            let decrypted = ctr_fn(&expected, &round_keys, &CTR_NONCE, CTR_START);
            assert_eq!(PLAINTEXT.to_vec(), decrypted, "decrypted result does not match expected");
        }
        Ok(())
    }

    #[test]
    fn aes_ctr_128() -> Result<()> {
        check(
            &KEY_128,
            "874d6191b620e3261bef6864990db6ce
             9806f66b7970fdff8617187bb9fffdff
             5ae4df3edbd5d35e5b4f09020db03eab
             1e031dda2fbe03d1792170a0f3009cee",
        )
    }

    #[test]
    fn aes_ctr_192() -> Result<()> {
        check(
            &KEY_192,
            "1abc932417521ca24f2b0459fe7e6e0b
             090339ec0aa6faefd5ccc2c6f4ce8e94
             1e36b26bd1ebc670d1bd1d665620abf7
             4f78a7f6d29809585a97daec58c6b050",
        )
    }

    #[test]
    fn aes_ctr_256() -> Result<()> {
        check(
            &KEY_256,
            "601ec313775789a5b7a7f504bbf3d228
             f443e3ca4d62b59aca84e990cacaf5c5
             2b0930daa23de94ce87017ba2d84988d
             dfc9c58db67aada613c2dd08457941a6",
        )
    }

    #[test]
    fn counter_wrap_matches_between_cores() -> Result<()> {
        let round_keys = expand_key(&Key::try_from_slice(&KEY_128)?);
        let input = vec![0x33u8; PARALLEL_THRESHOLD + 40];
        let start = u64::MAX - 3;

        let serial = ctr_core_serial(&input, &round_keys, &CTR_NONCE, start);
        let parallel = ctr_core_parallel(&input, &round_keys, &CTR_NONCE, start);
        assert_eq!(serial, parallel);

        // block 4 runs on counter 0 with the nonce unchanged
        let wrapped = encrypt_block(&ctr_block(&CTR_NONCE, 0), &round_keys);
        for j in 0..16 {
            assert_eq!(serial[64 + j], wrapped[j] ^ 0x33);
        }
        Ok(())
    }
}
