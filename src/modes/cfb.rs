use crate::block::encrypt_block;

use super::util::{to_block, xor_chunks};

/// Core CFB encryption with full 128-bit feedback: `K0 = E(IV)`, `Ki = E(C(i-1))`, `Ci = Pi ^ Ki`.
/// A trailing partial block is XORed with the leading keystream bytes.
pub fn cfb_encrypt(input: &[u8], round_keys: &[[u8; 16]], iv: &[u8; 16]) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len());
    let mut feedback = *iv;

    for chunk in input.chunks(16) {
        let keystream = encrypt_block(&feedback, round_keys);
        let ct = xor_chunks(&keystream, chunk);
        output.extend_from_slice(&ct[..chunk.len()]);
        feedback = ct;
    }

    output
}

/// Core CFB decryption. The keystream is rebuilt from the ciphertext with the forward cipher.
pub fn cfb_decrypt(input: &[u8], round_keys: &[[u8; 16]], iv: &[u8; 16]) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len());
    let mut feedback = *iv;

    for chunk in input.chunks(16) {
        let keystream = encrypt_block(&feedback, round_keys);
        output.extend_from_slice(&xor_chunks(&keystream, chunk)[..chunk.len()]);
        if chunk.len() == 16 {
            feedback = to_block(chunk);
        }
    }

    output
}

#[cfg(test)]
mod test_cfb {
    use super::*;
    use crate::block::expand_key;
    use crate::error::Result;
    use crate::key::Key;
    use crate::modes::util::test_util::{hex_to_bytes, IV, KEY_128, PLAINTEXT};

    // SP 800-38A F.3.13 CFB128-AES128
    const CFB_128: &str = "3b3fd92eb72dad20333449f8e83cfb4a
                           c8a64537a0b3a93fcde3cdad9f1ce58b
                           26751f67a3cbb140b1808cf187a4f4df
                           c04b05357c5d1c0eeac4c66f9ff7f2e6";

    #[test]
    fn aes_cfb_128_encrypt() -> Result<()> {
        let round_keys = expand_key(&Key::try_from_slice(&KEY_128)?);
        let encrypted = cfb_encrypt(&PLAINTEXT, &round_keys, &IV);
        assert_eq!(hex_to_bytes(CFB_128), encrypted);
        Ok(())
    }

    #[test]
    fn aes_cfb_128_decrypt() -> Result<()> {
        let round_keys = expand_key(&Key::try_from_slice(&KEY_128)?);
        let decrypted = cfb_decrypt(&hex_to_bytes(CFB_128), &round_keys, &IV);
        assert_eq!(PLAINTEXT.to_vec(), decrypted);
        Ok(())
    }

    #[test]
    fn partial_tail() -> Result<()> {
        let round_keys = expand_key(&Key::try_from_slice(&KEY_128)?);
        let encrypted = cfb_encrypt(&PLAINTEXT[..37], &round_keys, &IV);
        assert_eq!(encrypted[..], hex_to_bytes(CFB_128)[..37]);
        assert_eq!(cfb_decrypt(&encrypted, &round_keys, &IV), PLAINTEXT[..37]);
        Ok(())
    }
}
