#![cfg(feature = "test-vectors")]

// FIPS-197 Appendix C and NIST SP 800-38A Appendix F vectors

use aesmodes::{Cipher, Key, Result, ctr_apply, expand_key, schedule_len};
use hex_literal::hex;

const PLAINTEXT: [u8; 64] = hex!(
    "6bc1bee22e409f96e93d7e117393172a"
    "ae2d8a571e03ac9c9eb76fac45af8e51"
    "30c81c46a35ce411e5fbc1191a0a52ef"
    "f69f2445df4f9b17ad2b417be66c3710"
);
const KEY_128: [u8; 16] = hex!("2b7e151628aed2a6abf7158809cf4f3c");
const IV: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");

/// Padded output must start with the unpadded vector and end in one extra block.
fn check_prefix(ciphertext: &[u8], expected: &[u8; 64]) {
    assert_eq!(ciphertext.len(), 80);
    assert_eq!(&ciphertext[..64], expected);
}

#[test]
fn fips197_block_vectors() -> Result<()> {
    let block = hex!("00112233445566778899aabbccddeeff");
    let cases: [(&[u8], [u8; 16]); 3] = [
        (
            &hex!("000102030405060708090a0b0c0d0e0f"),
            hex!("69c4e0d86a7b0430d8cdb78070b4c55a"),
        ),
        (
            &hex!("000102030405060708090a0b0c0d0e0f1011121314151617"),
            hex!("dda97ca4864cdfe06eaf70a0ec0d7191"),
        ),
        (
            &hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f"),
            hex!("8ea2b7ca516745bfeafc49904b496089"),
        ),
    ];

    for (key, expected) in cases {
        let key = Key::try_from_slice(key)?;
        let cipher = Cipher::new(&key);
        assert_eq!(cipher.get_round_keys().len() * 16, schedule_len(key.as_bytes().len()));
        assert_eq!(cipher.encrypt_block(&block), expected);
        assert_eq!(cipher.decrypt_block(&expected), block);
    }
    Ok(())
}

#[test]
fn fips197_key_expansion_last_round_key() -> Result<()> {
    let round_keys = expand_key(&Key::try_from_slice(&KEY_128)?);
    assert_eq!(round_keys[0], KEY_128);
    assert_eq!(round_keys[10], hex!("d014f9a8c9ee2589e13f0cc8b6630ca6"));
    Ok(())
}

#[test]
fn sp800_38a_ecb() -> Result<()> {
    let cipher = Cipher::new(&Key::try_from_slice(&KEY_128)?);
    let ct = cipher.encrypt_ecb(&PLAINTEXT)?;
    check_prefix(
        &ct,
        &hex!(
            "3ad77bb40d7a3660a89ecaf32466ef97"
            "f5d3d58503b9699de785895a96fdbaaf"
            "43b1cd7f598ece23881b00e3ed030688"
            "7b0c785e27e8ad3f8223207104725dd4"
        ),
    );
    assert_eq!(cipher.decrypt_ecb(&ct)?, PLAINTEXT);
    Ok(())
}

#[test]
fn sp800_38a_cbc() -> Result<()> {
    let cipher = Cipher::new(&Key::try_from_slice(&KEY_128)?);
    let ct = cipher.encrypt_cbc(&PLAINTEXT, &IV)?;
    check_prefix(
        &ct,
        &hex!(
            "7649abac8119b246cee98e9b12e9197d"
            "5086cb9b507219ee95db113a917678b2"
            "73bed6b8e3c1743b7116e69e22229516"
            "3ff1caa1681fac09120eca307586e1a7"
        ),
    );
    assert_eq!(cipher.decrypt_cbc(&ct, &IV)?, PLAINTEXT);
    Ok(())
}

#[test]
fn sp800_38a_cfb128() -> Result<()> {
    let cipher = Cipher::new(&Key::try_from_slice(&KEY_128)?);
    let ct = cipher.encrypt_cfb(&PLAINTEXT, &IV)?;
    check_prefix(
        &ct,
        &hex!(
            "3b3fd92eb72dad20333449f8e83cfb4a"
            "c8a64537a0b3a93fcde3cdad9f1ce58b"
            "26751f67a3cbb140b1808cf187a4f4df"
            "c04b05357c5d1c0eeac4c66f9ff7f2e6"
        ),
    );
    assert_eq!(cipher.decrypt_cfb(&ct, &IV)?, PLAINTEXT);
    Ok(())
}

#[test]
fn sp800_38a_ofb() -> Result<()> {
    let cipher = Cipher::new(&Key::try_from_slice(&KEY_128)?);
    let ct = cipher.encrypt_ofb(&PLAINTEXT, &IV)?;
    check_prefix(
        &ct,
        &hex!(
            "3b3fd92eb72dad20333449f8e83cfb4a"
            "7789508d16918f03f53c52dac54ed825"
            "9740051e9c5fecf64344f7a82260edcc"
            "304c6528f659c77866a510d9c1d6ae5e"
        ),
    );
    assert_eq!(cipher.decrypt_ofb(&ct, &IV)?, PLAINTEXT);
    Ok(())
}

#[test]
fn sp800_38a_ctr() -> Result<()> {
    let round_keys = expand_key(&Key::try_from_slice(&KEY_128)?);
    let nonce = hex!("f0f1f2f3f4f5f6f7");
    let start = u64::from_be_bytes(hex!("f8f9fafbfcfdfeff"));

    let ct = ctr_apply(&PLAINTEXT, &round_keys, &nonce, start);
    assert_eq!(
        ct,
        hex!(
            "874d6191b620e3261bef6864990db6ce"
            "9806f66b7970fdff8617187bb9fffdff"
            "5ae4df3edbd5d35e5b4f09020db03eab"
            "1e031dda2fbe03d1792170a0f3009cee"
        )
    );
    assert_eq!(ctr_apply(&ct, &round_keys, &nonce, start), PLAINTEXT);
    Ok(())
}
