//! Arithmetic in GF(2^8) modulo the AES polynomial x^8 + x^4 + x^3 + x + 1, and the
//! algebraic definition of the S-box built on it.
//!
//! Nothing here is constant-time.

/// Multiplies `a` by `b` in GF(2^8) using shift-and-reduce.
pub const fn multiply(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    let mut i = 0;
    while i < 8 {
        if b & 1 == 1 {
            product ^= a;
        }
        let high_bit = a & 0x80;
        a <<= 1;
        if high_bit != 0 {
            a ^= 0x1b;
        }
        b >>= 1;
        i += 1;
    }
    product
}

/// Multiplicative inverse, computed as a^254 by 253 successive multiplications.
/// `inverse(0)` is 0.
pub const fn inverse(a: u8) -> u8 {
    let mut product = a;
    let mut i = 0;
    while i < 253 {
        product = multiply(product, a);
        i += 1;
    }
    product
}

/// a^254 by square-and-multiply. Same value as [`inverse`], cheap enough to evaluate
/// 512 times while building the tables at compile time.
const fn inverse_pow(a: u8) -> u8 {
    let mut result = 1u8;
    let mut base = a;
    let mut exp = 254u8;
    while exp > 0 {
        if exp & 1 == 1 {
            result = multiply(result, base);
        }
        base = multiply(base, base);
        exp >>= 1;
    }
    result
}

/// Multiplies `b`, as a bit vector, by the circulant matrix whose first row is `row`.
/// Each following row is the previous one rotated left by one bit.
const fn affine(b: u8, mut row: u8) -> u8 {
    let mut out = 0u8;
    let mut i = 0;
    while i < 8 {
        out |= (((b & row).count_ones() & 1) as u8) << i;
        row = row.rotate_left(1);
        i += 1;
    }
    out
}

/// Forward S-box: inverse, then the affine transform (row 0xF1) XOR 0x63.
pub const fn sbox(b: u8) -> u8 {
    affine(inverse(b), 0xf1) ^ 0x63
}

/// Inverse S-box: inverse affine transform (row 0xA4) XOR 0x05, then inverse.
pub const fn inv_sbox(b: u8) -> u8 {
    inverse(affine(b, 0xa4) ^ 0x05)
}

pub(crate) const fn build_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = affine(inverse_pow(i as u8), 0xf1) ^ 0x63;
        i += 1;
    }
    table
}

pub(crate) const fn build_inv_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = inverse_pow(affine(i as u8, 0xa4) ^ 0x05);
        i += 1;
    }
    table
}

// adapted from https://crypto.stackexchange.com/a/71206
#[inline(always)]
pub(crate) fn dbl(a: u8) -> u8 {
    (a << 1) ^ (0x1B & (0u8).wrapping_sub((a >> 7) & 1))
}
