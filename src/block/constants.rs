use super::gf::{build_inv_sbox, build_sbox};

/// Forward substitution box, evaluated at compile time from the field arithmetic.
pub const SBOX: [u8; 256] = build_sbox();

/// Inverse substitution box.
pub const SBOX_INV: [u8; 256] = build_inv_sbox();

/// First byte of each round constant word, x^(i-1) in GF(2^8). The other three bytes are zero.
pub const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1B, 0x36];
