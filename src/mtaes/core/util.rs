use super::constants::{SBOX_AFFINE, SBOX_INV_AFFINE};

// used for both encryption and decryption
#[inline(always)]
pub(crate) fn add_round_key(state: &mut [u8; 16], round_key: &[u8; 16]) {
    for i in 0..16 {
        state[i] ^= round_key[i];
    }
}

// adapted from https://crypto.stackexchange.com/a/71206
#[inline(always)]
pub(crate) fn dbl(a: u8) -> u8 {
    (a << 1) ^ (0x1B & (0u8).wrapping_sub((a >> 7) & 1))
}

/// Multiplication in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1.
/// Always runs eight iterations, the bits of `b` only select through a mask.
#[inline(always)]
pub(crate) fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        product ^= a & (0u8).wrapping_sub(b & 1);
        a = dbl(a);
        b >>= 1;
    }
    product
}

/// Multiplicative inverse in GF(2^8), computed as a^254. Maps 0 to 0.
#[inline(always)]
fn gf_inv(a: u8) -> u8 {
    let a2 = gf_mul(a, a);
    let a3 = gf_mul(a2, a);
    let a6 = gf_mul(a3, a3);
    let a12 = gf_mul(a6, a6);
    let a15 = gf_mul(a12, a3);
    let a30 = gf_mul(a15, a15);
    let a60 = gf_mul(a30, a30);
    let a120 = gf_mul(a60, a60);
    let a126 = gf_mul(a120, a6);
    let a127 = gf_mul(a126, a);
    gf_mul(a127, a127)
}

/// S-box substitution of a single byte: inversion followed by the affine transform.
/// Computed rather than looked up so no memory access depends on the input.
#[inline(always)]
pub(crate) fn sub_byte(a: u8) -> u8 {
    let b = gf_inv(a);
    b ^ b.rotate_left(1) ^ b.rotate_left(2) ^ b.rotate_left(3) ^ b.rotate_left(4) ^ SBOX_AFFINE
}

/// Inverse S-box substitution: inverse affine transform followed by inversion.
#[inline(always)]
pub(crate) fn sub_byte_inv(a: u8) -> u8 {
    gf_inv(a.rotate_left(1) ^ a.rotate_left(3) ^ a.rotate_left(6) ^ SBOX_INV_AFFINE)
}
