use crate::mtaes::core::constants::BLOCK_SIZE;
use crate::mtaes::core::{RoundKeys, decrypt_block, encrypt_block};
use crate::mtaes::modes::util::{to_block, xor_blocks};

/// Splits a 32 byte IGE IV into its two chaining references:
/// `(previous ciphertext block, previous plaintext block)`.
#[inline(always)]
fn split_iv(iv: &[u8; 32]) -> ([u8; 16], [u8; 16]) {
    (to_block(&iv[..BLOCK_SIZE]), to_block(&iv[BLOCK_SIZE..]))
}

/// Core IGE encryption algorithm. `plaintext` must be a non-empty multiple of 16 bytes.
///
/// `y_i = E(x_i ^ y_{i-1}) ^ x_{i-1}`, with `y_0` and `x_0` the first and second halves of `iv`.
pub fn ige_core_enc(plaintext: &[u8], round_keys: &RoundKeys, iv: &[u8; 32]) -> Vec<u8> {
    let mut ciphertext = vec![0u8; plaintext.len()];
    let (mut prev_ct, mut prev_pt) = split_iv(iv);

    for (pt, ct) in plaintext
        .chunks_exact(BLOCK_SIZE)
        .zip(ciphertext.chunks_exact_mut(BLOCK_SIZE))
    {
        let x = to_block(pt);
        let y = xor_blocks(&encrypt_block(&xor_blocks(&x, &prev_ct), round_keys), &prev_pt);
        ct.copy_from_slice(&y);

        prev_ct = y;
        prev_pt = x;
    }

    ciphertext
}

/// Core IGE decryption algorithm. `ciphertext` must be a non-empty multiple of 16 bytes.
///
/// `x_i = D(y_i ^ x_{i-1}) ^ y_{i-1}`, with the same reading of `iv` as encryption.
pub fn ige_core_dec(ciphertext: &[u8], round_keys: &RoundKeys, iv: &[u8; 32]) -> Vec<u8> {
    let mut plaintext = vec![0u8; ciphertext.len()];
    let (mut prev_ct, mut prev_pt) = split_iv(iv);

    for (ct, pt) in ciphertext
        .chunks_exact(BLOCK_SIZE)
        .zip(plaintext.chunks_exact_mut(BLOCK_SIZE))
    {
        let y = to_block(ct);
        let x = xor_blocks(&decrypt_block(&xor_blocks(&y, &prev_pt), round_keys), &prev_ct);
        pt.copy_from_slice(&x);

        prev_ct = y;
        prev_pt = x;
    }

    plaintext
}
