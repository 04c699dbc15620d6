#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::mtaes::core::constants::BLOCK_SIZE;
use crate::mtaes::core::{RoundKeys, decrypt_block, encrypt_block};
use crate::mtaes::modes::util::{to_block, xor_blocks};
#[cfg(any(test, feature = "parallel"))]
use crate::mtaes::modes::util::block_at;

/// Core CBC encryption algorithm. `plaintext` must be a non-empty multiple of 16 bytes.
///
/// `iv` is the previous ciphertext block on entry and is left holding the last ciphertext block
/// produced, so a following call with the same `iv` continues the same stream.
pub fn cbc_core_enc(plaintext: &[u8], round_keys: &RoundKeys, iv: &mut [u8; 16]) -> Vec<u8> {
    let mut ciphertext = vec![0u8; plaintext.len()];
    let mut prev = *iv;

    for (pt, ct) in plaintext
        .chunks_exact(BLOCK_SIZE)
        .zip(ciphertext.chunks_exact_mut(BLOCK_SIZE))
    {
        prev = encrypt_block(&xor_blocks(&to_block(pt), &prev), round_keys);
        ct.copy_from_slice(&prev);
    }

    *iv = prev;
    ciphertext
}

/// Core CBC decryption algorithm. `ciphertext` must be a non-empty multiple of 16 bytes.
///
/// The chaining value advances with the ciphertext, so `iv` ends holding the last ciphertext block.
pub fn cbc_core_dec_serial(
    ciphertext: &[u8],
    round_keys: &RoundKeys,
    iv: &mut [u8; 16],
) -> Vec<u8> {
    let mut plaintext = vec![0u8; ciphertext.len()];
    let mut prev = *iv;

    for (ct, pt) in ciphertext
        .chunks_exact(BLOCK_SIZE)
        .zip(plaintext.chunks_exact_mut(BLOCK_SIZE))
    {
        let ct_block = to_block(ct);
        pt.copy_from_slice(&xor_blocks(&decrypt_block(&ct_block, round_keys), &prev));
        prev = ct_block;
    }

    *iv = prev;
    plaintext
}

/// Parallel CBC decryption. Every plaintext block depends only on its own ciphertext block and
/// the one before it, so blocks are independent once the ciphertext is known.
#[cfg(feature = "parallel")]
pub fn cbc_core_dec_parallel(
    ciphertext: &[u8],
    round_keys: &RoundKeys,
    iv: &mut [u8; 16],
) -> Vec<u8> {
    let first_prev = *iv;
    let mut plaintext = vec![0u8; ciphertext.len()];

    plaintext
        .par_chunks_exact_mut(BLOCK_SIZE)
        .zip(ciphertext.par_chunks_exact(BLOCK_SIZE))
        .enumerate()
        .for_each(|(i, (pt, ct))| {
            let prev = if i == 0 {
                first_prev
            } else {
                block_at(ciphertext, i - 1)
            };
            pt.copy_from_slice(&xor_blocks(&decrypt_block(&to_block(ct), round_keys), &prev));
        });

    *iv = block_at(ciphertext, ciphertext.len() / BLOCK_SIZE - 1);
    plaintext
}
