#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::mtaes::core::constants::BLOCK_SIZE;
use crate::mtaes::core::{RoundKeys, encrypt_block};
use crate::mtaes::modes::util::{add_counter, xor_chunks};

/// Core counter encryption and decryption algorithm (CTR is symmetric).
///
/// `counter` is the big-endian 128-bit counter block whose encryption is the current keystream
/// block, and `offset` (0..16) is how many bytes of that keystream block earlier calls already used.
/// Both are left at the resumption point, so encrypting a stream in chunks gives the same bytes as
/// encrypting it in one call.
pub fn ctr_core_serial(
    input: &[u8],
    round_keys: &RoundKeys,
    counter: &mut [u8; 16],
    offset: &mut u8,
) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len());
    let rest = finish_keystream_block(input, round_keys, counter, offset, &mut output);

    // for each chunk of remaining input...
    for chunk in rest.chunks(BLOCK_SIZE) {
        // xor each element of input chunk (1-16 bytes) with encrypted counter block
        let keystream = encrypt_block(counter, round_keys);
        let ct = xor_chunks(&keystream, chunk);
        output.extend_from_slice(&ct[..chunk.len()]);

        if chunk.len() == BLOCK_SIZE {
            *counter = add_counter(counter, 1);
        } else {
            // partial last chunk, the rest of this keystream block belongs to the next call
            *offset = chunk.len() as u8;
        }
    }

    output
}

/// Parallel counter mode. Full blocks after the partially used keystream block are independent:
/// block `i` uses the counter value `counter + i`.
#[cfg(feature = "parallel")]
pub fn ctr_core_parallel(
    input: &[u8],
    round_keys: &RoundKeys,
    counter: &mut [u8; 16],
    offset: &mut u8,
) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len());
    let rest = finish_keystream_block(input, round_keys, counter, offset, &mut output);

    let (body, tail) = rest.split_at(rest.len() - rest.len() % BLOCK_SIZE);
    let base = *counter;
    let start = output.len();
    output.resize(start + body.len(), 0);

    output[start..]
        .par_chunks_mut(BLOCK_SIZE)
        .zip(body.par_chunks(BLOCK_SIZE))
        .enumerate()
        .for_each(|(i, (out_chunk, in_chunk))| {
            let keystream = encrypt_block(&add_counter(&base, i as u128), round_keys);
            for j in 0..BLOCK_SIZE {
                out_chunk[j] = keystream[j] ^ in_chunk[j];
            }
        });

    *counter = add_counter(&base, (body.len() / BLOCK_SIZE) as u128);

    if !tail.is_empty() {
        let keystream = encrypt_block(counter, round_keys);
        let ct = xor_chunks(&keystream, tail);
        output.extend_from_slice(&ct[..tail.len()]);
        *offset = tail.len() as u8;
    }

    output
}

/// Uses up the rest of a keystream block left partially consumed by a previous call.
/// Returns the input that still needs processing, which starts on a fresh keystream block
/// unless the input ran out first.
fn finish_keystream_block<'a>(
    input: &'a [u8],
    round_keys: &RoundKeys,
    counter: &mut [u8; 16],
    offset: &mut u8,
    output: &mut Vec<u8>,
) -> &'a [u8] {
    let pos = usize::from(*offset);
    if pos == 0 {
        return input;
    }

    let take = input.len().min(BLOCK_SIZE - pos);
    let (head, rest) = input.split_at(take);
    let keystream = encrypt_block(counter, round_keys);
    output.extend(head.iter().zip(&keystream[pos..]).map(|(b, k)| b ^ k));

    if pos + take == BLOCK_SIZE {
        *counter = add_counter(counter, 1);
        *offset = 0;
    } else {
        *offset = (pos + take) as u8;
    }

    rest
}
