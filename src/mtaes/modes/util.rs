use crate::mtaes::core::constants::BLOCK_SIZE;

#[cfg(feature = "parallel")]
pub const PARALLEL_THRESHOLD: usize = 4 * 1024; // process in parallel if input size gt 4 KiB

#[inline(always)]
pub(crate) fn xor_blocks(a: &[u8; 16], b: &[u8; 16]) -> [u8; 16] {
    let mut out = *a;
    for i in 0..BLOCK_SIZE {
        out[i] ^= b[i];
    }
    out
}

#[inline(always)]
pub(crate) fn xor_chunks(y: &[u8; 16], chunk: &[u8]) -> [u8; 16] {
    let mut out: [u8; 16] = *y;
    for i in 0..chunk.len() {
        out[i] ^= chunk[i];
    }
    out
}

/// Copies a 16 byte chunk (as yielded by `chunks_exact(16)`) into a block.
#[inline(always)]
pub(crate) fn to_block(chunk: &[u8]) -> [u8; 16] {
    let mut block = [0u8; 16];
    block.copy_from_slice(chunk);
    block
}

/// Reads the block at `index` of a slice whose length is a multiple of 16.
#[cfg(any(test, feature = "parallel"))]
#[inline(always)]
pub(crate) fn block_at(input: &[u8], index: usize) -> [u8; 16] {
    to_block(&input[index * BLOCK_SIZE..(index + 1) * BLOCK_SIZE])
}

/// Adds `n` to a big-endian 128-bit counter block, wrapping modulo 2^128.
#[inline(always)]
pub(crate) fn add_counter(counter: &[u8; 16], n: u128) -> [u8; 16] {
    u128::from_be_bytes(*counter).wrapping_add(n).to_be_bytes()
}
