use super::constants::NUM_ROUNDS;
use super::schedule::RoundKeys;
use super::util::{add_round_key, dbl, sub_byte_inv};

/// Core AES-256 decryption function. Decrypts a 16 byte block with the equivalent inverse
/// cipher, which keeps the round structure of encryption by using the transformed round keys.
#[inline(always)]
pub fn decrypt_block(ciphertext: &[u8; 16], round_keys: &RoundKeys) -> [u8; 16] {
    let round_keys = round_keys.decryption_keys();
    let mut state = *ciphertext;

    add_round_key(&mut state, &round_keys[0]);

    for round_key in &round_keys[1..NUM_ROUNDS] {
        sub_bytes_inv(&mut state);
        shift_rows_inv(&mut state);
        mix_columns_inv(&mut state);
        add_round_key(&mut state, round_key);
    }

    sub_bytes_inv(&mut state);
    shift_rows_inv(&mut state);
    add_round_key(&mut state, &round_keys[NUM_ROUNDS]);

    state
}

/// Inverse SubBytes step. Each byte is substituted using the inverse S-box.
#[inline(always)]
pub(crate) fn sub_bytes_inv(state: &mut [u8; 16]) {
    for byte in state {
        *byte = sub_byte_inv(*byte);
    }
}

/// Inverse ShiftRows step. Row `r` of the state rotates right by `r` positions.
#[inline(always)]
pub(crate) fn shift_rows_inv(state: &mut [u8; 16]) {
    let s = *state;
    for col in 0..4 {
        for row in 1..4 {
            state[col * 4 + row] = s[((col + 4 - row) & 3) * 4 + row];
        }
    }
}

/// Inverse MixColumns step, each column multiplied by the circulant matrix (14 11 13 9).
#[inline(always)]
pub(crate) fn mix_columns_inv(state: &mut [u8; 16]) {
    // shares the doublings between rows, see https://crypto.stackexchange.com/a/71206
    for column in state.chunks_exact_mut(4) {
        let [a, b, c, d] = [column[0], column[1], column[2], column[3]];
        let x = dbl(a ^ b ^ c ^ d);
        let y = dbl(x ^ a ^ c);
        let z = dbl(x ^ b ^ d);
        column[0] = dbl(y ^ a ^ b) ^ b ^ c ^ d;
        column[1] = dbl(z ^ b ^ c) ^ c ^ d ^ a;
        column[2] = dbl(y ^ c ^ d) ^ d ^ a ^ b;
        column[3] = dbl(z ^ d ^ a) ^ a ^ b ^ c;
    }
}
