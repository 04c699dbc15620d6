use super::constants::NUM_ROUNDS;
use super::schedule::RoundKeys;
use super::util::{add_round_key, dbl, sub_byte};

/// Core AES-256 encryption function. Encrypts a 16 byte block using the forward round keys.
#[inline(always)]
pub fn encrypt_block(plaintext: &[u8; 16], round_keys: &RoundKeys) -> [u8; 16] {
    let round_keys = round_keys.encryption_keys();
    let mut state = *plaintext;

    // add first round key to state
    add_round_key(&mut state, &round_keys[0]);

    // perform all rounds except for the last
    for round_key in &round_keys[1..NUM_ROUNDS] {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_key);
    }

    // last round skips mixcolumns step
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys[NUM_ROUNDS]);

    state
}

/// SubBytes step. Each byte is substituted using the S-box.
#[inline(always)]
pub(crate) fn sub_bytes(state: &mut [u8; 16]) {
    for byte in state {
        *byte = sub_byte(*byte);
    }
}

/// ShiftRows step. Row `r` of the state rotates left by `r` positions.
#[inline(always)]
pub(crate) fn shift_rows(state: &mut [u8; 16]) {
    let s = *state;
    for col in 0..4 {
        for row in 1..4 {
            state[col * 4 + row] = s[((col + row) & 3) * 4 + row];
        }
    }
}

/// MixColumns step, each column multiplied by the circulant matrix (2 3 1 1) in GF(2^8).
#[inline(always)]
pub(crate) fn mix_columns(state: &mut [u8; 16]) {
    // 2a + 3b + c + d == dbl(a ^ b) ^ b ^ c ^ d, see https://crypto.stackexchange.com/a/71206
    for column in state.chunks_exact_mut(4) {
        let [a, b, c, d] = [column[0], column[1], column[2], column[3]];
        column[0] = dbl(a ^ b) ^ b ^ c ^ d;
        column[1] = dbl(b ^ c) ^ c ^ d ^ a;
        column[2] = dbl(c ^ d) ^ d ^ a ^ b;
        column[3] = dbl(d ^ a) ^ a ^ b ^ c;
    }
}
