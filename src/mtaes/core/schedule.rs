use zeroize::{Zeroize, ZeroizeOnDrop};

use super::constants::{KEY_SIZE, KEY_WORDS, NUM_ROUNDS, RCON};
use super::decryption::mix_columns_inv;
use super::util::sub_byte;

/// Expanded AES-256 key schedule.
///
/// Holds the 15 round keys of the forward cipher and the 15 round keys of the equivalent
/// inverse cipher (FIPS-197 section 5.3.5). Built per call from the caller's key and wiped
/// when dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys {
    enc: [[u8; 16]; NUM_ROUNDS + 1],
    dec: [[u8; 16]; NUM_ROUNDS + 1],
}

impl RoundKeys {
    /// Runs the AES-256 key schedule on `key`.
    pub fn new(key: &[u8; KEY_SIZE]) -> Self {
        let enc = expand_key(key);

        // equivalent inverse cipher: reverse order, InvMixColumns applied to the middle keys
        let mut dec = [[0u8; 16]; NUM_ROUNDS + 1];
        dec[0] = enc[NUM_ROUNDS];
        dec[NUM_ROUNDS] = enc[0];
        for round in 1..NUM_ROUNDS {
            let mut round_key = enc[NUM_ROUNDS - round];
            mix_columns_inv(&mut round_key);
            dec[round] = round_key;
        }

        Self { enc, dec }
    }

    /// Round keys of the forward cipher, in the order they are applied.
    #[inline(always)]
    pub(crate) fn encryption_keys(&self) -> &[[u8; 16]; NUM_ROUNDS + 1] {
        &self.enc
    }

    /// Round keys of the equivalent inverse cipher, in the order they are applied.
    #[inline(always)]
    pub(crate) fn decryption_keys(&self) -> &[[u8; 16]; NUM_ROUNDS + 1] {
        &self.dec
    }
}

/// AES-256 key schedule. Returns 15 round keys, the first being the original key.
fn expand_key(key: &[u8; KEY_SIZE]) -> [[u8; 16]; NUM_ROUNDS + 1] {
    // Variable names match FIPS-197: https://doi.org/10.6028/NIST.FIPS.197-upd1
    // Nk   The number of 32-bit words comprising the key (8 for AES-256)
    // Nw   The total number of words generated by the key schedule (including initial key)
    const NW: usize = (NUM_ROUNDS + 1) * 4;
    let mut w = [[0u8; 4]; NW];

    // first Nk words of w are filled with the initial key
    for i in 0..KEY_SIZE {
        w[i / 4][i % 4] = key[i];
    }

    let mut temp = w[KEY_WORDS - 1];
    for i in KEY_WORDS..NW {
        if i % KEY_WORDS == 0 {
            // rot_word, sub_word, and rcon
            temp = [
                sub_byte(temp[1]) ^ RCON[i / KEY_WORDS],
                sub_byte(temp[2]),
                sub_byte(temp[3]),
                sub_byte(temp[0]),
            ];
        } else if i % KEY_WORDS == 4 {
            // additional sub_word for AES-256
            temp = [
                sub_byte(temp[0]),
                sub_byte(temp[1]),
                sub_byte(temp[2]),
                sub_byte(temp[3]),
            ];
        }

        // w[i] = temp ⊕ w[i − Nk]
        let prev = w[i - KEY_WORDS];
        w[i] = [
            temp[0] ^ prev[0],
            temp[1] ^ prev[1],
            temp[2] ^ prev[2],
            temp[3] ^ prev[3],
        ];
        temp = w[i];
    }

    // words are columns of the round keys, stored column-major like the state
    let mut round_keys = [[0u8; 16]; NUM_ROUNDS + 1];
    for (round, round_key) in round_keys.iter_mut().enumerate() {
        for col in 0..4 {
            round_key[col * 4..col * 4 + 4].copy_from_slice(&w[round * 4 + col]);
        }
    }

    w.zeroize();
    temp.zeroize();
    round_keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mtaes::modes::util::test_util::KEY_256;

    #[test]
    fn key_schedule_256() {
        // run key schedule on 256 bit sample key from FIPS-197 Appendix A.3
        let round_keys = RoundKeys::new(&KEY_256);
        let enc = round_keys.encryption_keys();

        assert_eq!(enc[0], KEY_256[..16], "first round key must be the key itself");
        assert_eq!(enc[1], KEY_256[16..], "second round key must be the key itself");

        // w[8..12] from the sample schedule in A.3
        let expected_2: [u8; 16] = [
            0x9b, 0xa3, 0x54, 0x11, 0x8e, 0x69, 0x25, 0xaf, 0xa5, 0x1a, 0x8b, 0x5f, 0x20, 0x67,
            0xfc, 0xde,
        ];
        assert_eq!(enc[2], expected_2);

        // compare with last round key of sample schedule in A.3
        let expected_last: [u8; 16] = [
            0xfe, 0x48, 0x90, 0xd1, 0xe6, 0x18, 0x8d, 0x0b, 0x04, 0x6d, 0xf3, 0x44, 0x70, 0x6c,
            0x63, 0x1e,
        ];
        assert_eq!(enc[NUM_ROUNDS], expected_last);
    }

    #[test]
    fn inverse_schedule_layout() {
        let round_keys = RoundKeys::new(&KEY_256);
        let enc = round_keys.encryption_keys();
        let dec = round_keys.decryption_keys();

        assert_eq!(dec[0], enc[NUM_ROUNDS]);
        assert_eq!(dec[NUM_ROUNDS], enc[0]);
        for round in 1..NUM_ROUNDS {
            let mut expected = enc[NUM_ROUNDS - round];
            mix_columns_inv(&mut expected);
            assert_eq!(dec[round], expected, "inverse round key {round} does not match");
        }
    }
}
