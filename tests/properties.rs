//! Property tests: round trips for every mode, and chunked CBC / CTR streams matching a
//! single call.

use mtaes::{
    cbc256_decrypt, cbc256_encrypt, ctr256_decrypt, ctr256_encrypt, ige256_decrypt,
    ige256_encrypt,
};
use proptest::prelude::*;

/// Non-empty data made of whole blocks.
fn blocks(max_blocks: usize) -> impl Strategy<Value = Vec<u8>> {
    (1..=max_blocks).prop_flat_map(|n| prop::collection::vec(any::<u8>(), n * 16))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn cbc_round_trip(
        data in blocks(8),
        key in prop::array::uniform32(any::<u8>()),
        iv in prop::array::uniform16(any::<u8>()),
    ) {
        let mut enc_iv = iv;
        let ciphertext = cbc256_encrypt(&data, &key, &mut enc_iv).unwrap();
        let mut dec_iv = iv;
        let plaintext = cbc256_decrypt(&ciphertext, &key, &mut dec_iv).unwrap();

        prop_assert_eq!(plaintext, data);
        prop_assert_eq!(enc_iv, dec_iv);
    }

    #[test]
    fn ctr_round_trip(
        data in prop::collection::vec(any::<u8>(), 1..200),
        key in prop::array::uniform32(any::<u8>()),
        iv in prop::array::uniform16(any::<u8>()),
        state in 0u8..16,
    ) {
        let (mut enc_iv, mut enc_state) = (iv, [state]);
        let ciphertext = ctr256_encrypt(&data, &key, &mut enc_iv, &mut enc_state).unwrap();
        let (mut dec_iv, mut dec_state) = (iv, [state]);
        let plaintext = ctr256_decrypt(&ciphertext, &key, &mut dec_iv, &mut dec_state).unwrap();

        prop_assert_eq!(plaintext, data);
        prop_assert_eq!((enc_iv, enc_state), (dec_iv, dec_state));
    }

    #[test]
    fn ige_round_trip_both_directions(
        data in blocks(8),
        key in prop::array::uniform32(any::<u8>()),
        iv in prop::collection::vec(any::<u8>(), 32),
    ) {
        let ciphertext = ige256_encrypt(&data, &key, &iv).unwrap();
        prop_assert_eq!(ige256_decrypt(&ciphertext, &key, &iv).unwrap(), data.clone());

        let garbled = ige256_decrypt(&data, &key, &iv).unwrap();
        prop_assert_eq!(ige256_encrypt(&garbled, &key, &iv).unwrap(), data);
    }

    #[test]
    fn ctr_chunks_match_single_call(
        data in prop::collection::vec(any::<u8>(), 2..160),
        cut in any::<prop::sample::Index>(),
        key in prop::array::uniform32(any::<u8>()),
        iv in prop::array::uniform16(any::<u8>()),
    ) {
        let split = 1 + cut.index(data.len() - 1);

        let (mut whole_iv, mut whole_state) = (iv, [0u8]);
        let whole = ctr256_encrypt(&data, &key, &mut whole_iv, &mut whole_state).unwrap();

        let (mut iv_buf, mut state_buf) = (iv, [0u8]);
        let mut chunked = ctr256_encrypt(&data[..split], &key, &mut iv_buf, &mut state_buf).unwrap();
        chunked.extend(ctr256_encrypt(&data[split..], &key, &mut iv_buf, &mut state_buf).unwrap());

        prop_assert_eq!(chunked, whole);
        prop_assert_eq!((iv_buf, state_buf), (whole_iv, whole_state));
    }

    #[test]
    fn cbc_chunks_match_single_call(
        data in blocks(10),
        cut in any::<prop::sample::Index>(),
        key in prop::array::uniform32(any::<u8>()),
        iv in prop::array::uniform16(any::<u8>()),
    ) {
        let n = data.len() / 16;
        prop_assume!(n >= 2);
        let split = 16 * (1 + cut.index(n - 1));

        let mut whole_iv = iv;
        let whole = cbc256_encrypt(&data, &key, &mut whole_iv).unwrap();

        let mut iv_buf = iv;
        let mut chunked = cbc256_encrypt(&data[..split], &key, &mut iv_buf).unwrap();
        chunked.extend(cbc256_encrypt(&data[split..], &key, &mut iv_buf).unwrap());
        prop_assert_eq!(&chunked, &whole);
        prop_assert_eq!(iv_buf, whole_iv);

        let mut iv_buf = iv;
        let mut plain = cbc256_decrypt(&whole[..split], &key, &mut iv_buf).unwrap();
        plain.extend(cbc256_decrypt(&whole[split..], &key, &mut iv_buf).unwrap());
        prop_assert_eq!(plain, data);
    }
}
