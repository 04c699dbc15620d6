// AES-256-CTR vectors from NIST SP 800-38A, F.5.5 and F.5.6, and from
// pyca/cryptography (vectors/cryptography_vectors/ciphers/AES/CTR/aes-256-ctr.txt)

use hex_literal::hex;
use mtaes::{Result, ctr256_decrypt, ctr256_encrypt};

const KEY: [u8; 32] = hex!("603DEB1015CA71BE2B73AEF0857D77811F352C073B6108D72D9810A30914DFF4");
const IV: [u8; 16] = hex!("F0F1F2F3F4F5F6F7F8F9FAFBFCFDFEFF");
const PLAINTEXT: [u8; 64] = hex!(
    "6BC1BEE22E409F96E93D7E117393172A"
    "AE2D8A571E03AC9C9EB76FAC45AF8E51"
    "30C81C46A35CE411E5FBC1191A0A52EF"
    "F69F2445DF4F9B17AD2B417BE66C3710"
);
const CIPHERTEXT: [u8; 64] = hex!(
    "601EC313775789A5B7A7F504BBF3D228"
    "F443E3CA4D62B59ACA84E990CACAF5C5"
    "2B0930DAA23DE94CE87017BA2D84988D"
    "DFC9C58DB67AADA613C2DD08457941A6"
);

fn encrypt_fresh(data: &[u8], key: &[u8], iv: &[u8; 16]) -> Result<Vec<u8>> {
    let mut iv = *iv;
    let mut state = [0u8];
    ctr256_encrypt(data, key, &mut iv, &mut state)
}

#[test]
fn nist_ctr256_encrypt() -> Result<()> {
    let mut iv = IV;
    let mut state = [0u8];
    assert_eq!(ctr256_encrypt(&PLAINTEXT, &KEY, &mut iv, &mut state)?, CIPHERTEXT);
    assert_eq!(iv, hex!("F0F1F2F3F4F5F6F7F8F9FAFBFCFDFF03"));
    assert_eq!(state, [0]);
    Ok(())
}

#[test]
fn nist_ctr256_decrypt() -> Result<()> {
    let mut iv = IV;
    let mut state = [0u8];
    assert_eq!(ctr256_decrypt(&CIPHERTEXT, &KEY, &mut iv, &mut state)?, PLAINTEXT);
    Ok(())
}

#[test]
fn pyca_single_block() -> Result<()> {
    let out = encrypt_fresh(
        &hex!("53696E676C6520626C6F636B206D7367"),
        &hex!("776BEFF2851DB06F4C8A0542C8696F6C6A81AF1EEC96B4D37FC1D689E6C1C104"),
        &hex!("00000060DB5672C97AA8F0B200000001"),
    )?;
    assert_eq!(out, hex!("145AD01DBF824EC7560863DC71E3E0C0"));
    Ok(())
}

#[test]
fn pyca_two_blocks() -> Result<()> {
    let out = encrypt_fresh(
        &hex!("000102030405060708090A0B0C0D0E0F101112131415161718191A1B1C1D1E1F"),
        &hex!("F6D66D6BD52D59BB0796365879EFF886C66DD51A5B6A99744B50590C87A23884"),
        &hex!("00FAAC24C1585EF15A43D87500000001"),
    )?;
    assert_eq!(
        out,
        hex!("F05E231B3894612C49EE000B804EB2A9B8306B508F839D6A5530831D9344AF1C")
    );
    Ok(())
}

#[test]
fn pyca_partial_last_block() -> Result<()> {
    let out = encrypt_fresh(
        &hex!("000102030405060708090A0B0C0D0E0F101112131415161718191A1B1C1D1E1F20212223"),
        &hex!("FF7A617CE69148E4F1726E2F43581DE2AA62D9F805532EDFF1EED687FB54153D"),
        &hex!("001CC5B751A51D70A1C1114800000001"),
    )?;
    assert_eq!(
        out,
        hex!("EB6C52821D0BBBF7CE7594462ACA4FAAB407DF866569FD07F48CC0B583D6071F1EC0E6B8")
    );
    Ok(())
}

#[test]
fn every_two_way_split_matches_one_call() -> Result<()> {
    for split in 1..PLAINTEXT.len() {
        let mut iv = IV;
        let mut state = [0u8];
        let mut joined = ctr256_encrypt(&PLAINTEXT[..split], &KEY, &mut iv, &mut state)?;
        assert_eq!(usize::from(state[0]), split % 16, "split at {split}");
        joined.extend(ctr256_encrypt(&PLAINTEXT[split..], &KEY, &mut iv, &mut state)?);
        assert_eq!(joined, CIPHERTEXT, "split at {split}");
    }
    Ok(())
}

#[test]
fn byte_at_a_time() -> Result<()> {
    let mut iv = IV;
    let mut state = [0u8];
    let mut out = Vec::new();
    for byte in CIPHERTEXT.chunks(1) {
        out.extend(ctr256_decrypt(byte, &KEY, &mut iv, &mut state)?);
    }
    assert_eq!(out, PLAINTEXT);
    Ok(())
}

#[test]
fn nonzero_state_starts_inside_keystream_block() -> Result<()> {
    // encrypting zeros exposes the keystream
    let keystream = encrypt_fresh(&[0u8; 16], &KEY, &IV)?;

    let mut iv = IV;
    let mut state = [5u8];
    let out = ctr256_encrypt(&[0u8; 11], &KEY, &mut iv, &mut state)?;

    assert_eq!(out, keystream[5..]);
    assert_eq!(state, [0]);
    assert_eq!(iv, hex!("F0F1F2F3F4F5F6F7F8F9FAFBFCFDFF00"));
    Ok(())
}
