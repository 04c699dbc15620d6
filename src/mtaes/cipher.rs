//! Checked entry points. Every argument is validated here before the key schedule runs, and the
//! caller's chaining buffers are only written once the whole transform has succeeded.

use tracing::{debug, trace};

use crate::mtaes::core::constants::BLOCK_SIZE;
use crate::mtaes::error::{Error, Result};
use crate::mtaes::key::Key;
use crate::mtaes::modes::*;
#[cfg(feature = "parallel")]
use crate::mtaes::modes::util::PARALLEL_THRESHOLD;

/// IV length for CBC and CTR.
pub const IV_SIZE: usize = 16;

/// IV length for IGE: previous ciphertext block followed by previous plaintext block.
pub const IGE_IV_SIZE: usize = 32;

/// **Cipher block chaining** encryption.
///
/// `data` must be a non-empty multiple of 16 bytes, `key` 32 bytes and `iv` 16 bytes.
/// Each plaintext block is `XOR`'d with the previous ciphertext block (the `iv` for the first
/// block) before encryption. On success `iv` holds the last ciphertext block, so passing the same
/// buffer to the next call continues the stream.
pub fn cbc256_encrypt(data: &[u8], key: &[u8], iv: &mut [u8]) -> Result<Vec<u8>> {
    const OP: &str = "cbc256_encrypt";
    let (key, mut chain) = check_cbc(data, key, iv).inspect_err(|e| rejected(OP, e))?;

    let round_keys = key.round_keys();
    let out = cbc_core_enc(data, &round_keys, &mut chain);

    iv.copy_from_slice(&chain);
    trace!(operation = OP, len = data.len(), "transformed");
    Ok(out)
}

/// **Cipher block chaining** decryption.
///
/// Same shapes as [`cbc256_encrypt`]. On success `iv` holds the last ciphertext block of `data`.
pub fn cbc256_decrypt(data: &[u8], key: &[u8], iv: &mut [u8]) -> Result<Vec<u8>> {
    const OP: &str = "cbc256_decrypt";
    let (key, mut chain) = check_cbc(data, key, iv).inspect_err(|e| rejected(OP, e))?;

    let round_keys = key.round_keys();
    #[cfg(feature = "parallel")]
    let out = if data.len() > PARALLEL_THRESHOLD {
        cbc_core_dec_parallel(data, &round_keys, &mut chain)
    } else {
        cbc_core_dec_serial(data, &round_keys, &mut chain)
    };
    #[cfg(not(feature = "parallel"))]
    let out = cbc_core_dec_serial(data, &round_keys, &mut chain);

    iv.copy_from_slice(&chain);
    trace!(operation = OP, len = data.len(), "transformed");
    Ok(out)
}

/// **Counter mode** encryption.
///
/// `data` may be any non-empty length, `key` is 32 bytes, `iv` is the 16 byte big-endian counter
/// block and `state` a single byte in `0..=15` counting the bytes of the current keystream block
/// already used. On success both are left at the resumption point: encrypting a stream in chunks
/// while carrying `iv` and `state` forward matches encrypting it in one call.
///
/// **Important**: a counter value must never be reused with the same key.
pub fn ctr256_encrypt(data: &[u8], key: &[u8], iv: &mut [u8], state: &mut [u8]) -> Result<Vec<u8>> {
    ctr(data, key, iv, state, "ctr256_encrypt")
}

/// **Counter mode** decryption. Identical to [`ctr256_encrypt`], CTR is its own inverse.
pub fn ctr256_decrypt(data: &[u8], key: &[u8], iv: &mut [u8], state: &mut [u8]) -> Result<Vec<u8>> {
    ctr(data, key, iv, state, "ctr256_decrypt")
}

/// **Infinite garble extension** encryption.
///
/// `data` must be a non-empty multiple of 16 bytes, `key` 32 bytes and `iv` 32 bytes: the
/// previous ciphertext reference followed by the previous plaintext reference. Each call is
/// self-contained and `iv` is not modified.
pub fn ige256_encrypt(data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    const OP: &str = "ige256_encrypt";
    let (key, iv) = check_ige(data, key, iv).inspect_err(|e| rejected(OP, e))?;

    let out = ige_core_enc(data, &key.round_keys(), &iv);
    trace!(operation = OP, len = data.len(), "transformed");
    Ok(out)
}

/// **Infinite garble extension** decryption.
///
/// Same shapes as [`ige256_encrypt`]. A corrupted ciphertext block garbles every plaintext block
/// from that point to the end of `data`.
pub fn ige256_decrypt(data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    const OP: &str = "ige256_decrypt";
    let (key, iv) = check_ige(data, key, iv).inspect_err(|e| rejected(OP, e))?;

    let out = ige_core_dec(data, &key.round_keys(), &iv);
    trace!(operation = OP, len = data.len(), "transformed");
    Ok(out)
}

fn ctr(
    data: &[u8],
    key: &[u8],
    iv: &mut [u8],
    state: &mut [u8],
    op: &'static str,
) -> Result<Vec<u8>> {
    let (key, mut counter, mut offset) =
        check_ctr(data, key, iv, state).inspect_err(|e| rejected(op, e))?;

    let round_keys = key.round_keys();
    #[cfg(feature = "parallel")]
    let out = if data.len() > PARALLEL_THRESHOLD {
        ctr_core_parallel(data, &round_keys, &mut counter, &mut offset)
    } else {
        ctr_core_serial(data, &round_keys, &mut counter, &mut offset)
    };
    #[cfg(not(feature = "parallel"))]
    let out = ctr_core_serial(data, &round_keys, &mut counter, &mut offset);

    iv.copy_from_slice(&counter);
    state[0] = offset;
    trace!(operation = op, len = data.len(), state = offset, "transformed");
    Ok(out)
}

fn rejected(op: &'static str, err: &Error) {
    debug!(operation = op, error = %err, "rejected arguments");
}

fn check_data(data: &[u8], aligned: bool) -> Result<()> {
    if data.is_empty() {
        return Err(Error::EmptyData);
    }
    if aligned && data.len() % BLOCK_SIZE != 0 {
        return Err(Error::UnalignedDataLength { len: data.len() });
    }
    Ok(())
}

fn check_iv<const N: usize>(iv: &[u8]) -> Result<[u8; N]> {
    iv.try_into().map_err(|_| Error::InvalidIvSize {
        len: iv.len(),
        expected: N,
    })
}

fn check_cbc(data: &[u8], key: &[u8], iv: &[u8]) -> Result<(Key, [u8; IV_SIZE])> {
    check_data(data, true)?;
    let key = Key::try_from_slice(key)?;
    let iv = check_iv::<IV_SIZE>(iv)?;
    Ok((key, iv))
}

fn check_ige(data: &[u8], key: &[u8], iv: &[u8]) -> Result<(Key, [u8; IGE_IV_SIZE])> {
    check_data(data, true)?;
    let key = Key::try_from_slice(key)?;
    let iv = check_iv::<IGE_IV_SIZE>(iv)?;
    Ok((key, iv))
}

fn check_ctr(data: &[u8], key: &[u8], iv: &[u8], state: &[u8]) -> Result<(Key, [u8; IV_SIZE], u8)> {
    check_data(data, false)?;
    let key = Key::try_from_slice(key)?;
    let iv = check_iv::<IV_SIZE>(iv)?;
    let offset = match state {
        [value] if usize::from(*value) < BLOCK_SIZE => *value,
        [value] => return Err(Error::InvalidStateValue { value: *value }),
        _ => return Err(Error::InvalidStateSize { len: state.len() }),
    };
    Ok((key, iv, offset))
}
