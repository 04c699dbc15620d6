//! AES-256 in the three chaining modes used by MTProto transports: IGE, CBC and CTR.
//!
//! The six entry points take plain byte slices, check them, and return the transformed buffer.
//! CBC and CTR write their chaining state back into the caller's `iv` (and `state`) so a long
//! stream can be processed in independent chunks:
//!
//! ```
//! # fn main() -> mtaes::Result<()> {
//! let key = [0x42u8; 32];
//! let message = b"a message split over two calls..";
//!
//! let mut iv = [0u8; 16];
//! let mut state = [0u8];
//! let mut ciphertext = mtaes::ctr256_encrypt(&message[..7], &key, &mut iv, &mut state)?;
//! ciphertext.extend(mtaes::ctr256_encrypt(&message[7..], &key, &mut iv, &mut state)?);
//!
//! let (mut iv, mut state) = ([0u8; 16], [0u8]);
//! assert_eq!(ciphertext, mtaes::ctr256_encrypt(message, &key, &mut iv, &mut state)?);
//!
//! let mut iv = [0u8; 16];
//! let mut state = [0u8];
//! let plaintext = mtaes::ctr256_decrypt(&ciphertext, &key, &mut iv, &mut state)?;
//! assert_eq!(plaintext, message);
//! # Ok(())
//! # }
//! ```
//!
//! None of the modes authenticate the ciphertext, and no padding is applied: CBC and IGE input
//! must already be a multiple of 16 bytes.

mod mtaes;

pub use mtaes::{
    BLOCK_SIZE, Error, IGE_IV_SIZE, IV_SIZE, KEY_SIZE, Key, Result, binding, cbc256_decrypt,
    cbc256_encrypt, ctr256_decrypt, ctr256_encrypt, ige256_decrypt, ige256_encrypt, random_iv,
};
