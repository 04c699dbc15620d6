//! Core AES-256 implementation: key schedule plus encryption and decryption of a single 16 byte block.
//! Exports [`RoundKeys`], `encrypt_block` and `decrypt_block`.

pub mod constants;
mod decryption;
mod encryption;
mod schedule;
mod util;

pub use decryption::decrypt_block;
pub use encryption::encrypt_block;
pub use schedule::RoundKeys;
