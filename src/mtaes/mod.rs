pub mod binding;
mod cipher;
mod core;
mod error;
mod key;
mod modes;
mod util;

pub use cipher::{
    IGE_IV_SIZE, IV_SIZE, cbc256_decrypt, cbc256_encrypt, ctr256_decrypt, ctr256_encrypt,
    ige256_decrypt, ige256_encrypt,
};
pub use self::core::constants::{BLOCK_SIZE, KEY_SIZE};
pub use error::{Error, Result};
pub use key::Key;
pub use util::random_iv;
