use rand::rand_core;
use thiserror::Error;

/// mtaes Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// mtaes Error type.
///
/// Every variant except [`Rng`](Error::Rng) describes an argument rejected before any
/// cryptographic work started. When one is returned, no chaining buffer has been modified.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A dynamic call was made with the wrong number of arguments.
    #[error("function takes exactly {expected} arguments ({given} given)")]
    ArgumentCount { expected: usize, given: usize },

    /// A dynamic call was made with an argument that is not a byte buffer.
    #[error("argument {index}: a bytes-like object is required, not '{found}'")]
    ArgumentType { index: usize, found: &'static str },

    /// Input data was empty.
    #[error("Data must not be empty")]
    EmptyData,

    /// Key was not 32 bytes long.
    #[error("Key size must be exactly 32 bytes (got {len})")]
    InvalidKeySize { len: usize },

    /// IV was not 16 bytes (CBC, CTR) or 32 bytes (IGE) long.
    #[error("IV size must be exactly {expected} bytes (got {len})")]
    InvalidIvSize { len: usize, expected: usize },

    /// CTR state buffer was not exactly one byte.
    #[error("State size must be exactly 1 byte (got {len})")]
    InvalidStateSize { len: usize },

    /// CTR state byte was outside of `0..=15`.
    #[error("State value must be in the range [0, 15] (got {value})")]
    InvalidStateValue { value: u8 },

    /// CBC or IGE data length was not a multiple of the block size.
    #[error("Data size must match a multiple of 16 bytes (got {len})")]
    UnalignedDataLength { len: usize },

    /// A dynamic call named an operation that does not exist.
    #[error("unknown operation '{name}'")]
    UnknownOperation { name: String },

    /// OS RNG failed during random key or IV generation.
    #[error("OS RNG failed in random key or IV generation")]
    Rng(#[from] rand_core::OsError),
}
