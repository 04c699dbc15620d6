/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Size of an AES-256 key in bytes.
pub const KEY_SIZE: usize = 32;

/// Number of rounds for AES-256.
pub const NUM_ROUNDS: usize = 14;

/// Number of 32-bit words in an AES-256 key (Nk in FIPS-197).
pub(crate) const KEY_WORDS: usize = KEY_SIZE / 4;

/// Round constants. Index 0 is unused, AES-256 needs RCON[1..=7].
pub(crate) const RCON: [u8; 8] = [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40];

/// Constant term of the S-box affine transform.
pub(crate) const SBOX_AFFINE: u8 = 0x63;

/// Constant term of the inverse S-box affine transform.
pub(crate) const SBOX_INV_AFFINE: u8 = 0x05;
