use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::mtaes::error::Result;

/// Fills an `N` byte IV from the OS RNG. Use `N = 16` for CBC and CTR, `N = 32` for IGE.
pub fn random_iv<const N: usize>() -> Result<[u8; N]> {
    let mut iv = [0u8; N];
    OsRng.try_fill_bytes(&mut iv)?;
    Ok(iv)
}
