//! Modes of operation over the AES-256 block transform. Inputs are assumed valid: the functions
//! here never fail and leave all argument checking to [`cipher`](crate::mtaes::cipher).

mod cbc;
mod ctr;
mod ige;
pub(crate) mod util;

#[cfg(feature = "parallel")]
pub use cbc::cbc_core_dec_parallel;
pub use cbc::{cbc_core_dec_serial, cbc_core_enc};
#[cfg(feature = "parallel")]
pub use ctr::ctr_core_parallel;
pub use ctr::ctr_core_serial;
pub use ige::{ige_core_dec, ige_core_enc};
