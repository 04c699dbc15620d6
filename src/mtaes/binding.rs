//! Dynamic call surface for hosts that pass loosely typed arguments (scripting bindings, RPC,
//! the CLI). Checks argument count and types, then hands the byte buffers to the checked
//! functions at the crate root, such as [`cbc256_encrypt`](crate::cbc256_encrypt).
//!
//! ```
//! # fn main() -> mtaes::Result<()> {
//! use mtaes::binding::{call, Operation, Value};
//!
//! let op: Operation = "ctr256_encrypt".parse()?;
//! let mut args = vec![
//!     Value::Bytes(b"hello".to_vec()),
//!     Value::Bytes(vec![0x11; 32]),
//!     Value::Bytes(vec![0x00; 16]),
//!     Value::Bytes(vec![0]),
//! ];
//! let ciphertext = call(op, &mut args)?;
//! assert_eq!(ciphertext.len(), 5);
//!
//! // the cursor was advanced in place
//! assert_eq!(args[3], Value::Bytes(vec![5]));
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::str::FromStr;

use crate::mtaes::cipher::*;
use crate::mtaes::error::{Error, Result};

/// A loosely typed argument. Only [`Value::Bytes`] is accepted by the operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Bytes(Vec<u8>),
    Int(i64),
    Str(String),
    None,
}

impl Value {
    /// Name of the argument's type, as reported in [`Error::ArgumentType`].
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bytes(_) => "bytes",
            Value::Int(_) => "int",
            Value::Str(_) => "str",
            Value::None => "none",
        }
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

/// The six operations of the engine.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Operation {
    Ige256Encrypt,
    Ige256Decrypt,
    Ctr256Encrypt,
    Ctr256Decrypt,
    Cbc256Encrypt,
    Cbc256Decrypt,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::Ige256Encrypt,
        Operation::Ige256Decrypt,
        Operation::Ctr256Encrypt,
        Operation::Ctr256Decrypt,
        Operation::Cbc256Encrypt,
        Operation::Cbc256Decrypt,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Ige256Encrypt => "ige256_encrypt",
            Operation::Ige256Decrypt => "ige256_decrypt",
            Operation::Ctr256Encrypt => "ctr256_encrypt",
            Operation::Ctr256Decrypt => "ctr256_decrypt",
            Operation::Cbc256Encrypt => "cbc256_encrypt",
            Operation::Cbc256Decrypt => "cbc256_decrypt",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Operation::Ige256Encrypt => "AES256-IGE Encryption",
            Operation::Ige256Decrypt => "AES256-IGE Decryption",
            Operation::Ctr256Encrypt => "AES256-CTR Encryption",
            Operation::Ctr256Decrypt => "AES256-CTR Decryption",
            Operation::Cbc256Encrypt => "AES256-CBC Encryption",
            Operation::Cbc256Decrypt => "AES256-CBC Decryption",
        }
    }

    /// Number of arguments: `data, key, iv`, plus `state` for CTR.
    pub fn arity(self) -> usize {
        match self {
            Operation::Ctr256Encrypt | Operation::Ctr256Decrypt => 4,
            _ => 3,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| Error::UnknownOperation { name: s.to_owned() })
    }
}

/// Invokes `op` on `args`.
///
/// CBC and CTR chaining arguments (`iv`, and `state` for CTR) are updated in place so the same
/// `args` can be reused for the next chunk of a stream. Nothing in `args` changes on error.
pub fn call(op: Operation, args: &mut [Value]) -> Result<Vec<u8>> {
    if args.len() != op.arity() {
        return Err(Error::ArgumentCount {
            expected: op.arity(),
            given: args.len(),
        });
    }

    match op {
        Operation::Ige256Encrypt => {
            let [data, key, iv] = buffers::<3>(args)?;
            ige256_encrypt(data, key, iv)
        }
        Operation::Ige256Decrypt => {
            let [data, key, iv] = buffers::<3>(args)?;
            ige256_decrypt(data, key, iv)
        }
        Operation::Ctr256Encrypt => {
            let [data, key, iv, state] = buffers::<4>(args)?;
            ctr256_encrypt(data, key, iv, state)
        }
        Operation::Ctr256Decrypt => {
            let [data, key, iv, state] = buffers::<4>(args)?;
            ctr256_decrypt(data, key, iv, state)
        }
        Operation::Cbc256Encrypt => {
            let [data, key, iv] = buffers::<3>(args)?;
            cbc256_encrypt(data, key, iv)
        }
        Operation::Cbc256Decrypt => {
            let [data, key, iv] = buffers::<3>(args)?;
            cbc256_decrypt(data, key, iv)
        }
    }
}

/// Borrows every argument as a byte buffer, failing on the first one that is not.
fn buffers<const N: usize>(args: &mut [Value]) -> Result<[&mut [u8]; N]> {
    let given = args.len();
    let buffers = args
        .iter_mut()
        .enumerate()
        .map(|(index, arg)| match arg {
            Value::Bytes(bytes) => Ok(bytes.as_mut_slice()),
            other => Err(Error::ArgumentType {
                index,
                found: other.type_name(),
            }),
        })
        .collect::<Result<Vec<_>>>()?;

    buffers.try_into().map_err(|_| Error::ArgumentCount {
        expected: N,
        given,
    })
}
