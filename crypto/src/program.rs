//! Program code: the locking half of a signature program.
//!
//! Two code shapes are understood locally:
//!
//! ```text
//! standard:  PUSH32 <pubkey> CHECKSIG
//! multisig:  OP_m (PUSH32 <pubkey>){n} OP_n CHECKMULTISIG
//! ```
//!
//! Multisig keys are stored in ascending byte order with no duplicates.
//! A program hash is the code's type prefix followed by Blake2b-160 of the code.

use crate::hash::blake2b_160;
use sidechain_types::{PrefixType, ProgramHash, PublicKey};
use thiserror::Error;

pub const OP_PUSH32: u8 = 0x20;
pub const OP_1: u8 = 0x51;
pub const OP_16: u8 = 0x60;
pub const OP_CHECKSIG: u8 = 0xAC;
pub const OP_CHECKMULTISIG: u8 = 0xAE;

/// Maximum number of keys in a multisig program.
pub const MAX_MULTISIG_KEYS: usize = 16;

const KEY_PUSH_LEN: usize = 1 + PublicKey::LEN;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodeError {
    #[error("program code is empty")]
    Empty,

    #[error("unknown program code type (trailing opcode {0:#04x})")]
    UnknownType(u8),

    #[error("malformed program code: {0}")]
    Malformed(String),

    #[error("invalid multisig threshold: {m} of {n}")]
    InvalidThreshold { m: usize, n: usize },
}

/// A decoded program code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodeKind {
    Standard(PublicKey),
    Multisig { m: usize, keys: Vec<PublicKey> },
}

impl CodeKind {
    pub fn prefix(&self) -> PrefixType {
        match self {
            CodeKind::Standard(_) => PrefixType::Standard,
            CodeKind::Multisig { .. } => PrefixType::Multisig,
        }
    }
}

/// Build single-signature code for `key`.
pub fn create_standard_code(key: &PublicKey) -> Vec<u8> {
    let mut code = Vec::with_capacity(KEY_PUSH_LEN + 1);
    code.push(OP_PUSH32);
    code.extend_from_slice(key.as_bytes());
    code.push(OP_CHECKSIG);
    code
}

/// Build m-of-n code. Keys are sorted and deduplicated first.
pub fn create_multisig_code(m: usize, keys: &[PublicKey]) -> Result<Vec<u8>, CodeError> {
    let mut keys = keys.to_vec();
    keys.sort();
    keys.dedup();
    let n = keys.len();
    if m == 0 || m > n || n > MAX_MULTISIG_KEYS {
        return Err(CodeError::InvalidThreshold { m, n });
    }

    let mut code = Vec::with_capacity(n * KEY_PUSH_LEN + 3);
    code.push(OP_1 + (m as u8 - 1));
    for key in &keys {
        code.push(OP_PUSH32);
        code.extend_from_slice(key.as_bytes());
    }
    code.push(OP_1 + (n as u8 - 1));
    code.push(OP_CHECKMULTISIG);
    Ok(code)
}

/// Decode a program code into its kind.
pub fn parse_code(code: &[u8]) -> Result<CodeKind, CodeError> {
    let (&last, body) = code.split_last().ok_or(CodeError::Empty)?;
    match last {
        OP_CHECKSIG => {
            if body.len() != KEY_PUSH_LEN || body[0] != OP_PUSH32 {
                return Err(CodeError::Malformed(format!(
                    "standard code must be {} bytes",
                    KEY_PUSH_LEN + 1
                )));
            }
            let key = PublicKey::from_slice(&body[1..])
                .ok_or_else(|| CodeError::Malformed("bad public key length".into()))?;
            Ok(CodeKind::Standard(key))
        }
        OP_CHECKMULTISIG => parse_multisig(body),
        other => Err(CodeError::UnknownType(other)),
    }
}

fn parse_multisig(body: &[u8]) -> Result<CodeKind, CodeError> {
    if body.len() < 2 {
        return Err(CodeError::Malformed("multisig code too short".into()));
    }
    let m = small_int(body[0])?;
    let n = small_int(body[body.len() - 1])?;
    let key_bytes = &body[1..body.len() - 1];
    if key_bytes.len() != n * KEY_PUSH_LEN {
        return Err(CodeError::Malformed(format!(
            "expected {} keys, found {} bytes of key data",
            n,
            key_bytes.len()
        )));
    }
    if m > n {
        return Err(CodeError::InvalidThreshold { m, n });
    }

    let mut keys: Vec<PublicKey> = Vec::with_capacity(n);
    for chunk in key_bytes.chunks_exact(KEY_PUSH_LEN) {
        if chunk[0] != OP_PUSH32 {
            return Err(CodeError::Malformed("expected PUSH32 before key".into()));
        }
        let key = PublicKey::from_slice(&chunk[1..])
            .ok_or_else(|| CodeError::Malformed("bad public key length".into()))?;
        if keys.last().is_some_and(|prev| *prev >= key) {
            return Err(CodeError::Malformed(
                "multisig keys must be strictly ascending".into(),
            ));
        }
        keys.push(key);
    }
    Ok(CodeKind::Multisig { m, keys })
}

fn small_int(op: u8) -> Result<usize, CodeError> {
    if (OP_1..=OP_16).contains(&op) {
        Ok((op - OP_1) as usize + 1)
    } else {
        Err(CodeError::Malformed(format!("{op:#04x} is not OP_1..OP_16")))
    }
}

/// Derive the program hash identifying `code`.
pub fn to_program_hash(code: &[u8]) -> Result<ProgramHash, CodeError> {
    let kind = parse_code(code)?;
    Ok(ProgramHash::from_parts(kind.prefix(), blake2b_160(code)))
}
