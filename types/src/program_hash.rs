//! Program hashes: 21-byte identities of unlocking programs.
//!
//! The first byte is a type prefix; the remaining 20 bytes are the Blake2b-160
//! digest of the program code. Program hashes double as output destinations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TypesError;

/// Length of a program hash in bytes.
pub const PROGRAM_HASH_LEN: usize = 21;

/// Recognised program-hash type prefixes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PrefixType {
    /// Single-signature program.
    Standard = 0x21,
    /// m-of-n multi-signature program.
    Multisig = 0x12,
    /// Cross-chain deposit address.
    CrossChain = 0x4B,
    /// Registered identity.
    RegisterId = 0x67,
    /// Deployed smart contract.
    SmartContract = 0x1C,
}

impl PrefixType {
    pub const ALL: [PrefixType; 5] = [
        PrefixType::Standard,
        PrefixType::Multisig,
        PrefixType::CrossChain,
        PrefixType::RegisterId,
        PrefixType::SmartContract,
    ];

    pub fn as_byte(self) -> u8 {
        self as u8
    }

    pub fn from_byte(b: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_byte() == b)
    }
}

/// A 21-byte program hash.
///
/// Ordering is byte-lexicographic, which is the canonical order used when
/// pairing required hashes with supplied programs.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProgramHash([u8; PROGRAM_HASH_LEN]);

impl ProgramHash {
    /// The all-zero sentinel meaning "no required program".
    pub const EMPTY: Self = Self([0u8; PROGRAM_HASH_LEN]);

    pub fn new(bytes: [u8; PROGRAM_HASH_LEN]) -> Self {
        Self(bytes)
    }

    /// Build a program hash from a prefix and a 20-byte code digest.
    pub fn from_parts(prefix: PrefixType, digest: [u8; 20]) -> Self {
        let mut bytes = [0u8; PROGRAM_HASH_LEN];
        bytes[0] = prefix.as_byte();
        bytes[1..].copy_from_slice(&digest);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PROGRAM_HASH_LEN] {
        &self.0
    }

    /// The raw leading type byte.
    pub fn prefix_byte(&self) -> u8 {
        self.0[0]
    }

    /// The decoded type prefix, if the leading byte is a known one.
    pub fn prefix(&self) -> Option<PrefixType> {
        PrefixType::from_byte(self.0[0])
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Parse a 42-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypesError> {
        let bytes = hex::decode(s).map_err(|e| TypesError::InvalidHex(e.to_string()))?;
        let arr: [u8; PROGRAM_HASH_LEN] =
            bytes
                .try_into()
                .map_err(|v: Vec<u8>| TypesError::InvalidLength {
                    expected: PROGRAM_HASH_LEN,
                    actual: v.len(),
                })?;
        Ok(Self(arr))
    }
}

impl fmt::Debug for ProgramHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProgramHash({})", hex::encode(self.0))
    }
}

impl fmt::Display for ProgramHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for ProgramHash {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_decoding() {
        let h = ProgramHash::from_parts(PrefixType::Multisig, [7u8; 20]);
        assert_eq!(h.prefix(), Some(PrefixType::Multisig));
        assert_eq!(h.prefix_byte(), 0x12);
        assert_eq!(&h.as_bytes()[1..], &[7u8; 20]);
    }

    #[test]
    fn unknown_prefix_is_none() {
        let mut bytes = [1u8; PROGRAM_HASH_LEN];
        bytes[0] = 0x99;
        assert_eq!(ProgramHash::new(bytes).prefix(), None);
    }

    #[test]
    fn empty_sentinel() {
        assert!(ProgramHash::EMPTY.is_empty());
        assert!(ProgramHash::default().is_empty());
        assert!(!ProgramHash::from_parts(PrefixType::Standard, [0u8; 20]).is_empty());
    }

    #[test]
    fn ordering_is_bytewise() {
        let a = ProgramHash::from_parts(PrefixType::Multisig, [0xff; 20]);
        let b = ProgramHash::from_parts(PrefixType::Standard, [0x00; 20]);
        // 0x12 < 0x21 regardless of the digest bytes
        assert!(a < b);
    }

    #[test]
    fn hex_roundtrip() {
        let h = ProgramHash::from_parts(PrefixType::CrossChain, [3u8; 20]);
        assert_eq!(ProgramHash::from_hex(&h.to_string()).unwrap(), h);
    }
}
