//! Signature programs supplied with a transaction.

use serde::{Deserialize, Serialize};
use sidechain_crypto::{to_program_hash, CodeError};
use sidechain_types::ProgramHash;

/// An unlocking program: the locking `code` whose hash must match a required
/// program hash, and the `parameter` (signatures) that satisfies it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub code: Vec<u8>,
    pub parameter: Vec<u8>,
}

impl Program {
    pub fn new(code: Vec<u8>, parameter: Vec<u8>) -> Self {
        Self { code, parameter }
    }

    /// The program hash this program answers for.
    pub fn program_hash(&self) -> Result<ProgramHash, CodeError> {
        to_program_hash(&self.code)
    }
}
