//! Validation errors.
//!
//! Every error is a final rejection of the transaction being validated; none
//! is fatal to the process.

use sidechain_crypto::CodeError;
use sidechain_types::{AssetId, Fixed64, ProgramHash, TxId};
use thiserror::Error;

/// Coarse grouping of [`ValidationError`] variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed transaction structure or payload.
    Structural,
    /// Output set violates asset, destination or reward rules.
    Output,
    /// Signature programs or cross-chain proof did not authorise the transaction.
    Authorization,
}

#[derive(Debug, Error)]
pub enum ValidationError {
    // ── Structural ──────────────────────────────────────────────────────
    #[error("invalid asset precision {precision}, must be within [{min}, {max}]")]
    InvalidPrecision { precision: u8, min: u8, max: u8 },

    #[error("asset amount {amount} is not representable at precision {precision}")]
    PrecisionMismatch { amount: Fixed64, precision: u8 },

    #[error("unsupported transaction payload type {0}")]
    UnsupportedPayloadType(String),

    #[error("transaction size {size} exceeds maximum {max}")]
    TransactionTooLarge { size: usize, max: usize },

    #[error("transaction has no inputs")]
    NoInputs,

    #[error("input {index} spends {tx_id}:{output_index} more than once")]
    DuplicateInput {
        index: usize,
        tx_id: TxId,
        output_index: u16,
    },

    #[error("invalid coinbase inputs: {0}")]
    InvalidCoinbaseInputs(String),

    #[error("recharge transaction spends {count} inputs, none allowed")]
    InvalidRechargeInputs { count: usize },

    // ── Output ──────────────────────────────────────────────────────────
    #[error("coinbase has {count} outputs, at least 2 required")]
    InsufficientOutputs { count: usize },

    #[error("output {index} carries asset {asset_id}, expected the system asset")]
    InvalidAssetId { index: usize, asset_id: AssetId },

    #[error("output {index} has negative value {value}")]
    InvalidOutputValue { index: usize, value: Fixed64 },

    #[error("foundation reward {foundation} raw is below 30% of total reward {total} raw")]
    InsufficientFoundationReward { foundation: i128, total: i128 },

    #[error("transaction has no outputs")]
    NoOutputs,

    #[error("output {index} has unrecognized destination {program_hash}")]
    InvalidDestination {
        index: usize,
        program_hash: ProgramHash,
    },

    // ── Authorization ───────────────────────────────────────────────────
    #[error("failed to derive program hashes: {0}")]
    ProgramHashDerivationFailed(#[source] HashDerivationError),

    #[error("failed to sort programs: {0}")]
    ProgramSortFailed(#[source] ProgramError),

    #[error("program execution failed: {0}")]
    ProgramExecutionFailed(#[source] ProgramError),

    #[error("invalid recharge to side chain transaction: {0}")]
    InvalidRechargeProof(#[source] SpvError),
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPrecision { .. }
            | Self::PrecisionMismatch { .. }
            | Self::UnsupportedPayloadType(_)
            | Self::TransactionTooLarge { .. }
            | Self::NoInputs
            | Self::DuplicateInput { .. }
            | Self::InvalidCoinbaseInputs(_)
            | Self::InvalidRechargeInputs { .. } => ErrorKind::Structural,
            Self::InsufficientOutputs { .. }
            | Self::InvalidAssetId { .. }
            | Self::InvalidOutputValue { .. }
            | Self::InsufficientFoundationReward { .. }
            | Self::NoOutputs
            | Self::InvalidDestination { .. } => ErrorKind::Output,
            Self::ProgramHashDerivationFailed(_)
            | Self::ProgramSortFailed(_)
            | Self::ProgramExecutionFailed(_)
            | Self::InvalidRechargeProof(_) => ErrorKind::Authorization,
        }
    }
}

/// Failure to work out which program hashes a transaction must satisfy.
#[derive(Debug, Error)]
pub enum HashDerivationError {
    #[error("referenced output {tx_id}:{index} not found")]
    MissingReference { tx_id: TxId, index: u16 },

    #[error("script attribute {index} holds {len} bytes, expected a 21-byte program hash")]
    MalformedScriptAttribute { index: usize, len: usize },

    #[error("{0}")]
    Other(String),
}

/// Failure to order or execute signature programs.
#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("invalid program code: {0}")]
    InvalidCode(#[from] CodeError),

    #[error("{hashes} program hashes required but {programs} programs supplied")]
    CountMismatch { hashes: usize, programs: usize },

    #[error("program {index} answers for {actual}, expected {expected}")]
    HashMismatch {
        index: usize,
        expected: ProgramHash,
        actual: ProgramHash,
    },

    #[error("program {index} parameter is malformed: {reason}")]
    InvalidParameter { index: usize, reason: String },

    #[error("program {index} signature verification failed")]
    InvalidSignature { index: usize },

    #[error("program {index} carries {valid} signatures, {needed} required")]
    NotEnoughSignatures {
        index: usize,
        needed: usize,
        valid: usize,
    },

    #[error("{0}")]
    Other(String),
}

/// Failure reported by the cross-chain proof verifier.
#[derive(Debug, Error)]
pub enum SpvError {
    #[error("proof rejected: {0}")]
    Rejected(String),

    #[error("proof service unavailable: {0}")]
    Unavailable(String),
}

/// Failure to load or interpret mempool configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(
            ValidationError::UnsupportedPayloadType("Other(0x09)".into()).kind(),
            ErrorKind::Structural
        );
        assert_eq!(
            ValidationError::InvalidRechargeInputs { count: 2 }.kind(),
            ErrorKind::Structural
        );
        assert_eq!(ValidationError::NoOutputs.kind(), ErrorKind::Output);
        assert_eq!(
            ValidationError::InvalidRechargeProof(SpvError::Rejected("bad".into())).kind(),
            ErrorKind::Authorization
        );
    }

    #[test]
    fn wrapped_cause_is_in_message() {
        let err = ValidationError::ProgramExecutionFailed(ProgramError::InvalidSignature {
            index: 2,
        });
        assert_eq!(
            err.to_string(),
            "program execution failed: program 2 signature verification failed"
        );
    }
}
