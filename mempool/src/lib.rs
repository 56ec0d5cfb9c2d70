//! Transaction validation for the side-chain mempool.
//!
//! Validation is a two-phase pipeline of registered check functions:
//!
//! 1. **Sanity** checks need only the transaction itself (size, inputs,
//!    outputs, payload shape).
//! 2. **Context** checks need chain state (signature programs against the
//!    UTXO set, SPV proofs for main-chain deposits).
//!
//! Each phase runs its functions in registration order and stops at the first
//! failure; context checks run only when every sanity check has passed.
//! [`new_validator`] wires the side-chain rules into a [`Validator`]; hosts may
//! register, replace or remove functions by name afterwards.

pub mod config;
pub mod destination;
pub mod error;
pub mod host;
pub mod inputs;
pub mod outputs;
pub mod payload;
pub mod precision;
pub mod registry;
pub mod sidechain;
pub mod signature;

pub use config::{MempoolConfig, RewardRule, ValidationConfig};
pub use destination::is_recognized_destination;
pub use error::{
    ConfigError, ErrorKind, HashDerivationError, ProgramError, SpvError, ValidationError,
};
pub use host::{
    sort_program_hashes, sort_programs, ProgramHashSource, ProgramRunner, SpvVerifier,
    StandardProgramRunner, UtxoProgramHashes, UtxoView,
};
pub use inputs::{check_transaction_inputs, check_transaction_size};
pub use outputs::check_transaction_outputs;
pub use payload::check_transaction_payload;
pub use precision::check_amount_precise;
pub use registry::{func_names, CheckFailure, CheckFn, Phase, Validator};
pub use sidechain::new_validator;
pub use signature::check_transaction_signature;
