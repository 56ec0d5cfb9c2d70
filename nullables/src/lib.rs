//! Nullable infrastructure for deterministic testing.
//!
//! The validator's external collaborators (chain state, the SPV proof
//! service) are abstracted behind traits. This crate provides test-friendly
//! implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Never touch the filesystem or network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod spv;
pub mod utxo;

pub use spv::NullSpvService;
pub use utxo::NullUtxoView;
