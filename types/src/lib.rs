//! Fundamental types for the side-chain mempool.
//!
//! This crate defines the value types shared across every other crate in the workspace:
//! 256-bit hashes, program hashes, fixed-point amounts, keys and chain parameters.

pub mod amount;
pub mod error;
pub mod hash;
pub mod keys;
pub mod params;
pub mod program_hash;

pub use amount::Fixed64;
pub use error::TypesError;
pub use hash::{AssetId, TxId, Uint256};
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use params::ChainParams;
pub use program_hash::{PrefixType, ProgramHash};
