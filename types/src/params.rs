//! Chain parameters consumed by transaction validation.

use crate::hash::AssetId;
use crate::program_hash::{PrefixType, ProgramHash};
use serde::{Deserialize, Serialize};

/// Smallest precision an asset may declare.
pub const MIN_PRECISION: u8 = 0;

/// Largest precision an asset may declare; also the precision of `Fixed64`.
pub const MAX_PRECISION: u8 = 8;

/// Default upper bound on a serialized transaction, in bytes.
pub const MAX_TX_SIZE: usize = 10_000_000;

/// Asset id of the main-chain coin, the only asset outputs may carry.
const SYSTEM_ASSET_ID: [u8; 32] = [
    0xa3, 0xd0, 0xea, 0xa4, 0x66, 0xdf, 0x74, 0x98, 0x3b, 0x5d, 0x7c, 0x54, 0x3d, 0xe6, 0x90, 0x4f,
    0x4c, 0x94, 0x18, 0xea, 0xd5, 0xff, 0xd6, 0xd2, 0x58, 0x14, 0x23, 0x4a, 0x96, 0xdb, 0x37, 0xb0,
];

/// Development foundation address.
const DEV_FOUNDATION_DIGEST: [u8; 20] = [
    0x3c, 0x1d, 0x22, 0x8b, 0x47, 0x95, 0x0e, 0x6a, 0xf1, 0x02, 0x7d, 0x54, 0xc9, 0x88, 0x31, 0x6f,
    0xa0, 0x5b, 0xe4, 0x19,
];

/// Chain-level constants and addresses the validator is parameterised by.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainParams {
    /// The asset every output must be denominated in.
    pub system_asset_id: AssetId,

    /// Recipient of the mandatory share of each block reward.
    pub foundation: ProgramHash,

    /// Inclusive precision bounds for registered assets.
    pub min_precision: u8,
    pub max_precision: u8,

    /// Maximum serialized transaction size in bytes.
    pub max_tx_size: usize,
}

impl ChainParams {
    pub fn dev_defaults() -> Self {
        Self {
            system_asset_id: AssetId::new(SYSTEM_ASSET_ID),
            foundation: ProgramHash::from_parts(PrefixType::Multisig, DEV_FOUNDATION_DIGEST),
            min_precision: MIN_PRECISION,
            max_precision: MAX_PRECISION,
            max_tx_size: MAX_TX_SIZE,
        }
    }
}

impl Default for ChainParams {
    fn default() -> Self {
        Self::dev_defaults()
    }
}
