//! Transaction outputs.

use serde::{Deserialize, Serialize};
use sidechain_types::{AssetId, Fixed64, ProgramHash};

/// A transaction output: `value` of `asset_id` locked to `program_hash`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    pub asset_id: AssetId,
    pub value: Fixed64,
    /// Height before which the output cannot be spent (0 = unlocked).
    pub output_lock: u32,
    pub program_hash: ProgramHash,
}

impl Output {
    pub fn new(asset_id: AssetId, value: Fixed64, program_hash: ProgramHash) -> Self {
        Self {
            asset_id,
            value,
            output_lock: 0,
            program_hash,
        }
    }
}
