//! Transaction inputs: references to previously created outputs.

use serde::{Deserialize, Serialize};
use sidechain_types::TxId;

/// Reference to output `index` of transaction `tx_id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OutPoint {
    pub tx_id: TxId,
    pub index: u16,
}

impl OutPoint {
    /// The placeholder outpoint a coinbase input carries.
    pub const NULL: Self = Self {
        tx_id: TxId::ZERO,
        index: u16::MAX,
    };

    pub fn new(tx_id: TxId, index: u16) -> Self {
        Self { tx_id, index }
    }

    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub previous: OutPoint,
    pub sequence: u32,
}

impl Input {
    pub fn new(previous: OutPoint) -> Self {
        Self {
            previous,
            sequence: u32::MAX,
        }
    }
}
