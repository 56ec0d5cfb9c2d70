//! Nullable UTXO view — an in-memory output set.

use sidechain_mempool::UtxoView;
use sidechain_transactions::{OutPoint, Output};
use sidechain_types::{AssetId, Fixed64, ProgramHash};
use std::collections::HashMap;

/// An in-memory set of unspent outputs, filled before validation starts.
#[derive(Clone, Debug, Default)]
pub struct NullUtxoView {
    outputs: HashMap<OutPoint, Output>,
}

impl NullUtxoView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an output at `outpoint`.
    pub fn with_output(mut self, outpoint: OutPoint, output: Output) -> Self {
        self.outputs.insert(outpoint, output);
        self
    }

    /// Add an output of `value` system-asset raw units owned by `owner`.
    pub fn with_owned(
        self,
        outpoint: OutPoint,
        asset_id: AssetId,
        value: i64,
        owner: ProgramHash,
    ) -> Self {
        self.with_output(outpoint, Output::new(asset_id, Fixed64::new(value), owner))
    }
}

impl UtxoView for NullUtxoView {
    fn referenced_output(&self, outpoint: &OutPoint) -> Option<Output> {
        self.outputs.get(outpoint).cloned()
    }
}
