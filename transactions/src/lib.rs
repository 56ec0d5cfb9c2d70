//! Side-chain transaction model.
//!
//! A transaction is an ordered list of inputs and outputs, one payload, a list
//! of attributes and the signature programs that authorise it. Transaction
//! types:
//! - **CoinBase**: block reward, no real inputs
//! - **RegisterAsset**: register a new asset with a declared precision
//! - **TransferAsset**: ordinary transfer
//! - **Record**: arbitrary data record
//! - **SideChainPow**: side-chain proof-of-work anchor
//! - **RechargeToSideChain**: deposit from the main chain, authorised by an SPV proof
//! - **WithdrawFromSideChain**: withdrawal back to the main chain
//! - **TransferCrossChainAsset**: transfer to another chain
//! - **Deploy** / **Invoke**: smart-contract deployment and invocation

pub mod attribute;
pub mod input;
pub mod output;
pub mod payload;
pub mod program;

pub use attribute::{Attribute, AttributeUsage};
pub use input::{Input, OutPoint};
pub use output::Output;
pub use payload::{
    Asset, AssetRecordType, AssetType, CoinBasePayload, DeployPayload, InvokePayload, Payload,
    RechargeToSideChainPayload, RecordPayload, RegisterAssetPayload, SideChainPowPayload,
    TransferCrossChainAssetPayload, WithdrawFromSideChainPayload,
};
pub use program::Program;

use serde::{Deserialize, Serialize};
use sidechain_crypto::blake2b_256;
use sidechain_types::TxId;

/// Transaction type tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TxType {
    CoinBase = 0x00,
    RegisterAsset = 0x01,
    TransferAsset = 0x02,
    Record = 0x03,
    SideChainPow = 0x05,
    RechargeToSideChain = 0x06,
    WithdrawFromSideChain = 0x07,
    TransferCrossChainAsset = 0x08,
    Deploy = 0xF0,
    Invoke = 0xF1,
}

impl TxType {
    pub fn as_byte(self) -> u8 {
        self as u8
    }
}

/// A side-chain transaction. Validators only ever read it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub tx_type: TxType,
    pub payload_version: u8,
    pub payload: Payload,
    pub attributes: Vec<Attribute>,
    pub inputs: Vec<Input>,
    pub outputs: Vec<Output>,
    pub lock_time: u32,
    /// One unlocking program per required signer.
    pub programs: Vec<Program>,
}

/// The signed portion of a transaction: everything except the programs.
#[derive(Serialize)]
struct Unsigned<'a> {
    tx_type: TxType,
    payload_version: u8,
    payload: &'a Payload,
    attributes: &'a [Attribute],
    inputs: &'a [Input],
    outputs: &'a [Output],
    lock_time: u32,
}

impl Transaction {
    /// An empty transaction of the given type carrying `payload`.
    pub fn new(tx_type: TxType, payload: Payload) -> Self {
        Self {
            tx_type,
            payload_version: 0,
            payload,
            attributes: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            lock_time: 0,
            programs: Vec::new(),
        }
    }

    pub fn is_coinbase(&self) -> bool {
        self.tx_type == TxType::CoinBase
    }

    pub fn is_recharge_to_side_chain(&self) -> bool {
        self.tx_type == TxType::RechargeToSideChain
    }

    /// The bytes covered by signatures.
    pub fn signing_bytes(&self) -> Vec<u8> {
        let unsigned = Unsigned {
            tx_type: self.tx_type,
            payload_version: self.payload_version,
            payload: &self.payload,
            attributes: &self.attributes,
            inputs: &self.inputs,
            outputs: &self.outputs,
            lock_time: self.lock_time,
        };
        bincode::serialize(&unsigned).expect("in-memory transaction is always serializable")
    }

    /// Transaction id: Blake2b-256 of the signing bytes.
    pub fn hash(&self) -> TxId {
        TxId::new(blake2b_256(&self.signing_bytes()))
    }

    /// Size of the full serialized transaction, programs included.
    pub fn serialized_size(&self) -> usize {
        let programs: usize = self
            .programs
            .iter()
            .map(|p| p.code.len() + p.parameter.len() + 16)
            .sum();
        self.signing_bytes().len() + programs + 8
    }
}
