//! Transaction payloads, one variant per transaction type.

use serde::{Deserialize, Serialize};
use sidechain_types::{Fixed64, ProgramHash, TxId};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Payload {
    CoinBase(CoinBasePayload),
    RegisterAsset(RegisterAssetPayload),
    TransferAsset,
    Record(RecordPayload),
    SideChainPow(SideChainPowPayload),
    RechargeToSideChain(RechargeToSideChainPayload),
    WithdrawFromSideChain(WithdrawFromSideChainPayload),
    TransferCrossChainAsset(TransferCrossChainAssetPayload),
    Deploy(DeployPayload),
    Invoke(InvokePayload),
    /// A payload kind decoded by the host but not modelled here.
    Other { kind: u8, data: Vec<u8> },
}

impl Payload {
    /// Short name used in logs and errors.
    pub fn name(&self) -> String {
        match self {
            Self::CoinBase(_) => "CoinBase".into(),
            Self::RegisterAsset(_) => "RegisterAsset".into(),
            Self::TransferAsset => "TransferAsset".into(),
            Self::Record(_) => "Record".into(),
            Self::SideChainPow(_) => "SideChainPow".into(),
            Self::RechargeToSideChain(_) => "RechargeToSideChain".into(),
            Self::WithdrawFromSideChain(_) => "WithdrawFromSideChain".into(),
            Self::TransferCrossChainAsset(_) => "TransferCrossChainAsset".into(),
            Self::Deploy(_) => "Deploy".into(),
            Self::Invoke(_) => "Invoke".into(),
            Self::Other { kind, .. } => format!("Other({kind:#04x})"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinBasePayload {
    pub data: Vec<u8>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetType {
    #[default]
    Token,
    Share,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetRecordType {
    #[default]
    Unspent,
    Balance,
}

/// An asset definition.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    pub description: String,
    /// Number of fractional decimal digits.
    pub precision: u8,
    pub asset_type: AssetType,
    pub record_type: AssetRecordType,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterAssetPayload {
    pub asset: Asset,
    pub amount: Fixed64,
    /// Holder allowed to manage the asset; also a required signer.
    pub controller: ProgramHash,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPayload {
    pub record_type: String,
    pub data: Vec<u8>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideChainPowPayload {
    pub side_block_hash: TxId,
    pub side_genesis_hash: TxId,
    pub block_height: u32,
    pub signed_data: Vec<u8>,
}

/// Deposit from the main chain, proven by an SPV merkle proof.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RechargeToSideChainPayload {
    pub merkle_proof: Vec<u8>,
    pub main_chain_transaction: Vec<u8>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawFromSideChainPayload {
    pub block_height: u32,
    pub genesis_block_address: String,
    pub side_chain_transaction_hashes: Vec<TxId>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferCrossChainAssetPayload {
    pub cross_chain_addresses: Vec<String>,
    pub output_indexes: Vec<u64>,
    pub cross_chain_amounts: Vec<Fixed64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployPayload {
    pub code: Vec<u8>,
    pub name: String,
    pub code_version: String,
    pub author: String,
    pub email: String,
    pub description: String,
    pub program_hash: ProgramHash,
    pub gas: Fixed64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokePayload {
    pub code_hash: ProgramHash,
    pub code: Vec<u8>,
    pub program_hash: ProgramHash,
    pub gas: Fixed64,
}
