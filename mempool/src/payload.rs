//! Payload shape rules.

use sidechain_transactions::{Payload, Transaction};
use sidechain_types::ChainParams;

use crate::error::ValidationError;
use crate::precision::check_amount_precise;

/// Apply the per-payload structural rules.
///
/// Only `RegisterAsset` carries constraints at this layer; the other accepted
/// kinds are checked by their own collaborators. Payload kinds without an
/// explicit arm are rejected.
pub fn check_transaction_payload(
    tx: &Transaction,
    params: &ChainParams,
) -> Result<(), ValidationError> {
    match &tx.payload {
        Payload::RegisterAsset(pld) => {
            let precision = pld.asset.precision;
            if precision < params.min_precision || precision > params.max_precision {
                return Err(ValidationError::InvalidPrecision {
                    precision,
                    min: params.min_precision,
                    max: params.max_precision,
                });
            }
            if !check_amount_precise(pld.amount, precision, params.max_precision) {
                return Err(ValidationError::PrecisionMismatch {
                    amount: pld.amount,
                    precision,
                });
            }
        }
        Payload::TransferAsset
        | Payload::Record(_)
        | Payload::CoinBase(_)
        | Payload::RechargeToSideChain(_)
        | Payload::TransferCrossChainAsset(_)
        | Payload::Deploy(_)
        | Payload::Invoke(_) => {}
        unsupported @ (Payload::SideChainPow(_)
        | Payload::WithdrawFromSideChain(_)
        | Payload::Other { .. }) => {
            return Err(ValidationError::UnsupportedPayloadType(unsupported.name()));
        }
    }
    Ok(())
}
