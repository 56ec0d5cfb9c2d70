//! Output-set rules.
//!
//! A coinbase must pay the system asset to at least two outputs, and at least
//! 30% of the reward must go to the foundation. An ordinary transaction must
//! pay the system asset to recognised destinations.

use sidechain_transactions::Transaction;
use sidechain_types::ChainParams;

use crate::config::RewardRule;
use crate::destination::is_recognized_destination;
use crate::error::ValidationError;

/// Minimum number of outputs in a coinbase (miner plus foundation).
pub const MIN_COINBASE_OUTPUTS: usize = 2;

pub fn check_transaction_outputs(
    tx: &Transaction,
    params: &ChainParams,
    rule: RewardRule,
) -> Result<(), ValidationError> {
    if tx.is_coinbase() {
        return check_coinbase_outputs(tx, params, rule);
    }

    if tx.outputs.is_empty() {
        return Err(ValidationError::NoOutputs);
    }

    for (index, output) in tx.outputs.iter().enumerate() {
        if output.asset_id != params.system_asset_id {
            return Err(ValidationError::InvalidAssetId {
                index,
                asset_id: output.asset_id,
            });
        }
        if output.value.is_negative() {
            return Err(ValidationError::InvalidOutputValue {
                index,
                value: output.value,
            });
        }
        if !is_recognized_destination(&output.program_hash) {
            return Err(ValidationError::InvalidDestination {
                index,
                program_hash: output.program_hash,
            });
        }
    }

    Ok(())
}

fn check_coinbase_outputs(
    tx: &Transaction,
    params: &ChainParams,
    rule: RewardRule,
) -> Result<(), ValidationError> {
    if tx.outputs.len() < MIN_COINBASE_OUTPUTS {
        return Err(ValidationError::InsufficientOutputs {
            count: tx.outputs.len(),
        });
    }

    let mut total: i128 = 0;
    let mut foundation: i128 = 0;
    for (index, output) in tx.outputs.iter().enumerate() {
        if output.asset_id != params.system_asset_id {
            return Err(ValidationError::InvalidAssetId {
                index,
                asset_id: output.asset_id,
            });
        }
        if output.value.is_negative() {
            return Err(ValidationError::InvalidOutputValue {
                index,
                value: output.value,
            });
        }
        let value = i128::from(output.value.int_value());
        total += value;
        if output.program_hash == params.foundation {
            foundation += value;
        }
    }

    if !foundation_share_met(foundation, total, rule) {
        return Err(ValidationError::InsufficientFoundationReward { foundation, total });
    }
    Ok(())
}

fn foundation_share_met(foundation: i128, total: i128, rule: RewardRule) -> bool {
    match rule {
        RewardRule::Exact => foundation * 10 >= total * 3,
        RewardRule::LegacyFloat => foundation >= (total as f64 * 0.3) as i128,
    }
}
