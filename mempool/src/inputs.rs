//! Base structural rules: transaction size and input shape.

use std::collections::HashSet;

use sidechain_transactions::Transaction;

use crate::error::ValidationError;

/// Reject transactions whose serialized form exceeds `max_size` bytes.
pub fn check_transaction_size(tx: &Transaction, max_size: usize) -> Result<(), ValidationError> {
    let size = tx.serialized_size();
    if size > max_size {
        return Err(ValidationError::TransactionTooLarge {
            size,
            max: max_size,
        });
    }
    Ok(())
}

/// Input rules.
///
/// A coinbase carries exactly one input spending the null outpoint. A
/// main-chain deposit carries none, since it is authorised by its proof and
/// not by signatures. Everything else spends at least one output, and no
/// output may be spent twice.
pub fn check_transaction_inputs(tx: &Transaction) -> Result<(), ValidationError> {
    if tx.is_coinbase() {
        if tx.inputs.len() != 1 {
            return Err(ValidationError::InvalidCoinbaseInputs(format!(
                "expected exactly 1 input, found {}",
                tx.inputs.len()
            )));
        }
        if !tx.inputs[0].previous.is_null() {
            return Err(ValidationError::InvalidCoinbaseInputs(
                "input must reference the null outpoint".into(),
            ));
        }
        return Ok(());
    }

    if tx.is_recharge_to_side_chain() {
        if !tx.inputs.is_empty() {
            return Err(ValidationError::InvalidRechargeInputs {
                count: tx.inputs.len(),
            });
        }
        return Ok(());
    }

    if tx.inputs.is_empty() {
        return Err(ValidationError::NoInputs);
    }

    let mut seen = HashSet::with_capacity(tx.inputs.len());
    for (index, input) in tx.inputs.iter().enumerate() {
        if !seen.insert(input.previous) {
            return Err(ValidationError::DuplicateInput {
                index,
                tx_id: input.previous.tx_id,
                output_index: input.previous.index,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sidechain_transactions::{Input, OutPoint, Payload, Program, TxType};
    use sidechain_types::TxId;

    fn spend(id: u8, index: u16) -> Input {
        Input::new(OutPoint::new(TxId::new([id; 32]), index))
    }

    #[test]
    fn coinbase_needs_single_null_input() {
        let mut tx = Transaction::new(TxType::CoinBase, Payload::CoinBase(Default::default()));
        assert!(matches!(
            check_transaction_inputs(&tx),
            Err(ValidationError::InvalidCoinbaseInputs(_))
        ));

        tx.inputs.push(Input::new(OutPoint::NULL));
        assert!(check_transaction_inputs(&tx).is_ok());

        tx.inputs[0] = spend(1, 0);
        assert!(matches!(
            check_transaction_inputs(&tx),
            Err(ValidationError::InvalidCoinbaseInputs(_))
        ));
    }

    #[test]
    fn transfer_without_inputs_rejected() {
        let tx = Transaction::new(TxType::TransferAsset, Payload::TransferAsset);
        assert!(matches!(
            check_transaction_inputs(&tx),
            Err(ValidationError::NoInputs)
        ));
    }

    #[test]
    fn recharge_without_inputs_accepted() {
        let tx = Transaction::new(
            TxType::RechargeToSideChain,
            Payload::RechargeToSideChain(Default::default()),
        );
        assert!(check_transaction_inputs(&tx).is_ok());
    }

    #[test]
    fn recharge_spending_outputs_rejected() {
        let mut tx = Transaction::new(
            TxType::RechargeToSideChain,
            Payload::RechargeToSideChain(Default::default()),
        );
        tx.inputs.push(spend(3, 0));
        assert!(matches!(
            check_transaction_inputs(&tx),
            Err(ValidationError::InvalidRechargeInputs { count: 1 })
        ));
    }

    #[test]
    fn duplicate_input_rejected() {
        let mut tx = Transaction::new(TxType::TransferAsset, Payload::TransferAsset);
        tx.inputs = vec![spend(1, 0), spend(1, 1), spend(1, 0)];
        let err = check_transaction_inputs(&tx).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::DuplicateInput {
                index: 2,
                output_index: 0,
                ..
            }
        ));
    }

    #[test]
    fn oversized_transaction_rejected() {
        let mut tx = Transaction::new(TxType::TransferAsset, Payload::TransferAsset);
        tx.inputs.push(spend(1, 0));
        let size = tx.serialized_size();
        assert!(check_transaction_size(&tx, size).is_ok());

        tx.programs.push(Program::new(vec![0u8; 64], vec![0u8; 64]));
        let err = check_transaction_size(&tx, size).unwrap_err();
        assert!(matches!(err, ValidationError::TransactionTooLarge { max, .. } if max == size));
    }
}
