//! Authorisation: signature programs, or the SPV proof for main-chain deposits.

use sidechain_transactions::Transaction;
use tracing::debug;

use crate::config::ValidationConfig;
use crate::error::ValidationError;
use crate::host::{sort_program_hashes, sort_programs};

/// Check that a transaction is authorised.
///
/// A recharge-to-sidechain transaction is judged solely by the SPV verifier.
/// Anything else must supply one program per required program hash; both
/// sides are put in canonical order and paired positionally, so the order
/// programs were submitted in never affects the outcome.
pub fn check_transaction_signature(
    tx: &Transaction,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    if tx.is_recharge_to_side_chain() {
        return config
            .spv
            .verify_transaction(tx)
            .map_err(ValidationError::InvalidRechargeProof);
    }

    let mut hashes = config
        .program_hashes
        .program_hashes(tx)
        .map_err(ValidationError::ProgramHashDerivationFailed)?;

    sort_program_hashes(&mut hashes);
    let programs = sort_programs(&tx.programs).map_err(ValidationError::ProgramSortFailed)?;
    debug!(
        required = hashes.len(),
        supplied = programs.len(),
        "running signature programs"
    );

    config
        .program_runner
        .run_programs(tx, &hashes, &programs)
        .map_err(ValidationError::ProgramExecutionFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{HashDerivationError, ProgramError, SpvError};
    use crate::host::{ProgramHashSource, ProgramRunner, SpvVerifier};
    use sidechain_crypto::{create_standard_code, keypair_from_seed, sign_message, to_program_hash};
    use sidechain_transactions::{Payload, Program, TxType};
    use sidechain_types::{ChainParams, ProgramHash};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    struct FixedSpv {
        accept: bool,
        calls: AtomicUsize,
    }

    impl SpvVerifier for FixedSpv {
        fn verify_transaction(&self, _tx: &Transaction) -> Result<(), SpvError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.accept {
                Ok(())
            } else {
                Err(SpvError::Rejected("merkle root mismatch".into()))
            }
        }
    }

    struct FixedHashes(Result<Vec<ProgramHash>, String>);

    impl ProgramHashSource for FixedHashes {
        fn program_hashes(
            &self,
            _tx: &Transaction,
        ) -> Result<Vec<ProgramHash>, HashDerivationError> {
            self.0.clone().map_err(HashDerivationError::Other)
        }
    }

    /// Records what it was asked to run.
    #[derive(Default)]
    struct RecordingRunner {
        seen: Mutex<Vec<(Vec<ProgramHash>, Vec<Program>)>>,
    }

    impl ProgramRunner for RecordingRunner {
        fn run_programs(
            &self,
            _tx: &Transaction,
            hashes: &[ProgramHash],
            programs: &[&Program],
        ) -> Result<(), ProgramError> {
            self.seen.lock().unwrap().push((
                hashes.to_vec(),
                programs.iter().map(|p| (*p).clone()).collect(),
            ));
            Ok(())
        }
    }

    fn config(spv: Arc<FixedSpv>, hashes: FixedHashes) -> ValidationConfig {
        ValidationConfig::new(ChainParams::default(), spv, Arc::new(hashes))
    }

    fn spv(accept: bool) -> Arc<FixedSpv> {
        Arc::new(FixedSpv {
            accept,
            calls: AtomicUsize::new(0),
        })
    }

    fn recharge() -> Transaction {
        Transaction::new(
            TxType::RechargeToSideChain,
            Payload::RechargeToSideChain(Default::default()),
        )
    }

    #[test]
    fn recharge_accepted_by_proof_alone() {
        let spv = spv(true);
        // hash derivation would fail if it were consulted
        let cfg = config(spv.clone(), FixedHashes(Err("unreachable".into())));
        assert!(check_transaction_signature(&recharge(), &cfg).is_ok());
        assert_eq!(spv.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn recharge_rejected_by_proof() {
        let cfg = config(spv(false), FixedHashes(Ok(vec![])));
        let err = check_transaction_signature(&recharge(), &cfg).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidRechargeProof(_)));
    }

    #[test]
    fn derivation_failure_reported() {
        let tx = Transaction::new(TxType::TransferAsset, Payload::TransferAsset);
        let cfg = config(spv(true), FixedHashes(Err("utxo store offline".into())));
        let err = check_transaction_signature(&tx, &cfg).unwrap_err();
        assert!(matches!(err, ValidationError::ProgramHashDerivationFailed(_)));
    }

    #[test]
    fn malformed_program_fails_sort() {
        let mut tx = Transaction::new(TxType::TransferAsset, Payload::TransferAsset);
        tx.programs.push(Program::new(vec![0x01], vec![]));
        let cfg = config(spv(true), FixedHashes(Ok(vec![])));
        let err = check_transaction_signature(&tx, &cfg).unwrap_err();
        assert!(matches!(err, ValidationError::ProgramSortFailed(_)));
    }

    #[test]
    fn runner_receives_both_sides_sorted() {
        let mut tx = Transaction::new(TxType::TransferAsset, Payload::TransferAsset);
        let keys: Vec<_> = (1..=3u8).map(|s| keypair_from_seed(&[s; 32])).collect();
        let mut hashes: Vec<ProgramHash> = keys
            .iter()
            .map(|k| to_program_hash(&create_standard_code(&k.public)).unwrap())
            .collect();
        for k in &keys {
            let sig = sign_message(&tx.signing_bytes(), &k.private);
            tx.programs
                .push(Program::new(create_standard_code(&k.public), sig.0.to_vec()));
        }
        hashes.reverse();

        let runner = Arc::new(RecordingRunner::default());
        let cfg = config(spv(true), FixedHashes(Ok(hashes.clone())))
            .with_program_runner(runner.clone());
        check_transaction_signature(&tx, &cfg).unwrap();

        let seen = runner.seen.lock().unwrap();
        let (run_hashes, run_programs) = &seen[0];
        assert!(run_hashes.windows(2).all(|w| w[0] <= w[1]));
        let program_hashes: Vec<ProgramHash> = run_programs
            .iter()
            .map(|p| p.program_hash().unwrap())
            .collect();
        assert_eq!(&program_hashes, run_hashes);
    }

    #[test]
    fn execution_failure_reported() {
        let tx = Transaction::new(TxType::TransferAsset, Payload::TransferAsset);
        let required = to_program_hash(&create_standard_code(
            &keypair_from_seed(&[1u8; 32]).public,
        ))
        .unwrap();
        let cfg = config(spv(true), FixedHashes(Ok(vec![required])));
        let err = check_transaction_signature(&tx, &cfg).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::ProgramExecutionFailed(ProgramError::CountMismatch { .. })
        ));
    }
}
