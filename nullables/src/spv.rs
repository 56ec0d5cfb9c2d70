//! Nullable SPV service — scripted proof outcomes.

use sidechain_mempool::{SpvError, SpvVerifier};
use sidechain_transactions::Transaction;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Debug)]
enum Outcome {
    Accept,
    Reject(String),
    Unavailable(String),
}

/// A deterministic SPV proof verifier for testing.
///
/// Returns the same configured outcome for every transaction and counts how
/// often it was consulted.
#[derive(Debug)]
pub struct NullSpvService {
    outcome: Outcome,
    calls: AtomicUsize,
}

impl NullSpvService {
    fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    /// Every proof verifies.
    pub fn accepting() -> Self {
        Self::with_outcome(Outcome::Accept)
    }

    /// Every proof is rejected with `reason`.
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self::with_outcome(Outcome::Reject(reason.into()))
    }

    /// The service cannot be reached.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::with_outcome(Outcome::Unavailable(reason.into()))
    }

    /// Number of transactions submitted for verification so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SpvVerifier for NullSpvService {
    fn verify_transaction(&self, _tx: &Transaction) -> Result<(), SpvError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Outcome::Accept => Ok(()),
            Outcome::Reject(reason) => Err(SpvError::Rejected(reason.clone())),
            Outcome::Unavailable(reason) => Err(SpvError::Unavailable(reason.clone())),
        }
    }
}
