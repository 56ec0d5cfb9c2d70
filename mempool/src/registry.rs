//! The validation registry.
//!
//! Holds two ordered lists of named check functions. Sanity functions run
//! first; context functions run only once every sanity function has passed.
//! Both phases stop at the first failure.

use std::fmt;
use std::sync::Arc;

use sidechain_transactions::Transaction;
use thiserror::Error;
use tracing::{debug, trace};

use crate::error::ValidationError;

/// A registered check.
pub type CheckFn = Arc<dyn Fn(&Transaction) -> Result<(), ValidationError> + Send + Sync>;

/// Names under which the side-chain checks are registered.
pub mod func_names {
    pub const CHECK_TRANSACTION_SIZE: &str = "check_transaction_size";
    pub const CHECK_TRANSACTION_INPUT: &str = "check_transaction_input";
    pub const CHECK_TRANSACTION_OUTPUT: &str = "check_transaction_output";
    pub const CHECK_TRANSACTION_PAYLOAD: &str = "check_transaction_payload";
    pub const CHECK_TRANSACTION_SIGNATURE: &str = "check_transaction_signature";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Sanity,
    Context,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Sanity => write!(f, "sanity"),
            Phase::Context => write!(f, "context"),
        }
    }
}

/// The first failing check and why it failed.
#[derive(Debug, Error)]
#[error("{phase} check {check} failed: {error}")]
pub struct CheckFailure {
    pub phase: Phase,
    pub check: &'static str,
    #[source]
    pub error: ValidationError,
}

#[derive(Clone)]
struct NamedCheck {
    name: &'static str,
    check: CheckFn,
}

/// Ordered sanity and context check functions.
///
/// Immutable once wired; share it behind an `Arc` to validate from many
/// threads at once.
#[derive(Clone, Default)]
pub struct Validator {
    sanity: Vec<NamedCheck>,
    context: Vec<NamedCheck>,
}

impl Validator {
    /// An empty registry. See [`crate::new_validator`] for the side-chain rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sanity function. Re-using a name replaces that function in place.
    pub fn register_sanity_func<F>(&mut self, name: &'static str, check: F)
    where
        F: Fn(&Transaction) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        upsert(&mut self.sanity, name, Arc::new(check));
    }

    /// Register a context function. Re-using a name replaces that function in place.
    pub fn register_context_func<F>(&mut self, name: &'static str, check: F)
    where
        F: Fn(&Transaction) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        upsert(&mut self.context, name, Arc::new(check));
    }

    /// Remove a sanity function. Returns whether it was registered.
    pub fn unregister_sanity_func(&mut self, name: &str) -> bool {
        remove(&mut self.sanity, name)
    }

    /// Remove a context function. Returns whether it was registered.
    pub fn unregister_context_func(&mut self, name: &str) -> bool {
        remove(&mut self.context, name)
    }

    pub fn sanity_names(&self) -> Vec<&'static str> {
        self.sanity.iter().map(|c| c.name).collect()
    }

    pub fn context_names(&self) -> Vec<&'static str> {
        self.context.iter().map(|c| c.name).collect()
    }

    /// Run every sanity function in registration order.
    pub fn check_sanity(&self, tx: &Transaction) -> Result<(), CheckFailure> {
        run_phase(Phase::Sanity, &self.sanity, tx)
    }

    /// Run every context function in registration order.
    pub fn check_context(&self, tx: &Transaction) -> Result<(), CheckFailure> {
        run_phase(Phase::Context, &self.context, tx)
    }

    /// Full admission check: sanity, then context.
    pub fn validate(&self, tx: &Transaction) -> Result<(), CheckFailure> {
        self.check_sanity(tx)?;
        self.check_context(tx)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("sanity", &self.sanity_names())
            .field("context", &self.context_names())
            .finish()
    }
}

fn upsert(list: &mut Vec<NamedCheck>, name: &'static str, check: CheckFn) {
    match list.iter_mut().find(|c| c.name == name) {
        Some(existing) => existing.check = check,
        None => list.push(NamedCheck { name, check }),
    }
}

fn remove(list: &mut Vec<NamedCheck>, name: &str) -> bool {
    let before = list.len();
    list.retain(|c| c.name != name);
    list.len() != before
}

fn run_phase(phase: Phase, checks: &[NamedCheck], tx: &Transaction) -> Result<(), CheckFailure> {
    for entry in checks {
        let name = entry.name;
        if let Err(error) = (entry.check)(tx) {
            debug!(
                tx = %tx.hash(),
                %phase,
                check = name,
                kind = ?error.kind(),
                %error,
                "transaction rejected"
            );
            return Err(CheckFailure {
                phase,
                check: name,
                error,
            });
        }
        trace!(%phase, check = name, "check passed");
    }
    Ok(())
}
