//! Wiring of the side-chain rules into a [`Validator`].

use std::sync::Arc;

use tracing::info;

use crate::config::ValidationConfig;
use crate::inputs::{check_transaction_inputs, check_transaction_size};
use crate::outputs::check_transaction_outputs;
use crate::payload::check_transaction_payload;
use crate::registry::{func_names, Validator};
use crate::signature::check_transaction_signature;

/// Build a validator enforcing the side-chain admission rules.
///
/// Sanity: size, inputs, outputs, payload. Context: signatures.
pub fn new_validator(config: Arc<ValidationConfig>) -> Validator {
    let mut validator = Validator::new();

    let max_tx_size = config.params.max_tx_size;
    validator.register_sanity_func(func_names::CHECK_TRANSACTION_SIZE, move |tx| {
        check_transaction_size(tx, max_tx_size)
    });
    validator.register_sanity_func(func_names::CHECK_TRANSACTION_INPUT, check_transaction_inputs);

    let cfg = Arc::clone(&config);
    validator.register_sanity_func(func_names::CHECK_TRANSACTION_OUTPUT, move |tx| {
        check_transaction_outputs(tx, &cfg.params, cfg.reward_rule)
    });

    let cfg = Arc::clone(&config);
    validator.register_sanity_func(func_names::CHECK_TRANSACTION_PAYLOAD, move |tx| {
        check_transaction_payload(tx, &cfg.params)
    });

    let cfg = Arc::clone(&config);
    validator.register_context_func(func_names::CHECK_TRANSACTION_SIGNATURE, move |tx| {
        check_transaction_signature(tx, &cfg)
    });

    info!(
        system_asset = %config.params.system_asset_id,
        foundation = %config.params.foundation,
        reward_rule = ?config.reward_rule,
        "side-chain transaction validator ready"
    );
    validator
}
