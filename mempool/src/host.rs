//! Collaborators the validator consumes from its host.
//!
//! The host mempool supplies chain state ([`UtxoView`]) and the cross-chain
//! proof service ([`SpvVerifier`]). Program-hash derivation and program
//! execution are behind [`ProgramHashSource`] and [`ProgramRunner`]; default
//! implementations for standard and multi-signature programs live here.
//!
//! All collaborators must be safe to share between worker threads validating
//! different transactions.

use std::collections::HashSet;

use sidechain_crypto::{parse_code, verify_signature, CodeKind};
use sidechain_transactions::{AttributeUsage, OutPoint, Output, Payload, Program, Transaction};
use sidechain_types::{ProgramHash, PublicKey, Signature};
use tracing::trace;

use crate::error::{HashDerivationError, ProgramError, SpvError};

/// Verifies the main-chain proof attached to a recharge transaction.
///
/// May block on I/O. No timeout is applied here; callers impose their own.
pub trait SpvVerifier: Send + Sync {
    fn verify_transaction(&self, tx: &Transaction) -> Result<(), SpvError>;
}

/// Read access to unspent outputs.
pub trait UtxoView: Send + Sync {
    fn referenced_output(&self, outpoint: &OutPoint) -> Option<Output>;
}

/// Works out which program hashes must sign a transaction.
pub trait ProgramHashSource: Send + Sync {
    fn program_hashes(&self, tx: &Transaction) -> Result<Vec<ProgramHash>, HashDerivationError>;
}

/// Executes programs against their paired hashes.
///
/// `hashes` and `programs` arrive already in canonical order.
pub trait ProgramRunner: Send + Sync {
    fn run_programs(
        &self,
        tx: &Transaction,
        hashes: &[ProgramHash],
        programs: &[&Program],
    ) -> Result<(), ProgramError>;
}

/// Sort program hashes into canonical (byte-lexicographic) order.
pub fn sort_program_hashes(hashes: &mut [ProgramHash]) {
    hashes.sort_unstable();
}

/// Order programs by the hash of their code, matching [`sort_program_hashes`].
pub fn sort_programs(programs: &[Program]) -> Result<Vec<&Program>, ProgramError> {
    let mut keyed = programs
        .iter()
        .map(|p| -> Result<(ProgramHash, &Program), ProgramError> {
            Ok((p.program_hash()?, p))
        })
        .collect::<Result<Vec<_>, _>>()?;
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(keyed.into_iter().map(|(_, p)| p).collect())
}

/// Derives required program hashes from the UTXO set.
///
/// Signers are the owners of every spent output, the controller of a newly
/// registered asset, the caller of a contract invocation and any hash named
/// in a `Script` attribute. Each signer appears once. A coinbase needs none.
pub struct UtxoProgramHashes<V> {
    utxos: V,
}

impl<V: UtxoView> UtxoProgramHashes<V> {
    pub fn new(utxos: V) -> Self {
        Self { utxos }
    }
}

impl<V: UtxoView> ProgramHashSource for UtxoProgramHashes<V> {
    fn program_hashes(&self, tx: &Transaction) -> Result<Vec<ProgramHash>, HashDerivationError> {
        if tx.is_coinbase() {
            return Ok(Vec::new());
        }

        let mut hashes = Vec::new();
        let mut seen = HashSet::new();
        let mut push = |hash: ProgramHash| {
            if seen.insert(hash) {
                hashes.push(hash);
            }
        };

        for input in &tx.inputs {
            let output = self.utxos.referenced_output(&input.previous).ok_or(
                HashDerivationError::MissingReference {
                    tx_id: input.previous.tx_id,
                    index: input.previous.index,
                },
            )?;
            push(output.program_hash);
        }

        match &tx.payload {
            Payload::RegisterAsset(pld) => push(pld.controller),
            Payload::Invoke(pld) if !pld.program_hash.is_empty() => push(pld.program_hash),
            _ => {}
        }

        for (index, attr) in tx.attributes.iter().enumerate() {
            if attr.usage != AttributeUsage::Script {
                continue;
            }
            let bytes: [u8; 21] = attr.data.as_slice().try_into().map_err(|_| {
                HashDerivationError::MalformedScriptAttribute {
                    index,
                    len: attr.data.len(),
                }
            })?;
            push(ProgramHash::new(bytes));
        }

        Ok(hashes)
    }
}

/// Runs standard (single-key) and multisig programs with Ed25519 over the
/// transaction's signing bytes.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardProgramRunner;

impl ProgramRunner for StandardProgramRunner {
    fn run_programs(
        &self,
        tx: &Transaction,
        hashes: &[ProgramHash],
        programs: &[&Program],
    ) -> Result<(), ProgramError> {
        if hashes.len() != programs.len() {
            return Err(ProgramError::CountMismatch {
                hashes: hashes.len(),
                programs: programs.len(),
            });
        }

        let message = tx.signing_bytes();
        for (index, (expected, program)) in hashes.iter().zip(programs).enumerate() {
            let actual = program.program_hash()?;
            if actual != *expected {
                return Err(ProgramError::HashMismatch {
                    index,
                    expected: *expected,
                    actual,
                });
            }

            match parse_code(&program.code)? {
                CodeKind::Standard(key) => {
                    let sig = Signature::from_slice(&program.parameter).ok_or_else(|| {
                        ProgramError::InvalidParameter {
                            index,
                            reason: format!(
                                "expected one {}-byte signature, got {} bytes",
                                Signature::LEN,
                                program.parameter.len()
                            ),
                        }
                    })?;
                    if !verify_signature(&message, &sig, &key) {
                        return Err(ProgramError::InvalidSignature { index });
                    }
                }
                CodeKind::Multisig { m, keys } => {
                    check_multisig(index, &message, &program.parameter, m, &keys)?;
                }
            }
            trace!(index, program_hash = %expected, "program verified");
        }
        Ok(())
    }
}

/// Signatures must appear in key order; each one consumes the keys up to and
/// including the one it verifies against.
fn check_multisig(
    index: usize,
    message: &[u8],
    parameter: &[u8],
    m: usize,
    keys: &[PublicKey],
) -> Result<(), ProgramError> {
    if parameter.len() % Signature::LEN != 0 {
        return Err(ProgramError::InvalidParameter {
            index,
            reason: format!(
                "{} bytes is not a whole number of signatures",
                parameter.len()
            ),
        });
    }
    let sigs: Vec<Signature> = parameter
        .chunks_exact(Signature::LEN)
        .filter_map(Signature::from_slice)
        .collect();
    if sigs.len() < m || sigs.len() > keys.len() {
        return Err(ProgramError::NotEnoughSignatures {
            index,
            needed: m,
            valid: sigs.len().min(keys.len()),
        });
    }

    let mut remaining = keys.iter();
    for sig in &sigs {
        if !remaining.any(|key| verify_signature(message, sig, key)) {
            return Err(ProgramError::InvalidSignature { index });
        }
    }
    Ok(())
}
