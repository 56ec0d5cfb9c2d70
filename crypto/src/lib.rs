//! Cryptographic primitives for the side-chain mempool.
//!
//! - **Ed25519** for signing and signature verification
//! - **Blake2b** for transaction hashes (256-bit) and program-code digests (160-bit)
//! - Standard and multi-signature program code, and its mapping to program hashes

pub mod hash;
pub mod keys;
pub mod program;
pub mod sign;

pub use hash::{blake2b_160, blake2b_256};
pub use keys::keypair_from_seed;
pub use program::{
    create_multisig_code, create_standard_code, parse_code, to_program_hash, CodeError, CodeKind,
    OP_CHECKMULTISIG, OP_CHECKSIG,
};
pub use sign::{sign_message, verify_signature};
