//! Shared utilities for the side-chain mempool.

pub mod logging;

pub use logging::{init_logging, init_test_logging, LogFormat};
