//! Command-line client for an on-chain counter program on Solana devnet.
//!
//! Flow: load wallet -> provision the counter account (initialize it once,
//! reusing a persisted keypair across runs) -> issue the mutating call
//! sequence, reading the counter back after every call.
pub mod args;
pub mod client;
pub mod error;
pub mod instructions;
pub mod keystore;
pub mod provisioner;
pub mod sequencer;
pub mod state;
