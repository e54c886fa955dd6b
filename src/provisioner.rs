use std::path::Path;

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use tracing::info;

use crate::client::CounterProgram;
use crate::error::ClientError;
use crate::keystore;

/// Obtains the counter account keypair from the persisted record (creating
/// the record on first run) and makes sure the remote account exists.
/// Returns the account address the sequencer operates on.
pub async fn provision<P: CounterProgram>(
    program: &P,
    record_path: &Path,
) -> Result<Pubkey, ClientError> {
    let counter = keystore::load_or_create(record_path)?;
    ensure_initialized(program, &counter).await
}

/// Initializes the counter account if and only if it does not exist yet.
/// Only a definite `AccountNotFound` triggers initialization; a transport
/// failure during the existence check propagates without issuing any call,
/// so a flaky connection can never cause a spurious re-initialize attempt.
pub async fn ensure_initialized<P: CounterProgram>(
    program: &P,
    counter: &Keypair,
) -> Result<Pubkey, ClientError> {
    let address = counter.pubkey();
    match program.fetch_count(&address).await {
        Ok(count) => {
            info!(%address, count, "Counter account already initialized");
        }
        Err(ClientError::AccountNotFound { .. }) => {
            info!(%address, "Counter account not found, initializing");
            program.initialize(counter).await?;
        }
        Err(err) => return Err(err),
    }
    Ok(address)
}
