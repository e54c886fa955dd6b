use std::path::Path;

use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::signer::keypair::{read_keypair_file, write_keypair_file};
use tracing::info;

use crate::error::ClientError;

/// Loads the wallet keypair. The wallet file is a read-only input; a missing
/// or malformed file is fatal before any network interaction happens.
pub fn load_wallet(path: &Path) -> Result<Keypair, ClientError> {
    read_keypair_file(path).map_err(|err| ClientError::WalletKeypair {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}

/// Loads the persisted counter account keypair, or generates a fresh one and
/// writes it to `path` before returning it. The record is written at most
/// once; once it exists it is reused verbatim on every run.
pub fn load_or_create(path: &Path) -> Result<Keypair, ClientError> {
    if path.exists() {
        return read_keypair_file(path).map_err(|err| ClientError::RecordKeypair {
            path: path.display().to_string(),
            message: err.to_string(),
        });
    }

    let keypair = Keypair::new();
    write_keypair_file(&keypair, path).map_err(|err| ClientError::RecordKeypair {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;
    info!(path = %path.display(), pubkey = %keypair.pubkey(), "Generated counter account keypair");
    Ok(keypair)
}
