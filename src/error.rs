use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("cannot read wallet keypair at {path}: {message}")]
    WalletKeypair { path: String, message: String },
    #[error("cannot load or persist counter account keypair at {path}: {message}")]
    RecordKeypair { path: String, message: String },
    #[error("counter account {address} does not exist")]
    AccountNotFound { address: Pubkey },
    #[error("counter account data is malformed: {reason}")]
    MalformedAccount { reason: String },
    #[error("invalid step token {token:?}")]
    InvalidStep { token: String },
    #[error("rpc request failed: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),
}
