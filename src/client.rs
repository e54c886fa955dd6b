use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::transaction::Transaction;
use tracing::debug;

use crate::error::ClientError;
use crate::instructions;
use crate::sequencer::Operation;
use crate::state::CounterAccount;

/// The remote counter program as the provisioner and sequencer see it:
/// one state read plus the calls the program exposes. Every call is awaited
/// to completion before the caller proceeds.
#[async_trait]
pub trait CounterProgram {
    /// Reads the current counter value. Distinguishes a definitely absent
    /// account (`ClientError::AccountNotFound`) from transport failures.
    async fn fetch_count(&self, counter: &Pubkey) -> Result<u64, ClientError>;

    /// Creates the counter account, co-signed by its own keypair.
    async fn initialize(&self, counter: &Keypair) -> Result<(), ClientError>;

    /// Issues one mutating call against an existing counter account.
    async fn apply(&self, counter: &Pubkey, op: Operation) -> Result<(), ClientError>;
}

/// RPC-backed client context: connection and wallet, built once in `main`
/// and passed down by reference.
pub struct CounterClient {
    rpc: RpcClient,
    payer: Keypair,
}

impl CounterClient {
    pub fn new(cluster_url: &str, payer: Keypair) -> Self {
        let rpc = RpcClient::new_with_commitment(
            cluster_url.to_string(),
            CommitmentConfig::confirmed(),
        );
        CounterClient { rpc, payer }
    }

    pub fn payer_pubkey(&self) -> Pubkey {
        self.payer.pubkey()
    }

    async fn send(
        &self,
        instruction: Instruction,
        extra_signers: &[&Keypair],
    ) -> Result<Signature, ClientError> {
        let blockhash = self.rpc.get_latest_blockhash().await?;
        let mut signers: Vec<&Keypair> = vec![&self.payer];
        signers.extend_from_slice(extra_signers);
        let transaction = Transaction::new_signed_with_payer(
            &[instruction],
            Some(&self.payer.pubkey()),
            &signers,
            blockhash,
        );
        let signature = self.rpc.send_and_confirm_transaction(&transaction).await?;
        debug!(%signature, "Transaction confirmed");
        Ok(signature)
    }
}

#[async_trait]
impl CounterProgram for CounterClient {
    async fn fetch_count(&self, counter: &Pubkey) -> Result<u64, ClientError> {
        let response = self
            .rpc
            .get_account_with_commitment(counter, self.rpc.commitment())
            .await?;
        let account = response
            .value
            .ok_or(ClientError::AccountNotFound { address: *counter })?;
        let state = CounterAccount::try_from_data(&account.data)?;
        Ok(state.counter)
    }

    async fn initialize(&self, counter: &Keypair) -> Result<(), ClientError> {
        let instruction = instructions::initialize(&self.payer.pubkey(), &counter.pubkey());
        self.send(instruction, &[counter]).await?;
        Ok(())
    }

    async fn apply(&self, counter: &Pubkey, op: Operation) -> Result<(), ClientError> {
        let instruction = match op {
            Operation::Increment => instructions::increment(counter),
            Operation::Decrement => instructions::decrement(counter),
            Operation::Update(new_value) => instructions::update(counter, new_value),
            Operation::Reset => instructions::reset(counter),
        };
        self.send(instruction, &[]).await?;
        Ok(())
    }
}
