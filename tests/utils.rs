#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use counter_client::client::CounterProgram;
use counter_client::error::ClientError;
use counter_client::sequencer::Operation;
use solana_client::client_error::ClientErrorKind;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;

/// In-memory double of the counter program. `count` is `None` until an
/// initialize call lands, mirroring a not-yet-created remote account.
pub struct MockCounter {
    state: Mutex<MockState>,
}

struct MockState {
    count: Option<u64>,
    initialize_calls: usize,
    fail_fetch: bool,
    fail_after_ops: Option<usize>,
    ops_applied: usize,
}

impl MockCounter {
    pub fn uninitialized() -> Self {
        Self::with_count(None)
    }

    pub fn initialized_with(count: u64) -> Self {
        Self::with_count(Some(count))
    }

    fn with_count(count: Option<u64>) -> Self {
        MockCounter {
            state: Mutex::new(MockState {
                count,
                initialize_calls: 0,
                fail_fetch: false,
                fail_after_ops: None,
                ops_applied: 0,
            }),
        }
    }

    /// Makes every fetch fail like a dropped connection, without touching
    /// the account state.
    pub fn failing_fetch() -> Self {
        let mock = Self::uninitialized();
        mock.state.lock().unwrap().fail_fetch = true;
        mock
    }

    /// Lets `n` mutating calls through, then fails every later one.
    pub fn fail_after_ops(&self, n: usize) {
        self.state.lock().unwrap().fail_after_ops = Some(n);
    }

    pub fn count(&self) -> Option<u64> {
        self.state.lock().unwrap().count
    }

    pub fn initialize_calls(&self) -> usize {
        self.state.lock().unwrap().initialize_calls
    }

    pub fn ops_applied(&self) -> usize {
        self.state.lock().unwrap().ops_applied
    }
}

fn transport_error(message: &str) -> ClientError {
    ClientError::Rpc(ClientErrorKind::Custom(message.to_string()).into())
}

#[async_trait]
impl CounterProgram for MockCounter {
    async fn fetch_count(&self, counter: &Pubkey) -> Result<u64, ClientError> {
        let state = self.state.lock().unwrap();
        if state.fail_fetch {
            return Err(transport_error("connection reset"));
        }
        state.count.ok_or(ClientError::AccountNotFound { address: *counter })
    }

    async fn initialize(&self, _counter: &Keypair) -> Result<(), ClientError> {
        let mut state = self.state.lock().unwrap();
        state.initialize_calls += 1;
        if state.count.is_some() {
            return Err(transport_error("account already in use"));
        }
        state.count = Some(0);
        Ok(())
    }

    async fn apply(&self, counter: &Pubkey, op: Operation) -> Result<(), ClientError> {
        let mut state = self.state.lock().unwrap();
        if let Some(limit) = state.fail_after_ops {
            if state.ops_applied >= limit {
                return Err(transport_error("transaction rejected"));
            }
        }
        let count = state
            .count
            .as_mut()
            .ok_or(ClientError::AccountNotFound { address: *counter })?;
        match op {
            Operation::Increment => *count += 1,
            Operation::Decrement => *count = count.wrapping_sub(1),
            Operation::Update(new_value) => *count = new_value,
            Operation::Reset => *count = 0,
        }
        state.ops_applied += 1;
        Ok(())
    }
}
