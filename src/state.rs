use borsh::{BorshDeserialize, BorshSerialize};

use crate::error::ClientError;

// Anchor account discriminator: sha256("account:CounterAccount")[..8]
pub const ACCOUNT_DISCRIMINATOR: [u8; 8] = [164, 8, 153, 71, 8, 44, 93, 22];

#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Eq)]
pub struct CounterAccount {
    pub counter: u64,
}

impl CounterAccount {
    /// 8-byte discriminator + u64 counter.
    pub const SIZE: usize = 8 + 8;

    pub fn try_from_data(data: &[u8]) -> Result<Self, ClientError> {
        if data.len() < Self::SIZE {
            return Err(ClientError::MalformedAccount {
                reason: format!("account data too short: {} bytes", data.len()),
            });
        }
        let (discriminator, mut body) = data.split_at(8);
        if discriminator != ACCOUNT_DISCRIMINATOR {
            return Err(ClientError::MalformedAccount {
                reason: "account discriminator mismatch".to_string(),
            });
        }
        Self::deserialize(&mut body).map_err(|err| ClientError::MalformedAccount {
            reason: err.to_string(),
        })
    }
}
