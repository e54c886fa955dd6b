use borsh::BorshSerialize;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::{pubkey, system_program};

pub const PROGRAM_ID: Pubkey = pubkey!("xB4KEJykRgdqj6M3FopufhvmCHpta9NS5AxWu6RhEeE");

// Anchor instruction discriminators: sha256("global:<method>")[..8]
pub const INITIALIZE: [u8; 8] = [175, 175, 109, 31, 13, 152, 155, 237];
pub const INCREMENT: [u8; 8] = [11, 18, 104, 9, 104, 174, 59, 33];
pub const DECREMENT: [u8; 8] = [106, 227, 168, 59, 248, 27, 150, 101];
pub const UPDATE: [u8; 8] = [219, 200, 88, 176, 158, 63, 253, 127];
pub const RESET: [u8; 8] = [23, 81, 251, 84, 138, 183, 240, 214];

#[derive(BorshSerialize)]
struct UpdateArgs {
    new_value: u64,
}

/// Creates the counter account. The new account co-signs its own creation,
/// the user pays for it.
pub fn initialize(user: &Pubkey, counter: &Pubkey) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*counter, true),
            AccountMeta::new(*user, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: INITIALIZE.to_vec(),
    }
}

pub fn increment(counter: &Pubkey) -> Instruction {
    mutate(counter, INCREMENT.to_vec())
}

pub fn decrement(counter: &Pubkey) -> Instruction {
    mutate(counter, DECREMENT.to_vec())
}

pub fn update(counter: &Pubkey, new_value: u64) -> Instruction {
    let mut data = UPDATE.to_vec();
    data.extend(borsh::to_vec(&UpdateArgs { new_value }).unwrap());
    mutate(counter, data)
}

pub fn reset(counter: &Pubkey) -> Instruction {
    mutate(counter, RESET.to_vec())
}

// Mutating calls after initialization only reference the counter account.
fn mutate(counter: &Pubkey, data: Vec<u8>) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![AccountMeta::new(*counter, false)],
        data,
    }
}
