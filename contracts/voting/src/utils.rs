use soroban_sdk::Env;

use crate::errors::VotingError;

pub const SECONDS_PER_MINUTE: u64 = 60;

pub fn current_time(env: &Env) -> u64 {
    env.ledger().timestamp()
}

pub fn minutes_to_seconds(minutes: u64) -> Result<u64, VotingError> {
    minutes
        .checked_mul(SECONDS_PER_MINUTE)
        .ok_or(VotingError::Overflow)
}
