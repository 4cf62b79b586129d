use soroban_sdk::{Address, Env};

use crate::errors::VotingError;
use crate::storage;

/// Require that `caller` signed the invocation and is the administrator.
pub fn require_administrator(env: &Env, caller: &Address) -> Result<(), VotingError> {
    caller.require_auth();

    let admin = storage::get_admin(env)?;
    if *caller != admin {
        return Err(VotingError::Unauthorized);
    }

    Ok(())
}
