use soroban_sdk::{Address, Env, Vec};

use crate::access::require_administrator;
use crate::errors::VotingError;
use crate::{events, storage};

/// Register `voter`. Re-registering a member leaves the registry as is.
pub fn add_voter(env: &Env, caller: &Address, voter: &Address) -> Result<(), VotingError> {
    require_administrator(env, caller)?;

    if storage::is_voter(env, voter) {
        return Ok(());
    }

    storage::push_voter(env, voter);
    events::voter_added(env, voter);

    Ok(())
}

pub fn voters(env: &Env) -> Vec<Address> {
    storage::get_voters(env)
}

pub fn voter_count(env: &Env) -> u32 {
    storage::get_voters(env).len()
}

pub fn is_voter(env: &Env, voter: &Address) -> bool {
    storage::is_voter(env, voter)
}

pub fn did_vote_on_current(env: &Env, voter: &Address) -> bool {
    match storage::get_proposal(env) {
        Some(proposal) => storage::has_ballot(env, proposal.sequence, voter),
        None => false,
    }
}
