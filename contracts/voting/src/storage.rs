use soroban_sdk::{Address, Env, Vec};

use crate::errors::VotingError;
use crate::types::{DataKey, Proposal};

// ── Ledger TTL constants ─────────────────────────────────────────────────────
// ~5s per ledger. Reads extend TTLs as well as writes; the host clamps
// extensions at the network maximum.
pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const REGISTRY_BUMP_AMOUNT: u32 = 120 * DAY_IN_LEDGERS;
const REGISTRY_LIFETIME_THRESHOLD: u32 = REGISTRY_BUMP_AMOUNT - DAY_IN_LEDGERS;

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, REGISTRY_LIFETIME_THRESHOLD, REGISTRY_BUMP_AMOUNT);
}

// ── Admin ────────────────────────────────────────────────────────────────────

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    bump_instance(env);
}

pub fn get_admin(env: &Env) -> Result<Address, VotingError> {
    let admin = env
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(VotingError::NotInitialized)?;
    bump_instance(env);
    Ok(admin)
}

// ── Voting window configuration ──────────────────────────────────────────────

pub fn get_time_to_vote(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TimeToVote)
        .unwrap_or(0)
}

pub fn set_time_to_vote(env: &Env, seconds: u64) {
    env.storage().instance().set(&DataKey::TimeToVote, &seconds);
    bump_instance(env);
}

// ── Proposal slot ────────────────────────────────────────────────────────────

pub fn get_proposal(env: &Env) -> Option<Proposal> {
    let proposal = env.storage().instance().get(&DataKey::Proposal);
    if proposal.is_some() {
        bump_instance(env);
    }
    proposal
}

pub fn set_proposal(env: &Env, proposal: &Proposal) {
    env.storage().instance().set(&DataKey::Proposal, proposal);
    bump_instance(env);
}

// ── Voter registry ───────────────────────────────────────────────────────────

pub fn get_voters(env: &Env) -> Vec<Address> {
    match env.storage().persistent().get(&DataKey::Voters) {
        Some(voters) => {
            bump_persistent(env, &DataKey::Voters);
            voters
        }
        None => Vec::new(env),
    }
}

pub fn is_voter(env: &Env, voter: &Address) -> bool {
    let key = DataKey::Voter(voter.clone());
    let registered = env.storage().persistent().has(&key);
    // extending a missing entry is a host error
    if registered {
        bump_persistent(env, &key);
    }
    registered
}

/// Appends `voter` to the registry. Callers check membership first.
pub fn push_voter(env: &Env, voter: &Address) {
    let mut voters = get_voters(env);
    voters.push_back(voter.clone());
    env.storage().persistent().set(&DataKey::Voters, &voters);
    bump_persistent(env, &DataKey::Voters);

    let key = DataKey::Voter(voter.clone());
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}

// ── Ballots ──────────────────────────────────────────────────────────────────

pub fn has_ballot(env: &Env, sequence: u64, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Ballot(sequence, voter.clone()))
}

pub fn set_ballot(env: &Env, sequence: u64, voter: &Address, choice: bool) {
    let key = DataKey::Ballot(sequence, voter.clone());
    env.storage().persistent().set(&key, &choice);
    bump_persistent(env, &key);
}
