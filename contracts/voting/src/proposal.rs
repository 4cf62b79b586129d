use soroban_sdk::{Address, BytesN, Env, String};

use crate::access::require_administrator;
use crate::errors::VotingError;
use crate::types::Proposal;
use crate::utils::{current_time, minutes_to_seconds};
use crate::{events, storage};

/// A proposal is underway until the ledger reaches its deadline.
pub fn is_underway(proposal: &Proposal, now: u64) -> bool {
    now < proposal.deadline
}

/// Open a new proposal in the slot, replacing the previous one.
///
/// The previous proposal must have reached its deadline and the new id must
/// differ from the previous id. Ballots from earlier proposals stay keyed to
/// their sequence, so the new proposal starts with an empty voted set.
pub fn create(
    env: &Env,
    caller: &Address,
    id: BytesN<32>,
    description: String,
    duration_minutes: u64,
) -> Result<(), VotingError> {
    require_administrator(env, caller)?;

    if duration_minutes == 0 {
        return Err(VotingError::InvalidDuration);
    }
    let duration = minutes_to_seconds(duration_minutes)?;

    let now = current_time(env);
    let previous = storage::get_proposal(env);

    if let Some(previous) = &previous {
        if is_underway(previous, now) {
            return Err(VotingError::ProposalUnderway);
        }
        if previous.id == id {
            return Err(VotingError::DuplicateProposalId);
        }
    }

    let deadline = now.checked_add(duration).ok_or(VotingError::Overflow)?;
    let sequence = previous.map_or(0, |p| p.sequence) + 1;

    let proposal = Proposal {
        id,
        description,
        sequence,
        created_at: now,
        duration,
        deadline,
        votes_for: 0,
        votes_against: 0,
        voted_count: 0,
    };

    storage::set_proposal(env, &proposal);
    events::proposal_created(env, &proposal);

    Ok(())
}

pub fn set_time_to_vote(env: &Env, caller: &Address, minutes: u64) -> Result<(), VotingError> {
    require_administrator(env, caller)?;

    let seconds = minutes_to_seconds(minutes)?;
    storage::set_time_to_vote(env, seconds);
    events::vote_time_set(env, seconds);

    Ok(())
}

pub fn current(env: &Env) -> Result<Proposal, VotingError> {
    storage::get_proposal(env).ok_or(VotingError::NoProposal)
}

pub fn current_id(env: &Env) -> Result<BytesN<32>, VotingError> {
    current(env).map(|p| p.id)
}

pub fn is_current_underway(env: &Env) -> bool {
    storage::get_proposal(env).is_some_and(|p| is_underway(&p, current_time(env)))
}
