use soroban_sdk::{Address, Env};

use crate::errors::VotingError;
use crate::proposal::{self, is_underway};
use crate::types::{ProposalOutcome, Tally};
use crate::utils::current_time;
use crate::{events, storage};

/// Simple majority of votes cast. A tie does not pass.
pub fn decide(votes_for: u32, votes_against: u32) -> ProposalOutcome {
    if votes_for > votes_against {
        ProposalOutcome::Passed
    } else {
        ProposalOutcome::Rejected
    }
}

/// Cast `voter`'s ballot on the open proposal.
pub fn cast(env: &Env, voter: &Address, choice: bool) -> Result<(), VotingError> {
    voter.require_auth();

    let mut proposal = storage::get_proposal(env).ok_or(VotingError::NoActiveProposal)?;
    if !is_underway(&proposal, current_time(env)) {
        return Err(VotingError::NoActiveProposal);
    }

    if !storage::is_voter(env, voter) {
        return Err(VotingError::NotRegistered);
    }

    if storage::has_ballot(env, proposal.sequence, voter) {
        return Err(VotingError::AlreadyVoted);
    }

    if choice {
        proposal.votes_for = proposal
            .votes_for
            .checked_add(1)
            .ok_or(VotingError::Overflow)?;
    } else {
        proposal.votes_against = proposal
            .votes_against
            .checked_add(1)
            .ok_or(VotingError::Overflow)?;
    }
    proposal.voted_count = proposal
        .voted_count
        .checked_add(1)
        .ok_or(VotingError::Overflow)?;

    storage::set_ballot(env, proposal.sequence, voter, choice);
    storage::set_proposal(env, &proposal);
    events::vote_cast(env, voter, choice, &proposal);

    Ok(())
}

pub fn voted_count(env: &Env) -> u32 {
    storage::get_proposal(env).map_or(0, |p| p.voted_count)
}

pub fn tally(env: &Env) -> Result<Tally, VotingError> {
    let proposal = proposal::current(env)?;

    Ok(Tally {
        votes_for: proposal.votes_for,
        votes_against: proposal.votes_against,
        voted_count: proposal.voted_count,
        deadline: proposal.deadline,
    })
}

/// Outcome of the proposal in the slot. Closure is derived from the ledger
/// time; nothing is stored when the deadline passes.
pub fn outcome(env: &Env) -> Result<ProposalOutcome, VotingError> {
    let proposal = proposal::current(env)?;

    if is_underway(&proposal, current_time(env)) {
        return Ok(ProposalOutcome::Underway);
    }

    Ok(decide(proposal.votes_for, proposal.votes_against))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn majority_for_passes() {
        assert_eq!(decide(3, 2), ProposalOutcome::Passed);
        assert_eq!(decide(1, 0), ProposalOutcome::Passed);
    }

    #[test]
    fn tie_is_rejected() {
        assert_eq!(decide(2, 2), ProposalOutcome::Rejected);
        assert_eq!(decide(0, 0), ProposalOutcome::Rejected);
    }

    #[test]
    fn majority_against_is_rejected() {
        assert_eq!(decide(1, 4), ProposalOutcome::Rejected);
    }
}
