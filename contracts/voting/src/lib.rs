//! Single-proposal voting contract.
//!
//! An administrator opens one proposal at a time; registered voters cast a
//! yes/no ballot while the proposal is underway. Once the ledger reaches the
//! deadline the outcome is a simple majority of votes cast.
//!
//! ## Modules
//!
//! - `access` - administrator guard
//! - `registry` - voter registry
//! - `proposal` - proposal slot and voting window configuration
//! - `tally` - ballots and outcome

#![no_std]

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Vec};

mod access;
mod errors;
mod events;
mod proposal;
mod registry;
mod storage;
mod tally;
mod types;
mod utils;

pub use errors::VotingError;
pub use types::{Proposal, ProposalOutcome, Tally};

#[contract]
pub struct VotingContract;

#[contractimpl]
impl VotingContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Fix the administrator and register it as the first voter.
    /// Can only be called once.
    pub fn initialize(env: Env, admin: Address) -> Result<(), VotingError> {
        if storage::has_admin(&env) {
            return Err(VotingError::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_admin(&env, &admin);
        storage::push_voter(&env, &admin);
        events::initialized(&env, &admin);

        Ok(())
    }

    pub fn owner(env: Env) -> Result<Address, VotingError> {
        storage::get_admin(&env)
    }

    // ── Administration ───────────────────────────────────────────────────────

    /// Open a proposal lasting `duration_minutes`.
    ///
    /// Fails with `ProposalUnderway` before the previous deadline and with
    /// `DuplicateProposalId` when `id` repeats the previous proposal's id.
    pub fn create_proposal(
        env: Env,
        caller: Address,
        id: BytesN<32>,
        description: String,
        duration_minutes: u64,
    ) -> Result<(), VotingError> {
        proposal::create(&env, &caller, id, description, duration_minutes)
    }

    /// Configure the voting window unit; `time_to_vote` reports it in seconds.
    pub fn set_proposal_time(env: Env, caller: Address, minutes: u64) -> Result<(), VotingError> {
        proposal::set_time_to_vote(&env, &caller, minutes)
    }

    pub fn add_voter(env: Env, caller: Address, voter: Address) -> Result<(), VotingError> {
        registry::add_voter(&env, &caller, &voter)
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    /// Cast a ballot on the open proposal. `choice` is `true` for yes.
    pub fn vote(env: Env, voter: Address, choice: bool) -> Result<(), VotingError> {
        tally::cast(&env, &voter, choice)
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn get_current_proposal(env: Env) -> Result<BytesN<32>, VotingError> {
        proposal::current_id(&env)
    }

    pub fn get_proposal(env: Env) -> Result<Proposal, VotingError> {
        proposal::current(&env)
    }

    pub fn is_proposal_underway(env: Env) -> bool {
        proposal::is_current_underway(&env)
    }

    pub fn time_to_vote(env: Env) -> u64 {
        storage::get_time_to_vote(&env)
    }

    /// Registered voters in registration order, administrator first.
    pub fn get_voters(env: Env) -> Vec<Address> {
        registry::voters(&env)
    }

    pub fn voter_count(env: Env) -> u32 {
        registry::voter_count(&env)
    }

    pub fn is_voter(env: Env, voter: Address) -> bool {
        registry::is_voter(&env, &voter)
    }

    pub fn did_vote_on_current_proposal(env: Env, voter: Address) -> bool {
        registry::did_vote_on_current(&env, &voter)
    }

    pub fn voted_count(env: Env) -> u32 {
        tally::voted_count(&env)
    }

    pub fn get_tally(env: Env) -> Result<Tally, VotingError> {
        tally::tally(&env)
    }

    /// `Underway` until the deadline, then `Passed` or `Rejected`.
    pub fn get_outcome(env: Env) -> Result<ProposalOutcome, VotingError> {
        tally::outcome(&env)
    }
}
