use soroban_sdk::{contracttype, Address, BytesN, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    TimeToVote,
    Proposal,
    Voters,
    Voter(Address),
    Ballot(u64, Address), // (proposal sequence, voter)
}

/// The proposal currently occupying the slot, open or most recently closed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: BytesN<32>,
    pub description: String,
    /// Slot generation, starts at 1. Ballots are scoped to it.
    pub sequence: u64,
    pub created_at: u64,
    /// Voting window in seconds
    pub duration: u64,
    pub deadline: u64,
    pub votes_for: u32,
    pub votes_against: u32,
    pub voted_count: u32,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalOutcome {
    Underway,
    Passed,
    Rejected,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tally {
    pub votes_for: u32,
    pub votes_against: u32,
    pub voted_count: u32,
    pub deadline: u64,
}
