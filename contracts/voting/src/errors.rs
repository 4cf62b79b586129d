use soroban_sdk::contracterror;

/// Error codes returned by the voting contract.
///
/// Codes are stable: clients match on the numeric value.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    /// `initialize` has not been called yet
    NotInitialized = 1,

    /// `initialize` was already called
    AlreadyInitialized = 2,

    /// Caller is not the administrator
    Unauthorized = 3,

    /// The current proposal's deadline has not passed
    ProposalUnderway = 4,

    /// Id equals the immediately preceding proposal's id
    DuplicateProposalId = 5,

    /// No proposal is open for voting
    NoActiveProposal = 6,

    /// Voter already cast a ballot on the current proposal
    AlreadyVoted = 7,

    /// Voter is not in the registry
    NotRegistered = 8,

    /// Proposal duration must be at least one minute
    InvalidDuration = 9,

    /// No proposal has ever been created
    NoProposal = 10,

    /// Arithmetic overflow while computing a duration or deadline
    Overflow = 11,
}
