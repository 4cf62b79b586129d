use soroban_sdk::{symbol_short, Address, Env};

use crate::types::Proposal;

pub fn initialized(env: &Env, admin: &Address) {
    env.events()
        .publish((symbol_short!("init"),), (admin.clone(),));
}

pub fn voter_added(env: &Env, voter: &Address) {
    env.events()
        .publish((symbol_short!("voter"),), (voter.clone(),));
}

pub fn vote_time_set(env: &Env, seconds: u64) {
    env.events()
        .publish((symbol_short!("vote_time"),), (seconds,));
}

pub fn proposal_created(env: &Env, proposal: &Proposal) {
    env.events().publish(
        (symbol_short!("proposal"), proposal.id.clone()),
        (proposal.sequence, proposal.deadline),
    );
}

pub fn vote_cast(env: &Env, voter: &Address, choice: bool, proposal: &Proposal) {
    env.events().publish(
        (symbol_short!("vote"), proposal.id.clone()),
        (voter.clone(), choice, proposal.votes_for, proposal.votes_against),
    );
}
