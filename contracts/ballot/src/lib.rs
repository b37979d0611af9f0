#![no_std]
//! Single-chairperson delegated voting.
//!
//! The chairperson fixes the proposal list at initialization and grants
//! rights to vote. A rights-holder either votes for one proposal or hands
//! its whole weight to another rights-holder. `winning_proposal` reports the
//! proposal with the most weight at any time.

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Vec};

mod contract;
mod events;
mod storage;
mod types;

pub use shared::BallotError;
pub use types::{DataKey, Proposal, Voter};

use contract::Registry;

#[contract]
pub struct BallotContract;

#[contractimpl]
impl BallotContract {
    /// Create the ballot with one proposal per name. `chairperson` must
    /// authorize the call and becomes the only identity that can grant rights.
    pub fn initialize(
        env: Env,
        chairperson: Address,
        proposal_names: Vec<BytesN<32>>,
    ) -> Result<(), BallotError> {
        Registry::initialize(env, chairperson, proposal_names)
    }

    /// Give `voter` the right to vote (chairperson only).
    pub fn grant_right(env: Env, caller: Address, voter: Address) -> Result<(), BallotError> {
        Registry::grant_right(env, caller, voter)
    }

    /// Hand the caller's weight to `to`, or to its proposal if the end of
    /// the delegation chain already voted.
    pub fn delegate(env: Env, caller: Address, to: Address) -> Result<(), BallotError> {
        Registry::delegate(env, caller, to)
    }

    /// Commit the caller's whole weight to `proposal`.
    pub fn vote(env: Env, caller: Address, proposal: u32) -> Result<(), BallotError> {
        Registry::vote(env, caller, proposal)
    }

    /// Index of the proposal with the most weight; ties go to the lowest index.
    pub fn winning_proposal(env: Env) -> Result<u32, BallotError> {
        Registry::winning_proposal(env)
    }

    /// Label of the winning proposal.
    pub fn winner_name(env: Env) -> Result<BytesN<32>, BallotError> {
        Registry::winner_name(env)
    }

    /// The address allowed to grant rights.
    pub fn chairperson(env: Env) -> Result<Address, BallotError> {
        Registry::chairperson(env)
    }

    /// Number of proposals fixed at initialization.
    pub fn proposal_count(env: Env) -> Result<u32, BallotError> {
        Registry::proposal_count(env)
    }

    /// Proposal at `index`.
    pub fn get_proposal(env: Env, index: u32) -> Result<Proposal, BallotError> {
        Registry::get_proposal(env, index)
    }

    /// Every proposal in index order.
    pub fn get_proposals(env: Env) -> Result<Vec<Proposal>, BallotError> {
        Registry::get_proposals(env)
    }

    /// Unknown identities read as a voter without a right.
    pub fn get_voter(env: Env, voter: Address) -> Voter {
        Registry::get_voter(env, voter)
    }

    /// End of the delegation chain starting at `voter`.
    pub fn final_delegate(env: Env, voter: Address) -> Result<Address, BallotError> {
        Registry::final_delegate(env, voter)
    }
}
