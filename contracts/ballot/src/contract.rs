use soroban_sdk::{Address, BytesN, Env, Vec};

use shared::constants::GRANTED_WEIGHT;
use shared::{safe_add, validate_proposal_index, validate_proposal_names, BallotError};

use crate::events;
use crate::storage;
use crate::types::{Proposal, Voter};

/// Rights, delegation and tally state machine behind the contract surface.
///
/// Every operation checks all of its preconditions before the first storage
/// write.
pub struct Registry;

impl Registry {
    // -------------------------------
    // Construction
    // -------------------------------
    pub fn initialize(
        env: Env,
        chairperson: Address,
        names: Vec<BytesN<32>>,
    ) -> Result<(), BallotError> {
        if storage::has_chairperson(&env) {
            return Err(BallotError::AlreadyInitialized);
        }

        chairperson.require_auth();

        let count = validate_proposal_names(&names)?;

        let mut proposals = Vec::new(&env);
        for name in names.iter() {
            proposals.push_back(Proposal {
                name,
                vote_count: 0,
            });
        }

        storage::set_chairperson(&env, &chairperson);
        storage::save_proposals(&env, &proposals);
        storage::bump_instance(&env);

        events::ballot_initialized(&env, &chairperson, count);

        Ok(())
    }

    // -------------------------------
    // Rights
    // -------------------------------
    pub fn grant_right(env: Env, caller: Address, target: Address) -> Result<(), BallotError> {
        caller.require_auth();

        if caller != Self::require_chairperson(&env)? {
            return Err(BallotError::Unauthorized);
        }

        let mut voter = storage::get_voter(&env, &target);
        if voter.voted {
            return Err(BallotError::AlreadyVoted);
        }
        if voter.has_right() {
            return Err(BallotError::AlreadyHasRight);
        }

        voter.weight = GRANTED_WEIGHT;

        storage::save_voter(&env, &target, &voter);
        storage::bump_instance(&env);

        events::right_granted(&env, &target);

        Ok(())
    }

    // -------------------------------
    // Delegation
    // -------------------------------
    pub fn delegate(env: Env, caller: Address, target: Address) -> Result<(), BallotError> {
        caller.require_auth();
        let mut proposals = Self::require_proposals(&env)?;

        let mut sender = storage::get_voter(&env, &caller);
        if !sender.has_right() {
            return Err(BallotError::NoRight);
        }
        if sender.voted {
            return Err(BallotError::AlreadyVoted);
        }
        if target == caller {
            return Err(BallotError::SelfDelegation);
        }

        let resolved = Self::walk_chain(&env, &target, Some(&caller))?;
        let mut delegate = storage::get_voter(&env, &resolved);
        if !delegate.has_right() {
            return Err(BallotError::DelegateHasNoRight);
        }

        sender.voted = true;
        sender.delegate = Some(target.clone());

        match delegate.vote {
            // The delegate already committed, so the weight goes straight to
            // its proposal.
            Some(index) => {
                let mut proposal = proposals.get(index).ok_or(BallotError::OutOfRange)?;
                proposal.vote_count = safe_add(proposal.vote_count, sender.weight)?;
                proposals.set(index, proposal);

                storage::save_voter(&env, &caller, &sender);
                storage::save_proposals(&env, &proposals);
            }
            None => {
                delegate.weight = safe_add(delegate.weight, sender.weight)?;

                storage::save_voter(&env, &caller, &sender);
                storage::save_voter(&env, &resolved, &delegate);
            }
        }
        storage::bump_instance(&env);

        events::delegated(&env, &caller, &target, &resolved, sender.weight);

        Ok(())
    }

    // -------------------------------
    // Voting
    // -------------------------------
    pub fn vote(env: Env, caller: Address, proposal: u32) -> Result<(), BallotError> {
        caller.require_auth();
        let mut proposals = Self::require_proposals(&env)?;

        let mut sender = storage::get_voter(&env, &caller);
        if !sender.has_right() {
            return Err(BallotError::NoRight);
        }
        if sender.voted {
            return Err(BallotError::AlreadyVoted);
        }
        validate_proposal_index(proposal, proposals.len())?;

        let mut record = proposals.get(proposal).ok_or(BallotError::OutOfRange)?;
        record.vote_count = safe_add(record.vote_count, sender.weight)?;
        proposals.set(proposal, record);

        sender.voted = true;
        sender.vote = Some(proposal);

        storage::save_voter(&env, &caller, &sender);
        storage::save_proposals(&env, &proposals);
        storage::bump_instance(&env);

        events::vote_cast(&env, &caller, proposal, sender.weight);

        Ok(())
    }

    // -------------------------------
    // Read-only Queries
    // -------------------------------

    /// Index of the proposal with the most votes; the lowest index wins a tie.
    pub fn winning_proposal(env: Env) -> Result<u32, BallotError> {
        let proposals = Self::require_proposals(&env)?;
        Ok(Self::leading_index(&proposals))
    }

    pub fn winner_name(env: Env) -> Result<BytesN<32>, BallotError> {
        let proposals = Self::require_proposals(&env)?;
        proposals
            .get(Self::leading_index(&proposals))
            .map(|proposal| proposal.name)
            .ok_or(BallotError::NotInitialized)
    }

    pub fn chairperson(env: Env) -> Result<Address, BallotError> {
        Self::require_chairperson(&env)
    }

    pub fn proposal_count(env: Env) -> Result<u32, BallotError> {
        Ok(Self::require_proposals(&env)?.len())
    }

    pub fn get_proposal(env: Env, index: u32) -> Result<Proposal, BallotError> {
        let proposals = Self::require_proposals(&env)?;
        validate_proposal_index(index, proposals.len())?;
        proposals.get(index).ok_or(BallotError::OutOfRange)
    }

    pub fn get_proposals(env: Env) -> Result<Vec<Proposal>, BallotError> {
        Self::require_proposals(&env)
    }

    pub fn get_voter(env: Env, voter: Address) -> Voter {
        storage::get_voter(&env, &voter)
    }

    pub fn final_delegate(env: Env, voter: Address) -> Result<Address, BallotError> {
        Self::require_chairperson(&env)?;
        Self::walk_chain(&env, &voter, None)
    }

    // -------------------------------
    // Internal Helpers
    // -------------------------------
    fn require_chairperson(env: &Env) -> Result<Address, BallotError> {
        storage::get_chairperson(env).ok_or(BallotError::NotInitialized)
    }

    fn require_proposals(env: &Env) -> Result<Vec<Proposal>, BallotError> {
        storage::get_proposals(env).ok_or(BallotError::NotInitialized)
    }

    /// Strict `>` over an ascending scan keeps the first maximum.
    fn leading_index(proposals: &Vec<Proposal>) -> u32 {
        let mut winning = 0u32;
        let mut winning_count = 0u64;
        for (index, proposal) in proposals.iter().enumerate() {
            if proposal.vote_count > winning_count {
                winning_count = proposal.vote_count;
                winning = index as u32;
            }
        }
        winning
    }

    /// Follows `delegate` pointers from `from` to the first voter that has not
    /// delegated. Landing on `caller` is a loop. A chain can never be longer
    /// than the number of stored voters.
    fn walk_chain(
        env: &Env,
        from: &Address,
        caller: Option<&Address>,
    ) -> Result<Address, BallotError> {
        let bound = storage::get_voter_count(env);
        let mut current = from.clone();
        let mut steps = 0u32;

        while let Some(next) = storage::get_voter(env, &current).delegate {
            if caller == Some(&next) {
                return Err(BallotError::DelegationLoop);
            }
            steps += 1;
            if steps > bound {
                return Err(BallotError::DelegationLoop);
            }
            current = next;
        }

        Ok(current)
    }
}
