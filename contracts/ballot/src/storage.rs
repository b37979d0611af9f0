use soroban_sdk::{Address, Env, Vec};

use shared::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT,
    RECORD_LIFETIME_THRESHOLD,
};

use crate::types::{DataKey, Proposal, Voter};

// ── Instance ─────────────────────────────────────────────────────────────────

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ── Chairperson ──────────────────────────────────────────────────────────────

pub fn set_chairperson(env: &Env, chairperson: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::Chairperson, chairperson);
}

pub fn get_chairperson(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Chairperson)
}

pub fn has_chairperson(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Chairperson)
}

// ── Proposals ────────────────────────────────────────────────────────────────

/// The whole proposal list lives in one entry, so initialization writes a
/// fixed number of entries regardless of list length.
pub fn save_proposals(env: &Env, proposals: &Vec<Proposal>) {
    let key = DataKey::Proposals;
    env.storage().persistent().set(&key, proposals);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

pub fn get_proposals(env: &Env) -> Option<Vec<Proposal>> {
    env.storage().persistent().get(&DataKey::Proposals)
}

// ── Voters ───────────────────────────────────────────────────────────────────

pub fn get_voter_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::VoterCount)
        .unwrap_or(0u32)
}

/// Unseen identities read as `Voter::unregistered()`.
pub fn get_voter(env: &Env, voter: &Address) -> Voter {
    env.storage()
        .persistent()
        .get(&DataKey::Voter(voter.clone()))
        .unwrap_or_else(Voter::unregistered)
}

/// Writes the record, counting the identity the first time it is stored.
pub fn save_voter(env: &Env, address: &Address, voter: &Voter) {
    let key = DataKey::Voter(address.clone());
    if !env.storage().persistent().has(&key) {
        let count = get_voter_count(env) + 1;
        env.storage()
            .instance()
            .set(&DataKey::VoterCount, &count);
    }
    env.storage().persistent().set(&key, voter);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}
