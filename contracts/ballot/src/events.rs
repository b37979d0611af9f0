use soroban_sdk::{symbol_short, Address, Env};

#[allow(deprecated)]
pub fn ballot_initialized(env: &Env, chairperson: &Address, proposal_count: u32) {
    env.events().publish(
        (symbol_short!("ballot"), symbol_short!("init")),
        (chairperson.clone(), proposal_count),
    );
}

#[allow(deprecated)]
pub fn right_granted(env: &Env, target: &Address) {
    env.events().publish(
        (symbol_short!("right"), symbol_short!("granted")),
        target.clone(),
    );
}

#[allow(deprecated)]
pub fn delegated(env: &Env, caller: &Address, target: &Address, resolved: &Address, weight: u64) {
    env.events().publish(
        (symbol_short!("delegate"), symbol_short!("set")),
        (caller.clone(), target.clone(), resolved.clone(), weight),
    );
}

#[allow(deprecated)]
pub fn vote_cast(env: &Env, caller: &Address, proposal: u32, weight: u64) {
    env.events().publish(
        (symbol_short!("vote"), symbol_short!("cast")),
        (caller.clone(), proposal, weight),
    );
}
