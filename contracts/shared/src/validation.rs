//! Validation helpers for the ballot contract
//!
//! Pure checks that do not touch storage, so they can run before any write.

use crate::constants::MAX_PROPOSALS;
use crate::errors::BallotError;
use soroban_sdk::{BytesN, Vec};

// ===== Construction =====

/// Validate the proposal list given at initialization
///
/// # Returns
/// The number of proposals, or `BallotError::InvalidConfig` when the list is
/// empty or longer than `MAX_PROPOSALS`
pub fn validate_proposal_names(names: &Vec<BytesN<32>>) -> Result<u32, BallotError> {
    let count = names.len();
    if count == 0 || count > MAX_PROPOSALS {
        return Err(BallotError::InvalidConfig);
    }
    Ok(count)
}

// ===== Voting =====

/// Validate that `index` addresses one of `count` proposals
pub fn validate_proposal_index(index: u32, count: u32) -> Result<(), BallotError> {
    if index >= count {
        return Err(BallotError::OutOfRange);
    }
    Ok(())
}

// ===== Arithmetic =====

/// Add two weights, returning error on overflow
pub fn safe_add(a: u64, b: u64) -> Result<u64, BallotError> {
    a.checked_add(b).ok_or(BallotError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn test_proposal_names_bounds() {
        let env = Env::default();
        let mut names: Vec<BytesN<32>> = Vec::new(&env);
        assert_eq!(validate_proposal_names(&names), Err(BallotError::InvalidConfig));

        names.push_back(BytesN::from_array(&env, &[1u8; 32]));
        assert_eq!(validate_proposal_names(&names), Ok(1));

        for i in 1..MAX_PROPOSALS {
            names.push_back(BytesN::from_array(&env, &[i as u8; 32]));
        }
        assert_eq!(validate_proposal_names(&names), Ok(MAX_PROPOSALS));

        names.push_back(BytesN::from_array(&env, &[0u8; 32]));
        assert_eq!(validate_proposal_names(&names), Err(BallotError::InvalidConfig));
    }

    #[test]
    fn test_proposal_index() {
        assert_eq!(validate_proposal_index(0, 2), Ok(()));
        assert_eq!(validate_proposal_index(1, 2), Ok(()));
        assert_eq!(validate_proposal_index(2, 2), Err(BallotError::OutOfRange));
        assert_eq!(validate_proposal_index(99, 2), Err(BallotError::OutOfRange));
    }

    #[test]
    fn test_safe_add() {
        assert_eq!(safe_add(1, 2), Ok(3));
        assert_eq!(safe_add(u64::MAX, 1), Err(BallotError::Overflow));
    }
}
