//! Error codes for the ballot registry
//!
//! Every failure is a precondition violation detected before any state is
//! written, so an error never leaves a partial update behind.

use soroban_sdk::contracterror;

/// Error type for the ballot contract
///
/// Codes are stable; clients match on the numeric value.
/// - 1-9: ballot rules
/// - 10-19: lifecycle and arithmetic
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum BallotError {
    // ===== Ballot Rules (1-9) =====
    /// Only the chairperson may grant a right to vote
    Unauthorized = 1,

    /// The voter already voted or delegated
    AlreadyVoted = 2,

    /// The voter already holds a right to vote
    AlreadyHasRight = 3,

    /// The caller holds no right to vote
    NoRight = 4,

    /// A voter cannot delegate to itself
    SelfDelegation = 5,

    /// Following the delegation chain leads back to the caller
    DelegationLoop = 6,

    /// Proposal index is outside the proposal list
    OutOfRange = 7,

    /// The proposal list given at initialization is empty or too long
    InvalidConfig = 8,

    /// The end of the delegation chain holds no right to vote
    DelegateHasNoRight = 9,

    // ===== Lifecycle / Arithmetic (10-19) =====
    /// The ballot has not been initialized
    NotInitialized = 10,

    /// The ballot was already initialized
    AlreadyInitialized = 11,

    /// Weight or tally arithmetic overflowed
    Overflow = 12,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(BallotError::Unauthorized as u32, 1);
        assert_eq!(BallotError::InvalidConfig as u32, 8);
        assert_eq!(BallotError::Overflow as u32, 12);
    }
}
