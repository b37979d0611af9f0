//! Constants shared by the ballot contract
//!
//! Storage lifetimes and structural limits. Changing a limit changes the
//! contract's external contract, so treat these as configuration.

// ===== Ledger TTL Constants =====

/// Ledgers per day at ~5s per ledger
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// TTL an instance entry is extended to on every mutation (~30 days)
pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// Extend the instance entry once its TTL falls below this
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// TTL a proposal or voter record is extended to when written (~60 days)
pub const RECORD_BUMP_AMOUNT: u32 = 60 * DAY_IN_LEDGERS;

/// Extend a record once its TTL falls below this
pub const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - DAY_IN_LEDGERS;

// ===== Ballot Limits =====

/// Upper bound on the proposal list; keeps the tally scan cheap
pub const MAX_PROPOSALS: u32 = 64;

/// Width of a proposal label in bytes
pub const LABEL_LEN: usize = 32;

/// Weight granted to a voter by the chairperson
pub const GRANTED_WEIGHT: u64 = 1;
