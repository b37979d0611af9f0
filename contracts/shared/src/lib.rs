#![no_std]
//! # Shared Ballot Library
//!
//! Error codes, configuration constants and validation helpers used by the
//! ballot contract.
//!
//! ## Modules
//!
//! - `errors` - The `BallotError` taxonomy returned by every fallible entry point
//! - `constants` - Storage TTLs and structural limits
//! - `validation` - Pure precondition checks and checked weight arithmetic
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! shared = { path = "../shared" }
//! ```
//!
//! ```rust,ignore
//! use shared::BallotError;
//! use shared::{safe_add, validate_proposal_index};
//! use shared::constants::MAX_PROPOSALS;
//! ```

pub mod constants;
pub mod errors;
pub mod validation;

pub use errors::BallotError;
pub use validation::{safe_add, validate_proposal_index, validate_proposal_names};
