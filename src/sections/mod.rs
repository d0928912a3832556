//! Criterion predicates
//!
//! Each section checks one aspect of a password. Predicates are pure and
//! look at the raw password only.

mod length;
mod variety;

pub use length::{meets_length, MIN_LENGTH, RECOMMENDED_LENGTH};
pub use variety::{has_digit, has_lowercase, has_symbol, has_uppercase};
