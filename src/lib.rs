//! Password strength meter library
//!
//! Scores a password against six fixed criteria (two length tiers and four
//! character classes) and maps the score to a strength level and a
//! segmented indicator.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_METER_DEBOUNCE_MS`: Debounce delay of `evaluate_tx` in milliseconds
//!   (default: `300`)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate, ColorToken, StrengthLevel};
//!
//! let result = evaluate("correct horse");
//! assert_eq!(result.score.value(), 60);
//! assert_eq!(result.level, StrengthLevel::Medium);
//! assert_eq!(result.color_token, ColorToken::Medium);
//! assert_eq!(result.active_segments, 3);
//!
//! for criterion in result.unmet() {
//!     println!("todo: {}", criterion.description());
//! }
//! ```

// Internal modules
mod criteria;
mod evaluator;
mod sections;
mod types;
mod weights;

// Public API
pub use criteria::{Criterion, CriterionKind};
pub use evaluator::{evaluate, evaluate_secret, StrengthEvaluator};
pub use types::{ColorToken, ParseError, StrengthLevel, StrengthResult, StrengthScore, MAX_SCORE};
pub use weights::Weights;

#[cfg(feature = "async")]
pub use evaluator::{debounce_delay, evaluate_tx, DEFAULT_DEBOUNCE_MS};
