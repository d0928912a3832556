//! Evaluation result types.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::criteria::Criterion;

/// Highest possible score.
pub const MAX_SCORE: u8 = 100;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown strength level: {0:?}")]
    UnknownLevel(String),
    #[error("Unknown color token: {0:?}")]
    UnknownColorToken(String),
}

/// Password score in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StrengthScore(u8);

impl StrengthScore {
    /// Builds a score from a raw weight sum, clamping it to 100.
    pub fn new(raw: u32) -> Self {
        Self(raw.min(u32::from(MAX_SCORE)) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for StrengthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Qualitative strength.
///
/// `None` only ever describes the empty password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum StrengthLevel {
    #[default]
    None,
    TooWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    /// Maps a score of a non-empty password to its bin.
    ///
    /// Bins are half-open: `[0,40)`, `[40,60)`, `[60,80)`, `[80,100)`, `100`.
    pub fn from_score(score: StrengthScore) -> Self {
        match score.value() {
            0..40 => StrengthLevel::TooWeak,
            40..60 => StrengthLevel::Weak,
            60..80 => StrengthLevel::Medium,
            80..100 => StrengthLevel::Strong,
            _ => StrengthLevel::VeryStrong,
        }
    }

    pub fn color_token(self) -> ColorToken {
        match self {
            StrengthLevel::None => ColorToken::Neutral,
            StrengthLevel::TooWeak | StrengthLevel::Weak => ColorToken::Weak,
            StrengthLevel::Medium => ColorToken::Medium,
            StrengthLevel::Strong => ColorToken::Strong,
            StrengthLevel::VeryStrong => ColorToken::VeryStrong,
        }
    }

    /// Number of filled indicator segments, out of 4.
    pub fn active_segments(self) -> u8 {
        match self {
            StrengthLevel::None => 0,
            StrengthLevel::TooWeak => 1,
            StrengthLevel::Weak => 2,
            StrengthLevel::Medium => 3,
            StrengthLevel::Strong | StrengthLevel::VeryStrong => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::None => "",
            StrengthLevel::TooWeak => "Too Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StrengthLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Ok(StrengthLevel::None),
            "Too Weak" => Ok(StrengthLevel::TooWeak),
            "Weak" => Ok(StrengthLevel::Weak),
            "Medium" => Ok(StrengthLevel::Medium),
            "Strong" => Ok(StrengthLevel::Strong),
            "Very Strong" => Ok(StrengthLevel::VeryStrong),
            other => Err(ParseError::UnknownLevel(other.to_string())),
        }
    }
}

/// Symbolic indicator color. Mapping to an actual style is up to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorToken {
    #[default]
    Neutral,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl ColorToken {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorToken::Neutral => "neutral",
            ColorToken::Weak => "weak",
            ColorToken::Medium => "medium",
            ColorToken::Strong => "strong",
            ColorToken::VeryStrong => "very-strong",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorToken {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "neutral" => Ok(ColorToken::Neutral),
            "weak" => Ok(ColorToken::Weak),
            "medium" => Ok(ColorToken::Medium),
            "strong" => Ok(ColorToken::Strong),
            "very-strong" => Ok(ColorToken::VeryStrong),
            other => Err(ParseError::UnknownColorToken(other.to_string())),
        }
    }
}

/// Outcome of evaluating one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthResult {
    pub score: StrengthScore,
    pub level: StrengthLevel,
    /// Always the six criteria, in `CriterionKind::ALL` order.
    pub criteria: [Criterion; 6],
    pub active_segments: u8,
    pub color_token: ColorToken,
}

impl StrengthResult {
    /// The result for the empty password.
    pub const fn empty() -> Self {
        Self {
            score: StrengthScore(0),
            level: StrengthLevel::None,
            criteria: Criterion::all_unmet(),
            active_segments: 0,
            color_token: ColorToken::Neutral,
        }
    }

    /// Builds the result for a non-empty password from its criteria and score.
    pub(crate) fn from_parts(criteria: [Criterion; 6], score: StrengthScore) -> Self {
        let level = StrengthLevel::from_score(score);
        Self {
            score,
            level,
            criteria,
            active_segments: level.active_segments(),
            color_token: level.color_token(),
        }
    }

    /// Returns `true` if this is the empty-password result.
    pub fn is_empty(&self) -> bool {
        self.level == StrengthLevel::None
    }

    pub fn met_count(&self) -> usize {
        self.criteria.iter().filter(|c| c.met()).count()
    }

    /// Criteria still to satisfy, in display order.
    pub fn unmet(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter().filter(|c| !c.met())
    }
}

impl Default for StrengthResult {
    fn default() -> Self {
        Self::empty()
    }
}
