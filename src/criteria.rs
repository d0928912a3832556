//! The six fixed improvement criteria.

use std::fmt;

use crate::sections::{
    has_digit, has_lowercase, has_symbol, has_uppercase, meets_length, MIN_LENGTH,
    RECOMMENDED_LENGTH,
};

/// Identifies one of the six criteria.
///
/// Variant order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CriterionKind {
    /// At least 12 characters.
    MinLength,
    /// At least 16 characters.
    RecommendedLength,
    Uppercase,
    Lowercase,
    Digit,
    /// Any character outside `[A-Za-z0-9]`.
    Symbol,
}

impl CriterionKind {
    /// All criteria, in the order they are reported.
    pub const ALL: [CriterionKind; 6] = [
        CriterionKind::MinLength,
        CriterionKind::RecommendedLength,
        CriterionKind::Uppercase,
        CriterionKind::Lowercase,
        CriterionKind::Digit,
        CriterionKind::Symbol,
    ];

    pub const fn description(self) -> &'static str {
        match self {
            CriterionKind::MinLength => "At least 12 characters",
            CriterionKind::RecommendedLength => "At least 16 characters (strongly recommended)",
            CriterionKind::Uppercase => "Contains uppercase letters (A-Z)",
            CriterionKind::Lowercase => "Contains lowercase letters (a-z)",
            CriterionKind::Digit => "Contains numbers (0-9)",
            CriterionKind::Symbol => "Contains symbols (e.g., !@#$%)",
        }
    }

    /// Runs this criterion's predicate against the raw password.
    pub fn check(self, password: &str) -> bool {
        match self {
            CriterionKind::MinLength => meets_length(password, MIN_LENGTH),
            CriterionKind::RecommendedLength => meets_length(password, RECOMMENDED_LENGTH),
            CriterionKind::Uppercase => has_uppercase(password),
            CriterionKind::Lowercase => has_lowercase(password),
            CriterionKind::Digit => has_digit(password),
            CriterionKind::Symbol => has_symbol(password),
        }
    }
}

impl fmt::Display for CriterionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A criterion together with whether the evaluated password meets it.
///
/// The description always matches the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criterion {
    kind: CriterionKind,
    description: &'static str,
    met: bool,
}

impl Criterion {
    pub const fn new(kind: CriterionKind, met: bool) -> Self {
        Self {
            kind,
            description: kind.description(),
            met,
        }
    }

    pub fn kind(&self) -> CriterionKind {
        self.kind
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn met(&self) -> bool {
        self.met
    }

    /// Evaluates `kind` against `password`.
    pub fn evaluate(kind: CriterionKind, password: &str) -> Self {
        Self::new(kind, kind.check(password))
    }

    /// All six criteria, unmet.
    pub const fn all_unmet() -> [Criterion; 6] {
        [
            Criterion::new(CriterionKind::MinLength, false),
            Criterion::new(CriterionKind::RecommendedLength, false),
            Criterion::new(CriterionKind::Uppercase, false),
            Criterion::new(CriterionKind::Lowercase, false),
            Criterion::new(CriterionKind::Digit, false),
            Criterion::new(CriterionKind::Symbol, false),
        ]
    }
}
