//! Score weights per criterion.

use crate::criteria::CriterionKind;

/// Points awarded for each met criterion.
///
/// Weights are additive and independent. The defaults sum to exactly 100;
/// retuned weights may sum past that, the evaluator clamps the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub min_length: u32,
    /// Bonus on top of `min_length`.
    pub recommended_length: u32,
    pub uppercase: u32,
    pub lowercase: u32,
    pub digit: u32,
    pub symbol: u32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            min_length: 20,
            recommended_length: 10,
            uppercase: 15,
            lowercase: 15,
            digit: 15,
            symbol: 25,
        }
    }
}

impl Weights {
    pub fn weight_of(&self, kind: CriterionKind) -> u32 {
        match kind {
            CriterionKind::MinLength => self.min_length,
            CriterionKind::RecommendedLength => self.recommended_length,
            CriterionKind::Uppercase => self.uppercase,
            CriterionKind::Lowercase => self.lowercase,
            CriterionKind::Digit => self.digit,
            CriterionKind::Symbol => self.symbol,
        }
    }

    /// Unclamped sum of all weights.
    pub fn total(&self) -> u32 {
        CriterionKind::ALL
            .iter()
            .fold(0u32, |acc, &kind| acc.saturating_add(self.weight_of(kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_100() {
        assert_eq!(Weights::default().total(), 100);
    }

    #[test]
    fn test_weight_of_default() {
        let w = Weights::default();
        assert_eq!(w.weight_of(CriterionKind::MinLength), 20);
        assert_eq!(w.weight_of(CriterionKind::RecommendedLength), 10);
        assert_eq!(w.weight_of(CriterionKind::Uppercase), 15);
        assert_eq!(w.weight_of(CriterionKind::Lowercase), 15);
        assert_eq!(w.weight_of(CriterionKind::Digit), 15);
        assert_eq!(w.weight_of(CriterionKind::Symbol), 25);
    }

    #[test]
    fn test_total_saturates() {
        let w = Weights {
            symbol: u32::MAX,
            ..Weights::default()
        };
        assert_eq!(w.total(), u32::MAX);
    }
}
