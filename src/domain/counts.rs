// ============================================================
// Layer 3 — Cleaning Counts
// ============================================================
// The result of one cleaning pass over one corpus:
//
//   total      — raw record count
//   empty      — records whose key is "" (missing values included)
//   missing    — subset of `empty` whose text was null/absent
//   duplicates — non-empty records repeating an earlier key
//   cleaned    — records that survive
//
// Invariants enforced by every constructor:
//   cleaned = total - empty - duplicates   (so cleaned >= 0)
//   missing <= empty
//
// Empty and duplicate are disjoint categories: empties are
// dropped first, then duplicates are counted among what remains.

use serde::{Deserialize, Serialize};

use crate::domain::error::CorpusError;
use crate::domain::policy::NormalizationPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningCounts {
    pub total:      usize,
    pub empty:      usize,
    pub missing:    usize,
    pub duplicates: usize,
    pub cleaned:    usize,
}

impl CleaningCounts {
    /// Build counts from the three observed figures, deriving `cleaned`.
    ///
    /// Example:
    ///   let c = CleaningCounts::new(44001, 85, 2009)?;
    ///   assert_eq!(c.cleaned, 41907);
    pub fn new(total: usize, empty: usize, duplicates: usize) -> Result<Self, CorpusError> {
        let cleaned = empty
            .checked_add(duplicates)
            .and_then(|removed| total.checked_sub(removed))
            .ok_or_else(|| {
                CorpusError::ArithmeticInconsistency(format!(
                    "empty ({empty}) + duplicates ({duplicates}) exceeds total ({total})"
                ))
            })?;

        Ok(Self {
            total,
            empty,
            missing: 0,
            duplicates,
            cleaned,
        })
    }

    /// Record how many of the empty records were missing values.
    pub fn with_missing(mut self, missing: usize) -> Result<Self, CorpusError> {
        if missing > self.empty {
            return Err(CorpusError::ArithmeticInconsistency(format!(
                "missing ({missing}) exceeds empty ({})",
                self.empty
            )));
        }
        self.missing = missing;
        Ok(self)
    }

    /// Re-check the invariants, e.g. after deserialising a saved report
    /// that may have been edited by hand.
    pub fn validate(&self) -> Result<(), CorpusError> {
        let expected = Self::new(self.total, self.empty, self.duplicates)?
            .with_missing(self.missing)?;
        if expected.cleaned != self.cleaned {
            return Err(CorpusError::ArithmeticInconsistency(format!(
                "cleaned is {} but total - empty - duplicates = {}",
                self.cleaned, expected.cleaned
            )));
        }
        Ok(())
    }

    /// Number of records removed by cleaning
    pub fn removed(&self) -> usize {
        self.empty + self.duplicates
    }

    /// `part` as a percentage of `total`, 0.0 for an empty corpus
    pub fn percent_of_total(&self, part: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            part as f64 / self.total as f64 * 100.0
        }
    }
}

/// Counts plus the context needed to reproduce them; this is what
/// gets written to `<corpus>_cleaning.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningReport {
    pub corpus: String,
    pub policy: NormalizationPolicy,
    pub counts: CleaningCounts,
}

impl CleaningReport {
    pub fn new(corpus: impl Into<String>, policy: NormalizationPolicy, counts: CleaningCounts) -> Self {
        Self {
            corpus: corpus.into(),
            policy,
            counts,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_original_corpus_figures() {
        let c = CleaningCounts::new(44_001, 85, 2_009).unwrap();
        assert_eq!(c.cleaned, 41_907);
        assert_eq!(c.removed(), 2_094);
    }

    #[test]
    fn test_combined_corpus_figures() {
        let c = CleaningCounts::new(58_812, 4_154, 6_670).unwrap();
        assert_eq!(c.cleaned, 47_988);
    }

    #[test]
    fn test_overdrawn_counts_are_rejected() {
        let err = CleaningCounts::new(10, 6, 5).unwrap_err();
        assert!(matches!(err, CorpusError::ArithmeticInconsistency(_)));
    }

    #[test]
    fn test_overflowing_sum_is_rejected() {
        assert!(CleaningCounts::new(10, usize::MAX, 1).is_err());
    }

    #[test]
    fn test_missing_cannot_exceed_empty() {
        let c = CleaningCounts::new(10, 2, 0).unwrap();
        assert!(c.with_missing(2).is_ok());
        assert!(c.with_missing(3).is_err());
    }

    #[test]
    fn test_validate_catches_edited_cleaned() {
        let mut c = CleaningCounts::new(100, 10, 5).unwrap();
        assert!(c.validate().is_ok());
        c.cleaned = 90;
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_percent_of_empty_corpus_is_zero() {
        let c = CleaningCounts::new(0, 0, 0).unwrap();
        assert_eq!(c.cleaned, 0);
        assert_eq!(c.percent_of_total(0), 0.0);
    }

    #[test]
    fn test_report_json_shape() {
        let counts = CleaningCounts::new(4, 1, 1).unwrap();
        let report = CleaningReport::new("original", NormalizationPolicy::Trim, counts);
        let json   = serde_json::to_value(&report).unwrap();
        assert_eq!(json["policy"], "trim");
        assert_eq!(json["counts"]["cleaned"], 2);
    }
}
