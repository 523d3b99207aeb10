// ============================================================
// Layer 3 — Corpus Comparison
// ============================================================
// Relates the cleaning counts of the Original corpus (O) and the
// Original+Augmented corpus (C) to find out how much the
// augmented-only portion contributed before and after cleaning.
//
//   augmented_raw     = C.total   - O.total
//   augmented_cleaned = C.cleaned - O.cleaned
//   size_reduction    = augmented_raw - augmented_cleaned
//   removed_delta     = (C.duplicates - O.duplicates) + (C.empty - O.empty)
//
// Because both counts satisfy cleaned = total - empty - duplicates,
// size_reduction == removed_delta holds exactly. All subtractions
// are checked; a combined corpus smaller than the original in any
// category is an ArithmeticInconsistency.

use serde::{Deserialize, Serialize};

use crate::domain::counts::CleaningCounts;
use crate::domain::error::CorpusError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusComparison {
    pub original: CleaningCounts,
    pub combined: CleaningCounts,

    pub augmented_raw:      usize,
    pub augmented_cleaned:  usize,
    pub size_reduction:     usize,
    pub extra_duplicates:   usize,
    pub extra_empty:        usize,
}

impl CorpusComparison {
    pub fn new(original: CleaningCounts, combined: CleaningCounts) -> Result<Self, CorpusError> {
        original.validate()?;
        combined.validate()?;

        let augmented_raw     = sub("total", combined.total, original.total)?;
        let augmented_cleaned = sub("cleaned", combined.cleaned, original.cleaned)?;
        let size_reduction    = sub("augmented size", augmented_raw, augmented_cleaned)?;
        let extra_duplicates  = sub("duplicates", combined.duplicates, original.duplicates)?;
        let extra_empty       = sub("empty", combined.empty, original.empty)?;

        Ok(Self {
            original,
            combined,
            augmented_raw,
            augmented_cleaned,
            size_reduction,
            extra_duplicates,
            extra_empty,
        })
    }

    /// Records removed by cleaning that are attributable to augmentation
    pub fn removed_delta(&self) -> usize {
        self.extra_duplicates + self.extra_empty
    }

    /// The cross-check from the cleaning notes: the shrinkage of the
    /// augmented portion equals the growth in removed records.
    pub fn is_consistent(&self) -> bool {
        self.size_reduction == self.removed_delta()
    }
}

fn sub(what: &str, combined: usize, original: usize) -> Result<usize, CorpusError> {
    combined.checked_sub(original).ok_or_else(|| {
        CorpusError::ArithmeticInconsistency(format!(
            "combined {what} ({combined}) is smaller than original {what} ({original})"
        ))
    })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn research_pair() -> CorpusComparison {
        let original = CleaningCounts::new(44_001, 85, 2_009).unwrap();
        let combined = CleaningCounts::new(58_812, 4_154, 6_670).unwrap();
        CorpusComparison::new(original, combined).unwrap()
    }

    #[test]
    fn test_augmented_contribution() {
        let cmp = research_pair();
        assert_eq!(cmp.augmented_raw, 14_811);
        assert_eq!(cmp.augmented_cleaned, 6_081);
        assert_eq!(cmp.size_reduction, 8_730);
    }

    #[test]
    fn test_cross_check_matches() {
        let cmp = research_pair();
        assert_eq!(cmp.extra_duplicates, 4_661);
        assert_eq!(cmp.extra_empty, 4_069);
        assert_eq!(cmp.removed_delta(), 8_730);
        assert!(cmp.is_consistent());
    }

    #[test]
    fn test_combined_smaller_than_original_is_rejected() {
        let original = CleaningCounts::new(100, 0, 0).unwrap();
        let combined = CleaningCounts::new(50, 0, 0).unwrap();
        let err      = CorpusComparison::new(original, combined).unwrap_err();
        assert!(matches!(err, CorpusError::ArithmeticInconsistency(_)));
    }

    #[test]
    fn test_fewer_empties_in_combined_is_rejected() {
        // Augmentation only adds records, so no category may shrink
        let original = CleaningCounts::new(100, 10, 0).unwrap();
        let combined = CleaningCounts::new(120, 5, 0).unwrap();
        assert!(CorpusComparison::new(original, combined).is_err());
    }

    #[test]
    fn test_invalid_counts_are_rejected() {
        let mut original = CleaningCounts::new(100, 10, 0).unwrap();
        original.cleaned = 1;
        let combined = CleaningCounts::new(120, 10, 0).unwrap();
        assert!(CorpusComparison::new(original, combined).is_err());
    }
}
