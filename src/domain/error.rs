// ============================================================
// Layer 3 — Domain Errors
// ============================================================
// Only two things can go wrong in the counting procedure:
//   1. a record in structured input is not text
//   2. the counts do not add up (e.g. empty + duplicates > total)
//
// Outer layers wrap these in anyhow::Error with path context.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CorpusError {
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Arithmetic inconsistency: {0}")]
    ArithmeticInconsistency(String),
}

impl CorpusError {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}
