// ============================================================
// Layer 4 — Corpus Cleaner
// ============================================================
// The counting procedure at the centre of the tool. One pass,
// in source order:
//
//   1. missing text          → counted as empty (and missing)
//   2. key normalises to ""  → counted as empty
//   3. key seen before       → counted as duplicate
//   4. otherwise             → kept, key remembered
//
// Empties never reach the duplicate check, so the two counts are
// disjoint and cleaned = total - empty - duplicates exactly.
// The first occurrence of every key survives with its original
// (un-normalised) text.

use std::collections::HashSet;

use crate::data::normalizer::KeyNormalizer;
use crate::domain::corpus::Corpus;
use crate::domain::counts::CleaningCounts;
use crate::domain::error::CorpusError;
use crate::domain::policy::NormalizationPolicy;

/// Cleaned corpus together with the bookkeeping that produced it
#[derive(Debug, Clone)]
pub struct CleaningOutcome {
    pub counts:  CleaningCounts,
    pub cleaned: Corpus,
}

pub struct CorpusCleaner {
    normalizer: KeyNormalizer,
}

impl CorpusCleaner {
    pub fn new(policy: NormalizationPolicy) -> Self {
        Self {
            normalizer: KeyNormalizer::new(policy),
        }
    }

    pub fn policy(&self) -> NormalizationPolicy {
        self.normalizer.policy()
    }

    /// Remove empty and duplicate records from `corpus`.
    pub fn clean(&self, corpus: &Corpus) -> Result<CleaningOutcome, CorpusError> {
        let mut seen: HashSet<String> = HashSet::with_capacity(corpus.len());
        let mut kept    = Vec::with_capacity(corpus.len());
        let mut empty   = 0usize;
        let mut missing = 0usize;
        let mut dups    = 0usize;

        for record in corpus.iter() {
            let Some(text) = record.text.as_deref() else {
                missing += 1;
                empty   += 1;
                continue;
            };

            let key = self.normalizer.key(text);
            if key.is_empty() {
                empty += 1;
                continue;
            }

            if seen.contains(&*key) {
                dups += 1;
                continue;
            }

            seen.insert(key.into_owned());
            kept.push(record.clone());
        }

        let counts = CleaningCounts::new(corpus.len(), empty, dups)?.with_missing(missing)?;

        tracing::debug!(
            "Cleaned '{}': {} total, {} empty ({} missing), {} duplicates, {} kept",
            corpus.name,
            counts.total,
            counts.empty,
            counts.missing,
            counts.duplicates,
            counts.cleaned,
        );

        Ok(CleaningOutcome {
            counts,
            cleaned: Corpus::new(&corpus.name, kept),
        })
    }

    /// Counts only, for callers that do not need the cleaned records.
    pub fn count(&self, corpus: &Corpus) -> Result<CleaningCounts, CorpusError> {
        self.clean(corpus).map(|outcome| outcome.counts)
    }
}

impl Default for CorpusCleaner {
    fn default() -> Self {
        Self::new(NormalizationPolicy::default())
    }
}
