// ============================================================
// Layer 2 — CompareUseCase
// ============================================================
// Works out what augmentation contributed:
//
//   Step 1: Obtain counts for the Original corpus
//   Step 2: Obtain counts for the Original+Augmented corpus
//   Step 3: Derive augmented-only figures and cross-check them
//
// Counts come either from corpus files (cleaned in memory, no
// output written) or from `<corpus>_cleaning.json` reports saved
// by an earlier `clean` run.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::data::cleaner::CorpusCleaner;
use crate::data::loader::{self, DEFAULT_LABEL_FIELD, DEFAULT_TEXT_FIELD};
use crate::domain::comparison::CorpusComparison;
use crate::domain::counts::CleaningReport;
use crate::domain::policy::NormalizationPolicy;
use crate::infra::report_store::load_report;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareConfig {
    pub original:     String,
    pub combined:     String,
    /// Treat both paths as saved cleaning reports instead of corpora
    pub from_reports: bool,
    pub policy:       NormalizationPolicy,
    pub text_field:   String,
    pub label_field:  String,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            original:     "data/original.jsonl".to_string(),
            combined:     "data/original_augmented.jsonl".to_string(),
            from_reports: false,
            policy:       NormalizationPolicy::default(),
            text_field:   DEFAULT_TEXT_FIELD.to_string(),
            label_field:  DEFAULT_LABEL_FIELD.to_string(),
        }
    }
}

pub struct CompareUseCase {
    config: CompareConfig,
}

impl CompareUseCase {
    pub fn new(config: CompareConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<CorpusComparison> {
        let cfg = &self.config;

        let original = self.obtain(&cfg.original)?;
        let combined = self.obtain(&cfg.combined)?;

        if original.policy != combined.policy {
            tracing::warn!(
                "Reports use different normalisation policies ({} vs {}); figures may not be comparable",
                original.policy,
                combined.policy,
            );
        }

        let cmp = CorpusComparison::new(original.counts, combined.counts)
            .with_context(|| format!("Cannot compare '{}' with '{}'", cfg.original, cfg.combined))?;

        if !cmp.is_consistent() {
            // Cannot happen for validated counts
            tracing::warn!(
                "Size reduction {} does not match removed delta {}",
                cmp.size_reduction,
                cmp.removed_delta(),
            );
        }

        tracing::info!(
            "Augmented-only: {} raw, {} after cleaning ({} removed)",
            cmp.augmented_raw,
            cmp.augmented_cleaned,
            cmp.size_reduction,
        );
        Ok(cmp)
    }

    fn obtain(&self, path: &str) -> Result<CleaningReport> {
        let cfg = &self.config;
        let p   = Path::new(path);

        if cfg.from_reports {
            return load_report(p);
        }

        let name   = loader::corpus_name(p);
        let corpus = loader::open_source(p, &name, &cfg.text_field, &cfg.label_field).load()?;
        let counts = CorpusCleaner::new(cfg.policy)
            .count(&corpus)
            .with_context(|| format!("Cleaning '{path}' failed"))?;

        tracing::debug!("Counted '{}': {:?}", name, counts);
        Ok(CleaningReport::new(name, cfg.policy, counts))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::counts::CleaningCounts;
    use crate::infra::report_store::ReportStore;
    use std::fs;

    #[test]
    fn test_compare_from_saved_reports() {
        let dir   = tempfile::tempdir().unwrap();
        let store = ReportStore::new(dir.path()).unwrap();
        let policy = NormalizationPolicy::Collapse;

        let o = store
            .save_report(&CleaningReport::new(
                "original",
                policy,
                CleaningCounts::new(44_001, 85, 2_009).unwrap(),
            ))
            .unwrap();
        let c = store
            .save_report(&CleaningReport::new(
                "original_augmented",
                policy,
                CleaningCounts::new(58_812, 4_154, 6_670).unwrap(),
            ))
            .unwrap();

        let cfg = CompareConfig {
            original:     o.to_string_lossy().into_owned(),
            combined:     c.to_string_lossy().into_owned(),
            from_reports: true,
            ..CompareConfig::default()
        };
        let cmp = CompareUseCase::new(cfg).execute().unwrap();

        assert_eq!(cmp.augmented_raw, 14_811);
        assert_eq!(cmp.augmented_cleaned, 6_081);
        assert_eq!(cmp.size_reduction, 8_730);
        assert_eq!(cmp.removed_delta(), 8_730);
    }

    #[test]
    fn test_compare_corpus_files() {
        let dir      = tempfile::tempdir().unwrap();
        let original = dir.path().join("original.txt");
        let combined = dir.path().join("combined.txt");
        fs::write(&original, "ক\nখ\nক\n\n").unwrap();
        // augmentation adds one new text, one repeat, one blank
        fs::write(&combined, "ক\nখ\nক\n\nগ\nখ\n\n").unwrap();

        let cfg = CompareConfig {
            original: original.to_string_lossy().into_owned(),
            combined: combined.to_string_lossy().into_owned(),
            ..CompareConfig::default()
        };
        let cmp = CompareUseCase::new(cfg).execute().unwrap();

        assert_eq!(cmp.augmented_raw, 3);
        assert_eq!(cmp.augmented_cleaned, 1);
        assert_eq!(cmp.size_reduction, 2);
        assert!(cmp.is_consistent());
    }

    #[test]
    fn test_combined_smaller_than_original_fails() {
        let dir      = tempfile::tempdir().unwrap();
        let original = dir.path().join("original.txt");
        let combined = dir.path().join("combined.txt");
        fs::write(&original, "ক\nখ\nগ\n").unwrap();
        fs::write(&combined, "ক\n").unwrap();

        let cfg = CompareConfig {
            original: original.to_string_lossy().into_owned(),
            combined: combined.to_string_lossy().into_owned(),
            ..CompareConfig::default()
        };
        let err = CompareUseCase::new(cfg).execute().unwrap_err();
        assert!(format!("{err:#}").contains("Arithmetic inconsistency"));
    }
}
