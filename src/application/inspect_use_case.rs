// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Read-only audit of a corpus: quality figures before cleaning,
// length distribution, and class balance when labels exist.
// Nothing is written to disk.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::data::loader::{self, DEFAULT_LABEL_FIELD, DEFAULT_TEXT_FIELD};
use crate::data::quality::{analyze_quality, QualityReport, DEFAULT_TOP_N};
use crate::data::stats::{class_distribution, length_stats, ClassShare, LengthStats};
use crate::domain::policy::NormalizationPolicy;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectConfig {
    pub input:       String,
    pub policy:      NormalizationPolicy,
    pub top_n:       usize,
    pub text_field:  String,
    pub label_field: String,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            input:       "data/original.jsonl".to_string(),
            policy:      NormalizationPolicy::default(),
            top_n:       DEFAULT_TOP_N,
            text_field:  DEFAULT_TEXT_FIELD.to_string(),
            label_field: DEFAULT_LABEL_FIELD.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct InspectSummary {
    pub quality: QualityReport,
    pub lengths: Option<LengthStats>,
    pub classes: Vec<ClassShare>,
}

pub struct InspectUseCase {
    config: InspectConfig,
}

impl InspectUseCase {
    pub fn new(config: InspectConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<InspectSummary> {
        let cfg   = &self.config;
        let input = Path::new(&cfg.input);
        let name  = loader::corpus_name(input);

        let corpus = loader::open_source(input, &name, &cfg.text_field, &cfg.label_field).load()?;
        tracing::info!("Inspecting '{}' ({} records)", name, corpus.len());
        if corpus.is_empty() {
            tracing::warn!("Corpus '{}' has no records", name);
        }

        let quality = analyze_quality(&corpus, cfg.policy, cfg.top_n);
        let lengths = length_stats(&corpus);
        let classes = if corpus.is_labelled() {
            class_distribution(&corpus)
        } else {
            Vec::new()
        };

        Ok(InspectSummary { quality, lengths, classes })
    }
}
