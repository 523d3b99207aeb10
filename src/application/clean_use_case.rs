// ============================================================
// Layer 2 — CleanUseCase
// ============================================================
// Orchestrates one cleaning run:
//
//   Step 1: Load the corpus              (Layer 4 - data)
//   Step 2: Drop empty, then duplicates  (Layer 4 - data)
//   Step 3: Write the cleaned corpus     (Layer 6 - infra)
//   Step 4: Save report + config JSON    (Layer 6 - infra)
//   Step 5: Append to the run log        (Layer 6 - infra)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::data::cleaner::CorpusCleaner;
use crate::data::loader::{self, DEFAULT_LABEL_FIELD, DEFAULT_TEXT_FIELD};
use crate::domain::counts::CleaningReport;
use crate::domain::policy::NormalizationPolicy;
use crate::domain::traits::RecordSink;
use crate::infra::{
    corpus_writer::{JsonlWriter, LineWriter},
    report_store::ReportStore,
    run_log::RunLog,
};

// ─── Clean Configuration ──────────────────────────────────────────────────────
// Serialisable so the exact settings of a run are saved next to
// its report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanConfig {
    pub input:       String,
    /// Cleaned corpus destination; defaults to `<report_dir>/<name>_cleaned.<ext>`
    pub output:      Option<String>,
    pub report_dir:  String,
    /// Corpus name; defaults to the input file stem
    pub name:        Option<String>,
    pub policy:      NormalizationPolicy,
    pub text_field:  String,
    pub label_field: String,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            input:       "data/original.jsonl".to_string(),
            output:      None,
            report_dir:  "reports".to_string(),
            name:        None,
            policy:      NormalizationPolicy::default(),
            text_field:  DEFAULT_TEXT_FIELD.to_string(),
            label_field: DEFAULT_LABEL_FIELD.to_string(),
        }
    }
}

impl CleanConfig {
    pub fn corpus_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| loader::corpus_name(Path::new(&self.input)))
    }

    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(out) => PathBuf::from(out),
            None => {
                let ext = if loader::is_jsonl(Path::new(&self.input)) { "jsonl" } else { "txt" };
                Path::new(&self.report_dir).join(format!("{}_cleaned.{ext}", self.corpus_name()))
            }
        }
    }
}

/// What a finished run produced
#[derive(Debug, Clone)]
pub struct CleanSummary {
    pub report:      CleaningReport,
    pub output_path: PathBuf,
    pub report_path: PathBuf,
    /// Saved config, replayable with `rerun --config`
    pub config_path: PathBuf,
}

pub struct CleanUseCase {
    config: CleanConfig,
}

impl CleanUseCase {
    pub fn new(config: CleanConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<CleanSummary> {
        let cfg  = &self.config;
        let name = cfg.corpus_name();
        let input = Path::new(&cfg.input);

        // ── Step 1: Load ──────────────────────────────────────────────────────
        tracing::info!("Loading corpus '{}' from '{}'", name, cfg.input);
        let corpus = loader::open_source(input, &name, &cfg.text_field, &cfg.label_field).load()?;
        if corpus.is_empty() {
            tracing::warn!("Corpus '{}' has no records", name);
        }

        // ── Step 2: Clean ─────────────────────────────────────────────────────
        let cleaner = CorpusCleaner::new(cfg.policy);
        let outcome = cleaner
            .clean(&corpus)
            .with_context(|| format!("Cleaning '{}' failed", cfg.input))?;
        let counts = outcome.counts;
        tracing::info!(
            "'{}': {} records, {} empty, {} duplicates → {} kept",
            name,
            counts.total,
            counts.empty,
            counts.duplicates,
            counts.cleaned,
        );

        // ── Step 3: Write cleaned corpus ──────────────────────────────────────
        let output_path = cfg.output_path();
        let sink: Box<dyn RecordSink> = if loader::is_jsonl(input) {
            Box::new(JsonlWriter::new(&output_path, &cfg.text_field, &cfg.label_field))
        } else {
            Box::new(LineWriter::new(&output_path))
        };
        sink.write(&outcome.cleaned)?;
        tracing::info!("Wrote cleaned corpus to '{}'", output_path.display());

        // ── Step 4: Persist report and config ─────────────────────────────────
        let report = CleaningReport::new(&name, cleaner.policy(), counts);
        let store  = ReportStore::new(&cfg.report_dir)?;
        let report_path = store.save_report(&report)?;
        let config_path = store.save_config(&name, cfg)?;

        // ── Step 5: Run log ───────────────────────────────────────────────────
        let log = RunLog::new(store.dir())?;
        log.append(&report)?;
        tracing::debug!("Appended run to '{}'", log.csv_path().display());

        Ok(CleanSummary {
            report,
            output_path,
            report_path,
            config_path,
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::report_store::{load_config, load_report};
    use std::fs;

    #[test]
    fn test_clean_plain_text_end_to_end() {
        let dir   = tempfile::tempdir().unwrap();
        let input = dir.path().join("original.txt");
        fs::write(&input, "ক\n\nখ\nক\n  খ \n\n").unwrap();

        let cfg = CleanConfig {
            input:      input.to_string_lossy().into_owned(),
            report_dir: dir.path().join("reports").to_string_lossy().into_owned(),
            ..CleanConfig::default()
        };
        let summary = CleanUseCase::new(cfg).execute().unwrap();

        let c = summary.report.counts;
        assert_eq!((c.total, c.empty, c.duplicates, c.cleaned), (6, 2, 2, 2));
        assert_eq!(summary.report.corpus, "original");

        assert_eq!(fs::read_to_string(&summary.output_path).unwrap(), "ক\nখ\n");
        assert!(summary.output_path.ends_with("original_cleaned.txt"));
        assert_eq!(load_report(&summary.report_path).unwrap(), summary.report);
        assert!(dir.path().join("reports/cleaning_log.csv").exists());
        assert!(dir.path().join("reports/original_config.json").exists());
    }

    #[test]
    fn test_clean_jsonl_with_explicit_output() {
        let dir   = tempfile::tempdir().unwrap();
        let input = dir.path().join("combined.jsonl");
        fs::write(
            &input,
            "{\"text\": \"গালি\", \"label\": \"troll\"}\n\
             {\"text\": null, \"label\": \"troll\"}\n\
             {\"text\": \"গালি\", \"label\": \"sexual\"}\n",
        )
        .unwrap();
        let output = dir.path().join("out.jsonl");

        let cfg = CleanConfig {
            input:      input.to_string_lossy().into_owned(),
            output:     Some(output.to_string_lossy().into_owned()),
            report_dir: dir.path().to_string_lossy().into_owned(),
            name:       Some("augmented".into()),
            ..CleanConfig::default()
        };
        let summary = CleanUseCase::new(cfg).execute().unwrap();

        let c = summary.report.counts;
        assert_eq!((c.total, c.empty, c.missing, c.duplicates, c.cleaned), (3, 1, 1, 1, 1));
        let written = fs::read_to_string(&output).unwrap();
        let lines: Vec<serde_json::Value> = written
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines, vec![serde_json::json!({"text": "গালি", "label": "troll"})]);
    }

    #[test]
    fn test_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = CleanConfig {
            input:      dir.path().join("nope.txt").to_string_lossy().into_owned(),
            report_dir: dir.path().to_string_lossy().into_owned(),
            ..CleanConfig::default()
        };
        assert!(CleanUseCase::new(cfg).execute().is_err());
    }

    #[test]
    fn test_clean_jsonl_keeps_every_column() {
        let dir   = tempfile::tempdir().unwrap();
        let input = dir.path().join("original.jsonl");
        fs::write(
            &input,
            "{\"id\": 7, \"text\": \"গালি\", \"label\": 1, \"gender\": \"f\"}\n\
             {\"id\": 8, \"text\": \"গালি \", \"label\": 0, \"gender\": \"m\"}\n",
        )
        .unwrap();

        let cfg = CleanConfig {
            input:      input.to_string_lossy().into_owned(),
            report_dir: dir.path().to_string_lossy().into_owned(),
            ..CleanConfig::default()
        };
        let summary = CleanUseCase::new(cfg).execute().unwrap();

        let written: Vec<serde_json::Value> = fs::read_to_string(&summary.output_path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(
            written,
            vec![serde_json::json!({"id": 7, "text": "গালি", "label": 1, "gender": "f"})]
        );
    }

    #[test]
    fn test_rerun_from_saved_config_reproduces_run() {
        let dir   = tempfile::tempdir().unwrap();
        let input = dir.path().join("original.txt");
        fs::write(&input, "ক\n\nখ\nক\n\u{00A0}খ\n").unwrap();

        let cfg = CleanConfig {
            input:      input.to_string_lossy().into_owned(),
            report_dir: dir.path().join("reports").to_string_lossy().into_owned(),
            policy:     NormalizationPolicy::Collapse,
            ..CleanConfig::default()
        };
        let first        = CleanUseCase::new(cfg).execute().unwrap();
        let first_output = fs::read_to_string(&first.output_path).unwrap();
        assert!(first.config_path.ends_with("original_config.json"));

        let replayed = load_config(&first.config_path).unwrap();
        let second   = CleanUseCase::new(replayed).execute().unwrap();

        assert_eq!(second.report, first.report);
        assert_eq!(second.output_path, first.output_path);
        assert_eq!(fs::read_to_string(&second.output_path).unwrap(), first_output);

        // one header plus one row per run
        let log = fs::read_to_string(dir.path().join("reports/cleaning_log.csv")).unwrap();
        assert_eq!(log.lines().count(), 3);
    }
}
