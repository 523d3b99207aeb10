// ============================================================
// Layer 6 — Report Store
// ============================================================
// Saves and restores cleaning reports and run configurations
// as pretty-printed JSON.
//
// File naming convention:
//   reports/
//     original_cleaning.json             ← CleaningReport
//     original_config.json               ← CleanConfig used for the run,
//                                          replayed by `rerun --config`
//     original_augmented_cleaning.json
//     original_augmented_config.json
//     cleaning_log.csv                   ← see run_log.rs
//
// Saved reports can be fed back into `compare --from-reports`
// so the two large corpora do not have to be re-read.
//
// Reference: serde_json documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{fs, path::{Path, PathBuf}};

use crate::application::clean_use_case::CleanConfig;
use crate::domain::counts::CleaningReport;

pub struct ReportStore {
    /// Directory where reports are stored
    dir: PathBuf,
}

impl ReportStore {
    /// Create a new ReportStore, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create report directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn report_path(&self, corpus: &str) -> PathBuf {
        self.dir.join(format!("{corpus}_cleaning.json"))
    }

    pub fn config_path(&self, corpus: &str) -> PathBuf {
        self.dir.join(format!("{corpus}_config.json"))
    }

    /// Write `<corpus>_cleaning.json`, returning its path.
    pub fn save_report(&self, report: &CleaningReport) -> Result<PathBuf> {
        let path = self.report_path(&report.corpus);
        let json = serde_json::to_string_pretty(report)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write report to '{}'", path.display()))?;

        tracing::debug!("Saved cleaning report to '{}'", path.display());
        Ok(path)
    }

    /// Save the configuration a run used so it can be reproduced.
    pub fn save_config(&self, corpus: &str, cfg: &CleanConfig) -> Result<PathBuf> {
        let path = self.config_path(corpus);
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved run config to '{}'", path.display());
        Ok(path)
    }
}

/// Load a `<corpus>_config.json` written by an earlier run.
pub fn load_config(path: &Path) -> Result<CleanConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config from '{}'", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Invalid config in '{}'", path.display()))
}

/// Load a saved report from any path and re-check its counts.
///
/// Reports are plain JSON and may have been edited by hand, so
/// the cleaning invariant is verified rather than trusted.
pub fn load_report(path: &Path) -> Result<CleaningReport> {
    let json = fs::read_to_string(path)
        .with_context(|| {
            format!(
                "Cannot read report '{}'. Run 'clean' on that corpus first.",
                path.display()
            )
        })?;

    let report: CleaningReport = serde_json::from_str(&json)
        .with_context(|| format!("Invalid report JSON in '{}'", path.display()))?;

    report
        .counts
        .validate()
        .with_context(|| format!("Report '{}' is inconsistent", path.display()))?;

    Ok(report)
}
