// ============================================================
// Layer 6 — Cleaning Run Log
// ============================================================
// Appends one CSV row per cleaning run so the numbers quoted in
// the project README can be traced back to a concrete run.
//
// Output file: <report_dir>/cleaning_log.csv
//
// Example CSV output:
//   corpus,policy,total,missing,empty,duplicates,cleaned
//   original,collapse,44001,0,85,2009,41907
//   original_augmented,collapse,58812,0,4154,6670,47988
//
// The corpus name comes from a file stem; commas or quotes in it
// are escaped the CSV way so the row stays parseable.

use anyhow::{Context, Result};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::domain::counts::CleaningReport;

const HEADER: &str = "corpus,policy,total,missing,empty,duplicates,cleaned";

pub struct RunLog {
    /// Full path to the CSV file
    csv_path: PathBuf,
}

impl RunLog {
    /// Open (or create) `cleaning_log.csv` inside `dir`.
    /// Writes the header when the file is new or empty.
    pub fn new(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create log directory '{}'", dir.display()))?;
        let csv_path = dir.join("cleaning_log.csv");

        let has_rows = fs::metadata(&csv_path).map(|m| m.len() > 0).unwrap_or(false);
        if !has_rows {
            let mut f = fs::File::create(&csv_path)
                .with_context(|| format!("Cannot create '{}'", csv_path.display()))?;
            writeln!(f, "{HEADER}")?;
            tracing::debug!("Created run log: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    /// Append one row for `report`.
    pub fn append(&self, report: &CleaningReport) -> Result<()> {
        let mut f = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)
            .with_context(|| format!("Cannot open '{}'", self.csv_path.display()))?;

        let c = &report.counts;
        writeln!(
            f,
            "{},{},{},{},{},{},{}",
            csv_field(&report.corpus),
            report.policy,
            c.total,
            c.missing,
            c.empty,
            c.duplicates,
            c.cleaned,
        )?;

        Ok(())
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
