// ============================================================
// Layer 4 — Corpus Loaders
// ============================================================
// Reads a corpus file into TextRecords.
//
// Two formats are supported:
//
//   .jsonl  one JSON object per line, e.g.
//             {"text": "তুই একটা বলদ", "label": "troll"}
//           The text/label field names are configurable.
//
//   other   plain text, one record per line (.txt, .tsv dumps...)
//           A blank line is an empty record, not a skipped one,
//           because empty records are exactly what gets counted.
//
// JSON value handling for the text field:
//   string        → text
//   number / bool → its JSON rendering ("42", "true")
//   null / absent → missing record
//   array/object  → MalformedRecord error naming the line
//
// Reference: serde_json documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::{fs, path::{Path, PathBuf}};

use crate::domain::corpus::Corpus;
use crate::domain::error::CorpusError;
use crate::domain::record::TextRecord;
use crate::domain::traits::RecordSource;

pub const DEFAULT_TEXT_FIELD: &str = "text";
pub const DEFAULT_LABEL_FIELD: &str = "label";

// ─── Plain text ───────────────────────────────────────────────────────────────
/// One record per line.
pub struct LineLoader {
    path: PathBuf,
    name: String,
}

impl LineLoader {
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }
}

impl RecordSource for LineLoader {
    fn load(&self) -> Result<Corpus> {
        let content = read_corpus_file(&self.path)?;

        // str::lines() handles both \n and \r\n, and does not yield
        // a phantom record for the final newline
        let corpus = Corpus::from_texts(&self.name, content.lines());

        tracing::debug!("Read {} lines from '{}'", corpus.len(), self.path.display());
        Ok(corpus)
    }
}

// ─── JSON Lines ───────────────────────────────────────────────────────────────
/// One JSON object per line; blank lines are skipped.
pub struct JsonlLoader {
    path:        PathBuf,
    name:        String,
    text_field:  String,
    label_field: String,
}

impl JsonlLoader {
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            path:        path.into(),
            name:        name.into(),
            text_field:  DEFAULT_TEXT_FIELD.to_string(),
            label_field: DEFAULT_LABEL_FIELD.to_string(),
        }
    }

    /// Override the column names, mirroring `text_column_name` /
    /// `label_column_name` in the research notebooks
    pub fn with_fields(mut self, text_field: impl Into<String>, label_field: impl Into<String>) -> Self {
        self.text_field  = text_field.into();
        self.label_field = label_field.into();
        self
    }

    fn parse_line(&self, line_no: usize, line: &str) -> Result<TextRecord, CorpusError> {
        let value: Value = serde_json::from_str(line)
            .map_err(|e| CorpusError::malformed(line_no, format!("invalid JSON: {e}")))?;

        let Value::Object(obj) = value else {
            return Err(CorpusError::malformed(line_no, "expected a JSON object"));
        };

        let text  = field_as_text(&obj, &self.text_field, line_no)?;
        let label = field_as_text(&obj, &self.label_field, line_no)?;

        let record = match text {
            Some(t) => TextRecord::new(t, line_no),
            None    => TextRecord::missing(line_no),
        };
        let record = match label {
            Some(l) => record.with_label(l),
            None    => record,
        };
        Ok(record.with_raw(obj))
    }
}

impl RecordSource for JsonlLoader {
    fn load(&self) -> Result<Corpus> {
        let content = read_corpus_file(&self.path)?;
        let mut records = Vec::new();

        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record = self
                .parse_line(i + 1, line)
                .with_context(|| format!("Cannot parse '{}'", self.path.display()))?;
            records.push(record);
        }

        tracing::debug!("Parsed {} JSON records from '{}'", records.len(), self.path.display());
        Ok(Corpus::new(&self.name, records))
    }
}

/// Extract `field` from a JSON object as optional text.
fn field_as_text(obj: &Map<String, Value>, field: &str, line: usize) -> Result<Option<String>, CorpusError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s))   => Ok(Some(s.clone())),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => Ok(Some(v.to_string())),
        Some(_) => Err(CorpusError::malformed(
            line,
            format!("field '{field}' is not text"),
        )),
    }
}

fn read_corpus_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Cannot read corpus file '{}'", path.display()))
}

// ─── Dispatch ─────────────────────────────────────────────────────────────────
/// True when `path` should be read as JSON Lines
pub fn is_jsonl(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("jsonl"))
        .unwrap_or(false)
}

/// Pick a loader from the file extension.
pub fn open_source(
    path:        &Path,
    name:        &str,
    text_field:  &str,
    label_field: &str,
) -> Box<dyn RecordSource> {
    if is_jsonl(path) {
        Box::new(JsonlLoader::new(path, name).with_fields(text_field, label_field))
    } else {
        Box::new(LineLoader::new(path, name))
    }
}

/// Corpus name derived from the file stem, e.g. "original.jsonl" → "original"
pub fn corpus_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("corpus")
        .to_string()
}
