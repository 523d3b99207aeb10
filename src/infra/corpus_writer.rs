// ============================================================
// Layer 6 — Corpus Writers
// ============================================================
// Persist a cleaned corpus in the same format it was read from.
//
//   LineWriter  — one text per line. Newlines inside a record are
//                 replaced by spaces, otherwise re-reading the file
//                 would split one record into several.
//   JsonlWriter — one JSON object per line. Records read from
//                 .jsonl are written back as their source object,
//                 every column and value type intact; others get
//                 a {"text": .., "label": ..} object built from
//                 the configured field names.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::domain::corpus::Corpus;
use crate::domain::record::TextRecord;
use crate::domain::traits::RecordSink;

pub struct LineWriter {
    path: PathBuf,
}

impl LineWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSink for LineWriter {
    fn write(&self, corpus: &Corpus) -> Result<()> {
        let mut out = create(&self.path)?;
        for record in corpus.iter() {
            let line = record.text_or_empty().replace(['\r', '\n'], " ");
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        Ok(())
    }
}

pub struct JsonlWriter {
    path:        PathBuf,
    text_field:  String,
    label_field: String,
}

impl JsonlWriter {
    pub fn new(path: impl Into<PathBuf>, text_field: impl Into<String>, label_field: impl Into<String>) -> Self {
        Self {
            path:        path.into(),
            text_field:  text_field.into(),
            label_field: label_field.into(),
        }
    }
}

impl JsonlWriter {
    fn build_object(&self, record: &TextRecord) -> Map<String, Value> {
        let mut obj = Map::new();
        obj.insert(
            self.text_field.clone(),
            record.text.clone().map_or(Value::Null, Value::String),
        );
        if let Some(label) = &record.label {
            obj.insert(self.label_field.clone(), Value::String(label.clone()));
        }
        obj
    }
}

impl RecordSink for JsonlWriter {
    fn write(&self, corpus: &Corpus) -> Result<()> {
        let mut out = create(&self.path)?;
        for record in corpus.iter() {
            match &record.raw {
                Some(raw) => serde_json::to_writer(&mut out, raw)?,
                None      => serde_json::to_writer(&mut out, &self.build_object(record))?,
            }
            writeln!(out)?;
        }
        out.flush()?;
        Ok(())
    }
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create output directory '{}'", parent.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("Cannot create output file '{}'", path.display()))?;
    Ok(BufWriter::new(file))
}
