// ============================================================
// Layer 3 — TextRecord Domain Type
// ============================================================
// One line of Bangla text from a corpus, plus the optional class
// label that travels with it in labelled (.jsonl) datasets.
//
// `text` is an Option because structured sources can carry a
// null or absent text field. Such a record is "missing" and is
// tallied as a kind of empty record during cleaning.
//
// Records read from .jsonl keep the whole source object in `raw`,
// so ids, metadata columns and numeric labels are written back
// exactly as they were read.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRecord {
    /// Raw text exactly as read, `None` when the source had no value
    pub text: Option<String>,

    /// Class label (e.g. "troll", "sexual", "not bully"), if present
    pub label: Option<String>,

    /// 1-based line number in the source file, for error messages
    pub line: usize,

    /// Source JSON object, when the record came from structured input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<Map<String, Value>>,
}

impl TextRecord {
    /// Create a record with text and no label.
    ///
    /// Example:
    ///   let r = TextRecord::new("আমি তোমাকে চিনি", 1);
    pub fn new(text: impl Into<String>, line: usize) -> Self {
        Self {
            text:  Some(text.into()),
            label: None,
            line,
            raw:   None,
        }
    }

    /// Create a record whose text value was absent in the source
    pub fn missing(line: usize) -> Self {
        Self { text: None, label: None, line, raw: None }
    }

    /// Attach a class label, builder style
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Remember the JSON object this record was parsed from
    pub fn with_raw(mut self, raw: Map<String, Value>) -> Self {
        self.raw = Some(raw);
        self
    }

    pub fn is_missing(&self) -> bool {
        self.text.is_none()
    }

    /// Text as &str, treating a missing value as ""
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}
