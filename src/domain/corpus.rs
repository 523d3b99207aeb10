// ============================================================
// Layer 3 — Corpus Domain Type
// ============================================================
// A named, ordered sequence of TextRecords. Two corpora matter
// to the research project: "original" and "original+augmented".
// They are always processed independently of each other.

use serde::{Deserialize, Serialize};

use crate::domain::record::TextRecord;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    /// Friendly name used in reports and output file names
    pub name: String,

    /// Records in source order
    pub records: Vec<TextRecord>,
}

impl Corpus {
    pub fn new(name: impl Into<String>, records: Vec<TextRecord>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    /// Build an unlabelled corpus from plain strings, numbering lines from 1.
    pub fn from_texts<I, S>(name: impl Into<String>, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let records = texts
            .into_iter()
            .enumerate()
            .map(|(i, t)| TextRecord::new(t, i + 1))
            .collect();
        Self::new(name, records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TextRecord> {
        self.records.iter()
    }

    /// True when at least one record carries a class label
    pub fn is_labelled(&self) -> bool {
        self.records.iter().any(|r| r.label.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_texts_numbers_lines() {
        let c = Corpus::from_texts("original", ["এক", "দুই", ""]);
        assert_eq!(c.len(), 3);
        assert_eq!(c.records[0].line, 1);
        assert_eq!(c.records[2].line, 3);
        assert!(!c.is_labelled());
    }

    #[test]
    fn test_empty_corpus() {
        let c = Corpus::default();
        assert!(c.is_empty());
    }
}
