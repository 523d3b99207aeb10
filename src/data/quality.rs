// ============================================================
// Layer 4 — Quality Audit
// ============================================================
// Describes a corpus BEFORE cleaning, the way a pandas
// `duplicated()` / `value_counts()` audit would:
//
//   - missing    records with no text
//   - empty      records whose key is "" (missing included)
//   - duplicates every record whose key already occurred,
//                empties and missing values included
//   - top        most repeated texts (count > 1)
//
// Unlike the cleaner's counts, `empty` and `duplicates` overlap
// here: ten blank lines are 10 empty AND 9 duplicates. The report
// exposes that overlap so nobody subtracts both from the total.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::data::normalizer::KeyNormalizer;
use crate::domain::corpus::Corpus;
use crate::domain::policy::NormalizationPolicy;

pub const DEFAULT_TOP_N: usize = 10;

/// A text that occurs more than once, with its occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatedText {
    pub text:  String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub corpus:     String,
    pub policy:     NormalizationPolicy,
    pub total:      usize,
    pub missing:    usize,
    pub empty:      usize,
    pub duplicates: usize,
    /// Duplicates that are themselves empty (the overlap)
    pub empty_duplicates: usize,
    pub top_repeated: Vec<RepeatedText>,
}

impl QualityReport {
    pub fn percent(&self, part: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            part as f64 / self.total as f64 * 100.0
        }
    }
}

pub fn analyze_quality(corpus: &Corpus, policy: NormalizationPolicy, top_n: usize) -> QualityReport {
    let normalizer = KeyNormalizer::new(policy);

    // key → (count, first index, display text of first occurrence)
    let mut groups: HashMap<Option<String>, (usize, usize, String)> = HashMap::new();
    let mut missing          = 0usize;
    let mut empty            = 0usize;
    let mut duplicates       = 0usize;
    let mut empty_duplicates = 0usize;

    for (idx, record) in corpus.iter().enumerate() {
        let key = record
            .text
            .as_deref()
            .map(|t| normalizer.key(t).into_owned());

        let is_empty = key.as_deref().map_or(true, str::is_empty);
        if record.is_missing() {
            missing += 1;
        }
        if is_empty {
            empty += 1;
        }

        let entry = groups
            .entry(key)
            .or_insert_with(|| (0, idx, record.text_or_empty().to_string()));
        entry.0 += 1;
        if entry.0 > 1 {
            duplicates += 1;
            if is_empty {
                empty_duplicates += 1;
            }
        }
    }

    // Missing values are not texts, so they never appear in the top list
    let mut repeated: Vec<(usize, usize, String)> = groups
        .into_iter()
        .filter(|(key, (count, _, _))| key.is_some() && *count > 1)
        .map(|(_, v)| v)
        .collect();
    repeated.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

    let top_repeated = repeated
        .into_iter()
        .take(top_n)
        .map(|(count, _, text)| RepeatedText { text, count })
        .collect();

    QualityReport {
        corpus: corpus.name.clone(),
        policy,
        total: corpus.len(),
        missing,
        empty,
        duplicates,
        empty_duplicates,
        top_repeated,
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::TextRecord;

    #[test]
    fn test_raw_duplicates_include_empties() {
        let corpus = Corpus::from_texts("t", ["", "", "", "ক", "ক"]);
        let r      = analyze_quality(&corpus, NormalizationPolicy::Exact, DEFAULT_TOP_N);
        assert_eq!(r.empty, 3);
        assert_eq!(r.duplicates, 3);
        assert_eq!(r.empty_duplicates, 2);
        // removing the overlap recovers the cleaner's disjoint count
        assert_eq!(r.duplicates - r.empty_duplicates, 1);
    }

    #[test]
    fn test_missing_values_group_together() {
        let corpus = Corpus::new(
            "t",
            vec![TextRecord::missing(1), TextRecord::missing(2), TextRecord::new("", 3)],
        );
        let r = analyze_quality(&corpus, NormalizationPolicy::Collapse, DEFAULT_TOP_N);
        assert_eq!(r.missing, 2);
        assert_eq!(r.empty, 3);
        // missing and "" are different values
        assert_eq!(r.duplicates, 1);
        assert!(r.top_repeated.is_empty());
    }

    #[test]
    fn test_top_repeated_order() {
        let corpus = Corpus::from_texts("t", ["খ", "ক", "খ", "ক", "গ", "গ", "গ", "ঘ"]);
        let r      = analyze_quality(&corpus, NormalizationPolicy::Exact, 2);
        assert_eq!(
            r.top_repeated,
            vec![
                RepeatedText { text: "গ".into(), count: 3 },
                RepeatedText { text: "খ".into(), count: 2 },
            ]
        );
    }

    #[test]
    fn test_percent() {
        let corpus = Corpus::from_texts("t", ["ক", "ক", "", "খ"]);
        let r      = analyze_quality(&corpus, NormalizationPolicy::Exact, 0);
        assert_eq!(r.percent(r.empty), 25.0);
        assert!(r.top_repeated.is_empty());
    }
}
