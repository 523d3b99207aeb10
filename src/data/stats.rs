// ============================================================
// Layer 4 — Length & Class Statistics
// ============================================================
// Summaries used to sanity-check a corpus after cleaning:
//   - text length distribution (in chars, not bytes: Bangla is
//     3 bytes per code point in UTF-8)
//   - records per class label, with percentages
//   - average length per class label
//
// Quartiles use linear interpolation between closest ranks and
// the standard deviation is the sample (n - 1) one, so numbers
// line up with a pandas `describe()` of the same column.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::corpus::Corpus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthStats {
    pub count:  usize,
    pub mean:   f64,
    pub std:    f64,
    pub min:    usize,
    pub p25:    f64,
    pub median: f64,
    pub p75:    f64,
    pub max:    usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassShare {
    pub label:      String,
    pub count:      usize,
    pub percent:    f64,
    pub avg_length: f64,
}

/// Length statistics over records with text. `None` when there are none.
pub fn length_stats(corpus: &Corpus) -> Option<LengthStats> {
    let mut lengths: Vec<usize> = corpus
        .iter()
        .filter_map(|r| r.text.as_deref())
        .map(|t| t.chars().count())
        .collect();

    if lengths.is_empty() {
        return None;
    }
    lengths.sort_unstable();

    let n    = lengths.len();
    let sum: usize = lengths.iter().sum();
    let mean = sum as f64 / n as f64;
    let std  = if n > 1 {
        let var = lengths
            .iter()
            .map(|&l| (l as f64 - mean).powi(2))
            .sum::<f64>()
            / (n - 1) as f64;
        var.sqrt()
    } else {
        0.0
    };

    Some(LengthStats {
        count:  n,
        mean,
        std,
        min:    lengths[0],
        p25:    quantile(&lengths, 0.25),
        median: quantile(&lengths, 0.5),
        p75:    quantile(&lengths, 0.75),
        max:    lengths[n - 1],
    })
}

/// Class distribution over labelled records, most frequent first
/// (ties broken by label so output is stable).
pub fn class_distribution(corpus: &Corpus) -> Vec<ClassShare> {
    // label → (count, total chars)
    let mut per_label: HashMap<&str, (usize, usize)> = HashMap::new();
    for record in corpus.iter() {
        if let Some(label) = record.label.as_deref() {
            let e = per_label.entry(label).or_insert((0, 0));
            e.0 += 1;
            e.1 += record.text_or_empty().chars().count();
        }
    }

    let labelled: usize = per_label.values().map(|(c, _)| c).sum();

    let mut shares: Vec<ClassShare> = per_label
        .into_iter()
        .map(|(label, (count, chars))| ClassShare {
            label:      label.to_string(),
            count,
            percent:    count as f64 / labelled as f64 * 100.0,
            avg_length: chars as f64 / count as f64,
        })
        .collect();

    shares.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    shares
}

/// `sorted` must be non-empty and ascending.
fn quantile(sorted: &[usize], q: f64) -> f64 {
    let pos  = (sorted.len() - 1) as f64 * q;
    let lo   = pos.floor() as usize;
    let hi   = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] as f64 + (sorted[hi] as f64 - sorted[lo] as f64) * frac
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::TextRecord;

    #[test]
    fn test_lengths_count_chars_not_bytes() {
        let corpus = Corpus::from_texts("t", ["আমি"]);
        let s      = length_stats(&corpus).unwrap();
        assert_eq!(s.min, 3);
        assert_eq!(s.max, 3);
        assert_eq!(s.std, 0.0);
    }

    #[test]
    fn test_describe_like_summary() {
        let corpus = Corpus::from_texts("t", ["a", "aa", "aaa", "aaaa"]);
        let s      = length_stats(&corpus).unwrap();
        assert_eq!(s.count, 4);
        assert_eq!(s.mean, 2.5);
        assert_eq!(s.p25, 1.75);
        assert_eq!(s.median, 2.5);
        assert_eq!(s.p75, 3.25);
        assert!((s.std - 1.290_994).abs() < 1e-6);
    }

    #[test]
    fn test_no_text_no_stats() {
        let corpus = Corpus::new("t", vec![TextRecord::missing(1)]);
        assert!(length_stats(&corpus).is_none());
    }

    #[test]
    fn test_class_distribution() {
        let corpus = Corpus::new(
            "t",
            vec![
                TextRecord::new("ab", 1).with_label("troll"),
                TextRecord::new("abcd", 2).with_label("troll"),
                TextRecord::new("a", 3).with_label("sexual"),
                TextRecord::new("unlabelled", 4),
            ],
        );
        let d = class_distribution(&corpus);
        assert_eq!(d.len(), 2);
        assert_eq!(d[0].label, "troll");
        assert_eq!(d[0].count, 2);
        assert_eq!(d[0].avg_length, 3.0);
        assert!((d[0].percent - 66.666_666).abs() < 1e-4);
        assert_eq!(d[1].label, "sexual");
    }

    #[test]
    fn test_unlabelled_corpus_has_no_classes() {
        let corpus = Corpus::from_texts("t", ["ক"]);
        assert!(class_distribution(&corpus).is_empty());
    }
}
