// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between a corpus file on disk and the numbers in
// a cleaning report:
//
//   corpus file (.txt / .jsonl)
//       │
//       ▼
//   loader            → TextRecords in source order
//       │
//       ▼
//   normalizer        → comparison key per record
//       │
//       ├──────────────► quality  → raw audit (before cleaning)
//       ▼
//   cleaner           → drops empty, then duplicate records
//       │
//       ▼
//   stats             → length / class summaries
//
// Each module is responsible for exactly one step.

/// Reads .txt and .jsonl corpora
pub mod loader;

/// Builds emptiness / duplicate keys under a NormalizationPolicy
pub mod normalizer;

/// Counts and removes empty and duplicate records
pub mod cleaner;

/// Raw quality audit with most-repeated texts
pub mod quality;

/// Text length and class distribution summaries
pub mod stats;
