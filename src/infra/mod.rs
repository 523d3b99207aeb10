// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that touches the filesystem on the output side:
//
//   report_store.rs  — JSON cleaning reports and run configs
//   run_log.rs       — append-only CSV of every cleaning run
//   corpus_writer.rs — writes cleaned corpora (.txt / .jsonl)
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Cleaning report and config persistence
pub mod report_store;

/// Cleaning run CSV logger
pub mod run_log;

/// Cleaned corpus output
pub mod corpus_writer;
