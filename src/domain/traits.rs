// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer reads and writes corpora only through
// these traits, so a new file format is one new impl.
//
// Implementations:
//   - LineLoader / JsonlLoader → RecordSource  (data::loader)
//   - LineWriter / JsonlWriter → RecordSink    (infra::corpus_writer)

use anyhow::Result;
use crate::domain::corpus::Corpus;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Any component that can produce a corpus.
pub trait RecordSource {
    /// Load every record, in source order.
    fn load(&self) -> Result<Corpus>;
}

// ─── RecordSink ───────────────────────────────────────────────────────────────
/// Any component that can persist a (cleaned) corpus.
pub trait RecordSink {
    /// Write every record of `corpus`, replacing any existing output.
    fn write(&self, corpus: &Corpus) -> Result<()>;
}
