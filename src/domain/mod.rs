// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums, and traits describing corpora and
// the bookkeeping done while cleaning them.
//
// Rules for this layer:
//   - NO file I/O
//   - NO printing
//   - Only plain data, arithmetic, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A single text record and the corpus that holds it
pub mod record;
pub mod corpus;

// Equality / emptiness policy for duplicate detection
pub mod policy;

// Empty / duplicate / cleaned counts for one corpus
pub mod counts;

// Original vs. original+augmented arithmetic
pub mod comparison;

// Domain error taxonomy
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
