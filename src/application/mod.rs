// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers for each CLI command.
//
// Rules for this layer:
//   - No counting logic here (that's Layer 3 and 4)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Clean one corpus and persist the results
pub mod clean_use_case;

// Read-only quality / length / class audit
pub mod inspect_use_case;

// Original vs. original+augmented comparison
pub mod compare_use_case;
