// Numerus - CLDR cardinal plural rules for Rust
//
// This library determines which plural category a number belongs to in a
// given locale, with display-aware operand extraction and memoized
// per-locale detectors.

// Re-export the rules engine
pub use numerus_core::*;

// Re-export the diagnostics layer
pub use numerus_log;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        NumberInput, PluralCategory, PluralDetector, PluralError, PluralRuleRegistry, Result,
    };
}
