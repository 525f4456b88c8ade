//! CLDR Cardinal Plural Rules for Numerus
//!
//! Determines which cardinal plural category a number belongs to in a
//! given locale, following the CLDR plural rules:
//!
//! - **Six Categories**: `zero`, `one`, `two`, `few`, `many`, `other`
//! - **212 Locales**: shared rule families cover every CLDR cardinal rule
//! - **Display Aware**: string literals keep trailing zeros and compact
//!   exponents (`"1.50"`, `"1c6"`), which can change the category
//! - **Memoized**: detectors are built once per locale and shared
//!
//! # Quick Start
//!
//! ```
//! use numerus_core::{PluralCategory, PluralRuleRegistry};
//!
//! let registry = PluralRuleRegistry::new();
//!
//! // One-shot classification
//! assert_eq!(registry.detect("en", 1)?, PluralCategory::One);
//! assert_eq!(registry.detect("ru", 3)?, PluralCategory::Few);
//! assert_eq!(registry.detect("ar", 15)?, PluralCategory::Many);
//!
//! // Reuse a detector for many numbers
//! let polish = registry.detector("pl")?;
//! assert_eq!(polish.detect(1)?, PluralCategory::One);
//! assert_eq!(polish.detect(22)?, PluralCategory::Few);
//! assert_eq!(polish.detect(25)?, PluralCategory::Many);
//! # Ok::<(), numerus_core::PluralError>(())
//! ```
//!
//! # Display Sensitivity
//!
//! CLDR rules can inspect how a number is written, not just its value.
//! Pass a string literal when the rendered form is known:
//!
//! ```
//! use numerus_core::{PluralCategory, PluralRuleRegistry};
//!
//! let registry = PluralRuleRegistry::new();
//!
//! // English: "1 star" but "1.0 stars"
//! assert_eq!(registry.detect("en", 1)?, PluralCategory::One);
//! assert_eq!(registry.detect("en", "1.0")?, PluralCategory::Other);
//! # Ok::<(), numerus_core::PluralError>(())
//! ```
//!
//! Locale codes match case-sensitively; regional variants such as
//! `es_AR` resolve through their base language, with `pt_PT` as the one
//! region-specific entry.

mod category;
mod detector;
mod error;
mod locale;
mod operands;
mod registry;
mod rules;

pub use category::PluralCategory;
pub use detector::PluralDetector;
pub use error::PluralError;
pub use operands::{NumberInput, PluralOperands};
pub use registry::PluralRuleRegistry;

/// Result type for plural-rule operations
pub type Result<T> = std::result::Result<T, PluralError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        NumberInput, PluralCategory, PluralDetector, PluralError, PluralRuleRegistry, Result,
    };
}
