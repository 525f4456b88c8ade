//! Detector Registry
//!
//! Hands out memoized detectors by locale. Detectors are constructed on
//! first request and cached under the raw locale string, so `pt` and
//! `pt_BR` hold separate cache entries even though both resolve to the
//! same rules. Clones share one cache.

use std::collections::HashMap;
use std::sync::Arc;

use numerus_log::{debug, warn};
use parking_lot::RwLock;

use crate::category::PluralCategory;
use crate::detector::PluralDetector;
use crate::error::PluralError;
use crate::locale;
use crate::operands::NumberInput;
use crate::Result;

/// Registry of per-locale plural detectors.
///
/// # Example
///
/// ```
/// use numerus_core::{PluralCategory, PluralRuleRegistry};
///
/// let registry = PluralRuleRegistry::new();
/// assert_eq!(registry.detect("en", 1)?, PluralCategory::One);
/// assert_eq!(registry.detect("en", "1.0")?, PluralCategory::Other);
/// assert_eq!(registry.detect("ar_EG", 3)?, PluralCategory::Few);
/// # Ok::<(), numerus_core::PluralError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PluralRuleRegistry {
    cache: Arc<RwLock<HashMap<String, Arc<PluralDetector>>>>,
}

impl PluralRuleRegistry {
    /// Creates a registry with an empty detector cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the detector for a locale, constructing it on first use.
    ///
    /// The cache key is the raw locale string: repeated calls with the
    /// same string return the same `Arc`. Unknown locales fail with
    /// [`PluralError::LocaleNotSupported`] and are not cached.
    pub fn detector(&self, locale: &str) -> Result<Arc<PluralDetector>> {
        if let Some(detector) = self.cache.read().get(locale) {
            return Ok(Arc::clone(detector));
        }

        let Some(family) = locale::lookup(locale::normalize(locale)) else {
            warn!("locale {} not supported", locale);
            return Err(PluralError::LocaleNotSupported(locale.to_string()));
        };

        debug!("caching plural detector for locale {}", locale);
        let detector = Arc::new(PluralDetector::new(family));
        let mut cache = self.cache.write();
        // First insert wins under racing construction of one locale.
        Ok(Arc::clone(
            cache.entry(locale.to_string()).or_insert(detector),
        ))
    }

    /// Classifies a number under a locale in one step.
    pub fn detect(&self, locale: &str, number: impl Into<NumberInput>) -> Result<PluralCategory> {
        self.detector(locale)?.detect(number)
    }
}
