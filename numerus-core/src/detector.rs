//! Plural Detection
//!
//! A detector binds one locale's rule function to its allowed category
//! set. Detectors are immutable and cheap to share; the registry hands
//! them out as `Arc<PluralDetector>`.

use crate::category::PluralCategory;
use crate::operands::{NumberInput, PluralOperands};
use crate::rules::RuleFamily;
use crate::Result;

/// Classifies numbers into the cardinal plural categories of one locale.
#[derive(Debug, Clone)]
pub struct PluralDetector {
    family: RuleFamily,
}

impl PluralDetector {
    pub(crate) fn new(family: RuleFamily) -> Self {
        Self { family }
    }

    /// Returns the cardinal category for a number.
    ///
    /// Accepts integer and float primitives as well as string literals.
    /// Only literals carry display information, so `"1.0"` and `1` may
    /// classify differently in locales that inspect fraction digits.
    ///
    /// # Example
    ///
    /// ```
    /// use numerus_core::{PluralCategory, PluralRuleRegistry};
    ///
    /// let registry = PluralRuleRegistry::new();
    /// let detector = registry.detector("pl")?;
    /// assert_eq!(detector.detect(1)?, PluralCategory::One);
    /// assert_eq!(detector.detect(22)?, PluralCategory::Few);
    /// assert_eq!(detector.detect("0.5")?, PluralCategory::Other);
    /// # Ok::<(), numerus_core::PluralError>(())
    /// ```
    pub fn detect(&self, number: impl Into<NumberInput>) -> Result<PluralCategory> {
        let operands = PluralOperands::from_input(&number.into())?;
        let category = (self.family.rule)(&operands);
        debug_assert!(
            self.family.categories.contains(&category),
            "rule produced {category} outside its allowed set"
        );
        Ok(category)
    }

    /// The categories this locale distinguishes, in CLDR order.
    ///
    /// The slice always ends with [`PluralCategory::Other`].
    pub fn categories(&self) -> &[PluralCategory] {
        self.family.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::PluralCategory::{Few, Many, One, Other, Two, Zero};
    use crate::error::PluralError;
    use crate::rules;

    #[test]
    fn test_detect_accepts_mixed_input_types() {
        let detector = PluralDetector::new(rules::RU);
        assert_eq!(detector.detect(1).unwrap(), One);
        assert_eq!(detector.detect(22u8).unwrap(), Few);
        assert_eq!(detector.detect(-3).unwrap(), Few);
        assert_eq!(detector.detect(5.0).unwrap(), Many);
        assert_eq!(detector.detect("1.5").unwrap(), Other);
        assert_eq!(detector.detect("21".to_string()).unwrap(), One);
    }

    #[test]
    fn test_detect_rejects_bad_literals() {
        let detector = PluralDetector::new(rules::AST);
        assert!(matches!(
            detector.detect("1.5e"),
            Err(PluralError::InvalidNumericLiteral(_))
        ));
        assert!(matches!(
            detector.detect(f64::NAN),
            Err(PluralError::InvalidNumericLiteral(_))
        ));
    }

    #[test]
    fn test_categories_in_cldr_order() {
        let detector = PluralDetector::new(rules::AR);
        assert_eq!(detector.categories(), &[Zero, One, Two, Few, Many, Other]);

        let detector = PluralDetector::new(rules::BM);
        assert_eq!(detector.categories(), &[Other]);
    }
}
