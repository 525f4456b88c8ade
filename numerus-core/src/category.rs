//! Plural Categories
//!
//! The six CLDR cardinal categories. Not all languages use all six -
//! English has two (one, other), Russian has four and Arabic all six.

use serde::{Deserialize, Serialize};

/// CLDR plural categories.
///
/// Serializes as the lowercase CLDR tag (`"one"`, `"other"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    /// Zero items (Arabic, Latvian)
    Zero,
    /// One item (most languages)
    One,
    /// Two items (Arabic, Welsh)
    Two,
    /// Few items (Slavic languages)
    Few,
    /// Many items (Slavic languages, Arabic)
    Many,
    /// All other cases
    Other,
}

impl PluralCategory {
    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "zero" => Some(Self::Zero),
            "one" => Some(Self::One),
            "two" => Some(Self::Two),
            "few" => Some(Self::Few),
            "many" => Some(Self::Many),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in [
            PluralCategory::Zero,
            PluralCategory::One,
            PluralCategory::Two,
            PluralCategory::Few,
            PluralCategory::Many,
            PluralCategory::Other,
        ] {
            assert_eq!(PluralCategory::from_str(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(PluralCategory::from_str("one"), Some(PluralCategory::One));
        assert_eq!(PluralCategory::from_str("OTHER"), Some(PluralCategory::Other));
        assert_eq!(PluralCategory::from_str("invalid"), None);
    }

    #[test]
    fn test_category_serde_tag() {
        let json = serde_json::to_string(&PluralCategory::Few).unwrap();
        assert_eq!(json, "\"few\"");

        let parsed: PluralCategory = serde_json::from_str("\"many\"").unwrap();
        assert_eq!(parsed, PluralCategory::Many);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(PluralCategory::Zero.to_string(), "zero");
        assert_eq!(format!("{}", PluralCategory::Other), "other");
    }
}
