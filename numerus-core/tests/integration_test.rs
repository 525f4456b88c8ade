//! Integration tests for numerus-core

use std::sync::Arc;

use numerus_core::PluralCategory::{Few, Many, One, Other, Two, Zero};
use numerus_core::{NumberInput, PluralCategory, PluralError, PluralOperands, PluralRuleRegistry};

fn assert_cases(locale: &str, cases: &[(&str, PluralCategory)]) {
    let registry = PluralRuleRegistry::new();
    for &(input, expected) in cases {
        assert_eq!(
            registry.detect(locale, input).unwrap(),
            expected,
            "locale {locale}, input {input:?}"
        );
    }
}

#[test]
fn test_english_two_way() {
    assert_cases(
        "en",
        &[
            ("0", Other),
            ("1", One),
            ("1.0", Other),
            ("2", Other),
            ("1.5", Other),
        ],
    );
}

#[test]
fn test_arabic_six_way() {
    assert_cases(
        "ar",
        &[
            ("0", Zero),
            ("1", One),
            ("2", Two),
            ("3", Few),
            ("5", Few),
            ("103", Few),
            ("11", Many),
            ("15", Many),
            ("199", Many),
            ("100", Other),
            ("102", Other),
            // Modulus runs on the integer part even for fractions.
            ("15.7", Many),
        ],
    );
}

#[test]
fn test_welsh_six_way() {
    assert_cases(
        "cy",
        &[
            ("0", Zero),
            ("1", One),
            ("2", Two),
            ("3", Few),
            ("6", Many),
            ("4", Other),
            ("5", Other),
        ],
    );
}

#[test]
fn test_cornish_six_way() {
    assert_cases(
        "kw",
        &[
            ("0", Zero),
            ("1", One),
            ("2", Two),
            ("22", Two),
            ("1000", Two),
            ("100000", Two),
            ("3", Few),
            ("23", Few),
            ("21", Many),
            ("41", Many),
            ("4", Other),
            ("2.5", Two),
        ],
    );
}

#[test]
fn test_russian_and_ukrainian_four_way() {
    for locale in ["ru", "uk"] {
        assert_cases(
            locale,
            &[
                ("1", One),
                ("21", One),
                ("101", One),
                ("2", Few),
                ("4", Few),
                ("22", Few),
                ("0", Many),
                ("5", Many),
                ("11", Many),
                ("14", Many),
                ("111", Many),
                ("1.5", Other),
                ("2.0", Other),
            ],
        );
    }
}

#[test]
fn test_polish_four_way() {
    assert_cases(
        "pl",
        &[
            ("1", One),
            ("2", Few),
            ("4", Few),
            ("22", Few),
            ("0", Many),
            ("5", Many),
            ("12", Many),
            ("21", Many),
            ("1.5", Other),
            ("1.0", Other),
        ],
    );
}

#[test]
fn test_czech_and_slovak_paucal() {
    for locale in ["cs", "sk"] {
        assert_cases(
            locale,
            &[
                ("1", One),
                ("2", Few),
                ("4", Few),
                ("0", Other),
                ("5", Other),
                ("100", Other),
                ("1.5", Many),
                ("1.0", Many),
            ],
        );
    }
}

#[test]
fn test_belarusian_fraction_gate() {
    assert_cases(
        "be",
        &[
            ("1", One),
            ("21", One),
            ("2", Few),
            ("24", Few),
            ("0", Many),
            ("5", Many),
            ("11", Many),
            ("1.5", Other),
            ("21.1", Other),
        ],
    );
}

#[test]
fn test_lithuanian_fraction_is_many() {
    assert_cases(
        "lt",
        &[
            ("1", One),
            ("21", One),
            ("2", Few),
            ("9", Few),
            ("22", Few),
            ("0", Other),
            ("10", Other),
            ("11", Other),
            ("15", Other),
            ("0.5", Many),
            ("10.2", Many),
        ],
    );
}

#[test]
fn test_latvian_and_prussian_zero_class() {
    for locale in ["lv", "prg"] {
        assert_cases(
            locale,
            &[
                ("0", Zero),
                ("10", Zero),
                ("11", Zero),
                ("19", Zero),
                ("1", One),
                ("21", One),
                ("2", Other),
                ("5", Other),
                // v = 2 turns the fraction's teens into Zero.
                ("0.1", One),
                ("0.10", Zero),
                ("1.5", One),
            ],
        );
    }
}

#[test]
fn test_breton_five_way() {
    assert_cases(
        "br",
        &[
            ("1", One),
            ("21", One),
            ("71", Other),
            ("2", Two),
            ("22", Two),
            ("92", Other),
            ("3", Few),
            ("9", Few),
            ("43", Few),
            ("13", Other),
            ("73", Other),
            ("93", Other),
            ("1000000", Many),
            ("1000000.5", Other),
            ("0", Other),
        ],
    );
}

#[test]
fn test_irish_five_way() {
    assert_cases(
        "ga",
        &[
            ("1", One),
            ("2", Two),
            ("3", Few),
            ("6", Few),
            ("7", Many),
            ("10", Many),
            ("0", Other),
            ("11", Other),
            ("3.5", Other),
        ],
    );
}

#[test]
fn test_scottish_gaelic_four_way() {
    assert_cases(
        "gd",
        &[
            ("1", One),
            ("11", One),
            ("2", Two),
            ("12", Two),
            ("3", Few),
            ("10", Few),
            ("13", Few),
            ("19", Few),
            ("0", Other),
            ("20", Other),
            ("2.5", Other),
        ],
    );
}

#[test]
fn test_manx_five_way() {
    assert_cases(
        "gv",
        &[
            ("1", One),
            ("21", One),
            ("2", Two),
            ("0", Few),
            ("20", Few),
            ("80", Few),
            ("1.5", Many),
            ("3", Other),
        ],
    );
}

#[test]
fn test_maltese_five_way() {
    assert_cases(
        "mt",
        &[
            ("1", One),
            ("2", Two),
            ("0", Few),
            ("3", Few),
            ("10", Few),
            ("103", Few),
            ("3.5", Few),
            ("11", Many),
            ("19", Many),
            ("111", Many),
            ("21", Other),
            ("100", Other),
        ],
    );
}

#[test]
fn test_romanian_and_moldavian() {
    for locale in ["ro", "mo"] {
        assert_cases(
            locale,
            &[
                ("1", One),
                ("0", Few),
                ("2", Few),
                ("19", Few),
                ("101", Few),
                ("119", Few),
                ("1.0", Few),
                ("20", Other),
                ("21", Other),
                ("100", Other),
            ],
        );
    }
}

#[test]
fn test_serbo_croatian_group() {
    for locale in ["bs", "hr", "sh", "sr"] {
        assert_cases(
            locale,
            &[
                ("1", One),
                ("21", One),
                ("0.1", One),
                ("2", Few),
                ("22", Few),
                ("0.2", Few),
                ("0", Other),
                ("5", Other),
                ("11", Other),
                ("12", Other),
            ],
        );
    }
}

#[test]
fn test_sorbian_dual() {
    for locale in ["dsb", "hsb"] {
        assert_cases(
            locale,
            &[
                ("1", One),
                ("101", One),
                ("0.1", One),
                ("2", Two),
                ("102", Two),
                ("0.2", Two),
                ("3", Few),
                ("4", Few),
                ("104", Few),
                ("1.3", Few),
                ("0", Other),
                ("5", Other),
            ],
        );
    }
}

#[test]
fn test_slovenian_dual() {
    assert_cases(
        "sl",
        &[
            ("1", One),
            ("101", One),
            ("2", Two),
            ("102", Two),
            ("3", Few),
            ("4", Few),
            ("1.5", Few),
            ("0", Other),
            ("5", Other),
            ("11", Other),
        ],
    );
}

#[test]
fn test_icelandic_trailing_digit() {
    assert_cases(
        "is",
        &[
            ("1", One),
            ("21", One),
            ("1.1", One),
            ("1.0", One),
            ("11", Other),
            ("11.0", Other),
            ("2", Other),
            ("2.0", Other),
        ],
    );
}

#[test]
fn test_danish_fraction_rule() {
    assert_cases(
        "da",
        &[
            ("1", One),
            ("0.1", One),
            ("1.1", One),
            ("0", Other),
            ("2", Other),
            ("2.5", Other),
        ],
    );
}

#[test]
fn test_macedonian_trailing_digit() {
    assert_cases(
        "mk",
        &[
            ("1", One),
            ("21", One),
            ("1.1", One),
            ("11", Other),
            ("2", Other),
            ("2.2", Other),
        ],
    );
}

#[test]
fn test_inuktitut_dual_group() {
    for locale in ["iu", "naq", "se", "smn"] {
        assert_cases(
            locale,
            &[("1", One), ("2", Two), ("0", Other), ("3", Other)],
        );
    }
}

#[test]
fn test_tachelhit_paucal() {
    assert_cases(
        "shi",
        &[
            ("0", One),
            ("1", One),
            ("0.5", One),
            ("2", Few),
            ("10", Few),
            ("2.5", Other),
            ("11", Other),
        ],
    );
}

#[test]
fn test_sinhala_fraction_one() {
    assert_cases(
        "si",
        &[
            ("0", One),
            ("1", One),
            ("1.0", One),
            ("0.1", One),
            ("0.5", Other),
            ("2", Other),
        ],
    );
}

#[test]
fn test_tamazight_ranges() {
    assert_cases(
        "tzm",
        &[
            ("0", One),
            ("1", One),
            ("11", One),
            ("99", One),
            ("11.0", One),
            ("2", Other),
            ("10", Other),
            ("100", Other),
            ("1.5", Other),
        ],
    );
}

#[test]
fn test_langi_zero_class() {
    assert_cases(
        "lag",
        &[
            ("0", Zero),
            ("0.0", Zero),
            ("1", One),
            ("0.5", One),
            ("1.5", One),
            ("2", Other),
        ],
    );
}

#[test]
fn test_colognian_zero_class() {
    assert_cases(
        "ksh",
        &[("0", Zero), ("1", One), ("1.0", One), ("2", Other)],
    );
}

#[test]
fn test_filipino_group_digit_exceptions() {
    for locale in ["fil", "tl", "ceb"] {
        assert_cases(
            locale,
            &[
                ("1", One),
                ("2", One),
                ("3", One),
                ("5", One),
                ("10", One),
                ("4", Other),
                ("6", Other),
                ("9", Other),
                ("14", Other),
                ("1.3", One),
                ("1.4", Other),
            ],
        );
    }
}

#[test]
fn test_zero_inclusive_one_group() {
    // i == 0 or n == 1
    for locale in ["am", "fa", "hi", "bn", "zu"] {
        assert_cases(
            locale,
            &[
                ("0", One),
                ("1", One),
                ("0.5", One),
                ("1.0", One),
                ("1.5", Other),
                ("2", Other),
            ],
        );
    }
    // n == 0 or n == 1
    for locale in ["ak", "ln", "pa", "ti"] {
        assert_cases(
            locale,
            &[
                ("0", One),
                ("1", One),
                ("0.5", Other),
                ("1.5", Other),
                ("2", Other),
            ],
        );
    }
    // i == 0 or i == 1
    for locale in ["ff", "hy", "kab"] {
        assert_cases(
            locale,
            &[
                ("0", One),
                ("1", One),
                ("0.5", One),
                ("1.5", One),
                ("2", Other),
            ],
        );
    }
}

#[test]
fn test_simple_one_group() {
    for locale in ["af", "az", "bg", "el", "hu", "ka", "tr", "uz"] {
        assert_cases(
            locale,
            &[("1", One), ("1.0", One), ("0", Other), ("2", Other), ("1.5", Other)],
        );
    }
}

#[test]
fn test_integer_one_group() {
    for locale in ["de", "en", "et", "fi", "nl", "sv", "ur"] {
        assert_cases(
            locale,
            &[("1", One), ("1.0", Other), ("0", Other), ("2", Other)],
        );
    }
}

#[test]
fn test_no_plural_group() {
    for locale in ["ja", "ko", "zh", "th", "vi", "id", "yue"] {
        assert_cases(
            locale,
            &[
                ("0", Other),
                ("1", Other),
                ("2", Other),
                ("1.5", Other),
                ("100", Other),
            ],
        );
    }
}

#[test]
fn test_compact_exponent_families() {
    // Millions and exponents above 5 take the Many class.
    for locale in ["ca", "es", "fr", "it", "pt"] {
        assert_cases(
            locale,
            &[
                ("1000000", Many),
                ("2000000", Many),
                ("1c6", Many),
                ("2c6", Many),
                ("1.5c6", Many),
                ("1c3", Other),
                ("2.5", Other),
            ],
        );
    }
}

#[test]
fn test_romance_one_shapes_differ() {
    // Spanish: whole value one; Catalan and Italian: integer display one;
    // French and Portuguese: integer part zero or one.
    assert_cases("es", &[("1", One), ("1.0", One), ("0", Other), ("0.5", Other)]);
    assert_cases("ca", &[("1", One), ("1.0", Other), ("0", Other)]);
    assert_cases("it", &[("1", One), ("1.0", Other), ("0", Other)]);
    assert_cases("fr", &[("1", One), ("1.0", One), ("0", One), ("0.5", One), ("2", Other)]);
    assert_cases("pt", &[("1", One), ("1.0", One), ("0", One), ("0.5", One), ("2", Other)]);
}

#[test]
fn test_display_sensitivity() {
    let registry = PluralRuleRegistry::new();

    // Trailing zeros change the operands and can change the category.
    assert_eq!(registry.detect("cs", 1).unwrap(), One);
    assert_eq!(registry.detect("cs", "1.5").unwrap(), Many);
    assert_eq!(registry.detect("cs", "1.50").unwrap(), Many);
    assert_eq!(registry.detect("lv", "0.1").unwrap(), One);
    assert_eq!(registry.detect("lv", "0.10").unwrap(), Zero);
}

#[test]
fn test_float_inputs_match_their_shortest_literal() {
    let registry = PluralRuleRegistry::new();

    // Whole floats classify like integers.
    assert_eq!(registry.detect("en", 1.0).unwrap(), One);
    assert_eq!(registry.detect("en", 1).unwrap(), One);
    assert_eq!(registry.detect("ru", 5.0).unwrap(), Many);

    // Fractional floats classify like their shortest decimal form.
    assert_eq!(registry.detect("en", 0.5).unwrap(), Other);
    assert_eq!(registry.detect("lv", 0.1).unwrap(), One);
    assert_eq!(registry.detect("shi", 0.5).unwrap(), One);
    assert_eq!(registry.detect("cs", 1.5).unwrap(), Many);
}

#[test]
fn test_negative_numbers_classify_by_magnitude() {
    let registry = PluralRuleRegistry::new();
    assert_eq!(registry.detect("en", -1).unwrap(), One);
    assert_eq!(registry.detect("ru", -22).unwrap(), Few);
    assert_eq!(registry.detect("ar", "-2").unwrap(), Two);
}

#[test]
fn test_locale_normalization() {
    let registry = PluralRuleRegistry::new();

    // Regional variants resolve through the base language.
    assert_eq!(registry.detect("es_AR", 1).unwrap(), One);
    assert_eq!(registry.detect("ar_EG", 3).unwrap(), Few);
    assert_eq!(registry.detect("en_GB", "1.0").unwrap(), Other);

    // Portuguese: Portugal keeps its own entry, Brazil folds into pt.
    assert_eq!(registry.detect("pt", 0).unwrap(), One);
    assert_eq!(registry.detect("pt_BR", 0).unwrap(), One);
    assert_eq!(registry.detect("pt_PT", 0).unwrap(), Other);
    assert_eq!(registry.detect("pt_PT", 1).unwrap(), One);
}

#[test]
fn test_unsupported_locales() {
    let registry = PluralRuleRegistry::new();
    for locale in ["xx", "xx-FAKE", "en-US", "abcd", "EN", "en_US_POSIX", ""] {
        let err = registry.detector(locale).unwrap_err();
        assert!(
            matches!(err, PluralError::LocaleNotSupported(ref l) if l == locale),
            "expected {locale:?} to be unsupported, got {err:?}"
        );
    }
    let err = registry.detector("xx-FAKE").unwrap_err();
    assert_eq!(err.to_string(), "locale xx-FAKE not supported");
}

#[test]
fn test_invalid_literals() {
    let registry = PluralRuleRegistry::new();
    for input in ["", "1.", ".5", "1,5", "1.2.3", "abc", "1.5e", "1c", "+1"] {
        let err = registry.detect("en", input).unwrap_err();
        assert!(
            matches!(err, PluralError::InvalidNumericLiteral(ref l) if l == input),
            "expected {input:?} to be rejected, got {err:?}"
        );
    }
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            registry.detect("en", value),
            Err(PluralError::InvalidNumericLiteral(_))
        ));
    }
}

#[test]
fn test_detectors_are_memoized() {
    let registry = PluralRuleRegistry::new();
    let first = registry.detector("de").unwrap();
    let second = registry.detector("de").unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    let regional = registry.detector("de_DE").unwrap();
    assert!(!Arc::ptr_eq(&first, &regional));
    assert_eq!(first.detect(1).unwrap(), regional.detect(1).unwrap());
}

#[test]
fn test_detector_exposes_category_sets() {
    let registry = PluralRuleRegistry::new();
    assert_eq!(registry.detector("ja").unwrap().categories(), &[Other]);
    assert_eq!(registry.detector("en").unwrap().categories(), &[One, Other]);
    assert_eq!(
        registry.detector("ru").unwrap().categories(),
        &[One, Few, Many, Other]
    );
    assert_eq!(
        registry.detector("ar").unwrap().categories(),
        &[Zero, One, Two, Few, Many, Other]
    );
}

#[test]
fn test_every_family_is_total_over_mixed_probes() {
    let registry = PluralRuleRegistry::new();
    let locales = [
        "af", "ak", "am", "ar", "be", "bm", "br", "bs", "ca", "ceb", "cs", "cy", "da", "dsb",
        "en", "es", "ff", "fil", "fr", "ga", "gd", "gv", "is", "it", "iu", "ksh", "kw", "lag",
        "lt", "lv", "mk", "mo", "mt", "pl", "pt", "ru", "shi", "si", "sl", "tzm",
    ];
    let probes = [
        "0", "1", "2", "3", "5", "7", "10", "11", "15", "21", "100", "101", "1000000", "0.5",
        "1.0", "1.5", "2.50", "10.01", "1c6",
    ];
    for locale in locales {
        let detector = registry.detector(locale).unwrap();
        for probe in probes {
            let category = detector.detect(probe).unwrap();
            assert!(
                detector.categories().contains(&category),
                "locale {locale}, input {probe:?} produced {category}"
            );
        }
    }
}

#[test]
fn test_operand_extraction_is_public() {
    let po = PluralOperands::from_input(&NumberInput::from("1.50")).unwrap();
    assert_eq!(po.n, 1.5);
    assert_eq!((po.i, po.v, po.w, po.f, po.t, po.e), (1, 2, 1, 50, 5, 0));

    let po = PluralOperands::try_from(NumberInput::from(7)).unwrap();
    assert_eq!((po.i, po.v), (7, 0));

    let po = PluralOperands::from_input(&NumberInput::from("2.1c6")).unwrap();
    assert_eq!((po.i, po.v, po.f, po.e), (2_100_000, 0, 0, 6));
}

#[test]
fn test_category_serialization() {
    let registry = PluralRuleRegistry::new();
    let category = registry.detect("ar", 15).unwrap();
    assert_eq!(serde_json::to_string(&category).unwrap(), "\"many\"");
}
