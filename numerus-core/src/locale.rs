//! Locale Resolution
//!
//! Maps locale codes to rule families through a static sorted table.
//! Lookup keys are normalized first: codes longer than three bytes are
//! truncated at their last underscore, so `es_AR` resolves through `es`
//! while `pt_PT` stays verbatim as the one region-specific entry.

use crate::rules::{self, RuleFamily};

/// Strips the region suffix from locale codes longer than three bytes.
///
/// Truncation happens once, at the last underscore: `az_Cyrl_AZ` resolves
/// through `az_Cyrl` (an unknown code), not `az`. A long code without an
/// underscore normalizes to the empty string and so never matches.
/// Matching is case sensitive throughout.
pub(crate) fn normalize(locale: &str) -> &str {
    if locale == "pt_PT" || locale.len() <= 3 {
        return locale;
    }
    match locale.rfind('_') {
        Some(pos) => &locale[..pos],
        None => "",
    }
}

/// Looks up the rule family for an already-normalized locale code.
pub(crate) fn lookup(locale: &str) -> Option<RuleFamily> {
    LOCALE_RULES
        .binary_search_by_key(&locale, |&(code, _)| code)
        .ok()
        .map(|idx| LOCALE_RULES[idx].1)
}

/// Locale codes and their rule families, sorted for binary search.
static LOCALE_RULES: &[(&str, RuleFamily)] = &[
    ("af", rules::AF),
    ("ak", rules::AK),
    ("am", rules::AM),
    ("an", rules::AF),
    ("ar", rules::AR),
    ("as", rules::AM),
    ("asa", rules::AF),
    ("ast", rules::AST),
    ("az", rules::AF),
    ("bal", rules::AF),
    ("be", rules::BE),
    ("bem", rules::AF),
    ("bez", rules::AF),
    ("bg", rules::AF),
    ("bho", rules::AK),
    ("bm", rules::BM),
    ("bn", rules::AM),
    ("bo", rules::BM),
    ("br", rules::BR),
    ("brx", rules::AF),
    ("bs", rules::BS),
    ("ca", rules::CA),
    ("ce", rules::AF),
    ("ceb", rules::CEB),
    ("cgg", rules::AF),
    ("chr", rules::AF),
    ("ckb", rules::AF),
    ("cs", rules::CS),
    ("cy", rules::CY),
    ("da", rules::DA),
    ("de", rules::AST),
    ("doi", rules::AM),
    ("dsb", rules::DSB),
    ("dv", rules::AF),
    ("dz", rules::BM),
    ("ee", rules::AF),
    ("el", rules::AF),
    ("en", rules::AST),
    ("eo", rules::AF),
    ("es", rules::ES),
    ("et", rules::AST),
    ("eu", rules::AF),
    ("fa", rules::AM),
    ("ff", rules::FF),
    ("fi", rules::AST),
    ("fil", rules::FIL),
    ("fo", rules::AF),
    ("fr", rules::FR),
    ("fur", rules::AF),
    ("fy", rules::AST),
    ("ga", rules::GA),
    ("gd", rules::GD),
    ("gl", rules::AST),
    ("gsw", rules::AF),
    ("gu", rules::AM),
    ("gv", rules::GV),
    ("ha", rules::AF),
    ("haw", rules::AF),
    ("hi", rules::AM),
    ("hnj", rules::BM),
    ("hr", rules::BS),
    ("hsb", rules::DSB),
    ("hu", rules::AF),
    ("hy", rules::FF),
    ("ia", rules::AST),
    ("id", rules::BM),
    ("ig", rules::BM),
    ("ii", rules::BM),
    ("in", rules::BM),
    ("io", rules::AST),
    ("is", rules::IS),
    ("it", rules::IT),
    ("iu", rules::IU),
    ("ja", rules::BM),
    ("jbo", rules::BM),
    ("jgo", rules::AF),
    ("ji", rules::AST),
    ("jmc", rules::AF),
    ("jv", rules::BM),
    ("jw", rules::BM),
    ("ka", rules::AF),
    ("kab", rules::FF),
    ("kaj", rules::AF),
    ("kcg", rules::AF),
    ("kde", rules::BM),
    ("kea", rules::BM),
    ("kk", rules::AF),
    ("kkj", rules::AF),
    ("kl", rules::AF),
    ("km", rules::BM),
    ("kn", rules::AM),
    ("ko", rules::BM),
    ("ks", rules::AF),
    ("ksb", rules::AF),
    ("ksh", rules::KSH),
    ("ku", rules::AF),
    ("kw", rules::KW),
    ("ky", rules::AF),
    ("lag", rules::LAG),
    ("lb", rules::AF),
    ("lg", rules::AF),
    ("lij", rules::AST),
    ("lkt", rules::BM),
    ("ln", rules::AK),
    ("lo", rules::BM),
    ("lt", rules::LT),
    ("lv", rules::LV),
    ("mas", rules::AF),
    ("mg", rules::AK),
    ("mgo", rules::AF),
    ("mk", rules::MK),
    ("ml", rules::AF),
    ("mn", rules::AF),
    ("mo", rules::MO),
    ("mr", rules::AF),
    ("ms", rules::BM),
    ("mt", rules::MT),
    ("my", rules::BM),
    ("naq", rules::IU),
    ("nb", rules::AF),
    ("nd", rules::AF),
    ("ne", rules::AF),
    ("nl", rules::AST),
    ("nn", rules::AF),
    ("nnh", rules::AF),
    ("no", rules::AF),
    ("nqo", rules::BM),
    ("nr", rules::AF),
    ("nso", rules::AK),
    ("ny", rules::AF),
    ("nyn", rules::AF),
    ("om", rules::AF),
    ("or", rules::AF),
    ("os", rules::AF),
    ("osa", rules::BM),
    ("pa", rules::AK),
    ("pap", rules::AF),
    ("pcm", rules::AM),
    ("pl", rules::PL),
    ("prg", rules::LV),
    ("ps", rules::AF),
    ("pt", rules::PT),
    ("pt_PT", rules::IT),
    ("rm", rules::AF),
    ("ro", rules::MO),
    ("rof", rules::AF),
    ("ru", rules::RU),
    ("rwk", rules::AF),
    ("sah", rules::BM),
    ("saq", rules::AF),
    ("sat", rules::IU),
    ("sc", rules::AST),
    ("scn", rules::AST),
    ("sd", rules::AF),
    ("sdh", rules::AF),
    ("se", rules::IU),
    ("seh", rules::AF),
    ("ses", rules::BM),
    ("sg", rules::BM),
    ("sh", rules::BS),
    ("shi", rules::SHI),
    ("si", rules::SI),
    ("sk", rules::CS),
    ("sl", rules::SL),
    ("sma", rules::IU),
    ("smj", rules::IU),
    ("smn", rules::IU),
    ("sms", rules::IU),
    ("sn", rules::AF),
    ("so", rules::AF),
    ("sq", rules::AF),
    ("sr", rules::BS),
    ("ss", rules::AF),
    ("ssy", rules::AF),
    ("st", rules::AF),
    ("su", rules::BM),
    ("sv", rules::AST),
    ("sw", rules::AST),
    ("syr", rules::AF),
    ("ta", rules::AF),
    ("te", rules::AF),
    ("teo", rules::AF),
    ("th", rules::BM),
    ("ti", rules::AK),
    ("tig", rules::AF),
    ("tk", rules::AF),
    ("tl", rules::FIL),
    ("tn", rules::AF),
    ("to", rules::BM),
    ("tpi", rules::BM),
    ("tr", rules::AF),
    ("ts", rules::AF),
    ("tzm", rules::TZM),
    ("ug", rules::AF),
    ("uk", rules::RU),
    ("ur", rules::AST),
    ("uz", rules::AF),
    ("ve", rules::AF),
    ("vec", rules::CA),
    ("vi", rules::BM),
    ("vo", rules::AF),
    ("vun", rules::AF),
    ("wa", rules::AK),
    ("wae", rules::AF),
    ("wo", rules::BM),
    ("xh", rules::AF),
    ("xog", rules::AF),
    ("yi", rules::AST),
    ("yo", rules::BM),
    ("yue", rules::BM),
    ("zh", rules::BM),
    ("zu", rules::AM),
];
