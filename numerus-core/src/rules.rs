//! Cardinal Rule Families
//!
//! One pure function per CLDR rule family. Locales sharing a family share
//! the function and its allowed-category set. Branch order inside a
//! function is significant: the first matching branch wins and `Other` is
//! the fallback for every family.
//!
//! Comparisons against `n` are loose whole-value tests (`1`, `1.0` and
//! `"1.00"` all satisfy `n == 1`); modulus always runs on the integer
//! part `i`.

#![allow(clippy::float_cmp)]

use crate::category::PluralCategory::{self, Few, Many, One, Other, Two, Zero};
use crate::operands::PluralOperands;

/// A family's evaluation function.
pub type PluralRule = fn(&PluralOperands) -> PluralCategory;

/// A rule family: evaluation function plus the categories it can produce.
#[derive(Debug, Clone, Copy)]
pub struct RuleFamily {
    /// Evaluation function, shared by every locale in the family
    pub rule: PluralRule,
    /// Producible categories in CLDR order, `Other` always last
    pub categories: &'static [PluralCategory],
}

// ============================================================================
// Families
// ============================================================================

pub const AF: RuleFamily = RuleFamily {
    rule: cardinal_af,
    categories: &[One, Other],
};

fn cardinal_af(po: &PluralOperands) -> PluralCategory {
    if po.n == 1.0 { One } else { Other }
}

pub const AK: RuleFamily = RuleFamily {
    rule: cardinal_ak,
    categories: &[One, Other],
};

fn cardinal_ak(po: &PluralOperands) -> PluralCategory {
    if po.n == 0.0 || po.n == 1.0 { One } else { Other }
}

pub const AM: RuleFamily = RuleFamily {
    rule: cardinal_am,
    categories: &[One, Other],
};

fn cardinal_am(po: &PluralOperands) -> PluralCategory {
    if po.i == 0 || po.n == 1.0 { One } else { Other }
}

pub const AR: RuleFamily = RuleFamily {
    rule: cardinal_ar,
    categories: &[Zero, One, Two, Few, Many, Other],
};

fn cardinal_ar(po: &PluralOperands) -> PluralCategory {
    if po.n == 0.0 {
        return Zero;
    }
    if po.n == 1.0 {
        return One;
    }
    if po.n == 2.0 {
        return Two;
    }
    let mod100 = po.i % 100;
    if (3..=10).contains(&mod100) {
        return Few;
    }
    if mod100 >= 11 {
        return Many;
    }
    Other
}

pub const AST: RuleFamily = RuleFamily {
    rule: cardinal_ast,
    categories: &[One, Other],
};

fn cardinal_ast(po: &PluralOperands) -> PluralCategory {
    if po.i == 1 && po.v == 0 { One } else { Other }
}

pub const BE: RuleFamily = RuleFamily {
    rule: cardinal_be,
    categories: &[One, Few, Many, Other],
};

fn cardinal_be(po: &PluralOperands) -> PluralCategory {
    if po.f != 0 {
        return Other;
    }
    let mod10 = po.i % 10;
    let mod100 = po.i % 100;
    if mod10 == 1 && mod100 != 11 {
        return One;
    }
    if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        return Few;
    }
    if mod10 == 0 || mod10 >= 5 || (11..=14).contains(&mod100) {
        return Many;
    }
    Other
}

pub const BM: RuleFamily = RuleFamily {
    rule: cardinal_bm,
    categories: &[Other],
};

fn cardinal_bm(_po: &PluralOperands) -> PluralCategory {
    Other
}

pub const BR: RuleFamily = RuleFamily {
    rule: cardinal_br,
    categories: &[One, Two, Few, Many, Other],
};

fn cardinal_br(po: &PluralOperands) -> PluralCategory {
    if po.f > 0 {
        return Other;
    }
    let mod10 = po.i % 10;
    let mod100 = po.i % 100;
    if mod10 == 1 && ![11, 71, 91].contains(&mod100) {
        return One;
    }
    if mod10 == 2 && ![12, 72, 92].contains(&mod100) {
        return Two;
    }
    if [3, 4, 9].contains(&mod10)
        && !(10..=19).contains(&mod100)
        && !(70..=79).contains(&mod100)
        && mod100 < 90
    {
        return Few;
    }
    if po.i != 0 && po.i % 1_000_000 == 0 {
        return Many;
    }
    Other
}

pub const BS: RuleFamily = RuleFamily {
    rule: cardinal_bs,
    categories: &[One, Few, Other],
};

fn cardinal_bs(po: &PluralOperands) -> PluralCategory {
    if (po.v == 0 && po.i % 10 == 1 && po.i % 100 != 11)
        || (po.f % 10 == 1 && po.f % 100 != 11)
    {
        return One;
    }
    if (po.v == 0 && (2..=4).contains(&(po.i % 10)) && !(12..=14).contains(&(po.i % 100)))
        || ((2..=4).contains(&(po.f % 10)) && !(12..=14).contains(&(po.f % 100)))
    {
        return Few;
    }
    Other
}

pub const CA: RuleFamily = RuleFamily {
    rule: cardinal_ca,
    categories: &[One, Many, Other],
};

fn cardinal_ca(po: &PluralOperands) -> PluralCategory {
    if po.i == 1 && po.v == 0 {
        return One;
    }
    if (po.e == 0 && po.i != 0 && po.i % 1_000_000 == 0 && po.v == 0) || po.e > 5 {
        return Many;
    }
    Other
}

pub const CEB: RuleFamily = RuleFamily {
    rule: cardinal_ceb,
    categories: &[One, Other],
};

fn cardinal_ceb(po: &PluralOperands) -> PluralCategory {
    if (po.v == 0 && (1..=3).contains(&po.i))
        || (po.v == 0 && ![4, 6, 9].contains(&(po.i % 10)))
        || (po.v != 0 && ![4, 6, 9].contains(&(po.f % 10)))
    {
        One
    } else {
        Other
    }
}

pub const CS: RuleFamily = RuleFamily {
    rule: cardinal_cs,
    categories: &[One, Few, Many, Other],
};

fn cardinal_cs(po: &PluralOperands) -> PluralCategory {
    if po.v != 0 {
        return Many;
    }
    match po.i {
        1 => One,
        2..=4 => Few,
        _ => Other,
    }
}

pub const CY: RuleFamily = RuleFamily {
    rule: cardinal_cy,
    categories: &[Zero, One, Two, Few, Many, Other],
};

fn cardinal_cy(po: &PluralOperands) -> PluralCategory {
    if po.n == 0.0 {
        return Zero;
    }
    if po.n == 1.0 {
        return One;
    }
    if po.n == 2.0 {
        return Two;
    }
    if po.n == 3.0 {
        return Few;
    }
    if po.n == 6.0 {
        return Many;
    }
    Other
}

pub const DA: RuleFamily = RuleFamily {
    rule: cardinal_da,
    categories: &[One, Other],
};

fn cardinal_da(po: &PluralOperands) -> PluralCategory {
    if po.n == 1.0 || (po.t != 0 && (po.i == 0 || po.i == 1)) {
        One
    } else {
        Other
    }
}

pub const DSB: RuleFamily = RuleFamily {
    rule: cardinal_dsb,
    categories: &[One, Two, Few, Other],
};

fn cardinal_dsb(po: &PluralOperands) -> PluralCategory {
    let modi = po.i % 100;
    let modf = po.f % 100;
    if (po.v == 0 && modi == 1) || modf == 1 {
        return One;
    }
    if (po.v == 0 && modi == 2) || modf == 2 {
        return Two;
    }
    if (po.v == 0 && (3..=4).contains(&modi)) || (3..=4).contains(&modf) {
        return Few;
    }
    Other
}

pub const ES: RuleFamily = RuleFamily {
    rule: cardinal_es,
    categories: &[One, Many, Other],
};

fn cardinal_es(po: &PluralOperands) -> PluralCategory {
    if po.n == 1.0 {
        return One;
    }
    if (po.e == 0 && po.i != 0 && po.i % 1_000_000 == 0 && po.v == 0)
        || !(0..=5).contains(&po.e)
    {
        return Many;
    }
    Other
}

pub const FF: RuleFamily = RuleFamily {
    rule: cardinal_ff,
    categories: &[One, Other],
};

fn cardinal_ff(po: &PluralOperands) -> PluralCategory {
    if po.i == 0 || po.i == 1 { One } else { Other }
}

pub const FIL: RuleFamily = RuleFamily {
    rule: cardinal_fil,
    categories: &[One, Other],
};

fn cardinal_fil(po: &PluralOperands) -> PluralCategory {
    if (po.v == 0 && (1..=3).contains(&po.i))
        || (po.v == 0 && ![4, 6, 9].contains(&(po.i % 10)))
        || (po.v != 0 && ![4, 6, 9].contains(&(po.f % 10)))
    {
        One
    } else {
        Other
    }
}

pub const FR: RuleFamily = RuleFamily {
    rule: cardinal_fr,
    categories: &[One, Many, Other],
};

fn cardinal_fr(po: &PluralOperands) -> PluralCategory {
    if po.i == 0 || po.i == 1 {
        return One;
    }
    if (po.e == 0 && po.i % 1_000_000 == 0 && po.v == 0) || !(0..=5).contains(&po.e) {
        return Many;
    }
    Other
}

pub const GA: RuleFamily = RuleFamily {
    rule: cardinal_ga,
    categories: &[One, Two, Few, Many, Other],
};

fn cardinal_ga(po: &PluralOperands) -> PluralCategory {
    if po.n == 1.0 {
        return One;
    }
    if po.n == 2.0 {
        return Two;
    }
    if po.f == 0 && (3..=6).contains(&po.i) {
        return Few;
    }
    if po.f == 0 && (7..=10).contains(&po.i) {
        return Many;
    }
    Other
}

pub const GD: RuleFamily = RuleFamily {
    rule: cardinal_gd,
    categories: &[One, Two, Few, Other],
};

fn cardinal_gd(po: &PluralOperands) -> PluralCategory {
    if po.n == 1.0 || po.n == 11.0 {
        return One;
    }
    if po.n == 2.0 || po.n == 12.0 {
        return Two;
    }
    if po.f == 0 && ((3..=10).contains(&po.i) || (13..=19).contains(&po.i)) {
        return Few;
    }
    Other
}

pub const GV: RuleFamily = RuleFamily {
    rule: cardinal_gv,
    categories: &[One, Two, Few, Many, Other],
};

fn cardinal_gv(po: &PluralOperands) -> PluralCategory {
    let mod10 = po.i % 10;
    if po.v == 0 && mod10 == 1 {
        return One;
    }
    if po.v == 0 && mod10 == 2 {
        return Two;
    }
    if po.v == 0 && [0, 20, 40, 60, 80].contains(&(po.i % 100)) {
        return Few;
    }
    if po.v != 0 {
        return Many;
    }
    Other
}

pub const IS: RuleFamily = RuleFamily {
    rule: cardinal_is,
    categories: &[One, Other],
};

fn cardinal_is(po: &PluralOperands) -> PluralCategory {
    if (po.t == 0 && po.i % 10 == 1 && po.i % 100 != 11)
        || (po.t % 10 == 1 && po.t % 100 != 11)
    {
        One
    } else {
        Other
    }
}

pub const IT: RuleFamily = RuleFamily {
    rule: cardinal_it,
    categories: &[One, Many, Other],
};

fn cardinal_it(po: &PluralOperands) -> PluralCategory {
    if po.i == 1 && po.v == 0 {
        return One;
    }
    if (po.e == 0 && po.i != 0 && po.i % 1_000_000 == 0 && po.v == 0)
        || !(0..=5).contains(&po.e)
    {
        return Many;
    }
    Other
}

pub const IU: RuleFamily = RuleFamily {
    rule: cardinal_iu,
    categories: &[One, Two, Other],
};

fn cardinal_iu(po: &PluralOperands) -> PluralCategory {
    if po.n == 1.0 {
        return One;
    }
    if po.n == 2.0 {
        return Two;
    }
    Other
}

pub const KSH: RuleFamily = RuleFamily {
    rule: cardinal_ksh,
    categories: &[Zero, One, Other],
};

fn cardinal_ksh(po: &PluralOperands) -> PluralCategory {
    if po.n == 0.0 {
        return Zero;
    }
    if po.n == 1.0 {
        return One;
    }
    Other
}

pub const KW: RuleFamily = RuleFamily {
    rule: cardinal_kw,
    categories: &[Zero, One, Two, Few, Many, Other],
};

fn cardinal_kw(po: &PluralOperands) -> PluralCategory {
    if po.n == 0.0 {
        return Zero;
    }
    if po.n == 1.0 {
        return One;
    }
    let mod100 = po.i % 100;
    let mod100_000 = po.i % 100_000;
    if [2, 22, 42, 62, 82].contains(&mod100) || po.i % 1_000_000 == 100_000 {
        return Two;
    }
    if po.i % 1000 == 0
        && ((1000..=20_000).contains(&mod100_000)
            || [40_000, 60_000, 80_000].contains(&mod100_000))
    {
        return Two;
    }
    if [3, 23, 43, 63, 83].contains(&mod100) {
        return Few;
    }
    if [1, 21, 41, 61, 81].contains(&mod100) {
        return Many;
    }
    Other
}

pub const LAG: RuleFamily = RuleFamily {
    rule: cardinal_lag,
    categories: &[Zero, One, Other],
};

fn cardinal_lag(po: &PluralOperands) -> PluralCategory {
    if po.n == 0.0 {
        return Zero;
    }
    if po.i == 0 || po.i == 1 {
        return One;
    }
    Other
}

pub const LT: RuleFamily = RuleFamily {
    rule: cardinal_lt,
    categories: &[One, Few, Many, Other],
};

fn cardinal_lt(po: &PluralOperands) -> PluralCategory {
    if po.f != 0 {
        return Many;
    }
    let mod10 = po.i % 10;
    let mod100 = po.i % 100;
    if mod10 == 1 && !(11..=19).contains(&mod100) {
        return One;
    }
    if mod10 >= 1 && !(11..=19).contains(&mod100) {
        return Few;
    }
    Other
}

pub const LV: RuleFamily = RuleFamily {
    rule: cardinal_lv,
    categories: &[Zero, One, Other],
};

fn cardinal_lv(po: &PluralOperands) -> PluralCategory {
    let mod10 = po.i % 10;
    let mod100 = po.i % 100;
    let modf10 = po.f % 10;
    let modf100 = po.f % 100;
    // One outranks Zero here; the original evaluates it first.
    if (mod10 == 1 && mod100 != 11)
        || (po.v == 2 && modf10 == 1 && modf100 != 11)
        || (po.v != 2 && modf10 == 1)
    {
        return One;
    }
    if mod10 == 0 || (11..=19).contains(&mod100) || (po.v == 2 && (11..=19).contains(&modf100)) {
        return Zero;
    }
    Other
}

pub const MK: RuleFamily = RuleFamily {
    rule: cardinal_mk,
    categories: &[One, Other],
};

fn cardinal_mk(po: &PluralOperands) -> PluralCategory {
    if (po.v == 0 && po.i % 10 == 1 && po.i % 100 != 11)
        || (po.f % 10 == 1 && po.f % 100 != 11)
    {
        One
    } else {
        Other
    }
}

pub const MO: RuleFamily = RuleFamily {
    rule: cardinal_mo,
    categories: &[One, Few, Other],
};

fn cardinal_mo(po: &PluralOperands) -> PluralCategory {
    if po.v == 0 && po.i == 1 {
        return One;
    }
    if po.v != 0 || po.n == 0.0 || (po.n != 1.0 && (1..=19).contains(&(po.i % 100))) {
        return Few;
    }
    Other
}

pub const MT: RuleFamily = RuleFamily {
    rule: cardinal_mt,
    categories: &[One, Two, Few, Many, Other],
};

fn cardinal_mt(po: &PluralOperands) -> PluralCategory {
    if po.n == 1.0 {
        return One;
    }
    if po.n == 2.0 {
        return Two;
    }
    let mod100 = po.i % 100;
    if po.n == 0.0 || (3..=10).contains(&mod100) {
        return Few;
    }
    if (11..=19).contains(&mod100) {
        return Many;
    }
    Other
}

pub const PL: RuleFamily = RuleFamily {
    rule: cardinal_pl,
    categories: &[One, Few, Many, Other],
};

fn cardinal_pl(po: &PluralOperands) -> PluralCategory {
    if po.v == 0 && po.i == 1 {
        return One;
    }
    let mod10 = po.i % 10;
    let mod100 = po.i % 100;
    if po.v == 0 && (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        return Few;
    }
    if po.v == 0
        && ((po.i != 1 && mod10 <= 1) || mod10 >= 5 || (12..=14).contains(&mod100))
    {
        return Many;
    }
    Other
}

pub const PT: RuleFamily = RuleFamily {
    rule: cardinal_pt,
    categories: &[One, Many, Other],
};

fn cardinal_pt(po: &PluralOperands) -> PluralCategory {
    if po.i == 0 || po.i == 1 {
        return One;
    }
    if (po.e == 0 && po.i % 1_000_000 == 0 && po.v == 0) || !(0..=5).contains(&po.e) {
        return Many;
    }
    Other
}

pub const RU: RuleFamily = RuleFamily {
    rule: cardinal_ru,
    categories: &[One, Few, Many, Other],
};

fn cardinal_ru(po: &PluralOperands) -> PluralCategory {
    if po.v != 0 {
        return Other;
    }
    let mod10 = po.i % 10;
    let mod100 = po.i % 100;
    if mod10 == 1 && mod100 != 11 {
        return One;
    }
    if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        return Few;
    }
    if mod10 == 0 || mod10 >= 5 || (11..=14).contains(&mod100) {
        return Many;
    }
    Other
}

pub const SHI: RuleFamily = RuleFamily {
    rule: cardinal_shi,
    categories: &[One, Few, Other],
};

fn cardinal_shi(po: &PluralOperands) -> PluralCategory {
    if po.i == 0 || po.n == 1.0 {
        return One;
    }
    if po.f == 0 && po.i >= 2 && po.n <= 10.0 {
        return Few;
    }
    Other
}

pub const SI: RuleFamily = RuleFamily {
    rule: cardinal_si,
    categories: &[One, Other],
};

fn cardinal_si(po: &PluralOperands) -> PluralCategory {
    if po.n == 0.0 || po.n == 1.0 || (po.i == 0 && po.f == 1) {
        One
    } else {
        Other
    }
}

pub const SL: RuleFamily = RuleFamily {
    rule: cardinal_sl,
    categories: &[One, Two, Few, Other],
};

fn cardinal_sl(po: &PluralOperands) -> PluralCategory {
    let mod100 = po.i % 100;
    if po.v == 0 && mod100 == 1 {
        return One;
    }
    if po.v == 0 && mod100 == 2 {
        return Two;
    }
    if po.v != 0 || (3..=4).contains(&mod100) {
        return Few;
    }
    Other
}

pub const TZM: RuleFamily = RuleFamily {
    rule: cardinal_tzm,
    categories: &[One, Other],
};

fn cardinal_tzm(po: &PluralOperands) -> PluralCategory {
    if po.f != 0 {
        return Other;
    }
    if po.i == 0 || po.i == 1 || (11..=99).contains(&po.i) {
        return One;
    }
    Other
}
