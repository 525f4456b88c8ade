//! Plural Operands
//!
//! Extraction of the CLDR operand tuple (n, i, v, w, f, t, e) from an
//! input number. Visible fraction digits only exist on string literals:
//! `"1.50"` keeps its trailing zero (v=2) while the float `1.5` renders
//! as `"1.5"` (v=1) and `1.0` as `"1"` (v=0).

use crate::error::PluralError;
use crate::Result;

/// CLDR plural operands.
///
/// All fields derive from the absolute value of the input; the sign of a
/// number never influences its plural category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PluralOperands {
    /// Absolute value of the input
    pub n: f64,
    /// Integer part of `n`
    pub i: u64,
    /// Count of visible fraction digits, with trailing zeros
    pub v: usize,
    /// Count of visible fraction digits, without trailing zeros
    pub w: usize,
    /// Visible fraction digits as an integer, with trailing zeros
    pub f: u64,
    /// Visible fraction digits as an integer, without trailing zeros
    pub t: u64,
    /// Compact-notation exponent (0 when absent)
    pub e: u32,
}

/// A number accepted by the detectors.
///
/// Integers and floats carry no display information; only string
/// literals can express visible fraction digits (`"1.50"`) or a compact
/// exponent (`"1c6"`).
#[derive(Debug, Clone, PartialEq)]
pub enum NumberInput {
    /// Magnitude of an integer input
    Integer(u64),
    /// A float input
    Float(f64),
    /// A numeric string literal
    Literal(String),
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),+) => {$(
        impl From<$ty> for NumberInput {
            fn from(value: $ty) -> Self {
                NumberInput::Integer(value as u64)
            }
        }
    )+};
}

macro_rules! impl_from_signed {
    ($($ty:ty),+) => {$(
        impl From<$ty> for NumberInput {
            fn from(value: $ty) -> Self {
                NumberInput::Integer(value.unsigned_abs() as u64)
            }
        }
    )+};
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i8, i16, i32, i64, isize);

impl From<f32> for NumberInput {
    fn from(value: f32) -> Self {
        NumberInput::Float(f64::from(value))
    }
}

impl From<f64> for NumberInput {
    fn from(value: f64) -> Self {
        NumberInput::Float(value)
    }
}

impl From<&str> for NumberInput {
    fn from(value: &str) -> Self {
        NumberInput::Literal(value.to_string())
    }
}

impl From<String> for NumberInput {
    fn from(value: String) -> Self {
        NumberInput::Literal(value)
    }
}

impl PluralOperands {
    /// Extract the operand tuple from an input.
    ///
    /// # Example
    ///
    /// ```
    /// use numerus_core::{NumberInput, PluralOperands};
    ///
    /// let po = PluralOperands::from_input(&NumberInput::from("1.50"))?;
    /// assert_eq!((po.i, po.v, po.w, po.f, po.t), (1, 2, 1, 50, 5));
    /// # Ok::<(), numerus_core::PluralError>(())
    /// ```
    pub fn from_input(input: &NumberInput) -> Result<Self> {
        match input {
            NumberInput::Integer(value) => Ok(Self::from_integer(*value)),
            NumberInput::Float(value) => Self::from_float(*value),
            NumberInput::Literal(value) => Self::from_literal(value),
        }
    }

    fn from_integer(value: u64) -> Self {
        Self {
            n: value as f64,
            i: value,
            v: 0,
            w: 0,
            f: 0,
            t: 0,
            e: 0,
        }
    }

    fn from_float(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(PluralError::InvalidNumericLiteral(value.to_string()));
        }
        // Shortest round-trip decimal form; `Display` never produces
        // scientific notation, and whole values render without a point.
        Self::from_literal(&format!("{}", value.abs()))
    }

    fn from_literal(literal: &str) -> Result<Self> {
        parse_literal(literal)
            .ok_or_else(|| PluralError::InvalidNumericLiteral(literal.to_string()))
    }
}

impl TryFrom<&NumberInput> for PluralOperands {
    type Error = PluralError;

    fn try_from(input: &NumberInput) -> Result<Self> {
        Self::from_input(input)
    }
}

impl TryFrom<NumberInput> for PluralOperands {
    type Error = PluralError;

    fn try_from(input: NumberInput) -> Result<Self> {
        Self::from_input(&input)
    }
}

/// Parse `digits [ '.' digits ] [ ('c' | 'e') digits ]` with one optional
/// leading minus sign, ASCII digits only.
fn parse_literal(literal: &str) -> Option<PluralOperands> {
    let unsigned = literal.strip_prefix('-').unwrap_or(literal);

    let (mantissa, exponent) = match unsigned.find(['c', 'e']) {
        Some(pos) => {
            let digits = &unsigned[pos + 1..];
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            (&unsigned[..pos], digits.parse::<u32>().ok()?)
        }
        None => (unsigned, 0),
    };

    let (int_digits, frac_digits) = match mantissa.find('.') {
        Some(pos) => {
            let frac = &mantissa[pos + 1..];
            if frac.is_empty() {
                return None;
            }
            (&mantissa[..pos], frac)
        }
        None => (mantissa, ""),
    };
    if int_digits.is_empty()
        || !int_digits.bytes().all(|b| b.is_ascii_digit())
        || !frac_digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    // A compact exponent moves the decimal point right across the digit
    // strings, so "1.20050c3" becomes 1200.50 with its display precision
    // intact (v=2, w=1, f=50, t=5).
    let shift = exponent as usize;
    let consumed = shift.min(frac_digits.len());
    let (moved, fraction) = frac_digits.split_at(consumed);

    let mut int_part = parse_digits(int_digits);
    for byte in moved.bytes() {
        int_part = int_part
            .saturating_mul(10)
            .saturating_add(u64::from(byte - b'0'));
    }
    let i = shift_left(int_part, shift - consumed);

    let v = fraction.len();
    let f = parse_digits(fraction);
    let trimmed = fraction.trim_end_matches('0');
    let w = trimmed.len();
    let t = parse_digits(trimmed);

    let n = if f == 0 {
        i as f64
    } else {
        // Past ~308 fraction digits the divisor is infinite and the
        // quotient 0; the cap only keeps the cast in i32 range.
        i as f64 + f as f64 / 10f64.powi(v.min(400) as i32)
    };

    Some(PluralOperands {
        n,
        i,
        v,
        w,
        f,
        t,
        e: exponent,
    })
}

/// Digit-string to integer, saturating at `u64::MAX`. Leading zeros fold
/// away, so "001" parses to 1 and "" to 0.
fn parse_digits(digits: &str) -> u64 {
    digits.bytes().fold(0u64, |acc, byte| {
        acc.saturating_mul(10).saturating_add(u64::from(byte - b'0'))
    })
}

/// Append `zeros` decimal zeros, saturating at `u64::MAX`.
fn shift_left(value: u64, zeros: usize) -> u64 {
    if value == 0 {
        return 0;
    }
    // u64::MAX has 20 digits; longer shifts always saturate.
    if zeros >= 20 {
        return u64::MAX;
    }
    let mut shifted = value;
    for _ in 0..zeros {
        shifted = shifted.saturating_mul(10);
    }
    shifted
}
