//! Strict integer parsing and inclusive bounds.
//!
//! Accepted grammar: an optional leading `-`, then either a single `0` or a
//! nonzero digit followed by more digits. Nothing else: no `+`, no
//! surrounding whitespace, no leading zeros, no `-0`, no fractions or
//! exponents. The magnitude must also fit in the safe-integer range, i.e.
//! values that survive a round trip through an IEEE-754 double unchanged.

/// Largest `n` such that `n` and `n + 1` are both exact in an `f64` (2^53 - 1).
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;
/// Negation of [`MAX_SAFE_INTEGER`].
pub const MIN_SAFE_INTEGER: i64 = -MAX_SAFE_INTEGER;

/// Parse `s` under the strict grammar, returning `None` on any deviation
/// or when the value falls outside `MIN_SAFE_INTEGER..=MAX_SAFE_INTEGER`.
pub fn parse_safe_integer(s: &str) -> Option<i64> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let bytes = digits.as_bytes();
    match bytes {
        [] => return None,
        [b'0'] if negative => return None,
        [b'0', _, ..] => return None,
        _ => {}
    }
    if !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }

    // 16 digits already exceed 2^53; bail before i64 could overflow.
    if bytes.len() > 16 {
        return None;
    }
    let magnitude: i64 = digits.parse().ok()?;
    if magnitude > MAX_SAFE_INTEGER {
        return None;
    }
    Some(if negative { -magnitude } else { magnitude })
}

/// Which bound a value violated. The lower bound is checked first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BoundViolation {
    BelowMinimum(i64),
    AboveMaximum(i64),
}

/// Optional inclusive bounds for [`EnvParser::get_integer`](crate::EnvParser::get_integer).
///
/// `min` and `max` are independent: leaving one as `None` disables only that check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerBounds {
    /// Inclusive lower bound.
    pub min: Option<i64>,
    /// Inclusive upper bound.
    pub max: Option<i64>,
}

impl IntegerBounds {
    /// No bounds.
    pub const fn none() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Only a lower bound.
    pub const fn at_least(min: i64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Only an upper bound.
    pub const fn at_most(max: i64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Both bounds.
    pub const fn between(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Replace the lower bound.
    pub const fn with_min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    /// Replace the upper bound.
    pub const fn with_max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    pub(crate) fn check(&self, value: i64) -> Result<(), BoundViolation> {
        if let Some(min) = self.min.filter(|&min| value < min) {
            return Err(BoundViolation::BelowMinimum(min));
        }
        if let Some(max) = self.max.filter(|&max| value > max) {
            return Err(BoundViolation::AboveMaximum(max));
        }
        Ok(())
    }
}
