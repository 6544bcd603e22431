//! Decimal cosine/sine with an explicit working precision.
//!
//! Precision is counted in fractional digits. `rust_decimal` caps the scale of a value at 28
//! digits, so the working precision plus [`GUARD_DIGITS`] must stay within that cap.

use std::ops::{Deref, DerefMut};

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::TrigError;

/// Extra digits carried while a series is being summed.
pub const GUARD_DIGITS: u32 = 4;
/// Largest scale a `Decimal` can hold.
pub const MAX_SCALE: u32 = 28;
pub const MAX_WORKING_DIGITS: u32 = MAX_SCALE - GUARD_DIGITS;
pub const DEFAULT_WORKING_DIGITS: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalContext {
    digits: u32,
}

impl Default for DecimalContext {
    fn default() -> Self {
        Self {
            digits: DEFAULT_WORKING_DIGITS,
        }
    }
}

impl DecimalContext {
    pub fn new(digits: u32) -> Result<Self, TrigError> {
        if digits == 0 || digits > MAX_WORKING_DIGITS {
            return Err(TrigError::PrecisionOutOfRange {
                digits,
                max: MAX_WORKING_DIGITS,
            });
        }
        Ok(Self { digits })
    }

    #[must_use]
    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// Round `value` to the current working precision.
    #[must_use]
    pub fn round(&self, value: Decimal) -> Decimal {
        value.round_dp(self.digits)
    }

    /// Temporarily raise the working precision by `extra` digits.
    ///
    /// The previous precision comes back when the returned guard is dropped.
    pub fn raise(&mut self, extra: u32) -> PrecisionGuard<'_> {
        let restore = self.digits;
        self.digits = (self.digits + extra).min(MAX_SCALE);
        PrecisionGuard { ctx: self, restore }
    }

    /// Cosine and sine of an angle given in degrees, rounded to the working precision.
    ///
    /// No range reduction is performed: the Taylor series is summed directly on the radian
    /// value, which converges quickly for the angles keyboard layouts actually use.
    pub fn cos_sin(&mut self, degrees: Decimal) -> Result<(Decimal, Decimal), TrigError> {
        if let Some(exact) = self.exact_cos_sin(degrees) {
            return Ok(exact);
        }

        let overflow = || TrigError::Overflow { degrees };
        let radians = degrees
            .checked_mul(Decimal::PI)
            .and_then(|v| v.checked_div(dec!(180)))
            .ok_or_else(overflow)?;

        let (cos, sin) = {
            let guarded = self.raise(GUARD_DIGITS);
            let cos = guarded
                .sum_series(Decimal::ONE, 0, radians)
                .ok_or_else(overflow)?;
            let sin = guarded
                .sum_series(radians, 1, radians)
                .ok_or_else(overflow)?;
            (cos, sin)
        };

        Ok((self.round(cos), self.round(sin)))
    }

    fn exact_cos_sin(&self, degrees: Decimal) -> Option<(Decimal, Decimal)> {
        let magnitude = degrees.abs();
        let (cos, sin) = if magnitude.is_zero() {
            (Decimal::ONE, Decimal::ZERO)
        } else if magnitude == dec!(30) {
            (dec!(3).sqrt()? * dec!(0.5), dec!(0.5))
        } else if magnitude == dec!(45) {
            let half_root2 = dec!(2).sqrt()? * dec!(0.5);
            (half_root2, half_root2)
        } else if magnitude == dec!(60) {
            (dec!(0.5), dec!(3).sqrt()? * dec!(0.5))
        } else if magnitude == dec!(90) {
            (Decimal::ZERO, Decimal::ONE)
        } else {
            return None;
        };

        let sin = if degrees.is_sign_negative() { -sin } else { sin };
        Some((self.round(cos), self.round(sin)))
    }

    /// Sum `first - first*x^2/((n+1)(n+2)) + ...` until the rounded partial sum stops changing.
    ///
    /// `first = 1, n = 0` gives cosine; `first = x, n = 1` gives sine.
    fn sum_series(&self, first: Decimal, n: u32, x: Decimal) -> Option<Decimal> {
        let x2 = x.checked_mul(x)?;
        let mut term = first;
        let mut sum = self.round(first);
        let mut i = n;
        loop {
            i += 2;
            let divisor = Decimal::from(i).checked_mul(Decimal::from(i - 1))?;
            term = -term.checked_mul(x2)?.checked_div(divisor)?;
            let next = self.round(sum.checked_add(term)?);
            if next == sum {
                return Some(sum);
            }
            sum = next;
        }
    }
}

/// Scoped precision raise. Dereferences to the raised context.
#[derive(Debug)]
pub struct PrecisionGuard<'a> {
    ctx: &'a mut DecimalContext,
    restore: u32,
}

impl Deref for PrecisionGuard<'_> {
    type Target = DecimalContext;

    fn deref(&self) -> &Self::Target {
        self.ctx
    }
}

impl DerefMut for PrecisionGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.ctx
    }
}

impl Drop for PrecisionGuard<'_> {
    fn drop(&mut self) {
        self.ctx.digits = self.restore;
    }
}
