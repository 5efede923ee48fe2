use crate::types::decimal::{DecimalError, FixedDecimal, Precision, strip_trailing_zeros, ten_pow};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

///
/// RoundingMode
///
/// Every mode is symmetric around zero.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RoundingMode {
    /// Nearest; midpoints move away from zero.
    HalfAwayFromZero,
    /// Drop the excess digits.
    TowardZero,
    /// Any non-zero excess bumps the magnitude.
    AwayFromZero,
}

/// Round `mantissa * 10^-scale` to at most `places` fractional digits.
/// Returns the new mantissa, expressed at `min(scale, places)`.
pub(crate) fn round_mantissa(
    mantissa: &BigInt,
    scale: u32,
    places: u32,
    mode: RoundingMode,
) -> (BigInt, u32) {
    if scale <= places {
        return (mantissa.clone(), scale);
    }

    let divisor = ten_pow(scale - places);
    let magnitude = mantissa.abs();
    let mut quotient = &magnitude / &divisor;
    let remainder = &magnitude % &divisor;

    let bump = match mode {
        RoundingMode::HalfAwayFromZero => remainder * 2u8 >= divisor,
        RoundingMode::TowardZero => false,
        RoundingMode::AwayFromZero => !remainder.is_zero(),
    };
    if bump {
        quotient += BigInt::one();
    }

    let rounded = if mantissa.is_negative() {
        -quotient
    } else {
        quotient
    };

    (rounded, places)
}

impl<P: Precision> FixedDecimal<P> {
    /// Round to at most `places` fractional digits with the given mode.
    ///
    /// Only rounding away from zero can leave the range, and only within one
    /// unit of the last place of `max()` / `min()`.
    pub fn checked_round(&self, places: u32, mode: RoundingMode) -> Result<Self, DecimalError> {
        let (mantissa, scale) = round_mantissa(&self.mantissa, self.scale, places, mode);

        Self::bounded(mantissa, scale)
    }

    /// Round half away from zero to at most `places` fractional digits.
    ///
    /// Values already within `places` are returned unchanged; carries
    /// propagate into the integer part (`9.99` at 1 place is `10.0`).
    ///
    /// # Panics
    ///
    /// Panics when the carry leaves the range, which only happens next to
    /// `max()` / `min()`. Use [`Self::checked_round`] to get an error instead.
    #[must_use]
    pub fn rounded(&self, places: u32) -> Self {
        match self.checked_round(places, RoundingMode::HalfAwayFromZero) {
            Ok(value) => value,
            Err(err) => panic!("{} rounded: {err}", P::NAME),
        }
    }

    /// Truncate toward zero to at most `places` fractional digits, then strip
    /// trailing zeros.
    #[must_use]
    pub fn floor(&self, places: u32) -> Self {
        let (mantissa, scale) =
            round_mantissa(&self.mantissa, self.scale, places, RoundingMode::TowardZero);
        let (mantissa, scale) = strip_trailing_zeros(mantissa, scale);

        Self::from_parts_unchecked(mantissa, scale)
    }

    /// Round away from zero to at most `places` fractional digits, then strip
    /// trailing zeros.
    ///
    /// # Panics
    ///
    /// Panics when the result leaves the range, as [`Self::rounded`] does.
    #[must_use]
    pub fn ceil(&self, places: u32) -> Self {
        match self.checked_round(places, RoundingMode::AwayFromZero) {
            Ok(value) => value.normalize(),
            Err(err) => panic!("{} ceil: {err}", P::NAME),
        }
    }
}
