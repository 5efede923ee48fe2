use crate::types::decimal::{DecimalError, FixedDecimal, ParseDecimalReason, Precision};
use num_bigint::BigInt;
use std::str::FromStr;

impl<P: Precision> FixedDecimal<P> {
    /// Parse the machine format `[-]digits[.digits]`.
    ///
    /// The separator is always `.`; leading zeros are not significant and the
    /// number of fractional digits becomes the scale.
    pub fn parse(input: &str) -> Result<Self, DecimalError> {
        let reject = |reason| DecimalError::parse(input, reason);

        if input.is_empty() {
            return Err(reject(ParseDecimalReason::Empty));
        }

        let (negative, body) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input.strip_prefix('+').unwrap_or(input)),
        };

        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
        if frac_part.contains('.') {
            return Err(reject(ParseDecimalReason::MultipleSeparators));
        }
        if let Some(c) = int_part
            .chars()
            .chain(frac_part.chars())
            .find(|c| !c.is_ascii_digit())
        {
            return Err(reject(ParseDecimalReason::InvalidCharacter(c)));
        }
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(reject(ParseDecimalReason::NoDigits));
        }

        let scale = u32::try_from(frac_part.len())
            .ok()
            .filter(|scale| *scale <= P::MAX_SCALE)
            .ok_or_else(|| {
                reject(ParseDecimalReason::TooManyDecimalPlaces {
                    max: P::MAX_SCALE,
                    found: frac_part.len(),
                })
            })?;

        let digits = format!("{int_part}{frac_part}");
        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10)
            .ok_or_else(|| reject(ParseDecimalReason::NoDigits))?;
        let mantissa = if negative { -magnitude } else { magnitude };

        if !Self::fits(&mantissa, scale) {
            return Err(reject(ParseDecimalReason::OutOfRange));
        }

        Ok(Self::from_parts_unchecked(mantissa, scale))
    }
}

impl<P: Precision> FromStr for FixedDecimal<P> {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<P: Precision> TryFrom<&str> for FixedDecimal<P> {
    type Error = DecimalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
