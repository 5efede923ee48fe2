use crate::types::decimal::{DecimalError, FixedDecimal, Precision, strip_trailing_zeros, ten_pow};
use num_traits::Zero;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl<P: Precision> FixedDecimal<P> {
    /// Exact sum at the larger of the two scales.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, DecimalError> {
        let scale = self.scale.max(rhs.scale);

        Self::bounded(self.rescaled(scale) + rhs.rescaled(scale), scale)
    }

    /// Exact difference at the larger of the two scales.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, DecimalError> {
        let scale = self.scale.max(rhs.scale);

        Self::bounded(self.rescaled(scale) - rhs.rescaled(scale), scale)
    }

    /// Product at the summed scale, truncated toward zero past `MAX_SCALE`.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, DecimalError> {
        let mut mantissa = &self.mantissa * &rhs.mantissa;
        let mut scale = self.scale + rhs.scale;

        if scale > P::MAX_SCALE {
            mantissa /= ten_pow(scale - P::MAX_SCALE);
            scale = P::MAX_SCALE;
        }

        Self::bounded(mantissa, scale)
    }

    /// Quotient computed to `MAX_SCALE` places, truncated toward zero, with
    /// trailing zeros stripped.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, DecimalError> {
        if rhs.mantissa.is_zero() {
            return Err(DecimalError::DivisionByZero);
        }

        // (m_a / 10^s_a) / (m_b / 10^s_b) at MAX_SCALE
        let shift = P::MAX_SCALE + rhs.scale - self.scale;
        let quotient = (&self.mantissa * ten_pow(shift)) / &rhs.mantissa;
        let (mantissa, scale) = strip_trailing_zeros(quotient, P::MAX_SCALE);

        Self::bounded(mantissa, scale)
    }

    /// Negation; the range is asymmetric so `-min()` overflows.
    pub fn checked_neg(&self) -> Result<Self, DecimalError> {
        Self::bounded(-&self.mantissa, self.scale)
    }
}

///
/// OPERATORS
///
/// Operators follow the primitive integers: overflow and division by zero panic.
///

macro_rules! impl_decimal_op {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl<P: Precision> $trait for FixedDecimal<P> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                (&self).$method(&rhs)
            }
        }

        impl<P: Precision> $trait<&FixedDecimal<P>> for &FixedDecimal<P> {
            type Output = FixedDecimal<P>;

            fn $method(self, rhs: &FixedDecimal<P>) -> Self::Output {
                match self.$checked(rhs) {
                    Ok(value) => value,
                    Err(err) => panic!("{} {}: {err}", P::NAME, stringify!($method)),
                }
            }
        }
    };
}

impl_decimal_op!(Add, add, checked_add);
impl_decimal_op!(Sub, sub, checked_sub);
impl_decimal_op!(Mul, mul, checked_mul);
impl_decimal_op!(Div, div, checked_div);

impl<P: Precision> Neg for FixedDecimal<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<P: Precision> Neg for &FixedDecimal<P> {
    type Output = FixedDecimal<P>;

    fn neg(self) -> Self::Output {
        match self.checked_neg() {
            Ok(value) => value,
            Err(err) => panic!("{} neg: {err}", P::NAME),
        }
    }
}

impl<P: Precision> std::iter::Sum for FixedDecimal<P> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, item| acc + item)
    }
}
