mod arith;
mod error;
mod parse;
mod round;


pub use error::{DecimalError, ParseDecimalReason};
pub use round::RoundingMode;

pub(crate) use round::round_mantissa;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Signed, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

///
/// Precision
///
/// Compile-time bounds of a fixed-point decimal family.
/// A value fits when its mantissa at `MAX_SCALE` fits a signed `BITS`-wide integer.
///

pub trait Precision: Clone + Copy + fmt::Debug + Default + Eq + Send + Sync + 'static {
    const MAX_SCALE: u32;
    const BITS: u32;
    const NAME: &'static str;
}

///
/// Standard
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Standard;

impl Precision for Standard {
    const MAX_SCALE: u32 = 18;
    const BITS: u32 = 192;
    const NAME: &'static str = "Decimal";
}

///
/// Precise
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Precise;

impl Precision for Precise {
    const MAX_SCALE: u32 = 36;
    const BITS: u32 = 256;
    const NAME: &'static str = "PreciseDecimal";
}

/// 18 decimal places, 192-bit range.
pub type Decimal = FixedDecimal<Standard>;

/// 36 decimal places, 256-bit range.
pub type PreciseDecimal = FixedDecimal<Precise>;

///
/// FixedDecimal
///
/// value == mantissa * 10^-scale
///
/// The representation is kept as given (trailing zeros survive until
/// `normalize`), while equality, ordering and hashing are numeric.
///

#[derive(Clone)]
pub struct FixedDecimal<P: Precision> {
    mantissa: BigInt,
    scale: u32,
    precision: PhantomData<P>,
}

impl<P: Precision> FixedDecimal<P> {
    pub const MAX_SCALE: u32 = P::MAX_SCALE;

    ///
    /// CONSTRUCTION
    ///

    pub(crate) const fn from_parts_unchecked(mantissa: BigInt, scale: u32) -> Self {
        Self {
            mantissa,
            scale,
            precision: PhantomData,
        }
    }

    /// Build from a signed mantissa and scale, enforcing both bounds.
    pub fn from_mantissa(mantissa: impl Into<BigInt>, scale: u32) -> Result<Self, DecimalError> {
        if scale > P::MAX_SCALE {
            return Err(DecimalError::ScaleOutOfRange {
                scale,
                max: P::MAX_SCALE,
            });
        }

        Self::bounded(mantissa.into(), scale)
    }

    // Range-check a mantissa already reduced to at most MAX_SCALE places.
    pub(crate) fn bounded(mantissa: BigInt, scale: u32) -> Result<Self, DecimalError> {
        if Self::fits(&mantissa, scale) {
            Ok(Self::from_parts_unchecked(mantissa, scale))
        } else {
            Err(DecimalError::Overflow)
        }
    }

    pub(crate) fn fits(mantissa: &BigInt, scale: u32) -> bool {
        let widened = mantissa * ten_pow(P::MAX_SCALE - scale);
        let limit = BigInt::one() << (P::BITS - 1);

        widened >= -&limit && widened < limit
    }

    #[must_use]
    pub fn zero() -> Self {
        Self::from_parts_unchecked(BigInt::zero(), 0)
    }

    #[must_use]
    pub fn one() -> Self {
        Self::from_parts_unchecked(BigInt::one(), 0)
    }

    /// Largest representable value.
    #[must_use]
    pub fn max() -> Self {
        let limit = BigInt::one() << (P::BITS - 1);

        Self::from_parts_unchecked(limit - 1, P::MAX_SCALE)
    }

    /// Smallest representable value.
    #[must_use]
    pub fn min() -> Self {
        let limit = BigInt::one() << (P::BITS - 1);

        Self::from_parts_unchecked(-limit, P::MAX_SCALE)
    }

    /// 10^exp, if representable.
    pub fn pow10(exp: u32) -> Result<Self, DecimalError> {
        Self::bounded(ten_pow(exp), 0)
    }

    ///
    /// PARTS
    ///

    #[must_use]
    pub fn sign(&self) -> Sign {
        self.mantissa.sign()
    }

    /// Unsigned magnitude of the mantissa.
    #[must_use]
    pub fn digits(&self) -> &BigUint {
        self.mantissa.magnitude()
    }

    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    #[must_use]
    pub const fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.mantissa.is_negative()
    }

    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.mantissa.is_positive()
    }

    /// Returns true if the value has no fractional component.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.normalize().scale == 0
    }

    ///
    /// TRANSFORMS
    ///

    #[must_use]
    pub fn abs(&self) -> Self {
        Self::from_parts_unchecked(self.mantissa.abs(), self.scale)
    }

    /// Strip trailing fractional zeros.
    #[must_use]
    pub fn normalize(&self) -> Self {
        let (mantissa, scale) = strip_trailing_zeros(self.mantissa.clone(), self.scale);

        Self::from_parts_unchecked(mantissa, scale)
    }

    /// Negative values become zero.
    #[must_use]
    pub fn clamped(&self) -> Self {
        if self.is_negative() {
            Self::zero()
        } else {
            self.clone()
        }
    }

    // Mantissa expressed at a scale no smaller than the current one.
    pub(crate) fn rescaled(&self, scale: u32) -> BigInt {
        debug_assert!(scale >= self.scale);

        &self.mantissa * ten_pow(scale - self.scale)
    }
}

///
/// NUMERIC IDENTITY
///

impl<P: Precision> PartialEq for FixedDecimal<P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<P: Precision> Eq for FixedDecimal<P> {}

impl<P: Precision> PartialOrd for FixedDecimal<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Precision> Ord for FixedDecimal<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        let scale = self.scale.max(other.scale);

        self.rescaled(scale).cmp(&other.rescaled(scale))
    }
}

impl<P: Precision> Hash for FixedDecimal<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalize();
        normalized.mantissa.hash(state);
        normalized.scale.hash(state);
    }
}

impl<P: Precision> Default for FixedDecimal<P> {
    fn default() -> Self {
        Self::zero()
    }
}

///
/// TEXT
///

impl<P: Precision> fmt::Display for FixedDecimal<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }

        let digits = self.digits().to_string();
        let scale = self.scale as usize;
        if scale == 0 {
            return f.write_str(&digits);
        }

        let padded = format!("{digits:0>width$}", width = scale + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - scale);

        write!(f, "{int_part}.{frac_part}")
    }
}

impl<P: Precision> fmt::Debug for FixedDecimal<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(\"{self}\")", P::NAME)
    }
}

impl<P: Precision> Serialize for FixedDecimal<P> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de, P: Precision> Deserialize<'de> for FixedDecimal<P> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;

        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

///
/// CONVERSIONS
///

macro_rules! impl_decimal_from_int {
    ( $( $type:ty ),* ) => {
        $(
            impl<P: Precision> From<$type> for FixedDecimal<P> {
                fn from(n: $type) -> Self {
                    Self::from_parts_unchecked(BigInt::from(n), 0)
                }
            }
        )*
    };
}

// every primitive integer fits both 192- and 256-bit ranges at their max scale
impl_decimal_from_int!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

impl From<Decimal> for PreciseDecimal {
    fn from(value: Decimal) -> Self {
        Self::from_parts_unchecked(value.mantissa, value.scale)
    }
}

impl TryFrom<PreciseDecimal> for Decimal {
    type Error = DecimalError;

    fn try_from(value: PreciseDecimal) -> Result<Self, Self::Error> {
        let (mantissa, scale) = strip_trailing_zeros(value.mantissa, value.scale);

        Self::from_mantissa(mantissa, scale)
    }
}

///
/// HELPERS
///

pub(crate) fn ten_pow(exp: u32) -> BigInt {
    BigInt::from(10u8).pow(exp)
}

pub(crate) fn strip_trailing_zeros(mut mantissa: BigInt, mut scale: u32) -> (BigInt, u32) {
    if mantissa.is_zero() {
        return (mantissa, 0);
    }

    let ten = BigInt::from(10u8);
    while scale > 0 && (&mantissa % &ten).is_zero() {
        mantissa /= &ten;
        scale -= 1;
    }

    (mantissa, scale)
}
