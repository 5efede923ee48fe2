//! Human-facing decimal text: locale separators, magnitude suffixes and the
//! engineering-notation fallback. Nothing here feeds the wire format.

mod locale;


pub use locale::Locale;

use crate::types::decimal::{
    DecimalError, FixedDecimal, Precision, RoundingMode, round_mantissa, strip_trailing_zeros,
    ten_pow,
};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};

///
/// CONSTANTS
///

/// Significant places shown by default.
pub const DEFAULT_TOTAL_PLACES: u32 = 8;

/// Significant places kept in engineering notation.
pub const ENGINEERING_PLACES: u32 = 4;

///
/// FormatOptions
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct FormatOptions {
    pub locale: Locale,
    pub total_places: u32,
    pub use_grouping_separator: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            locale: Locale::en_us_posix(),
            total_places: DEFAULT_TOTAL_PLACES,
            use_grouping_separator: true,
        }
    }
}

///
/// Multiplier
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Multiplier {
    Million,
    Billion,
    Trillion,
}

impl Multiplier {
    const DESCENDING: [Self; 3] = [Self::Trillion, Self::Billion, Self::Million];

    #[must_use]
    pub const fn exponent(self) -> u32 {
        match self {
            Self::Million => 6,
            Self::Billion => 9,
            Self::Trillion => 12,
        }
    }

    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Million => "M",
            Self::Billion => "B",
            Self::Trillion => "T",
        }
    }

    // Largest multiplier not exceeding the magnitude.
    fn for_digits(digits: &Digits) -> Option<Self> {
        let magnitude = digits.mantissa.abs();

        Self::DESCENDING
            .into_iter()
            .find(|m| magnitude >= ten_pow(m.exponent() + digits.scale))
    }
}

///
/// Digits
///
/// Unbounded working copy of a decimal; formatting may pass through values
/// outside the decimal's own range.
///

#[derive(Clone, Debug)]
struct Digits {
    mantissa: BigInt,
    scale: u32,
}

impl Digits {
    fn of<P: Precision>(value: &FixedDecimal<P>) -> Self {
        Self {
            mantissa: value.mantissa().clone(),
            scale: value.scale(),
        }
    }

    // Digits left of the point, at least one.
    fn integer_count(&self) -> u32 {
        let whole = self.mantissa.abs() / ten_pow(self.scale);
        if whole.is_zero() {
            return 1;
        }

        u32::try_from(whole.to_string().len()).unwrap_or(u32::MAX)
    }

    // Exact division by 10^exp.
    fn shifted(self, exp: u32) -> Self {
        Self {
            mantissa: self.mantissa,
            scale: self.scale + exp,
        }
    }

    // Keep `total` significant places, counting every integer digit.
    fn rounded_total(&self, total: u32) -> Self {
        let integers = self.integer_count();

        if integers > total {
            let excess = integers - total;
            let (whole, _) = round_mantissa(
                &self.mantissa,
                self.scale + excess,
                0,
                RoundingMode::HalfAwayFromZero,
            );

            Self {
                mantissa: whole * ten_pow(excess),
                scale: 0,
            }
        } else {
            let (mantissa, scale) = round_mantissa(
                &self.mantissa,
                self.scale,
                total - integers,
                RoundingMode::HalfAwayFromZero,
            );

            Self { mantissa, scale }
        }
    }

    fn plain(&self, locale: &Locale, use_grouping_separator: bool) -> String {
        let (mantissa, scale) = strip_trailing_zeros(self.mantissa.clone(), self.scale);
        if mantissa.is_zero() {
            return "0".to_string();
        }

        let digits = mantissa.magnitude().to_string();
        let scale = scale as usize;
        let padded = format!("{digits:0>width$}", width = scale + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - scale);

        let mut out = String::with_capacity(padded.len() + 8);
        if mantissa.is_negative() {
            out.push('-');
        }
        match locale.grouping_separator() {
            Some(separator) if use_grouping_separator => {
                out.push_str(&group_thousands(int_part, separator));
            }
            _ => out.push_str(int_part),
        }
        if !frac_part.is_empty() {
            out.push_str(&locale.decimal_separator);
            out.push_str(frac_part);
        }

        out
    }

    fn engineering(&self, locale: &Locale, total_places: u32) -> String {
        let rounded = self.rounded_total(total_places.max(1));
        let exponent = rounded.integer_count() - 1;
        let mantissa = rounded.shifted(exponent);

        format!("{}e{exponent}", mantissa.plain(locale, false))
    }
}

fn group_thousands(int_part: &str, separator: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());

    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }

    out
}

/// Map locale text onto the machine format: grouping removed, the decimal
/// separator replaced by `.`, and a `0` in front so `,5` or `.5` parse.
#[must_use]
pub fn normalize_formatted(text: &str, locale: &Locale) -> String {
    let text = text.trim();
    let (sign, body) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };

    let ungrouped = match locale.grouping_separator() {
        Some(separator) => body.replace(separator, ""),
        None => body.to_string(),
    };
    let dotted = ungrouped.replace(locale.decimal_separator.as_str(), ".");

    format!("{sign}0{dotted}")
}

///
/// FORMATTING
///

impl<P: Precision> FixedDecimal<P> {
    /// Parse text produced for humans in `locale`.
    pub fn parse_formatted(text: &str, locale: &Locale) -> Result<Self, DecimalError> {
        Self::parse(&normalize_formatted(text, locale))
    }

    /// Human text with at most `total_places` significant places and a
    /// `M`/`B`/`T` suffix for large magnitudes.
    #[must_use]
    pub fn formatted(
        &self,
        locale: &Locale,
        total_places: u32,
        use_grouping_separator: bool,
    ) -> String {
        let total_places = total_places.max(1);
        let rounded = Digits::of(self).rounded_total(total_places);

        let Some(multiplier) = Multiplier::for_digits(&rounded) else {
            return rounded.plain(locale, use_grouping_separator);
        };

        let scaled = rounded.shifted(multiplier.exponent());
        if scaled.integer_count() > total_places {
            return self.formatted_engineering_notation(locale, ENGINEERING_PLACES);
        }

        format!(
            "{} {}",
            scaled.plain(locale, use_grouping_separator),
            multiplier.suffix()
        )
    }

    #[must_use]
    pub fn format_with(&self, options: &FormatOptions) -> String {
        self.formatted(
            &options.locale,
            options.total_places,
            options.use_grouping_separator,
        )
    }

    /// `<mantissa>e<exponent>` with the mantissa in `[1, 10)`.
    #[must_use]
    pub fn formatted_engineering_notation(&self, locale: &Locale, total_places: u32) -> String {
        Digits::of(self).engineering(locale, total_places)
    }

    /// Every digit, trailing fractional zeros removed.
    #[must_use]
    pub fn formatted_plain(&self, locale: &Locale, use_grouping_separator: bool) -> String {
        Digits::of(self).plain(locale, use_grouping_separator)
    }
}
