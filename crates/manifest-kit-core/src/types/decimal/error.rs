use thiserror::Error as ThisError;

///
/// DecimalError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum DecimalError {
    #[error("invalid decimal literal '{input}': {reason}")]
    Parse {
        input: String,
        reason: ParseDecimalReason,
    },

    #[error("decimal scale {scale} exceeds the maximum of {max}")]
    ScaleOutOfRange { scale: u32, max: u32 },

    #[error("decimal arithmetic overflow")]
    Overflow,

    #[error("division by zero")]
    DivisionByZero,
}

impl DecimalError {
    pub(crate) fn parse(input: &str, reason: ParseDecimalReason) -> Self {
        Self::Parse {
            input: input.to_string(),
            reason,
        }
    }
}

///
/// ParseDecimalReason
///
/// Why a decimal literal was rejected.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ParseDecimalReason {
    #[error("empty input")]
    Empty,

    #[error("unexpected character '{0}'")]
    InvalidCharacter(char),

    #[error("more than one decimal separator")]
    MultipleSeparators,

    #[error("no digits")]
    NoDigits,

    #[error("{found} decimal places, at most {max} allowed")]
    TooManyDecimalPlaces { max: u32, found: usize },

    #[error("value is outside the representable range")]
    OutOfRange,
}
