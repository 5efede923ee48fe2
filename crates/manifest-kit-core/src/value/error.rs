use crate::{
    types::{AddressError, BlobHashError, DecimalError, LocalIdError},
    value::ValueKind,
};
use std::fmt::{self, Display};
use thiserror::Error as ThisError;

///
/// CodecError
///
/// Every way a value tree can fail to decode from, or be assembled for, the
/// wire. Discriminator checks run before any other field is read.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CodecError {
    #[error("expected a '{expected}' node, found '{actual}'")]
    TypeDiscriminatorMismatch {
        expected: &'static str,
        actual: String,
    },

    #[error("array of '{expected}' holds a '{actual}' element at index {index}")]
    HomogeneousArrayRequired {
        expected: ValueKind,
        actual: ValueKind,
        index: usize,
    },

    #[error("map of '{key_kind}' to '{value_kind}' holds a '{actual}' {position} in entry {index}")]
    HomogeneousMapRequired {
        key_kind: ValueKind,
        value_kind: ValueKind,
        position: MapPosition,
        actual: ValueKind,
        index: usize,
    },

    #[error("unknown enum discriminator '{0}'")]
    UnknownEnumDiscriminator(String),

    #[error("unknown value kind '{0}'")]
    UnknownValueKind(String),

    #[error("unknown expression '{0}'")]
    UnknownExpression(String),

    #[error("'{value}' is not a valid {kind}")]
    IntegerOutOfRange { kind: ValueKind, value: String },

    #[error("invalid hex payload: {0}")]
    InvalidHex(String),

    #[error(transparent)]
    InvalidBlobHash(#[from] BlobHashError),

    #[error(transparent)]
    InvalidAddress(#[from] AddressError),

    #[error(transparent)]
    InvalidLocalId(#[from] LocalIdError),

    #[error(transparent)]
    InvalidDecimal(#[from] DecimalError),

    #[error("malformed {context}: {message}")]
    MalformedWireValue {
        context: &'static str,
        message: String,
    },
}

impl CodecError {
    pub(crate) fn malformed(context: &'static str, message: impl Into<String>) -> Self {
        Self::MalformedWireValue {
            context,
            message: message.into(),
        }
    }

    pub(crate) fn missing_field(context: &'static str, field: &str) -> Self {
        Self::malformed(context, format!("missing field '{field}'"))
    }
}

///
/// MapPosition
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MapPosition {
    Key,
    Value,
}

impl Display for MapPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key => f.write_str("key"),
            Self::Value => f.write_str("value"),
        }
    }
}
