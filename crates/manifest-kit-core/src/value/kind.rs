use crate::value::ManifestValue;
use std::fmt::{self, Display};

///
/// ValueKind
///
/// Stable discriminator of a manifest value variant.
///
/// IMPORTANT:
/// Labels are the wire `"type"` strings and must never change.
///

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ValueKind {
    Bool = 1,
    I8 = 2,
    I16 = 3,
    I32 = 4,
    I64 = 5,
    I128 = 6,
    U8 = 7,
    U16 = 8,
    U32 = 9,
    U64 = 10,
    U128 = 11,
    String = 12,
    Enum = 13,
    Some = 14,
    None = 15,
    Ok = 16,
    Err = 17,
    Array = 18,
    Tuple = 19,
    Map = 20,
    Decimal = 21,
    PreciseDecimal = 22,
    Address = 23,
    Bucket = 24,
    Proof = 25,
    NonFungibleLocalId = 26,
    NonFungibleGlobalId = 27,
    Blob = 28,
    Bytes = 29,
    Expression = 30,
}

impl ValueKind {
    pub const ALL: [Self; 30] = [
        Self::Bool,
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::I128,
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::U128,
        Self::String,
        Self::Enum,
        Self::Some,
        Self::None,
        Self::Ok,
        Self::Err,
        Self::Array,
        Self::Tuple,
        Self::Map,
        Self::Decimal,
        Self::PreciseDecimal,
        Self::Address,
        Self::Bucket,
        Self::Proof,
        Self::NonFungibleLocalId,
        Self::NonFungibleGlobalId,
        Self::Blob,
        Self::Bytes,
        Self::Expression,
    ];

    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Wire label, also used in diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::I8 => "I8",
            Self::I16 => "I16",
            Self::I32 => "I32",
            Self::I64 => "I64",
            Self::I128 => "I128",
            Self::U8 => "U8",
            Self::U16 => "U16",
            Self::U32 => "U32",
            Self::U64 => "U64",
            Self::U128 => "U128",
            Self::String => "String",
            Self::Enum => "Enum",
            Self::Some => "Some",
            Self::None => "None",
            Self::Ok => "Ok",
            Self::Err => "Err",
            Self::Array => "Array",
            Self::Tuple => "Tuple",
            Self::Map => "Map",
            Self::Decimal => "Decimal",
            Self::PreciseDecimal => "PreciseDecimal",
            Self::Address => "Address",
            Self::Bucket => "Bucket",
            Self::Proof => "Proof",
            Self::NonFungibleLocalId => "NonFungibleLocalId",
            Self::NonFungibleGlobalId => "NonFungibleGlobalId",
            Self::Blob => "Blob",
            Self::Bytes => "Bytes",
            Self::Expression => "Expression",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of a value node.
#[must_use]
pub(super) const fn kind_of(value: &ManifestValue) -> ValueKind {
    match value {
        ManifestValue::Bool(_) => ValueKind::Bool,
        ManifestValue::I8(_) => ValueKind::I8,
        ManifestValue::I16(_) => ValueKind::I16,
        ManifestValue::I32(_) => ValueKind::I32,
        ManifestValue::I64(_) => ValueKind::I64,
        ManifestValue::I128(_) => ValueKind::I128,
        ManifestValue::U8(_) => ValueKind::U8,
        ManifestValue::U16(_) => ValueKind::U16,
        ManifestValue::U32(_) => ValueKind::U32,
        ManifestValue::U64(_) => ValueKind::U64,
        ManifestValue::U128(_) => ValueKind::U128,
        ManifestValue::String(_) => ValueKind::String,
        ManifestValue::Enum(_) => ValueKind::Enum,
        ManifestValue::Some(_) => ValueKind::Some,
        ManifestValue::None => ValueKind::None,
        ManifestValue::Ok(_) => ValueKind::Ok,
        ManifestValue::Err(_) => ValueKind::Err,
        ManifestValue::Array(_) => ValueKind::Array,
        ManifestValue::Tuple(_) => ValueKind::Tuple,
        ManifestValue::Map(_) => ValueKind::Map,
        ManifestValue::Decimal(_) => ValueKind::Decimal,
        ManifestValue::PreciseDecimal(_) => ValueKind::PreciseDecimal,
        ManifestValue::Address(_) => ValueKind::Address,
        ManifestValue::Bucket(_) => ValueKind::Bucket,
        ManifestValue::Proof(_) => ValueKind::Proof,
        ManifestValue::NonFungibleLocalId(_) => ValueKind::NonFungibleLocalId,
        ManifestValue::NonFungibleGlobalId(_) => ValueKind::NonFungibleGlobalId,
        ManifestValue::Blob(_) => ValueKind::Blob,
        ManifestValue::Bytes(_) => ValueKind::Bytes,
        ManifestValue::Expression(_) => ValueKind::Expression,
    }
}
