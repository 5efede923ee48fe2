//! Manifest argument values: a closed, recursive, tagged tree.

mod discriminator;
mod error;
mod kind;
mod render;
pub(crate) mod wire;

#[cfg(test)]
mod tests;

pub use discriminator::{EnumDiscriminator, WellKnownDiscriminator};
pub use error::{CodecError, MapPosition};
pub use kind::ValueKind;
pub use wire::{ValueNode, WireObject, WireValue};

use crate::types::{
    Address, Blob, Bucket, Bytes, Decimal, Expression, NonFungibleGlobalId, NonFungibleLocalId,
    PreciseDecimal, Proof,
};
use derive_more::{Deref, From, IntoIterator};

///
/// ManifestValue
///
/// Children are owned, so a tree can never contain a cycle.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ManifestValue {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    String(String),
    Enum(EnumValue),
    Some(Box<Self>),
    None,
    Ok(Box<Self>),
    Err(Box<Self>),
    Array(Array),
    Tuple(Tuple),
    Map(Map),
    Decimal(Decimal),
    PreciseDecimal(PreciseDecimal),
    Address(Address),
    Bucket(Bucket),
    Proof(Proof),
    NonFungibleLocalId(NonFungibleLocalId),
    NonFungibleGlobalId(NonFungibleGlobalId),
    Blob(Blob),
    Bytes(Bytes),
    Expression(Expression),
}

impl ManifestValue {
    ///
    /// CONSTRUCTION
    ///

    #[must_use]
    pub fn some(value: impl Into<Self>) -> Self {
        Self::Some(Box::new(value.into()))
    }

    #[must_use]
    pub fn ok(value: impl Into<Self>) -> Self {
        Self::Ok(Box::new(value.into()))
    }

    #[must_use]
    pub fn err(value: impl Into<Self>) -> Self {
        Self::Err(Box::new(value.into()))
    }

    #[must_use]
    pub fn tuple(elements: impl IntoIterator<Item = Self>) -> Self {
        Self::Tuple(elements.into_iter().collect::<Vec<_>>().into())
    }

    /// Homogeneous array; fails on the first element of another kind.
    pub fn array(
        element_kind: ValueKind,
        elements: impl IntoIterator<Item = Self>,
    ) -> Result<Self, CodecError> {
        Array::new(element_kind, elements.into_iter().collect()).map(Self::Array)
    }

    #[must_use]
    pub fn enumeration(
        discriminator: impl Into<EnumDiscriminator>,
        fields: impl IntoIterator<Item = Self>,
    ) -> Self {
        Self::Enum(EnumValue::new(discriminator, fields))
    }

    ///
    /// INSPECTION
    ///

    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        kind::kind_of(self)
    }

    #[must_use]
    pub const fn as_decimal(&self) -> Option<&Decimal> {
        match self {
            Self::Decimal(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_address(&self) -> Option<&Address> {
        match self {
            Self::Address(value) => Some(value),
            _ => None,
        }
    }
}

///
/// CONVERSIONS
///

macro_rules! impl_value_from {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for ManifestValue {
                fn from(value: $type) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_value_from!(
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    String => String,
    EnumValue => Enum,
    Array => Array,
    Tuple => Tuple,
    Map => Map,
    Decimal => Decimal,
    PreciseDecimal => PreciseDecimal,
    Address => Address,
    Bucket => Bucket,
    Proof => Proof,
    NonFungibleLocalId => NonFungibleLocalId,
    NonFungibleGlobalId => NonFungibleGlobalId,
    Blob => Blob,
    Bytes => Bytes,
    Expression => Expression,
);

impl From<&str> for ManifestValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl<T: Into<Self>> From<Option<T>> for ManifestValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => Self::some(inner),
            None => Self::None,
        }
    }
}

///
/// Array
///
/// Every element has `element_kind`; enforced at construction and decode.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Array {
    element_kind: ValueKind,
    elements: Vec<ManifestValue>,
}

impl Array {
    pub fn new(element_kind: ValueKind, elements: Vec<ManifestValue>) -> Result<Self, CodecError> {
        if let Some((index, element)) = elements
            .iter()
            .enumerate()
            .find(|(_, element)| element.kind() != element_kind)
        {
            return Err(CodecError::HomogeneousArrayRequired {
                expected: element_kind,
                actual: element.kind(),
                index,
            });
        }

        Ok(Self {
            element_kind,
            elements,
        })
    }

    #[must_use]
    pub const fn empty(element_kind: ValueKind) -> Self {
        Self {
            element_kind,
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, element: ManifestValue) -> Result<(), CodecError> {
        if element.kind() != self.element_kind {
            return Err(CodecError::HomogeneousArrayRequired {
                expected: self.element_kind,
                actual: element.kind(),
                index: self.elements.len(),
            });
        }
        self.elements.push(element);

        Ok(())
    }

    #[must_use]
    pub const fn element_kind(&self) -> ValueKind {
        self.element_kind
    }

    #[must_use]
    pub fn elements(&self) -> &[ManifestValue] {
        &self.elements
    }

    #[must_use]
    pub fn into_elements(self) -> Vec<ManifestValue> {
        self.elements
    }
}

///
/// Map
///
/// Ordered entries; duplicate keys are kept as given.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Map {
    key_kind: ValueKind,
    value_kind: ValueKind,
    entries: Vec<(ManifestValue, ManifestValue)>,
}

impl Map {
    pub fn new(
        key_kind: ValueKind,
        value_kind: ValueKind,
        entries: Vec<(ManifestValue, ManifestValue)>,
    ) -> Result<Self, CodecError> {
        for (index, (key, value)) in entries.iter().enumerate() {
            let mismatch = if key.kind() != key_kind {
                Some((MapPosition::Key, key.kind()))
            } else if value.kind() != value_kind {
                Some((MapPosition::Value, value.kind()))
            } else {
                None
            };

            if let Some((position, actual)) = mismatch {
                return Err(CodecError::HomogeneousMapRequired {
                    key_kind,
                    value_kind,
                    position,
                    actual,
                    index,
                });
            }
        }

        Ok(Self {
            key_kind,
            value_kind,
            entries,
        })
    }

    #[must_use]
    pub const fn key_kind(&self) -> ValueKind {
        self.key_kind
    }

    #[must_use]
    pub const fn value_kind(&self) -> ValueKind {
        self.value_kind
    }

    #[must_use]
    pub fn entries(&self) -> &[(ManifestValue, ManifestValue)] {
        &self.entries
    }

    /// First value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &ManifestValue) -> Option<&ManifestValue> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }
}

///
/// Tuple
///

#[derive(Clone, Debug, Default, Deref, Eq, From, IntoIterator, PartialEq)]
pub struct Tuple(Vec<ManifestValue>);

impl Tuple {
    #[must_use]
    pub fn elements(&self) -> &[ManifestValue] {
        &self.0
    }
}

///
/// EnumValue
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnumValue {
    pub discriminator: EnumDiscriminator,
    pub fields: Vec<ManifestValue>,
}

impl EnumValue {
    #[must_use]
    pub fn new(
        discriminator: impl Into<EnumDiscriminator>,
        fields: impl IntoIterator<Item = ManifestValue>,
    ) -> Self {
        Self {
            discriminator: discriminator.into(),
            fields: fields.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn unit(discriminator: impl Into<EnumDiscriminator>) -> Self {
        Self::new(discriminator, [])
    }
}
