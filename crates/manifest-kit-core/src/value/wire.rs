//! JSON wire codec. Every node is an object whose `"type"` key names its
//! kind; decoding checks that key before reading anything else.

use crate::{
    types::{
        Address, Blob, Bucket, Bytes, Decimal, Expression, LocalIdKind, NonFungibleGlobalId,
        NonFungibleLocalId, PreciseDecimal, Proof, TransientIdentifier,
    },
    value::{
        Array, CodecError, EnumDiscriminator, EnumValue, ManifestValue, Map, Tuple, ValueKind,
        WellKnownDiscriminator,
    },
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// A decoded JSON document.
pub type WireValue = serde_json::Value;

/// A JSON object, keys kept in insertion order.
pub type WireObject = serde_json::Map<String, WireValue>;

const TYPE: &str = "type";
const VALUE: &str = "value";

///
/// ValueNode
///
/// A payload type with its own wire discriminator.
///

pub trait ValueNode: Sized {
    const KIND: ValueKind;

    /// Write every field except `"type"`.
    fn encode_fields(&self, object: &mut WireObject);

    /// Read the fields; the discriminator has already been checked.
    fn decode_fields(object: &WireObject) -> Result<Self, CodecError>;

    fn encode(&self) -> WireValue {
        let mut object = tagged(Self::KIND.label());
        self.encode_fields(&mut object);

        WireValue::Object(object)
    }

    fn decode(wire: &WireValue) -> Result<Self, CodecError> {
        let object = as_object(wire, Self::KIND.label())?;
        expect_tag(object, Self::KIND.label())?;

        Self::decode_fields(object)
    }
}

///
/// OBJECT HELPERS
///

pub(crate) fn tagged(label: &str) -> WireObject {
    let mut object = WireObject::new();
    object.insert(TYPE.to_string(), WireValue::String(label.to_string()));

    object
}

pub(crate) fn as_object<'a>(
    wire: &'a WireValue,
    context: &'static str,
) -> Result<&'a WireObject, CodecError> {
    wire.as_object()
        .ok_or_else(|| CodecError::malformed(context, format!("expected an object, found {wire}")))
}

pub(crate) fn tag_of<'a>(
    object: &'a WireObject,
    context: &'static str,
) -> Result<&'a str, CodecError> {
    str_field(object, TYPE, context)
}

pub(crate) fn expect_tag(object: &WireObject, expected: &'static str) -> Result<(), CodecError> {
    let actual = tag_of(object, expected)?;
    if actual != expected {
        return Err(CodecError::TypeDiscriminatorMismatch {
            expected,
            actual: actual.to_string(),
        });
    }

    Ok(())
}

pub(crate) fn field<'a>(
    object: &'a WireObject,
    name: &str,
    context: &'static str,
) -> Result<&'a WireValue, CodecError> {
    object
        .get(name)
        .ok_or_else(|| CodecError::missing_field(context, name))
}

pub(crate) fn str_field<'a>(
    object: &'a WireObject,
    name: &str,
    context: &'static str,
) -> Result<&'a str, CodecError> {
    field(object, name, context)?
        .as_str()
        .ok_or_else(|| CodecError::malformed(context, format!("field '{name}' must be a string")))
}

pub(crate) fn array_field<'a>(
    object: &'a WireObject,
    name: &str,
    context: &'static str,
) -> Result<&'a [WireValue], CodecError> {
    field(object, name, context)?
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| CodecError::malformed(context, format!("field '{name}' must be an array")))
}

fn kind_field(
    object: &WireObject,
    names: &[&str],
    context: &'static str,
) -> Result<ValueKind, CodecError> {
    let label = names
        .iter()
        .find_map(|name| object.get(*name))
        .ok_or_else(|| CodecError::missing_field(context, names[0]))?
        .as_str()
        .ok_or_else(|| {
            CodecError::malformed(context, format!("field '{}' must be a string", names[0]))
        })?;

    ValueKind::from_label(label).ok_or_else(|| CodecError::UnknownValueKind(label.to_string()))
}

pub(crate) fn encode_all(values: &[ManifestValue]) -> WireValue {
    WireValue::Array(values.iter().map(ManifestValue::encode).collect())
}

pub(crate) fn decode_all(wires: &[WireValue]) -> Result<Vec<ManifestValue>, CodecError> {
    wires.iter().map(ManifestValue::decode).collect()
}

fn decode_integer<T: FromStr>(object: &WireObject, kind: ValueKind) -> Result<T, CodecError> {
    parse_integer(str_field(object, VALUE, kind.label())?, kind)
}

// Only `-?[0-9]+` is accepted; `str::parse` alone would also take a leading `+`.
fn parse_integer<T: FromStr>(text: &str, kind: ValueKind) -> Result<T, CodecError> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodecError::malformed(kind.label(), format!("'{text}' is not an integer")));
    }

    text.parse().map_err(|_| CodecError::IntegerOutOfRange {
        kind,
        value: text.to_string(),
    })
}

fn decode_hex(text: &str) -> Result<Vec<u8>, CodecError> {
    hex::decode(text).map_err(|err| CodecError::InvalidHex(err.to_string()))
}

///
/// ManifestValue
///

impl ManifestValue {
    #[must_use]
    pub fn encode(&self) -> WireValue {
        let kind = self.kind();
        let mut object = tagged(kind.label());

        match self {
            Self::Bool(v) => {
                object.insert(VALUE.to_string(), WireValue::Bool(*v));
            }
            Self::I8(v) => insert_text(&mut object, v),
            Self::I16(v) => insert_text(&mut object, v),
            Self::I32(v) => insert_text(&mut object, v),
            Self::I64(v) => insert_text(&mut object, v),
            Self::I128(v) => insert_text(&mut object, v),
            Self::U8(v) => insert_text(&mut object, v),
            Self::U16(v) => insert_text(&mut object, v),
            Self::U32(v) => insert_text(&mut object, v),
            Self::U64(v) => insert_text(&mut object, v),
            Self::U128(v) => insert_text(&mut object, v),
            Self::String(v) => insert_text(&mut object, v),
            Self::Some(inner) | Self::Ok(inner) | Self::Err(inner) => {
                object.insert(VALUE.to_string(), inner.encode());
            }
            Self::None => {}
            Self::Enum(v) => v.encode_fields(&mut object),
            Self::Array(v) => v.encode_fields(&mut object),
            Self::Tuple(v) => v.encode_fields(&mut object),
            Self::Map(v) => v.encode_fields(&mut object),
            Self::Decimal(v) => v.encode_fields(&mut object),
            Self::PreciseDecimal(v) => v.encode_fields(&mut object),
            Self::Address(v) => v.encode_fields(&mut object),
            Self::Bucket(v) => v.encode_fields(&mut object),
            Self::Proof(v) => v.encode_fields(&mut object),
            Self::NonFungibleLocalId(v) => v.encode_fields(&mut object),
            Self::NonFungibleGlobalId(v) => v.encode_fields(&mut object),
            Self::Blob(v) => v.encode_fields(&mut object),
            Self::Bytes(v) => v.encode_fields(&mut object),
            Self::Expression(v) => v.encode_fields(&mut object),
        }

        WireValue::Object(object)
    }

    pub fn decode(wire: &WireValue) -> Result<Self, CodecError> {
        let object = as_object(wire, "value")?;
        let label = tag_of(object, "value")?;
        let kind = ValueKind::from_label(label)
            .ok_or_else(|| CodecError::UnknownValueKind(label.to_string()))?;
        tracing::trace!(kind = label, "decoding value node");

        let value = match kind {
            ValueKind::Bool => Self::Bool(
                field(object, VALUE, kind.label())?
                    .as_bool()
                    .ok_or_else(|| {
                        CodecError::malformed(kind.label(), "field 'value' must be a bool")
                    })?,
            ),
            ValueKind::I8 => Self::I8(decode_integer(object, kind)?),
            ValueKind::I16 => Self::I16(decode_integer(object, kind)?),
            ValueKind::I32 => Self::I32(decode_integer(object, kind)?),
            ValueKind::I64 => Self::I64(decode_integer(object, kind)?),
            ValueKind::I128 => Self::I128(decode_integer(object, kind)?),
            ValueKind::U8 => Self::U8(decode_integer(object, kind)?),
            ValueKind::U16 => Self::U16(decode_integer(object, kind)?),
            ValueKind::U32 => Self::U32(decode_integer(object, kind)?),
            ValueKind::U64 => Self::U64(decode_integer(object, kind)?),
            ValueKind::U128 => Self::U128(decode_integer(object, kind)?),
            ValueKind::String => Self::String(str_field(object, VALUE, kind.label())?.to_string()),
            ValueKind::Some => Self::Some(Box::new(Self::decode(field(object, VALUE, "Some")?)?)),
            ValueKind::None => Self::None,
            ValueKind::Ok => Self::Ok(Box::new(Self::decode(field(object, VALUE, "Ok")?)?)),
            ValueKind::Err => Self::Err(Box::new(Self::decode(field(object, VALUE, "Err")?)?)),
            ValueKind::Enum => Self::Enum(EnumValue::decode_fields(object)?),
            ValueKind::Array => Self::Array(Array::decode_fields(object)?),
            ValueKind::Tuple => Self::Tuple(Tuple::decode_fields(object)?),
            ValueKind::Map => Self::Map(Map::decode_fields(object)?),
            ValueKind::Decimal => Self::Decimal(Decimal::decode_fields(object)?),
            ValueKind::PreciseDecimal => {
                Self::PreciseDecimal(PreciseDecimal::decode_fields(object)?)
            }
            ValueKind::Address => Self::Address(Address::decode_fields(object)?),
            ValueKind::Bucket => Self::Bucket(Bucket::decode_fields(object)?),
            ValueKind::Proof => Self::Proof(Proof::decode_fields(object)?),
            ValueKind::NonFungibleLocalId => {
                Self::NonFungibleLocalId(NonFungibleLocalId::decode_fields(object)?)
            }
            ValueKind::NonFungibleGlobalId => {
                Self::NonFungibleGlobalId(NonFungibleGlobalId::decode_fields(object)?)
            }
            ValueKind::Blob => Self::Blob(Blob::decode_fields(object)?),
            ValueKind::Bytes => Self::Bytes(Bytes::decode_fields(object)?),
            ValueKind::Expression => Self::Expression(Expression::decode_fields(object)?),
        };

        Ok(value)
    }

    /// Decode, requiring the node to be of `expected` kind.
    pub fn decode_as(wire: &WireValue, expected: ValueKind) -> Result<Self, CodecError> {
        let object = as_object(wire, expected.label())?;
        expect_tag(object, expected.label())?;

        Self::decode(wire)
    }
}

fn insert_text(object: &mut WireObject, value: &impl ToString) {
    object.insert(VALUE.to_string(), WireValue::String(value.to_string()));
}

///
/// DECIMALS
///

macro_rules! impl_decimal_node {
    ($type:ty, $kind:ident) => {
        impl ValueNode for $type {
            const KIND: ValueKind = ValueKind::$kind;

            fn encode_fields(&self, object: &mut WireObject) {
                insert_text(object, self);
            }

            fn decode_fields(object: &WireObject) -> Result<Self, CodecError> {
                let text = str_field(object, VALUE, Self::KIND.label())?;

                Ok(Self::parse(text)?)
            }
        }
    };
}

impl_decimal_node!(Decimal, Decimal);
impl_decimal_node!(PreciseDecimal, PreciseDecimal);

///
/// ADDRESSES AND IDS
///

impl ValueNode for Address {
    const KIND: ValueKind = ValueKind::Address;

    fn encode_fields(&self, object: &mut WireObject) {
        object.insert("address".to_string(), WireValue::String(self.to_string()));
    }

    fn decode_fields(object: &WireObject) -> Result<Self, CodecError> {
        let text = str_field(object, "address", Self::KIND.label())?;

        Ok(Self::parse(text)?)
    }
}

impl ValueNode for NonFungibleLocalId {
    const KIND: ValueKind = ValueKind::NonFungibleLocalId;

    fn encode_fields(&self, object: &mut WireObject) {
        let mut inner = tagged(self.kind().label());
        inner.insert(VALUE.to_string(), WireValue::String(self.payload()));
        object.insert(VALUE.to_string(), WireValue::Object(inner));
    }

    fn decode_fields(object: &WireObject) -> Result<Self, CodecError> {
        let inner = as_object(field(object, VALUE, Self::KIND.label())?, Self::KIND.label())?;
        let label = tag_of(inner, Self::KIND.label())?;
        let kind =
            LocalIdKind::from_label(label).ok_or_else(|| CodecError::TypeDiscriminatorMismatch {
                expected: "Integer | String | Bytes | UUID",
                actual: label.to_string(),
            })?;
        let payload = str_field(inner, VALUE, Self::KIND.label())?;

        Ok(Self::from_payload(kind, payload)?)
    }
}

impl ValueNode for NonFungibleGlobalId {
    const KIND: ValueKind = ValueKind::NonFungibleGlobalId;

    fn encode_fields(&self, object: &mut WireObject) {
        object.insert("resource_address".to_string(), self.resource_address.encode());
        object.insert("non_fungible_local_id".to_string(), self.local_id.encode());
    }

    fn decode_fields(object: &WireObject) -> Result<Self, CodecError> {
        let context = Self::KIND.label();
        let resource_address = Address::decode(field(object, "resource_address", context)?)?;
        let local_id =
            NonFungibleLocalId::decode(field(object, "non_fungible_local_id", context)?)?;

        Ok(Self::new(resource_address, local_id))
    }
}

///
/// TRANSIENTS
///

fn encode_identifier(identifier: &TransientIdentifier) -> WireValue {
    let (kind, text) = match identifier {
        TransientIdentifier::String(name) => (ValueKind::String, name.clone()),
        TransientIdentifier::U32(id) => (ValueKind::U32, id.to_string()),
    };
    let mut object = tagged(kind.label());
    object.insert(VALUE.to_string(), WireValue::String(text));

    WireValue::Object(object)
}

fn decode_identifier(
    object: &WireObject,
    context: &'static str,
) -> Result<TransientIdentifier, CodecError> {
    let inner = as_object(field(object, "identifier", context)?, context)?;

    match tag_of(inner, context)? {
        "String" => Ok(TransientIdentifier::String(str_field(inner, VALUE, context)?.to_string())),
        "U32" => Ok(TransientIdentifier::U32(decode_integer(inner, ValueKind::U32)?)),
        other => Err(CodecError::TypeDiscriminatorMismatch {
            expected: "String | U32",
            actual: other.to_string(),
        }),
    }
}

impl ValueNode for Bucket {
    const KIND: ValueKind = ValueKind::Bucket;

    fn encode_fields(&self, object: &mut WireObject) {
        object.insert("identifier".to_string(), encode_identifier(&self.0));
    }

    fn decode_fields(object: &WireObject) -> Result<Self, CodecError> {
        decode_identifier(object, Self::KIND.label()).map(Self)
    }
}

impl ValueNode for Proof {
    const KIND: ValueKind = ValueKind::Proof;

    fn encode_fields(&self, object: &mut WireObject) {
        object.insert("identifier".to_string(), encode_identifier(&self.0));
    }

    fn decode_fields(object: &WireObject) -> Result<Self, CodecError> {
        decode_identifier(object, Self::KIND.label()).map(Self)
    }
}

///
/// BYTES
///

impl ValueNode for Blob {
    const KIND: ValueKind = ValueKind::Blob;

    fn encode_fields(&self, object: &mut WireObject) {
        object.insert("hash".to_string(), WireValue::String(self.to_hex()));
    }

    fn decode_fields(object: &WireObject) -> Result<Self, CodecError> {
        let text = str_field(object, "hash", Self::KIND.label())?;

        Ok(Self::from_hex(text)?)
    }
}

impl ValueNode for Bytes {
    const KIND: ValueKind = ValueKind::Bytes;

    fn encode_fields(&self, object: &mut WireObject) {
        object.insert(VALUE.to_string(), WireValue::String(self.to_hex()));
    }

    fn decode_fields(object: &WireObject) -> Result<Self, CodecError> {
        let text = str_field(object, VALUE, Self::KIND.label())?;

        decode_hex(text).map(Self::new)
    }
}

impl ValueNode for Expression {
    const KIND: ValueKind = ValueKind::Expression;

    fn encode_fields(&self, object: &mut WireObject) {
        object.insert(VALUE.to_string(), WireValue::String(self.as_str().to_string()));
    }

    fn decode_fields(object: &WireObject) -> Result<Self, CodecError> {
        let text = str_field(object, VALUE, Self::KIND.label())?;

        Self::from_name(text).ok_or_else(|| CodecError::UnknownExpression(text.to_string()))
    }
}

///
/// CONTAINERS
///

impl ValueNode for Array {
    const KIND: ValueKind = ValueKind::Array;

    fn encode_fields(&self, object: &mut WireObject) {
        object.insert(
            "element_kind".to_string(),
            WireValue::String(self.element_kind().label().to_string()),
        );
        object.insert("elements".to_string(), encode_all(self.elements()));
    }

    fn decode_fields(object: &WireObject) -> Result<Self, CodecError> {
        let context = Self::KIND.label();
        let element_kind = kind_field(object, &["element_kind"], context)?;
        let elements = decode_all(array_field(object, "elements", context)?)?;

        Self::new(element_kind, elements)
    }
}

impl ValueNode for Map {
    const KIND: ValueKind = ValueKind::Map;

    fn encode_fields(&self, object: &mut WireObject) {
        object.insert(
            "key_value_kind".to_string(),
            WireValue::String(self.key_kind().label().to_string()),
        );
        object.insert(
            "value_value_kind".to_string(),
            WireValue::String(self.value_kind().label().to_string()),
        );
        let entries = self
            .entries()
            .iter()
            .map(|(key, value)| WireValue::Array(vec![key.encode(), value.encode()]))
            .collect();
        object.insert("entries".to_string(), WireValue::Array(entries));
    }

    fn decode_fields(object: &WireObject) -> Result<Self, CodecError> {
        let context = Self::KIND.label();
        let key_kind = kind_field(object, &["key_value_kind", "key_kind"], context)?;
        let value_kind = kind_field(object, &["value_value_kind", "value_kind"], context)?;

        let entries = array_field(object, "entries", context)?
            .iter()
            .map(|entry| match entry.as_array().map(Vec::as_slice) {
                Some([key, value]) => {
                    Ok((ManifestValue::decode(key)?, ManifestValue::decode(value)?))
                }
                _ => Err(CodecError::malformed(context, "each entry must be a [key, value] pair")),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(key_kind, value_kind, entries)
    }
}

impl ValueNode for Tuple {
    const KIND: ValueKind = ValueKind::Tuple;

    fn encode_fields(&self, object: &mut WireObject) {
        object.insert("elements".to_string(), encode_all(self.elements()));
    }

    fn decode_fields(object: &WireObject) -> Result<Self, CodecError> {
        decode_all(array_field(object, "elements", Self::KIND.label())?).map(Self::from)
    }
}

impl ValueNode for EnumValue {
    const KIND: ValueKind = ValueKind::Enum;

    fn encode_fields(&self, object: &mut WireObject) {
        let (kind, text) = match self.discriminator {
            EnumDiscriminator::U8(index) => (ValueKind::U8, index.to_string()),
            EnumDiscriminator::WellKnown(known) => (ValueKind::String, known.name().to_string()),
        };
        let mut variant = tagged(kind.label());
        variant.insert("discriminator".to_string(), WireValue::String(text));
        object.insert("variant".to_string(), WireValue::Object(variant));

        if !self.fields.is_empty() {
            object.insert("fields".to_string(), encode_all(&self.fields));
        }
    }

    fn decode_fields(object: &WireObject) -> Result<Self, CodecError> {
        let context = Self::KIND.label();
        let variant = as_object(field(object, "variant", context)?, context)?;
        let text = str_field(variant, "discriminator", context)?;

        let discriminator = match tag_of(variant, context)? {
            "U8" => EnumDiscriminator::U8(parse_integer(text, ValueKind::U8)?),
            "String" => WellKnownDiscriminator::from_name(text)
                .map(EnumDiscriminator::WellKnown)
                .ok_or_else(|| CodecError::UnknownEnumDiscriminator(text.to_string()))?,
            other => {
                return Err(CodecError::TypeDiscriminatorMismatch {
                    expected: "U8 | String",
                    actual: other.to_string(),
                });
            }
        };

        let fields = match object.get("fields") {
            Some(_) => decode_all(array_field(object, "fields", context)?)?,
            None => Vec::new(),
        };

        Ok(Self {
            discriminator,
            fields,
        })
    }
}

///
/// SERDE
///
/// Serde routes through the codec so `serde_json` reads and writes the wire
/// format directly.
///

macro_rules! impl_serde_via_wire {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl Serialize for $type {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    self.encode().serialize(serializer)
                }
            }

            impl<'de> Deserialize<'de> for $type {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    let wire = WireValue::deserialize(deserializer)?;

                    Self::decode(&wire).map_err(serde::de::Error::custom)
                }
            }
        )*
    };
}

impl_serde_via_wire!(ManifestValue, Array, Map, Tuple, EnumValue);
