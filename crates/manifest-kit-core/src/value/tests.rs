use super::*;
use crate::types::{
    Address, AddressError, Blob, Bucket, Decimal, Expression, NonFungibleGlobalId,
    NonFungibleLocalId, PreciseDecimal, Proof, TransientIdentifier,
};
use proptest::prelude::*;
use serde_json::json;

fn decode(wire: serde_json::Value) -> Result<ManifestValue, CodecError> {
    ManifestValue::decode(&wire)
}

///
/// KIND
///

#[test]
fn kind_labels_round_trip() {
    for kind in ValueKind::ALL {
        assert_eq!(ValueKind::from_label(kind.label()), Some(kind));
    }
    assert_eq!(ValueKind::from_label("Float"), None);
}

#[test]
fn kind_ids_are_dense_and_stable() {
    let ids: Vec<u8> = ValueKind::ALL.iter().map(|k| k.to_u8()).collect();

    assert_eq!(ids, (1..=30).collect::<Vec<u8>>());
    assert_eq!(ValueKind::Bool.to_u8(), 1);
    assert_eq!(ValueKind::Expression.to_u8(), 30);
}

///
/// CONSTRUCTION
///

#[test]
fn array_rejects_mixed_elements() {
    let err = ManifestValue::array(ValueKind::U8, [ManifestValue::U8(1), ManifestValue::U16(2)])
        .unwrap_err();

    assert_eq!(
        err,
        CodecError::HomogeneousArrayRequired {
            expected: ValueKind::U8,
            actual: ValueKind::U16,
            index: 1,
        }
    );
}

#[test]
fn array_push_keeps_homogeneity() {
    let mut array = Array::empty(ValueKind::String);
    array.push("a".into()).unwrap();

    let err = array.push(true.into()).unwrap_err();
    assert!(matches!(err, CodecError::HomogeneousArrayRequired { index: 1, .. }));
    assert_eq!(array.elements().len(), 1);
}

#[test]
fn map_reports_offending_position() {
    let err = Map::new(
        ValueKind::String,
        ValueKind::U8,
        vec![("a".into(), 1u8.into()), ("b".into(), "oops".into())],
    )
    .unwrap_err();

    assert_eq!(
        err,
        CodecError::HomogeneousMapRequired {
            key_kind: ValueKind::String,
            value_kind: ValueKind::U8,
            position: MapPosition::Value,
            actual: ValueKind::String,
            index: 1,
        }
    );
}

#[test]
fn map_lookup_returns_first_match() {
    let map = Map::new(
        ValueKind::U8,
        ValueKind::String,
        vec![(1u8.into(), "one".into()), (1u8.into(), "uno".into())],
    )
    .unwrap();

    assert_eq!(map.get(&ManifestValue::U8(1)), Some(&ManifestValue::from("one")));
    assert_eq!(map.get(&ManifestValue::U8(2)), None);
}

#[test]
fn duplicate_map_keys_survive_the_wire() {
    let map = ManifestValue::Map(
        Map::new(
            ValueKind::U8,
            ValueKind::String,
            vec![(1u8.into(), "one".into()), (1u8.into(), "uno".into())],
        )
        .unwrap(),
    );

    let wire = map.encode();
    assert_eq!(
        wire["entries"],
        json!([
            [{ "type": "U8", "value": "1" }, { "type": "String", "value": "one" }],
            [{ "type": "U8", "value": "1" }, { "type": "String", "value": "uno" }],
        ])
    );
    assert_eq!(ManifestValue::decode(&wire).unwrap(), map);

    let text = serde_json::to_string(&map).unwrap();
    let parsed: ManifestValue = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, map);
    assert_eq!(serde_json::to_string(&parsed).unwrap(), text);
}

#[test]
fn option_converts_to_some_or_none() {
    assert_eq!(ManifestValue::from(Some(5u8)), ManifestValue::some(5u8));
    assert_eq!(ManifestValue::from(None::<u8>), ManifestValue::None);
}

///
/// DISCRIMINATORS
///

#[test]
fn well_known_names_round_trip() {
    for known in WellKnownDiscriminator::ALL {
        assert_eq!(WellKnownDiscriminator::from_name(known.name()), Some(*known));
    }
}

#[test]
fn discriminator_equivalence() {
    let some = EnumDiscriminator::WellKnown(WellKnownDiscriminator::OptionSome);
    let ok = EnumDiscriminator::WellKnown(WellKnownDiscriminator::ResultOk);

    assert!(some.is_equivalent(EnumDiscriminator::U8(1)));
    assert!(EnumDiscriminator::U8(0).is_equivalent(ok));
    assert!(!some.is_equivalent(EnumDiscriminator::WellKnown(WellKnownDiscriminator::ResultErr)));
    assert_eq!(EnumDiscriminator::METADATA_ENTRY.as_u8(), 1);
    assert_eq!(EnumDiscriminator::PUBLIC_KEY.as_u8(), 9);
    assert_eq!(WellKnownDiscriminator::MetadataStringArray.namespace(), "Metadata");
}

///
/// DECODE ERRORS
///

#[test]
fn unknown_type_is_rejected() {
    let err = decode(json!({ "type": "Float", "value": "1" })).unwrap_err();

    assert_eq!(err, CodecError::UnknownValueKind("Float".to_string()));
}

#[test]
fn typed_decode_checks_discriminator_first() {
    let err = Decimal::decode(&json!({ "type": "String", "value": "1" })).unwrap_err();

    assert_eq!(
        err,
        CodecError::TypeDiscriminatorMismatch {
            expected: "Decimal",
            actual: "String".to_string(),
        }
    );

    let err = ManifestValue::decode_as(&json!({ "type": "U8", "value": "1" }), ValueKind::U16)
        .unwrap_err();
    assert!(matches!(err, CodecError::TypeDiscriminatorMismatch { expected: "U16", .. }));
}

#[test]
fn integers_are_range_checked() {
    let err = decode(json!({ "type": "U8", "value": "256" })).unwrap_err();
    assert_eq!(
        err,
        CodecError::IntegerOutOfRange {
            kind: ValueKind::U8,
            value: "256".to_string(),
        }
    );

    let err = decode(json!({ "type": "I8", "value": "-129" })).unwrap_err();
    assert!(matches!(err, CodecError::IntegerOutOfRange { kind: ValueKind::I8, .. }));

    let err = decode(json!({ "type": "U32", "value": "12a" })).unwrap_err();
    assert!(matches!(err, CodecError::MalformedWireValue { .. }));

    assert_eq!(
        decode(json!({ "type": "I128", "value": "-170141183460469231731687303715884105728" }))
            .unwrap(),
        ManifestValue::I128(i128::MIN)
    );
}

#[test]
fn integers_must_be_canonical_digits() {
    for text in ["+01", "+1", "", "-", " 1", "1_000"] {
        let err = decode(json!({ "type": "U8", "value": text })).unwrap_err();
        assert!(
            matches!(err, CodecError::MalformedWireValue { .. }),
            "{text:?} gave {err:?}"
        );
    }

    let err = decode(json!({ "type": "I32", "value": "+7" })).unwrap_err();
    assert!(matches!(err, CodecError::MalformedWireValue { .. }));
}

#[test]
fn enum_u8_discriminator_is_classified_like_integers() {
    let variant = |discriminator: &str| {
        json!({
            "type": "Enum",
            "variant": { "type": "U8", "discriminator": discriminator },
        })
    };

    assert!(matches!(
        decode(variant("abc")).unwrap_err(),
        CodecError::MalformedWireValue { .. }
    ));
    assert!(matches!(
        decode(variant("+1")).unwrap_err(),
        CodecError::MalformedWireValue { .. }
    ));
    assert_eq!(
        decode(variant("256")).unwrap_err(),
        CodecError::IntegerOutOfRange {
            kind: ValueKind::U8,
            value: "256".to_string(),
        }
    );
}

#[test]
fn integers_travel_as_strings() {
    let err = decode(json!({ "type": "U8", "value": 1 })).unwrap_err();

    assert!(matches!(err, CodecError::MalformedWireValue { .. }));
}

#[test]
fn unknown_enum_discriminator_is_rejected() {
    let wire = json!({
        "type": "Enum",
        "variant": { "type": "String", "discriminator": "EnumName::Variant" },
    });

    assert_eq!(
        decode(wire).unwrap_err(),
        CodecError::UnknownEnumDiscriminator("EnumName::Variant".to_string())
    );
}

#[test]
fn decoded_array_must_be_homogeneous() {
    let wire = json!({
        "type": "Array",
        "element_kind": "U8",
        "elements": [
            { "type": "U8", "value": "1" },
            { "type": "String", "value": "x" },
        ],
    });

    assert!(matches!(
        decode(wire).unwrap_err(),
        CodecError::HomogeneousArrayRequired { index: 1, .. }
    ));
}

#[test]
fn map_accepts_short_kind_keys() {
    let wire = json!({
        "type": "Map",
        "key_kind": "U8",
        "value_kind": "String",
        "entries": [[{ "type": "U8", "value": "1" }, { "type": "String", "value": "a" }]],
    });

    let ManifestValue::Map(map) = decode(wire).unwrap() else {
        panic!("expected a map");
    };
    assert_eq!(map.key_kind(), ValueKind::U8);
    assert_eq!(map.value_kind(), ValueKind::String);
    assert_eq!(map.entries().len(), 1);
}

#[test]
fn bad_payloads_surface_typed_errors() {
    assert!(matches!(
        decode(json!({ "type": "Decimal", "value": "1.2.3" })).unwrap_err(),
        CodecError::InvalidDecimal(_)
    ));
    assert!(matches!(
        decode(json!({ "type": "Bytes", "value": "zz" })).unwrap_err(),
        CodecError::InvalidHex(_)
    ));
    assert!(matches!(
        decode(json!({ "type": "Blob", "hash": "abcd" })).unwrap_err(),
        CodecError::InvalidBlobHash(_)
    ));
    assert_eq!(
        decode(json!({ "type": "Expression", "value": "ENTIRE_VAULT" })).unwrap_err(),
        CodecError::UnknownExpression("ENTIRE_VAULT".to_string())
    );
    assert!(matches!(
        decode(json!({ "type": "Address", "address": "" })).unwrap_err(),
        CodecError::InvalidAddress(_)
    ));
    assert!(matches!(
        decode(json!({
            "type": "Address",
            "address": "component_rdx1qtkryz5scup945usk39qjc2yjh6l5zsyuh8t7v5pk0tsrdcazq",
        }))
        .unwrap_err(),
        CodecError::InvalidAddress(AddressError::InvalidChecksum { .. })
    ));
}

#[test]
fn non_object_is_malformed() {
    assert!(matches!(
        decode(json!("U8")).unwrap_err(),
        CodecError::MalformedWireValue { .. }
    ));
}

///
/// ENCODE SHAPE
///

#[test]
fn type_key_is_emitted_first() {
    let text = serde_json::to_string(&ManifestValue::U8(1)).unwrap();

    assert_eq!(text, r#"{"type":"U8","value":"1"}"#);
}

#[test]
fn empty_enum_omits_fields() {
    let value = ManifestValue::enumeration(3u8, []);

    assert_eq!(
        value.encode(),
        json!({ "type": "Enum", "variant": { "type": "U8", "discriminator": "3" } })
    );
}

#[test]
fn some_wraps_inner_node() {
    let value = ManifestValue::some(ManifestValue::String("x".into()));

    assert_eq!(
        value.encode(),
        json!({ "type": "Some", "value": { "type": "String", "value": "x" } })
    );
}

///
/// TEXT
///

#[test]
fn renders_manifest_notation() {
    let array =
        ManifestValue::array(ValueKind::U8, [ManifestValue::U8(1), ManifestValue::U8(2)]).unwrap();
    assert_eq!(array.to_string(), "Array<U8>(1u8, 2u8)");

    let map = ManifestValue::Map(
        Map::new(
            ValueKind::U8,
            ValueKind::String,
            vec![(1u8.into(), "a".into())],
        )
        .unwrap(),
    );
    assert_eq!(map.to_string(), r#"Map<U8, String>(1u8 => "a")"#);

    let variant =
        ManifestValue::enumeration(WellKnownDiscriminator::OptionSome, [ManifestValue::Bool(true)]);
    assert_eq!(variant.to_string(), "Enum<Option::Some>(true)");

    let tuple = ManifestValue::tuple([
        ManifestValue::Decimal(Decimal::from(5)),
        ManifestValue::Expression(Expression::EntireWorktop),
        ManifestValue::NonFungibleLocalId(NonFungibleLocalId::Integer(7)),
    ]);
    assert_eq!(
        tuple.to_string(),
        r##"Tuple(Decimal("5"), Expression("ENTIRE_WORKTOP"), NonFungibleLocalId("#7#"))"##
    );

    assert_eq!(ManifestValue::from("say \"hi\"").to_string(), r#""say \"hi\"""#);
    assert_eq!(ManifestValue::some(-3i32).to_string(), "Some(-3i32)");
}

///
/// PROPERTIES
///

const ADDRESSES: &[&str] = &[
    "account_rdx16xlfcpp0vf7e3gqnswv8j9k58n6rjccu58vvspmdva22kf3aplease",
    "component_rdx1qtkryz5scup945usk39qjc2yjh6l5zsyuh8t7v5pk0tsrdcazt",
    "package_rdx1qyqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqpqqzrhqe8",
];

const RESOURCES: &[&str] = &[
    "resource_rdx1tknxxxxxxxxxradxrdxxxxxxxxx009923554798xxxxxxxxxradxrd",
    "resource_tdx_2_1thqcgjw37fjgycpvqr52nx4jcsdeuq75mf2nywme07kzsuds9a4psp",
];

fn arb_address(pool: &'static [&'static str]) -> impl Strategy<Value = Address> {
    prop::sample::select(pool)
        .prop_map(|text| Address::parse(text).expect("valid address"))
}

fn arb_identifier() -> impl Strategy<Value = TransientIdentifier> {
    prop_oneof![
        "[a-z]{1,8}[0-9]?".prop_map(TransientIdentifier::String),
        any::<u32>().prop_map(TransientIdentifier::U32),
    ]
}

fn arb_local_id() -> impl Strategy<Value = NonFungibleLocalId> {
    prop_oneof![
        any::<u64>().prop_map(NonFungibleLocalId::Integer),
        any::<u128>().prop_map(NonFungibleLocalId::Uuid),
        proptest::collection::vec(any::<u8>(), 1..8).prop_map(NonFungibleLocalId::Bytes),
    ]
}

fn arb_leaf() -> impl Strategy<Value = ManifestValue> {
    prop_oneof![
        any::<bool>().prop_map(ManifestValue::Bool),
        any::<i8>().prop_map(ManifestValue::I8),
        any::<i128>().prop_map(ManifestValue::I128),
        any::<u8>().prop_map(ManifestValue::U8),
        any::<u64>().prop_map(ManifestValue::U64),
        any::<u128>().prop_map(ManifestValue::U128),
        "\\PC{0,12}".prop_map(ManifestValue::String),
        Just(ManifestValue::None),
        (any::<i64>(), 0u32..=18).prop_map(|(mantissa, scale)| {
            ManifestValue::Decimal(Decimal::from_mantissa(mantissa, scale).expect("i64 fits"))
        }),
        (any::<i64>(), 0u32..=36).prop_map(|(mantissa, scale)| {
            ManifestValue::PreciseDecimal(
                PreciseDecimal::from_mantissa(mantissa, scale).expect("i64 fits"),
            )
        }),
        arb_address(ADDRESSES).prop_map(ManifestValue::Address),
        arb_identifier().prop_map(|id| ManifestValue::Bucket(Bucket(id))),
        arb_identifier().prop_map(|id| ManifestValue::Proof(Proof(id))),
        arb_local_id().prop_map(ManifestValue::NonFungibleLocalId),
        (arb_address(RESOURCES), arb_local_id()).prop_map(|(resource, local_id)| {
            ManifestValue::NonFungibleGlobalId(NonFungibleGlobalId::new(resource, local_id))
        }),
        any::<[u8; 32]>().prop_map(|hash| ManifestValue::Blob(Blob::from_hash(hash))),
        proptest::collection::vec(any::<u8>(), 0..8)
            .prop_map(|bytes| ManifestValue::Bytes(bytes.into())),
        Just(ManifestValue::Expression(Expression::EntireAuthZone)),
    ]
}

fn arb_array(inner: BoxedStrategy<ManifestValue>) -> impl Strategy<Value = ManifestValue> {
    let array = |kind: ValueKind, items: Vec<ManifestValue>| {
        ManifestValue::array(kind, items).expect("homogeneous")
    };

    prop_oneof![
        proptest::collection::vec(any::<u16>(), 0..4).prop_map(move |items| {
            array(ValueKind::U16, items.into_iter().map(ManifestValue::U16).collect())
        }),
        proptest::collection::vec("[a-z]{0,4}", 0..4).prop_map(move |items| {
            array(ValueKind::String, items.into_iter().map(ManifestValue::String).collect())
        }),
        proptest::collection::vec(arb_address(RESOURCES), 0..3).prop_map(move |items| {
            array(ValueKind::Address, items.into_iter().map(ManifestValue::Address).collect())
        }),
        proptest::collection::vec(proptest::collection::vec(inner, 0..3), 0..3).prop_map(
            move |items| {
                let tuples = items.into_iter().map(|t| ManifestValue::tuple(t)).collect();
                array(ValueKind::Tuple, tuples)
            }
        ),
    ]
}

// Keys come from a three-value domain so repeated keys are common.
fn arb_map(inner: BoxedStrategy<ManifestValue>) -> impl Strategy<Value = ManifestValue> {
    proptest::collection::vec((0u8..3, inner), 0..5).prop_map(|entries| {
        let entries = entries
            .into_iter()
            .map(|(key, value)| (ManifestValue::U8(key), ManifestValue::some(value)))
            .collect();

        ManifestValue::Map(Map::new(ValueKind::U8, ValueKind::Some, entries).expect("homogeneous"))
    })
}

fn arb_value() -> impl Strategy<Value = ManifestValue> {
    arb_leaf().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4)
                .prop_map(|items| ManifestValue::tuple(items)),
            inner.clone().prop_map(|v| ManifestValue::some(v)),
            inner.clone().prop_map(|v| ManifestValue::ok(v)),
            inner.clone().prop_map(|v| ManifestValue::err(v)),
            (any::<u8>(), proptest::collection::vec(inner.clone(), 0..3))
                .prop_map(|(index, fields)| ManifestValue::enumeration(index, fields)),
            arb_array(inner.clone()),
            arb_map(inner),
        ]
    })
}

proptest! {
    #[test]
    fn codec_round_trip(value in arb_value()) {
        let back = ManifestValue::decode(&value.encode()).unwrap();
        prop_assert_eq!(&back, &value);

        let text = serde_json::to_string(&value).unwrap();
        let parsed: ManifestValue = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(parsed, value);
    }
}
