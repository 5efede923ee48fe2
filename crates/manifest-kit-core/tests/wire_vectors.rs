//! Byte-exact wire vectors for every manifest value kind.

use manifest_kit_core::{
    prelude::*,
    types::TransientIdentifier,
    value::{Map, ValueNode},
};
use serde_json::Value as Json;

const COMPONENT: &str = "component_rdx1qtkryz5scup945usk39qjc2yjh6l5zsyuh8t7v5pk0tsrdcazt";
const RESOURCE: &str = "resource_rdx1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqy99qqm";
const PACKAGE: &str = "package_rdx1qyqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqpqqzrhqe8";
const NFT_RESOURCE: &str = "resource_rdx1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqs3ydc4g";
const UUID: u128 = 241_008_287_272_164_729_465_721_528_295_504_357_972;
const HASH: &str = "d28d2c3710601fbc097000ec73455693f4861dc0eb7c90d8821f2a13f617313e";

fn address(text: &str) -> Address {
    Address::parse(text).unwrap()
}

fn global(local_id: NonFungibleLocalId) -> ManifestValue {
    NonFungibleGlobalId::new(address(NFT_RESOURCE), local_id).into()
}

// Encodes to exactly `wire` and decodes back to `value`.
fn assert_vector(value: &ManifestValue, wire: &str) {
    assert_eq!(serde_json::to_string(value).unwrap(), wire, "encode {value}");

    let decoded: ManifestValue = serde_json::from_str(wire).unwrap();
    assert_eq!(&decoded, value, "decode {wire}");
}

#[test]
fn scalar_vectors() {
    let cases: Vec<(ManifestValue, &str)> = vec![
        (false.into(), r#"{"type":"Bool","value":false}"#),
        (true.into(), r#"{"type":"Bool","value":true}"#),
        (1u8.into(), r#"{"type":"U8","value":"1"}"#),
        (1u16.into(), r#"{"type":"U16","value":"1"}"#),
        (1u32.into(), r#"{"type":"U32","value":"1"}"#),
        (1u64.into(), r#"{"type":"U64","value":"1"}"#),
        (1u128.into(), r#"{"type":"U128","value":"1"}"#),
        (1i8.into(), r#"{"type":"I8","value":"1"}"#),
        (1i16.into(), r#"{"type":"I16","value":"1"}"#),
        (1i32.into(), r#"{"type":"I32","value":"1"}"#),
        (1i64.into(), r#"{"type":"I64","value":"1"}"#),
        (1i128.into(), r#"{"type":"I128","value":"1"}"#),
        ("Scrypto".into(), r#"{"type":"String","value":"Scrypto"}"#),
        (Decimal::one().into(), r#"{"type":"Decimal","value":"1"}"#),
        (PreciseDecimal::one().into(), r#"{"type":"PreciseDecimal","value":"1"}"#),
    ];

    for (value, wire) in &cases {
        assert_vector(value, wire);
    }
}

#[test]
fn enum_and_wrapper_vectors() {
    let some = WellKnownDiscriminator::OptionSome;
    let cases: Vec<(ManifestValue, &str)> = vec![
        (
            ManifestValue::enumeration(1u8, []),
            r#"{"type":"Enum","variant":{"type":"U8","discriminator":"1"}}"#,
        ),
        (
            ManifestValue::enumeration(some, []),
            r#"{"type":"Enum","variant":{"type":"String","discriminator":"Option::Some"}}"#,
        ),
        (
            ManifestValue::enumeration(some, [ManifestValue::U8(1)]),
            r#"{"type":"Enum","variant":{"type":"String","discriminator":"Option::Some"},"fields":[{"type":"U8","value":"1"}]}"#,
        ),
        (
            ManifestValue::some(1u8),
            r#"{"type":"Some","value":{"type":"U8","value":"1"}}"#,
        ),
        (ManifestValue::None, r#"{"type":"None"}"#),
        (
            ManifestValue::ok(1u8),
            r#"{"type":"Ok","value":{"type":"U8","value":"1"}}"#,
        ),
        (
            ManifestValue::err(1u8),
            r#"{"type":"Err","value":{"type":"U8","value":"1"}}"#,
        ),
    ];

    for (value, wire) in &cases {
        assert_vector(value, wire);
    }
}

#[test]
fn container_vectors() {
    let array = ManifestValue::array(
        ValueKind::U8,
        [ManifestValue::U8(1), ManifestValue::U8(2), ManifestValue::U8(3)],
    )
    .unwrap();
    assert_vector(
        &array,
        r#"{"type":"Array","element_kind":"U8","elements":[{"type":"U8","value":"1"},{"type":"U8","value":"2"},{"type":"U8","value":"3"}]}"#,
    );

    let tuple = ManifestValue::tuple([ManifestValue::tuple([
        ManifestValue::U8(1),
        ManifestValue::from("Something"),
    ])]);
    assert_vector(
        &tuple,
        r#"{"type":"Tuple","elements":[{"type":"Tuple","elements":[{"type":"U8","value":"1"},{"type":"String","value":"Something"}]}]}"#,
    );
}

#[test]
fn map_vector_ignores_key_order() {
    let map = ManifestValue::Map(
        Map::new(
            ValueKind::U8,
            ValueKind::String,
            vec![
                (ManifestValue::U8(65), ManifestValue::from("A")),
                (ManifestValue::U8(66), ManifestValue::from("B")),
            ],
        )
        .unwrap(),
    );
    let wire = r#"{"entries":[[{"type":"U8","value":"65"},{"type":"String","value":"A"}],[{"type":"U8","value":"66"},{"type":"String","value":"B"}]],"type":"Map","key_value_kind":"U8","value_value_kind":"String"}"#;

    let expected: Json = serde_json::from_str(wire).unwrap();
    assert_eq!(map.encode(), expected);

    let decoded: ManifestValue = serde_json::from_str(wire).unwrap();
    assert_eq!(decoded, map);
}

#[test]
fn address_and_transient_vectors() {
    let cases: Vec<(ManifestValue, String)> = vec![
        (
            address(COMPONENT).into(),
            format!(r#"{{"type":"Address","address":"{COMPONENT}"}}"#),
        ),
        (
            address(RESOURCE).into(),
            format!(r#"{{"type":"Address","address":"{RESOURCE}"}}"#),
        ),
        (
            address(PACKAGE).into(),
            format!(r#"{{"type":"Address","address":"{PACKAGE}"}}"#),
        ),
        (
            Bucket::named("bucket").into(),
            r#"{"type":"Bucket","identifier":{"type":"String","value":"bucket"}}"#.to_string(),
        ),
        (
            Bucket(TransientIdentifier::U32(1)).into(),
            r#"{"type":"Bucket","identifier":{"type":"U32","value":"1"}}"#.to_string(),
        ),
        (
            Proof::named("proof").into(),
            r#"{"type":"Proof","identifier":{"type":"String","value":"proof"}}"#.to_string(),
        ),
        (
            Proof(TransientIdentifier::U32(1)).into(),
            r#"{"type":"Proof","identifier":{"type":"U32","value":"1"}}"#.to_string(),
        ),
    ];

    for (value, wire) in &cases {
        assert_vector(value, wire);
    }
}

#[test]
fn non_fungible_vectors() {
    let local = |id: NonFungibleLocalId| ManifestValue::NonFungibleLocalId(id);
    let cases: Vec<(ManifestValue, String)> = vec![
        (
            local(NonFungibleLocalId::Uuid(UUID)),
            format!(r#"{{"type":"NonFungibleLocalId","value":{{"type":"UUID","value":"{UUID}"}}}}"#),
        ),
        (
            local(NonFungibleLocalId::Integer(1)),
            r#"{"type":"NonFungibleLocalId","value":{"type":"Integer","value":"1"}}"#.to_string(),
        ),
        (
            local(NonFungibleLocalId::String("Scrypto".to_string())),
            r#"{"type":"NonFungibleLocalId","value":{"type":"String","value":"Scrypto"}}"#
                .to_string(),
        ),
        (
            local(NonFungibleLocalId::Bytes(vec![1, 2, 3, 4])),
            r#"{"type":"NonFungibleLocalId","value":{"type":"Bytes","value":"01020304"}}"#
                .to_string(),
        ),
        (
            global(NonFungibleLocalId::Uuid(UUID)),
            format!(
                r#"{{"type":"NonFungibleGlobalId","resource_address":{{"type":"Address","address":"{NFT_RESOURCE}"}},"non_fungible_local_id":{{"type":"NonFungibleLocalId","value":{{"type":"UUID","value":"{UUID}"}}}}}}"#
            ),
        ),
        (
            global(NonFungibleLocalId::Integer(1)),
            format!(
                r#"{{"type":"NonFungibleGlobalId","resource_address":{{"type":"Address","address":"{NFT_RESOURCE}"}},"non_fungible_local_id":{{"type":"NonFungibleLocalId","value":{{"type":"Integer","value":"1"}}}}}}"#
            ),
        ),
        (
            global(NonFungibleLocalId::String("Scrypto".to_string())),
            format!(
                r#"{{"type":"NonFungibleGlobalId","resource_address":{{"type":"Address","address":"{NFT_RESOURCE}"}},"non_fungible_local_id":{{"type":"NonFungibleLocalId","value":{{"type":"String","value":"Scrypto"}}}}}}"#
            ),
        ),
        (
            global(NonFungibleLocalId::Bytes(vec![1, 2, 3, 4])),
            format!(
                r#"{{"type":"NonFungibleGlobalId","resource_address":{{"type":"Address","address":"{NFT_RESOURCE}"}},"non_fungible_local_id":{{"type":"NonFungibleLocalId","value":{{"type":"Bytes","value":"01020304"}}}}}}"#
            ),
        ),
    ];

    for (value, wire) in &cases {
        assert_vector(value, wire);
    }
}

#[test]
fn expression_blob_and_bytes_vectors() {
    let cases: Vec<(ManifestValue, String)> = vec![
        (
            Expression::EntireAuthZone.into(),
            r#"{"type":"Expression","value":"ENTIRE_AUTH_ZONE"}"#.to_string(),
        ),
        (
            Expression::EntireWorktop.into(),
            r#"{"type":"Expression","value":"ENTIRE_WORKTOP"}"#.to_string(),
        ),
        (
            Blob::from_hex(HASH).unwrap().into(),
            format!(r#"{{"type":"Blob","hash":"{HASH}"}}"#),
        ),
        (
            Bytes::from_hex(HASH).unwrap().into(),
            format!(r#"{{"type":"Bytes","value":"{HASH}"}}"#),
        ),
    ];

    for (value, wire) in &cases {
        assert_vector(value, wire);
    }
}

#[test]
fn typed_nodes_share_the_value_wire_form() {
    let id = NonFungibleLocalId::Integer(7);
    let as_value = ManifestValue::NonFungibleLocalId(id.clone()).encode();

    assert_eq!(id.encode(), as_value);
    assert_eq!(NonFungibleLocalId::decode(&as_value).unwrap(), id);
}
