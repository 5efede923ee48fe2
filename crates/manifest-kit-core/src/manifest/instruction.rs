use crate::{
    manifest::ManifestError,
    types::{Address, Bucket, Decimal, NonFungibleLocalId, Proof},
    value::{
        CodecError, ManifestValue, ValueKind, ValueNode, WireObject, WireValue,
        wire::{array_field, as_object, decode_all, encode_all, field, str_field},
    },
};
use std::fmt::{self, Display};

const INSTRUCTION: &str = "instruction";

///
/// Instruction
///
/// One step of a transaction manifest. Operands are value-model nodes and
/// travel on the wire in their node form, keyed by operand name.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Instruction {
    CallFunction {
        package_address: Address,
        blueprint_name: String,
        function_name: String,
        arguments: Vec<ManifestValue>,
    },
    CallMethod {
        component_address: Address,
        method_name: String,
        arguments: Vec<ManifestValue>,
    },
    TakeFromWorktop {
        resource_address: Address,
        into_bucket: Bucket,
    },
    TakeFromWorktopByAmount {
        amount: Decimal,
        resource_address: Address,
        into_bucket: Bucket,
    },
    TakeFromWorktopByIds {
        ids: Vec<NonFungibleLocalId>,
        resource_address: Address,
        into_bucket: Bucket,
    },
    ReturnToWorktop {
        bucket: Bucket,
    },
    AssertWorktopContains {
        resource_address: Address,
    },
    AssertWorktopContainsByAmount {
        amount: Decimal,
        resource_address: Address,
    },
    AssertWorktopContainsByIds {
        ids: Vec<NonFungibleLocalId>,
        resource_address: Address,
    },
    PopFromAuthZone {
        into_proof: Proof,
    },
    PushToAuthZone {
        proof: Proof,
    },
    ClearAuthZone,
    CreateProofFromAuthZone {
        resource_address: Address,
        into_proof: Proof,
    },
    CreateProofFromAuthZoneByAmount {
        amount: Decimal,
        resource_address: Address,
        into_proof: Proof,
    },
    CreateProofFromAuthZoneByIds {
        ids: Vec<NonFungibleLocalId>,
        resource_address: Address,
        into_proof: Proof,
    },
    CreateProofFromBucket {
        bucket: Bucket,
        into_proof: Proof,
    },
    CloneProof {
        proof: Proof,
        into_proof: Proof,
    },
    DropProof {
        proof: Proof,
    },
    DropAllProofs,
    BurnResource {
        bucket: Bucket,
    },
    MintFungible {
        resource_address: Address,
        amount: Decimal,
    },
    SetMetadata {
        entity_address: Address,
        key: String,
        value: ManifestValue,
    },
}

///
/// Operand
///
/// A named instruction operand. Argument lists are spread in text form;
/// id lists render as a typed array.
///

#[derive(Clone, Debug)]
enum Operand {
    Value(ManifestValue),
    Arguments(Vec<ManifestValue>),
    Ids(Vec<ManifestValue>),
}

impl Operand {
    fn encode(&self) -> WireValue {
        match self {
            Self::Value(value) => value.encode(),
            Self::Arguments(values) | Self::Ids(values) => encode_all(values),
        }
    }
}

impl Instruction {
    /// Wire and text name, e.g. `CALL_METHOD`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CallFunction { .. } => "CALL_FUNCTION",
            Self::CallMethod { .. } => "CALL_METHOD",
            Self::TakeFromWorktop { .. } => "TAKE_FROM_WORKTOP",
            Self::TakeFromWorktopByAmount { .. } => "TAKE_FROM_WORKTOP_BY_AMOUNT",
            Self::TakeFromWorktopByIds { .. } => "TAKE_FROM_WORKTOP_BY_IDS",
            Self::ReturnToWorktop { .. } => "RETURN_TO_WORKTOP",
            Self::AssertWorktopContains { .. } => "ASSERT_WORKTOP_CONTAINS",
            Self::AssertWorktopContainsByAmount { .. } => "ASSERT_WORKTOP_CONTAINS_BY_AMOUNT",
            Self::AssertWorktopContainsByIds { .. } => "ASSERT_WORKTOP_CONTAINS_BY_IDS",
            Self::PopFromAuthZone { .. } => "POP_FROM_AUTH_ZONE",
            Self::PushToAuthZone { .. } => "PUSH_TO_AUTH_ZONE",
            Self::ClearAuthZone => "CLEAR_AUTH_ZONE",
            Self::CreateProofFromAuthZone { .. } => "CREATE_PROOF_FROM_AUTH_ZONE",
            Self::CreateProofFromAuthZoneByAmount { .. } => "CREATE_PROOF_FROM_AUTH_ZONE_BY_AMOUNT",
            Self::CreateProofFromAuthZoneByIds { .. } => "CREATE_PROOF_FROM_AUTH_ZONE_BY_IDS",
            Self::CreateProofFromBucket { .. } => "CREATE_PROOF_FROM_BUCKET",
            Self::CloneProof { .. } => "CLONE_PROOF",
            Self::DropProof { .. } => "DROP_PROOF",
            Self::DropAllProofs => "DROP_ALL_PROOFS",
            Self::BurnResource { .. } => "BURN_RESOURCE",
            Self::MintFungible { .. } => "MINT_FUNGIBLE",
            Self::SetMetadata { .. } => "SET_METADATA",
        }
    }

    /// Convenience for the common `lock_fee` method call.
    #[must_use]
    pub fn lock_fee(account: Address, amount: Decimal) -> Self {
        Self::CallMethod {
            component_address: account,
            method_name: "lock_fee".to_string(),
            arguments: vec![amount.into()],
        }
    }

    // Operands in wire and text order.
    fn operands(&self) -> Vec<(&'static str, Operand)> {
        fn value(v: impl Into<ManifestValue>) -> Operand {
            Operand::Value(v.into())
        }
        fn ids(ids: &[NonFungibleLocalId]) -> Operand {
            Operand::Ids(ids.iter().cloned().map(ManifestValue::from).collect())
        }

        match self {
            Self::CallFunction {
                package_address,
                blueprint_name,
                function_name,
                arguments,
            } => vec![
                ("package_address", value(package_address.clone())),
                ("blueprint_name", value(blueprint_name.as_str())),
                ("function_name", value(function_name.as_str())),
                ("arguments", Operand::Arguments(arguments.clone())),
            ],
            Self::CallMethod {
                component_address,
                method_name,
                arguments,
            } => vec![
                ("component_address", value(component_address.clone())),
                ("method_name", value(method_name.as_str())),
                ("arguments", Operand::Arguments(arguments.clone())),
            ],
            Self::TakeFromWorktop {
                resource_address,
                into_bucket,
            } => vec![
                ("resource_address", value(resource_address.clone())),
                ("into_bucket", value(into_bucket.clone())),
            ],
            Self::TakeFromWorktopByAmount {
                amount,
                resource_address,
                into_bucket,
            } => vec![
                ("amount", value(amount.clone())),
                ("resource_address", value(resource_address.clone())),
                ("into_bucket", value(into_bucket.clone())),
            ],
            Self::TakeFromWorktopByIds {
                ids: local_ids,
                resource_address,
                into_bucket,
            } => vec![
                ("ids", ids(local_ids)),
                ("resource_address", value(resource_address.clone())),
                ("into_bucket", value(into_bucket.clone())),
            ],
            Self::ReturnToWorktop { bucket } | Self::BurnResource { bucket } => {
                vec![("bucket", value(bucket.clone()))]
            }
            Self::AssertWorktopContains { resource_address } => {
                vec![("resource_address", value(resource_address.clone()))]
            }
            Self::AssertWorktopContainsByAmount {
                amount,
                resource_address,
            } => vec![
                ("amount", value(amount.clone())),
                ("resource_address", value(resource_address.clone())),
            ],
            Self::AssertWorktopContainsByIds {
                ids: local_ids,
                resource_address,
            } => vec![
                ("ids", ids(local_ids)),
                ("resource_address", value(resource_address.clone())),
            ],
            Self::PopFromAuthZone { into_proof } => {
                vec![("into_proof", value(into_proof.clone()))]
            }
            Self::PushToAuthZone { proof } | Self::DropProof { proof } => {
                vec![("proof", value(proof.clone()))]
            }
            Self::ClearAuthZone | Self::DropAllProofs => Vec::new(),
            Self::CreateProofFromAuthZone {
                resource_address,
                into_proof,
            } => vec![
                ("resource_address", value(resource_address.clone())),
                ("into_proof", value(into_proof.clone())),
            ],
            Self::CreateProofFromAuthZoneByAmount {
                amount,
                resource_address,
                into_proof,
            } => vec![
                ("amount", value(amount.clone())),
                ("resource_address", value(resource_address.clone())),
                ("into_proof", value(into_proof.clone())),
            ],
            Self::CreateProofFromAuthZoneByIds {
                ids: local_ids,
                resource_address,
                into_proof,
            } => vec![
                ("ids", ids(local_ids)),
                ("resource_address", value(resource_address.clone())),
                ("into_proof", value(into_proof.clone())),
            ],
            Self::CreateProofFromBucket { bucket, into_proof } => vec![
                ("bucket", value(bucket.clone())),
                ("into_proof", value(into_proof.clone())),
            ],
            Self::CloneProof { proof, into_proof } => vec![
                ("proof", value(proof.clone())),
                ("into_proof", value(into_proof.clone())),
            ],
            Self::MintFungible {
                resource_address,
                amount,
            } => vec![
                ("resource_address", value(resource_address.clone())),
                ("amount", value(amount.clone())),
            ],
            Self::SetMetadata {
                entity_address,
                key,
                value: metadata,
            } => vec![
                ("entity_address", value(entity_address.clone())),
                ("key", value(key.as_str())),
                ("value", value(metadata.clone())),
            ],
        }
    }

    ///
    /// WIRE
    ///

    #[must_use]
    pub fn encode(&self) -> WireValue {
        let mut object = WireObject::new();
        object.insert(INSTRUCTION.to_string(), WireValue::String(self.name().to_string()));
        for (name, operand) in self.operands() {
            object.insert(name.to_string(), operand.encode());
        }

        WireValue::Object(object)
    }

    pub fn decode(wire: &WireValue) -> Result<Self, ManifestError> {
        let object = as_object(wire, "instruction")?;
        let name = str_field(object, INSTRUCTION, "instruction")?;
        let r = FieldReader { object };

        let instruction = match name {
            "CALL_FUNCTION" => Self::CallFunction {
                package_address: r.node("package_address")?,
                blueprint_name: r.string("blueprint_name")?,
                function_name: r.string("function_name")?,
                arguments: r.arguments("arguments")?,
            },
            "CALL_METHOD" => Self::CallMethod {
                component_address: r.node("component_address")?,
                method_name: r.string("method_name")?,
                arguments: r.arguments("arguments")?,
            },
            "TAKE_FROM_WORKTOP" => Self::TakeFromWorktop {
                resource_address: r.node("resource_address")?,
                into_bucket: r.node("into_bucket")?,
            },
            "TAKE_FROM_WORKTOP_BY_AMOUNT" => Self::TakeFromWorktopByAmount {
                amount: r.node("amount")?,
                resource_address: r.node("resource_address")?,
                into_bucket: r.node("into_bucket")?,
            },
            "TAKE_FROM_WORKTOP_BY_IDS" => Self::TakeFromWorktopByIds {
                ids: r.ids("ids")?,
                resource_address: r.node("resource_address")?,
                into_bucket: r.node("into_bucket")?,
            },
            "RETURN_TO_WORKTOP" => Self::ReturnToWorktop {
                bucket: r.node("bucket")?,
            },
            "ASSERT_WORKTOP_CONTAINS" => Self::AssertWorktopContains {
                resource_address: r.node("resource_address")?,
            },
            "ASSERT_WORKTOP_CONTAINS_BY_AMOUNT" => Self::AssertWorktopContainsByAmount {
                amount: r.node("amount")?,
                resource_address: r.node("resource_address")?,
            },
            "ASSERT_WORKTOP_CONTAINS_BY_IDS" => Self::AssertWorktopContainsByIds {
                ids: r.ids("ids")?,
                resource_address: r.node("resource_address")?,
            },
            "POP_FROM_AUTH_ZONE" => Self::PopFromAuthZone {
                into_proof: r.node("into_proof")?,
            },
            "PUSH_TO_AUTH_ZONE" => Self::PushToAuthZone {
                proof: r.node("proof")?,
            },
            "CLEAR_AUTH_ZONE" => Self::ClearAuthZone,
            "CREATE_PROOF_FROM_AUTH_ZONE" => Self::CreateProofFromAuthZone {
                resource_address: r.node("resource_address")?,
                into_proof: r.node("into_proof")?,
            },
            "CREATE_PROOF_FROM_AUTH_ZONE_BY_AMOUNT" => Self::CreateProofFromAuthZoneByAmount {
                amount: r.node("amount")?,
                resource_address: r.node("resource_address")?,
                into_proof: r.node("into_proof")?,
            },
            "CREATE_PROOF_FROM_AUTH_ZONE_BY_IDS" => Self::CreateProofFromAuthZoneByIds {
                ids: r.ids("ids")?,
                resource_address: r.node("resource_address")?,
                into_proof: r.node("into_proof")?,
            },
            "CREATE_PROOF_FROM_BUCKET" => Self::CreateProofFromBucket {
                bucket: r.node("bucket")?,
                into_proof: r.node("into_proof")?,
            },
            "CLONE_PROOF" => Self::CloneProof {
                proof: r.node("proof")?,
                into_proof: r.node("into_proof")?,
            },
            "DROP_PROOF" => Self::DropProof {
                proof: r.node("proof")?,
            },
            "DROP_ALL_PROOFS" => Self::DropAllProofs,
            "BURN_RESOURCE" => Self::BurnResource {
                bucket: r.node("bucket")?,
            },
            "MINT_FUNGIBLE" => Self::MintFungible {
                resource_address: r.node("resource_address")?,
                amount: r.node("amount")?,
            },
            "SET_METADATA" => Self::SetMetadata {
                entity_address: r.node("entity_address")?,
                key: r.string("key")?,
                value: r.value("value")?,
            },
            other => return Err(ManifestError::UnknownInstruction(other.to_string())),
        };

        Ok(instruction)
    }
}

///
/// FieldReader
///

struct FieldReader<'a> {
    object: &'a WireObject,
}

impl FieldReader<'_> {
    fn get(&self, name: &str) -> Result<&WireValue, CodecError> {
        field(self.object, name, "instruction")
    }

    fn node<T: ValueNode>(&self, name: &str) -> Result<T, CodecError> {
        T::decode(self.get(name)?)
    }

    fn value(&self, name: &str) -> Result<ManifestValue, CodecError> {
        ManifestValue::decode(self.get(name)?)
    }

    fn string(&self, name: &str) -> Result<String, CodecError> {
        match ManifestValue::decode_as(self.get(name)?, ValueKind::String)? {
            ManifestValue::String(text) => Ok(text),
            other => Err(CodecError::TypeDiscriminatorMismatch {
                expected: ValueKind::String.label(),
                actual: other.kind().label().to_string(),
            }),
        }
    }

    fn arguments(&self, name: &str) -> Result<Vec<ManifestValue>, CodecError> {
        decode_all(array_field(self.object, name, "instruction")?)
    }

    fn ids(&self, name: &str) -> Result<Vec<NonFungibleLocalId>, CodecError> {
        array_field(self.object, name, "instruction")?
            .iter()
            .map(NonFungibleLocalId::decode)
            .collect()
    }
}

///
/// Manifest text
///
/// `CALL_METHOD Address("…") "lock_fee" Decimal("10");`
///

impl Instruction {
    /// Manifest text with `separator` between the name and each operand.
    #[must_use]
    pub fn to_text(&self, separator: &str) -> String {
        let mut out = String::from(self.name());
        for (_, operand) in self.operands() {
            match operand {
                Operand::Value(value) => {
                    out.push_str(separator);
                    out.push_str(&value.to_string());
                }
                Operand::Arguments(values) => {
                    for value in values {
                        out.push_str(separator);
                        out.push_str(&value.to_string());
                    }
                }
                Operand::Ids(values) => {
                    let ids = values
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ");
                    out.push_str(separator);
                    out.push_str(&format!("Array<NonFungibleLocalId>({ids})"));
                }
            }
        }
        out.push(';');

        out
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(" "))
    }
}
