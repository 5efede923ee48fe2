use crate::types::Address;
use std::{
    fmt::{self, Display},
    str::FromStr,
};
use thiserror::Error as ThisError;

///
/// LocalIdError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum LocalIdError {
    #[error("local id '{0}' is not wrapped in #…#, <…>, […] or {{…}}")]
    UnknownForm(String),

    #[error("local id '{text}' has an invalid {kind} payload")]
    InvalidPayload { kind: LocalIdKind, text: String },
}

///
/// LocalIdKind
///
/// Label of a local id variant as it appears on the wire.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LocalIdKind {
    Integer,
    String,
    Bytes,
    Uuid,
}

impl LocalIdKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::String => "String",
            Self::Bytes => "Bytes",
            Self::Uuid => "UUID",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Integer" => Some(Self::Integer),
            "String" => Some(Self::String),
            "Bytes" => Some(Self::Bytes),
            "UUID" => Some(Self::Uuid),
            _ => None,
        }
    }
}

impl Display for LocalIdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

///
/// NonFungibleLocalId
///
/// Identifier of one non-fungible unit inside its resource.
/// Display uses the bracketed text form (`#1#`, `<name>`, `[0a0b]`, `{uuid}`).
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum NonFungibleLocalId {
    Integer(u64),
    String(String),
    Bytes(Vec<u8>),
    Uuid(u128),
}

impl NonFungibleLocalId {
    #[must_use]
    pub const fn kind(&self) -> LocalIdKind {
        match self {
            Self::Integer(_) => LocalIdKind::Integer,
            Self::String(_) => LocalIdKind::String,
            Self::Bytes(_) => LocalIdKind::Bytes,
            Self::Uuid(_) => LocalIdKind::Uuid,
        }
    }

    /// Payload text used by the wire form: decimal for numbers, hex for bytes.
    #[must_use]
    pub fn payload(&self) -> String {
        match self {
            Self::Integer(v) => v.to_string(),
            Self::String(v) => v.clone(),
            Self::Bytes(v) => hex::encode(v),
            Self::Uuid(v) => v.to_string(),
        }
    }

    /// Inverse of `payload`.
    pub fn from_payload(kind: LocalIdKind, text: &str) -> Result<Self, LocalIdError> {
        let invalid = || LocalIdError::InvalidPayload {
            kind,
            text: text.to_string(),
        };

        match kind {
            LocalIdKind::Integer => text.parse().map(Self::Integer).map_err(|_| invalid()),
            LocalIdKind::String => Ok(Self::String(text.to_string())),
            LocalIdKind::Bytes => hex::decode(text).map(Self::Bytes).map_err(|_| invalid()),
            LocalIdKind::Uuid => text.parse().map(Self::Uuid).map_err(|_| invalid()),
        }
    }
}

impl Display for NonFungibleLocalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "#{v}#"),
            Self::String(v) => write!(f, "<{v}>"),
            Self::Bytes(v) => write!(f, "[{}]", hex::encode(v)),
            Self::Uuid(v) => {
                let hex = format!("{v:032x}");
                write!(
                    f,
                    "{{{}-{}-{}-{}-{}}}",
                    &hex[0..8],
                    &hex[8..12],
                    &hex[12..16],
                    &hex[16..20],
                    &hex[20..32]
                )
            }
        }
    }
}

impl FromStr for NonFungibleLocalId {
    type Err = LocalIdError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = |kind| LocalIdError::InvalidPayload {
            kind,
            text: text.to_string(),
        };
        let inner = |open: char, close: char| {
            text.strip_prefix(open)
                .and_then(|rest| rest.strip_suffix(close))
        };

        if let Some(body) = inner('#', '#') {
            body.parse()
                .map(Self::Integer)
                .map_err(|_| invalid(LocalIdKind::Integer))
        } else if let Some(body) = inner('<', '>') {
            Ok(Self::String(body.to_string()))
        } else if let Some(body) = inner('[', ']') {
            hex::decode(body)
                .map(Self::Bytes)
                .map_err(|_| invalid(LocalIdKind::Bytes))
        } else if let Some(body) = inner('{', '}') {
            let digits: String = body.chars().filter(|c| *c != '-').collect();
            if digits.len() != 32 {
                return Err(invalid(LocalIdKind::Uuid));
            }
            u128::from_str_radix(&digits, 16)
                .map(Self::Uuid)
                .map_err(|_| invalid(LocalIdKind::Uuid))
        } else {
            Err(LocalIdError::UnknownForm(text.to_string()))
        }
    }
}

///
/// NonFungibleGlobalId
///
/// Resource address plus local id; displayed as `<address>:<local id>`.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct NonFungibleGlobalId {
    pub resource_address: Address,
    pub local_id: NonFungibleLocalId,
}

impl NonFungibleGlobalId {
    #[must_use]
    pub const fn new(resource_address: Address, local_id: NonFungibleLocalId) -> Self {
        Self {
            resource_address,
            local_id,
        }
    }
}

impl Display for NonFungibleGlobalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource_address, self.local_id)
    }
}
