//! Transaction manifests: ordered instructions plus attached blobs, and the
//! builder that composes them.

mod builder;
mod instruction;


pub use builder::{ManifestBuilder, Step};
pub use instruction::Instruction;

use crate::{
    types::{Address, Blob, Decimal},
    value::{
        CodecError, WireObject, WireValue,
        wire::{array_field, as_object},
    },
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display, Write};
use thiserror::Error as ThisError;

/// Fee locked by [`TransactionManifest::with_lock_fee_call_method_added`]
/// when the caller does not pass one.
pub const DEFAULT_LOCK_FEE: u64 = 10;

///
/// ManifestError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ManifestError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("bucket '{0}' is not live in this manifest")]
    UnknownBucket(String),

    #[error("proof '{0}' is not live in this manifest")]
    UnknownProof(String),

    #[error("name '{0}' is already taken in this manifest")]
    DuplicateName(String),

    #[error("cannot insert at index {index} into {len} instructions")]
    InstructionIndexOutOfBounds { index: usize, len: usize },

    #[error("unknown instruction '{0}'")]
    UnknownInstruction(String),
}

///
/// BlobOutputFormat
///
/// How much of each attached blob a rendered manifest shows.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum BlobOutputFormat {
    Exclude,
    #[default]
    ByteCountOnly,
    Full,
    FullWithHash,
}

///
/// TransactionManifest
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TransactionManifest {
    instructions: Vec<Instruction>,
    blobs: Vec<Vec<u8>>,
}

impl TransactionManifest {
    #[must_use]
    pub const fn new(instructions: Vec<Instruction>, blobs: Vec<Vec<u8>>) -> Self {
        Self {
            instructions,
            blobs,
        }
    }

    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    #[must_use]
    pub fn blobs(&self) -> &[Vec<u8>] {
        &self.blobs
    }

    /// Content-hash references for every attached blob, in attachment order.
    #[must_use]
    pub fn blob_refs(&self) -> Vec<Blob> {
        self.blobs
            .iter()
            .map(|blob| Blob::from_content(blob))
            .collect()
    }

    /// Copy of this manifest with `instruction` inserted before `index`.
    pub fn with_instruction_added(
        &self,
        instruction: Instruction,
        index: usize,
    ) -> Result<Self, ManifestError> {
        let len = self.instructions.len();
        if index > len {
            return Err(ManifestError::InstructionIndexOutOfBounds { index, len });
        }

        let mut instructions = self.instructions.clone();
        instructions.insert(index, instruction);

        Ok(Self::new(instructions, self.blobs.clone()))
    }

    /// Copy of this manifest that locks `fee` (default 10) from `account`
    /// before anything else runs.
    #[must_use]
    pub fn with_lock_fee_call_method_added(&self, account: Address, fee: Option<Decimal>) -> Self {
        let fee = fee.unwrap_or_else(|| Decimal::from(DEFAULT_LOCK_FEE));
        let mut instructions = Vec::with_capacity(self.instructions.len() + 1);
        instructions.push(Instruction::lock_fee(account, fee));
        instructions.extend(self.instructions.iter().cloned());

        Self::new(instructions, self.blobs.clone())
    }

    ///
    /// WIRE
    ///

    #[must_use]
    pub fn encode(&self) -> WireValue {
        let mut object = WireObject::new();
        object.insert(
            "instructions".to_string(),
            WireValue::Array(self.instructions.iter().map(Instruction::encode).collect()),
        );
        object.insert(
            "blobs".to_string(),
            WireValue::Array(
                self.blobs
                    .iter()
                    .map(|blob| WireValue::String(hex::encode(blob)))
                    .collect(),
            ),
        );

        WireValue::Object(object)
    }

    pub fn decode(wire: &WireValue) -> Result<Self, ManifestError> {
        let object = as_object(wire, "manifest")?;

        let instructions = array_field(object, "instructions", "manifest")?
            .iter()
            .map(Instruction::decode)
            .collect::<Result<Vec<_>, _>>()?;

        let blobs = match object.get("blobs") {
            Some(_) => array_field(object, "blobs", "manifest")?
                .iter()
                .map(|blob| {
                    let text = blob.as_str().ok_or_else(|| {
                        CodecError::malformed("manifest", "blobs must be hex strings")
                    })?;

                    hex::decode(text).map_err(|err| CodecError::InvalidHex(err.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        tracing::trace!(
            instructions = instructions.len(),
            blobs = blobs.len(),
            "manifest decoded"
        );

        Ok(Self::new(instructions, blobs))
    }

    ///
    /// TEXT
    ///

    /// Manifest text: a preamble, one instruction per paragraph with each
    /// operand on its own indented line, then the blob section.
    #[must_use]
    pub fn render(&self, blob_format: BlobOutputFormat) -> String {
        let instructions = self
            .instructions
            .iter()
            .map(|instruction| instruction.to_text("\n\t"))
            .collect::<Vec<_>>()
            .join("\n\n");

        [
            "~~~ MANIFEST ~~~\n",
            instructions.as_str(),
            self.render_blobs(blob_format).as_str(),
        ]
        .concat()
    }

    fn render_blobs(&self, format: BlobOutputFormat) -> String {
        if self.blobs.is_empty() || format == BlobOutputFormat::Exclude {
            return String::new();
        }

        let entries = self
            .blobs
            .iter()
            .enumerate()
            .map(|(i, blob)| {
                let mut entry = String::from("BLOB\n");
                // writing to a String cannot fail
                let _ = match format {
                    BlobOutputFormat::ByteCountOnly => {
                        write!(entry, "[{i}]: #{} bytes", blob.len())
                    }
                    BlobOutputFormat::Full => write!(entry, "[{i}]:\n{}\n", hex::encode(blob)),
                    BlobOutputFormat::FullWithHash => write!(
                        entry,
                        "[{i}] hash = {}:\n{}\n",
                        Blob::from_content(blob),
                        hex::encode(blob)
                    ),
                    BlobOutputFormat::Exclude => Ok(()),
                };

                entry
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!("BLOBS\n{entries}")
    }
}

impl Display for TransactionManifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(BlobOutputFormat::default()))
    }
}

impl Serialize for TransactionManifest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.encode().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TransactionManifest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = WireValue::deserialize(deserializer)?;

        Self::decode(&wire).map_err(serde::de::Error::custom)
    }
}
