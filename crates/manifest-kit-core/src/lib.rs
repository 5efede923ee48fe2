//! Core of manifest-kit: bounded fixed-point decimals, their human formatting,
//! the manifest value tree with its JSON wire codec, and the manifest builder.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod error;
pub mod format;
pub mod manifest;
pub mod types;
pub mod value;

pub use error::Error;

///
/// Prelude
///
/// Domain vocabulary only; errors and codec plumbing stay in their modules.
///

pub mod prelude {
    pub use crate::{
        format::{FormatOptions, Locale},
        manifest::{Instruction, ManifestBuilder, TransactionManifest},
        types::{
            Address, Blob, Bucket, Bytes, Decimal, Expression, NonFungibleGlobalId,
            NonFungibleLocalId, PreciseDecimal, Proof,
        },
        value::{EnumDiscriminator, ManifestValue, ValueKind, WellKnownDiscriminator},
    };
}
