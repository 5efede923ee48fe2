use crate::{manifest::ManifestError, types::DecimalError, value::CodecError};
use thiserror::Error as ThisError;

///
/// Error
///
/// Crate-level union for callers that do not care which layer failed.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Decimal(#[from] DecimalError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Stable short label for the failing layer.
    #[must_use]
    pub const fn origin(&self) -> &'static str {
        match self {
            Self::Decimal(_) => "decimal",
            Self::Codec(_) => "codec",
            Self::Manifest(_) => "manifest",
            Self::Json(_) => "json",
        }
    }
}
