use sha2::{Digest, Sha256};
use std::fmt::{self, Display};
use thiserror::Error as ThisError;

///
/// BlobHashError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum BlobHashError {
    #[error("blob hash is not hex: {0}")]
    InvalidHex(String),

    #[error("blob hash must be {expected} bytes, found {found}")]
    InvalidLength { expected: usize, found: usize },
}

///
/// Blob
///
/// Reference to a blob attached to a manifest, by content hash.
/// Display prints the hash as lowercase hex.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Blob([u8; Self::HASH_LEN]);

impl Blob {
    pub const HASH_LEN: usize = 32;

    #[must_use]
    pub const fn from_hash(hash: [u8; Self::HASH_LEN]) -> Self {
        Self(hash)
    }

    /// Reference for `content`: SHA-256 applied twice.
    #[must_use]
    pub fn from_content(content: &[u8]) -> Self {
        let once = Sha256::digest(content);
        let twice = Sha256::digest(once);

        Self(twice.into())
    }

    pub fn from_hex(text: &str) -> Result<Self, BlobHashError> {
        let bytes = hex::decode(text).map_err(|err| BlobHashError::InvalidHex(err.to_string()))?;
        let hash: [u8; Self::HASH_LEN] =
            bytes
                .as_slice()
                .try_into()
                .map_err(|_| BlobHashError::InvalidLength {
                    expected: Self::HASH_LEN,
                    found: bytes.len(),
                })?;

        Ok(Self(hash))
    }

    #[must_use]
    pub const fn hash(&self) -> &[u8; Self::HASH_LEN] {
        &self.0
    }

    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Display for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
