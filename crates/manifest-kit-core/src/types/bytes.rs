use derive_more::{Deref, From, IntoIterator};
use std::fmt::{self, Display};

///
/// Bytes
///
/// Raw byte payload; travels as lowercase hex.
///

#[derive(Clone, Debug, Default, Deref, Eq, From, Hash, IntoIterator, Ord, PartialEq, PartialOrd)]
pub struct Bytes(Vec<u8>);

impl Bytes {
    #[must_use]
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn from_hex(text: &str) -> Result<Self, hex::FromHexError> {
        hex::decode(text).map(Self)
    }

    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl From<&[u8]> for Bytes {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl Display for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
