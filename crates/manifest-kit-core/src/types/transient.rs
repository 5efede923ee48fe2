use std::fmt::{self, Display};

///
/// TransientIdentifier
///
/// Name of a bucket or proof that only lives for the duration of a manifest.
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum TransientIdentifier {
    String(String),
    U32(u32),
}

impl From<&str> for TransientIdentifier {
    fn from(name: &str) -> Self {
        Self::String(name.to_string())
    }
}

impl From<String> for TransientIdentifier {
    fn from(name: String) -> Self {
        Self::String(name)
    }
}

impl From<u32> for TransientIdentifier {
    fn from(id: u32) -> Self {
        Self::U32(id)
    }
}

impl Display for TransientIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(name) => write!(f, "\"{name}\""),
            Self::U32(id) => write!(f, "{id}u32"),
        }
    }
}

///
/// Bucket
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Bucket(pub TransientIdentifier);

impl Bucket {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self(TransientIdentifier::String(name.into()))
    }

    #[must_use]
    pub const fn identifier(&self) -> &TransientIdentifier {
        &self.0
    }
}

///
/// Proof
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Proof(pub TransientIdentifier);

impl Proof {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self(TransientIdentifier::String(name.into()))
    }

    #[must_use]
    pub const fn identifier(&self) -> &TransientIdentifier {
        &self.0
    }
}
