use std::fmt::{self, Display};

///
/// Expression
///
/// Deferred references resolved by the engine when the manifest runs.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Expression {
    EntireWorktop,
    EntireAuthZone,
}

impl Expression {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EntireWorktop => "ENTIRE_WORKTOP",
            Self::EntireAuthZone => "ENTIRE_AUTH_ZONE",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ENTIRE_WORKTOP" => Some(Self::EntireWorktop),
            "ENTIRE_AUTH_ZONE" => Some(Self::EntireAuthZone),
            _ => None,
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
