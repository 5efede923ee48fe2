use bech32::{Bech32m, primitives::decode::CheckedHrpstring};
use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// AddressError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum AddressError {
    #[error("address is empty")]
    Empty,

    #[error("address '{0}' has no entity prefix")]
    MissingPrefix(String),

    #[error("address '{address}' contains invalid character '{character}'")]
    InvalidCharacter { address: String, character: char },

    #[error("address '{address}' is not valid bech32m: {reason}")]
    InvalidChecksum { address: String, reason: String },
}

///
/// Address
///
/// Bech32m entity address text such as `component_rdx1…` or
/// `resource_tdx_2_1…`. The human-readable part is `<entity>_<network>`
/// and the checksum must verify as Bech32m.
///

#[derive(Clone, Debug, Deref, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Address(String);

impl Address {
    pub fn parse(text: impl Into<String>) -> Result<Self, AddressError> {
        let text = text.into();
        if text.is_empty() {
            return Err(AddressError::Empty);
        }
        if let Some(character) = text
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_'))
        {
            return Err(AddressError::InvalidCharacter {
                address: text,
                character,
            });
        }
        if !text.contains('_') || text.starts_with('_') {
            return Err(AddressError::MissingPrefix(text));
        }

        let checked = CheckedHrpstring::new::<Bech32m>(&text)
            .map_err(|err| AddressError::InvalidChecksum {
                address: text.clone(),
                reason: err.to_string(),
            })?;
        let hrp = checked.hrp();
        match hrp.as_str().split_once('_') {
            Some((entity, network)) if !entity.is_empty() && !network.is_empty() => {}
            _ => return Err(AddressError::MissingPrefix(text)),
        }

        Ok(Self(text))
    }

    /// Entity kind prefix, e.g. `account` for `account_rdx1…`.
    #[must_use]
    pub fn entity_prefix(&self) -> &str {
        self.0.split('_').next().unwrap_or_default()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;

        Self::parse(text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_prefix_is_the_first_segment() {
        let address = Address::parse(
            "resource_tdx_2_1thqcgjw37fjgycpvqr52nx4jcsdeuq75mf2nywme07kzsuds9a4psp",
        )
        .expect("valid address");
        assert_eq!(address.entity_prefix(), "resource");
    }

    #[test]
    fn checksum_is_verified() {
        const COMPONENT: &str = "component_rdx1qtkryz5scup945usk39qjc2yjh6l5zsyuh8t7v5pk0tsrdcazt";
        assert!(Address::parse(COMPONENT).is_ok());

        let flipped = format!("{}q", &COMPONENT[..COMPONENT.len() - 1]);
        assert!(matches!(
            Address::parse(flipped),
            Err(AddressError::InvalidChecksum { .. })
        ));
        assert!(matches!(
            Address::parse("component_rdx1qqqq"),
            Err(AddressError::InvalidChecksum { .. })
        ));
    }

    #[test]
    fn network_part_is_required() {
        assert!(matches!(
            Address::parse("component_1qqqqqqqqqq3c0xnk"),
            Err(AddressError::MissingPrefix(_))
        ));
    }

    #[test]
    fn malformed_addresses_are_rejected() {
        assert_eq!(Address::parse(""), Err(AddressError::Empty));
        assert!(matches!(
            Address::parse("component"),
            Err(AddressError::MissingPrefix(_))
        ));
        assert!(matches!(
            Address::parse("account_RDX1"),
            Err(AddressError::InvalidCharacter { character: 'R', .. })
        ));
    }
}
