use std::fmt::{self, Display};

///
/// well_known_discriminators
///
/// Declares the catalog of named enum variants; each name maps to its index
/// within its own enum.
///

macro_rules! well_known_discriminators {
    ( $( $variant:ident => $name:literal = $index:literal ),* $(,)? ) => {
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum WellKnownDiscriminator {
            $( $variant ),*
        }

        impl WellKnownDiscriminator {
            pub const ALL: &'static [Self] = &[ $( Self::$variant ),* ];

            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $name ),*
                }
            }

            #[must_use]
            pub const fn index(self) -> u8 {
                match self {
                    $( Self::$variant => $index ),*
                }
            }

            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $name => Some(Self::$variant), )*
                    _ => None,
                }
            }
        }
    };
}

well_known_discriminators! {
    OptionNone => "Option::None" = 0,
    OptionSome => "Option::Some" = 1,

    ResultOk => "Result::Ok" = 0,
    ResultErr => "Result::Err" = 1,

    MetadataString => "Metadata::String" = 0,
    MetadataBool => "Metadata::Bool" = 1,
    MetadataU8 => "Metadata::U8" = 2,
    MetadataU32 => "Metadata::U32" = 3,
    MetadataU64 => "Metadata::U64" = 4,
    MetadataI32 => "Metadata::I32" = 5,
    MetadataI64 => "Metadata::I64" = 6,
    MetadataDecimal => "Metadata::Decimal" = 7,
    MetadataAddress => "Metadata::Address" = 8,
    MetadataPublicKey => "Metadata::PublicKey" = 9,
    MetadataNonFungibleGlobalId => "Metadata::NonFungibleGlobalId" = 10,
    MetadataNonFungibleLocalId => "Metadata::NonFungibleLocalId" = 11,
    MetadataInstant => "Metadata::Instant" = 12,
    MetadataUrl => "Metadata::Url" = 13,
    MetadataOrigin => "Metadata::Origin" = 14,
    MetadataPublicKeyHash => "Metadata::PublicKeyHash" = 15,
    MetadataStringArray => "Metadata::StringArray" = 128,
    MetadataBoolArray => "Metadata::BoolArray" = 129,
    MetadataU8Array => "Metadata::U8Array" = 130,
    MetadataU32Array => "Metadata::U32Array" = 131,
    MetadataU64Array => "Metadata::U64Array" = 132,
    MetadataI32Array => "Metadata::I32Array" = 133,
    MetadataI64Array => "Metadata::I64Array" = 134,
    MetadataDecimalArray => "Metadata::DecimalArray" = 135,
    MetadataAddressArray => "Metadata::AddressArray" = 136,
    MetadataPublicKeyArray => "Metadata::PublicKeyArray" = 137,
    MetadataNonFungibleGlobalIdArray => "Metadata::NonFungibleGlobalIdArray" = 138,
    MetadataNonFungibleLocalIdArray => "Metadata::NonFungibleLocalIdArray" = 139,
    MetadataInstantArray => "Metadata::InstantArray" = 140,
    MetadataUrlArray => "Metadata::UrlArray" = 141,
    MetadataOriginArray => "Metadata::OriginArray" = 142,
    MetadataPublicKeyHashArray => "Metadata::PublicKeyHashArray" = 143,

    AccessRuleAllowAll => "AccessRule::AllowAll" = 0,
    AccessRuleDenyAll => "AccessRule::DenyAll" = 1,
    AccessRuleProtected => "AccessRule::Protected" = 2,

    AccessRuleNodeAuthority => "AccessRuleNode::Authority" = 0,
    AccessRuleNodeProofRule => "AccessRuleNode::ProofRule" = 1,
    AccessRuleNodeAnyOf => "AccessRuleNode::AnyOf" = 2,
    AccessRuleNodeAllOf => "AccessRuleNode::AllOf" = 3,

    ProofRuleRequire => "ProofRule::Require" = 0,
    ProofRuleAmountOf => "ProofRule::AmountOf" = 1,
    ProofRuleCountOf => "ProofRule::CountOf" = 2,
    ProofRuleAllOf => "ProofRule::AllOf" = 3,
    ProofRuleAnyOf => "ProofRule::AnyOf" = 4,

    ModuleIdMain => "ModuleId::Main" = 0,
    ModuleIdMetadata => "ModuleId::Metadata" = 1,
    ModuleIdRoyalty => "ModuleId::Royalty" = 2,
    ModuleIdAccessRules => "ModuleId::AccessRules" = 3,

    ResourceMethodAuthKeyMint => "ResourceMethodAuthKey::Mint" = 0,
    ResourceMethodAuthKeyBurn => "ResourceMethodAuthKey::Burn" = 1,
    ResourceMethodAuthKeyUpdateNonFungibleData => "ResourceMethodAuthKey::UpdateNonFungibleData" = 2,
    ResourceMethodAuthKeyUpdateMetadata => "ResourceMethodAuthKey::UpdateMetadata" = 3,
    ResourceMethodAuthKeyWithdraw => "ResourceMethodAuthKey::Withdraw" = 4,
    ResourceMethodAuthKeyDeposit => "ResourceMethodAuthKey::Deposit" = 5,
    ResourceMethodAuthKeyRecall => "ResourceMethodAuthKey::Recall" = 6,

    NonFungibleIdTypeString => "NonFungibleIdType::String" = 0,
    NonFungibleIdTypeInteger => "NonFungibleIdType::Integer" = 1,
    NonFungibleIdTypeBytes => "NonFungibleIdType::Bytes" = 2,
    NonFungibleIdTypeUuid => "NonFungibleIdType::UUID" = 3,

    AccountDefaultDepositRuleAccept => "AccountDefaultDepositRule::Accept" = 0,
    AccountDefaultDepositRuleReject => "AccountDefaultDepositRule::Reject" = 1,
    AccountDefaultDepositRuleAllowExisting => "AccountDefaultDepositRule::AllowExisting" = 2,

    ResourceDepositRuleNeither => "ResourceDepositRule::Neither" = 0,
    ResourceDepositRuleAllowed => "ResourceDepositRule::Allowed" = 1,
    ResourceDepositRuleDisallowed => "ResourceDepositRule::Disallowed" = 2,

    PublicKeySecp256k1 => "PublicKey::Secp256k1" = 0,
    PublicKeyEd25519 => "PublicKey::Ed25519" = 1,

    PublicKeyHashSecp256k1 => "PublicKeyHash::Secp256k1" = 0,
    PublicKeyHashEd25519 => "PublicKeyHash::Ed25519" = 1,
}

impl WellKnownDiscriminator {
    /// Enum the variant belongs to, e.g. `Option` for `Option::Some`.
    #[must_use]
    pub fn namespace(self) -> &'static str {
        self.name().split("::").next().unwrap_or_default()
    }
}

impl Display for WellKnownDiscriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

///
/// EnumDiscriminator
///
/// Either a raw variant index or a catalog name. Both wire forms decode to
/// this one type; `as_u8` gives the index either way.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum EnumDiscriminator {
    U8(u8),
    WellKnown(WellKnownDiscriminator),
}

impl EnumDiscriminator {
    pub const METADATA_ENTRY: Self = Self::U8(0x01);
    pub const PUBLIC_KEY: Self = Self::U8(0x09);

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::U8(index) => index,
            Self::WellKnown(known) => known.index(),
        }
    }

    /// Same variant index; two catalog names must also agree on the enum.
    #[must_use]
    pub fn is_equivalent(self, other: Self) -> bool {
        match (self, other) {
            (Self::WellKnown(a), Self::WellKnown(b)) => a == b,
            _ => self.as_u8() == other.as_u8(),
        }
    }
}

impl From<u8> for EnumDiscriminator {
    fn from(index: u8) -> Self {
        Self::U8(index)
    }
}

impl From<WellKnownDiscriminator> for EnumDiscriminator {
    fn from(known: WellKnownDiscriminator) -> Self {
        Self::WellKnown(known)
    }
}

impl Display for EnumDiscriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::U8(index) => write!(f, "{index}u8"),
            Self::WellKnown(known) => f.write_str(known.name()),
        }
    }
}
