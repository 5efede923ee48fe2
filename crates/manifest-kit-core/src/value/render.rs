use crate::value::{ManifestValue, ValueKind};
use std::fmt::{self, Display, Write};

///
/// Manifest text notation
///
/// `Decimal("1.5")`, `Array<U8>(1u8, 2u8)`, `Map<U8, String>(1u8 => "a")`,
/// `Enum<Option::Some>(…)`, `Bucket("xrd")`.
///

impl Display for ManifestValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::I8(v) => write!(f, "{v}i8"),
            Self::I16(v) => write!(f, "{v}i16"),
            Self::I32(v) => write!(f, "{v}i32"),
            Self::I64(v) => write!(f, "{v}i64"),
            Self::I128(v) => write!(f, "{v}i128"),
            Self::U8(v) => write!(f, "{v}u8"),
            Self::U16(v) => write!(f, "{v}u16"),
            Self::U32(v) => write!(f, "{v}u32"),
            Self::U64(v) => write!(f, "{v}u64"),
            Self::U128(v) => write!(f, "{v}u128"),
            Self::String(v) => write_quoted(f, v),
            Self::Enum(v) => {
                write!(f, "Enum<{}>", v.discriminator)?;
                write_list(f, &v.fields)
            }
            Self::Some(inner) => write!(f, "Some({inner})"),
            Self::None => f.write_str("None"),
            Self::Ok(inner) => write!(f, "Ok({inner})"),
            Self::Err(inner) => write!(f, "Err({inner})"),
            Self::Array(v) => {
                write!(f, "Array<{}>", type_name(v.element_kind()))?;
                write_list(f, v.elements())
            }
            Self::Tuple(v) => {
                f.write_str("Tuple")?;
                write_list(f, v.elements())
            }
            Self::Map(v) => {
                write!(
                    f,
                    "Map<{}, {}>(",
                    type_name(v.key_kind()),
                    type_name(v.value_kind())
                )?;
                for (i, (key, value)) in v.entries().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key} => {value}")?;
                }
                f.write_char(')')
            }
            Self::Decimal(v) => write!(f, "Decimal(\"{v}\")"),
            Self::PreciseDecimal(v) => write!(f, "PreciseDecimal(\"{v}\")"),
            Self::Address(v) => write!(f, "Address(\"{v}\")"),
            Self::Bucket(v) => write!(f, "Bucket({})", v.identifier()),
            Self::Proof(v) => write!(f, "Proof({})", v.identifier()),
            Self::NonFungibleLocalId(v) => write!(f, "NonFungibleLocalId(\"{v}\")"),
            Self::NonFungibleGlobalId(v) => write!(f, "NonFungibleGlobalId(\"{v}\")"),
            Self::Blob(v) => write!(f, "Blob(\"{v}\")"),
            Self::Bytes(v) => write!(f, "Bytes(\"{v}\")"),
            Self::Expression(v) => write!(f, "Expression(\"{v}\")"),
        }
    }
}

// Type names inside `<…>`; the two optional wrappers read as `Option`/`Result`.
const fn type_name(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::Some | ValueKind::None => "Option",
        ValueKind::Ok | ValueKind::Err => "Result",
        other => other.label(),
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, values: &[ManifestValue]) -> fmt::Result {
    f.write_char('(')?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{value}")?;
    }
    f.write_char(')')
}

fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in text.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}
