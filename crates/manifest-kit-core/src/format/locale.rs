use serde::{Deserialize, Serialize};

///
/// Locale
///
/// The two separators that matter for number text. Only the decimal
/// separator is mandatory; locales without grouping print digits unbroken.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Locale {
    pub decimal_separator: String,
    pub grouping_separator: Option<String>,
}

impl Locale {
    #[must_use]
    pub fn new(decimal_separator: impl Into<String>, grouping_separator: Option<&str>) -> Self {
        Self {
            decimal_separator: decimal_separator.into(),
            grouping_separator: grouping_separator.map(str::to_string),
        }
    }

    /// `.` decimals, `,` grouping.
    #[must_use]
    pub fn en_us_posix() -> Self {
        Self::new(".", Some(","))
    }

    /// `.` decimals, no grouping; the canonical decimal text.
    #[must_use]
    pub fn machine() -> Self {
        Self::new(".", None)
    }

    /// Separators for a locale identifier such as `es`, `de_DE` or `fr-CA`.
    ///
    /// Covers the common languages; unknown identifiers yield `None`.
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        let identifier = identifier.replace('-', "_");

        match identifier.as_str() {
            "en_US_POSIX" => return Some(Self::en_us_posix()),
            "de_CH" | "de_LI" => return Some(Self::new(".", Some("\u{2019}"))),
            "pt_PT" => return Some(Self::new(",", Some("\u{a0}"))),
            _ => {}
        }

        let language = identifier.split('_').next().unwrap_or_default();
        let locale = match language {
            "en" | "ja" | "zh" | "ko" | "th" | "he" | "hi" => Self::new(".", Some(",")),
            "es" | "de" | "it" | "nl" | "pt" | "da" | "id" | "tr" | "el" | "ro" | "hr" | "sl" => {
                Self::new(",", Some("."))
            }
            "fr" => Self::new(",", Some("\u{202f}")),
            "nb" | "sv" | "fi" | "ru" | "pl" | "cs" | "sk" | "uk" | "hu" | "bg" => {
                Self::new(",", Some("\u{a0}"))
            }
            _ => return None,
        };

        Some(locale)
    }

    #[must_use]
    pub fn grouping_separator(&self) -> Option<&str> {
        self.grouping_separator
            .as_deref()
            .filter(|separator| !separator.is_empty())
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us_posix()
    }
}
