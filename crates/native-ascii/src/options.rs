#![allow(clippy::struct_excessive_bools)]

use alloc::string::String;

/// Casing of the hexadecimal digits in produced `\uXXXX` tokens.
///
/// Hosts configure this as a free-form setting: the exact string
/// `"Lower case"` selects [`LetterCase::Lower`], anything else selects
/// [`LetterCase::Upper`].
///
/// # Default
///
/// [`LetterCase::Upper`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "&'static str")
)]
pub enum LetterCase {
    /// `\u00E9`
    #[default]
    Upper,
    /// `\u00e9`
    Lower,
}

impl LetterCase {
    /// Setting value that selects lower-case digits.
    pub const LOWER_SETTING: &'static str = "Lower case";
    /// Setting value written back for upper-case digits.
    pub const UPPER_SETTING: &'static str = "Upper case";

    /// Interpret a host setting value.
    #[must_use]
    pub fn from_setting(value: &str) -> Self {
        if value == Self::LOWER_SETTING {
            LetterCase::Lower
        } else {
            LetterCase::Upper
        }
    }

    /// The setting value that round-trips through [`LetterCase::from_setting`].
    #[must_use]
    pub const fn as_setting(self) -> &'static str {
        match self {
            LetterCase::Upper => Self::UPPER_SETTING,
            LetterCase::Lower => Self::LOWER_SETTING,
        }
    }

    pub(crate) const fn hex_digits(self) -> &'static [u8; 16] {
        match self {
            LetterCase::Upper => b"0123456789ABCDEF",
            LetterCase::Lower => b"0123456789abcdef",
        }
    }
}

impl From<String> for LetterCase {
    fn from(value: String) -> Self {
        Self::from_setting(&value)
    }
}

impl From<LetterCase> for &'static str {
    fn from(value: LetterCase) -> Self {
        value.as_setting()
    }
}

/// Flags that steer a conversion and the host hooks around it.
///
/// With the `serde` feature the fields use the host's configuration names
/// (`letter-case`, `comment-conversion`, `auto-conversion-on-save`,
/// `auto-conversion-on-activate`) and every missing field takes its default.
///
/// # Examples
///
/// ```rust
/// use native_ascii::{ConvertOptions, LetterCase};
///
/// let options = ConvertOptions {
///     letter_case: LetterCase::Lower,
///     comment_conversion: true,
///     ..Default::default()
/// };
/// assert!(!options.auto_conversion_on_save);
/// ```
///
/// # Default
///
/// Upper-case digits and every flag `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "kebab-case")
)]
pub struct ConvertOptions {
    /// Casing of the hex digits the encoder emits.
    pub letter_case: LetterCase,

    /// Whether lines starting with `#` are escaped as well.
    ///
    /// When `false`, comment lines are copied through untouched on the encode
    /// path. Decoding never looks at comments.
    ///
    /// # Default
    ///
    /// `false`
    pub comment_conversion: bool,

    /// Whether the host encodes `.properties` documents right before saving.
    ///
    /// # Default
    ///
    /// `false`
    pub auto_conversion_on_save: bool,

    /// Whether the host decodes a `.properties` document when it becomes the
    /// active one.
    ///
    /// # Default
    ///
    /// `false`
    pub auto_conversion_on_activate: bool,
}
