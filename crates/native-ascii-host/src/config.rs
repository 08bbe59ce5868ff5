use std::{fs, path::Path};

use native_ascii::ConvertOptions;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ConfigError;

/// Table holding the converter's settings in a configuration file.
pub const CONFIG_SECTION: &str = "native-ascii-converter";

/// Layout of a configuration file.
///
/// ```toml
/// [native-ascii-converter]
/// letter-case = "Lower case"
/// comment-conversion = true
/// auto-conversion-on-save = false
/// auto-conversion-on-activate = false
/// ```
///
/// A missing table or key keeps its default; other tables are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// The `[native-ascii-converter]` table.
    #[serde(rename = "native-ascii-converter", default)]
    pub converter: ConvertOptions,
}

/// Parse conversion settings from TOML text.
///
/// # Errors
///
/// [`ConfigError::Toml`] when the text is not TOML or a setting has the wrong
/// type.
pub fn parse_options(text: &str) -> Result<ConvertOptions, ConfigError> {
    let file: ConfigFile = toml::from_str(text)?;
    Ok(file.converter)
}

/// Read conversion settings from a TOML file.
///
/// # Errors
///
/// [`ConfigError::Io`] when the file cannot be read, [`ConfigError::Toml`]
/// when it does not parse.
pub fn load_options(path: &Path) -> Result<ConvertOptions, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let options = parse_options(&text)?;
    debug!(path = %path.display(), ?options, "loaded configuration");
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::{CONFIG_SECTION, ConfigFile, parse_options};
    use crate::{ConfigError, ConvertOptions, LetterCase};

    #[test]
    fn full_section() {
        let options = parse_options(
            r#"
            [native-ascii-converter]
            letter-case = "Lower case"
            comment-conversion = true
            auto-conversion-on-save = true
            auto-conversion-on-activate = true
            "#,
        )
        .unwrap();
        assert_eq!(
            options,
            ConvertOptions {
                letter_case: LetterCase::Lower,
                comment_conversion: true,
                auto_conversion_on_save: true,
                auto_conversion_on_activate: true,
            }
        );
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(parse_options("").unwrap(), ConvertOptions::default());
        assert_eq!(
            parse_options("[editor]\ntab-size = 4\n").unwrap(),
            ConvertOptions::default()
        );
    }

    #[test]
    fn wrong_type_is_rejected() {
        let err = parse_options("[native-ascii-converter]\ncomment-conversion = \"yes\"\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
        assert!(err.to_string().starts_with("invalid configuration"));
    }

    #[test]
    fn writes_back_under_section() {
        let file = ConfigFile {
            converter: ConvertOptions {
                letter_case: LetterCase::Lower,
                ..Default::default()
            },
        };
        let text = toml::to_string(&file).unwrap();
        assert!(text.starts_with(&format!("[{CONFIG_SECTION}]")));
        assert!(text.contains("letter-case = \"Lower case\""));
        assert_eq!(parse_options(&text).unwrap(), file.converter);
    }
}
