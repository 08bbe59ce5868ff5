//! Host-side integration for the `native-ascii` codec.
//!
//! An editor exposes its active buffer through [`Document`] and its state
//! through [`Host`]; [`Extension`] wires the two conversion commands and the
//! save / activate hooks on top. [`MemoryHost`] is a self-contained host used
//! by the `native-ascii` binary and by tests.

mod commands;
mod config;
mod document;
mod error;
mod extension;
mod host;

pub use commands::{Command, DISPLAY_NAME, convert_ascii_to_native, convert_native_to_ascii, handle};
pub use config::{CONFIG_SECTION, ConfigFile, load_options, parse_options};
pub use document::{Document, FILE_EXTENSION, MemoryDocument, Selection};
pub use error::{ConfigError, ConvertError};
pub use extension::Extension;
pub use host::{Host, MemoryHost};

pub use native_ascii::{ConvertOptions, LetterCase, LineEnding};
