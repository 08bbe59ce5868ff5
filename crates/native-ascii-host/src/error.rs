use std::{io, path::PathBuf};

use native_ascii::DecodeError;
use thiserror::Error;

/// Why a conversion command did not touch the buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// No editor is focused.
    #[error("Text editor is not active.")]
    NoActiveBuffer,
    /// The buffer holds a malformed `\uXXXX` token.
    #[error("{0}")]
    Decode(#[from] DecodeError),
    /// A command id nobody registered.
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
}

/// Failure to load conversion settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// The configuration is not valid TOML or has mistyped settings.
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
}
