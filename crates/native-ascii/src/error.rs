use thiserror::Error;

/// Failure to turn `\uXXXX` escapes back into native text.
///
/// Every variant carries the byte offset of the backslash that starts the
/// offending token.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A `\u` token contains a character that is not a hex digit.
    #[error("invalid character '{found}' in unicode escape at byte {offset}")]
    InvalidHexDigit {
        /// The rejected character.
        found: char,
        /// Byte offset of the token's backslash.
        offset: usize,
    },
    /// The input ends before four hex digits follow `\u`.
    #[error("truncated unicode escape at byte {offset}")]
    TruncatedEscape {
        /// Byte offset of the token's backslash.
        offset: usize,
    },
    /// A surrogate code unit without its partner.
    #[error("unpaired surrogate \\u{unit:04X} at byte {offset}")]
    UnpairedSurrogate {
        /// The lone surrogate.
        unit: u16,
        /// Byte offset of the token's backslash.
        offset: usize,
    },
}

impl DecodeError {
    /// Byte offset of the backslash that starts the offending token.
    #[must_use]
    pub fn offset(&self) -> usize {
        match *self {
            DecodeError::InvalidHexDigit { offset, .. }
            | DecodeError::TruncatedEscape { offset }
            | DecodeError::UnpairedSurrogate { offset, .. } => offset,
        }
    }
}
