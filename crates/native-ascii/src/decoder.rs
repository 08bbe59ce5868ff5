//! `\uXXXX` escapes back to native text.
//!
//! The decoder only rewrites recognised tokens. Any other backslash usage
//! (`\t`, `\=`, a line continuation, a doubled `\\`) is copied through so the
//! file keeps its `.properties` meaning. A backslash right before a token is
//! plain text: the encoder never escapes backslashes, so `\\u00e9` is what
//! it produces for `\` followed by U+00E9.

use alloc::string::String;
use core::iter::Peekable;
use core::str::CharIndices;

use crate::{error::DecodeError, escape_buffer::UnicodeEscapeBuffer};

/// Decode every `\uXXXX` token in `text`, accepting hex digits of either case.
///
/// A high surrogate token immediately followed by a low surrogate token
/// decodes to a single supplementary character. Repeated `u`s (`\uu00e9`) are
/// accepted. Backslashes that do not start a token are kept as is.
///
/// # Errors
///
/// Returns a [`DecodeError`] when a token is truncated, contains a non-hex
/// digit, or leaves a surrogate unpaired. Nothing is returned on failure; the
/// caller's text stays the only copy.
///
/// # Examples
///
/// ```rust
/// use native_ascii::{ascii_to_native, DecodeError};
///
/// assert_eq!(ascii_to_native("caf\\u00E9").unwrap(), "caf\u{e9}");
/// assert_eq!(ascii_to_native("\\ud83d\\ude00").unwrap(), "\u{1F600}");
/// assert_eq!(ascii_to_native("C:\\\\temp").unwrap(), "C:\\\\temp");
/// assert_eq!(ascii_to_native("C:\\\\u00e9").unwrap(), "C:\\\u{e9}");
/// assert_eq!(
///     ascii_to_native("\\u00zz"),
///     Err(DecodeError::InvalidHexDigit { found: 'z', offset: 0 })
/// );
/// ```
pub fn ascii_to_native(text: &str) -> Result<String, DecodeError> {
    if !text.contains('\\') {
        return Ok(String::from(text));
    }

    let mut decoder = Decoder {
        out: String::with_capacity(text.len()),
        high: None,
    };
    let mut chars = text.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        if c != '\\' {
            decoder.finish_pair()?;
            decoder.out.push(c);
            continue;
        }

        if chars.peek().is_some_and(|&(_, next)| next == 'u') {
            let unit = read_token(&mut chars, offset)?;
            decoder.push_unit(unit, offset)?;
        } else {
            decoder.finish_pair()?;
            decoder.out.push('\\');
        }
    }

    decoder.finish_pair()?;
    Ok(decoder.out)
}

/// Consume `u+XXXX` after a backslash found at `offset`.
fn read_token(chars: &mut Peekable<CharIndices<'_>>, offset: usize) -> Result<u16, DecodeError> {
    while chars.next_if(|&(_, c)| c == 'u').is_some() {}

    let mut buf = UnicodeEscapeBuffer::new();
    loop {
        let Some((_, c)) = chars.next() else {
            return Err(DecodeError::TruncatedEscape { offset });
        };
        match buf.feed(c) {
            Ok(Some(unit)) => return Ok(unit),
            Ok(None) => {}
            Err(found) => return Err(DecodeError::InvalidHexDigit { found, offset }),
        }
    }
}

struct Decoder {
    out: String,
    /// High surrogate waiting for its low half, with its token offset.
    high: Option<(u16, usize)>,
}

impl Decoder {
    fn push_unit(&mut self, unit: u16, offset: usize) -> Result<(), DecodeError> {
        match (self.high.take(), unit) {
            (Some((high, at)), 0xDC00..=0xDFFF) => self.push_units(&[high, unit], at),
            (Some((high, at)), _) => Err(DecodeError::UnpairedSurrogate { unit: high, offset: at }),
            (None, 0xD800..=0xDBFF) => {
                self.high = Some((unit, offset));
                Ok(())
            }
            (None, _) => self.push_units(&[unit], offset),
        }
    }

    fn push_units(&mut self, units: &[u16], offset: usize) -> Result<(), DecodeError> {
        for decoded in char::decode_utf16(units.iter().copied()) {
            let c = decoded.map_err(|e| DecodeError::UnpairedSurrogate {
                unit: e.unpaired_surrogate(),
                offset,
            })?;
            self.out.push(c);
        }
        Ok(())
    }

    /// Anything other than a low surrogate token ends a pending pair.
    fn finish_pair(&mut self) -> Result<(), DecodeError> {
        match self.high.take() {
            Some((unit, offset)) => Err(DecodeError::UnpairedSurrogate { unit, offset }),
            None => Ok(()),
        }
    }
}
