//! Native text to `\uXXXX` escapes.
//!
//! The encoder walks the input as UTF-16 code units, which is how the
//! `.properties` format counts characters: anything outside the Basic
//! Multilingual Plane becomes a surrogate pair and therefore two tokens.

use alloc::string::String;
use core::{
    fmt::{self, Write},
    iter::FusedIterator,
    str::EncodeUtf16,
};

use crate::LetterCase;

const TOKEN_LEN: usize = 6;

/// Escape every code unit of `text` above `0x7F` as `\uXXXX`.
///
/// ASCII passes through unchanged, so the output is always pure ASCII.
///
/// # Examples
///
/// ```rust
/// use native_ascii::{native_to_ascii, LetterCase};
///
/// assert_eq!(native_to_ascii("caf\u{e9}", LetterCase::Upper), "caf\\u00E9");
/// assert_eq!(
///     native_to_ascii("\u{1F600}", LetterCase::Lower),
///     "\\ud83d\\ude00"
/// );
/// ```
#[must_use]
pub fn native_to_ascii(text: &str, case: LetterCase) -> String {
    if text.is_ascii() {
        return String::from(text);
    }
    escape_ascii(text, case).collect()
}

/// Lazily escape `text`, yielding the characters of the escaped form.
///
/// The returned adaptor also implements [`fmt::Display`], so it can be
/// written straight into a formatter or any [`fmt::Write`] sink.
pub fn escape_ascii(text: &str, case: LetterCase) -> EscapeAscii<'_> {
    EscapeAscii {
        units: text.encode_utf16(),
        digits: case.hex_digits(),
        pending: [0; TOKEN_LEN],
        pos: TOKEN_LEN,
    }
}

/// Iterator returned by [`escape_ascii`].
#[derive(Clone, Debug)]
pub struct EscapeAscii<'a> {
    units: EncodeUtf16<'a>,
    digits: &'static [u8; 16],
    pending: [u8; TOKEN_LEN],
    pos: usize,
}

impl EscapeAscii<'_> {
    fn token(&self, unit: u16) -> [u8; TOKEN_LEN] {
        let nibble = |shift: u16| self.digits[usize::from((unit >> shift) & 0xF)];
        [b'\\', b'u', nibble(12), nibble(8), nibble(4), nibble(0)]
    }
}

impl Iterator for EscapeAscii<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if self.pos < TOKEN_LEN {
            let b = self.pending[self.pos];
            self.pos += 1;
            return Some(char::from(b));
        }

        let unit = self.units.next()?;
        match u8::try_from(unit) {
            Ok(b) if b.is_ascii() => return Some(char::from(b)),
            _ => {}
        }

        self.pending = self.token(unit);
        self.pos = 1;
        Some('\\')
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let queued = TOKEN_LEN - self.pos;
        let (lo, hi) = self.units.size_hint();
        (
            lo + queued,
            hi.and_then(|hi| hi.checked_mul(TOKEN_LEN))
                .and_then(|hi| hi.checked_add(queued)),
        )
    }
}

impl FusedIterator for EscapeAscii<'_> {}

impl fmt::Display for EscapeAscii<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.clone().try_for_each(|c| f.write_char(c))
    }
}
