//! Buffer-level encoding: split into lines, escape, rejoin.

use alloc::string::String;
use core::fmt;

use crate::{ConvertOptions, encoder::escape_ascii};

/// First character of a `.properties` comment line.
///
/// `!` is also a comment marker for `java.util.Properties`, but converters
/// have always only skipped `#` lines and files rely on `!` lines being
/// escaped.
pub const COMMENT_PREFIX: char = '#';

/// Line separator used when rejoining a converted buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// The separator text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// Guess the convention of `text` from its first line break.
    ///
    /// Text without any line break is treated as [`LineEnding::Lf`].
    #[must_use]
    pub fn detect(text: &str) -> Self {
        match text.find('\n') {
            Some(i) if text[..i].ends_with('\r') => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Escape a whole buffer line by line and rejoin it with `eol`.
///
/// Lines are split on `\n` and `\r\n`. Lines starting with
/// [`COMMENT_PREFIX`] are left untouched unless
/// [`ConvertOptions::comment_conversion`] is set. A trailing line break is
/// kept, since splitting yields a final empty line.
///
/// # Examples
///
/// ```rust
/// use native_ascii::{convert_buffer_to_ascii, ConvertOptions, LetterCase, LineEnding};
///
/// let options = ConvertOptions {
///     letter_case: LetterCase::Lower,
///     ..Default::default()
/// };
/// let out = convert_buffer_to_ascii("#caf\u{e9}\r\nk=caf\u{e9}\r\n", LineEnding::CrLf, &options);
/// assert_eq!(out, "#caf\u{e9}\r\nk=caf\\u00e9\r\n");
/// ```
#[must_use]
pub fn convert_buffer_to_ascii(buffer: &str, eol: LineEnding, options: &ConvertOptions) -> String {
    let mut out = String::with_capacity(buffer.len());

    for (i, line) in lines(buffer).enumerate() {
        if i > 0 {
            out.push_str(eol.as_str());
        }
        if !options.comment_conversion && line.starts_with(COMMENT_PREFIX) {
            out.push_str(line);
        } else {
            out.extend(escape_ascii(line, options.letter_case));
        }
    }

    out
}

fn lines(buffer: &str) -> impl Iterator<Item = &str> {
    buffer
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}
