//! Accumulator for the four hex digits of a `\uXXXX` token.
//!
//! Unlike a JSON string escape, a `.properties` token names a UTF-16 code
//! unit rather than a character: surrogate halves are legal here and are
//! paired up by the decoder afterwards.

#[derive(Debug)]
pub(crate) struct UnicodeEscapeBuffer {
    acc: u16,
    len: u8,
}

impl UnicodeEscapeBuffer {
    pub fn new() -> Self {
        Self { acc: 0, len: 0 }
    }

    #[inline]
    fn hex_val(c: char) -> Option<u16> {
        c.to_digit(16).and_then(|d| u16::try_from(d).ok())
    }

    /// Feeds one hex digit (`0-9`, `A-F`, `a-f`).
    ///
    /// - `Ok(None)` while fewer than four digits have been seen.
    /// - `Ok(Some(unit))` on the fourth digit; the buffer resets itself.
    /// - `Err(c)` when `c` is not a hex digit.
    pub fn feed(&mut self, c: char) -> Result<Option<u16>, char> {
        let d = Self::hex_val(c).ok_or(c)?;

        self.acc = (self.acc << 4) | d;
        self.len += 1;

        if self.len < 4 {
            return Ok(None);
        }

        let unit = self.acc;
        self.acc = 0;
        self.len = 0;
        Ok(Some(unit))
    }
}
