//! Conversion between native Unicode text and the `\uXXXX` escapes that Java
//! `.properties` files use for every character outside 7-bit ASCII.
//!
//! Three pure functions make up the codec:
//!
//! - [`native_to_ascii`] escapes each UTF-16 code unit above `0x7F`.
//! - [`ascii_to_native`] turns `\uXXXX` tokens back into characters.
//! - [`convert_buffer_to_ascii`] runs the encoder line by line over a whole
//!   buffer, optionally leaving `#` comment lines alone.
//!
//! ```rust
//! use native_ascii::{ascii_to_native, native_to_ascii, LetterCase};
//!
//! let escaped = native_to_ascii("greeting=héllo", LetterCase::Lower);
//! assert_eq!(escaped, "greeting=h\\u00e9llo");
//! assert_eq!(ascii_to_native(&escaped).unwrap(), "greeting=héllo");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod decoder;
mod encoder;
mod error;
mod escape_buffer;
mod line_policy;
mod options;

#[cfg(test)]
mod tests;

pub use decoder::ascii_to_native;
pub use encoder::{EscapeAscii, escape_ascii, native_to_ascii};
pub use error::DecodeError;
pub use line_policy::{COMMENT_PREFIX, LineEnding, convert_buffer_to_ascii};
pub use options::{ConvertOptions, LetterCase};
