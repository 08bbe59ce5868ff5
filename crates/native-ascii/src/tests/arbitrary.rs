use alloc::{boxed::Box, string::String, vec::Vec};

use quickcheck::{Arbitrary, Gen};

use crate::{ConvertOptions, LetterCase, LineEnding};

/// Native text that never holds a literal `\u`.
///
/// A literal backslash followed by `u` reads as a token once decoded, so no
/// decoder can restore it. Every other backslash, including one right before
/// a non-ASCII character, must round-trip; backslashes are injected often to
/// make sure they do.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NativeText(pub String);

impl Arbitrary for NativeText {
    fn arbitrary(g: &mut Gen) -> Self {
        let chars = String::arbitrary(g)
            .chars()
            .flat_map(|c| {
                let slash = usize::arbitrary(g) % 4 == 0;
                slash.then_some('\\').into_iter().chain(Some(c))
            })
            .collect::<Vec<_>>();
        Self(without_literal_escapes(chars))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(|s| Self(without_literal_escapes(s.chars()))))
    }
}

/// Drop each `u` that directly follows a backslash.
pub(crate) fn without_literal_escapes(chars: impl IntoIterator<Item = char>) -> String {
    let mut out = String::new();
    for c in chars {
        if c == 'u' && out.ends_with('\\') {
            continue;
        }
        out.push(c);
    }
    out
}

/// Like [`NativeText`] but restricted to the Basic Multilingual Plane.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BmpText(pub String);

impl Arbitrary for BmpText {
    fn arbitrary(g: &mut Gen) -> Self {
        let text = NativeText::arbitrary(g).0;
        Self(without_literal_escapes(
            text.chars().filter(|&c| u32::from(c) <= 0xFFFF),
        ))
    }
}

/// Printable ASCII including backslashes and line breaks.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AsciiText(pub String);

impl Arbitrary for AsciiText {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % g.size();
        Self((0..len).map(|_| char::from(u8::arbitrary(g) & 0x7F)).collect())
    }
}

impl Arbitrary for LetterCase {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            LetterCase::Lower
        } else {
            LetterCase::Upper
        }
    }
}

impl Arbitrary for LineEnding {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }
}

impl Arbitrary for ConvertOptions {
    fn arbitrary(g: &mut Gen) -> Self {
        ConvertOptions {
            letter_case: LetterCase::arbitrary(g),
            comment_conversion: bool::arbitrary(g),
            auto_conversion_on_save: bool::arbitrary(g),
            auto_conversion_on_activate: bool::arbitrary(g),
        }
    }
}
