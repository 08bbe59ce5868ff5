#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use native_ascii::{
    COMMENT_PREFIX, ConvertOptions, LetterCase, LineEnding, ascii_to_native,
    convert_buffer_to_ascii, native_to_ascii,
};

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    lower: bool,
    comment_conversion: bool,
    crlf: bool,
}

fuzz_target!(|input: Input| {
    let letter_case = if input.lower {
        LetterCase::Lower
    } else {
        LetterCase::Upper
    };
    let eol = if input.crlf {
        LineEnding::CrLf
    } else {
        LineEnding::Lf
    };

    // Arbitrary text may hold anything; decoding must never panic.
    let _ = ascii_to_native(&input.text);

    let encoded = native_to_ascii(&input.text, letter_case);
    assert!(encoded.is_ascii());
    if !input.text.contains("\\u") {
        assert_eq!(ascii_to_native(&encoded).as_deref(), Ok(input.text.as_str()));
    }

    let options = ConvertOptions {
        letter_case,
        comment_conversion: input.comment_conversion,
        ..Default::default()
    };
    let buffer = convert_buffer_to_ascii(&input.text, eol, &options);
    let skips_comments = !input.comment_conversion
        && input
            .text
            .split('\n')
            .any(|line| line.starts_with(COMMENT_PREFIX));
    if !skips_comments {
        assert!(buffer.is_ascii());
    }
});
