use core::fmt;

use native_ascii::{ascii_to_native, convert_buffer_to_ascii};
use tracing::{debug, error, info};

use crate::{ConvertError, document::Document, host::Host};

/// Prefix of every message shown to the user.
pub const DISPLAY_NAME: &str = "Native-ASCII Converter";

/// The two conversions an editor can invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Escape the active document (`extension.convertNativeToAscii`).
    NativeToAscii,
    /// Unescape the active document (`extension.convertAsciiToNative`).
    AsciiToNative,
}

impl Command {
    /// Every command, in registration order.
    pub const ALL: [Command; 2] = [Command::NativeToAscii, Command::AsciiToNative];

    /// The id the command is registered under.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Command::NativeToAscii => "extension.convertNativeToAscii",
            Command::AsciiToNative => "extension.convertAsciiToNative",
        }
    }

    /// Look a command up by its registered id.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.id() == id)
    }

    /// Run the command against the host's active document.
    ///
    /// # Errors
    ///
    /// See [`convert_native_to_ascii`] and [`convert_ascii_to_native`].
    pub fn run<H: Host + ?Sized>(self, host: &mut H) -> Result<(), ConvertError> {
        match self {
            Command::NativeToAscii => convert_native_to_ascii(host),
            Command::AsciiToNative => convert_ascii_to_native(host),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Escape the active document line by line, honouring the host's letter case
/// and comment settings and the document's line ending.
///
/// # Errors
///
/// [`ConvertError::NoActiveBuffer`] when no document is focused.
pub fn convert_native_to_ascii<H: Host + ?Sized>(host: &mut H) -> Result<(), ConvertError> {
    let options = host.options();
    let document = host.active_document().ok_or(ConvertError::NoActiveBuffer)?;
    let eol = document.line_ending();
    debug!(
        file = document.file_name(),
        letter_case = options.letter_case.as_setting(),
        comment_conversion = options.comment_conversion,
        ?eol,
        "escaping document"
    );

    let text = convert_buffer_to_ascii(document.text(), eol, &options);
    replace(document, text);
    Ok(())
}

/// Decode every `\uXXXX` token in the active document, comment lines
/// included.
///
/// # Errors
///
/// [`ConvertError::NoActiveBuffer`] when no document is focused, and
/// [`ConvertError::Decode`] for a malformed token, in which case the buffer
/// is left as it was.
pub fn convert_ascii_to_native<H: Host + ?Sized>(host: &mut H) -> Result<(), ConvertError> {
    let document = host.active_document().ok_or(ConvertError::NoActiveBuffer)?;
    debug!(file = document.file_name(), "unescaping document");

    let text = ascii_to_native(document.text())?;
    replace(document, text);
    Ok(())
}

fn replace(document: &mut dyn Document, text: String) {
    info!(file = document.file_name(), bytes = text.len(), "replacing buffer");
    document.replace_text(text);
}

/// Run `command`, reporting a failure to the log and to the user.
///
/// The error is still returned so callers that are not an editor, such as
/// the command-line host, can set their exit status from it.
///
/// # Errors
///
/// Whatever the command returned.
pub fn handle<H: Host + ?Sized>(host: &mut H, command: Command) -> Result<(), ConvertError> {
    debug!(%command, "running command");
    let result = command.run(host);
    if let Err(err) = &result {
        error!(%command, error = %err, "{DISPLAY_NAME} failed");
        host.show_error(&format!("[{DISPLAY_NAME}] {err}"));
    }
    result
}

#[cfg(test)]
mod tests {
    use native_ascii::DecodeError;
    use tracing_test::traced_test;

    use super::{Command, handle};
    use crate::{ConvertError, ConvertOptions, Document, LetterCase, MemoryDocument, MemoryHost};

    fn host_with(text: &str, options: ConvertOptions) -> MemoryHost {
        let mut host = MemoryHost::new(options);
        host.open(MemoryDocument::new("messages.properties", text));
        host
    }

    #[test]
    fn ids_roundtrip() {
        for command in Command::ALL {
            assert_eq!(Command::from_id(command.id()), Some(command));
        }
        assert_eq!(Command::from_id("extension.convert"), None);
    }

    #[test]
    fn encode_uses_options() {
        let options = ConvertOptions {
            letter_case: LetterCase::Lower,
            comment_conversion: true,
            ..Default::default()
        };
        let mut host = host_with("#\u{e9}\r\nk=\u{e9}", options);
        handle(&mut host, Command::NativeToAscii).unwrap();
        assert_eq!(host.active().unwrap().text(), "#\\u00e9\r\nk=\\u00e9");
        assert!(host.errors().is_empty());
    }

    #[test]
    fn decode_replaces_buffer() {
        let mut host = host_with("k=caf\\u00E9", ConvertOptions::default());
        handle(&mut host, Command::AsciiToNative).unwrap();
        let doc = host.active().unwrap();
        assert_eq!(doc.text(), "k=caf\u{e9}");
        assert_eq!(doc.version(), 1);
    }

    #[test]
    #[traced_test]
    fn missing_editor_is_reported() {
        let mut host = MemoryHost::new(ConvertOptions::default());
        let err = handle(&mut host, Command::AsciiToNative).unwrap_err();
        assert_eq!(err, ConvertError::NoActiveBuffer);
        assert_eq!(
            host.errors(),
            ["[Native-ASCII Converter] Text editor is not active."]
        );
        assert!(logs_contain("Native-ASCII Converter failed"));
    }

    #[test]
    #[traced_test]
    fn bad_token_leaves_buffer_untouched() {
        let mut host = host_with("k=\\u00e", ConvertOptions::default());
        let err = handle(&mut host, Command::AsciiToNative).unwrap_err();
        assert_eq!(
            err,
            ConvertError::Decode(DecodeError::TruncatedEscape { offset: 2 })
        );

        let doc = host.active().unwrap();
        assert_eq!(doc.text(), "k=\\u00e");
        assert_eq!(doc.version(), 0);
        assert_eq!(
            host.errors(),
            ["[Native-ASCII Converter] truncated unicode escape at byte 2"]
        );
        assert!(logs_contain("truncated unicode escape"));
    }
}
