use native_ascii::LineEnding;

/// File names ending with this are handled by the automatic hooks.
pub const FILE_EXTENSION: &str = ".properties";

/// A cursor or selection as `(line, character)` positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// Where the selection started.
    pub anchor: (usize, usize),
    /// Where the cursor is.
    pub active: (usize, usize),
}

impl Selection {
    /// Empty selection at the start of the buffer.
    pub const START: Selection = Selection {
        anchor: (0, 0),
        active: (0, 0),
    };

    /// Whether anchor and cursor coincide.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }
}

/// An open text buffer, as seen by the conversion commands.
pub trait Document {
    /// Full path or name of the file behind the buffer.
    fn file_name(&self) -> &str;

    /// The whole buffer content.
    fn text(&self) -> &str;

    /// The buffer's end-of-line convention.
    ///
    /// Editors track this per document; the default guesses it from the
    /// text.
    fn line_ending(&self) -> LineEnding {
        LineEnding::detect(self.text())
    }

    /// Replace the whole buffer with `text` and move the cursor to the start,
    /// clearing any selection.
    fn replace_text(&mut self, text: String);

    /// Whether the automatic hooks apply to this document.
    fn is_properties(&self) -> bool {
        self.file_name().ends_with(FILE_EXTENSION)
    }
}

/// A [`Document`] held entirely in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryDocument {
    file_name: String,
    text: String,
    line_ending: LineEnding,
    selection: Selection,
    version: u64,
}

impl MemoryDocument {
    /// Open `text` under `file_name`, fixing its line ending from the content.
    pub fn new(file_name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            file_name: file_name.into(),
            line_ending: LineEnding::detect(&text),
            text,
            selection: Selection::START,
            version: 0,
        }
    }

    /// Override the detected line ending.
    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Move the cursor, as a user would.
    pub fn select(&mut self, selection: Selection) {
        self.selection = selection;
    }

    /// Number of times the buffer has been replaced.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Consume the document, returning its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

impl Document for MemoryDocument {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    fn replace_text(&mut self, text: String) {
        self.text = text;
        self.selection = Selection::START;
        self.version += 1;
    }
}
