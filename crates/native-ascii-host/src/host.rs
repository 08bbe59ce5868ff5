use native_ascii::ConvertOptions;

use crate::document::{Document, MemoryDocument};

/// The editing environment the commands run in.
pub trait Host {
    /// The document in the focused editor, if any.
    fn active_document(&mut self) -> Option<&mut dyn Document>;

    /// Current conversion settings.
    fn options(&self) -> ConvertOptions;

    /// Show a one-line error message to the user.
    fn show_error(&mut self, message: &str);
}

/// A [`Host`] keeping its documents and messages in memory.
#[derive(Debug, Default)]
pub struct MemoryHost {
    documents: Vec<MemoryDocument>,
    active: Option<usize>,
    options: ConvertOptions,
    errors: Vec<String>,
}

impl MemoryHost {
    /// A host with no open documents.
    #[must_use]
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Open `document` and make it the active one. Returns its index.
    pub fn open(&mut self, document: MemoryDocument) -> usize {
        self.documents.push(document);
        let index = self.documents.len() - 1;
        self.active = Some(index);
        index
    }

    /// Focus the document at `index`. Returns `false` if there is none.
    pub fn activate(&mut self, index: usize) -> bool {
        if index < self.documents.len() {
            self.active = Some(index);
            true
        } else {
            false
        }
    }

    /// Leave no editor focused.
    pub fn deactivate(&mut self) {
        self.active = None;
    }

    /// Replace the settings, as a user editing their configuration would.
    pub fn set_options(&mut self, options: ConvertOptions) {
        self.options = options;
    }

    /// The document at `index`.
    #[must_use]
    pub fn document(&self, index: usize) -> Option<&MemoryDocument> {
        self.documents.get(index)
    }

    /// The focused document.
    #[must_use]
    pub fn active(&self) -> Option<&MemoryDocument> {
        self.active.and_then(|i| self.documents.get(i))
    }

    /// Messages passed to [`Host::show_error`], oldest first.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl Host for MemoryHost {
    fn active_document(&mut self) -> Option<&mut dyn Document> {
        let index = self.active?;
        self.documents
            .get_mut(index)
            .map(|doc| doc as &mut dyn Document)
    }

    fn options(&self) -> ConvertOptions {
        self.options
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::{Host, MemoryHost};
    use crate::{ConvertOptions, Document, MemoryDocument};

    #[test]
    fn open_activates() {
        let mut host = MemoryHost::new(ConvertOptions::default());
        assert!(host.active_document().is_none());

        let a = host.open(MemoryDocument::new("a.properties", "a"));
        let b = host.open(MemoryDocument::new("b.properties", "b"));
        assert_eq!(host.active_document().unwrap().file_name(), "b.properties");

        assert!(host.activate(a));
        assert_eq!(host.active().unwrap().text(), "a");
        assert!(!host.activate(b + 1));
        assert_eq!(host.active().unwrap().text(), "a");

        host.deactivate();
        assert!(host.active_document().is_none());
    }
}
