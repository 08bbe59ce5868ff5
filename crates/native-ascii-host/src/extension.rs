use tracing::{debug, warn};

use crate::{
    ConvertError,
    commands::{Command, handle},
    document::FILE_EXTENSION,
    host::Host,
};

/// What the converter registered with the editor when it was activated.
///
/// The automatic hooks are decided once, from the settings at activation
/// time; changing `auto-conversion-*` afterwards only takes effect on the
/// next activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extension {
    convert_on_save: bool,
    convert_on_activate: bool,
}

impl Extension {
    /// Register the commands and whichever hooks the host's settings enable.
    #[must_use]
    pub fn activate<H: Host + ?Sized>(host: &H) -> Self {
        let options = host.options();
        debug!(
            on_save = options.auto_conversion_on_save,
            on_activate = options.auto_conversion_on_activate,
            "activating extension"
        );
        Self {
            convert_on_save: options.auto_conversion_on_save,
            convert_on_activate: options.auto_conversion_on_activate,
        }
    }

    /// Ids of the registered commands.
    #[must_use]
    pub fn commands(&self) -> [&'static str; 2] {
        Command::ALL.map(Command::id)
    }

    /// Whether the save hook is registered.
    #[must_use]
    pub fn converts_on_save(&self) -> bool {
        self.convert_on_save
    }

    /// Whether the activation hook is registered.
    #[must_use]
    pub fn converts_on_activate(&self) -> bool {
        self.convert_on_activate
    }

    /// Invoke a command by id, as the editor's command palette would.
    ///
    /// # Errors
    ///
    /// [`ConvertError::UnknownCommand`] for an id that was never registered,
    /// otherwise whatever the command returned.
    pub fn execute<H: Host + ?Sized>(&self, host: &mut H, id: &str) -> Result<(), ConvertError> {
        let Some(command) = Command::from_id(id) else {
            warn!(id, "unknown command");
            return Err(ConvertError::UnknownCommand(id.to_owned()));
        };
        handle(host, command)
    }

    /// The editor is about to save `file_name`.
    ///
    /// Escapes the active document when the save hook is registered and the
    /// saved file is a `.properties` file. Returns `None` when the hook did
    /// not fire.
    pub fn will_save<H: Host + ?Sized>(
        &self,
        host: &mut H,
        file_name: &str,
    ) -> Option<Result<(), ConvertError>> {
        if !self.convert_on_save || !file_name.ends_with(FILE_EXTENSION) {
            debug!(file_name, "save hook skipped");
            return None;
        }
        Some(handle(host, Command::NativeToAscii))
    }

    /// A different editor gained focus.
    ///
    /// Unescapes the newly active document when the activation hook is
    /// registered and the document is a `.properties` file. Returns `None`
    /// when the hook did not fire.
    pub fn did_change_active_document<H: Host + ?Sized>(
        &self,
        host: &mut H,
    ) -> Option<Result<(), ConvertError>> {
        if !self.convert_on_activate {
            return None;
        }
        let applies = host
            .active_document()
            .is_some_and(|document| document.is_properties());
        if !applies {
            debug!("activation hook skipped");
            return None;
        }
        Some(handle(host, Command::AsciiToNative))
    }
}
