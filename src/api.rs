//! Host capability interface and callback contracts
//!
//! Everything a plug-in can do goes through [`HostApi`]: the host owns the
//! document buffer, the caret, dialogs, highlighting, and the plug-in list
//! view. Plug-ins receive the host handle on every callback invocation
//! rather than holding onto it between calls.
//!
//! Events are host-owned values exposed through single-accessor traits;
//! each callback trait has exactly one notification method.

use chrono::Locale;

/// Event fired when the host detects a registered trigger string in the
/// document.
pub trait TextChangeEvent {
    /// The trigger substring whose detection fired this callback.
    fn detected_text(&self) -> &str;
}

/// Event fired when a registered key is pressed.
pub trait KeyPressEvent {
    /// Name of the pressed key (e.g. `"F3"`).
    fn key(&self) -> &str;
}

/// Event fired when a plug-in button is pressed.
pub trait ButtonPressEvent {
    /// Name of the pressed button, as passed to [`HostApi::add_button`].
    fn button_name(&self) -> &str;
}

/// Callback for trigger detection events.
pub trait TextChangeHandler {
    fn text_changed(&mut self, event: &dyn TextChangeEvent, host: &mut dyn HostApi);
}

/// Callback for key press events.
pub trait KeyPressHandler {
    fn key_pressed(&mut self, event: &dyn KeyPressEvent, host: &mut dyn HostApi);
}

/// Callback for button press events.
pub trait ButtonPressHandler {
    fn button_pressed(&mut self, event: &dyn ButtonPressEvent, host: &mut dyn HostApi);
}

/// Services provided by the host editor.
///
/// The caret and all text ranges are expressed as character offsets into
/// the document. Dispatch is single-threaded and serialized by the host;
/// callbacks run to completion before the next event is delivered.
pub trait HostApi {
    /// Current caret position as a character offset.
    fn caret_position(&self) -> usize;

    /// Move the caret to the given character offset.
    fn set_caret_position(&mut self, caret: usize);

    /// Full document text.
    fn text(&self) -> String;

    /// Replace the full document text.
    fn set_text(&mut self, text: &str);

    /// The host's active locale, used for locale-aware formatting.
    fn locale(&self) -> Locale;

    /// Prompt the user for an input string. Returns `None` when the user
    /// cancels the dialog.
    fn show_dialog(&mut self) -> Option<String>;

    /// Highlight the character range `[start, end)` in the document.
    fn highlight_text(&mut self, start: usize, end: usize);

    /// Add a button with the given name to the host toolbar.
    fn add_button(&mut self, name: &str, handler: Box<dyn ButtonPressHandler>);

    /// Bind a key (by name) to a callback.
    fn add_key_press_callback(&mut self, key: &str, handler: Box<dyn KeyPressHandler>);

    /// Bind a trigger string to a callback fired when the host detects it.
    fn add_text_change_callback(&mut self, trigger: &str, handler: Box<dyn TextChangeHandler>);

    /// Register a display label in the host's plug-in list view.
    fn display_in_list_view(&mut self, label: &str);
}
