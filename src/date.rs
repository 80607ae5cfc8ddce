//! Date insertion plug-in
//!
//! Registers a `"Date"` button with the host; when pressed, inserts the
//! current GMT date and time at the caret, formatted for the host's active
//! locale, and restores the caret to its pre-call offset.

use chrono::{DateTime, Utc};

use crate::api::{ButtonPressEvent, ButtonPressHandler, HostApi};
use crate::plugin::Plugin;
use crate::util::char_to_byte;

/// Name of the toolbar button registered by this plug-in.
pub const BUTTON_NAME: &str = "Date";

/// Label shown in the host's plug-in list view.
pub const LIST_LABEL: &str = "Date Plug-in";

/// Locale date-and-time representation, medium style.
const DATE_FORMAT: &str = "%c";

/// The date insertion plug-in.
pub struct DatePlugin;

impl DatePlugin {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DatePlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for DatePlugin {
    fn start(&mut self, host: &mut dyn HostApi) {
        tracing::info!("registering date plug-in");
        host.add_button(BUTTON_NAME, Box::new(InsertDateHandler));
        host.display_in_list_view(LIST_LABEL);
    }
}

/// Insert `timestamp` at the caret, formatted for the host locale, and
/// restore the caret.
///
/// The caret offset is preserved as-is even though the inserted text
/// lengthens the document.
pub fn insert_timestamp(host: &mut dyn HostApi, timestamp: DateTime<Utc>) {
    let caret = host.caret_position();
    let text = host.text();
    let locale = host.locale();

    let formatted = timestamp.format_localized(DATE_FORMAT, locale).to_string();
    tracing::debug!(%formatted, caret, "inserting timestamp");

    let mut updated = text;
    updated.insert_str(char_to_byte(&updated, caret), &formatted);

    host.set_text(&updated);
    host.set_caret_position(caret);
}

/// Callback fired when a toolbar button is pressed.
struct InsertDateHandler;

impl ButtonPressHandler for InsertDateHandler {
    fn button_pressed(&mut self, event: &dyn ButtonPressEvent, host: &mut dyn HostApi) {
        if event.button_name() == BUTTON_NAME {
            insert_timestamp(host, Utc::now());
        }
    }
}
