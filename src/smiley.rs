//! Emoji substitution plug-in
//!
//! Registers a trigger string (`":-)"` by default) with the host; when the
//! host detects it, every occurrence of the trigger in the document is
//! replaced with an emoji and the caret is restored to its pre-call offset.

use crate::api::{HostApi, TextChangeEvent, TextChangeHandler};
use crate::config::PluginConfig;
use crate::plugin::Plugin;

/// Label shown in the host's plug-in list view.
pub const LIST_LABEL: &str = "Smiley Emoji Script";

/// Replace every occurrence of `trigger` in `text` with `replacement`.
///
/// Substitution is global: if the trigger appears N times, all N
/// occurrences are replaced, not just the one nearest the caret.
pub fn substitute_trigger(text: &str, trigger: &str, replacement: &str) -> String {
    text.replace(trigger, replacement)
}

/// The emoji substitution plug-in.
pub struct SmileyPlugin {
    config: PluginConfig,
}

impl SmileyPlugin {
    /// Create the plug-in with the default trigger and emoji.
    pub fn new() -> Self {
        Self {
            config: PluginConfig::default(),
        }
    }

    /// Create the plug-in with a user-supplied trigger/emoji pair.
    pub fn with_config(config: PluginConfig) -> Self {
        Self { config }
    }

    /// Create the plug-in from the saved on-disk configuration, falling
    /// back to defaults if none exists.
    pub fn from_saved_config() -> Self {
        Self::with_config(PluginConfig::load())
    }
}

impl Default for SmileyPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SmileyPlugin {
    fn start(&mut self, host: &mut dyn HostApi) {
        tracing::info!(trigger = %self.config.trigger, "registering smiley plug-in");
        host.add_text_change_callback(
            &self.config.trigger,
            Box::new(SmileyHandler {
                emoji: self.config.emoji.clone(),
            }),
        );
        host.display_in_list_view(LIST_LABEL);
    }
}

/// Callback fired when the host detects the registered trigger.
struct SmileyHandler {
    emoji: String,
}

impl TextChangeHandler for SmileyHandler {
    fn text_changed(&mut self, event: &dyn TextChangeEvent, host: &mut dyn HostApi) {
        let caret = host.caret_position();
        let text = host.text();

        let replaced = substitute_trigger(&text, event.detected_text(), &self.emoji);
        tracing::debug!(
            trigger = %event.detected_text(),
            before = text.len(),
            after = replaced.len(),
            "substituting trigger"
        );

        host.set_text(&replaced);
        host.set_caret_position(caret);
    }
}
