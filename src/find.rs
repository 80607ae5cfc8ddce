//! Normalized find plug-in
//!
//! Registers a `"Find"` button and an `"F3"` key binding. When fired, the
//! plug-in prompts for a search string via the host dialog, searches the
//! document after the caret using NFKC normalization and case folding, and
//! highlights the first match in the original text.
//!
//! NFKC expands ligatures (`ﬁ` becomes `fi`), so indices into the
//! normalized text drift from indices into the original. A per-character
//! expansion offset table maps the match back onto the original text for
//! highlighting.

use unicode_normalization::UnicodeNormalization;

use crate::api::{ButtonPressEvent, ButtonPressHandler, HostApi, KeyPressEvent, KeyPressHandler};
use crate::plugin::Plugin;
use crate::util::byte_to_char;

/// Name of the toolbar button registered by this plug-in.
pub const BUTTON_NAME: &str = "Find";

/// Key bound to the find action.
pub const KEY_NAME: &str = "F3";

/// Label shown in the host's plug-in list view.
pub const LIST_LABEL: &str = "Find Plug-in";

/// The normalized find plug-in.
pub struct FindPlugin;

impl FindPlugin {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FindPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for FindPlugin {
    fn start(&mut self, host: &mut dyn HostApi) {
        tracing::info!("registering find plug-in");
        host.add_button(BUTTON_NAME, Box::new(FindButtonHandler));
        host.add_key_press_callback(KEY_NAME, Box::new(FindKeyHandler));
        host.display_in_list_view(LIST_LABEL);
    }
}

/// Prompt for a search string and highlight the first match after the caret.
pub fn find_and_highlight(host: &mut dyn HostApi) {
    let Some(query) = host.show_dialog() else {
        return;
    };

    let caret = host.caret_position();
    let text = host.text();
    let tail: String = text.chars().skip(caret).collect();

    match normalized_find(&tail, &query) {
        Some((start, end)) => {
            tracing::debug!(%query, start, end, "highlighting match");
            host.highlight_text(caret + start, caret + end);
        }
        None => {
            tracing::debug!(%query, "no match after caret");
        }
    }
}

/// Search `haystack` for `query` under NFKC normalization and case folding.
///
/// Returns the matched range as character offsets into the *original*
/// haystack, with the end offset contracted so that a match ending inside
/// an expanded ligature still covers the right original characters.
pub fn normalized_find(haystack: &str, query: &str) -> Option<(usize, usize)> {
    let query_folded = fold(query);
    let query_len = query_folded.chars().count();
    if query_len == 0 {
        return None;
    }

    let haystack_folded = fold(haystack);
    let byte_idx = haystack_folded.find(&query_folded)?;
    let idx = byte_to_char(&haystack_folded, byte_idx);

    // One cumulative-expansion entry per normalized character; entries past
    // the table mean case folding changed the length, which the offset
    // table does not model.
    let offsets = expansion_offsets(haystack);
    if idx + query_len > offsets.len() {
        return None;
    }

    let start = idx - offsets[idx];
    let expanded_by = offsets[idx + query_len - 1] - offsets[idx];
    let end = start + query_len - expanded_by;
    Some((start, end))
}

/// NFKC-normalize and lowercase a string for comparison.
fn fold(s: &str) -> String {
    s.nfkc().collect::<String>().to_lowercase()
}

/// Cumulative NFKC expansion at each normalized character position.
///
/// `normalized_index - offsets[normalized_index]` recovers the original
/// character index of the character that produced that normalized position.
fn expansion_offsets(s: &str) -> Vec<usize> {
    let mut offsets = Vec::new();
    let mut total = 0;
    for ch in s.chars() {
        let expanded = ch.nfkc().count();
        offsets.push(total);
        for _ in 1..expanded {
            total += 1;
            offsets.push(total);
        }
    }
    offsets
}

struct FindButtonHandler;

impl ButtonPressHandler for FindButtonHandler {
    fn button_pressed(&mut self, event: &dyn ButtonPressEvent, host: &mut dyn HostApi) {
        if event.button_name() == BUTTON_NAME {
            find_and_highlight(host);
        }
    }
}

struct FindKeyHandler;

impl KeyPressHandler for FindKeyHandler {
    fn key_pressed(&mut self, event: &dyn KeyPressEvent, host: &mut dyn HostApi) {
        if event.key() == KEY_NAME {
            find_and_highlight(host);
        }
    }
}
