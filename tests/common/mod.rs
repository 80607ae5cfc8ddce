//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::collections::VecDeque;

use chrono::Locale;
use ropey::Rope;
use smiley::api::{
    ButtonPressEvent, ButtonPressHandler, HostApi, KeyPressEvent, KeyPressHandler,
    TextChangeEvent, TextChangeHandler,
};

/// In-memory host double: owns a document buffer and caret, records
/// registrations, highlights, and list view labels, and replays scripted
/// dialog responses.
pub struct InMemoryHost {
    buffer: Rope,
    caret: usize,
    locale: Locale,
    dialog_responses: VecDeque<Option<String>>,
    /// Highlight ranges requested by plug-ins, in call order
    pub highlights: Vec<(usize, usize)>,
    /// Labels registered in the list view, in call order
    pub list_labels: Vec<String>,
    text_change_handlers: Vec<(String, Box<dyn TextChangeHandler>)>,
    key_press_handlers: Vec<(String, Box<dyn KeyPressHandler>)>,
    button_handlers: Vec<(String, Box<dyn ButtonPressHandler>)>,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self::with_text("", 0)
    }

    /// Create a host with the given document text and caret offset
    pub fn with_text(text: &str, caret: usize) -> Self {
        Self {
            buffer: Rope::from_str(text),
            caret,
            locale: Locale::en_US,
            dialog_responses: VecDeque::new(),
            highlights: Vec::new(),
            list_labels: Vec::new(),
            text_change_handlers: Vec::new(),
            key_press_handlers: Vec::new(),
            button_handlers: Vec::new(),
        }
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Queue a response for the next `show_dialog` call (`None` = cancel)
    pub fn queue_dialog_response(&mut self, response: Option<&str>) {
        self.dialog_responses
            .push_back(response.map(|s| s.to_string()));
    }

    /// Triggers registered via `add_text_change_callback`, in call order
    pub fn text_change_triggers(&self) -> Vec<&str> {
        self.text_change_handlers
            .iter()
            .map(|(t, _)| t.as_str())
            .collect()
    }

    /// Keys registered via `add_key_press_callback`, in call order
    pub fn key_names(&self) -> Vec<&str> {
        self.key_press_handlers
            .iter()
            .map(|(k, _)| k.as_str())
            .collect()
    }

    /// Buttons registered via `add_button`, in call order
    pub fn button_names(&self) -> Vec<&str> {
        self.button_handlers
            .iter()
            .map(|(b, _)| b.as_str())
            .collect()
    }

    /// Simulate the host detecting `trigger` in the document: fires every
    /// callback bound to that exact trigger string.
    pub fn fire_text_change(&mut self, trigger: &str) {
        let mut handlers = std::mem::take(&mut self.text_change_handlers);
        let event = DetectedTrigger(trigger.to_string());
        for (bound, handler) in handlers.iter_mut() {
            if bound == trigger {
                handler.text_changed(&event, self);
            }
        }
        // Keep any callbacks registered during dispatch
        let added = std::mem::replace(&mut self.text_change_handlers, handlers);
        self.text_change_handlers.extend(added);
    }

    /// Simulate a key press: fires every callback bound to that key name.
    pub fn press_key(&mut self, key: &str) {
        let mut handlers = std::mem::take(&mut self.key_press_handlers);
        let event = PressedKey(key.to_string());
        for (bound, handler) in handlers.iter_mut() {
            if bound == key {
                handler.key_pressed(&event, self);
            }
        }
        let added = std::mem::replace(&mut self.key_press_handlers, handlers);
        self.key_press_handlers.extend(added);
    }

    /// Simulate a button press: fires every callback bound to that button.
    pub fn press_button(&mut self, name: &str) {
        let mut handlers = std::mem::take(&mut self.button_handlers);
        let event = PressedButton(name.to_string());
        for (bound, handler) in handlers.iter_mut() {
            if bound == name {
                handler.button_pressed(&event, self);
            }
        }
        let added = std::mem::replace(&mut self.button_handlers, handlers);
        self.button_handlers.extend(added);
    }
}

impl Default for InMemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostApi for InMemoryHost {
    fn caret_position(&self) -> usize {
        self.caret
    }

    fn set_caret_position(&mut self, caret: usize) {
        // Not clamped: callbacks restore the caret verbatim, even past the
        // end of a shrunken document.
        self.caret = caret;
    }

    fn text(&self) -> String {
        self.buffer.to_string()
    }

    fn set_text(&mut self, text: &str) {
        self.buffer = Rope::from_str(text);
    }

    fn locale(&self) -> Locale {
        self.locale
    }

    fn show_dialog(&mut self) -> Option<String> {
        self.dialog_responses.pop_front().flatten()
    }

    fn highlight_text(&mut self, start: usize, end: usize) {
        self.highlights.push((start, end));
    }

    fn add_button(&mut self, name: &str, handler: Box<dyn ButtonPressHandler>) {
        self.button_handlers.push((name.to_string(), handler));
    }

    fn add_key_press_callback(&mut self, key: &str, handler: Box<dyn KeyPressHandler>) {
        self.key_press_handlers.push((key.to_string(), handler));
    }

    fn add_text_change_callback(&mut self, trigger: &str, handler: Box<dyn TextChangeHandler>) {
        self.text_change_handlers.push((trigger.to_string(), handler));
    }

    fn display_in_list_view(&mut self, label: &str) {
        self.list_labels.push(label.to_string());
    }
}

struct DetectedTrigger(String);

impl TextChangeEvent for DetectedTrigger {
    fn detected_text(&self) -> &str {
        &self.0
    }
}

struct PressedKey(String);

impl KeyPressEvent for PressedKey {
    fn key(&self) -> &str {
        &self.0
    }
}

struct PressedButton(String);

impl ButtonPressEvent for PressedButton {
    fn button_name(&self) -> &str {
        &self.0
    }
}
