//! Plug-in lifecycle contract

use crate::api::HostApi;

/// A plug-in loadable by the host editor.
pub trait Plugin {
    /// Called once at load time. Registers the plug-in's callbacks, buttons,
    /// key bindings, and list view label with the host.
    fn start(&mut self, host: &mut dyn HostApi);
}
