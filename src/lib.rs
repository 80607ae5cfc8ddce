//! Smiley - stock plug-ins for an embeddable text editor host
//!
//! This crate provides the standard plug-in set shipped with the editor:
//! emoji substitution, date insertion, and normalized find. Plug-ins are
//! built against the host capability interface in [`api`] and register
//! their callbacks when the host calls [`plugin::Plugin::start`].

pub mod api;
pub mod config;
pub mod config_paths;
pub mod date;
pub mod find;
pub mod plugin;
pub mod smiley;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use api::HostApi;
pub use config::PluginConfig;
pub use date::DatePlugin;
pub use find::FindPlugin;
pub use plugin::Plugin;
pub use smiley::SmileyPlugin;
