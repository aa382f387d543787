//! Faro CRM desktop shell.
//!
//! Re-exports the bridge, shared context, and components for embedding in
//! other shells.

pub mod bridge;
pub mod components;
pub mod state;

/// App-wide CSS embedded into the webview head.
pub const APP_CSS: &str = include_str!("style.css");
