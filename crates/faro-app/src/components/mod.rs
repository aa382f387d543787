//! UI components for the Faro CRM shell.

pub mod app;
pub mod screens;
pub mod sidebar;
pub mod topbar;
