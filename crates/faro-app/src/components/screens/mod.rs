//! Screen components, one per registered view, grouped by workflow.
//!
//! Screens are thin shells around the excluded form/dashboard internals.
//! Two contracts hold everywhere: a form screen reads its optional editing
//! id (absence means create mode), and closing always goes through
//! `resolve_return`, never a hardcoded target.

pub mod buyers;
pub mod metrics;
pub mod sellers;
pub mod tracking;

use faro_core::QueryScope;

/// Label for the data scope a dashboard is showing.
pub(crate) fn scope_label(scope: &QueryScope) -> String {
    match scope {
        QueryScope::TeamWide => "Resumen Equipo (Global)".to_string(),
        QueryScope::User(id) => format!("Datos de {id}"),
    }
}
