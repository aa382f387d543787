//! Metrics screens and the first-login welcome.

use dioxus::prelude::*;

use faro_core::{ViewId, ViewParams};

use super::scope_label;
use crate::state::AppContext;

/// Marketing funnel home. The funnel arithmetic itself lives outside this
/// shell; the screen shows which subject the numbers are scoped to.
#[component]
pub fn MetricsHome() -> Element {
    let ctx = use_context::<AppContext>();
    let scope = {
        let session = ctx.session.read();
        let Some(session) = session.as_ref() else {
            return rsx! {};
        };
        session.identity.effective_scope()
    };
    let scope_text = scope_label(&scope);

    rsx! {
        div { class: "screen",
            div { class: "screen-header",
                h1 { "Métricas" }
                div { class: "screen-scope", "{scope_text}" }
            }
            button {
                class: "secondary",
                onclick: move |_| ctx.navigate_to(ViewId::MetricsControl, ViewParams::new()),
                "Control de métricas"
            }
        }
    }
}

/// Metrics input/control panel.
#[component]
pub fn MetricsControl() -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        div { class: "screen",
            div { class: "screen-header", h1 { "Control de Métricas" } }
            div { class: "form-placeholder", "Registro de actividad…" }
            button { class: "close", onclick: move |_| ctx.resolve_return(), "Cerrar" }
        }
    }
}

/// First-login landing screen.
#[component]
pub fn Welcome() -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        div { class: "screen welcome",
            h1 { "Bienvenida a Faro" }
            p { "Tu panel de trabajo para vendedores, compradores y visitas." }
            button {
                class: "primary",
                onclick: move |_| ctx.navigate_to(ViewId::MetricsHome, ViewParams::new()),
                "Empezar"
            }
        }
    }
}
