//! Tracking workflow screens: visits, week, closings, objectives, habits,
//! and the calendar.

use chrono::{Datelike, Local};
use dioxus::prelude::*;

use faro_core::params::PRE_SELECTED_CLIENT_ID;
use faro_core::{ViewId, ViewParams};

use super::scope_label;
use crate::state::AppContext;

/// Visit list.
#[component]
pub fn VisitsList() -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        div { class: "screen",
            div { class: "screen-header",
                h1 { "Visitas" }
                button {
                    class: "primary",
                    onclick: move |_| ctx.navigate_to(ViewId::VisitForm, ViewParams::new()),
                    "Nueva visita"
                }
            }
        }
    }
}

/// Visit form; honors a pre-selected client arriving from a buyer screen.
#[component]
pub fn VisitForm() -> Element {
    let ctx = use_context::<AppContext>();
    let pre_selected = {
        let session = ctx.session.read();
        let Some(session) = session.as_ref() else {
            return rsx! {};
        };
        session
            .nav
            .view_params
            .get_str(PRE_SELECTED_CLIENT_ID)
            .map(str::to_string)
    };

    rsx! {
        div { class: "screen",
            div { class: "screen-header",
                h1 { "Ficha Visita" }
                if let Some(client) = pre_selected {
                    div { class: "screen-scope", "Comprador: {client}" }
                }
            }
            div { class: "form-placeholder", "Datos de la visita…" }
            button { class: "close", onclick: move |_| ctx.resolve_return(), "Cerrar" }
        }
    }
}

/// Current-week planner.
#[component]
pub fn MyWeek() -> Element {
    let week = Local::now().iso_week().week();

    rsx! {
        div { class: "screen",
            div { class: "screen-header",
                h1 { "Mi Semana" }
                div { class: "screen-scope", "Semana {week}" }
            }
        }
    }
}

/// Closings board.
#[component]
pub fn Closings() -> Element {
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
                h1 { "Cierres" }
                div { class: "screen-scope", "{scope_text}" }
            }
        }
    }
}

/// Quarterly objectives.
#[component]
pub fn Objectives() -> Element {
    rsx! {
        div { class: "screen",
            div { class: "screen-header", h1 { "Objetivos" } }
        }
    }
}

/// Daily habit tracker.
#[component]
pub fn Habits() -> Element {
    rsx! {
        div { class: "screen",
            div { class: "screen-header", h1 { "Hábitos" } }
        }
    }
}

/// Month calendar.
#[component]
pub fn CalendarScreen() -> Element {
    let month = Local::now().format("%B %Y").to_string();

    rsx! {
        div { class: "screen",
            div { class: "screen-header",
                h1 { "Calendario" }
                div { class: "screen-scope", "{month}" }
            }
        }
    }
}
