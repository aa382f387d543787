//! Seller workflow screens: dashboard, seller form, properties.

use dioxus::prelude::*;

use faro_core::params::EDITING_PROPERTY_ID;
use faro_core::{ViewId, ViewParams};

use super::scope_label;
use crate::state::AppContext;

/// Seller pipeline dashboard.
#[component]
pub fn Dashboard() -> Element {
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
                h1 { "Panel Vendedores" }
                div { class: "screen-scope", "{scope_text}" }
            }
            button {
                class: "primary",
                onclick: move |_| ctx.navigate_to(ViewId::Form, ViewParams::new()),
                "Nuevo vendedor"
            }
        }
    }
}

/// Seller intake form.
#[component]
pub fn SellerForm() -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        div { class: "screen",
            div { class: "screen-header",
                h1 { "Nuevo Vendedor" }
            }
            div { class: "form-placeholder", "Datos del vendedor…" }
            button { class: "close", onclick: move |_| ctx.resolve_return(), "Cerrar" }
        }
    }
}

/// Property list with per-row edit navigation.
#[component]
pub fn PropertiesList() -> Element {
    let ctx = use_context::<AppContext>();
    // Placeholder rows; real records come from the excluded CRUD layer.
    let properties = ["prop-101", "prop-102", "prop-103"];

    rsx! {
        div { class: "screen",
            div { class: "screen-header",
                h1 { "Propiedades" }
                button {
                    class: "primary",
                    onclick: move |_| ctx.navigate_to(ViewId::PropertyForm, ViewParams::new()),
                    "Nueva propiedad"
                }
            }
            for id in properties {
                div {
                    class: "list-row",
                    key: "{id}",
                    onclick: move |_| {
                        ctx.navigate_to(
                            ViewId::PropertyForm,
                            ViewParams::new().with(EDITING_PROPERTY_ID, id),
                        )
                    },
                    "{id}"
                }
            }
        }
    }
}

/// Property form: edit when an id arrives, create otherwise.
#[component]
pub fn PropertyForm() -> Element {
    let ctx = use_context::<AppContext>();
    let editing = {
        let session = ctx.session.read();
        let Some(session) = session.as_ref() else {
            return rsx! {};
        };
        session
            .nav
            .view_params
            .get_str(EDITING_PROPERTY_ID)
            .map(str::to_string)
    };

    let title = match &editing {
        Some(id) => format!("Editar propiedad {id}"),
        None => "Nueva propiedad".to_string(),
    };

    rsx! {
        div { class: "screen",
            div { class: "screen-header",
                h1 { "{title}" }
            }
            div { class: "form-placeholder", "Ficha de propiedad…" }
            button { class: "close", onclick: move |_| ctx.resolve_return(), "Cerrar" }
        }
    }
}
