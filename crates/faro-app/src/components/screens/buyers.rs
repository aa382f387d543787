//! Buyer workflow screens: clients, searches, and their forms.

use dioxus::prelude::*;

use faro_core::params::{EDITING_CLIENT_ID, IS_RETURNING, PRE_SELECTED_CLIENT_ID};
use faro_core::{ReturnTarget, ViewId, ViewParams};

use crate::state::AppContext;

/// Buyer client list.
#[component]
pub fn BuyerClientsList() -> Element {
    let ctx = use_context::<AppContext>();
    let clients = ["c-9", "c-12", "c-15"];

    rsx! {
        div { class: "screen",
            div { class: "screen-header",
                h1 { "Compradores" }
                button {
                    class: "primary",
                    onclick: move |_| {
                        ctx.navigate_to(ViewId::BuyerClientForm, ViewParams::new())
                    },
                    "Nuevo comprador"
                }
            }
            for id in clients {
                div {
                    class: "list-row",
                    key: "{id}",
                    onclick: move |_| {
                        ctx.navigate_to(
                            ViewId::BuyerClientForm,
                            ViewParams::new().with(EDITING_CLIENT_ID, id),
                        )
                    },
                    "{id}"
                }
            }
        }
    }
}

/// Buyer client form. Besides create/edit, it can jump into a visit form
/// pre-selected for this client, remembering this screen as the origin.
#[component]
pub fn BuyerClientForm() -> Element {
    let ctx = use_context::<AppContext>();
    let editing = {
        let session = ctx.session.read();
        let Some(session) = session.as_ref() else {
            return rsx! {};
        };
        session
            .nav
            .view_params
            .get_str(EDITING_CLIENT_ID)
            .map(str::to_string)
    };

    let title = match &editing {
        Some(id) => format!("Editar comprador {id}"),
        None => "Nuevo comprador".to_string(),
    };
    let visit_client = editing.clone();

    rsx! {
        div { class: "screen",
            div { class: "screen-header",
                h1 { "{title}" }
            }
            div { class: "form-placeholder", "Ficha de comprador…" }
            if let Some(client_id) = visit_client {
                button {
                    class: "secondary",
                    onclick: move |_| {
                        // The visit form's fallback targets the visits list;
                        // remember this client's form as the real origin.
                        ctx.set_return_to(Some(ReturnTarget::new(
                            ViewId::BuyerClientForm,
                            ViewParams::new().with(EDITING_CLIENT_ID, client_id.clone()),
                        )));
                        ctx.navigate_to(
                            ViewId::VisitForm,
                            ViewParams::new().with(PRE_SELECTED_CLIENT_ID, client_id.clone()),
                        );
                    },
                    "Programar visita"
                }
            }
            button { class: "close", onclick: move |_| ctx.resolve_return(), "Cerrar" }
        }
    }
}

/// Buyer search list, filterable.
#[component]
pub fn BuyerSearchesList() -> Element {
    let ctx = use_context::<AppContext>();
    let (filter, returning) = {
        let session = ctx.session.read();
        let Some(session) = session.as_ref() else {
            return rsx! {};
        };
        (
            session
                .nav
                .view_params
                .get_str("filter")
                .unwrap_or("all")
                .to_string(),
            session.nav.view_params.get_bool(IS_RETURNING).unwrap_or(false),
        )
    };
    let filter_for_return = filter.clone();

    rsx! {
        div { class: "screen",
            div { class: "screen-header",
                h1 { "Búsquedas" }
                div { class: "screen-scope", "Filtro: {filter}" }
                if returning {
                    div { class: "screen-note", "De vuelta a la lista" }
                }
                button {
                    class: "primary",
                    onclick: move |_| {
                        // Keep the current filter when the form comes back.
                        ctx.set_return_to(Some(ReturnTarget::new(
                            ViewId::BuyerSearchesList,
                            ViewParams::new().with("filter", filter_for_return.clone()),
                        )));
                        ctx.navigate_to(ViewId::BuyerSearchForm, ViewParams::new());
                    },
                    "Nueva búsqueda"
                }
            }
        }
    }
}

/// Buyer search form.
#[component]
pub fn BuyerSearchForm() -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        div { class: "screen",
            div { class: "screen-header",
                h1 { "Ficha Búsqueda" }
            }
            div { class: "form-placeholder", "Criterios de búsqueda…" }
            button { class: "close", onclick: move |_| ctx.resolve_return(), "Cerrar" }
        }
    }
}
