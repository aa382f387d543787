//! Topbar — identity display, acting-as team selector, sign-out.

use dioxus::prelude::*;

use faro_core::{Role, Session, ViewId, ViewParams};

use crate::bridge;
use crate::state::AppContext;

const SCOPE_PERSONAL: &str = "personal";
const SCOPE_GLOBAL: &str = "global";

/// Topbar with the calendar shortcut and, for the supervisory role, the
/// team data selector.
#[component]
pub fn Topbar() -> Element {
    let mut ctx = use_context::<AppContext>();
    let (user_id, role, selector_value) = {
        let session = ctx.session.read();
        let Some(session) = session.as_ref() else {
            return rsx! {};
        };
        let value = if session.identity.acting_as_team_wide() {
            SCOPE_GLOBAL.to_string()
        } else {
            match session.identity.acting_as_user_id() {
                Some(id) => id.to_string(),
                None => SCOPE_PERSONAL.to_string(),
            }
        };
        (session.identity.user_id.clone(), session.identity.role, value)
    };
    let team = ctx.team.read().clone();

    rsx! {
        div { class: "topbar",
            div { class: "topbar-brand", "Faro" }
            div { class: "topbar-spacer" }

            div {
                class: "topbar-link",
                onclick: move |_| ctx.navigate_to(ViewId::Calendar, ViewParams::new()),
                "Calendario"
            }

            // Only the supervisory role ever sees the selector; the state
            // layer rejects the change anyway if something else calls it.
            if role == Role::Mother {
                select {
                    class: "topbar-team-selector",
                    value: "{selector_value}",
                    onchange: move |evt| {
                        let choice = evt.value();
                        if let Some(session) = ctx.session.write().as_mut() {
                            match choice.as_str() {
                                SCOPE_PERSONAL => session.identity.view_own_data(),
                                SCOPE_GLOBAL => session.identity.view_team_wide(),
                                member_id => session.identity.view_member(member_id),
                            }
                        }
                    },
                    option { value: SCOPE_PERSONAL, "Mis Datos (Personal)" }
                    option { value: SCOPE_GLOBAL, "Resumen Equipo (Global)" }
                    for member in team.iter().filter(|m| m.user_id != user_id) {
                        option {
                            key: "{member.user_id}",
                            value: "{member.user_id}",
                            "{member.display_name}"
                        }
                    }
                }
            }

            div { class: "topbar-user", "{user_id}" }
            button {
                class: "topbar-signout",
                onclick: move |_| {
                    Session::handle_auth_event(&mut ctx.session.write(), bridge::sign_out());
                },
                "Salir"
            }
        }
    }
}
