//! Root app component — sign-in phase and the view composition root.

use dioxus::prelude::*;

use faro_core::{Session, ViewId};

use crate::bridge;
use crate::components::screens;
use crate::components::sidebar::Sidebar;
use crate::components::topbar::Topbar;
use crate::state::AppContext;

/// Root application component.
#[component]
pub fn App() -> Element {
    let ctx = use_context_provider(|| AppContext {
        session: Signal::new(None),
        team: Signal::new(bridge::team_directory()),
    });

    let signed_in = ctx.session.read().is_some();
    if signed_in {
        rsx! { MainLayout {} }
    } else {
        rsx! { SignInView {} }
    }
}

/// Account picker shown while signed out.
#[component]
fn SignInView() -> Element {
    let mut ctx = use_context::<AppContext>();
    let mut error = use_signal(|| None::<String>);
    let team = ctx.team.read().clone();

    rsx! {
        div { class: "signin-screen",
            div { class: "signin-card",
                div { class: "signin-title", "Faro CRM" }
                div { class: "signin-subtitle", "Selecciona tu cuenta" }
                for member in team.iter() {
                    {
                        let user_id = member.user_id.clone();
                        let label = member.display_name.clone();
                        let account_id = user_id.clone();
                        rsx! {
                            button {
                                class: "signin-account",
                                key: "{user_id}",
                                onclick: move |_| {
                                    match bridge::sign_in(&account_id) {
                                        Ok(event) => {
                                            error.set(None);
                                            Session::handle_auth_event(
                                                &mut ctx.session.write(),
                                                event,
                                            );
                                        }
                                        Err(e) => error.set(Some(e.to_string())),
                                    }
                                },
                                "{label}"
                            }
                        }
                    }
                }
                if let Some(msg) = error.read().as_ref() {
                    div { class: "signin-error", "{msg}" }
                }
            }
        }
    }
}

/// Main layout: topbar, sidebar, and the one active screen.
#[component]
fn MainLayout() -> Element {
    rsx! {
        div { class: "main-layout",
            Topbar {}
            div { class: "main-body",
                Sidebar {}
                div { class: "screen-host",
                    ActiveScreen {}
                }
            }
        }
    }
}

/// View composition root: the one active screen, from the navigation state.
///
/// Thin dispatch only; every screen reads its own params from the context.
#[component]
fn ActiveScreen() -> Element {
    let ctx = use_context::<AppContext>();
    let Some(view) = ctx.session.read().as_ref().map(|s| s.nav.active_view) else {
        return rsx! {};
    };

    match view {
        ViewId::Dashboard => rsx! { screens::sellers::Dashboard {} },
        ViewId::Form => rsx! { screens::sellers::SellerForm {} },
        ViewId::PropertiesList => rsx! { screens::sellers::PropertiesList {} },
        ViewId::PropertyForm => rsx! { screens::sellers::PropertyForm {} },
        ViewId::BuyerClientsList => rsx! { screens::buyers::BuyerClientsList {} },
        ViewId::BuyerClientForm => rsx! { screens::buyers::BuyerClientForm {} },
        ViewId::BuyerSearchesList => rsx! { screens::buyers::BuyerSearchesList {} },
        ViewId::BuyerSearchForm => rsx! { screens::buyers::BuyerSearchForm {} },
        ViewId::VisitsList => rsx! { screens::tracking::VisitsList {} },
        ViewId::VisitForm => rsx! { screens::tracking::VisitForm {} },
        ViewId::MyWeek => rsx! { screens::tracking::MyWeek {} },
        ViewId::Closings => rsx! { screens::tracking::Closings {} },
        ViewId::Objectives => rsx! { screens::tracking::Objectives {} },
        ViewId::Habits => rsx! { screens::tracking::Habits {} },
        ViewId::Calendar => rsx! { screens::tracking::CalendarScreen {} },
        ViewId::MetricsHome => rsx! { screens::metrics::MetricsHome {} },
        ViewId::MetricsControl => rsx! { screens::metrics::MetricsControl {} },
        ViewId::Welcome => rsx! { screens::metrics::Welcome {} },
    }
}
