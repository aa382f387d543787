//! Global app state using Dioxus signals.

use dioxus::prelude::*;

use faro_core::{ReturnTarget, Session, ViewId, ViewParams};

use crate::bridge::TeamMember;

/// Shared app state provided via Dioxus context.
///
/// `session` is the single writer path for the navigation, menu, and
/// acting-as state; components read it and call the helpers below, never
/// mutate fields of their own.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The signed-in session, `None` while signed out.
    pub session: Signal<Option<Session>>,
    /// Accounts known to this installation, for sign-in and the team selector.
    pub team: Signal<Vec<TeamMember>>,
}

impl AppContext {
    pub fn navigate_to(mut self, view: ViewId, params: ViewParams) {
        if let Some(session) = self.session.write().as_mut() {
            session.navigate_to(view, params);
        }
    }

    pub fn set_return_to(mut self, target: Option<ReturnTarget>) {
        if let Some(session) = self.session.write().as_mut() {
            session.set_return_to(target);
        }
    }

    pub fn resolve_return(mut self) {
        if let Some(session) = self.session.write().as_mut() {
            session.resolve_return();
        }
    }

    pub fn toggle_group(mut self, group: faro_core::GroupId) {
        if let Some(session) = self.session.write().as_mut() {
            session.toggle_group(group);
        }
    }
}
