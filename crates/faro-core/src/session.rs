//! Session — identity, navigation, and menu state for one signed-in user.

use tracing::info;

use crate::identity::{IdentityContext, Role};
use crate::menu::GroupExpansion;
use crate::navigation::{NavigationState, ReturnTarget};
use crate::params::ViewParams;
use crate::views::{GroupId, ViewId};

/// Auth collaborator events. Exactly two kinds ever arrive.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthEvent {
    SignedIn {
        user_id: String,
        role: Role,
        first_login: bool,
    },
    SignedOut,
}

/// Everything that lives for the duration of one sign-in.
///
/// The app layer holds `Signal<Option<Session>>`; `None` is the signed-out
/// state. All mutation goes through these delegating operations so every
/// screen observes one atomic state change per UI event.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub identity: IdentityContext,
    pub nav: NavigationState,
    pub expansion: GroupExpansion,
}

impl Session {
    pub fn new(user_id: impl Into<String>, role: Role, first_login: bool) -> Self {
        Self {
            identity: IdentityContext::new(user_id, role),
            nav: NavigationState::initial(first_login),
            expansion: GroupExpansion::new(),
        }
    }

    /// Apply an auth event to the optional session slot.
    ///
    /// Signed-in replaces whatever was there with a fresh session (entry view
    /// per first-login status, acting-as cleared); signed-out clears it
    /// entirely.
    pub fn handle_auth_event(slot: &mut Option<Session>, event: AuthEvent) {
        match event {
            AuthEvent::SignedIn {
                user_id,
                role,
                first_login,
            } => {
                info!(user = %user_id, ?role, first_login, "signed in");
                *slot = Some(Session::new(user_id, role, first_login));
            }
            AuthEvent::SignedOut => {
                info!("signed out");
                *slot = None;
            }
        }
    }

    pub fn navigate_to(&mut self, view: ViewId, params: ViewParams) {
        self.nav.navigate_to(view, params);
    }

    pub fn set_return_to(&mut self, target: Option<ReturnTarget>) {
        self.nav.set_return_to(target);
    }

    pub fn resolve_return(&mut self) {
        self.nav.resolve_return();
    }

    pub fn toggle_group(&mut self, group: GroupId) {
        self.expansion.toggle(group, self.nav.active_view);
    }

    /// The group to render expanded for the current view.
    pub fn expanded_group(&self) -> Option<GroupId> {
        self.expansion.effective(self.nav.active_view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_resets_navigation_and_identity() {
        let mut slot = None;
        Session::handle_auth_event(
            &mut slot,
            AuthEvent::SignedIn {
                user_id: "marta".into(),
                role: Role::Mother,
                first_login: false,
            },
        );
        let session = slot.as_mut().unwrap();
        assert_eq!(session.nav.active_view, ViewId::MetricsHome);
        session.identity.view_team_wide();
        session.navigate_to(ViewId::Closings, ViewParams::new());

        // A different account signing in starts clean.
        Session::handle_auth_event(
            &mut slot,
            AuthEvent::SignedIn {
                user_id: "luis".into(),
                role: Role::Agent,
                first_login: true,
            },
        );
        let session = slot.as_ref().unwrap();
        assert_eq!(session.nav.active_view, ViewId::Welcome);
        assert_eq!(session.identity.acting_as_user_id(), None);
        assert!(!session.identity.acting_as_team_wide());
    }

    #[test]
    fn test_sign_out_clears_everything() {
        let mut slot = Some(Session::new("marta", Role::Mother, false));
        Session::handle_auth_event(&mut slot, AuthEvent::SignedOut);
        assert!(slot.is_none());
    }

    #[test]
    fn test_toggle_group_uses_current_view() {
        let mut session = Session::new("ana", Role::Agent, false);
        session.navigate_to(ViewId::VisitsList, ViewParams::new());
        assert_eq!(session.expanded_group(), Some(GroupId::Tracking));
        session.toggle_group(GroupId::Tracking);
        assert_eq!(session.expanded_group(), None);
    }
}
