//! Identity and acting-as context — whose data is the session looking at.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Account role. `Mother` is the supervisory team-lead role; only it may
/// view a team member's data or the team-wide aggregate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Mother,
    Agent,
}

/// The subject a data query runs against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryScope {
    /// Aggregate over every team member.
    TeamWide,
    /// A single user's records.
    User(String),
}

/// Authenticated identity plus the optional acting-as override layered on
/// top of it.
#[derive(Clone, Debug, PartialEq)]
pub struct IdentityContext {
    pub user_id: String,
    pub role: Role,
    acting_as_user_id: Option<String>,
    acting_as_team_wide: bool,
}

impl IdentityContext {
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
            acting_as_user_id: None,
            acting_as_team_wide: false,
        }
    }

    pub fn acting_as_user_id(&self) -> Option<&str> {
        self.acting_as_user_id.as_deref()
    }

    pub fn acting_as_team_wide(&self) -> bool {
        self.acting_as_team_wide
    }

    /// Set the acting-as override. `None` resets to viewing own data.
    ///
    /// Guarded at this layer, not just in the UI: a non-supervisory caller is
    /// a logged no-op, so a stray call site can never grant impersonation.
    pub fn set_context_user(&mut self, user_id: Option<&str>, team_wide: bool) {
        if self.role != Role::Mother {
            warn!(user = %self.user_id, "ignoring acting-as change for non-supervisory role");
            return;
        }
        debug!(user = %self.user_id, acting_as = ?user_id, team_wide, "acting-as change");
        self.acting_as_user_id = user_id.map(str::to_string);
        self.acting_as_team_wide = team_wide;
    }

    /// Selector entry "Mis Datos (Personal)".
    pub fn view_own_data(&mut self) {
        self.set_context_user(None, false);
    }

    /// Selector entry "Resumen Equipo (Global)".
    pub fn view_team_wide(&mut self) {
        let own = self.user_id.clone();
        self.set_context_user(Some(&own), true);
    }

    /// Selector entry for a specific team member.
    pub fn view_member(&mut self, member_id: &str) {
        self.set_context_user(Some(member_id), false);
    }

    /// The effective subject every downstream query must use:
    /// team-wide if the flag is set, else the acting-as user, else the
    /// authenticated user. This is the one resolution rule that keeps
    /// personal, single-member, and aggregate dashboards on a single path.
    pub fn effective_scope(&self) -> QueryScope {
        if self.acting_as_team_wide {
            QueryScope::TeamWide
        } else {
            let subject = self
                .acting_as_user_id
                .clone()
                .unwrap_or_else(|| self.user_id.clone());
            QueryScope::User(subject)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scope_is_own_data() {
        let ctx = IdentityContext::new("ana", Role::Agent);
        assert_eq!(ctx.effective_scope(), QueryScope::User("ana".into()));
    }

    #[test]
    fn test_agent_cannot_impersonate() {
        let mut ctx = IdentityContext::new("ana", Role::Agent);
        let before = ctx.clone();
        ctx.set_context_user(Some("someOtherId"), false);
        assert_eq!(ctx, before);
    }

    #[test]
    fn test_mother_selector_mapping() {
        let mut ctx = IdentityContext::new("marta", Role::Mother);

        ctx.view_team_wide();
        assert_eq!(ctx.acting_as_user_id(), Some("marta"));
        assert!(ctx.acting_as_team_wide());
        assert_eq!(ctx.effective_scope(), QueryScope::TeamWide);

        ctx.view_member("luis");
        assert_eq!(ctx.effective_scope(), QueryScope::User("luis".into()));

        ctx.view_own_data();
        assert_eq!(ctx.acting_as_user_id(), None);
        assert!(!ctx.acting_as_team_wide());
        assert_eq!(ctx.effective_scope(), QueryScope::User("marta".into()));
    }
}
