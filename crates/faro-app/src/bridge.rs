//! Auth bridge — local account provider feeding the session state machine.
//!
//! Honors the collaborator contract of the core: it emits exactly two event
//! kinds, signed-in and signed-out, and tracks the per-account first-login
//! marker that picks the session's entry view.

use std::path::PathBuf;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use faro_core::{AuthEvent, Role, SessionError};

/// Data directory override set from the CLI.
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

pub fn set_data_dir(dir: PathBuf) {
    DATA_DIR.set(dir).ok();
}

/// Platform-specific data directory for profile persistence.
pub fn data_dir() -> PathBuf {
    if let Some(dir) = DATA_DIR.get() {
        return dir.clone();
    }
    if let Ok(dir) = std::env::var("FARO_DATA_DIR") {
        return PathBuf::from(dir);
    }
    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join("Library/Application Support/faro");
        }
    }
    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("faro");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".local/share/faro");
        }
    }
    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("faro");
        }
    }
    PathBuf::from(".").join("faro")
}

/// One account in the team directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub user_id: String,
    pub display_name: String,
    pub role: Role,
}

/// Accounts known to this installation.
///
/// Read from `team.json` under the data dir when present; otherwise the
/// built-in demo team so the app is usable out of the box.
pub fn team_directory() -> Vec<TeamMember> {
    let path = data_dir().join("team.json");
    if let Ok(raw) = std::fs::read_to_string(&path) {
        match serde_json::from_str(&raw) {
            Ok(members) => return members,
            Err(e) => {
                tracing::warn!(?path, "ignoring corrupt team.json: {e}");
            }
        }
    }
    vec![
        TeamMember {
            user_id: "marta".into(),
            display_name: "Marta (responsable)".into(),
            role: Role::Mother,
        },
        TeamMember {
            user_id: "ana".into(),
            display_name: "Ana".into(),
            role: Role::Agent,
        },
        TeamMember {
            user_id: "luis".into(),
            display_name: "Luis".into(),
            role: Role::Agent,
        },
    ]
}

/// Per-account profile marker persisted across sign-ins.
#[derive(Debug, Serialize, Deserialize)]
struct ProfileMarker {
    first_signed_in: DateTime<Utc>,
    last_signed_in: DateTime<Utc>,
}

fn profile_path(user_id: &str) -> PathBuf {
    data_dir().join("profiles").join(format!("{user_id}.json"))
}

/// Sign an account in: update its profile marker and produce the signed-in
/// event for the session slot. First login is "no marker on disk yet".
pub fn sign_in(user_id: &str) -> Result<AuthEvent, SessionError> {
    let member = team_directory()
        .into_iter()
        .find(|m| m.user_id == user_id)
        .ok_or_else(|| SessionError::UnknownAccount(user_id.to_string()))?;

    let path = profile_path(user_id);
    let now = Utc::now();
    let (first_login, marker) = match std::fs::read_to_string(&path) {
        Ok(raw) => {
            let mut marker: ProfileMarker = serde_json::from_str(&raw)?;
            marker.last_signed_in = now;
            (false, marker)
        }
        Err(_) => (
            true,
            ProfileMarker {
                first_signed_in: now,
                last_signed_in: now,
            },
        ),
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, serde_json::to_string_pretty(&marker)?)?;

    info!(user = %member.user_id, first_login, "bridge sign-in");
    Ok(AuthEvent::SignedIn {
        user_id: member.user_id,
        role: member.role,
        first_login,
    })
}

pub fn sign_out() -> AuthEvent {
    AuthEvent::SignedOut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_account_is_rejected() {
        // Fails on the directory lookup, before any disk access.
        let err = sign_in("nobody").unwrap_err();
        assert!(matches!(err, SessionError::UnknownAccount(_)));
    }

    #[test]
    fn test_first_login_only_once() {
        let dir = std::env::temp_dir().join(format!("faro-test-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::env::set_var("FARO_DATA_DIR", &dir);

        let first = sign_in("ana").unwrap();
        assert_eq!(
            first,
            AuthEvent::SignedIn {
                user_id: "ana".into(),
                role: Role::Agent,
                first_login: true,
            }
        );

        let second = sign_in("ana").unwrap();
        assert!(matches!(
            second,
            AuthEvent::SignedIn { first_login: false, .. }
        ));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
