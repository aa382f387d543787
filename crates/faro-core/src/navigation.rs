//! Navigation state machine — active view, its params, and the one-shot
//! return slot.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::params::{ViewParams, IS_RETURNING};
use crate::views::ViewId;

/// Where to go back to when the current screen closes and the static
/// fallback is not the desired destination.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReturnTarget {
    pub view: ViewId,
    pub params: ViewParams,
}

impl ReturnTarget {
    pub fn new(view: ViewId, params: ViewParams) -> Self {
        Self { view, params }
    }
}

/// Single source of truth for "what screen is showing and with what data".
///
/// Any view may transition to any view; the machine enforces parameter and
/// return-slot bookkeeping, not transition legality. The `return_to` slot is
/// consumed exactly once: the next [`resolve_return`](Self::resolve_return)
/// clears it before navigating.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationState {
    pub active_view: ViewId,
    pub view_params: ViewParams,
    return_to: Option<ReturnTarget>,
}

impl NavigationState {
    /// Entry state for a fresh session: the welcome screen on a first login,
    /// the metrics home otherwise.
    pub fn initial(first_login: bool) -> Self {
        let entry = if first_login {
            ViewId::Welcome
        } else {
            ViewId::MetricsHome
        };
        Self {
            active_view: entry,
            view_params: ViewParams::new(),
            return_to: None,
        }
    }

    /// Replace the active view and its params unconditionally.
    ///
    /// Does not touch the return slot; a screen that wants a non-default
    /// "back" must pair this with [`set_return_to`](Self::set_return_to).
    pub fn navigate_to(&mut self, view: ViewId, params: ViewParams) {
        debug!(from = %self.active_view, to = %view, "navigate");
        self.active_view = view;
        self.view_params = params;
    }

    /// Overwrite the return slot. Last write wins; there is no stack of
    /// remembered origins, only this one slot.
    pub fn set_return_to(&mut self, target: Option<ReturnTarget>) {
        self.return_to = target;
    }

    pub fn return_to(&self) -> Option<&ReturnTarget> {
        self.return_to.as_ref()
    }

    /// Close the current screen: consume the return slot if set, otherwise
    /// fall back to the static per-section default.
    ///
    /// A consumed target navigates with `isReturning: true` merged into its
    /// params so the restored screen can tell a return from a fresh entry.
    pub fn resolve_return(&mut self) {
        match self.return_to.take() {
            Some(target) => {
                let mut params = target.params;
                params.insert(IS_RETURNING, true);
                self.navigate_to(target.view, params);
            }
            None => {
                let fallback = default_return_view(self.active_view);
                self.navigate_to(fallback, ViewParams::new());
            }
        }
    }
}

/// Default destination when a screen closes with no return target set.
///
/// The buyer and visit rules match on the view tag as a substring so every
/// buyer-side and visit-side screen shares one entry. Soft convention: a new
/// view tag containing `buyer` or `visit` inherits these fallbacks whether or
/// not that was intended, so the policy lives here and nowhere else.
pub fn default_return_view(active: ViewId) -> ViewId {
    let tag = active.as_str();
    if active == ViewId::Form {
        ViewId::Dashboard
    } else if active == ViewId::PropertyForm {
        ViewId::PropertiesList
    } else if tag.contains("buyer") {
        ViewId::BuyerClientsList
    } else if tag.contains("visit") {
        ViewId::VisitsList
    } else {
        ViewId::MetricsHome
    }
}
