//! Group expansion resolver — which sidebar section is open.

use crate::views::{GroupId, ViewId};

/// A manual choice made by clicking a group header.
///
/// Tri-state on purpose: `None` at the [`GroupExpansion`] level means "no
/// manual choice yet, follow the active view", while `Collapsed` records an
/// explicit "close everything" click and survives navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Override {
    Collapsed,
    Group(GroupId),
}

/// Expansion state of the sidebar's four groups.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupExpansion {
    manual_override: Option<Override>,
}

impl GroupExpansion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn manual_override(&self) -> Option<Override> {
        self.manual_override
    }

    /// Group containing the active view, checked in the fixed sidebar order.
    pub fn derived_group(active_view: ViewId) -> Option<GroupId> {
        GroupId::all()
            .iter()
            .copied()
            .find(|g| Some(*g) == active_view.group())
    }

    /// The group to render expanded: the manual override when one exists,
    /// the derived group otherwise.
    pub fn effective(&self, active_view: ViewId) -> Option<GroupId> {
        match self.manual_override {
            Some(Override::Collapsed) => None,
            Some(Override::Group(g)) => Some(g),
            None => Self::derived_group(active_view),
        }
    }

    /// Header click: collapse the group that is already open, open any other.
    ///
    /// The click handler resolves "already open" with a fallback to the
    /// derived group even under a forced collapse, so repeated clicks on the
    /// active view's own section keep it collapsed rather than reopening it.
    /// Navigation never clears the override either; a user who collapsed the
    /// section holding the active view keeps it collapsed until they open a
    /// different one.
    pub fn toggle(&mut self, group: GroupId, active_view: ViewId) {
        let open = match self.manual_override {
            Some(Override::Group(g)) => Some(g),
            Some(Override::Collapsed) | None => Self::derived_group(active_view),
        };
        if open == Some(group) {
            self.manual_override = Some(Override::Collapsed);
        } else {
            self.manual_override = Some(Override::Group(group));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_follows_active_view() {
        let exp = GroupExpansion::new();
        assert_eq!(exp.effective(ViewId::PropertiesList), Some(GroupId::Sellers));
        assert_eq!(exp.effective(ViewId::BuyerSearchForm), Some(GroupId::Buyers));
        assert_eq!(exp.effective(ViewId::Welcome), None);
    }

    #[test]
    fn test_toggle_other_group_overrides_derived() {
        let mut exp = GroupExpansion::new();
        exp.toggle(GroupId::Metrics, ViewId::PropertiesList);
        assert_eq!(exp.effective(ViewId::PropertiesList), Some(GroupId::Metrics));
    }

    #[test]
    fn test_double_click_on_derived_group_stays_collapsed() {
        let mut exp = GroupExpansion::new();
        // Sellers is open via the active view; the first click collapses it
        // and the second still resolves sellers as "open" (derived), so it
        // collapses again rather than reopening.
        exp.toggle(GroupId::Sellers, ViewId::PropertiesList);
        assert_eq!(exp.effective(ViewId::PropertiesList), None);
        assert_eq!(exp.manual_override(), Some(Override::Collapsed));
        exp.toggle(GroupId::Sellers, ViewId::PropertiesList);
        assert_eq!(exp.effective(ViewId::PropertiesList), None);
        assert_eq!(exp.manual_override(), Some(Override::Collapsed));
    }

    #[test]
    fn test_other_group_toggles_open_and_closed() {
        let mut exp = GroupExpansion::new();
        exp.toggle(GroupId::Metrics, ViewId::PropertiesList);
        assert_eq!(exp.effective(ViewId::PropertiesList), Some(GroupId::Metrics));
        exp.toggle(GroupId::Metrics, ViewId::PropertiesList);
        assert_eq!(exp.effective(ViewId::PropertiesList), None);
    }

    #[test]
    fn test_override_survives_navigation() {
        let mut exp = GroupExpansion::new();
        exp.toggle(GroupId::Sellers, ViewId::PropertiesList);
        // User collapsed sellers, then navigates within it; still collapsed.
        assert_eq!(exp.effective(ViewId::Dashboard), None);
        // And a move into another section does not resurrect the derived value.
        assert_eq!(exp.effective(ViewId::VisitsList), None);
    }
}
