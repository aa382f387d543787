//! End-to-end flows over the session state machine: back-navigation,
//! acting-as selection, and sidebar expansion, driven the way the desktop
//! shell drives them.

use faro_core::params::{EDITING_CLIENT_ID, IS_RETURNING};
use faro_core::{
    GroupId, NavigationState, QueryScope, ReturnTarget, Role, Session, ViewId, ViewParams,
};

/// Every view outside the form/buyer/visit fallback rules closes to the
/// metrics home.
#[test]
fn close_without_return_target_falls_back_to_metrics_home() {
    let uncovered = [
        ViewId::Dashboard,
        ViewId::PropertiesList,
        ViewId::MyWeek,
        ViewId::Closings,
        ViewId::Objectives,
        ViewId::Habits,
        ViewId::Calendar,
        ViewId::MetricsHome,
        ViewId::MetricsControl,
        ViewId::Welcome,
    ];
    for view in uncovered {
        let mut nav = NavigationState::initial(false);
        nav.navigate_to(view, ViewParams::new());
        nav.resolve_return();
        assert_eq!(nav.active_view, ViewId::MetricsHome, "from {view}");
    }
}

#[test]
fn navigate_yields_exactly_the_supplied_view_and_params() {
    let mut nav = NavigationState::initial(true);
    let params = ViewParams::new().with(EDITING_CLIENT_ID, "c-42").with("page", 2i64);
    nav.navigate_to(ViewId::BuyerClientForm, params.clone());
    assert_eq!(nav.active_view, ViewId::BuyerClientForm);
    assert_eq!(nav.view_params, params);
}

/// Scenario A: the seller form closes to the dashboard.
#[test]
fn seller_form_closes_to_dashboard() {
    let mut nav = NavigationState::initial(false);
    nav.navigate_to(ViewId::Form, ViewParams::new());
    nav.resolve_return();
    assert_eq!(nav.active_view, ViewId::Dashboard);
    assert!(nav.view_params.is_empty());
}

/// Scenario B: a buyer search form entered from a filtered list goes back to
/// that list with the filter intact and `isReturning` set.
#[test]
fn buyer_search_form_returns_to_remembered_list() {
    let mut session = Session::new("ana", Role::Agent, false);
    session.navigate_to(ViewId::BuyerSearchesList, ViewParams::new().with("filter", "active"));
    session.set_return_to(Some(ReturnTarget::new(
        ViewId::BuyerSearchesList,
        ViewParams::new().with("filter", "active"),
    )));
    session.navigate_to(ViewId::BuyerSearchForm, ViewParams::new());

    session.resolve_return();
    assert_eq!(session.nav.active_view, ViewId::BuyerSearchesList);
    assert_eq!(session.nav.view_params.get_str("filter"), Some("active"));
    assert_eq!(session.nav.view_params.get_bool(IS_RETURNING), Some(true));

    // Closing the list again uses the buyer fallback; the slot is spent.
    session.resolve_return();
    assert_eq!(session.nav.active_view, ViewId::BuyerClientsList);
}

/// Scenario C: impersonation is rejected at the state layer for agents.
#[test]
fn agent_acting_as_change_is_rejected() {
    let mut session = Session::new("ana", Role::Agent, false);
    session.identity.set_context_user(Some("someOtherId"), false);
    assert_eq!(session.identity.acting_as_user_id(), None);
    assert!(!session.identity.acting_as_team_wide());
    assert_eq!(session.identity.effective_scope(), QueryScope::User("ana".into()));
}

/// Scenario D: the team selector round trip for a supervisory account.
#[test]
fn mother_team_selector_round_trip() {
    let mut session = Session::new("marta", Role::Mother, false);

    session.identity.view_team_wide();
    assert_eq!(session.identity.acting_as_user_id(), Some("marta"));
    assert!(session.identity.acting_as_team_wide());
    assert_eq!(session.identity.effective_scope(), QueryScope::TeamWide);

    session.identity.view_own_data();
    assert_eq!(session.identity.acting_as_user_id(), None);
    assert!(!session.identity.acting_as_team_wide());
    assert_eq!(session.identity.effective_scope(), QueryScope::User("marta".into()));
}

/// Scenario E: double-clicking the sellers header while a sellers view is
/// active ends forced-collapsed even though the derived group still matches.
#[test]
fn sellers_header_double_click_ends_collapsed() {
    let mut session = Session::new("ana", Role::Agent, false);
    session.navigate_to(ViewId::PropertiesList, ViewParams::new());

    session.toggle_group(GroupId::Sellers);
    session.toggle_group(GroupId::Sellers);
    assert_eq!(session.expanded_group(), None);
    assert_eq!(
        faro_core::GroupExpansion::derived_group(ViewId::PropertiesList),
        Some(GroupId::Sellers)
    );
}

/// A remembered origin set while deep-linking survives intermediate
/// navigation and wins over the fallback exactly once.
#[test]
fn deep_link_return_target_last_write_wins() {
    let mut session = Session::new("ana", Role::Agent, false);
    session.set_return_to(Some(ReturnTarget::new(ViewId::Dashboard, ViewParams::new())));
    session.set_return_to(Some(ReturnTarget::new(
        ViewId::VisitsList,
        ViewParams::new().with("week", 35i64),
    )));
    session.navigate_to(ViewId::VisitForm, ViewParams::new());

    session.resolve_return();
    assert_eq!(session.nav.active_view, ViewId::VisitsList);
    assert_eq!(session.nav.view_params.get_int("week"), Some(35));
}
