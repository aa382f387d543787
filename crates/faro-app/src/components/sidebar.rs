//! Sidebar — grouped navigation menu with collapsible sections.

use dioxus::prelude::*;

use faro_core::{GroupId, ViewParams};

use crate::state::AppContext;

/// Sidebar with the four workflow groups.
#[component]
pub fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();
    let (active_view, expanded) = {
        let session = ctx.session.read();
        let Some(session) = session.as_ref() else {
            return rsx! {};
        };
        (session.nav.active_view, session.expanded_group())
    };

    rsx! {
        div { class: "sidebar",
            for group in GroupId::all().iter() {
                {
                    let group = *group;
                    let is_open = expanded == Some(group);
                    let header_class = if is_open {
                        "sidebar-group-header open"
                    } else {
                        "sidebar-group-header"
                    };
                    let header_label = group.display_name();
                    rsx! {
                        div {
                            class: "{header_class}",
                            key: "{group}",
                            onclick: move |_| ctx.toggle_group(group),
                            "{header_label}"
                        }
                        if is_open {
                            for view in group.views().iter() {
                                {
                                    let view = *view;
                                    let row_class = if view == active_view {
                                        "sidebar-item active"
                                    } else {
                                        "sidebar-item"
                                    };
                                    let row_label = view.display_name();
                                    rsx! {
                                        div {
                                            class: "{row_class}",
                                            key: "{view}",
                                            onclick: move |_| {
                                                ctx.navigate_to(view, ViewParams::new())
                                            },
                                            "{row_label}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
