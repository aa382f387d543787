//! View registry — the closed set of screens and their sidebar groups.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one top-level screen of the app.
///
/// Closed set: adding a screen means adding a variant here and wiring it into
/// [`ViewId::group`] and the composition root. The kebab-case tag returned by
/// [`ViewId::as_str`] is the stable name screens and logs refer to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewId {
    Dashboard,
    /// The seller intake form. Historical tag is plain `form`.
    Form,
    PropertiesList,
    PropertyForm,
    BuyerClientsList,
    BuyerClientForm,
    BuyerSearchesList,
    BuyerSearchForm,
    VisitsList,
    VisitForm,
    MyWeek,
    Closings,
    Objectives,
    Habits,
    Calendar,
    MetricsHome,
    MetricsControl,
    Welcome,
}

impl ViewId {
    /// Stable kebab-case tag for this view.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "dashboard",
            ViewId::Form => "form",
            ViewId::PropertiesList => "properties-list",
            ViewId::PropertyForm => "property-form",
            ViewId::BuyerClientsList => "buyer-clients-list",
            ViewId::BuyerClientForm => "buyer-client-form",
            ViewId::BuyerSearchesList => "buyer-searches-list",
            ViewId::BuyerSearchForm => "buyer-search-form",
            ViewId::VisitsList => "visits-list",
            ViewId::VisitForm => "visit-form",
            ViewId::MyWeek => "my-week",
            ViewId::Closings => "closings",
            ViewId::Objectives => "objectives",
            ViewId::Habits => "habits",
            ViewId::Calendar => "calendar",
            ViewId::MetricsHome => "metrics-home",
            ViewId::MetricsControl => "metrics-control",
            ViewId::Welcome => "welcome",
        }
    }

    /// Human-readable label for sidebar rows and window titles.
    pub fn display_name(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "Panel Vendedores",
            ViewId::Form => "Nuevo Vendedor",
            ViewId::PropertiesList => "Propiedades",
            ViewId::PropertyForm => "Ficha Propiedad",
            ViewId::BuyerClientsList => "Compradores",
            ViewId::BuyerClientForm => "Ficha Comprador",
            ViewId::BuyerSearchesList => "Búsquedas",
            ViewId::BuyerSearchForm => "Ficha Búsqueda",
            ViewId::VisitsList => "Visitas",
            ViewId::VisitForm => "Ficha Visita",
            ViewId::MyWeek => "Mi Semana",
            ViewId::Closings => "Cierres",
            ViewId::Objectives => "Objetivos",
            ViewId::Habits => "Hábitos",
            ViewId::Calendar => "Calendario",
            ViewId::MetricsHome => "Métricas",
            ViewId::MetricsControl => "Control de Métricas",
            ViewId::Welcome => "Bienvenida",
        }
    }

    /// Sidebar group this view belongs to, if any.
    ///
    /// Exhaustive but not a partition of all screens: `Welcome` and
    /// `Calendar` live outside every group and yield `None` (no group
    /// expanded while they are active).
    pub fn group(&self) -> Option<GroupId> {
        match self {
            ViewId::Dashboard | ViewId::Form | ViewId::PropertiesList | ViewId::PropertyForm => {
                Some(GroupId::Sellers)
            }
            ViewId::BuyerClientsList
            | ViewId::BuyerClientForm
            | ViewId::BuyerSearchesList
            | ViewId::BuyerSearchForm => Some(GroupId::Buyers),
            ViewId::VisitsList
            | ViewId::VisitForm
            | ViewId::MyWeek
            | ViewId::Closings
            | ViewId::Objectives
            | ViewId::Habits => Some(GroupId::Tracking),
            ViewId::MetricsHome | ViewId::MetricsControl => Some(GroupId::Metrics),
            ViewId::Welcome | ViewId::Calendar => None,
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cluster of related views presented as one collapsible sidebar section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupId {
    Sellers,
    Buyers,
    Tracking,
    Metrics,
}

impl GroupId {
    /// All groups in the fixed order the resolver and the sidebar use.
    pub fn all() -> &'static [GroupId] {
        &[
            GroupId::Sellers,
            GroupId::Buyers,
            GroupId::Tracking,
            GroupId::Metrics,
        ]
    }

    /// Section header label.
    pub fn display_name(&self) -> &'static str {
        match self {
            GroupId::Sellers => "Vendedores",
            GroupId::Buyers => "Compradores",
            GroupId::Tracking => "Seguimiento",
            GroupId::Metrics => "Métricas",
        }
    }

    /// Views listed under this group's header, in sidebar order.
    ///
    /// Only the screens a user navigates to directly; form screens are
    /// reached from their lists and carry no sidebar row, but still resolve
    /// to the group via [`ViewId::group`].
    pub fn views(&self) -> &'static [ViewId] {
        match self {
            GroupId::Sellers => &[ViewId::Dashboard, ViewId::Form, ViewId::PropertiesList],
            GroupId::Buyers => &[ViewId::BuyerClientsList, ViewId::BuyerSearchesList],
            GroupId::Tracking => &[
                ViewId::VisitsList,
                ViewId::MyWeek,
                ViewId::Closings,
                ViewId::Objectives,
                ViewId::Habits,
            ],
            GroupId::Metrics => &[ViewId::MetricsHome, ViewId::MetricsControl],
        }
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            GroupId::Sellers => "sellers",
            GroupId::Buyers => "buyers",
            GroupId::Tracking => "tracking",
            GroupId::Metrics => "metrics",
        };
        f.write_str(tag)
    }
}
