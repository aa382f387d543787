//! Faro CRM core — navigation and view-context state machine.
//!
//! Everything the desktop shell needs to decide which screen is active, what
//! parameters it receives, where "back" goes, which sidebar group is
//! expanded, and whose data a supervisory user is looking at. Pure and
//! synchronous; the UI layer wraps [`Session`] in a signal.

pub mod error;
pub mod identity;
pub mod menu;
pub mod navigation;
pub mod params;
pub mod session;
pub mod views;

pub use error::SessionError;
pub use identity::{IdentityContext, QueryScope, Role};
pub use menu::{GroupExpansion, Override};
pub use navigation::{NavigationState, ReturnTarget};
pub use params::{ParamValue, ViewParams};
pub use session::{AuthEvent, Session};
pub use views::{GroupId, ViewId};
