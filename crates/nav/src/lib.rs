//! # Careflow Nav
//!
//! Breadcrumb navigation for the hospital-operations pages.
//!
//! This crate converts a slash-delimited navigation path into an ordered
//! trail of display crumbs:
//! - segment names resolve through caller overrides, a label dictionary and
//!   an auto-capitalisation fallback,
//! - target locations are always re-derived from the original path string,
//! - deep trails collapse their middle segments behind a disclosure menu.
//!
//! **No I/O concerns**: routing, data fetching and page chrome belong to the
//! embedding application. Everything here is pure, synchronous computation
//! over the inputs.

pub mod crumb;
pub mod labels;
pub mod path;
pub mod resolver;
pub mod trail;

pub use crumb::{auto_capitalise, Crumb, CrumbOverride, OverrideMap};
pub use labels::{Icon, IconDict, LabelDict};
pub use path::NavigationPath;
pub use resolver::BreadcrumbResolver;
pub use trail::{CurrentPage, MenuEntry, Overflow, Trail};
