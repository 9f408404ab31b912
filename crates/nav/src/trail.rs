//! Trail layout: overflow collapse and current-page truncation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::crumb::Crumb;
use crate::labels::{Icon, IconDict};

/// Maximum characters of the current-page name shown on narrow layouts.
///
/// Callers rely on a stable truncation point for layout testing, so this is
/// part of the declared contract rather than a styling detail.
const NARROW_NAME_LIMIT: usize = 10;

/// One entry of the collapse menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MenuEntry {
    pub crumb: Crumb,
    /// Decoration for the entry, if its name has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

/// The final crumb, rendered as the current-page indicator of a deep trail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CurrentPage {
    /// Full display name, for wide layouts.
    pub name: String,
    /// Display name truncated to ten characters plus an ellipsis, for narrow
    /// layouts. Equal to `name` when nothing was cut.
    pub narrow_name: String,
    pub uri: String,
}

/// Rendering directive for a trail deeper than two crumbs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Overflow {
    /// Everything but the first and last crumb, in path order.
    pub menu: Vec<MenuEntry>,
    pub current: CurrentPage,
}

/// A resolved breadcrumb trail.
///
/// `crumbs` always carries the full ordered sequence. `overflow` is present
/// exactly when the trail is deeper than two crumbs; shallow trails render
/// every crumb inline after the Home link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Trail {
    pub crumbs: Vec<Crumb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<Overflow>,
}

pub(crate) fn narrow_name(name: &str) -> String {
    if name.chars().count() > NARROW_NAME_LIMIT {
        let head: String = name.chars().take(NARROW_NAME_LIMIT).collect();
        format!("{head}...")
    } else {
        name.to_owned()
    }
}

/// Apply the overflow-collapse policy to a resolved crumb sequence.
pub(crate) fn layout(crumbs: Vec<Crumb>, icons: &IconDict) -> Trail {
    if crumbs.len() <= 2 {
        return Trail {
            crumbs,
            overflow: None,
        };
    }

    let menu = crumbs[1..crumbs.len() - 1]
        .iter()
        .map(|crumb| MenuEntry {
            icon: icons.get(&crumb.name),
            crumb: crumb.clone(),
        })
        .collect();

    let last = &crumbs[crumbs.len() - 1];
    let current = CurrentPage {
        name: last.name.clone(),
        narrow_name: narrow_name(&last.name),
        uri: last.uri.clone(),
    };

    Trail {
        crumbs,
        overflow: Some(Overflow { menu, current }),
    }
}
