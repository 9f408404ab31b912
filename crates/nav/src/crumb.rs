//! Crumb resolution: display names and target locations.
//!
//! Names and URIs are resolved by two independent fallback chains over the
//! same segment index, composed into the [`Crumb`] value. Keeping the chains
//! separate means a display-name override can never move a target location.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::labels::LabelDict;
use crate::path::NavigationPath;

/// One displayed navigation entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Crumb {
    /// Display name.
    pub name: String,
    /// Absolute target location.
    pub uri: String,
}

/// Caller-supplied replacement for one segment's crumb.
///
/// Every field is optional; a missing field falls through to the default
/// resolution chain for that field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CrumbOverride {
    pub name: Option<String>,
    pub uri: Option<String>,
    pub style: Option<String>,
}

/// Overrides keyed by exact segment string.
///
/// Keys that do not occur in the path are silently ignored.
pub type OverrideMap = HashMap<String, CrumbOverride>;

/// Replace each `_` or `-` with a space and uppercase the first character of
/// every word. Locale-free.
pub fn auto_capitalise(segment: &str) -> String {
    segment
        .replace(['_', '-'], " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Resolve every segment of `path` into a crumb, in order.
pub(crate) fn resolve_crumbs(
    path: &NavigationPath,
    overrides: &OverrideMap,
    labels: &LabelDict,
) -> Vec<Crumb> {
    path.segments()
        .iter()
        .enumerate()
        .map(|(i, segment)| Crumb {
            name: overrides
                .get(*segment)
                .and_then(|o| o.name.clone())
                .or_else(|| labels.get(segment).map(str::to_owned))
                .unwrap_or_else(|| auto_capitalise(segment)),
            uri: overrides
                .get(*segment)
                .and_then(|o| o.uri.clone())
                .unwrap_or_else(|| path.truncated_through(i)),
        })
        .collect()
}
