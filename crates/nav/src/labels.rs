//! Static display dictionaries for navigation segments.
//!
//! Both dictionaries are plain read-only data injected into the resolver at
//! construction. The `hospital()` constructors carry the compiled-in
//! vocabulary of the hospital-operations pages; embedding applications can
//! build their own.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Decorative icon shown next to selected collapse-menu entries.
///
/// Matching is by exact crumb name; an absent match renders no icon. This is
/// a cosmetic side table, it plays no part in crumb resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Hospital,
    File,
}

/// Segment-key → display-label dictionary.
#[derive(Clone, Debug, Default)]
pub struct LabelDict(HashMap<String, String>);

impl LabelDict {
    /// Build a dictionary from `(segment, label)` pairs.
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Look up the label for a segment key.
    pub fn get(&self, segment: &str) -> Option<&str> {
        self.0.get(segment).map(String::as_str)
    }

    /// The hospital navigation vocabulary.
    pub fn hospital() -> Self {
        Self::new([
            ("facility", "Facilities"),
            ("patient", "Patients"),
            ("patients", "Patients"),
            ("assets", "Assets"),
            ("sample", "Sample Tests"),
            ("shifting", "Shiftings"),
            ("resource", "Resources"),
            ("users", "Users"),
            ("notice_board", "Notice Board"),
        ])
    }
}

/// Crumb-name → icon dictionary.
#[derive(Clone, Debug, Default)]
pub struct IconDict(HashMap<String, Icon>);

impl IconDict {
    /// Build a dictionary from `(crumb name, icon)` pairs.
    pub fn new<K>(entries: impl IntoIterator<Item = (K, Icon)>) -> Self
    where
        K: Into<String>,
    {
        Self(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Look up the icon for an exact crumb name.
    pub fn get(&self, name: &str) -> Option<Icon> {
        self.0.get(name).copied()
    }

    /// The hospital icon decorations.
    pub fn hospital() -> Self {
        Self::new([("Critical Care", Icon::Hospital), ("Assets", Icon::File)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hospital_vocabulary_covers_the_menu_segments() {
        let labels = LabelDict::hospital();
        assert_eq!(labels.get("facility"), Some("Facilities"));
        assert_eq!(labels.get("shifting"), Some("Shiftings"));
        assert_eq!(labels.get("notice_board"), Some("Notice Board"));
        assert_eq!(labels.get("unknown_segment"), None);
    }

    #[test]
    fn icons_match_on_exact_name_only() {
        let icons = IconDict::hospital();
        assert_eq!(icons.get("Critical Care"), Some(Icon::Hospital));
        assert_eq!(icons.get("critical care"), None);
    }
}
