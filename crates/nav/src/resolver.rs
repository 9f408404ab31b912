//! The breadcrumb resolver.

use crate::crumb::{resolve_crumbs, Crumb, OverrideMap};
use crate::labels::{IconDict, LabelDict};
use crate::path::NavigationPath;
use crate::trail::{layout, Trail};

/// Converts a navigation path into an ordered trail of display crumbs.
///
/// The label and icon dictionaries are injected at construction so the
/// resolver carries no hidden global state and is independently testable.
/// `Default` uses the compiled-in hospital vocabulary.
///
/// Resolution is a pure function of its inputs: the same `(path, overrides)`
/// pair always yields the same trail, and there are no error conditions — a
/// missing or malformed path degrades to an empty trail.
#[derive(Clone, Debug)]
pub struct BreadcrumbResolver {
    labels: LabelDict,
    icons: IconDict,
}

impl Default for BreadcrumbResolver {
    fn default() -> Self {
        Self::new(LabelDict::hospital(), IconDict::hospital())
    }
}

impl BreadcrumbResolver {
    /// Create a resolver over the given dictionaries.
    pub fn new(labels: LabelDict, icons: IconDict) -> Self {
        Self { labels, icons }
    }

    /// Resolve the ordered crumb sequence for `path`.
    ///
    /// A missing path resolves to no crumbs. Override keys that do not occur
    /// in the path are ignored.
    pub fn resolve(&self, path: Option<&str>, overrides: &OverrideMap) -> Vec<Crumb> {
        let Some(path) = path else {
            return Vec::new();
        };
        let path = NavigationPath::new(path);
        resolve_crumbs(&path, overrides, &self.labels)
    }

    /// Resolve crumbs and apply the overflow-collapse policy.
    pub fn trail(&self, path: Option<&str>, overrides: &OverrideMap) -> Trail {
        layout(self.resolve(path, overrides), &self.icons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crumb::CrumbOverride;

    fn overrides(entries: &[(&str, Option<&str>, Option<&str>)]) -> OverrideMap {
        entries
            .iter()
            .map(|(key, name, uri)| {
                (
                    key.to_string(),
                    CrumbOverride {
                        name: name.map(str::to_owned),
                        uri: uri.map(str::to_owned),
                        style: None,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn one_crumb_per_segment_with_truncated_uris() {
        let resolver = BreadcrumbResolver::default();
        let crumbs = resolver.resolve(Some("/facility/123/patient/456"), &OverrideMap::new());

        assert_eq!(crumbs.len(), 4);
        assert_eq!(crumbs[0], Crumb { name: "Facilities".into(), uri: "/facility".into() });
        assert_eq!(crumbs[1], Crumb { name: "123".into(), uri: "/facility/123".into() });
        assert_eq!(crumbs[2], Crumb { name: "Patients".into(), uri: "/facility/123/patient".into() });
        assert_eq!(crumbs[3], Crumb { name: "456".into(), uri: "/facility/123/patient/456".into() });
    }

    #[test]
    fn missing_path_resolves_to_empty_trail() {
        let trail = BreadcrumbResolver::default().trail(None, &OverrideMap::new());
        assert!(trail.crumbs.is_empty());
        assert!(trail.overflow.is_none());
    }

    #[test]
    fn root_path_resolves_to_empty_trail() {
        let trail = BreadcrumbResolver::default().trail(Some("/"), &OverrideMap::new());
        assert!(trail.crumbs.is_empty());
        assert!(trail.overflow.is_none());
    }

    #[test]
    fn name_override_leaves_uri_untouched() {
        let resolver = BreadcrumbResolver::default();
        let crumbs = resolver.resolve(
            Some("/facility/123/patient/456"),
            &overrides(&[("facility", Some("Hospitals"), None)]),
        );

        assert_eq!(crumbs[0].name, "Hospitals");
        assert_eq!(crumbs[0].uri, "/facility");
        // the other crumbs are unaffected
        assert_eq!(crumbs[2].name, "Patients");
    }

    #[test]
    fn uri_override_replaces_the_target_location() {
        let resolver = BreadcrumbResolver::default();
        let crumbs = resolver.resolve(
            Some("/facility/123"),
            &overrides(&[("123", None, Some("/facility/123/overview"))]),
        );
        assert_eq!(crumbs[1].uri, "/facility/123/overview");
        assert_eq!(crumbs[1].name, "123");
    }

    #[test]
    fn unmatched_override_keys_are_ignored() {
        let resolver = BreadcrumbResolver::default();
        let with = resolver.resolve(
            Some("/facility/123"),
            &overrides(&[("consultation", Some("Consultations"), None)]),
        );
        let without = resolver.resolve(Some("/facility/123"), &OverrideMap::new());
        assert_eq!(with, without);
    }

    #[test]
    fn unknown_segments_auto_capitalise() {
        let resolver = BreadcrumbResolver::default();
        let crumbs = resolver.resolve(Some("/daily-rounds/notice_board"), &OverrideMap::new());
        assert_eq!(crumbs[0].name, "Daily Rounds");
        assert_eq!(crumbs[1].name, "Notice Board");
    }

    #[test]
    fn resolution_is_idempotent() {
        let resolver = BreadcrumbResolver::default();
        let overrides = overrides(&[("facility", Some("Hospitals"), None)]);
        let first = resolver.trail(Some("/facility/123/patient/456"), &overrides);
        let second = resolver.trail(Some("/facility/123/patient/456"), &overrides);
        assert_eq!(first, second);
    }

    #[test]
    fn overflow_menu_holds_all_but_first_and_last() {
        for depth in 3..7usize {
            let segments: Vec<String> = (0..depth).map(|i| format!("s{i}")).collect();
            let path = format!("/{}", segments.join("/"));

            let trail = BreadcrumbResolver::default().trail(Some(&path), &OverrideMap::new());
            assert_eq!(trail.crumbs.len(), depth);
            let overflow = trail.overflow.expect("deep trails collapse");
            assert_eq!(overflow.menu.len(), depth - 2);
        }
    }

    #[test]
    fn shallow_trails_never_collapse() {
        let resolver = BreadcrumbResolver::default();
        for path in ["/facility", "/facility/123"] {
            let trail = resolver.trail(Some(path), &OverrideMap::new());
            assert!(trail.overflow.is_none(), "{path} must not collapse");
        }
    }

    #[test]
    fn long_final_crumb_gets_a_narrow_name() {
        let trail = BreadcrumbResolver::default().trail(
            Some("/facility/123/patient/venkatanarasimha"),
            &OverrideMap::new(),
        );
        let current = trail.overflow.unwrap().current;
        assert_eq!(current.name, "Venkatanarasimha");
        assert_eq!(current.narrow_name, "Venkatanar...");
    }

    // A trailing slash produces a trailing empty-string crumb whose name is
    // empty. Whether that dangling crumb is intended upstream is unresolved;
    // this test pins the literal behaviour rather than silently fixing it.
    #[test]
    fn trailing_slash_yields_a_dangling_empty_crumb() {
        let resolver = BreadcrumbResolver::default();
        let crumbs = resolver.resolve(Some("/facility/123/"), &OverrideMap::new());

        assert_eq!(crumbs.len(), 3);
        assert_eq!(crumbs[2].name, "");
        assert_eq!(crumbs[2].uri, "/facility/123/");
    }

    #[test]
    fn every_crumb_has_a_non_empty_uri() {
        let resolver = BreadcrumbResolver::default();
        for path in ["/shifting", "/facility/9/patient/2/consultation/7", "/a/b/"] {
            for crumb in resolver.resolve(Some(path), &OverrideMap::new()) {
                assert!(!crumb.uri.is_empty(), "crumb in {path} lost its uri");
            }
        }
    }
}
