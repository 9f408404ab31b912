//! Navigation path segmentation.

/// A slash-delimited navigation path, as reported by the router.
///
/// Paths begin with `/`. The leading slash is stripped before segmentation,
/// so the root path `/` yields no segments. A trailing slash yields a
/// trailing empty-string segment; that behaviour is deliberate and pinned by
/// test (see `resolver`), callers that do not want the dangling crumb should
/// normalise before resolving.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationPath(String);

impl NavigationPath {
    /// Wrap a raw path string.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The original path string, untouched.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Ordered raw segment tokens, empty tokens preserved.
    pub fn segments(&self) -> Vec<&str> {
        let stripped = self.0.strip_prefix('/').unwrap_or(&self.0);
        if stripped.is_empty() {
            return Vec::new();
        }
        stripped.split('/').collect()
    }

    /// The original path truncated to include the segment at `index` and
    /// everything before it.
    ///
    /// Always derived from the full path string, never from the stripped
    /// tokens, so absolute URIs stay correct when a display name is
    /// overridden elsewhere.
    pub fn truncated_through(&self, index: usize) -> String {
        self.0
            .split('/')
            .take(index + 2)
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl std::fmt::Display for NavigationPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_ordered_segments() {
        let path = NavigationPath::new("/facility/123/patient/456");
        assert_eq!(path.segments(), vec!["facility", "123", "patient", "456"]);
    }

    #[test]
    fn root_path_has_no_segments() {
        assert!(NavigationPath::new("/").segments().is_empty());
    }

    #[test]
    fn trailing_slash_keeps_empty_segment() {
        let path = NavigationPath::new("/facility/");
        assert_eq!(path.segments(), vec!["facility", ""]);
    }

    #[test]
    fn truncates_through_each_segment() {
        let path = NavigationPath::new("/facility/123/patient/456");
        assert_eq!(path.truncated_through(0), "/facility");
        assert_eq!(path.truncated_through(1), "/facility/123");
        assert_eq!(path.truncated_through(2), "/facility/123/patient");
        assert_eq!(path.truncated_through(3), "/facility/123/patient/456");
    }

    #[test]
    fn truncation_past_the_end_returns_the_full_path() {
        let path = NavigationPath::new("/facility/123");
        assert_eq!(path.truncated_through(7), "/facility/123");
    }
}
