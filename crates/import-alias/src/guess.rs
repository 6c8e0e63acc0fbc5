//! Candidate aliases derived from an import path alone.
//!
//! Nothing in here knows which aliases a file already uses; the registry
//! walks the candidates and decides which one wins.

/// Alias used when a path yields no identifier characters at all.
pub const FALLBACK_ALIAS: &str = "pkg";

/// An import path split into its non-empty `/`-separated segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPath<'a> {
    segments: Vec<&'a str>,
}

impl<'a> ImportPath<'a> {
    pub fn parse(path: &'a str) -> Self {
        Self {
            segments: path.split('/').filter(|s| !s.is_empty()).collect(),
        }
    }

    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// Number of segments, i.e. the highest escalation level.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Concatenation of the last `level` segments, each sanitized on its own.
    ///
    /// Levels past [`depth`](Self::depth) are clamped to the whole path. The
    /// result may be empty when every selected segment is digits or symbols.
    pub fn candidate(&self, level: usize) -> String {
        let start = self.segments.len().saturating_sub(level);
        self.segments[start..]
            .iter()
            .map(|segment| sanitize_segment(segment))
            .collect()
    }

    /// Lazily yields `(level, candidate)` for levels `1..=depth`.
    pub fn candidates(&self) -> Candidates<'_, 'a> {
        Candidates {
            path: self,
            level: 1,
        }
    }
}

/// Iterator returned by [`ImportPath::candidates`].
#[derive(Debug, Clone)]
pub struct Candidates<'p, 'a> {
    path: &'p ImportPath<'a>,
    level: usize,
}

impl Iterator for Candidates<'_, '_> {
    type Item = (usize, String);

    fn next(&mut self) -> Option<Self::Item> {
        if self.level > self.path.depth() {
            return None;
        }
        let level = self.level;
        self.level += 1;
        Some((level, self.path.candidate(level)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.path.depth() + 1).saturating_sub(self.level);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Candidates<'_, '_> {}

/// Lower-cases `segment`, keeps ASCII letters and digits only, then strips
/// leading digits so the result can start an identifier.
pub fn sanitize_segment(segment: &str) -> String {
    let cleaned: String = segment
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect();
    cleaned
        .trim_start_matches(|ch: char| ch.is_ascii_digit())
        .to_string()
}

/// Best-effort alias for `path` with no knowledge of other imports: the
/// sanitized last segment, or [`FALLBACK_ALIAS`] when that is empty.
pub fn guess_alias(path: &str) -> String {
    let alias = ImportPath::parse(path).candidate(1);
    if alias.is_empty() {
        FALLBACK_ALIAS.to_string()
    } else {
        alias
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_alias_matches_known_paths() {
        let cases = [
            ("A", "a"),
            ("a", "a"),
            ("a$", "a"),
            ("a/b", "b"),
            ("a/b/c", "c"),
            ("a/b/c-d", "cd"),
            ("a/b/c-d/", "cd"),
            ("a.b", "ab"),
            ("a/b.c", "bc"),
            ("a/b-c.d", "bcd"),
            ("a/bb-ccc.dddd", "bbcccdddd"),
            ("a/foo-go", "foogo"),
            ("123a", "a"),
            ("a/321a.b", "ab"),
            ("a/123", "pkg"),
        ];
        for (path, expected) in cases {
            assert_eq!(guess_alias(path), expected, "guess_alias({path:?})");
        }
    }

    #[test]
    fn empty_segments_are_dropped() {
        let path = ImportPath::parse("//github.com//dave/jennifer/");
        assert_eq!(path.segments(), &["github.com", "dave", "jennifer"]);
        assert_eq!(path.depth(), 3);
    }

    #[test]
    fn only_slashes_has_no_segments() {
        let path = ImportPath::parse("///");
        assert_eq!(path.depth(), 0);
        assert_eq!(path.candidate(1), "");
        assert_eq!(guess_alias("///"), FALLBACK_ALIAS);
        assert_eq!(guess_alias(""), FALLBACK_ALIAS);
    }

    #[test]
    fn digits_are_stripped_per_segment_before_joining() {
        let path = ImportPath::parse("aaa/123bbb/123ccc");
        assert_eq!(path.candidate(1), "ccc");
        assert_eq!(path.candidate(2), "bbbccc");
        assert_eq!(path.candidate(3), "aaabbbccc");
    }

    #[test]
    fn inner_digits_survive() {
        assert_eq!(sanitize_segment("k8s.io"), "k8sio");
        assert_eq!(sanitize_segment("v1beta1"), "v1beta1");
        assert_eq!(sanitize_segment("2fa-v2"), "fav2");
    }

    #[test]
    fn non_ascii_letters_are_removed() {
        assert_eq!(sanitize_segment("café"), "caf");
        assert_eq!(sanitize_segment("€uro"), "uro");
        // Lower-casing runs first, so letters folding to ASCII are kept.
        assert_eq!(sanitize_segment("\u{212A}8s"), "k8s");
        assert_eq!(sanitize_segment("\u{0130}stanbul"), "istanbul");
    }

    #[test]
    fn candidates_escalate_from_last_segment() {
        let path = ImportPath::parse("github.com/xxx/foo.abc");
        let levels: Vec<_> = path.candidates().collect();
        assert_eq!(
            levels,
            vec![
                (1, "fooabc".to_string()),
                (2, "xxxfooabc".to_string()),
                (3, "githubcomxxxfooabc".to_string()),
            ]
        );
        assert_eq!(path.candidates().len(), 3);
    }

    #[test]
    fn candidate_level_is_clamped_to_depth() {
        let path = ImportPath::parse("meta/v1");
        assert_eq!(path.candidate(5), "metav1");
        assert_eq!(path.candidate(0), "");
    }
}
