//! Token edge predicates.
//!
//! A token edge may carry several markers at once (`__word` starts with both
//! `_` and `__`). These predicates attribute an edge to a single marker: the
//! edge matches `affix` only if no other configured marker that is not part of
//! `affix` also anchors the same edge.

/// Check whether `token` starts with `prefix` and with no unrelated marker.
///
/// Markers contained in `prefix` itself are ignored, so `\_` still matches a
/// token starting with `\_` even though `_` is a configured marker.
pub(crate) fn starts_only_with<'a>(
    token: &str,
    prefix: &str,
    markers: impl IntoIterator<Item = &'a str>,
) -> bool {
    token.starts_with(prefix)
        && markers
            .into_iter()
            .filter(|marker| !prefix.contains(*marker))
            .all(|marker| !token.starts_with(marker))
}

/// Check whether `token` ends with `suffix` and with no unrelated marker.
pub(crate) fn ends_only_with<'a>(
    token: &str,
    suffix: &str,
    markers: impl IntoIterator<Item = &'a str>,
) -> bool {
    token.ends_with(suffix)
        && markers
            .into_iter()
            .filter(|marker| !suffix.contains(*marker))
            .all(|marker| !token.ends_with(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKERS: [&str; 3] = ["_", "__", "'"];

    #[test]
    fn test_single_underscore_prefix() {
        assert!(starts_only_with("_word", "_", MARKERS));
    }

    #[test]
    fn test_double_underscore_is_not_single() {
        assert!(!starts_only_with("__word", "_", MARKERS));
        assert!(starts_only_with("__word", "__", MARKERS));
    }

    #[test]
    fn test_unrelated_marker_blocks_match() {
        assert!(!ends_only_with("word__", "_", MARKERS));
        assert!(ends_only_with("word__", "__", MARKERS));
        assert!(ends_only_with("word'", "'", MARKERS));
    }

    #[test]
    fn test_escaped_prefix_ignores_contained_marker() {
        assert!(starts_only_with("\\_word", "\\_", MARKERS));
        assert!(ends_only_with("word\\__", "\\__", MARKERS));
    }

    #[test]
    fn test_missing_affix() {
        assert!(!starts_only_with("word_", "_", MARKERS));
        assert!(!ends_only_with("_word", "_", MARKERS));
        assert!(!ends_only_with("", "_", MARKERS));
    }

    #[test]
    fn test_no_markers_reduces_to_plain_match() {
        assert!(starts_only_with("abc", "a", []));
        assert!(ends_only_with("abc", "c", []));
    }
}
