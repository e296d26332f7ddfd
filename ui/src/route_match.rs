//! URL pattern matching for active-tab detection.

/// Returns true iff `path` matches `pattern` exactly, segment by segment.
///
/// `:param` segments match any single non-empty path segment. Query and
/// fragment parts of `path` are ignored. There is no prefix matching: the
/// segment counts must agree.
pub fn pattern_matches(pattern: &str, path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let mut pattern_segments = pattern.split('/').filter(|s| !s.is_empty());
    let mut path_segments = path.split('/').filter(|s| !s.is_empty());

    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return true,
            (Some(expected), Some(actual)) => {
                if !expected.starts_with(':') && expected != actual {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_pattern_matches_exact_depth() {
        assert!(pattern_matches("/:coin_id/chart", "/btc-bitcoin/chart"));
        assert!(!pattern_matches("/:coin_id/chart", "/btc-bitcoin/price"));
    }

    #[test]
    fn depth_must_agree() {
        assert!(!pattern_matches("/:coin_id/chart", "/btc-bitcoin"));
        assert!(!pattern_matches("/:coin_id", "/btc-bitcoin/chart"));
    }

    #[test]
    fn root_matches_root_only() {
        assert!(pattern_matches("/", "/"));
        assert!(!pattern_matches("/", "/btc-bitcoin"));
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert!(pattern_matches("/:coin_id", "/btc-bitcoin?name=Bitcoin"));
        assert!(pattern_matches("/:coin_id/price", "/btc-bitcoin/price#top"));
    }

    #[test]
    fn literal_segments_must_match() {
        assert!(!pattern_matches("/coins/list", "/coins/grid"));
        assert!(pattern_matches("/coins/list", "/coins/list"));
    }
}
