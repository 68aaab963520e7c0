//! Command implementations

pub mod analyze;
pub mod dashboard;

use crate::keywords;

/// Keywords for one run: the `--keywords` override or the seed list.
pub(crate) fn resolve_keywords(overrides: &[String]) -> Vec<String> {
    if overrides.is_empty() {
        keywords::seed_keywords()
    } else {
        overrides.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_keywords_prefers_overrides() {
        let overrides = vec!["paineis solares".to_string()];
        assert_eq!(resolve_keywords(&overrides), overrides);
    }

    #[test]
    fn test_resolve_keywords_falls_back_to_seed() {
        assert_eq!(resolve_keywords(&[]), keywords::seed_keywords());
    }
}
