//! Fixed keyword tiers for log line classification.
//!
//! The tiers are constants: classification never depends on configuration,
//! and matching is case-sensitive literal substring containment.

use crate::severity::Severity;

/// Keywords that mark a line as error-tier
pub const ERROR_KEYWORDS: &[&str] = &[
    "ERROR",
    "error",
    "FATAL",
    "fatal",
    "PANIC",
    "panic",
    "Exception",
    "exception",
    "fail",
    "FAIL",
];

/// Keywords that mark a line as warning-tier
pub const WARN_KEYWORDS: &[&str] = &["WARN", "warn", "WARNING", "warning"];

/// Keywords that mark a line as info-tier
pub const INFO_KEYWORDS: &[&str] = &["INFO", "info"];

/// One tier of the classification rule list
///
/// A line containing any of `keywords` is assigned `severity`. Keyword
/// order inside a tier carries no meaning; only tier order does.
#[derive(Debug, Clone, Copy)]
pub struct SeverityRule {
    pub keywords: &'static [&'static str],
    pub severity: Severity,
}

/// Build the ordered rule list
///
/// Earlier tiers win: error is checked before warn, warn before info.
pub fn severity_rules() -> Vec<SeverityRule> {
    vec![
        SeverityRule {
            keywords: ERROR_KEYWORDS,
            severity: Severity::Error,
        },
        SeverityRule {
            keywords: WARN_KEYWORDS,
            severity: Severity::Warn,
        },
        SeverityRule {
            keywords: INFO_KEYWORDS,
            severity: Severity::Info,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_are_ordered_most_severe_first() {
        let rules = severity_rules();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].severity, Severity::Error);
        assert_eq!(rules[1].severity, Severity::Warn);
        assert_eq!(rules[2].severity, Severity::Info);
    }

    #[test]
    fn test_tiers_are_nonempty_and_nontrivial() {
        for rule in severity_rules() {
            assert!(!rule.keywords.is_empty());
            assert!(rule.keywords.iter().all(|k| !k.is_empty()));
        }
    }

    #[test]
    fn test_tiers_cover_both_cases() {
        assert!(ERROR_KEYWORDS.contains(&"ERROR"));
        assert!(ERROR_KEYWORDS.contains(&"error"));
        assert!(WARN_KEYWORDS.contains(&"WARNING"));
        assert!(INFO_KEYWORDS.contains(&"info"));
    }
}
