//! Fast syntax highlighting for log content using string matching.
//!
//! Substring containment against fixed keyword tiers, checked in severity
//! order with the first match winning. Much cheaper than regex on hot log
//! paths, and total: every input has a defined result.

use std::borrow::Cow;

use tracing::trace;

use crate::color::{colorize, colorize_bytes};
use crate::keywords::{severity_rules, SeverityRule};
use crate::severity::Severity;

/// Log line highlighter with fixed keyword tiers
///
/// Construct once and share freely: the rule list is immutable and every
/// method takes `&self`.
pub struct LogSyntaxHighlighter {
    rules: Vec<SeverityRule>,
}

impl LogSyntaxHighlighter {
    /// Create a new highlighter with the fixed keyword tiers
    pub fn new() -> Self {
        Self {
            rules: severity_rules(),
        }
    }

    /// Classify a line without styling it
    ///
    /// Tiers are evaluated in order and the first containment match wins.
    /// Lines matching no tier fall through to `Severity::Numeric` when they
    /// carry at least one ASCII digit, and to `None` otherwise.
    pub fn classify(&self, content: &str) -> Option<Severity> {
        for rule in &self.rules {
            if rule.keywords.iter().any(|k| content.contains(k)) {
                return Some(rule.severity);
            }
        }

        // Numeric tier keeps otherwise-unmatched lines visible.
        if content.bytes().any(|b| b.is_ascii_digit()) {
            return Some(Severity::Numeric);
        }

        None
    }

    /// Byte-level `classify`
    ///
    /// Containment checks run directly on the byte sequence; no decode per
    /// keyword.
    pub fn classify_bytes(&self, content: &[u8]) -> Option<Severity> {
        for rule in &self.rules {
            if rule
                .keywords
                .iter()
                .any(|k| contains_subslice(content, k.as_bytes()))
            {
                return Some(rule.severity);
            }
        }

        if content.iter().any(|b| b.is_ascii_digit()) {
            return Some(Severity::Numeric);
        }

        None
    }

    /// Apply syntax highlighting to a log line
    ///
    /// Returns the entire line wrapped in its tier color, or the input
    /// borrowed back unchanged when nothing matched.
    pub fn highlight<'a>(&self, content: &'a str) -> Cow<'a, str> {
        match self.classify(content) {
            Some(severity) => {
                trace!("highlighting line as {}", severity);
                Cow::Owned(colorize(content, severity.color()))
            }
            None => Cow::Borrowed(content),
        }
    }

    /// Apply syntax highlighting to a log line held as raw bytes
    ///
    /// Byte-for-byte identical to running `highlight` on the decoded text,
    /// without the string round-trip.
    pub fn highlight_bytes<'a>(&self, content: &'a [u8]) -> Cow<'a, [u8]> {
        match self.classify_bytes(content) {
            Some(severity) => {
                trace!("highlighting line as {}", severity);
                Cow::Owned(colorize_bytes(content, severity.color()))
            }
            None => Cow::Borrowed(content),
        }
    }
}

impl Default for LogSyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Literal subslice containment, the byte-level `str::contains`
fn contains_subslice(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    if needle.len() > haystack.len() {
        return false;
    }
    haystack.windows(needle.len()).any(|window| window == needle)
}
