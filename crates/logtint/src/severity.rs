//! Severity tiers assigned to classified log lines.

use serde::{Deserialize, Serialize};

use crate::color::LogColor;

/// Severity tier assigned to a log line by the highlighter
///
/// Tiers have a strict priority order: `Error` > `Warn` > `Info` >
/// `Numeric`. A line matching an error keyword is error-tier no matter
/// what else it contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warn,
    Info,
    /// No keyword matched, but the line carries at least one ASCII digit.
    Numeric,
}

impl Severity {
    /// Get the terminal color used to render this tier
    pub fn color(&self) -> LogColor {
        match self {
            Severity::Error => LogColor::Red,
            Severity::Warn => LogColor::Yellow,
            Severity::Info => LogColor::Blue,
            Severity::Numeric => LogColor::Green,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Info => "info",
            Severity::Numeric => "numeric",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_color_mapping() {
        assert_eq!(Severity::Error.color(), LogColor::Red);
        assert_eq!(Severity::Warn.color(), LogColor::Yellow);
        assert_eq!(Severity::Info.color(), LogColor::Blue);
        assert_eq!(Severity::Numeric.color(), LogColor::Green);
    }

    #[test]
    fn test_severity_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Severity::Error).unwrap(),
            "\"error\""
        );
        assert_eq!(
            serde_json::to_string(&Severity::Numeric).unwrap(),
            "\"numeric\""
        );
    }

    #[test]
    fn test_severity_display_is_lowercase() {
        assert_eq!(Severity::Warn.to_string(), "warn");
        assert_eq!(Severity::Error.to_string(), "error");
    }
}
