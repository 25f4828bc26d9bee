//! ANSI colorize seam for highlighted log lines.
//!
//! Wraps content in a foreground escape plus a reset, nothing more.
//! Capability detection, theming, and no-color handling are the caller's
//! concern, not this module's.

use owo_colors::colors::{Blue, Green, Red, Yellow};
use owo_colors::Color;
use serde::{Deserialize, Serialize};

/// Reset sequence appended after every colorized value
pub const ANSI_RESET: &str = "\x1b[0m";

/// Terminal colors used by the log highlighter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogColor {
    Red,
    Yellow,
    Blue,
    Green,
}

impl LogColor {
    /// ANSI foreground escape for this color
    pub fn ansi_fg(&self) -> &'static str {
        match self {
            LogColor::Red => Red::ANSI_FG,
            LogColor::Yellow => Yellow::ANSI_FG,
            LogColor::Blue => Blue::ANSI_FG,
            LogColor::Green => Green::ANSI_FG,
        }
    }
}

/// Wrap text in the color's foreground escape and a reset
///
/// The visible characters of `text` are untouched.
pub fn colorize(text: &str, color: LogColor) -> String {
    format!("{}{}{}", color.ansi_fg(), text, ANSI_RESET)
}

/// Byte-level `colorize`
///
/// Escape sequences are plain ASCII, so the wrap needs no decoding and the
/// output is byte-for-byte identical to `colorize` on the decoded text.
pub fn colorize_bytes(content: &[u8], color: LogColor) -> Vec<u8> {
    let prefix = color.ansi_fg().as_bytes();
    let mut out = Vec::with_capacity(prefix.len() + content.len() + ANSI_RESET.len());
    out.extend_from_slice(prefix);
    out.extend_from_slice(content);
    out.extend_from_slice(ANSI_RESET.as_bytes());
    out
}
