//! Logtint - fast log line syntax highlighting
//!
//! Keyword-driven severity classification for raw log lines, plus the
//! minimal ANSI colorize seam used to render a classified line. The
//! highlighter is an immutable value: build it once at startup and share
//! it across however many readers need it.

pub mod color;
pub mod keywords;
pub mod severity;
pub mod syntax;

pub use color::{colorize, colorize_bytes, LogColor};
pub use severity::Severity;
pub use syntax::LogSyntaxHighlighter;
