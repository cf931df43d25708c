//! # TexSift Log Classifier
//!
//! Classifies TeX engine build logs (`*.log`) into structured diagnostic records.
//!
//! ## Overview
//!
//! This crate turns the raw line output of a TeX compilation run into four
//! ordered collections of typed records:
//!
//! - **Errors**: `! ...` lines, both structured (`! LaTeX Error: ...`) and bare
//! - **Warnings**: `LaTeX Warning:`, `Package foo Warning:`, PDF backend notices,
//!   missing characters
//! - **Badboxes**: `Overfull \hbox (...)` / `Underfull \vbox (...)` notices
//! - **Missing references**: undefined `\cite` / `\ref` keys
//!
//! Each record carries the triggering line plus a bounded window of the raw
//! lines that follow it, so a human can still see the surrounding log text.
//!
//! ## Architecture
//!
//! ```text
//! raw lines ──► LineWindow ──► Scanner ──► rules (priority order) ──► Report
//! ```
//!
//! - [`LineWindow`](window::LineWindow) wraps the line source and hands out
//!   lookahead windows without skipping or repeating any line.
//! - [`rules`] holds the fixed, ordered list of pattern rules; the first rule
//!   that matches a line wins.
//! - [`Scanner`](scan::Scanner) drives the pass and assembles the immutable
//!   [`Report`](record::Report).
//!
//! The scan is a single synchronous forward pass: no I/O, no failure paths.
//! Lines that match no rule are skipped.
//!
//! ## Examples
//!
//! ### One-shot classification
//!
//! ```
//! use texsift_log::Scanner;
//!
//! let log = "! Undefined control sequence.\nl.42 \\foo\n";
//! let report = Scanner::new().scan(log);
//!
//! assert!(report.has_errors);
//! assert_eq!(report.errors[0].fields.message, "Undefined control sequence.");
//! ```
//!
//! ### Exporting to JSON
//!
//! The report and every record type implement `serde::Serialize`:
//!
//! ```no_run
//! use std::fs;
//! use texsift_log::parse_log;
//!
//! let log = fs::read_to_string("main.log")?;
//! let report = parse_log(&log);
//! let json = serde_json::to_string_pretty(&report)?;
//! fs::write("report.json", json)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Typed record and report model.
pub mod record;
/// Ordered pattern rules and per-line classification.
pub mod rules;
/// Scan engine.
pub mod scan;
/// Lookahead line reader.
pub mod window;

#[cfg(test)]
mod tests;

pub use record::{
    BadboxKind, BadboxRecord, BoxDirection, ErrorRecord, ErrorSource, Message, MissingRefKind,
    MissingRefRecord, Report, WarningRecord, WarningSource,
};
pub use scan::{Scanner, DEFAULT_CONTEXT_LINES};
pub use window::LineWindow;

/// Classifies a whole log with the default context size.
///
/// Shorthand for `Scanner::new().scan(log)`.
pub fn parse_log(log: &str) -> Report {
    Scanner::new().scan(log)
}
