//! Status messages for the CLI, written to stderr.

use std::fmt::Display;
use std::path::Path;

use console::{Style, Term};

/// Terminal output formatter.
///
/// Rendered HTML may go to stdout, so every status line goes to stderr.
pub(crate) struct Output {
    term: Term,
    label: Style,
    done: Style,
    failed: Style,
    fatal: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            label: Style::new().bold(),
            done: Style::new().green(),
            failed: Style::new().yellow(),
            fatal: Style::new().red(),
        }
    }

    /// Print a `label: value` line, e.g. `Output: build`.
    pub(crate) fn field(&self, label: &str, value: impl Display) {
        let _ = self
            .term
            .write_line(&format!("{}: {value}", self.label.apply_to(label)));
    }

    /// Report rendered output written to `dest` (green).
    pub(crate) fn rendered(&self, what: &str, dest: &Path) {
        let line = format!("Rendered {what} to {}", dest.display());
        let _ = self.term.write_line(&self.done.apply_to(line).to_string());
    }

    /// Report failed content nodes (yellow). Prints nothing for zero.
    pub(crate) fn failures(&self, count: usize) {
        if let Some(line) = failure_summary(count) {
            let _ = self.term.write_line(&self.failed.apply_to(line).to_string());
        }
    }

    /// Print a fatal error (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.fatal.apply_to(msg).to_string());
    }
}

/// Summary line for `count` failed content nodes.
fn failure_summary(count: usize) -> Option<String> {
    match count {
        0 => None,
        1 => Some("1 content node failed to render".to_owned()),
        n => Some(format!("{n} content nodes failed to render")),
    }
}
