//! Terminal output utilities.
//!
//! Command results go to stdout, diagnostics to stderr.

use console::{Style, Term};
use serde::Serialize;

use crate::error::CliError;

/// Terminal output formatter.
pub(crate) struct Output {
    out: Term,
    err: Term,
    yellow: Style,
    red: Style,
    cyan_bold: Style,
    dim: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.err.write_line(msg);
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        let _ = self.err.write_line(&self.yellow.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.err.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print a result line.
    pub(crate) fn line(&self, msg: &str) -> Result<(), CliError> {
        self.out.write_line(msg)?;
        Ok(())
    }

    /// Print a result heading (cyan bold).
    pub(crate) fn heading(&self, msg: &str) -> Result<(), CliError> {
        self.line(&self.cyan_bold.apply_to(msg).to_string())
    }

    /// Print a label followed by a dimmed link.
    pub(crate) fn link(&self, indent: usize, label: &str, url: &str) -> Result<(), CliError> {
        self.line(&format!(
            "{:indent$}{label}  {}",
            "",
            self.dim.apply_to(url)
        ))
    }

    /// Print a value as pretty JSON.
    pub(crate) fn json<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), CliError> {
        self.line(&serde_json::to_string_pretty(value)?)
    }
}
