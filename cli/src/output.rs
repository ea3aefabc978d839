//! Styled terminal output.
//!
//! Commands print through [`Output`] rather than `println!`. Tables and user
//! details go to stdout; failures go to stderr so piped output stays clean.

use console::{Term, style};
use std::fmt::Display;

pub struct Output {
    stdout: Term,
    stderr: Term,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    pub fn new() -> Self {
        Self {
            stdout: Term::stdout(),
            stderr: Term::stderr(),
        }
    }

    // Write errors are ignored.
    fn line(term: &Term, text: &str) {
        drop(term.write_line(text));
    }

    /// `✓ Created user 4`
    pub fn success(&self, message: impl Display) {
        Self::line(
            &self.stdout,
            &format!("{} {message}", style("✓").green().bold()),
        );
    }

    /// `✗ ...` on stderr.
    pub fn error(&self, message: impl Display) {
        Self::line(&self.stderr, &format!("{} {message}", style("✗").red().bold()));
    }

    pub fn warning(&self, message: impl Display) {
        Self::line(
            &self.stdout,
            &format!("{} {message}", style("⚠").yellow().bold()),
        );
    }

    pub fn print(&self, message: impl Display) {
        Self::line(&self.stdout, &message.to_string());
    }

    pub fn newline(&self) {
        Self::line(&self.stdout, "");
    }

    /// Bold cyan title above a block of [`Self::labeled`] fields.
    pub fn header(&self, message: impl Display) {
        Self::line(&self.stdout, &style(message).bold().cyan().to_string());
    }

    /// One indented `label: value` field of a user record.
    pub fn labeled(&self, label: impl Display, value: impl Display) {
        Self::line(&self.stdout, &format!("  {}: {value}", style(label).dim()));
    }

    pub fn dim(&self, message: impl Display) {
        Self::line(&self.stdout, &style(message).dim().to_string());
    }

    /// Footer under the users table, e.g. `Total: 3 user(s)`.
    pub fn total(&self, label: impl Display, count: usize) {
        Self::line(
            &self.stdout,
            &format!(
                "\n{}: {}",
                style(label).bold(),
                style(format!("{count} user(s)")).cyan()
            ),
        );
    }
}
