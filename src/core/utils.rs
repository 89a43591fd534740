//! Utilities module - Console output for commands

use colored::*;

/// Console reporter honouring `--quiet` and `--verbose`
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub quiet: bool,
    pub verbose: bool,
}

impl Output {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self { quiet, verbose }
    }

    /// Print a step message
    pub fn step(&self, message: &str) {
        if !self.quiet {
            println!("   {} {}", "→".bright_blue(), message);
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("   {} {}", "✓".bright_green(), message);
        }
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if !self.quiet {
            println!("   {} {}", "⚠".bright_yellow(), message);
        }
    }

    /// Print a `label: value` line, only with `--verbose`
    pub fn detail(&self, label: &str, value: &str) {
        if self.verbose && !self.quiet {
            println!("     {} {}", format!("{}:", label).bright_black(), value.bright_cyan());
        }
    }
}
