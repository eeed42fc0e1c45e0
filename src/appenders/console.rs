//! Console error reporter
//!
//! Errors go to standard output when no error handler is installed.

use crate::core::EmitterError;

#[cfg(feature = "console")]
use colored::Colorize;

pub struct ConsoleReporter {
    use_colors: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn report(&self, error: &EmitterError) {
        println!("{}", self.format(error));
    }

    /// Line printed for `error`
    pub fn format(&self, error: &EmitterError) -> String {
        format!("{} {}", self.prefix(), error)
    }

    #[cfg(feature = "console")]
    fn prefix(&self) -> String {
        if self.use_colors {
            "[gelf]".red().to_string()
        } else {
            "[gelf]".to_string()
        }
    }

    #[cfg(not(feature = "console"))]
    fn prefix(&self) -> String {
        let _ = self.use_colors;
        "[gelf]".to_string()
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_format() {
        let reporter = ConsoleReporter::with_colors(false);
        assert_eq!(
            reporter.format(&EmitterError::ProtocolUndefined),
            "[gelf] Protocol is not defined"
        );
    }

    #[test]
    fn test_colored_format_keeps_message() {
        let reporter = ConsoleReporter::new();
        let line = reporter.format(&EmitterError::PortUndefined);
        assert!(line.contains("[gelf]"));
        assert!(line.ends_with("Port is not defined"));
    }
}
