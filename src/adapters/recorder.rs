use crate::domain::ports::Reporter;
use std::fmt;

/// Reporter that keeps a mock's diagnostics in memory instead of failing the running test.
#[derive(Debug, Default, Clone)]
pub struct CapturingReporter {
    errors: Vec<String>,
    logs: Vec<String>,
}

impl CapturingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.errors, self.logs)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.logs.is_empty()
    }

    /// Error lines followed by log lines, one per line. Embedded newlines and tabs are kept.
    pub fn diagnostic(&self) -> String {
        Self::join_lines(self.errors.iter().chain(&self.logs))
    }

    pub(crate) fn join_lines<'a>(lines: impl Iterator<Item = &'a String>) -> String {
        lines.map(String::as_str).collect::<Vec<_>>().join("\n")
    }
}

impl Reporter for CapturingReporter {
    fn report_error(&mut self, args: fmt::Arguments<'_>) {
        self.errors.push(args.to_string());
    }

    fn report_log(&mut self, args: fmt::Arguments<'_>) {
        self.logs.push(args.to_string());
    }
}
