use std::io::{self, Write};

use crate::error::ScanError;

/// Sink for lexical diagnostics.
///
/// The scanner hands every error it finds to a `Reporter` and keeps going;
/// it never looks at [`Reporter::had_error`] itself. Deciding what to do with
/// the flag (exit status, retry, ...) is up to whoever owns the reporter.
pub trait Reporter {
    fn report(&mut self, line: usize, context: &str, message: &str);

    fn report_error(&mut self, error: ScanError) {
        self.report(error.line(), "", &error.to_string());
    }

    fn had_error(&self) -> bool;
}

/// Writes `[line N] Error: message` lines to a writer, stderr by default.
pub struct ConsoleReporter<W: Write = io::Stderr> {
    out: W,
    had_error: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            had_error: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, line: usize, context: &str, message: &str) {
        // A diagnostic that cannot be written is dropped; the flag still flips.
        let _ = writeln!(self.out, "[line {line}] Error{context}: {message}");
        self.had_error = true;
    }

    fn had_error(&self) -> bool {
        self.had_error
    }
}

/// Collects errors so they can be rendered later with the source attached.
#[derive(Debug, Default)]
pub struct DiagnosticReporter {
    errors: Vec<ScanError>,
}

impl DiagnosticReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &[ScanError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ScanError> {
        self.errors
    }

    /// Convert the collected errors into miette reports that point into `source`.
    pub fn into_reports(self, name: &str, source: &str) -> Vec<miette::Report> {
        self.errors
            .into_iter()
            .map(|e| miette::Report::new(e.with_source_code(name, source)))
            .collect()
    }
}

impl Reporter for DiagnosticReporter {
    fn report(&mut self, line: usize, context: &str, message: &str) {
        self.errors
            .push(ScanError::reported(line, context, message));
    }

    fn report_error(&mut self, error: ScanError) {
        self.errors.push(error);
    }

    fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }
}
