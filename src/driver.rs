use std::io::Write;

use anyhow::{Context, Result};

use crate::printer::{self, Format};
use crate::reporter::{ConsoleReporter, DiagnosticReporter, Reporter};
use crate::scanner;

/// How a scan's tokens and diagnostics are written out.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub format: Format,
    /// Plain `[line N] Error: ...` diagnostics instead of miette rendering.
    pub plain: bool,
}

/// Scan `source`, write its tokens to `out` and its diagnostics to `err`.
///
/// Returns whether any lexical error was reported. Lexical errors are not
/// failures here; only I/O and rendering problems are.
pub fn run<O: Write, E: Write>(
    source: &str,
    name: &str,
    options: Options,
    out: &mut O,
    err: &mut E,
) -> Result<bool> {
    let (tokens, had_error) = if options.plain {
        let mut reporter = ConsoleReporter::with_writer(&mut *err);
        let tokens = scanner::scan(source, &mut reporter);
        (tokens, reporter.had_error())
    } else {
        let mut reporter = DiagnosticReporter::new();
        let tokens = scanner::scan(source, &mut reporter);
        let had_error = reporter.had_error();
        for report in reporter.into_reports(name, source) {
            writeln!(err, "{report:?}").context("write diagnostic")?;
        }
        (tokens, had_error)
    };

    let rendered = printer::render(&tokens, options.format).context("render tokens")?;
    out.write_all(rendered.as_bytes())
        .context("write tokens")?;
    Ok(had_error)
}
