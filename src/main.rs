use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use lox_lex::driver::{self, Options};
use lox_lex::printer::Format;
use lox_lex::repl;

/// Exit status for bad command-line usage (`EX_USAGE`).
const EXIT_USAGE: u8 = 64;
/// Exit status when the source contained lexical errors (`EX_DATAERR`).
const EXIT_DATA_ERR: u8 = 65;

#[derive(Parser, Debug)]
#[command(name = "lox-lex", about = "Tokenize Lox source code")]
struct Cli {
    /// Lox source file to scan (omit for an interactive prompt)
    file: Option<PathBuf>,

    /// Token output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print diagnostics as plain `[line N] Error: ...` lines
    #[arg(long)]
    plain: bool,
}

fn scan_file(path: &Path, options: Options) -> Result<ExitCode> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("read source file '{}'", path.display()))?;
    let name = path.display().to_string();
    let had_error = driver::run(
        &source,
        &name,
        options,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    if had_error {
        Ok(ExitCode::from(EXIT_DATA_ERR))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn main() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version also arrive here and keep clap's own exit
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            e.print().context("print usage error")?;
            return Ok(ExitCode::from(EXIT_USAGE));
        }
    };
    let options = Options {
        format: cli.format,
        plain: cli.plain,
    };

    match cli.file {
        Some(ref path) => scan_file(path, options),
        None => {
            repl::run_repl(options)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
