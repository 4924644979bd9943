use std::io;

use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::driver::{self, Options};

/// Run the interactive prompt. Each line is scanned on its own; nothing
/// carries over between lines.
pub fn run_repl(options: Options) -> Result<()> {
    let mut editor = DefaultEditor::new().context("start line editor")?;

    loop {
        let line = match editor.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
            Err(e) => return Err(e).context("read line"),
        };

        if line.trim().is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(line.as_str());

        driver::run(
            &line,
            "<stdin>",
            options,
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
        )?;
    }

    Ok(())
}
