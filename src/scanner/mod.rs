pub mod lexer;
pub mod token;

use crate::reporter::Reporter;
use token::Token;

/// Scan source code into a list of tokens, reporting lexical errors as they are found.
pub fn scan<R: Reporter + ?Sized>(source: &str, reporter: &mut R) -> Vec<Token> {
    lexer::scan_all(source, reporter)
}
