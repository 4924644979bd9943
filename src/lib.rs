pub mod driver;
pub mod error;
pub mod printer;
pub mod repl;
pub mod reporter;
pub mod scanner;

// Re-export the types most callers need
pub use error::ScanError;
pub use reporter::{ConsoleReporter, DiagnosticReporter, Reporter};
pub use scanner::token::{Literal, Span, Token, TokenKind};
