use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::scanner::token::Span;

/// Lexical errors. None of them stop a scan; they are handed to a
/// [`Reporter`](crate::reporter::Reporter) and scanning moves on.
#[derive(Error, Debug, Diagnostic)]
pub enum ScanError {
    #[error("unexpected character: {ch}")]
    #[diagnostic(code(lox::scan::unexpected_character))]
    UnexpectedCharacter {
        ch: char,
        line: usize,
        #[label("not part of any token")]
        span: SourceSpan,
        #[source_code]
        src: miette::NamedSource<String>,
    },

    #[error("Unterminated string.")]
    #[diagnostic(code(lox::scan::unterminated_string))]
    UnterminatedString {
        line: usize,
        #[label("unterminated string")]
        span: SourceSpan,
        #[source_code]
        src: miette::NamedSource<String>,
    },

    #[error("Invalid number literal: {lexeme}")]
    #[diagnostic(code(lox::scan::invalid_number))]
    InvalidNumber {
        lexeme: String,
        line: usize,
        #[label("not a base-10 number")]
        span: SourceSpan,
        #[source_code]
        src: miette::NamedSource<String>,
    },

    /// Free-form diagnostic passed straight through `Reporter::report`.
    /// A non-empty context is rendered as the diagnostic's help text.
    #[error("{message}")]
    #[diagnostic(code(lox::scan::reported))]
    Reported {
        line: usize,
        #[help]
        context: Option<String>,
        message: String,
    },
}

impl ScanError {
    pub fn unexpected_character(ch: char, line: usize, span: Span) -> Self {
        Self::UnexpectedCharacter {
            ch,
            line,
            span: span.into(),
            src: empty_source(),
        }
    }

    pub fn unterminated_string(line: usize, span: Span) -> Self {
        Self::UnterminatedString {
            line,
            span: span.into(),
            src: empty_source(),
        }
    }

    pub fn invalid_number(lexeme: impl Into<String>, line: usize, span: Span) -> Self {
        Self::InvalidNumber {
            lexeme: lexeme.into(),
            line,
            span: span.into(),
            src: empty_source(),
        }
    }

    pub fn reported(line: usize, context: &str, message: impl Into<String>) -> Self {
        let context = context.trim();
        Self::Reported {
            line,
            context: (!context.is_empty()).then(|| context.to_string()),
            message: message.into(),
        }
    }

    /// 0-based line the error was detected on.
    pub fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. }
            | Self::UnterminatedString { line, .. }
            | Self::InvalidNumber { line, .. }
            | Self::Reported { line, .. } => *line,
        }
    }

    /// Attach source code for fancy miette diagnostics
    pub fn with_source_code(self, name: impl Into<String>, source: impl Into<String>) -> Self {
        let src = miette::NamedSource::new(name.into(), source.into());
        match self {
            Self::UnexpectedCharacter { ch, line, span, .. } => Self::UnexpectedCharacter {
                ch,
                line,
                span,
                src,
            },
            Self::UnterminatedString { line, span, .. } => {
                Self::UnterminatedString { line, span, src }
            }
            Self::InvalidNumber {
                lexeme, line, span, ..
            } => Self::InvalidNumber {
                lexeme,
                line,
                span,
                src,
            },
            reported @ Self::Reported { .. } => reported,
        }
    }
}

fn empty_source() -> miette::NamedSource<String> {
    miette::NamedSource::new("input", String::new())
}
