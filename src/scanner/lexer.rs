use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};
use winnow::combinator::opt;
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::stream::{LocatingSlice, Location};
use winnow::token::{any, take_till, take_while};

use crate::error::ScanError;
use crate::reporter::Reporter;
use crate::scanner::token::{Literal, Span, Token, TokenKind, keyword_kind};

type Input<'a> = LocatingSlice<&'a str>;

/// Decimal digits (`Nd`) in any script. `²`, `½` and `Ⅻ` are not digits.
fn is_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
}

fn is_letter(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Letter
}

fn is_alphanumeric(c: char) -> bool {
    is_digit(c) || is_letter(c)
}

fn line_comment<'a>(input: &mut Input<'a>) -> ModalResult<()> {
    take_till(0.., '\n').void().parse_next(input)
}

/// Everything up to the closing quote, and whether that quote was found.
fn string_body<'a>(input: &mut Input<'a>) -> ModalResult<(&'a str, bool)> {
    let body = take_till(0.., '"').parse_next(input)?;
    let closed = opt('"').parse_next(input)?.is_some();
    Ok((body, closed))
}

/// Rest of a number after its first digit. The fraction is only taken when a
/// digit follows the `.`, so `3.` leaves the dot for the next token.
fn number_rest<'a>(input: &mut Input<'a>) -> ModalResult<()> {
    (
        take_while(0.., is_digit),
        opt(('.', take_while(1.., is_digit))),
    )
        .void()
        .parse_next(input)
}

fn identifier_rest<'a>(input: &mut Input<'a>) -> ModalResult<()> {
    take_while(0.., is_alphanumeric).void().parse_next(input)
}

struct Scanner<'a, R: ?Sized> {
    source: &'a str,
    input: Input<'a>,
    line: usize,
    tokens: Vec<Token>,
    reporter: &'a mut R,
}

impl<'a, R: Reporter + ?Sized> Scanner<'a, R> {
    fn new(source: &'a str, reporter: &'a mut R) -> Self {
        Self {
            source,
            input: LocatingSlice::new(source),
            line: 0,
            tokens: Vec::new(),
            reporter,
        }
    }

    fn scan_all(mut self) -> Vec<Token> {
        while !self.input.is_empty() {
            if self.scan_token().is_err() {
                break;
            }
        }
        let eof = Span::new(self.source.len(), 0);
        self.tokens
            .push(Token::new(TokenKind::Eof, "", None, self.line, eof));
        self.tokens
    }

    fn offset(&self) -> usize {
        self.input.current_token_start()
    }

    fn scan_token(&mut self) -> ModalResult<()> {
        let start = self.offset();
        let c = any::<_, ErrMode<ContextError>>.parse_next(&mut self.input)?;
        match c {
            '(' => self.add_token(TokenKind::LeftParen, start),
            ')' => self.add_token(TokenKind::RightParen, start),
            '{' => self.add_token(TokenKind::LeftBrace, start),
            '}' => self.add_token(TokenKind::RightBrace, start),
            ',' => self.add_token(TokenKind::Comma, start),
            '.' => self.add_token(TokenKind::Dot, start),
            '-' => self.add_token(TokenKind::Minus, start),
            '+' => self.add_token(TokenKind::Plus, start),
            ';' => self.add_token(TokenKind::Semicolon, start),
            '*' => self.add_token(TokenKind::Star, start),
            '=' => self.pick(start, TokenKind::EqualEqual, TokenKind::Equal),
            '!' => self.pick(start, TokenKind::BangEqual, TokenKind::Bang),
            '<' => self.pick(start, TokenKind::LessEqual, TokenKind::Less),
            '>' => self.pick(start, TokenKind::GreaterEqual, TokenKind::Greater),
            '/' => {
                if self.input.starts_with('/') {
                    line_comment(&mut self.input)?;
                } else {
                    self.add_token(TokenKind::Slash, start);
                }
            }
            ' ' | '\t' | '\r' => {}
            '\n' => self.line += 1,
            '"' => self.string(start)?,
            c if is_digit(c) => self.number(start)?,
            c if is_alphanumeric(c) => self.identifier(start)?,
            other => {
                let span = Span::new(start, other.len_utf8());
                self.reporter
                    .report_error(ScanError::unexpected_character(other, self.line, span));
            }
        }
        Ok(())
    }

    /// Emit `matched` if the next character is `=`, otherwise `single`.
    fn pick(&mut self, start: usize, matched: TokenKind, single: TokenKind) {
        let followed: ModalResult<Option<char>> = opt('=').parse_next(&mut self.input);
        match followed {
            Ok(Some(_)) => self.add_token(matched, start),
            Ok(None) | Err(_) => self.add_token(single, start),
        }
    }

    fn string(&mut self, start: usize) -> ModalResult<()> {
        let (body, closed) = string_body(&mut self.input)?;
        self.line += body.matches('\n').count();

        if !closed {
            let span = Span::new(start, self.offset() - start);
            self.reporter
                .report_error(ScanError::unterminated_string(self.line, span));
            return Ok(());
        }

        self.add_literal(TokenKind::String, start, Some(Literal::Str(body.to_string())));
        Ok(())
    }

    /// Literals that do not parse, or overflow to infinity, are reported and
    /// still emitted with the value `0.0`.
    fn number(&mut self, start: usize) -> ModalResult<()> {
        number_rest(&mut self.input)?;
        let source = self.source;
        let lexeme = &source[start..self.offset()];
        let value = match lexeme.parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            Ok(_) | Err(_) => {
                let span = Span::new(start, lexeme.len());
                self.reporter
                    .report_error(ScanError::invalid_number(lexeme, self.line, span));
                0.0
            }
        };
        self.add_literal(TokenKind::Number, start, Some(Literal::Number(value)));
        Ok(())
    }

    fn identifier(&mut self, start: usize) -> ModalResult<()> {
        identifier_rest(&mut self.input)?;
        let source = self.source;
        let text = &source[start..self.offset()];
        let kind = keyword_kind(text).unwrap_or(TokenKind::Identifier);
        self.add_token(kind, start);
        Ok(())
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        self.add_literal(kind, start, None);
    }

    fn add_literal(&mut self, kind: TokenKind, start: usize, literal: Option<Literal>) {
        let source = self.source;
        let end = self.offset();
        let lexeme = &source[start..end];
        self.tokens.push(Token::new(
            kind,
            lexeme,
            literal,
            self.line,
            Span::new(start, end - start),
        ));
    }
}

/// Scan all tokens from source, handing every lexical error to `reporter`.
///
/// Always returns a token list ending in exactly one `EOF` token.
pub fn scan_all<R: Reporter + ?Sized>(source: &str, reporter: &mut R) -> Vec<Token> {
    Scanner::new(source, reporter).scan_all()
}
