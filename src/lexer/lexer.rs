use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{errors::errors::{Error, ErrorImpl}, Position, MK_SPAN, MK_TOKEN};

use super::tokens::{Token, TokenKind, PUNCTUATION_LOOKUP, RESERVED_LOOKUP};

/// Runs on the text a pattern matched at the lexer's position. Returns
/// `Ok(None)` when the text produces no token (whitespace).
pub type RegexHandler = fn(&mut Lexer, &str) -> Result<Option<Token>, Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order; the first pattern matching at the current position wins.
    // Digit runs come before words so `42` is an integer and `x42` an identifier.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[ \n]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: int_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z0-9]+").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^\"[^\"]*\"?").unwrap(), handler: string_handler },
    ];
}

/// Pull-based lexer: produces one token per `next_token` call.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: String,
    pos: usize,
    current: Option<char>,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let current = source.chars().next();

        Lexer {
            source,
            pos: 0,
            current,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
        self.current = self.source[self.pos..].chars().next();
    }

    /// The lookahead character, `None` once the source is exhausted.
    pub fn current_char(&self) -> Option<char> {
        self.current
    }

    /// Byte offset of the lookahead character.
    pub fn cursor(&self) -> usize {
        self.pos
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.current.is_none()
    }

    fn make_span(&self, len: usize) -> crate::Span {
        MK_SPAN!(self.pos, self.pos + len, self.file)
    }

    /// Returns the next token. Once the source is exhausted every call
    /// returns an `EOF` token.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        let token = self.scan_token()?;
        trace!(kind = %token.kind, value = %token.value, offset = token.span.start.0, "token");
        Ok(token)
    }

    fn scan_token(&mut self) -> Result<Token, Error> {
        loop {
            let Some(current) = self.current else {
                return Ok(MK_TOKEN!(TokenKind::EOF, String::new(), self.make_span(0)));
            };

            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(self.remainder())
                    .map(|m| (pattern.handler, m.as_str().to_string()))
            });

            if let Some((handler, text)) = matched {
                match handler(self, &text)? {
                    Some(token) => return Ok(token),
                    None => continue,
                }
            }

            if let Some(kind) = PUNCTUATION_LOOKUP.get(&current) {
                let token = MK_TOKEN!(*kind, current.to_string(), self.make_span(1));
                self.advance_n(1);
                return Ok(token);
            }

            return Err(Error::new(
                ErrorImpl::UnrecognisedCharacter { character: current },
                Position(self.pos as u32, Rc::clone(&self.file)),
            ));
        }
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, Error>;

    /// Yields tokens up to, but not including, `EOF`; stops after the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.at_eof() {
            return None;
        }

        match self.next_token() {
            Ok(token) if token.kind == TokenKind::EOF => None,
            Ok(token) => Some(Ok(token)),
            Err(error) => {
                // Park the cursor at the end so iteration terminates.
                self.advance_n(self.source.len());
                Some(Err(error))
            }
        }
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    lexer.advance_n(matched.len());
    Ok(None)
}

fn int_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    let token = MK_TOKEN!(TokenKind::Int, matched.to_string(), lexer.make_span(matched.len()));
    lexer.advance_n(matched.len());
    Ok(Some(token))
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Id);

    let token = MK_TOKEN!(kind, matched.to_string(), lexer.make_span(matched.len()));
    lexer.advance_n(matched.len());
    Ok(Some(token))
}

fn string_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    if matched.len() < 2 || !matched.ends_with('"') {
        return Err(Error::new(
            ErrorImpl::UnterminatedString,
            Position(lexer.pos as u32, Rc::clone(&lexer.file)),
        ));
    }

    let string_literal = matched[1..matched.len() - 1].to_string();
    let token = MK_TOKEN!(TokenKind::String, string_literal, lexer.make_span(matched.len()));

    // Lands just past the closing quote.
    lexer.advance_n(matched.len());
    Ok(Some(token))
}

/// Lexes the whole source. The result always ends with exactly one `EOF` token.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return Ok(tokens);
        }
    }
}
