//! Tokeniser for the expression language
//!
//! Operators have three interchangeable spellings (ASCII symbol, Unicode symbol and an
//! English keyword) that all map to the same [`TokenKind`]. Each symbol has exactly one
//! spelling, so `&&` or `||` are rejected rather than read as two operators.

use super::error::LexError;
use std::fmt;
use std::sync::Arc;

/// The kind of a token, carrying the payload of identifiers and constants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A variable name
    Ident(Arc<str>),
    /// `true`/`false`/`T`/`F`/`1`/`0`
    Const(bool),
    /// `!`, `¬`, `not`
    Not,
    /// `&`, `∧`, `and`
    And,
    /// `nand`
    Nand,
    /// `|`, `∨`, `or`
    Or,
    /// `nor`
    Nor,
    /// `^`, `⊕`, `xor`
    Xor,
    /// `->`, `→`, `implies`
    Implies,
    /// `<->`, `↔`, `iff`
    Iff,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of input; always the last token produced
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(name) => write!(f, "{}", name),
            TokenKind::Const(true) => write!(f, "true"),
            TokenKind::Const(false) => write!(f, "false"),
            TokenKind::Not => write!(f, "!"),
            TokenKind::And => write!(f, "&"),
            TokenKind::Nand => write!(f, "nand"),
            TokenKind::Or => write!(f, "|"),
            TokenKind::Nor => write!(f, "nor"),
            TokenKind::Xor => write!(f, "^"),
            TokenKind::Implies => write!(f, "->"),
            TokenKind::Iff => write!(f, "<->"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// A token with its source text and byte offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// What the token is
    pub kind: TokenKind,
    /// The exact source text of the token (empty for [`TokenKind::Eof`])
    pub lexeme: &'a str,
    /// Byte offset of the first character
    pub offset: usize,
}

impl Token<'_> {
    /// Byte offset one past the last character
    pub fn end(&self) -> usize {
        self.offset + self.lexeme.len()
    }
}

/// Lazy token stream over an input string
///
/// Yields tokens until (and including) a single [`TokenKind::Eof`], then `None`.
/// After the first error the stream is exhausted. [`Lexer::reset`] restarts from the
/// beginning; cloning gives an independent cursor.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer positioned at the start of `input`
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            done: false,
        }
    }

    /// The text being tokenised
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Rewind to the start of the input
    pub fn reset(&mut self) {
        self.pos = 0;
        self.done = false;
    }

    /// Tokenise the whole input eagerly
    pub fn tokenize(input: &'a str) -> Result<Vec<Token<'a>>, LexError> {
        Lexer::new(input).collect()
    }

    /// Adapter producing `(start, kind, end)` triples without the end-of-input token
    ///
    /// This is the shape the generated LALR parser consumes.
    pub fn spanned(self) -> impl Iterator<Item = Result<(usize, TokenKind, usize), LexError>> + 'a {
        self.filter_map(|token| match token {
            Ok(Token {
                kind: TokenKind::Eof,
                ..
            }) => None,
            Ok(token) => {
                let end = token.end();
                Some(Ok((token.offset, token.kind, end)))
            }
            Err(e) => Some(Err(e)),
        })
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token<'a> {
        Token {
            kind,
            lexeme: &self.input[start..self.pos],
            offset: start,
        }
    }

    fn lex_word(&mut self, start: usize) -> Token<'a> {
        while let Some(c) = self.peek_char() {
            if c.is_ascii_alphanumeric() || c == '_' {
                self.pos += 1;
            } else {
                break;
            }
        }
        let word = &self.input[start..self.pos];
        let kind = match word.to_ascii_lowercase().as_str() {
            "true" | "t" => TokenKind::Const(true),
            "false" | "f" => TokenKind::Const(false),
            "not" => TokenKind::Not,
            "and" => TokenKind::And,
            "nand" => TokenKind::Nand,
            "or" => TokenKind::Or,
            "nor" => TokenKind::Nor,
            "xor" => TokenKind::Xor,
            "implies" => TokenKind::Implies,
            "iff" => TokenKind::Iff,
            _ => TokenKind::Ident(Arc::from(word)),
        };
        self.token(kind, start)
    }

    fn lex_digit(&mut self, start: usize, first: char) -> Result<Token<'a>, LexError> {
        let value = match first {
            '0' => false,
            '1' => true,
            other => {
                return Err(LexError {
                    character: other,
                    position: start,
                })
            }
        };
        self.pos += 1;
        // `0`/`1` are constants only when they stand alone
        if let Some(next) = self.peek_char() {
            if next.is_ascii_alphanumeric() || next == '_' {
                return Err(LexError {
                    character: next,
                    position: self.pos,
                });
            }
        }
        Ok(self.token(TokenKind::Const(value), start))
    }

    /// Consume `expected` or fail at the current character (or end of input)
    fn expect(&mut self, expected: char, start: usize) -> Result<(), LexError> {
        match self.peek_char() {
            Some(c) if c == expected => {
                self.pos += c.len_utf8();
                Ok(())
            }
            Some(c) => Err(LexError {
                character: c,
                position: self.pos,
            }),
            // Dangling prefix such as a trailing `-`: report the prefix itself
            None => Err(LexError {
                character: self.input[start..].chars().next().unwrap_or(expected),
                position: start,
            }),
        }
    }

    /// Single-character binary operators may not be doubled
    fn single(&mut self, c: char, kind: TokenKind, start: usize) -> Result<Token<'a>, LexError> {
        self.pos += c.len_utf8();
        if self.peek_char() == Some(c) {
            return Err(LexError {
                character: c,
                position: self.pos,
            });
        }
        Ok(self.token(kind, start))
    }

    fn next_token(&mut self) -> Result<Token<'a>, LexError> {
        self.skip_whitespace();
        let start = self.pos;
        let c = match self.peek_char() {
            Some(c) => c,
            None => return Ok(self.token(TokenKind::Eof, start)),
        };

        match c {
            c if c.is_ascii_alphabetic() || c == '_' => Ok(self.lex_word(start)),
            c if c.is_ascii_digit() => self.lex_digit(start, c),
            '&' => self.single(c, TokenKind::And, start),
            '|' => self.single(c, TokenKind::Or, start),
            '^' => self.single(c, TokenKind::Xor, start),
            '-' => {
                self.pos += 1;
                self.expect('>', start)?;
                Ok(self.token(TokenKind::Implies, start))
            }
            '<' => {
                self.pos += 1;
                self.expect('-', start)?;
                self.expect('>', start)?;
                Ok(self.token(TokenKind::Iff, start))
            }
            _ => {
                let kind = match c {
                    '!' | '¬' => TokenKind::Not,
                    '∧' => TokenKind::And,
                    '∨' => TokenKind::Or,
                    '⊕' => TokenKind::Xor,
                    '→' => TokenKind::Implies,
                    '↔' => TokenKind::Iff,
                    '(' => TokenKind::LParen,
                    ')' => TokenKind::RParen,
                    other => {
                        return Err(LexError {
                            character: other,
                            position: start,
                        })
                    }
                };
                self.pos += c.len_utf8();
                Ok(self.token(kind, start))
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.next_token();
        match &result {
            Ok(Token {
                kind: TokenKind::Eof,
                ..
            })
            | Err(_) => self.done = true,
            Ok(_) => {}
        }
        Some(result)
    }
}
