//! Parsing support for boolean expressions
//!
//! The hand-written [`Lexer`] feeds a table-driven LALR(1) parser generated from
//! `grammar.lalrpop`. The parse stack is explicit, so deeply parenthesised input does not
//! consume native stack while parsing.

use super::error::{ExpressionParseError, LexError, ParseError};
use super::lexer::{Lexer, TokenKind};
use super::ParsedExpression;
use std::sync::Arc;

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/expression/grammar.rs"));
}

type LalrpopError = lalrpop_util::ParseError<usize, TokenKind, LexError>;

impl ParsedExpression {
    /// Parse a boolean expression from a string
    ///
    /// Supports the ASCII, Unicode and keyword operator spellings listed in the
    /// [module documentation](crate::expression), parentheses for grouping, and the
    /// constants `true`/`false`/`T`/`F`/`1`/`0`.
    ///
    /// # Errors
    ///
    /// - [`ExpressionParseError::Lex`] for characters that start no token
    /// - [`ExpressionParseError::Parse`] for empty input, missing operands, unbalanced
    ///   parentheses and trailing tokens
    pub fn parse(input: &str) -> Result<Self, ExpressionParseError> {
        if input.trim().is_empty() {
            return Err(ParseError::EmptyInput.into());
        }

        let root = parser_impl::FormulaParser::new()
            .parse(Lexer::new(input).spanned())
            .map_err(|e| convert_error(input, e))?;

        Ok(ParsedExpression::from_expr(root))
    }

    /// Check that `input` is a well-formed expression, discarding the tree
    pub fn validate(input: &str) -> Result<(), ExpressionParseError> {
        Self::parse(input).map(|_| ())
    }
}

/// Terminal names arrive quoted (`"\"identifier\""`); keep the bare name
fn clean_expected(expected: Vec<String>) -> Vec<Arc<str>> {
    expected
        .into_iter()
        .map(|name| Arc::from(name.trim_matches('"')))
        .collect()
}

fn lexeme_at(input: &str, start: usize, end: usize) -> Arc<str> {
    Arc::from(input.get(start..end).unwrap_or_default())
}

fn convert_error(input: &str, err: LalrpopError) -> ExpressionParseError {
    match err {
        lalrpop_util::ParseError::User { error } => ExpressionParseError::Lex(error),
        lalrpop_util::ParseError::InvalidToken { location } => {
            let found = input
                .get(location..)
                .and_then(|rest| rest.chars().next())
                .map(|c| Arc::from(c.to_string()))
                .unwrap_or_else(|| Arc::from(""));
            ParseError::UnexpectedToken {
                found,
                position: location,
                expected: Vec::new(),
            }
            .into()
        }
        lalrpop_util::ParseError::UnrecognizedEof { location, expected } => {
            ParseError::UnexpectedEnd {
                position: location,
                expected: clean_expected(expected),
            }
            .into()
        }
        lalrpop_util::ParseError::UnrecognizedToken {
            token: (start, _, end),
            expected,
        } => ParseError::UnexpectedToken {
            found: lexeme_at(input, start, end),
            position: start,
            expected: clean_expected(expected),
        }
        .into(),
        lalrpop_util::ParseError::ExtraToken {
            token: (start, _, end),
        } => ParseError::TrailingInput {
            found: lexeme_at(input, start, end),
            position: start,
        }
        .into(),
    }
}
