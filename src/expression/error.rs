//! Error types for lexing, parsing and evaluating boolean expressions

use std::fmt;
use std::io;
use std::sync::Arc;

/// A character in the input that starts no valid token
///
/// `position` is the byte offset of `character` in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// The offending character
    pub character: char,
    /// Byte offset of the character in the input
    pub position: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unrecognised character {:?} at position {}",
            self.character, self.position
        )
    }
}

impl std::error::Error for LexError {}

/// Errors related to boolean expression parsing
///
/// These errors occur when the token sequence does not match the expression grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input contained no tokens at all
    EmptyInput,
    /// A token appeared where the grammar does not allow it
    UnexpectedToken {
        /// The offending lexeme
        found: Arc<str>,
        /// Byte offset of the lexeme
        position: usize,
        /// Constructs the grammar would have accepted here
        expected: Vec<Arc<str>>,
    },
    /// Input ended while an operand or `)` was still required
    UnexpectedEnd {
        /// Byte offset of the end of input
        position: usize,
        /// Constructs the grammar would have accepted here
        expected: Vec<Arc<str>>,
    },
    /// A complete expression was followed by further tokens
    TrailingInput {
        /// The first superfluous lexeme
        found: Arc<str>,
        /// Byte offset of the lexeme
        position: usize,
    },
}

impl ParseError {
    /// Byte offset the error refers to, if any
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::EmptyInput => None,
            ParseError::UnexpectedToken { position, .. }
            | ParseError::UnexpectedEnd { position, .. }
            | ParseError::TrailingInput { position, .. } => Some(*position),
        }
    }
}

fn write_expected(f: &mut fmt::Formatter<'_>, expected: &[Arc<str>]) -> fmt::Result {
    if expected.is_empty() {
        return Ok(());
    }
    write!(f, "; expected ")?;
    if expected.len() > 1 {
        write!(f, "one of ")?;
    }
    for (i, item) in expected.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyInput => write!(f, "Cannot parse an empty expression"),
            ParseError::UnexpectedToken {
                found,
                position,
                expected,
            } => {
                write!(f, "Unexpected token {:?} at position {}", found, position)?;
                write_expected(f, expected)
            }
            ParseError::UnexpectedEnd { position, expected } => {
                write!(f, "Unexpected end of expression at position {}", position)?;
                write_expected(f, expected)
            }
            ParseError::TrailingInput { found, position } => write!(
                f,
                "Unexpected trailing input {:?} at position {}",
                found, position
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Failure while turning text into an expression
///
/// This error type is returned by [`ParsedExpression::parse`](super::ParsedExpression::parse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionParseError {
    /// The text could not be tokenised
    Lex(LexError),
    /// The tokens do not form an expression
    Parse(ParseError),
}

impl fmt::Display for ExpressionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionParseError::Lex(e) => write!(f, "{}", e),
            ExpressionParseError::Parse(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ExpressionParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExpressionParseError::Lex(e) => Some(e),
            ExpressionParseError::Parse(e) => Some(e),
        }
    }
}

impl From<LexError> for ExpressionParseError {
    fn from(err: LexError) -> Self {
        ExpressionParseError::Lex(err)
    }
}

impl From<ParseError> for ExpressionParseError {
    fn from(err: ParseError) -> Self {
        ExpressionParseError::Parse(err)
    }
}

impl From<ExpressionParseError> for io::Error {
    fn from(err: ExpressionParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors raised while evaluating an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The assignment has no value for a variable the expression references
    UndefinedVariable {
        /// Name of the missing variable
        name: Arc<str>,
    },
    /// A truth table over this many variables would exceed the configured limit
    TooManyVariables {
        /// Number of variables requested
        count: usize,
        /// Configured maximum
        limit: usize,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UndefinedVariable { name } => {
                write!(f, "Undefined variable '{}'", name)
            }
            EvalError::TooManyVariables { count, limit } => write!(
                f,
                "Cannot enumerate {} variables: the configured limit is {}",
                count, limit
            ),
        }
    }
}

impl std::error::Error for EvalError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_error_display() {
        let err = LexError {
            character: '#',
            position: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("'#'"));
        assert!(msg.contains("position 2"));
    }

    #[test]
    fn test_unexpected_end_lists_expected() {
        let err = ParseError::UnexpectedEnd {
            position: 3,
            expected: vec![Arc::from("identifier"), Arc::from("(")],
        };
        let msg = err.to_string();
        assert!(msg.contains("position 3"));
        assert!(msg.contains("one of identifier, ("));
    }

    #[test]
    fn test_empty_input_has_no_position() {
        assert_eq!(ParseError::EmptyInput.position(), None);
        assert!(ParseError::EmptyInput.to_string().contains("empty"));
    }

    #[test]
    fn test_expression_parse_error_to_io_error() {
        let err: ExpressionParseError = ParseError::EmptyInput.into();
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_undefined_variable_display() {
        let err = EvalError::UndefinedVariable {
            name: Arc::from("q"),
        };
        assert_eq!(err.to_string(), "Undefined variable 'q'");
    }
}
