//! Crate-level error type
//!
//! Each module has its own error enum; [`LogicError`] wraps them together with the name
//! of the operation that failed, so a caller can always tell which stage (lex, parse,
//! evaluate, convert, solve, simulate) produced a failure.

use crate::circuit::CircuitError;
use crate::cnf::{CnfError, SatError};
use crate::expression::{EvalError, ExpressionParseError, LexError, ParseError};
use std::fmt;
use std::io;

/// The processing stage a failure originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Tokenising source text
    Lex,
    /// Building the expression tree
    Parse,
    /// Evaluating an expression or enumerating a truth table
    Evaluate,
    /// Converting to conjunctive normal form
    Convert,
    /// Satisfiability search
    Solve,
    /// Building or simulating a circuit
    Simulate,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Lex => "lex",
            Stage::Parse => "parse",
            Stage::Evaluate => "evaluate",
            Stage::Convert => "convert",
            Stage::Solve => "solve",
            Stage::Simulate => "simulate",
        };
        write!(f, "{}", name)
    }
}

/// Two operand collections that should have matched in length did not
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorLengthMismatch {
    /// Required length
    pub expected: usize,
    /// Length actually supplied
    pub actual: usize,
}

impl fmt::Display for VectorLengthMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Expected {} values but got {}",
            self.expected, self.actual
        )
    }
}

impl std::error::Error for VectorLengthMismatch {}

/// The main error type of the crate
///
/// Every variant names the public operation that failed and carries the module-level
/// error describing why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicError {
    /// The input contained a character that starts no token
    Lex {
        /// Operation that failed
        operation: &'static str,
        /// Underlying error
        source: LexError,
    },
    /// The token sequence is not a well-formed expression
    Parse {
        /// Operation that failed
        operation: &'static str,
        /// Underlying error
        source: ParseError,
    },
    /// Evaluation referenced an unassigned variable or exceeded a limit
    Eval {
        /// Operation that failed
        operation: &'static str,
        /// Underlying error
        source: EvalError,
    },
    /// Positional values did not match the variable count
    VectorLengthMismatch {
        /// Operation that failed
        operation: &'static str,
        /// Underlying error
        source: VectorLengthMismatch,
    },
    /// CNF conversion was aborted
    Convert {
        /// Operation that failed
        operation: &'static str,
        /// Underlying error
        source: CnfError,
    },
    /// The satisfiability search could not produce an answer
    Solve {
        /// Operation that failed
        operation: &'static str,
        /// Underlying error
        source: SatError,
    },
    /// Circuit construction or simulation failed
    Circuit {
        /// Operation that failed
        operation: &'static str,
        /// Underlying error
        source: CircuitError,
    },
}

impl LogicError {
    /// Wrap a lexing or parsing failure
    pub fn parsing(operation: &'static str, err: ExpressionParseError) -> Self {
        match err {
            ExpressionParseError::Lex(source) => LogicError::Lex { operation, source },
            ExpressionParseError::Parse(source) => LogicError::Parse { operation, source },
        }
    }

    /// Wrap an evaluation failure
    pub fn eval(operation: &'static str, source: EvalError) -> Self {
        LogicError::Eval { operation, source }
    }

    /// Wrap a CNF conversion failure
    pub fn convert(operation: &'static str, source: CnfError) -> Self {
        LogicError::Convert { operation, source }
    }

    /// Wrap a solver failure
    pub fn solve(operation: &'static str, source: SatError) -> Self {
        LogicError::Solve { operation, source }
    }

    /// Wrap a circuit failure
    pub fn circuit(operation: &'static str, source: CircuitError) -> Self {
        LogicError::Circuit { operation, source }
    }

    /// Stage the failure originated from
    pub fn stage(&self) -> Stage {
        match self {
            LogicError::Lex { .. } => Stage::Lex,
            LogicError::Parse { .. } => Stage::Parse,
            LogicError::Eval { .. } | LogicError::VectorLengthMismatch { .. } => Stage::Evaluate,
            LogicError::Convert { .. } => Stage::Convert,
            LogicError::Solve { .. } => Stage::Solve,
            LogicError::Circuit { .. } => Stage::Simulate,
        }
    }

    /// Name of the public operation that failed
    pub fn operation(&self) -> &'static str {
        match self {
            LogicError::Lex { operation, .. }
            | LogicError::Parse { operation, .. }
            | LogicError::Eval { operation, .. }
            | LogicError::VectorLengthMismatch { operation, .. }
            | LogicError::Convert { operation, .. }
            | LogicError::Solve { operation, .. }
            | LogicError::Circuit { operation, .. } => *operation,
        }
    }
}

impl fmt::Display for LogicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed during {}: ", self.operation(), self.stage())?;
        match self {
            LogicError::Lex { source, .. } => write!(f, "{}", source),
            LogicError::Parse { source, .. } => write!(f, "{}", source),
            LogicError::Eval { source, .. } => write!(f, "{}", source),
            LogicError::VectorLengthMismatch { source, .. } => write!(f, "{}", source),
            LogicError::Convert { source, .. } => write!(f, "{}", source),
            LogicError::Solve { source, .. } => write!(f, "{}", source),
            LogicError::Circuit { source, .. } => write!(f, "{}", source),
        }
    }
}

impl std::error::Error for LogicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogicError::Lex { source, .. } => Some(source),
            LogicError::Parse { source, .. } => Some(source),
            LogicError::Eval { source, .. } => Some(source),
            LogicError::VectorLengthMismatch { source, .. } => Some(source),
            LogicError::Convert { source, .. } => Some(source),
            LogicError::Solve { source, .. } => Some(source),
            LogicError::Circuit { source, .. } => Some(source),
        }
    }
}

// Conversion from LogicError to io::Error for callers working in io::Result
impl From<LogicError> for io::Error {
    fn from(err: LogicError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::sync::Arc;

    #[test]
    fn test_stage_of_each_variant() {
        let lex = LogicError::parsing(
            "evaluate_expression",
            ExpressionParseError::Lex(LexError {
                character: '#',
                position: 0,
            }),
        );
        assert_eq!(lex.stage(), Stage::Lex);

        let parse = LogicError::parsing("validate_expression", ParseError::EmptyInput.into());
        assert_eq!(parse.stage(), Stage::Parse);
        assert_eq!(parse.operation(), "validate_expression");

        let circuit = LogicError::circuit(
            "simulate",
            CircuitError::MissingInput {
                name: Arc::from("a"),
            },
        );
        assert_eq!(circuit.stage(), Stage::Simulate);
    }

    #[test]
    fn test_display_names_operation_and_stage() {
        let err = LogicError::eval(
            "evaluate_expression",
            EvalError::UndefinedVariable {
                name: Arc::from("x"),
            },
        );
        let msg = err.to_string();
        assert!(msg.starts_with("evaluate_expression failed during evaluate"));
        assert!(msg.contains("'x'"));
    }

    #[test]
    fn test_error_trait_source() {
        let err = LogicError::VectorLengthMismatch {
            operation: "evaluate_values",
            source: VectorLengthMismatch {
                expected: 2,
                actual: 3,
            },
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("Expected 2 values but got 3"));
    }

    #[test]
    fn test_io_error_conversion() {
        let err = LogicError::parsing("convert_to_cnf", ParseError::EmptyInput.into());
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
