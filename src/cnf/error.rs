//! Error types for CNF conversion and satisfiability search

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors raised while converting an expression to conjunctive normal form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CnfError {
    /// Distribution would produce more clauses than the configured limit
    ClauseLimitExceeded {
        /// Configured maximum number of clauses
        limit: usize,
        /// Number of clauses the next expansion step needed
        required: usize,
    },
}

impl fmt::Display for CnfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CnfError::ClauseLimitExceeded { limit, required } => write!(
                f,
                "CNF expansion needs {} clauses, exceeding the limit of {}",
                required, limit
            ),
        }
    }
}

impl std::error::Error for CnfError {}

impl From<CnfError> for io::Error {
    fn from(err: CnfError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors raised by the satisfiability search or the proof system selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SatError {
    /// The search made more branching decisions than the configured budget allows
    DecisionLimitExceeded {
        /// Configured maximum number of decisions
        limit: u64,
    },
    /// The requested proof system does not exist
    Unavailable {
        /// Name that was requested
        name: Arc<str>,
    },
}

impl fmt::Display for SatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SatError::DecisionLimitExceeded { limit } => {
                write!(f, "Solver gave up after {} decisions", limit)
            }
            SatError::Unavailable { name } => write!(
                f,
                "Unknown proof system '{}' (expected 'classical' or 'sat')",
                name
            ),
        }
    }
}

impl std::error::Error for SatError {}

impl From<SatError> for io::Error {
    fn from(err: SatError) -> Self {
        io::Error::new(io::ErrorKind::Other, err)
    }
}
