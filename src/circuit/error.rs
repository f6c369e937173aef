//! Error types for circuit construction and simulation

use super::Gate;
use crate::expression::EvalError;
use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors raised while building or simulating a circuit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CircuitError {
    /// A node with this id already exists
    DuplicateNode {
        /// Node id
        id: Arc<str>,
    },
    /// The gate does not accept this many inputs
    InvalidArity {
        /// Node id
        id: Arc<str>,
        /// Gate of the node
        gate: Gate,
        /// Number of inputs supplied
        inputs: usize,
    },
    /// An output id names no node
    UnknownOutput {
        /// Requested output id
        id: Arc<str>,
    },
    /// A gate tag that does not exist
    UnknownGate {
        /// Tag that was given
        name: Arc<str>,
    },
    /// Simulation was not given a value for a declared input
    MissingInput {
        /// Input name
        name: Arc<str>,
    },
    /// A node input is neither a declared input nor a node id
    UnresolvedReference {
        /// Node holding the reference
        node: Arc<str>,
        /// The unresolved name
        reference: Arc<str>,
    },
    /// Node wiring loops back through this node
    Cycle {
        /// A node on the cycle
        node: Arc<str>,
    },
    /// An output was not computed by the last simulation
    OutputNotEvaluated {
        /// Output id
        id: Arc<str>,
    },
    /// Tabulating the circuit would exceed the configured number of inputs
    TooManyInputs {
        /// Declared inputs
        count: usize,
        /// Configured maximum
        limit: usize,
    },
}

impl fmt::Display for CircuitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CircuitError::DuplicateNode { id } => write!(f, "Node '{}' already exists", id),
            CircuitError::InvalidArity { id, gate, inputs } => {
                if *gate == Gate::Not {
                    write!(f, "{} node '{}' needs exactly 1 input, got {}", gate, id, inputs)
                } else {
                    write!(f, "{} node '{}' needs at least 1 input, got {}", gate, id, inputs)
                }
            }
            CircuitError::UnknownOutput { id } => write!(f, "Output '{}' is not a node", id),
            CircuitError::UnknownGate { name } => write!(f, "Unknown gate type '{}'", name),
            CircuitError::MissingInput { name } => {
                write!(f, "No value supplied for input '{}'", name)
            }
            CircuitError::UnresolvedReference { node, reference } => write!(
                f,
                "Node '{}' references '{}', which is neither an input nor a node",
                node, reference
            ),
            CircuitError::Cycle { node } => {
                write!(f, "Circuit contains a cycle through node '{}'", node)
            }
            CircuitError::OutputNotEvaluated { id } => {
                write!(f, "Output '{}' has not been evaluated", id)
            }
            CircuitError::TooManyInputs { count, limit } => write!(
                f,
                "Cannot tabulate {} inputs: the limit is {}",
                count, limit
            ),
        }
    }
}

impl std::error::Error for CircuitError {}

impl From<EvalError> for CircuitError {
    fn from(err: EvalError) -> Self {
        match err {
            EvalError::UndefinedVariable { name } => CircuitError::MissingInput { name },
            EvalError::TooManyVariables { count, limit } => {
                CircuitError::TooManyInputs { count, limit }
            }
        }
    }
}

impl From<CircuitError> for io::Error {
    fn from(err: CircuitError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
