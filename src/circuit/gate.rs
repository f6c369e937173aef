//! Gate kinds

use crate::logic;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use super::CircuitError;

/// The function computed by a circuit node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    /// True when every input is true
    And,
    /// True when any input is true
    Or,
    /// Inverts its single input
    Not,
    /// True when an odd number of inputs is true
    Xor,
    /// True when an even number of inputs is true
    Xnor,
    /// Negated AND
    Nand,
    /// Negated OR
    Nor,
}

impl Gate {
    /// All gate kinds
    pub const ALL: [Gate; 7] = [
        Gate::And,
        Gate::Or,
        Gate::Not,
        Gate::Xor,
        Gate::Xnor,
        Gate::Nand,
        Gate::Nor,
    ];

    /// Upper-case tag used in netlists
    pub fn name(self) -> &'static str {
        match self {
            Gate::And => "AND",
            Gate::Or => "OR",
            Gate::Not => "NOT",
            Gate::Xor => "XOR",
            Gate::Xnor => "XNOR",
            Gate::Nand => "NAND",
            Gate::Nor => "NOR",
        }
    }

    /// One-line description of what the gate computes
    pub fn describe(self) -> &'static str {
        match self {
            Gate::And => "output is true only when all inputs are true",
            Gate::Or => "output is true when at least one input is true",
            Gate::Not => "output is the inverse of its single input",
            Gate::Xor => "output is true when an odd number of inputs are true",
            Gate::Xnor => "output is true when an even number of inputs are true",
            Gate::Nand => "output is false only when all inputs are true",
            Gate::Nor => "output is true only when all inputs are false",
        }
    }

    /// Whether `count` inputs are acceptable
    ///
    /// NOT takes exactly one input, every other gate at least one.
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Gate::Not => count == 1,
            _ => count >= 1,
        }
    }

    /// Compute the gate over its input values
    pub fn apply(self, values: &[bool]) -> bool {
        match self {
            Gate::And => logic::and(values),
            Gate::Or => logic::or(values),
            Gate::Not => logic::not(values.first().copied().unwrap_or(false)),
            Gate::Xor => logic::xor(values),
            Gate::Xnor => logic::xnor(values),
            Gate::Nand => logic::nand(values),
            Gate::Nor => logic::nor(values),
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Gate {
    type Err = CircuitError;

    /// Case-insensitive gate tag
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gate::ALL
            .into_iter()
            .find(|gate| gate.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CircuitError::UnknownGate {
                name: Arc::from(s),
            })
    }
}
