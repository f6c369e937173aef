//! # proplogic
//!
//! Propositional logic toolkit: parse formulas written with ASCII, Unicode or keyword
//! operators, evaluate them, enumerate truth tables, classify them as tautologies,
//! contradictions or contingencies, convert them to conjunctive normal form, decide
//! satisfiability, and simulate explicitly wired networks of logic gates.
//!
//! ## Expressions
//!
//! ```
//! use proplogic::{evaluate_expression, ParsedExpression};
//! use std::collections::HashMap;
//!
//! # fn main() -> Result<(), proplogic::LogicError> {
//! let assignment: HashMap<&str, bool> = [("A", false), ("B", true), ("C", false)].into();
//! assert!(!evaluate_expression("A | B & C", &assignment)?);
//!
//! // Unicode and keyword spellings are interchangeable
//! let parsed = ParsedExpression::parse("¬A ∧ B").unwrap();
//! assert_eq!(parsed.to_string(), "!A & B");
//! # Ok(())
//! # }
//! ```
//!
//! Expressions can also be built in code, either with methods and operators or with the
//! [`expr!`] macro:
//!
//! ```
//! use proplogic::{expr, Expr};
//!
//! let a = Expr::variable("a");
//! let b = Expr::variable("b");
//! assert_eq!(expr!(a -> b), a.implies(&b));
//! assert_eq!(expr!(!a & b), !&a & b.clone());
//! ```
//!
//! ## Truth tables and laws
//!
//! ```
//! use proplogic::{generate_truth_table_from_expression, tautology, contingency};
//!
//! # fn main() -> Result<(), proplogic::LogicError> {
//! let table = generate_truth_table_from_expression("a -> b", &[])?;
//! assert_eq!(table.minterms(), vec![0, 1, 3]);
//!
//! // De Morgan
//! assert!(tautology(&["a", "b"], "!(a & b) <-> !a | !b")?);
//! assert!(contingency(&[], "a ^ b")?);
//! # Ok(())
//! # }
//! ```
//!
//! [`PropertyChecker`] answers the same questions through the SAT solver when the
//! [`LogicConfig`] selects [`ProofSystem::Sat`].
//!
//! ## CNF and satisfiability
//!
//! ```
//! use proplogic::{convert_to_cnf, solve};
//!
//! # fn main() -> Result<(), proplogic::LogicError> {
//! let cnf = convert_to_cnf("a & !a")?;
//! assert!(!solve(&cnf).is_satisfiable());
//!
//! let cnf = convert_to_cnf("(a -> b) & a")?;
//! let result = solve(&cnf);
//! assert_eq!(result.value("b"), Some(true));
//! # Ok(())
//! # }
//! ```
//!
//! ## Circuits
//!
//! ```
//! use proplogic::{Circuit, Gate};
//! use std::collections::HashMap;
//!
//! # fn main() -> Result<(), proplogic::circuit::CircuitError> {
//! let mut adder = Circuit::new(&["a", "b"]);
//! adder.add_node("sum", Gate::Xor, &["a", "b"])?;
//! adder.add_node("carry", Gate::And, &["a", "b"])?;
//! adder.set_outputs(&["sum", "carry"])?;
//!
//! let inputs: HashMap<&str, bool> = [("a", true), ("b", true)].into();
//! let outputs = adder.simulate(&inputs)?;
//! assert_eq!(outputs["sum"], false);
//! assert_eq!(outputs["carry"], true);
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Each module reports failures with its own error type; the crate-level functions wrap
//! them in [`LogicError`], which names the failed operation and the [`Stage`] it failed
//! in. Malformed input never panics.

pub mod circuit;
pub mod cnf;
pub mod error;
pub mod expression;
pub mod logic;
pub mod truth_table;

pub use circuit::{Circuit, CircuitError, Gate};
pub use cnf::{Clause, CnfError, CnfFormula, Literal, SatError, Solver, SolverResult};
pub use error::{LogicError, Stage, VectorLengthMismatch};
pub use expression::{Expr, ExprNode, ParsedExpression, Valuation};
pub use truth_table::{Property, PropertyChecker, TruthTable, TruthTableRow};

// Re-export the procedural macro
pub use proplogic_macros::expr;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// How property checks are decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProofSystem {
    /// Enumerate the truth table
    #[default]
    Classical,
    /// Refute the negation with the SAT solver
    Sat,
}

impl FromStr for ProofSystem {
    type Err = SatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classical" => Ok(ProofSystem::Classical),
            "sat" => Ok(ProofSystem::Sat),
            _ => Err(SatError::Unavailable {
                name: Arc::from(s),
            }),
        }
    }
}

impl fmt::Display for ProofSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProofSystem::Classical => write!(f, "classical"),
            ProofSystem::Sat => write!(f, "sat"),
        }
    }
}

/// Configuration shared by truth tables, CNF conversion, the solver and property checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicConfig {
    /// Proof system used by [`PropertyChecker`]
    pub system: ProofSystem,
    /// Largest variable count a truth table may enumerate
    pub max_table_variables: usize,
    /// Abort CNF conversion beyond this many clauses
    pub max_clauses: Option<usize>,
    /// Abort a satisfiability search after this many branching decisions
    pub solver_decision_limit: Option<u64>,
}

impl Default for LogicConfig {
    fn default() -> Self {
        LogicConfig {
            system: ProofSystem::Classical,
            max_table_variables: 24,
            max_clauses: None,
            solver_decision_limit: None,
        }
    }
}

impl LogicConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

fn parse(operation: &'static str, text: &str) -> Result<ParsedExpression, LogicError> {
    ParsedExpression::parse(text).map_err(|e| LogicError::parsing(operation, e))
}

/// Parse `text` and evaluate it under `assignment`
///
/// # Errors
///
/// Lexing and parsing failures, or [`EvalError::UndefinedVariable`](expression::EvalError)
/// for a variable the assignment lacks.
pub fn evaluate_expression<V>(text: &str, assignment: &V) -> Result<bool, LogicError>
where
    V: Valuation + ?Sized,
{
    const OP: &str = "evaluate_expression";
    parse(OP, text)?
        .evaluate(assignment)
        .map_err(|e| LogicError::eval(OP, e))
}

/// Check that `text` is a well-formed expression without evaluating it
pub fn validate_expression(text: &str) -> Result<(), LogicError> {
    ParsedExpression::validate(text).map_err(|e| LogicError::parsing("validate_expression", e))
}

/// Parse `text` and enumerate its truth table
///
/// An empty `order` uses the variables in order of first appearance.
pub fn generate_truth_table_from_expression(
    text: &str,
    order: &[&str],
) -> Result<TruthTable, LogicError> {
    const OP: &str = "generate_truth_table_from_expression";
    let parsed = parse(OP, text)?;
    let table = if order.is_empty() {
        TruthTable::from_expression(parsed.root(), parsed.variables())
    } else {
        TruthTable::from_expression(parsed.root(), order)
    };
    table.map_err(|e| LogicError::eval(OP, e))
}

/// Parse `text` and convert it to conjunctive normal form
pub fn convert_to_cnf(text: &str) -> Result<CnfFormula, LogicError> {
    const OP: &str = "convert_to_cnf";
    let parsed = parse(OP, text)?;
    CnfFormula::from_expr(parsed.root()).map_err(|e| LogicError::convert(OP, e))
}

/// Decide satisfiability of `formula` without a decision budget
pub fn solve(formula: &CnfFormula) -> SolverResult {
    match Solver::default().solve(formula) {
        Ok(result) => result,
        // The default solver has no decision limit
        Err(err) => unreachable!("unbounded search gave up: {}", err),
    }
}

/// Whether `text` is true under every assignment of `variables`
///
/// An empty variable list uses the expression's own variables.
pub fn tautology(variables: &[&str], text: &str) -> Result<bool, LogicError> {
    let parsed = parse("tautology", text)?;
    PropertyChecker::new(&LogicConfig::default()).is_tautology(&parsed, variables)
}

/// Whether `text` is false under every assignment of `variables`
pub fn contradiction(variables: &[&str], text: &str) -> Result<bool, LogicError> {
    let parsed = parse("contradiction", text)?;
    PropertyChecker::new(&LogicConfig::default()).is_contradiction(&parsed, variables)
}

/// Whether `text` is true under some assignments and false under others
pub fn contingency(variables: &[&str], text: &str) -> Result<bool, LogicError> {
    let parsed = parse("contingency", text)?;
    PropertyChecker::new(&LogicConfig::default()).is_contingency(&parsed, variables)
}

/// Whether `lhs` and `rhs` agree under every assignment of `variables`
///
/// An empty variable list uses the variables of both sides, `lhs` first.
pub fn equivalent(variables: &[&str], lhs: &str, rhs: &str) -> Result<bool, LogicError> {
    let lhs = parse("equivalent", lhs)?;
    let rhs = parse("equivalent", rhs)?;
    PropertyChecker::new(&LogicConfig::default()).equivalent(lhs.root(), rhs.root(), variables)
}

/// Simulate `circuit` under `inputs`, returning every output value
///
/// # Errors
///
/// Any [`CircuitError`] from [`Circuit::simulate`], reported in the simulate stage.
pub fn simulate_circuit<V>(
    circuit: &mut Circuit,
    inputs: &V,
) -> Result<BTreeMap<Arc<str>, bool>, LogicError>
where
    V: Valuation + ?Sized,
{
    circuit
        .simulate(inputs)
        .map_err(|e| LogicError::circuit("simulate_circuit", e))
}

/// Tabulate one circuit node over its declared inputs, honouring `config`
pub fn circuit_truth_table(
    config: &LogicConfig,
    circuit: &mut Circuit,
    output: &str,
) -> Result<TruthTable, LogicError> {
    circuit
        .truth_table_with_config(config, output)
        .map_err(|e| LogicError::circuit("circuit_truth_table", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = LogicConfig::new();
        assert_eq!(config.system, ProofSystem::Classical);
        assert_eq!(config.max_table_variables, 24);
        assert_eq!(config.max_clauses, None);
        assert_eq!(config.solver_decision_limit, None);
    }

    #[test]
    fn test_proof_system_from_str() {
        assert_eq!("SAT".parse::<ProofSystem>(), Ok(ProofSystem::Sat));
        assert_eq!("classical".parse::<ProofSystem>(), Ok(ProofSystem::Classical));
        assert_eq!(
            "bdd".parse::<ProofSystem>(),
            Err(SatError::Unavailable {
                name: Arc::from("bdd")
            })
        );
    }

    #[test]
    fn test_operation_names_in_errors() {
        let err = validate_expression("a &").unwrap_err();
        assert_eq!(err.operation(), "validate_expression");
        assert_eq!(err.stage(), Stage::Parse);

        let err = convert_to_cnf("a $ b").unwrap_err();
        assert_eq!(err.operation(), "convert_to_cnf");
        assert_eq!(err.stage(), Stage::Lex);

        let err = evaluate_expression("a & b", &[("a", true)][..]).unwrap_err();
        assert_eq!(err.operation(), "evaluate_expression");
        assert_eq!(err.stage(), Stage::Evaluate);
    }

    #[test]
    fn test_truth_table_with_explicit_order() {
        let table = generate_truth_table_from_expression("a & !b", &["b", "a"]).unwrap();
        let names: Vec<&str> = table.variables().iter().map(|v| v.as_ref()).collect();
        assert_eq!(names, vec!["b", "a"]);
        // b=F, a=T is row 1
        assert_eq!(table.minterms(), vec![1]);
    }

    #[test]
    fn test_circuit_errors_report_simulate_stage() {
        let mut circuit = Circuit::new(&["a"]);
        circuit.add_node("x", Gate::Not, &["y"]).unwrap();
        circuit.add_node("y", Gate::Not, &["x"]).unwrap();
        circuit.set_outputs(&["x"]).unwrap();

        let err = simulate_circuit(&mut circuit, &[("a", true)][..]).unwrap_err();
        assert_eq!(err.operation(), "simulate_circuit");
        assert_eq!(err.stage(), Stage::Simulate);

        let config = LogicConfig {
            max_table_variables: 0,
            ..LogicConfig::default()
        };
        let err = circuit_truth_table(&config, &mut circuit, "x").unwrap_err();
        assert_eq!(err.operation(), "circuit_truth_table");
        assert!(matches!(
            err,
            LogicError::Circuit {
                source: CircuitError::TooManyInputs { count: 1, limit: 0 },
                ..
            }
        ));
    }
}
