//! Tautology, contradiction, contingency and equivalence checks
//!
//! [`PropertyChecker`] answers through the proof system its [`LogicConfig`] selects.
//! The classical system enumerates the truth table. The SAT system refutes instead: `E`
//! is a tautology exactly when the CNF of `!E` is unsatisfiable, and a contradiction
//! exactly when the CNF of `E` is unsatisfiable. Both systems give the same answers.

use super::TruthTable;
use crate::cnf::{CnfFormula, Solver};
use crate::expression::{EvalError, Expr, ParsedExpression};
use crate::{LogicConfig, LogicError, ProofSystem};
use std::fmt;
use std::sync::Arc;

/// Classification of a formula over its assignments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// True under every assignment
    Tautology,
    /// False under every assignment
    Contradiction,
    /// True under some assignments and false under others
    Contingency,
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Property::Tautology => write!(f, "tautology"),
            Property::Contradiction => write!(f, "contradiction"),
            Property::Contingency => write!(f, "contingency"),
        }
    }
}

/// Property checks bound to a configuration
///
/// Every check takes the variable list to quantify over; an empty list means the
/// expression's own variables. Naming a variable the expression uses but the list omits
/// is an [`EvalError::UndefinedVariable`] in either proof system.
#[derive(Debug, Clone, Copy)]
pub struct PropertyChecker<'a> {
    config: &'a LogicConfig,
}

impl<'a> PropertyChecker<'a> {
    /// Create a checker using `config`
    pub fn new(config: &'a LogicConfig) -> Self {
        PropertyChecker { config }
    }

    /// The configuration in use
    pub fn config(&self) -> &LogicConfig {
        self.config
    }

    /// Classify `expr` over `variables`
    pub fn classify<S: AsRef<str>>(
        &self,
        expr: &ParsedExpression,
        variables: &[S],
    ) -> Result<Property, LogicError> {
        self.classify_expr("classify", expr.root(), variables)
    }

    /// Whether `expr` holds under every assignment
    pub fn is_tautology<S: AsRef<str>>(
        &self,
        expr: &ParsedExpression,
        variables: &[S],
    ) -> Result<bool, LogicError> {
        Ok(self.classify_expr("tautology", expr.root(), variables)? == Property::Tautology)
    }

    /// Whether `expr` fails under every assignment
    pub fn is_contradiction<S: AsRef<str>>(
        &self,
        expr: &ParsedExpression,
        variables: &[S],
    ) -> Result<bool, LogicError> {
        Ok(self.classify_expr("contradiction", expr.root(), variables)? == Property::Contradiction)
    }

    /// Whether `expr` holds under some assignments only
    pub fn is_contingency<S: AsRef<str>>(
        &self,
        expr: &ParsedExpression,
        variables: &[S],
    ) -> Result<bool, LogicError> {
        Ok(self.classify_expr("contingency", expr.root(), variables)? == Property::Contingency)
    }

    /// Whether `lhs <-> rhs` is a tautology
    ///
    /// An empty variable list uses the variables of both sides, `lhs` first.
    pub fn equivalent<S: AsRef<str>>(
        &self,
        lhs: &Expr,
        rhs: &Expr,
        variables: &[S],
    ) -> Result<bool, LogicError> {
        let both = lhs.iff(rhs);
        Ok(self.classify_expr("equivalent", &both, variables)? == Property::Tautology)
    }

    fn classify_expr<S: AsRef<str>>(
        &self,
        operation: &'static str,
        expr: &Expr,
        variables: &[S],
    ) -> Result<Property, LogicError> {
        let variables: Vec<Arc<str>> = if variables.is_empty() {
            expr.collect_variables()
        } else {
            variables.iter().map(|v| Arc::from(v.as_ref())).collect()
        };

        match self.config.system {
            ProofSystem::Classical => {
                let table = TruthTable::from_expression_with_config(self.config, expr, &variables)
                    .map_err(|e| LogicError::eval(operation, e))?;
                Ok(table.property())
            }
            ProofSystem::Sat => self.classify_by_refutation(operation, expr, &variables),
        }
    }

    fn classify_by_refutation(
        &self,
        operation: &'static str,
        expr: &Expr,
        variables: &[Arc<str>],
    ) -> Result<Property, LogicError> {
        if let Some(name) = expr
            .collect_variables()
            .into_iter()
            .find(|name| !variables.contains(name))
        {
            return Err(LogicError::eval(operation, EvalError::UndefinedVariable { name }));
        }

        let solver = Solver::new(self.config);
        let satisfiable = |e: &Expr| -> Result<bool, LogicError> {
            let cnf = CnfFormula::from_expr_with_config(self.config, e)
                .map_err(|err| LogicError::convert(operation, err))?;
            let result = solver
                .solve(&cnf)
                .map_err(|err| LogicError::solve(operation, err))?;
            Ok(result.is_satisfiable())
        };

        if !satisfiable(expr)? {
            Ok(Property::Contradiction)
        } else if !satisfiable(&expr.not())? {
            Ok(Property::Tautology)
        } else {
            Ok(Property::Contingency)
        }
    }
}
