//! Evaluation of boolean expressions against a variable assignment

use super::error::EvalError;
use super::{Expr, ParsedExpression};
use crate::error::{LogicError, VectorLengthMismatch};
use crate::logic;
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::sync::Arc;

/// A source of variable values
///
/// Implemented for maps keyed by anything that borrows as `str` (`&str`, `String`,
/// `Arc<str>`) and for slices of `(name, value)` pairs.
pub trait Valuation {
    /// Value of `name`, or `None` if the variable is not assigned
    fn value_of(&self, name: &str) -> Option<bool>;
}

impl<K, S> Valuation for HashMap<K, bool, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    fn value_of(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

impl<K> Valuation for BTreeMap<K, bool>
where
    K: Borrow<str> + Ord,
{
    fn value_of(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

impl<K: AsRef<str>> Valuation for [(K, bool)] {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.iter()
            .find(|(key, _)| key.as_ref() == name)
            .map(|(_, value)| *value)
    }
}

impl Expr {
    /// Evaluate the expression with a given variable assignment
    ///
    /// Both operands of every binary node are evaluated; there is no short-circuiting.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::UndefinedVariable`] for the first variable (left to right)
    /// that the assignment does not cover.
    ///
    /// # Examples
    ///
    /// ```
    /// use proplogic::Expr;
    /// use std::collections::HashMap;
    ///
    /// let a = Expr::variable("a");
    /// let b = Expr::variable("b");
    /// let expr = a.implies(&b);
    ///
    /// let mut assignment = HashMap::new();
    /// assignment.insert("a", true);
    /// assignment.insert("b", false);
    /// assert_eq!(expr.evaluate(&assignment), Ok(false));
    ///
    /// assignment.insert("a", false);
    /// assert_eq!(expr.evaluate(&assignment), Ok(true));
    /// ```
    pub fn evaluate<V>(&self, assignment: &V) -> Result<bool, EvalError>
    where
        V: Valuation + ?Sized,
    {
        match self {
            Expr::Variable(name) => {
                assignment
                    .value_of(name)
                    .ok_or_else(|| EvalError::UndefinedVariable {
                        name: Arc::clone(name),
                    })
            }
            Expr::Constant(value) => Ok(*value),
            Expr::Not(inner) => Ok(logic::not(inner.evaluate(assignment)?)),
            Expr::And(l, r) => Ok(logic::and(&Self::operands(l, r, assignment)?)),
            Expr::Or(l, r) => Ok(logic::or(&Self::operands(l, r, assignment)?)),
            Expr::Xor(l, r) => Ok(logic::xor(&Self::operands(l, r, assignment)?)),
            Expr::Implies(l, r) => Ok(logic::implies(&Self::operands(l, r, assignment)?)),
            Expr::Iff(l, r) => Ok(logic::iff(&Self::operands(l, r, assignment)?)),
        }
    }

    fn operands<V>(left: &Expr, right: &Expr, assignment: &V) -> Result<[bool; 2], EvalError>
    where
        V: Valuation + ?Sized,
    {
        let l = left.evaluate(assignment)?;
        let r = right.evaluate(assignment)?;
        Ok([l, r])
    }
}

impl ParsedExpression {
    /// Evaluate against a named assignment
    pub fn evaluate<V>(&self, assignment: &V) -> Result<bool, EvalError>
    where
        V: Valuation + ?Sized,
    {
        self.root().evaluate(assignment)
    }

    /// Evaluate with positional values matched against [`variables`](Self::variables)
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::VectorLengthMismatch`] if `values` does not have exactly one
    /// entry per variable.
    pub fn evaluate_values(&self, values: &[bool]) -> Result<bool, LogicError> {
        if values.len() != self.variables().len() {
            return Err(LogicError::VectorLengthMismatch {
                operation: "evaluate_values",
                source: VectorLengthMismatch {
                    expected: self.variables().len(),
                    actual: values.len(),
                },
            });
        }
        let assignment: Vec<(&str, bool)> = self
            .variables()
            .iter()
            .map(|name| name.as_ref())
            .zip(values.iter().copied())
            .collect();
        self.evaluate(assignment.as_slice())
            .map_err(|e| LogicError::eval("evaluate_values", e))
    }
}
