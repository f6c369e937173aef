//! Boolean expression types, parsing and evaluation
//!
//! Expressions are plain owned trees ([`Expr`]) that can be built programmatically, with
//! the `expr!` macro, or parsed from text into a [`ParsedExpression`].
//!
//! # Syntax
//!
//! Every operator has an ASCII, a Unicode and a keyword spelling. From tightest to
//! loosest binding:
//!
//! | Operator | Spellings                  |
//! |----------|----------------------------|
//! | NOT      | `!` `¬` `not`              |
//! | AND      | `&` `∧` `and` (and `nand`) |
//! | XOR      | `^` `⊕` `xor`              |
//! | OR       | `\|` `∨` `or` (and `nor`)  |
//! | IMPLIES  | `->` `→` `implies`         |
//! | IFF      | `<->` `↔` `iff`            |
//!
//! Binary operators are left-associative. Constants are `true`/`false`/`T`/`F`/`1`/`0`
//! in any case; identifiers match `[A-Za-z_][A-Za-z0-9_]*`.
//!
//! # Examples
//!
//! ```
//! use proplogic::ParsedExpression;
//! use std::collections::HashMap;
//!
//! # fn main() -> std::io::Result<()> {
//! let parsed = ParsedExpression::parse("a ∧ (b -> not c)")?;
//! assert_eq!(parsed.variables().len(), 3);
//!
//! let assignment: HashMap<&str, bool> = [("a", true), ("b", true), ("c", false)].into();
//! assert_eq!(parsed.evaluate(&assignment), Ok(true));
//! # Ok(())
//! # }
//! ```

// Submodules
mod ast;
mod display;
pub mod error;
mod eval;
pub mod lexer;
mod operators;
mod parser;

pub use ast::ExprNode;
pub use error::{EvalError, ExpressionParseError, LexError, ParseError};
pub use eval::Valuation;
pub use lexer::{Lexer, Token, TokenKind};

use std::collections::HashSet;
use std::str::FromStr;
use std::sync::Arc;

/// A propositional formula
///
/// Each node exclusively owns its children, so the tree is acyclic and is never shared
/// or mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// A named variable
    Variable(Arc<str>),
    /// A constant value (true or false)
    Constant(bool),
    /// Logical NOT of an expression
    Not(Box<Expr>),
    /// Logical AND of two expressions
    And(Box<Expr>, Box<Expr>),
    /// Logical OR of two expressions
    Or(Box<Expr>, Box<Expr>),
    /// Exclusive OR of two expressions
    Xor(Box<Expr>, Box<Expr>),
    /// Material implication `left -> right`
    Implies(Box<Expr>, Box<Expr>),
    /// Biconditional `left <-> right`
    Iff(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Create a variable expression with the given name
    pub fn variable(name: &str) -> Self {
        Expr::Variable(Arc::from(name))
    }

    /// Create a constant expression (true or false)
    pub fn constant(value: bool) -> Self {
        Expr::Constant(value)
    }

    /// Logical AND with another expression
    pub fn and(&self, other: &Expr) -> Expr {
        Expr::And(Box::new(self.clone()), Box::new(other.clone()))
    }

    /// Logical OR with another expression
    pub fn or(&self, other: &Expr) -> Expr {
        Expr::Or(Box::new(self.clone()), Box::new(other.clone()))
    }

    /// Exclusive OR with another expression
    pub fn xor(&self, other: &Expr) -> Expr {
        Expr::Xor(Box::new(self.clone()), Box::new(other.clone()))
    }

    /// Implication `self -> other`
    pub fn implies(&self, other: &Expr) -> Expr {
        Expr::Implies(Box::new(self.clone()), Box::new(other.clone()))
    }

    /// Biconditional `self <-> other`
    pub fn iff(&self, other: &Expr) -> Expr {
        Expr::Iff(Box::new(self.clone()), Box::new(other.clone()))
    }

    /// Logical NOT
    pub fn not(&self) -> Expr {
        Expr::Not(Box::new(self.clone()))
    }

    /// Variable names in order of first appearance, left to right
    pub fn collect_variables(&self) -> Vec<Arc<str>> {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            match node {
                Expr::Variable(name) => {
                    if seen.insert(Arc::clone(name)) {
                        ordered.push(Arc::clone(name));
                    }
                }
                Expr::Constant(_) => {}
                Expr::Not(inner) => stack.push(inner),
                Expr::And(l, r)
                | Expr::Or(l, r)
                | Expr::Xor(l, r)
                | Expr::Implies(l, r)
                | Expr::Iff(l, r) => {
                    // Right first so the left subtree is visited first
                    stack.push(r);
                    stack.push(l);
                }
            }
        }

        ordered
    }
}

impl Drop for Expr {
    // Iterative: tree depth is bounded only by the heap
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut node) = pending.pop() {
            detach_children(&mut node, &mut pending);
        }
    }
}

/// Move the children of `expr` into `pending`, leaving constant leaves in their place
fn detach_children(expr: &mut Expr, pending: &mut Vec<Expr>) {
    let mut take = |child: &mut Box<Expr>| {
        if !matches!(**child, Expr::Variable(_) | Expr::Constant(_)) {
            pending.push(std::mem::replace(&mut **child, Expr::Constant(false)));
        }
    };
    match expr {
        Expr::Variable(_) | Expr::Constant(_) => {}
        Expr::Not(inner) => take(inner),
        Expr::And(l, r)
        | Expr::Or(l, r)
        | Expr::Xor(l, r)
        | Expr::Implies(l, r)
        | Expr::Iff(l, r) => {
            take(l);
            take(r);
        }
    }
}

/// A parsed formula together with its free variables
///
/// The variable list is in order of first appearance in the source text, which is the
/// default column order for truth tables and the branching order for the solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExpression {
    root: Expr,
    variables: Vec<Arc<str>>,
}

impl ParsedExpression {
    /// Wrap an already built expression, discovering its variables
    pub fn from_expr(root: Expr) -> Self {
        let variables = root.collect_variables();
        ParsedExpression { root, variables }
    }

    /// The root of the expression tree
    pub fn root(&self) -> &Expr {
        &self.root
    }

    /// Consume the wrapper, returning the tree
    pub fn into_root(self) -> Expr {
        self.root
    }

    /// Free variables in order of first appearance
    pub fn variables(&self) -> &[Arc<str>] {
        &self.variables
    }
}

impl From<Expr> for ParsedExpression {
    fn from(expr: Expr) -> Self {
        ParsedExpression::from_expr(expr)
    }
}

impl FromStr for ParsedExpression {
    type Err = ExpressionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParsedExpression::parse(s)
    }
}

#[cfg(test)]
mod tests;
