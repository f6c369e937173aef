//! Tree traversal operations
//!
//! This module contains the fold operation and the node view it hands to callers.

use super::Expr;

/// Node type for expression tree folding
///
/// This enum represents the structure of an expression node with each child replaced by
/// the already-computed result for that child. It's used with [`Expr::fold`] to traverse
/// and transform expression trees bottom-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprNode<'a, T> {
    /// A variable with the given name
    Variable(&'a str),
    /// A constant boolean value
    Constant(bool),
    /// Logical NOT with result from inner subtree
    Not(T),
    /// Logical AND with results from left and right subtrees
    And(T, T),
    /// Logical OR with results from left and right subtrees
    Or(T, T),
    /// Exclusive OR with results from left and right subtrees
    Xor(T, T),
    /// Implication with results from left and right subtrees
    Implies(T, T),
    /// Biconditional with results from left and right subtrees
    Iff(T, T),
}

impl Expr {
    /// Fold the expression tree depth-first from leaves to root
    ///
    /// The function `f` is called once per node with an [`ExprNode`] holding the results
    /// already computed for the node's children.
    ///
    /// # Examples
    ///
    /// Count the number of operators in an expression:
    ///
    /// ```
    /// use proplogic::{Expr, ExprNode};
    ///
    /// let a = Expr::variable("a");
    /// let b = Expr::variable("b");
    /// let expr = a.and(&b).not();
    ///
    /// let op_count = expr.fold(&|node| match node {
    ///     ExprNode::Variable(_) | ExprNode::Constant(_) => 0,
    ///     ExprNode::Not(inner) => inner + 1,
    ///     ExprNode::And(l, r)
    ///     | ExprNode::Or(l, r)
    ///     | ExprNode::Xor(l, r)
    ///     | ExprNode::Implies(l, r)
    ///     | ExprNode::Iff(l, r) => l + r + 1,
    /// });
    ///
    /// assert_eq!(op_count, 2);
    /// ```
    pub fn fold<T, F>(&self, f: &F) -> T
    where
        F: Fn(ExprNode<T>) -> T,
    {
        match self {
            Expr::Variable(name) => f(ExprNode::Variable(name)),
            Expr::Constant(val) => f(ExprNode::Constant(*val)),
            Expr::Not(inner) => {
                let inner_result = inner.fold(f);
                f(ExprNode::Not(inner_result))
            }
            Expr::And(l, r) => {
                let (l, r) = (l.fold(f), r.fold(f));
                f(ExprNode::And(l, r))
            }
            Expr::Or(l, r) => {
                let (l, r) = (l.fold(f), r.fold(f));
                f(ExprNode::Or(l, r))
            }
            Expr::Xor(l, r) => {
                let (l, r) = (l.fold(f), r.fold(f));
                f(ExprNode::Xor(l, r))
            }
            Expr::Implies(l, r) => {
                let (l, r) = (l.fold(f), r.fold(f));
                f(ExprNode::Implies(l, r))
            }
            Expr::Iff(l, r) => {
                let (l, r) = (l.fold(f), r.fold(f));
                f(ExprNode::Iff(l, r))
            }
        }
    }

    /// Number of nodes in the tree
    pub fn node_count(&self) -> usize {
        self.fold(&|node| match node {
            ExprNode::Variable(_) | ExprNode::Constant(_) => 1,
            ExprNode::Not(inner) => inner + 1,
            ExprNode::And(l, r)
            | ExprNode::Or(l, r)
            | ExprNode::Xor(l, r)
            | ExprNode::Implies(l, r)
            | ExprNode::Iff(l, r) => l + r + 1,
        })
    }

    /// Length of the longest root-to-leaf path, counting nodes
    pub fn depth(&self) -> usize {
        self.fold(&|node: ExprNode<usize>| match node {
            ExprNode::Variable(_) | ExprNode::Constant(_) => 1,
            ExprNode::Not(inner) => inner + 1,
            ExprNode::And(l, r)
            | ExprNode::Or(l, r)
            | ExprNode::Xor(l, r)
            | ExprNode::Implies(l, r)
            | ExprNode::Iff(l, r) => l.max(r) + 1,
        })
    }
}
