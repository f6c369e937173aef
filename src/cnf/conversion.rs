//! Expression to clause conversion
//!
//! Two passes: [`Nnf::from_expr`] eliminates `Implies`, `Iff` and `Xor`, pushes negations
//! down to the variables and folds constants away; [`Nnf::into_clauses`] then distributes
//! disjunction over conjunction. Both passes recurse on the tree depth.

use super::{Clause, CnfError, Literal};
use crate::expression::Expr;
use std::collections::HashSet;

/// Negation normal form with constants folded
///
/// A constant only survives at the root.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Nnf {
    Const(bool),
    Lit(Literal),
    And(Box<Nnf>, Box<Nnf>),
    Or(Box<Nnf>, Box<Nnf>),
}

impl Nnf {
    fn and(left: Nnf, right: Nnf) -> Nnf {
        match (left, right) {
            (Nnf::Const(false), _) | (_, Nnf::Const(false)) => Nnf::Const(false),
            (Nnf::Const(true), other) | (other, Nnf::Const(true)) => other,
            (l, r) => Nnf::And(Box::new(l), Box::new(r)),
        }
    }

    fn or(left: Nnf, right: Nnf) -> Nnf {
        match (left, right) {
            (Nnf::Const(true), _) | (_, Nnf::Const(true)) => Nnf::Const(true),
            (Nnf::Const(false), other) | (other, Nnf::Const(false)) => other,
            (l, r) => Nnf::Or(Box::new(l), Box::new(r)),
        }
    }

    /// Negation normal form of `expr`, or of `!expr` when `negate` is set
    fn from_expr(expr: &Expr, negate: bool) -> Nnf {
        match expr {
            Expr::Variable(name) => Nnf::Lit(Literal::from_arc(name.clone(), negate)),
            Expr::Constant(value) => Nnf::Const(*value != negate),
            Expr::Not(inner) => Nnf::from_expr(inner, !negate),
            Expr::And(l, r) if !negate => Nnf::and(Nnf::from_expr(l, false), Nnf::from_expr(r, false)),
            // !(l & r) = !l | !r
            Expr::And(l, r) => Nnf::or(Nnf::from_expr(l, true), Nnf::from_expr(r, true)),
            Expr::Or(l, r) if !negate => Nnf::or(Nnf::from_expr(l, false), Nnf::from_expr(r, false)),
            // !(l | r) = !l & !r
            Expr::Or(l, r) => Nnf::and(Nnf::from_expr(l, true), Nnf::from_expr(r, true)),
            // l -> r = !l | r
            Expr::Implies(l, r) if !negate => {
                Nnf::or(Nnf::from_expr(l, true), Nnf::from_expr(r, false))
            }
            // !(l -> r) = l & !r
            Expr::Implies(l, r) => Nnf::and(Nnf::from_expr(l, false), Nnf::from_expr(r, true)),
            // l <-> r = (!l | r) & (l | !r), and !(l ^ r) is the same
            Expr::Iff(l, r) if !negate => Self::equivalence(l, r),
            Expr::Xor(l, r) if negate => Self::equivalence(l, r),
            // l ^ r = (l | r) & (!l | !r), and !(l <-> r) is the same
            Expr::Iff(l, r) | Expr::Xor(l, r) => Self::difference(l, r),
        }
    }

    fn equivalence(l: &Expr, r: &Expr) -> Nnf {
        Nnf::and(
            Nnf::or(Nnf::from_expr(l, true), Nnf::from_expr(r, false)),
            Nnf::or(Nnf::from_expr(l, false), Nnf::from_expr(r, true)),
        )
    }

    fn difference(l: &Expr, r: &Expr) -> Nnf {
        Nnf::and(
            Nnf::or(Nnf::from_expr(l, false), Nnf::from_expr(r, false)),
            Nnf::or(Nnf::from_expr(l, true), Nnf::from_expr(r, true)),
        )
    }

    /// Distribute into clauses, checking the optional clause limit at every step
    fn into_clauses(self, limit: Option<usize>) -> Result<Vec<Clause>, CnfError> {
        let check = |required: usize| match limit {
            Some(limit) if required > limit => Err(CnfError::ClauseLimitExceeded { limit, required }),
            _ => Ok(()),
        };

        match self {
            Nnf::Const(true) => Ok(Vec::new()),
            Nnf::Const(false) => Ok(vec![Clause::empty()]),
            Nnf::Lit(lit) => Ok(vec![Clause::new([lit])]),
            Nnf::And(l, r) => {
                let mut clauses = l.into_clauses(limit)?;
                let right = r.into_clauses(limit)?;
                check(clauses.len() + right.len())?;
                clauses.extend(right);
                Ok(dedup(clauses))
            }
            Nnf::Or(l, r) => {
                let left = l.into_clauses(limit)?;
                let right = r.into_clauses(limit)?;
                check(left.len().saturating_mul(right.len()))?;

                let mut clauses = Vec::with_capacity(left.len() * right.len());
                for a in &left {
                    for b in &right {
                        let merged = a.union(b);
                        if !merged.is_tautology() {
                            clauses.push(merged);
                        }
                    }
                }
                Ok(dedup(clauses))
            }
        }
    }
}

fn dedup(clauses: Vec<Clause>) -> Vec<Clause> {
    let mut seen = HashSet::with_capacity(clauses.len());
    clauses
        .into_iter()
        .filter(|clause| seen.insert(clause.clone()))
        .collect()
}

/// Clauses equivalent to `expr`, over its own variables only
pub(super) fn to_clauses(expr: &Expr, limit: Option<usize>) -> Result<Vec<Clause>, CnfError> {
    Nnf::from_expr(expr, false).into_clauses(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nnf(input: &str) -> Nnf {
        let expr: crate::ParsedExpression = input.parse().unwrap();
        Nnf::from_expr(expr.root(), false)
    }

    #[test]
    fn test_constants_fold_away() {
        assert_eq!(nnf("a & 1"), nnf("a"));
        assert_eq!(nnf("a | 0"), nnf("a"));
        assert_eq!(nnf("a & 0"), Nnf::Const(false));
        assert_eq!(nnf("!(a -> 1)"), Nnf::Const(false));
        assert_eq!(nnf("0 <-> 0"), Nnf::Const(true));
    }

    #[test]
    fn test_negation_reaches_the_literals() {
        assert_eq!(
            nnf("!(a | !b)"),
            Nnf::And(
                Box::new(Nnf::Lit(Literal::negative("a"))),
                Box::new(Nnf::Lit(Literal::positive("b")))
            )
        );
    }

    #[test]
    fn test_clause_limit() {
        let expr: crate::ParsedExpression = "(a & b) | (c & d) | (e & f)".parse().unwrap();
        assert_eq!(to_clauses(expr.root(), None).unwrap().len(), 8);
        assert_eq!(
            to_clauses(expr.root(), Some(5)),
            Err(CnfError::ClauseLimitExceeded {
                limit: 5,
                required: 8
            })
        );
    }
}
