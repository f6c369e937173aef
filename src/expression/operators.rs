//! Operator overloading for boolean expressions
//!
//! `&`, `|`, `^` and `!` build the corresponding [`Expr`] nodes. Implication and the
//! biconditional have no Rust operator; use [`Expr::implies`] and [`Expr::iff`].

use super::Expr;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// Logical AND operator for references: `&a & &b`
///
/// # Examples
///
/// ```
/// use proplogic::Expr;
///
/// let a = Expr::variable("a");
/// let b = Expr::variable("b");
/// assert_eq!(&a & &b, a.and(&b));
/// ```
impl BitAnd for &Expr {
    type Output = Expr;

    fn bitand(self, rhs: &Expr) -> Expr {
        self.and(rhs)
    }
}

/// Logical AND operator: `a & b`
impl BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Expr) -> Expr {
        Expr::And(Box::new(self), Box::new(rhs))
    }
}

/// Logical OR operator for references: `&a | &b`
impl BitOr for &Expr {
    type Output = Expr;

    fn bitor(self, rhs: &Expr) -> Expr {
        self.or(rhs)
    }
}

/// Logical OR operator: `a | b`
impl BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Expr) -> Expr {
        Expr::Or(Box::new(self), Box::new(rhs))
    }
}

/// Exclusive OR operator for references: `&a ^ &b`
impl BitXor for &Expr {
    type Output = Expr;

    fn bitxor(self, rhs: &Expr) -> Expr {
        self.xor(rhs)
    }
}

/// Exclusive OR operator: `a ^ b`
impl BitXor for Expr {
    type Output = Expr;

    fn bitxor(self, rhs: Expr) -> Expr {
        Expr::Xor(Box::new(self), Box::new(rhs))
    }
}

/// Logical NOT operator for references: `!&a`
impl Not for &Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        Expr::not(self)
    }
}

/// Logical NOT operator: `!a`
impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        Expr::Not(Box::new(self))
    }
}
