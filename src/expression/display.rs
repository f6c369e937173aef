//! Display formatting for boolean expressions

use super::{Expr, ParsedExpression};
use std::fmt;

/// Binding strength of each node kind; higher binds tighter
fn precedence(expr: &Expr) -> u8 {
    match expr {
        Expr::Iff(..) => 1,
        Expr::Implies(..) => 2,
        Expr::Or(..) => 3,
        Expr::Xor(..) => 4,
        Expr::And(..) => 5,
        Expr::Not(_) => 6,
        Expr::Variable(_) | Expr::Constant(_) => 7,
    }
}

impl Expr {
    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, parens: bool) -> fmt::Result {
        if parens {
            write!(f, "(")?;
            self.fmt_minimal(f)?;
            write!(f, ")")
        } else {
            self.fmt_minimal(f)
        }
    }

    fn fmt_binary(
        &self,
        f: &mut fmt::Formatter<'_>,
        left: &Expr,
        symbol: &str,
        right: &Expr,
    ) -> fmt::Result {
        let own = precedence(self);
        // Left-associative: an equal-precedence right operand must keep its parentheses
        left.fmt_operand(f, precedence(left) < own)?;
        write!(f, " {} ", symbol)?;
        right.fmt_operand(f, precedence(right) <= own)
    }

    /// Format with operator precedence context to minimize parentheses
    fn fmt_minimal(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Constant(val) => write!(f, "{}", if *val { "1" } else { "0" }),
            Expr::Not(inner) => {
                write!(f, "!")?;
                inner.fmt_operand(f, precedence(inner) < precedence(self))
            }
            Expr::And(l, r) => self.fmt_binary(f, l, "&", r),
            Expr::Xor(l, r) => self.fmt_binary(f, l, "^", r),
            Expr::Or(l, r) => self.fmt_binary(f, l, "|", r),
            Expr::Implies(l, r) => self.fmt_binary(f, l, "->", r),
            Expr::Iff(l, r) => self.fmt_binary(f, l, "<->", r),
        }
    }
}

/// Display formatting for boolean expressions
///
/// Uses the ASCII operator spellings with the minimum parentheses the grammar needs, so
/// the output parses back to the same tree.
///
/// # Examples
///
/// ```
/// use proplogic::Expr;
///
/// let a = Expr::variable("a");
/// let b = Expr::variable("b");
/// let c = Expr::variable("c");
///
/// assert_eq!(a.and(&b).or(&c).to_string(), "a & b | c");
/// assert_eq!(a.or(&b).and(&c).to_string(), "(a | b) & c");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_minimal(f)
    }
}

impl fmt::Display for ParsedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.root(), f)
    }
}
