//! Conjunctive normal form and satisfiability
//!
//! [`CnfFormula::from_expr`] turns an [`Expr`] into a conjunction of [`Clause`]s by
//! distribution over the source variables only (no auxiliary variables are introduced),
//! and [`Solver`] decides satisfiability with a DPLL search.
//!
//! ```
//! use proplogic::{CnfFormula, Expr, Solver};
//!
//! let a = Expr::variable("a");
//! let b = Expr::variable("b");
//! let cnf = CnfFormula::from_expr(&a.implies(&b).and(&a)).unwrap();
//!
//! let result = Solver::default().solve(&cnf).unwrap();
//! assert!(result.is_satisfiable());
//! assert_eq!(result.value("b"), Some(true));
//! ```

mod conversion;
mod error;
mod solver;

pub use error::{CnfError, SatError};
pub use solver::{Solver, SolverResult, SolverStats};

use crate::expression::{EvalError, Expr, Valuation};
use crate::LogicConfig;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

/// A variable or its negation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    variable: Arc<str>,
    negated: bool,
}

impl Literal {
    /// The positive literal `name`
    pub fn positive(name: &str) -> Self {
        Literal {
            variable: Arc::from(name),
            negated: false,
        }
    }

    /// The negative literal `!name`
    pub fn negative(name: &str) -> Self {
        Literal {
            variable: Arc::from(name),
            negated: true,
        }
    }

    pub(crate) fn from_arc(variable: Arc<str>, negated: bool) -> Self {
        Literal { variable, negated }
    }

    /// Variable name
    pub fn variable(&self) -> &Arc<str> {
        &self.variable
    }

    /// Whether the literal is negated
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// The complementary literal
    pub fn negate(&self) -> Self {
        Literal {
            variable: Arc::clone(&self.variable),
            negated: !self.negated,
        }
    }

    /// Truth value of the literal when its variable has value `value`
    pub fn satisfied_by(&self, value: bool) -> bool {
        value != self.negated
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "!{}", self.variable)
        } else {
            write!(f, "{}", self.variable)
        }
    }
}

/// A disjunction of literals
///
/// Literals form a set: duplicates collapse and iteration is in sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Clause {
    literals: BTreeSet<Literal>,
}

impl Clause {
    /// Build a clause from literals, collapsing duplicates
    pub fn new<I: IntoIterator<Item = Literal>>(literals: I) -> Self {
        Clause {
            literals: literals.into_iter().collect(),
        }
    }

    /// The empty clause, which no assignment satisfies
    pub fn empty() -> Self {
        Clause::default()
    }

    /// Literals in sorted order
    pub fn literals(&self) -> impl Iterator<Item = &Literal> + '_ {
        self.literals.iter()
    }

    /// Number of distinct literals
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// True for the empty clause
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// A clause containing both `x` and `!x` is satisfied by every assignment
    pub fn is_tautology(&self) -> bool {
        self.literals
            .iter()
            .any(|lit| !lit.negated && self.literals.contains(&lit.negate()))
    }

    /// Union of two clauses
    pub(crate) fn union(&self, other: &Clause) -> Clause {
        Clause {
            literals: self.literals.union(&other.literals).cloned().collect(),
        }
    }

    /// Evaluate the clause; any unassigned variable is an error
    pub fn evaluate<V: Valuation + ?Sized>(&self, assignment: &V) -> Result<bool, EvalError> {
        let mut satisfied = false;
        for lit in &self.literals {
            let value = assignment
                .value_of(&lit.variable)
                .ok_or_else(|| EvalError::UndefinedVariable {
                    name: Arc::clone(&lit.variable),
                })?;
            satisfied |= lit.satisfied_by(value);
        }
        Ok(satisfied)
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Clause::new(iter)
    }
}

/// Parenthesised disjunction; the empty clause prints as `0`
impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literals.is_empty() {
            return write!(f, "0");
        }
        write!(f, "(")?;
        for (i, lit) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{}", lit)?;
        }
        write!(f, ")")
    }
}

/// A conjunction of clauses over an ordered list of source variables
///
/// The variable list keeps every variable of the source expression in first-appearance
/// order, including ones that simplification removed from all clauses. An empty clause
/// list is trivially satisfiable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CnfFormula {
    variables: Vec<Arc<str>>,
    clauses: Vec<Clause>,
}

impl CnfFormula {
    /// Assemble a formula from clauses
    ///
    /// `variables` fixes the declaration order; variables that only appear in `clauses`
    /// are appended in order of first appearance. Tautological and repeated clauses are
    /// dropped.
    pub fn new<S: AsRef<str>>(variables: &[S], clauses: Vec<Clause>) -> Self {
        let mut names: Vec<Arc<str>> = Vec::with_capacity(variables.len());
        let mut seen: HashSet<Arc<str>> = HashSet::new();
        for name in variables {
            let name: Arc<str> = Arc::from(name.as_ref());
            if seen.insert(Arc::clone(&name)) {
                names.push(name);
            }
        }
        for clause in &clauses {
            for lit in clause.literals() {
                if seen.insert(Arc::clone(&lit.variable)) {
                    names.push(Arc::clone(&lit.variable));
                }
            }
        }

        CnfFormula {
            variables: names,
            clauses: normalise_clauses(clauses),
        }
    }

    pub(crate) fn from_parts(variables: Vec<Arc<str>>, clauses: Vec<Clause>) -> Self {
        CnfFormula {
            variables,
            clauses: normalise_clauses(clauses),
        }
    }

    /// Convert an expression with the default configuration (no clause limit)
    pub fn from_expr(expr: &Expr) -> Result<Self, CnfError> {
        Self::from_expr_with_config(&LogicConfig::default(), expr)
    }

    /// Convert an expression, aborting once expansion would exceed
    /// [`LogicConfig::max_clauses`]
    ///
    /// # Errors
    ///
    /// Returns [`CnfError::ClauseLimitExceeded`] when a distribution step needs more
    /// clauses than the limit.
    pub fn from_expr_with_config(config: &LogicConfig, expr: &Expr) -> Result<Self, CnfError> {
        let clauses = conversion::to_clauses(expr, config.max_clauses)?;
        let formula = CnfFormula::from_parts(expr.collect_variables(), clauses);
        log::debug!(
            "Converted expression with {} nodes to CNF: {} variables, {} clauses",
            expr.node_count(),
            formula.num_variables(),
            formula.len()
        );
        Ok(formula)
    }

    /// Source variables in declaration order
    pub fn variables(&self) -> &[Arc<str>] {
        &self.variables
    }

    /// Number of source variables
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Clauses in conversion order
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Number of clauses
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// A formula without clauses is trivially true
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Whether the formula contains the empty clause, making it trivially unsatisfiable
    pub fn has_empty_clause(&self) -> bool {
        self.clauses.iter().any(Clause::is_empty)
    }

    /// Evaluate the formula under an assignment of its clause variables
    pub fn evaluate<V: Valuation + ?Sized>(&self, assignment: &V) -> Result<bool, EvalError> {
        let mut satisfied = true;
        for clause in &self.clauses {
            satisfied &= clause.evaluate(assignment)?;
        }
        Ok(satisfied)
    }

    /// Rebuild an expression from the clauses
    pub fn to_expr(&self) -> Expr {
        let clause_expr = |clause: &Clause| {
            clause
                .literals()
                .map(|lit| {
                    let var = Expr::Variable(Arc::clone(&lit.variable));
                    if lit.negated {
                        Expr::not(&var)
                    } else {
                        var
                    }
                })
                .reduce(|acc, lit| Expr::Or(Box::new(acc), Box::new(lit)))
                .unwrap_or(Expr::Constant(false))
        };

        self.clauses
            .iter()
            .map(clause_expr)
            .reduce(|acc, clause| Expr::And(Box::new(acc), Box::new(clause)))
            .unwrap_or(Expr::Constant(true))
    }

    /// Write the formula in DIMACS CNF format
    ///
    /// Variables are numbered from 1 in declaration order and named in `c` comment
    /// lines ahead of the `p cnf` header. The empty clause is written as a lone `0`.
    pub fn write_dimacs<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for (i, name) in self.variables.iter().enumerate() {
            writeln!(writer, "c {} {}", i + 1, name)?;
        }
        writeln!(writer, "p cnf {} {}", self.variables.len(), self.clauses.len())?;

        for clause in &self.clauses {
            for lit in clause.literals() {
                let number = self
                    .variables
                    .iter()
                    .position(|v| v == &lit.variable)
                    .map(|i| i + 1)
                    .ok_or_else(|| {
                        io::Error::new(
                            io::ErrorKind::InvalidData,
                            format!("clause variable '{}' is not declared", lit.variable),
                        )
                    })?;
                if lit.negated {
                    write!(writer, "-{} ", number)?;
                } else {
                    write!(writer, "{} ", number)?;
                }
            }
            writeln!(writer, "0")?;
        }
        Ok(())
    }

    /// Convert the formula to a DIMACS string
    ///
    /// Delegates to [`write_dimacs`](Self::write_dimacs).
    pub fn to_dimacs_string(&self) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.write_dimacs(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Write the formula to a DIMACS file
    pub fn to_dimacs_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_dimacs(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Drop tautological clauses and repeats, keeping first occurrences in order
fn normalise_clauses(clauses: Vec<Clause>) -> Vec<Clause> {
    let mut seen = HashSet::new();
    clauses
        .into_iter()
        .filter(|clause| !clause.is_tautology())
        .filter(|clause| seen.insert(clause.clone()))
        .collect()
}

/// Clauses joined by `&`; a formula without clauses prints as `1`
impl fmt::Display for CnfFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.clauses.is_empty() {
            return write!(f, "1");
        }
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                write!(f, " & ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}
