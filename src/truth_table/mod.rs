//! Truth-table enumeration
//!
//! A [`TruthTable`] lists every assignment over an ordered variable list together with
//! the output of a boolean function. Rows are generated in increasing binary order with
//! the first variable as the most significant bit, so row `i` is the assignment whose
//! bits spell `i`.
//!
//! ```
//! use proplogic::TruthTable;
//!
//! let table = TruthTable::from_fn(&["a", "b"], |v| v[0] && !v[1]).unwrap();
//! assert_eq!(table.len(), 4);
//! assert_eq!(table.minterms(), vec![2]); // a=T, b=F
//! ```

mod laws;

pub use laws::{Property, PropertyChecker};

use crate::expression::{EvalError, Expr};
use crate::LogicConfig;
use std::fmt;
use std::sync::Arc;

/// One assignment and the function's output for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTableRow {
    inputs: Vec<bool>,
    output: bool,
}

impl TruthTableRow {
    /// Values of the table's variables, in declaration order
    pub fn inputs(&self) -> &[bool] {
        &self.inputs
    }

    /// The function's value for this assignment
    pub fn output(&self) -> bool {
        self.output
    }

    /// The assignment read as a binary number, first variable most significant
    pub fn index(&self) -> usize {
        self.inputs
            .iter()
            .fold(0usize, |acc, &bit| (acc << 1) | usize::from(bit))
    }
}

/// The complete truth table of a function over an ordered variable list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    variables: Vec<Arc<str>>,
    rows: Vec<TruthTableRow>,
}

/// Bits of `index` as `count` booleans, most significant first
fn assignment_bits(index: usize, count: usize) -> Vec<bool> {
    (0..count)
        .map(|j| (index >> (count - 1 - j)) & 1 == 1)
        .collect()
}

impl TruthTable {
    /// Tabulate a total function over `variables`
    ///
    /// The function receives one boolean per variable, in the given order. Use
    /// [`from_expression_with_config`](Self::from_expression_with_config) for a
    /// configurable size guard.
    ///
    /// # Errors
    ///
    /// [`EvalError::TooManyVariables`] when the row count does not fit in a `usize`.
    pub fn from_fn<S, F>(variables: &[S], mut f: F) -> Result<Self, EvalError>
    where
        S: AsRef<str>,
        F: FnMut(&[bool]) -> bool,
    {
        Self::try_from_fn(variables, |values| Ok(f(values)))
    }

    /// Tabulate a fallible function, stopping at the first error
    pub fn try_from_fn<S, E, F>(variables: &[S], mut f: F) -> Result<Self, E>
    where
        S: AsRef<str>,
        E: From<EvalError>,
        F: FnMut(&[bool]) -> Result<bool, E>,
    {
        let count = variables.len();
        let row_count = u32::try_from(count)
            .ok()
            .and_then(|bits| 1usize.checked_shl(bits))
            .ok_or(EvalError::TooManyVariables {
                count,
                limit: usize::BITS as usize - 1,
            })?;

        let variables: Vec<Arc<str>> = variables.iter().map(|v| Arc::from(v.as_ref())).collect();
        let mut rows = Vec::with_capacity(row_count);

        for index in 0..row_count {
            let inputs = assignment_bits(index, count);
            let output = f(&inputs)?;
            rows.push(TruthTableRow { inputs, output });
        }

        Ok(TruthTable { variables, rows })
    }

    /// Tabulate an expression over `variables` with the default configuration
    ///
    /// # Errors
    ///
    /// - [`EvalError::UndefinedVariable`] if the expression uses a variable not listed
    /// - [`EvalError::TooManyVariables`] beyond [`LogicConfig::max_table_variables`]
    pub fn from_expression<S: AsRef<str>>(expr: &Expr, variables: &[S]) -> Result<Self, EvalError> {
        Self::from_expression_with_config(&LogicConfig::default(), expr, variables)
    }

    /// Tabulate an expression over `variables`, honouring the configured size limit
    pub fn from_expression_with_config<S: AsRef<str>>(
        config: &LogicConfig,
        expr: &Expr,
        variables: &[S],
    ) -> Result<Self, EvalError> {
        if variables.len() > config.max_table_variables {
            return Err(EvalError::TooManyVariables {
                count: variables.len(),
                limit: config.max_table_variables,
            });
        }

        let mut assignment: Vec<(&str, bool)> =
            variables.iter().map(|v| (v.as_ref(), false)).collect();

        Self::try_from_fn(variables, |values| {
            for (slot, &value) in assignment.iter_mut().zip(values) {
                slot.1 = value;
            }
            expr.evaluate(assignment.as_slice())
        })
    }

    /// The variable order of the table
    pub fn variables(&self) -> &[Arc<str>] {
        &self.variables
    }

    /// All rows, in increasing binary order
    pub fn rows(&self) -> &[TruthTableRow] {
        &self.rows
    }

    /// Number of rows, always `2^variables`
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// A table always has at least one row
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Output column
    pub fn outputs(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().map(|row| row.output)
    }

    /// Indices of the rows whose output is true
    pub fn minterms(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.output)
            .map(|(i, _)| i)
            .collect()
    }

    /// Every row outputs true
    pub fn is_tautology(&self) -> bool {
        self.outputs().all(|o| o)
    }

    /// Every row outputs false
    pub fn is_contradiction(&self) -> bool {
        self.outputs().all(|o| !o)
    }

    /// Outputs are mixed
    pub fn is_contingency(&self) -> bool {
        !self.is_tautology() && !self.is_contradiction()
    }

    /// Classify the tabulated function
    pub fn property(&self) -> Property {
        if self.is_tautology() {
            Property::Tautology
        } else if self.is_contradiction() {
            Property::Contradiction
        } else {
            Property::Contingency
        }
    }
}

const OUTPUT_HEADER: &str = "Result";

fn cell(value: bool) -> &'static str {
    if value {
        "T"
    } else {
        "F"
    }
}

/// Fixed-width rendering: a header of variable names, then one `F`/`T` row per assignment
///
/// ```
/// use proplogic::TruthTable;
///
/// let table = TruthTable::from_fn(&["a", "bb"], |v| v[0] || v[1]).unwrap();
/// let expected = "\
/// a | bb | Result
/// F | F  | F
/// F | T  | T
/// T | F  | T
/// T | T  | T
/// ";
/// assert_eq!(table.to_string(), expected);
/// ```
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<usize> = self
            .variables
            .iter()
            .map(|name| name.chars().count().max(1))
            .collect();

        for (name, width) in self.variables.iter().zip(&widths) {
            write!(f, "{:<width$} | ", name, width = *width)?;
        }
        writeln!(f, "{}", OUTPUT_HEADER)?;

        for row in &self.rows {
            for (&value, width) in row.inputs.iter().zip(&widths) {
                write!(f, "{:<width$} | ", cell(value), width = *width)?;
            }
            writeln!(f, "{}", cell(row.output))?;
        }
        Ok(())
    }
}
