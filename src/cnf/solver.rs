//! DPLL satisfiability search
//!
//! The search assigns variables along a trail. Each level first runs unit propagation to
//! a fixpoint, stops as soon as every clause is satisfied, and otherwise branches on the
//! first unassigned clause variable in declaration order, trying `true` before `false`.
//! A clause whose literals are all false is a conflict and undoes the trail back to the
//! last decision. The search is deterministic.

use super::{CnfFormula, SatError};
use crate::LogicConfig;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverStats {
    /// Branching decisions made
    pub decisions: u64,
    /// Assignments forced by unit clauses
    pub propagations: u64,
    /// Clauses found with every literal false
    pub conflicts: u64,
}

/// Outcome of a satisfiability search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverResult {
    assignment: Option<BTreeMap<Arc<str>, bool>>,
    stats: SolverStats,
}

impl SolverResult {
    /// Whether a satisfying assignment was found
    pub fn is_satisfiable(&self) -> bool {
        self.assignment.is_some()
    }

    /// The satisfying assignment over every formula variable, if satisfiable
    ///
    /// Variables the clauses leave unconstrained are reported as `true`.
    pub fn assignment(&self) -> Option<&BTreeMap<Arc<str>, bool>> {
        self.assignment.as_ref()
    }

    /// Consume the result, returning the assignment
    pub fn into_assignment(self) -> Option<BTreeMap<Arc<str>, bool>> {
        self.assignment
    }

    /// Value of one variable in the satisfying assignment
    pub fn value(&self, name: &str) -> Option<bool> {
        self.assignment.as_ref()?.get(name).copied()
    }

    /// Search statistics
    pub fn stats(&self) -> SolverStats {
        self.stats
    }
}

impl fmt::Display for SolverResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.assignment {
            None => write!(f, "UNSAT"),
            Some(assignment) => {
                write!(f, "SAT")?;
                for (name, value) in assignment {
                    write!(f, " {}={}", name, u8::from(*value))?;
                }
                Ok(())
            }
        }
    }
}

/// DPLL solver
///
/// Holds only configuration; every call to [`solve`](Solver::solve) is an independent
/// search.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    decision_limit: Option<u64>,
}

impl Solver {
    /// Solver honouring [`LogicConfig::solver_decision_limit`]
    pub fn new(config: &LogicConfig) -> Self {
        Solver {
            decision_limit: config.solver_decision_limit,
        }
    }

    /// Decide satisfiability of `formula`
    ///
    /// # Errors
    ///
    /// Returns [`SatError::DecisionLimitExceeded`] if the configured decision budget runs
    /// out before the search finishes.
    pub fn solve(&self, formula: &CnfFormula) -> Result<SolverResult, SatError> {
        let mut search = Search::new(formula, self.decision_limit);
        let satisfiable = search.run()?;

        log::debug!(
            "Solved {} clauses over {} variables: {} ({} decisions, {} propagations, {} conflicts)",
            formula.len(),
            formula.num_variables(),
            if satisfiable { "satisfiable" } else { "unsatisfiable" },
            search.stats.decisions,
            search.stats.propagations,
            search.stats.conflicts
        );

        let assignment = satisfiable.then(|| {
            formula
                .variables()
                .iter()
                .zip(&search.values)
                .map(|(name, value)| (Arc::clone(name), value.unwrap_or(true)))
                .collect()
        });

        Ok(SolverResult {
            assignment,
            stats: search.stats,
        })
    }
}

/// Literal over a variable index
#[derive(Debug, Clone, Copy)]
struct Lit {
    var: usize,
    negated: bool,
}

enum ClauseState {
    Satisfied,
    Conflict,
    Unit(Lit),
    Open,
}

struct Search<'a> {
    names: &'a [Arc<str>],
    clauses: Vec<Vec<Lit>>,
    /// Variables that occur in at least one clause
    occurs: Vec<bool>,
    values: Vec<Option<bool>>,
    trail: Vec<usize>,
    stats: SolverStats,
    decision_limit: Option<u64>,
}

impl<'a> Search<'a> {
    fn new(formula: &'a CnfFormula, decision_limit: Option<u64>) -> Self {
        let names = formula.variables();
        let index_of = |name: &Arc<str>| names.iter().position(|n| n == name);

        let mut occurs = vec![false; names.len()];
        let clauses = formula
            .clauses()
            .iter()
            .map(|clause| {
                clause
                    .literals()
                    .filter_map(|lit| {
                        // CnfFormula construction declares every clause variable
                        let var = index_of(&lit.variable)?;
                        occurs[var] = true;
                        Some(Lit {
                            var,
                            negated: lit.negated,
                        })
                    })
                    .collect()
            })
            .collect();

        Search {
            names,
            clauses,
            occurs,
            values: vec![None; names.len()],
            trail: Vec::new(),
            stats: SolverStats::default(),
            decision_limit,
        }
    }

    fn run(&mut self) -> Result<bool, SatError> {
        self.dpll(0)
    }

    fn assign(&mut self, var: usize, value: bool) {
        self.values[var] = Some(value);
        self.trail.push(var);
    }

    fn backtrack(&mut self, mark: usize) {
        while self.trail.len() > mark {
            if let Some(var) = self.trail.pop() {
                self.values[var] = None;
            }
        }
    }

    fn clause_state(&self, clause: &[Lit]) -> ClauseState {
        let mut open = 0;
        let mut last_open = None;
        for lit in clause {
            match self.values[lit.var] {
                Some(value) if value != lit.negated => return ClauseState::Satisfied,
                Some(_) => {}
                None => {
                    open += 1;
                    last_open = Some(*lit);
                }
            }
        }
        match (open, last_open) {
            (0, _) => ClauseState::Conflict,
            (1, Some(lit)) => ClauseState::Unit(lit),
            _ => ClauseState::Open,
        }
    }

    /// Unit propagation to a fixpoint; false on conflict
    fn propagate(&mut self) -> bool {
        loop {
            let mut changed = false;
            for i in 0..self.clauses.len() {
                match self.clause_state(&self.clauses[i]) {
                    ClauseState::Conflict => {
                        self.stats.conflicts += 1;
                        return false;
                    }
                    ClauseState::Unit(lit) => {
                        self.assign(lit.var, !lit.negated);
                        self.stats.propagations += 1;
                        changed = true;
                    }
                    ClauseState::Satisfied | ClauseState::Open => {}
                }
            }
            if !changed {
                return true;
            }
        }
    }

    fn all_satisfied(&self) -> bool {
        self.clauses
            .iter()
            .all(|clause| matches!(self.clause_state(clause), ClauseState::Satisfied))
    }

    fn dpll(&mut self, level: usize) -> Result<bool, SatError> {
        if !self.propagate() {
            return Ok(false);
        }
        if self.all_satisfied() {
            return Ok(true);
        }

        let var = match (0..self.values.len()).find(|&v| self.occurs[v] && self.values[v].is_none()) {
            Some(var) => var,
            None => return Ok(false),
        };

        for value in [true, false] {
            if let Some(limit) = self.decision_limit {
                if self.stats.decisions >= limit {
                    return Err(SatError::DecisionLimitExceeded { limit });
                }
            }
            self.stats.decisions += 1;
            log::trace!("level {}: decide {} = {}", level, self.names[var], value);

            let mark = self.trail.len();
            self.assign(var, value);
            if self.dpll(level + 1)? {
                return Ok(true);
            }
            log::trace!("level {}: backtrack from {} = {}", level, self.names[var], value);
            self.backtrack(mark);
        }
        Ok(false)
    }
}
