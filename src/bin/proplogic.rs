//! proplogic - Command Line Interface
//!
//! Evaluate, tabulate, classify, convert and solve propositional formulas.

use clap::{Parser, Subcommand, ValueEnum};
use proplogic::{
    CnfFormula, LogicConfig, LogicError, ParsedExpression, ProofSystem, PropertyChecker, Solver,
    TruthTable,
};
use std::collections::HashMap;
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SystemArg {
    /// Enumerate the truth table
    Classical,
    /// Refute with the SAT solver
    Sat,
}

impl From<SystemArg> for ProofSystem {
    fn from(val: SystemArg) -> Self {
        match val {
            SystemArg::Classical => ProofSystem::Classical,
            SystemArg::Sat => ProofSystem::Sat,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate an expression under an assignment
    Eval {
        /// Expression to evaluate
        expr: String,
        /// Variable assignment, e.g. `-a A=1 -a B=false`
        #[arg(short = 'a', long = "assign", value_name = "NAME=VALUE", value_parser = parse_assignment)]
        assignments: Vec<(String, bool)>,
    },
    /// Check that an expression is well formed
    Check {
        /// Expression to validate
        expr: String,
    },
    /// Print the truth table of an expression
    Table {
        /// Expression to tabulate
        expr: String,
        /// Variable order (defaults to order of appearance)
        #[arg(short = 'v', long = "var", value_name = "VAR")]
        variables: Vec<String>,
    },
    /// Classify an expression as tautology, contradiction or contingency
    Classify {
        /// Expression to classify
        expr: String,
        /// Proof system used for the check
        #[arg(short = 's', long = "system", value_enum, default_value = "classical")]
        system: SystemArg,
    },
    /// Convert an expression to conjunctive normal form
    Cnf {
        /// Expression to convert
        expr: String,
        /// Also write the clauses to a DIMACS file
        #[arg(long = "dimacs", value_name = "FILE")]
        dimacs: Option<PathBuf>,
    },
    /// Decide satisfiability of an expression
    Solve {
        /// Expression to solve
        expr: String,
    },
}

#[derive(Parser, Debug)]
#[command(name = "proplogic")]
#[command(about = "Propositional logic toolkit", long_about = None)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Print debug log messages
    #[arg(long = "verbose", global = true)]
    verbose: bool,

    /// Abort CNF conversion beyond this many clauses
    #[arg(long = "max-clauses", global = true)]
    max_clauses: Option<usize>,

    /// Abort solving after this many decisions
    #[arg(long = "decision-limit", global = true)]
    decision_limit: Option<u64>,
}

fn parse_assignment(arg: &str) -> Result<(String, bool), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", arg))?;
    let value = match value.trim().to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => true,
        "0" | "f" | "false" => false,
        other => return Err(format!("'{}' is not a boolean value", other)),
    };
    Ok((name.trim().to_string(), value))
}

fn parse(expr: &str) -> Result<ParsedExpression, String> {
    ParsedExpression::parse(expr).map_err(|e| format!("Error parsing '{}': {}", expr, e))
}

fn run(args: Args) -> Result<(), String> {
    let mut config = LogicConfig {
        max_clauses: args.max_clauses,
        solver_decision_limit: args.decision_limit,
        ..LogicConfig::default()
    };

    match args.command {
        Command::Eval { expr, assignments } => {
            let parsed = parse(&expr)?;
            let assignment: HashMap<String, bool> = assignments.into_iter().collect();
            let value = parsed
                .evaluate(&assignment)
                .map_err(|e| LogicError::eval("eval", e).to_string())?;
            println!("{}", u8::from(value));
        }
        Command::Check { expr } => {
            let parsed = parse(&expr)?;
            println!("ok: {}", parsed);
        }
        Command::Table { expr, variables } => {
            let parsed = parse(&expr)?;
            let table = if variables.is_empty() {
                TruthTable::from_expression_with_config(&config, parsed.root(), parsed.variables())
            } else {
                TruthTable::from_expression_with_config(&config, parsed.root(), &variables)
            }
            .map_err(|e| LogicError::eval("table", e).to_string())?;
            print!("{}", table);
        }
        Command::Classify { expr, system } => {
            let parsed = parse(&expr)?;
            config.system = system.into();
            let property = PropertyChecker::new(&config)
                .classify::<&str>(&parsed, &[])
                .map_err(|e| e.to_string())?;
            println!("{}", property);
        }
        Command::Cnf { expr, dimacs } => {
            let parsed = parse(&expr)?;
            let cnf = CnfFormula::from_expr_with_config(&config, parsed.root())
                .map_err(|e| LogicError::convert("cnf", e).to_string())?;
            println!("{}", cnf);
            if let Some(path) = dimacs {
                cnf.to_dimacs_file(&path)
                    .map_err(|e| format!("Error writing '{}': {}", path.display(), e))?;
                log::info!("Wrote {} clauses to {}", cnf.len(), path.display());
            }
        }
        Command::Solve { expr } => {
            let parsed = parse(&expr)?;
            let cnf = CnfFormula::from_expr_with_config(&config, parsed.root())
                .map_err(|e| LogicError::convert("solve", e).to_string())?;
            let result = Solver::new(&config)
                .solve(&cnf)
                .map_err(|e| LogicError::solve("solve", e).to_string())?;
            println!("{}", result);
            let stats = result.stats();
            log::info!(
                "{} decisions, {} propagations, {} conflicts",
                stats.decisions,
                stats.propagations,
                stats.conflicts
            );
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };
    if let Err(e) = simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Could not initialise logging: {}", e);
    }

    if let Err(message) = run(args) {
        eprintln!("{}", message);
        process::exit(1);
    }
}
