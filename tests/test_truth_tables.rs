//! Integration tests for truth tables and logical laws

use proplogic::logic;
use proplogic::{
    contingency, contradiction, equivalent, generate_truth_table_from_expression, tautology,
    LogicConfig, ParsedExpression, ProofSystem, Property, PropertyChecker, TruthTable,
};

#[test]
fn test_row_count_and_binary_order() {
    for n in 0..6 {
        let names: Vec<String> = (0..n).map(|i| format!("v{}", i)).collect();
        let table = TruthTable::from_fn(&names, |_| false).unwrap();
        assert_eq!(table.len(), 1 << n);
        for (i, row) in table.rows().iter().enumerate() {
            assert_eq!(row.index(), i);
        }
    }
}

#[test]
fn test_first_variable_is_most_significant() {
    let table = generate_truth_table_from_expression("a", &["a", "b"]).unwrap();
    let outputs: Vec<bool> = table.outputs().collect();
    assert_eq!(outputs, vec![false, false, true, true]);
}

#[test]
fn test_rows_agree_with_evaluation() {
    let parsed = ParsedExpression::parse("(p -> q) & (q -> r) -> (p -> r)").unwrap();
    let table = TruthTable::from_expression(parsed.root(), parsed.variables()).unwrap();
    for row in table.rows() {
        let assignment: Vec<(&str, bool)> = parsed
            .variables()
            .iter()
            .map(|v| v.as_ref())
            .zip(row.inputs().iter().copied())
            .collect();
        assert_eq!(parsed.evaluate(assignment.as_slice()), Ok(row.output()));
    }
    assert!(table.is_tautology());
}

#[test]
fn test_de_morgan_laws() {
    assert!(tautology(&["a", "b"], "!(a & b) <-> (!a | !b)").unwrap());
    assert!(tautology(&["a", "b"], "!(a | b) <-> (!a & !b)").unwrap());
}

#[test]
fn test_distributive_laws() {
    assert!(tautology(&[], "a & (b | c) <-> (a & b) | (a & c)").unwrap());
    assert!(tautology(&[], "a | (b & c) <-> (a | b) & (a | c)").unwrap());
}

#[test]
fn test_classification_functions() {
    assert!(contradiction(&[], "a & !a").unwrap());
    assert!(!contradiction(&[], "a | !a").unwrap());
    assert!(contingency(&[], "a -> b").unwrap());
    assert!(!contingency(&[], "a -> a").unwrap());
}

#[test]
fn test_equivalent() {
    assert!(equivalent(&[], "a -> b", "!b -> !a").unwrap());
    assert!(equivalent(&["a", "b"], "a nand b", "!a | !b").unwrap());
    assert!(!equivalent(&[], "a -> b", "b -> a").unwrap());
}

#[test]
fn test_xor_parity() {
    for n in 0..=3 {
        let names: Vec<String> = (0..n).map(|i| format!("x{}", i)).collect();
        let table = TruthTable::from_fn(&names, logic::xor).unwrap();
        for row in table.rows() {
            let ones = row.inputs().iter().filter(|&&b| b).count();
            assert_eq!(row.output(), ones % 2 == 1);
        }
    }
}

#[test]
fn test_display() {
    let table = generate_truth_table_from_expression("a | b", &[]).unwrap();
    assert_eq!(
        table.to_string(),
        "a | b | Result\nF | F | F\nF | T | T\nT | F | T\nT | T | T\n"
    );
}

#[test]
fn test_classical_and_sat_agree() {
    let classical = LogicConfig::default();
    let sat = LogicConfig {
        system: ProofSystem::Sat,
        ..LogicConfig::default()
    };

    for input in [
        "a | !a",
        "a & !a",
        "a ^ b",
        "(a -> b) & a -> b",
        "(a <-> b) ^ (a ^ !b)",
        "a nor !a",
        "(a | b) & (!a | c) -> b | c",
        "a & b & c & !(a | b)",
    ] {
        let parsed = ParsedExpression::parse(input).unwrap();
        let by_table = PropertyChecker::new(&classical)
            .classify::<&str>(&parsed, &[])
            .unwrap();
        let by_solver = PropertyChecker::new(&sat)
            .classify::<&str>(&parsed, &[])
            .unwrap();
        assert_eq!(by_table, by_solver, "{}", input);
    }
}

#[test]
fn test_property_display() {
    assert_eq!(Property::Tautology.to_string(), "tautology");
    assert_eq!(Property::Contingency.to_string(), "contingency");
}
