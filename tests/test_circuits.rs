//! Integration tests for circuit construction and simulation

use proplogic::{Circuit, CircuitError, Gate, LogicError, Stage};
use std::collections::HashMap;
use std::sync::Arc;

fn assignment(pairs: &[(&str, bool)]) -> HashMap<String, bool> {
    pairs.iter().map(|&(k, v)| (k.to_string(), v)).collect()
}

/// One-bit full adder built from two half adders
fn full_adder() -> Circuit {
    let mut circuit = Circuit::new(&["a", "b", "cin"]);
    circuit.add_node("x1", Gate::Xor, &["a", "b"]).unwrap();
    circuit.add_node("sum", Gate::Xor, &["x1", "cin"]).unwrap();
    circuit.add_node("a1", Gate::And, &["a", "b"]).unwrap();
    circuit.add_node("a2", Gate::And, &["x1", "cin"]).unwrap();
    circuit.add_node("cout", Gate::Or, &["a1", "a2"]).unwrap();
    circuit.set_outputs(&["sum", "cout"]).unwrap();
    circuit
}

#[test]
fn test_full_adder_exhaustive() {
    let mut circuit = full_adder();
    for bits in 0..8u8 {
        let (a, b, cin) = (bits & 4 != 0, bits & 2 != 0, bits & 1 != 0);
        let outputs = circuit
            .simulate(&assignment(&[("a", a), ("b", b), ("cin", cin)]))
            .unwrap();
        let total = u8::from(a) + u8::from(b) + u8::from(cin);
        assert_eq!(outputs["sum"], total % 2 == 1);
        assert_eq!(outputs["cout"], total >= 2);
    }
}

#[test]
fn test_every_gate_kind() {
    let mut circuit = Circuit::new(&["p", "q"]);
    for gate in Gate::ALL {
        let id = gate.to_string().to_lowercase();
        if gate == Gate::Not {
            circuit.add_node(&id, gate, &["p"]).unwrap();
        } else {
            circuit.add_node(&id, gate, &["p", "q"]).unwrap();
        }
    }
    let ids: Vec<String> = Gate::ALL
        .iter()
        .map(|g| g.to_string().to_lowercase())
        .collect();
    circuit.set_outputs(&ids).unwrap();

    let outputs = circuit
        .simulate(&assignment(&[("p", true), ("q", false)]))
        .unwrap();
    assert!(!outputs["and"]);
    assert!(outputs["or"]);
    assert!(!outputs["not"]);
    assert!(outputs["xor"]);
    assert!(!outputs["xnor"]);
    assert!(outputs["nand"]);
    assert!(!outputs["nor"]);
}

#[test]
fn test_two_node_cycle_fails_simulation() {
    let mut circuit = Circuit::new(&["a"]);
    circuit.add_node("X", Gate::Not, &["Y"]).unwrap();
    circuit.add_node("Y", Gate::Not, &["X"]).unwrap();
    circuit.set_outputs(&["X"]).unwrap();

    let err = circuit
        .simulate(&assignment(&[("a", true)]))
        .unwrap_err();
    assert!(matches!(err, CircuitError::Cycle { .. }));

    let wrapped = LogicError::circuit("simulate", err);
    assert_eq!(wrapped.stage(), Stage::Simulate);
}

#[test]
fn test_simulation_recomputes_every_pass() {
    let mut circuit = full_adder();
    let ones = circuit
        .simulate(&assignment(&[("a", true), ("b", true), ("cin", true)]))
        .unwrap();
    let zeros = circuit
        .simulate(&assignment(&[("a", false), ("b", false), ("cin", false)]))
        .unwrap();
    assert!(ones["sum"] && ones["cout"]);
    assert!(!zeros["sum"] && !zeros["cout"]);
    assert_eq!(circuit.node_value("a1"), Ok(false));
}

#[test]
fn test_missing_and_extra_inputs() {
    let mut circuit = full_adder();
    assert_eq!(
        circuit.simulate(&assignment(&[("a", true), ("b", true)])),
        Err(CircuitError::MissingInput {
            name: Arc::from("cin")
        })
    );
    // Values for names that are not inputs are ignored
    let outputs = circuit
        .simulate(&assignment(&[
            ("a", true),
            ("b", false),
            ("cin", false),
            ("sum", false),
        ]))
        .unwrap();
    assert!(outputs["sum"]);
}

#[test]
fn test_full_adder_truth_table() {
    let mut circuit = full_adder();
    let carry = circuit.truth_table("cout").unwrap();
    assert_eq!(carry.minterms(), vec![3, 5, 6, 7]);
    let sum = circuit.truth_table("sum").unwrap();
    assert_eq!(sum.minterms(), vec![1, 2, 4, 7]);
    assert!(circuit.truth_table("nope").is_err());
}

#[test]
fn test_gate_from_str() {
    assert_eq!("nand".parse::<Gate>(), Ok(Gate::Nand));
    assert_eq!(" Or ".parse::<Gate>(), Ok(Gate::Or));
    assert!(matches!(
        "mux".parse::<Gate>(),
        Err(CircuitError::UnknownGate { .. })
    ));
    assert!(Gate::Xnor.describe().contains("even"));
}

#[test]
fn test_error_messages() {
    let mut circuit = Circuit::new(&["a"]);
    let err = circuit.add_node("n", Gate::Not, &["a", "a"]).unwrap_err();
    assert_eq!(err.to_string(), "NOT node 'n' needs exactly 1 input, got 2");
    let err = circuit.set_outputs(&["n"]).unwrap_err();
    assert_eq!(err.to_string(), "Output 'n' is not a node");
}
