//! Tests for the expression module

use super::*;
use std::collections::HashMap;
use std::sync::Arc;

fn parse(input: &str) -> Expr {
    ParsedExpression::parse(input).unwrap().into_root()
}

fn var(name: &str) -> Expr {
    Expr::variable(name)
}

// ========== Precedence and associativity ==========

#[test]
fn test_and_binds_tighter_than_or() {
    assert_eq!(parse("A | B & C"), var("A").or(&var("B").and(&var("C"))));
}

#[test]
fn test_xor_binds_tighter_than_or() {
    assert_eq!(parse("A ^ B | C"), var("A").xor(&var("B")).or(&var("C")));
    assert_eq!(parse("A | B ^ C"), var("A").or(&var("B").xor(&var("C"))));
}

#[test]
fn test_and_binds_tighter_than_xor() {
    assert_eq!(parse("A & B ^ C"), var("A").and(&var("B")).xor(&var("C")));
}

#[test]
fn test_implies_and_iff_are_loosest() {
    assert_eq!(
        parse("A -> B | C"),
        var("A").implies(&var("B").or(&var("C")))
    );
    assert_eq!(
        parse("A <-> B -> C"),
        var("A").iff(&var("B").implies(&var("C")))
    );
}

#[test]
fn test_binary_operators_are_left_associative() {
    assert_eq!(
        parse("A -> B -> C"),
        var("A").implies(&var("B")).implies(&var("C"))
    );
    assert_eq!(
        parse("A & B & C"),
        var("A").and(&var("B")).and(&var("C"))
    );
    assert_eq!(
        parse("A <-> B <-> C"),
        var("A").iff(&var("B")).iff(&var("C"))
    );
}

#[test]
fn test_not_is_prefix_and_tightest() {
    assert_eq!(parse("!A & B"), Expr::not(&var("A")).and(&var("B")));
    assert_eq!(parse("not not A"), Expr::not(&Expr::not(&var("A"))));
    assert_eq!(parse("!(A & B)"), Expr::not(&var("A").and(&var("B"))));
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(parse("(A | B) & C"), var("A").or(&var("B")).and(&var("C")));
}

#[test]
fn test_nand_and_nor_keywords() {
    assert_eq!(parse("A nand B"), Expr::not(&var("A").and(&var("B"))));
    assert_eq!(parse("A NOR B"), Expr::not(&var("A").or(&var("B"))));
}

#[test]
fn test_spellings_are_interchangeable() {
    let ascii = parse("!a & b | c ^ d -> e <-> f");
    assert_eq!(parse("¬a ∧ b ∨ c ⊕ d → e ↔ f"), ascii);
    assert_eq!(
        parse("not a and b or c xor d implies e iff f"),
        ascii
    );
}

#[test]
fn test_constants() {
    assert_eq!(parse("TRUE"), Expr::constant(true));
    assert_eq!(parse("f"), Expr::constant(false));
    assert_eq!(parse("1 & 0"), Expr::constant(true).and(&Expr::constant(false)));
}

#[test]
fn test_deeply_nested_parentheses() {
    let depth = 10_000;
    let input = format!("{}a{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse(&input), var("a"));
}

// ========== Malformed input ==========

#[test]
fn test_deep_negation_chain() {
    let input = format!("{}a", "!".repeat(200_000));
    assert!(ParsedExpression::validate(&input).is_ok());

    let parsed = ParsedExpression::parse(&input).unwrap();
    assert_eq!(parsed.variables(), &[Arc::from("a")]);
    drop(parsed);

    let mut chain = var("a");
    for _ in 0..200_000 {
        chain = chain & var("b") | var("c");
    }
    drop(chain);
}

#[test]
fn test_empty_input() {
    for input in ["", "   ", "\t\n"] {
        assert_eq!(
            ParsedExpression::parse(input),
            Err(ExpressionParseError::Parse(ParseError::EmptyInput))
        );
    }
}

#[test]
fn test_missing_operand() {
    let err = ParsedExpression::parse("A &").unwrap_err();
    match err {
        ExpressionParseError::Parse(ParseError::UnexpectedEnd { position, expected }) => {
            assert_eq!(position, 3);
            assert!(expected.iter().any(|e| e.as_ref() == "identifier"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_unclosed_parenthesis() {
    let err = ParsedExpression::parse("(A & B").unwrap_err();
    match err {
        ExpressionParseError::Parse(ParseError::UnexpectedEnd { expected, .. }) => {
            assert!(expected.iter().any(|e| e.as_ref() == ")"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_operator_where_operand_expected() {
    let err = ParsedExpression::parse("A & | B").unwrap_err();
    match err {
        ExpressionParseError::Parse(ParseError::UnexpectedToken {
            found, position, ..
        }) => {
            assert_eq!(found.as_ref(), "|");
            assert_eq!(position, 4);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_stray_closing_parenthesis_and_trailing_operand() {
    for input in ["A)", "A B", ") A", "()"] {
        let err = ParsedExpression::parse(input).unwrap_err();
        assert!(
            matches!(
                err,
                ExpressionParseError::Parse(
                    ParseError::UnexpectedToken { .. } | ParseError::TrailingInput { .. }
                )
            ),
            "{:?} gave {:?}",
            input,
            err
        );
    }
}

#[test]
fn test_lex_error_surfaces() {
    let err = ParsedExpression::parse("A # B").unwrap_err();
    assert_eq!(
        err,
        ExpressionParseError::Lex(LexError {
            character: '#',
            position: 2
        })
    );
    assert!(ParsedExpression::parse("A && B").is_err());
}

#[test]
fn test_validate() {
    assert!(ParsedExpression::validate("a -> b").is_ok());
    assert!(ParsedExpression::validate("a ->").is_err());
}

// ========== Variables ==========

#[test]
fn test_variables_in_first_appearance_order() {
    let parsed = ParsedExpression::parse("b & a | b & c").unwrap();
    let names: Vec<&str> = parsed.variables().iter().map(|v| v.as_ref()).collect();
    assert_eq!(names, vec!["b", "a", "c"]);
}

#[test]
fn test_constants_have_no_variables() {
    let parsed = ParsedExpression::parse("true | F").unwrap();
    assert!(parsed.variables().is_empty());
}

// ========== Evaluation ==========

#[test]
fn test_precedence_evaluation() {
    let parsed = ParsedExpression::parse("A | B & C").unwrap();
    let assignment: HashMap<&str, bool> = [("A", false), ("B", true), ("C", false)].into();
    assert_eq!(parsed.evaluate(&assignment), Ok(false));
}

#[test]
fn test_undefined_variable() {
    let parsed = ParsedExpression::parse("A & missing").unwrap();
    let assignment: HashMap<&str, bool> = [("A", true)].into();
    assert_eq!(
        parsed.evaluate(&assignment),
        Err(EvalError::UndefinedVariable {
            name: Arc::from("missing")
        })
    );
}

#[test]
fn test_no_short_circuit_on_missing_variable() {
    // The left operand alone decides the result, but the right is still evaluated
    let parsed = ParsedExpression::parse("A | missing").unwrap();
    let assignment = [("A", true)];
    assert!(parsed.evaluate(&assignment[..]).is_err());
}

#[test]
fn test_implies_and_iff_semantics() {
    let implies = parse("a -> b");
    let iff = parse("a <-> b");
    for (a, b) in [(false, false), (false, true), (true, false), (true, true)] {
        let assignment = [("a", a), ("b", b)];
        assert_eq!(implies.evaluate(&assignment[..]), Ok(!a || b));
        assert_eq!(iff.evaluate(&assignment[..]), Ok(a == b));
    }
}

#[test]
fn test_evaluate_values_positional() {
    let parsed = ParsedExpression::parse("x & !y").unwrap();
    assert_eq!(parsed.evaluate_values(&[true, false]).unwrap(), true);
    assert_eq!(parsed.evaluate_values(&[true, true]).unwrap(), false);

    let err = parsed.evaluate_values(&[true]).unwrap_err();
    assert_eq!(err.stage(), crate::Stage::Evaluate);
    assert!(matches!(
        err,
        crate::LogicError::VectorLengthMismatch { .. }
    ));
}

// ========== Display round trips ==========

#[test]
fn test_display_minimal_parentheses() {
    assert_eq!(parse("(a & b) | c").to_string(), "a & b | c");
    assert_eq!(parse("(a | b) & c").to_string(), "(a | b) & c");
    assert_eq!(parse("¬(a ∧ b)").to_string(), "!(a & b)");
    assert_eq!(parse("a -> (b -> c)").to_string(), "a -> (b -> c)");
    assert_eq!(parse("(a -> b) -> c").to_string(), "a -> b -> c");
    assert_eq!(parse("T & F").to_string(), "1 & 0");
}

#[test]
fn test_display_reparses_to_same_tree() {
    let inputs = [
        "a & b | c",
        "a ^ (b | c) & !d",
        "(a <-> b) <-> (c -> d)",
        "!(a | b) -> !!c",
        "a nand b nor c",
        "((a ^ b) ^ c) ^ (d ^ e)",
    ];
    for input in inputs {
        let tree = parse(input);
        let displayed = tree.to_string();
        assert_eq!(parse(&displayed), tree, "round trip of {:?}", displayed);
    }
}

// ========== Fold ==========

#[test]
fn test_node_count_and_depth() {
    let expr = parse("!(a & b) | c");
    assert_eq!(expr.node_count(), 6);
    assert_eq!(expr.depth(), 4);
}
