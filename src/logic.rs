//! Variadic truth functions over boolean slices
//!
//! These are the plain, total connectives shared by the expression evaluator and the
//! circuit gates. None of them can fail; an empty slice yields the identity element of
//! the connective (`true` for AND, `false` for OR/XOR).

/// Conjunction: true iff every value is true
pub fn and(values: &[bool]) -> bool {
    values.iter().all(|&v| v)
}

/// Disjunction: true iff any value is true
pub fn or(values: &[bool]) -> bool {
    values.iter().any(|&v| v)
}

/// Parity: true iff an odd number of values are true
pub fn xor(values: &[bool]) -> bool {
    values.iter().fold(false, |acc, &v| acc ^ v)
}

/// Negated conjunction
pub fn nand(values: &[bool]) -> bool {
    !and(values)
}

/// Negated disjunction
pub fn nor(values: &[bool]) -> bool {
    !or(values)
}

/// Negated parity
pub fn xnor(values: &[bool]) -> bool {
    !xor(values)
}

/// Negation of a single value
pub fn not(value: bool) -> bool {
    !value
}

/// Material implication, folded from the left: `((a -> b) -> c) ...`
///
/// An empty slice is vacuously true; a single value is returned unchanged.
pub fn implies(values: &[bool]) -> bool {
    match values.split_first() {
        None => true,
        Some((&first, rest)) => rest.iter().fold(first, |acc, &v| !acc || v),
    }
}

/// Biconditional: true iff all values are equal
pub fn iff(values: &[bool]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xor_parity() {
        assert!(!xor(&[false, false, false]));
        assert!(xor(&[true, false, false]));
        assert!(!xor(&[true, true, false]));
        assert!(xor(&[true, true, true]));
    }

    #[test]
    fn test_empty_identities() {
        assert!(and(&[]));
        assert!(!or(&[]));
        assert!(!xor(&[]));
        assert!(implies(&[]));
        assert!(iff(&[]));
    }

    #[test]
    fn test_implies_binary() {
        assert!(implies(&[false, false]));
        assert!(implies(&[false, true]));
        assert!(!implies(&[true, false]));
        assert!(implies(&[true, true]));
    }

    #[test]
    fn test_negated_forms() {
        assert_eq!(nand(&[true, true]), false);
        assert_eq!(nor(&[false, false]), true);
        assert_eq!(xnor(&[true, true]), true);
        assert!(not(false));
    }

    #[test]
    fn test_iff_all_equal() {
        assert!(iff(&[true, true, true]));
        assert!(iff(&[false, false]));
        assert!(!iff(&[true, false]));
    }
}
