//! Source-to-JavaScript operator translation tables.

/// Source operators with a different JavaScript spelling.
const OPERATOR_CONVERSIONS: &[(&str, &str)] = &[
    ("==", "==="),
    ("!=", "!=="),
    ("is", "==="),
    ("aint", "!=="),
    ("and", "&&"),
    ("or", "||"),
    ("not", "!"),
];

/// Conditional assignment operators and the logical operator they expand to.
const CONDITIONAL_ASSIGNMENTS: &[(&str, &str)] = &[
    ("||=", "||"),
    ("&&=", "&&"),
    ("or=", "||"),
    ("and=", "&&"),
];

/// JavaScript spelling of a source operator. Unknown operators pass through.
pub fn translate(operator: &str) -> &str {
    OPERATOR_CONVERSIONS
        .iter()
        .find(|(source, _)| *source == operator)
        .map_or(operator, |(_, target)| *target)
}

/// Logical operator behind a conditional assignment (`||=` gives `||`).
pub fn conditional_assignment(operator: &str) -> Option<&'static str> {
    CONDITIONAL_ASSIGNMENTS
        .iter()
        .find(|(source, _)| *source == operator)
        .map(|(_, logical)| *logical)
}

/// Keyword operators (`typeof`, `delete`) need a space before the operand.
pub fn is_word_operator(operator: &str) -> bool {
    !operator.is_empty() && operator.chars().all(|ch| ch.is_ascii_alphabetic())
}

/// Whether a prefix operator must be separated from its rendered operand:
/// keyword operators always, and `-`/`+` before an operand starting with the
/// same sign (`- -x`, not the decrement `--x`).
pub fn needs_operand_space(operator: &str, operand: &str) -> bool {
    if is_word_operator(operator) {
        return true;
    }
    match operator {
        "-" | "+" => operand.starts_with(operator),
        _ => false,
    }
}
