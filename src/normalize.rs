//! Canonicalization of logic symbols.
//!
//! Input typed by a user (or produced by the generator) may spell connectives in ASCII:
//! `~ & ^ v -> <->` and a few variants. Everything is mapped onto the canonical set
//! `¬ ∧ ∨ → ↔` before formulas are displayed or compared.

use crate::formula::Formula;
use tracing::trace;

fn is_arrow_shaft(c: char) -> bool {
    matches!(c, '-' | '−' | '_')
}

/// `<`, any run of shaft characters, `>`
fn replace_biconditionals(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '<' {
            let mut j = i + 1;
            while j < chars.len() && is_arrow_shaft(chars[j]) {
                j += 1;
            }
            if j < chars.len() && chars[j] == '>' {
                out.push('↔');
                i = j + 1;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

/// Any run of shaft characters followed by `>`. A bare `>` counts as well.
fn replace_conditionals(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        let mut j = i;
        while j < chars.len() && is_arrow_shaft(chars[j]) {
            j += 1;
        }
        if j < chars.len() && chars[j] == '>' {
            out.push('→');
            i = j + 1;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

/// Replaces ASCII and alternate spellings of every connective by its canonical symbol.
///
/// The biconditional is replaced before the conditional, since `->` is contained in `<->`.
///
/// # Example
/// ```
/// use logicdrill::normalize::normalize_symbols;
///
/// assert_eq!(normalize_symbols("(P <-> Q) -> ~(R & S)"), "(P ↔ Q) → ¬(R ∧ S)");
/// assert_eq!(normalize_symbols("P ^ Q v R"), "P ∧ Q ∨ R");
/// ```
pub fn normalize_symbols(input: &str) -> String {
    let s = replace_biconditionals(input);
    let s = replace_conditionals(&s);
    s.chars()
        .map(|c| match c {
            '&' | '^' => '∧',
            'v' => '∨',
            '~' => '¬',
            c => c,
        })
        .collect()
}

/// Maps only the negation variants `~`, `∼` and `-` to `¬`.
pub fn normalize_negation(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '~' | '∼' | '-' => '¬',
            c => c,
        })
        .collect()
}

/// Normalizes user-entered text before it is compared.
///
/// Connectives become canonical and the edges are trimmed. Spacing between tokens is left
/// alone; see [`comparison_key`] for a form that ignores it.
///
/// ```
/// use logicdrill::normalize::canonicalize_input;
///
/// assert_eq!(canonicalize_input("  -P v Q  "), "¬P ∨ Q");
/// assert_eq!(canonicalize_input(" \t "), "");
/// ```
pub fn canonicalize_input(input: &str) -> String {
    let s = normalize_negation(&normalize_symbols(input)).replace('\u{a0}', " ");
    s.trim().to_owned()
}

fn tighten(s: &str, symbol: char) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == symbol {
            out.truncate(out.trim_end().len());
            out.push(c);
            while chars.peek().map_or(false, |c| c.is_whitespace()) {
                chars.next();
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn pad(s: &str, symbol: char) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == symbol {
            out.truncate(out.trim_end().len());
            out.push(' ');
            out.push(c);
            out.push(' ');
            while chars.peek().map_or(false, |c| c.is_whitespace()) {
                chars.next();
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Normalizes spacing in a formula that already uses canonical symbols: nothing around `¬`,
/// exactly one space on each side of `∨ → ↔ ∧ =`.
///
/// ```
/// use logicdrill::normalize::pretty_print;
///
/// assert_eq!(pretty_print("(P∨ ¬ Q)→R"), "(P ∨ ¬Q) → R");
/// ```
pub fn pretty_print(input: &str) -> String {
    let mut s = tighten(input, '¬');
    for symbol in ['∨', '→', '↔', '∧', '='] {
        s = pad(&s, symbol);
    }
    s
}

/// The form in which two formulas are compared: canonical symbols and no whitespace at all.
///
/// Atoms and connectives are single characters, so whitespace never carries meaning.
pub fn comparison_key(input: &str) -> String {
    canonicalize_input(input)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Decides whether `submitted` denotes the formula `expected`.
///
/// Both sides are compared by [`comparison_key`]; failing that, both are read as formulas and
/// compared as trees, which forgives redundant parentheses.
///
/// ```
/// use logicdrill::normalize::formulas_match;
///
/// assert!(formulas_match("(P ∨ Q)", "P v Q"));
/// assert!(formulas_match("¬(P ∧ Q)", "~(P&Q)"));
/// assert!(!formulas_match("P → Q", "Q -> P"));
/// ```
pub fn formulas_match(expected: &str, submitted: &str) -> bool {
    if comparison_key(expected) == comparison_key(submitted) {
        return true;
    }
    match (expected.parse::<Formula>(), submitted.parse::<Formula>()) {
        (Ok(a), Ok(b)) => a == b,
        (a, b) => {
            trace!(?a, ?b, "formulas differ and do not both parse");
            false
        }
    }
}
