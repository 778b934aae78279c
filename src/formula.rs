use crate::{error::ParseError, formatter::Formatter, normalize::canonicalize_input, types::*};
#[cfg(feature = "use-serde")]
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A unary connective
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "use-serde", derive(Serialize, Deserialize))]
pub enum UnaryOp {
    #[cfg_attr(feature = "use-serde", serde(rename = "~", alias = "¬"))]
    Not,
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 1] = [UnaryOp::Not];

    /// The spelling used in raw generator output
    pub fn ascii(self) -> &'static str {
        match self {
            UnaryOp::Not => "~",
        }
    }

    /// The canonical Unicode symbol
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Not => "¬",
        }
    }
}

/// A binary connective
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "use-serde", derive(Serialize, Deserialize))]
pub enum BinaryOp {
    #[cfg_attr(feature = "use-serde", serde(rename = "&", alias = "∧"))]
    And,
    #[cfg_attr(feature = "use-serde", serde(rename = "v", alias = "∨"))]
    Or,
    #[cfg_attr(feature = "use-serde", serde(rename = "->", alias = "→"))]
    Implies,
    #[cfg_attr(feature = "use-serde", serde(rename = "<->", alias = "↔"))]
    Iff,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 4] = [
        BinaryOp::And,
        BinaryOp::Or,
        BinaryOp::Implies,
        BinaryOp::Iff,
    ];

    /// The spelling used in raw generator output
    pub fn ascii(self) -> &'static str {
        match self {
            BinaryOp::And => "&",
            BinaryOp::Or => "v",
            BinaryOp::Implies => "->",
            BinaryOp::Iff => "<->",
        }
    }

    /// The canonical Unicode symbol
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::And => "∧",
            BinaryOp::Or => "∨",
            BinaryOp::Implies => "→",
            BinaryOp::Iff => "↔",
        }
    }
}

/// A propositional formula as a tree.
///
/// Formulas are exchanged as strings at the crate boundary; the tree is what those strings
/// mean. Rendering a tree with [`Display`](std::fmt::Display) gives the canonical, fully
/// parenthesized and pretty-printed form, and [`FromStr`] reads any spelling that
/// [`canonicalize_input`] understands. The outermost parentheses may be left out when
/// reading, and a negation may be written without its own parentheses.
///
/// # Example
/// ```
/// use logicdrill::{Atom, BinaryOp, Formula};
///
/// let f = Formula::binary(
///     BinaryOp::Implies,
///     Formula::not(Formula::Atom(Atom::P)),
///     Formula::Atom(Atom::Q),
/// );
/// assert_eq!(f.to_string(), "((¬P) → Q)");
/// assert_eq!("~P -> Q".parse::<Formula>(), Ok(f));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Formula {
    Atom(Atom),
    Falsum,
    Unary(UnaryOp, Box<Formula>),
    Binary(BinaryOp, Box<Formula>, Box<Formula>),
}

impl Formula {
    pub fn unary(op: UnaryOp, sub: Formula) -> Self {
        Formula::Unary(op, Box::new(sub))
    }

    pub fn not(sub: Formula) -> Self {
        Self::unary(UnaryOp::Not, sub)
    }

    pub fn binary(op: BinaryOp, left: Formula, right: Formula) -> Self {
        Formula::Binary(op, Box::new(left), Box::new(right))
    }

    pub fn is_atomic(&self) -> bool {
        matches!(self, Formula::Atom(_) | Formula::Falsum)
    }

    /// Returns the nesting depth of connectives, `0` for atoms and `⊥`.
    ///
    /// # Example
    /// ```
    /// use logicdrill::Formula;
    ///
    /// let f: Formula = "((P & Q) v ~R)".parse().unwrap();
    /// assert_eq!(f.depth(), 2);
    /// ```
    pub fn depth(&self) -> Depth {
        match self {
            Formula::Atom(_) | Formula::Falsum => 0,
            Formula::Unary(_, sub) => sub.depth() + 1,
            Formula::Binary(_, left, right) => left.depth().max(right.depth()) + 1,
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = String::new();
        Formatter::unicode().format_formula(&mut s, self);
        f.write_str(&s)
    }
}

impl FromStr for Formula {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Formatter::unicode().read(&canonicalize_input(s))
    }
}
