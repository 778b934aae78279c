use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{anychar, char, multispace0},
    combinator::{map, map_opt, opt, value},
    error::{Error, ErrorKind},
    sequence::{delimited, pair, preceded},
    IResult,
};

use crate::{
    error::ParseError,
    formula::{BinaryOp, Formula, UnaryOp},
    types::*,
};

const FALSUM: &str = "⊥";

/// Deepest nesting of parentheses and negations [`Formatter::parse_formula`] accepts
pub const MAX_NESTING: usize = 100;

/// The set of spellings a [`Formatter`] writes and reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// `~ & v -> <->`, as typed on a keyboard and as produced by the generator
    Ascii,
    /// `¬ ∧ ∨ → ↔`, the canonical symbols
    Unicode,
}

/// Writes [`Formula`]s as fully parenthesized text and reads them back.
///
/// ```
/// use logicdrill::formatter::Formatter;
/// use logicdrill::{Atom, BinaryOp, Formula};
///
/// let f = Formula::binary(BinaryOp::Iff, Formula::Atom(Atom::P), Formula::not(Formula::Atom(Atom::Q)));
///
/// let mut s = String::new();
/// Formatter::ascii().format_formula(&mut s, &f);
/// assert_eq!(s, "(P <-> (~Q))");
///
/// let (remaining, f1) = Formatter::ascii().parse_formula(&s).unwrap();
/// assert_eq!(remaining, "");
/// assert_eq!(f1, f);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter {
    notation: Notation,
}

impl Formatter {
    pub const fn new(notation: Notation) -> Self {
        Formatter { notation }
    }

    pub const fn ascii() -> Self {
        Self::new(Notation::Ascii)
    }

    pub const fn unicode() -> Self {
        Self::new(Notation::Unicode)
    }

    fn unary_spelling(&self, op: UnaryOp) -> &'static str {
        match self.notation {
            Notation::Ascii => op.ascii(),
            Notation::Unicode => op.symbol(),
        }
    }

    fn binary_spelling(&self, op: BinaryOp) -> &'static str {
        match self.notation {
            Notation::Ascii => op.ascii(),
            Notation::Unicode => op.symbol(),
        }
    }

    pub fn format_formula(&self, s: &mut String, formula: &Formula) {
        match formula {
            Formula::Atom(atom) => s.push(atom.letter()),
            Formula::Falsum => s.push_str(FALSUM),
            Formula::Unary(op, sub) => {
                s.push('(');
                s.push_str(self.unary_spelling(*op));
                self.format_formula(s, sub);
                s.push(')');
            }
            Formula::Binary(op, left, right) => {
                s.push('(');
                self.format_formula(s, left);
                s.push(' ');
                s.push_str(self.binary_spelling(*op));
                s.push(' ');
                self.format_formula(s, right);
                s.push(')');
            }
        }
    }

    pub fn render(&self, formula: &Formula) -> String {
        let mut s = String::new();
        self.format_formula(&mut s, formula);
        s
    }

    /// Reads a whole formula, surrounding whitespace allowed.
    ///
    /// # Errors
    /// * `Empty` - if `input` is blank
    /// * `Syntax` - if no formula starts at the beginning of `input`, or it nests deeper than
    /// [`MAX_NESTING`]
    /// * `Trailing` - if something other than whitespace follows the formula
    pub fn read(&self, input: &str) -> Result<Formula, ParseError> {
        if input.trim().is_empty() {
            return Err(ParseError::Empty);
        }
        let (remaining, formula) = self
            .parse_formula(input)
            .map_err(|e| ParseError::from_nom(input, e))?;
        let remaining = remaining.trim_start();
        if remaining.is_empty() {
            Ok(formula)
        } else {
            Err(ParseError::Trailing {
                offset: input.len() - remaining.len(),
            })
        }
    }

    /// Parses one formula whose outermost parentheses may be omitted.
    ///
    /// Fails once parentheses and negations nest deeper than [`MAX_NESTING`].
    pub fn parse_formula<'a>(&self, input: &'a str) -> IResult<&'a str, Formula> {
        self.parse_nested(input, 0)
    }

    fn parse_nested<'a>(&self, input: &'a str, nesting: usize) -> IResult<&'a str, Formula> {
        let (input, left) = self.parse_operand(input, nesting)?;
        let (input, rest) = opt(pair(
            delimited(multispace0, |input| self.parse_binary_op(input), multispace0),
            |input| self.parse_operand(input, nesting),
        ))(input)?;
        Ok((
            input,
            match rest {
                Some((op, right)) => Formula::binary(op, left, right),
                None => left,
            },
        ))
    }

    fn parse_operand<'a>(&self, input: &'a str, nesting: usize) -> IResult<&'a str, Formula> {
        if nesting > MAX_NESTING {
            return Err(nom::Err::Failure(Error::new(input, ErrorKind::TooLarge)));
        }
        preceded(
            multispace0,
            alt((
                map(|input| self.parse_atom(input), Formula::Atom),
                value(Formula::Falsum, tag(FALSUM)),
                map(
                    pair(
                        |input| self.parse_unary_op(input),
                        |input| self.parse_operand(input, nesting + 1),
                    ),
                    |(op, sub)| Formula::unary(op, sub),
                ),
                delimited(
                    char('('),
                    |input| self.parse_nested(input, nesting + 1),
                    preceded(multispace0, char(')')),
                ),
            )),
        )(input)
    }

    pub fn parse_atom<'a>(&self, input: &'a str) -> IResult<&'a str, Atom> {
        map_opt(anychar, Atom::from_letter)(input)
    }

    fn parse_unary_op<'a>(&self, input: &'a str) -> IResult<&'a str, UnaryOp> {
        value(UnaryOp::Not, tag(self.unary_spelling(UnaryOp::Not)))(input)
    }

    fn parse_binary_op<'a>(&self, input: &'a str) -> IResult<&'a str, BinaryOp> {
        alt((
            value(BinaryOp::Iff, tag(self.binary_spelling(BinaryOp::Iff))),
            value(BinaryOp::Implies, tag(self.binary_spelling(BinaryOp::Implies))),
            value(BinaryOp::And, tag(self.binary_spelling(BinaryOp::And))),
            value(BinaryOp::Or, tag(self.binary_spelling(BinaryOp::Or))),
        ))(input)
    }
}
