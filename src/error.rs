use thiserror::Error;

/// A error which is produced when text cannot be read as a formula or a rule name
///
/// Offsets are byte offsets into the canonicalized input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty formula")]
    Empty,
    #[error("malformed formula at offset {offset}")]
    Syntax { offset: usize },
    #[error("unexpected trailing input at offset {offset}")]
    Trailing { offset: usize },
    #[error("unknown inference rule `{0}`")]
    UnknownRule(String),
}

impl ParseError {
    pub(crate) fn from_nom(input: &str, error: nom::Err<nom::error::Error<&str>>) -> Self {
        match error {
            nom::Err::Incomplete(_) => ParseError::Syntax {
                offset: input.len(),
            },
            nom::Err::Error(e) | nom::Err::Failure(e) => ParseError::Syntax {
                offset: input.len() - e.input.len(),
            },
        }
    }
}
