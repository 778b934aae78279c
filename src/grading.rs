//! Checking a submitted subproof structure against a [`Scenario`].

use crate::{normalize::formulas_match, scenario::Scenario};
use tracing::trace;

/// A subproof as entered by the user, in any spelling
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SubmittedSubproof {
    pub assumption: String,
    pub conclusion: String,
}

impl SubmittedSubproof {
    pub fn new(assumption: impl Into<String>, conclusion: impl Into<String>) -> Self {
        SubmittedSubproof {
            assumption: assumption.into(),
            conclusion: conclusion.into(),
        }
    }
}

impl<A: Into<String>, C: Into<String>> From<(A, C)> for SubmittedSubproof {
    fn from((assumption, conclusion): (A, C)) -> Self {
        Self::new(assumption, conclusion)
    }
}

/// The outcome of [`grade`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grade {
    /// No subproof count was given
    NeedsCount,
    WrongCount,
    CorrectNoSubproofs,
    CorrectWithSubproofs,
    /// The count is right but some assumption or conclusion is not
    IncorrectStructure,
}

impl Grade {
    pub fn is_correct(self) -> bool {
        matches!(self, Grade::CorrectNoSubproofs | Grade::CorrectWithSubproofs)
    }
}

/// Grades a submitted subproof count and the subproofs themselves.
///
/// The count is checked first and decides the outcome on its own when it is wrong. Subproofs
/// are compared by position; a position with no submitted subproof is a mismatch. Each
/// assumption and conclusion is compared with [`formulas_match`].
///
/// # Example
/// ```
/// use logicdrill::grading::{grade, Grade, SubmittedSubproof};
/// use logicdrill::{InferenceRule, Scenario, Side};
///
/// let s = Scenario::assemble(InferenceRule::DisjunctionElim, "P", "Q", "R", Side::Left);
/// let submitted: Vec<SubmittedSubproof> = vec![("P", "R").into(), ("Q", "R").into()];
/// assert_eq!(grade(&s, Some(2), &submitted), Grade::CorrectWithSubproofs);
/// assert_eq!(grade(&s, Some(1), &submitted), Grade::WrongCount);
/// assert_eq!(grade(&s, None, &submitted), Grade::NeedsCount);
/// ```
pub fn grade(scenario: &Scenario, count: Option<usize>, submitted: &[SubmittedSubproof]) -> Grade {
    let count = match count {
        Some(count) => count,
        None => return Grade::NeedsCount,
    };
    let expected = scenario.subproofs();
    if count != expected.len() {
        return Grade::WrongCount;
    }
    if expected.is_empty() {
        return Grade::CorrectNoSubproofs;
    }
    for (i, expectation) in expected.iter().enumerate() {
        let matches = submitted.get(i).map_or(false, |s| {
            formulas_match(&expectation.assumption, &s.assumption)
                && formulas_match(&expectation.conclusion, &s.conclusion)
        });
        if !matches {
            trace!(index = i, "subproof does not match");
            return Grade::IncorrectStructure;
        }
    }
    Grade::CorrectWithSubproofs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{InferenceRule, ScenarioBuilder, Side};
    use rand::{rngs::StdRng, SeedableRng};

    fn scenario(rule: InferenceRule) -> Scenario {
        Scenario::assemble(rule, "(P ∨ Q)", "(¬R)", "(P → S)", Side::Left)
    }

    #[test]
    fn wrong_count_wins_over_contents() {
        let mut rng = StdRng::seed_from_u64(5);
        let builder = ScenarioBuilder::default();
        for _ in 0..50 {
            let s = builder.build(&mut rng);
            let right: Vec<SubmittedSubproof> = s
                .subproofs()
                .iter()
                .map(|e| SubmittedSubproof::new(e.assumption.clone(), e.conclusion.clone()))
                .collect();
            for count in 0..4 {
                if count != s.subproofs().len() {
                    assert_eq!(grade(&s, Some(count), &right), Grade::WrongCount);
                }
            }
            let expected = if right.is_empty() {
                Grade::CorrectNoSubproofs
            } else {
                Grade::CorrectWithSubproofs
            };
            assert_eq!(grade(&s, Some(right.len()), &right), expected);
        }
    }

    #[test]
    fn zero_subproofs() {
        for rule in [
            InferenceRule::DisjunctionIntro,
            InferenceRule::BiconditionalElim,
            InferenceRule::NegationElim,
        ] {
            let s = scenario(rule);
            assert_eq!(grade(&s, Some(0), &[]), Grade::CorrectNoSubproofs);
            assert!(grade(&s, Some(0), &[]).is_correct());
            assert_eq!(grade(&s, Some(1), &[]), Grade::WrongCount);
        }
    }

    #[test]
    fn ascii_spellings_are_accepted() {
        let s = scenario(InferenceRule::DisjunctionElim);
        let submitted: Vec<SubmittedSubproof> =
            vec![("P v Q", "P -> S").into(), (" ~R", "(P->S)").into()];
        assert_eq!(grade(&s, Some(2), &submitted), Grade::CorrectWithSubproofs);

        let s = scenario(InferenceRule::IndirectProof);
        let submitted: Vec<SubmittedSubproof> = vec![("-(P -> S)", "⊥").into()];
        assert_eq!(grade(&s, Some(1), &submitted), Grade::CorrectWithSubproofs);
    }

    #[test]
    fn order_matters() {
        let s = scenario(InferenceRule::BiconditionalIntro);
        let submitted: Vec<SubmittedSubproof> =
            vec![("~R", "P v Q").into(), ("P v Q", "~R").into()];
        assert_eq!(grade(&s, Some(2), &submitted), Grade::IncorrectStructure);
    }

    #[test]
    fn missing_pairs_are_mismatches() {
        let s = scenario(InferenceRule::DisjunctionElim);
        let submitted: Vec<SubmittedSubproof> = vec![("P ∨ Q", "P → S").into()];
        assert_eq!(grade(&s, Some(2), &submitted), Grade::IncorrectStructure);
        assert_eq!(grade(&s, Some(2), &[]), Grade::IncorrectStructure);
        assert!(!Grade::IncorrectStructure.is_correct());
    }

    #[test]
    fn deeply_nested_answers_are_graded_not_crashed() {
        let s = Scenario::assemble(InferenceRule::IndirectProof, "P", "Q", "R", Side::Left);
        for n in [1_000, 20_000, 200_000] {
            let negations = vec![SubmittedSubproof::new(format!("{}R", "~".repeat(n)), "⊥")];
            assert_eq!(grade(&s, Some(1), &negations), Grade::IncorrectStructure);

            let parentheses = vec![SubmittedSubproof::new(
                format!("¬{}R{}", "(".repeat(n), ")".repeat(n)),
                "⊥",
            )];
            assert_eq!(grade(&s, Some(1), &parentheses), Grade::IncorrectStructure);
        }
    }

    #[test]
    fn wrong_conclusion_is_caught() {
        let s = scenario(InferenceRule::IndirectProof);
        let submitted: Vec<SubmittedSubproof> = vec![("¬(P → S)", "P").into()];
        assert_eq!(grade(&s, Some(1), &submitted), Grade::IncorrectStructure);
    }
}
