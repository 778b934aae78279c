//! `logicdrill` produces practice material for introductory formal logic: random
//! propositional formulas, canonical spellings of them, and subproof drills for
//! natural-deduction rules in the style of Fitch proofs.
//!
//! # Main pieces
//! There are four main pieces in `logicdrill`: the [`normalize`] functions, the
//! [`generator`], the [`Scenario`] and [`grading`].
//!
//! ## Normalization
//! Users type connectives in many ways: `->`, `-->`, `&`, `^`, `v`, `~`, `-`. The
//! [`normalize`] module maps all of them onto the canonical symbols `¬ ∧ ∨ → ↔` and
//! pretty-prints formulas with uniform spacing. Text entered by a user is never compared
//! with raw string equality, only through [`normalize::formulas_match`].
//!
//! ## Formulas
//! A formula is exchanged as a fully parenthesized string such as `((¬P) → (Q ∨ R))` over
//! the atoms `P`, `Q`, `R` and `S`. Behind the strings sits the [`Formula`] tree, which the
//! [`formatter::Formatter`] writes and reads in ASCII or canonical notation.
//!
//! ## Generation
//! [`generator::generate_formula`] draws a random formula of bounded depth over a
//! [`generator::ConnectiveSet`]. Every function that needs randomness takes the random
//! source as an argument, so a seeded generator reproduces its output exactly.
//!
//! ## Scenarios
//! A [`Scenario`] is one round of the subproof drill. A rule is drawn from `∨E`, `∨I`,
//! `↔I`, `↔E`, `¬E` and `IP`, three operands φ, ψ and χ are generated, and the scenario
//! records the premises shown to the user together with the subproofs (assumption and
//! conclusion) that a correct application of the rule opens. `∨I`, `↔E` and `¬E` need no
//! subproof at all.
//!
//! ```
//! use logicdrill::grading::{grade, Grade, SubmittedSubproof};
//! use logicdrill::{InferenceRule, ScenarioBuilder};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let scenario = ScenarioBuilder::default().build_with_rule(InferenceRule::IndirectProof, &mut rng);
//! let answer = SubmittedSubproof::new(format!("~{}", scenario.chi()), "⊥");
//! assert_eq!(grade(&scenario, Some(1), &[answer]), Grade::CorrectWithSubproofs);
//! ```
//!
//! The streak and score records of the surrounding application are described in [`stats`];
//! nothing in this crate touches them.

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

pub mod error;
pub mod formatter;
mod formula;
pub mod generator;
pub mod grading;
pub mod normalize;
mod scenario;
pub mod stats;
mod types;

pub use formula::*;
pub use generator::{generate_formula, ConnectiveSet, GeneratorConfig};
pub use normalize::{canonicalize_input, pretty_print};
pub use scenario::*;
pub use types::*;
