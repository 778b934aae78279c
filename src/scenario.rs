use crate::{
    error::ParseError,
    formatter::Formatter,
    generator::GeneratorConfig,
    normalize::{canonicalize_input, normalize_symbols, pretty_print},
};
use rand::Rng;
use std::str::FromStr;
use tracing::debug;

const FALSUM: &str = "⊥";
const PREMISE: &str = "PR";

/// A natural-deduction rule whose subproof structure is drilled
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InferenceRule {
    /// ∨E
    DisjunctionElim,
    /// ∨I
    DisjunctionIntro,
    /// ↔I
    BiconditionalIntro,
    /// ↔E
    BiconditionalElim,
    /// ¬E
    NegationElim,
    /// IP
    IndirectProof,
}

impl InferenceRule {
    pub const ALL: [InferenceRule; 6] = [
        InferenceRule::DisjunctionElim,
        InferenceRule::DisjunctionIntro,
        InferenceRule::BiconditionalIntro,
        InferenceRule::BiconditionalElim,
        InferenceRule::NegationElim,
        InferenceRule::IndirectProof,
    ];

    pub fn label(self) -> &'static str {
        use InferenceRule::*;
        match self {
            DisjunctionElim => "∨E",
            DisjunctionIntro => "∨I",
            BiconditionalIntro => "↔I",
            BiconditionalElim => "↔E",
            NegationElim => "¬E",
            IndirectProof => "IP",
        }
    }

    /// Number of subproofs a correct application opens
    pub fn subproof_arity(self) -> usize {
        use InferenceRule::*;
        match self {
            DisjunctionElim | BiconditionalIntro => 2,
            IndirectProof => 1,
            DisjunctionIntro | BiconditionalElim | NegationElim => 0,
        }
    }

    pub fn description(self) -> &'static str {
        use InferenceRule::*;
        match self {
            DisjunctionElim => {
                "From φ ∨ ψ, conclude χ after deriving χ once from φ and once from ψ."
            }
            DisjunctionIntro => "From φ, conclude φ ∨ ψ directly.",
            BiconditionalIntro => "Derive ψ from φ and φ from ψ to conclude φ ↔ ψ.",
            BiconditionalElim => "From φ ↔ ψ and one side, conclude the other side directly.",
            NegationElim => "From φ and ¬φ, conclude ⊥ directly.",
            IndirectProof => "Assume ¬χ and derive ⊥ to conclude χ.",
        }
    }
}

impl std::fmt::Display for InferenceRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InferenceRule {
    type Err = ParseError;

    /// Accepts the labels in any spelling [`canonicalize_input`] understands, e.g. `vE` or
    /// `<->I`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = canonicalize_input(s)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|rule| rule.label() == key)
            .ok_or_else(|| ParseError::UnknownRule(s.to_owned()))
    }
}

/// One line of a Fitch-style proof as shown to the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofLine {
    pub id: String,
    pub formula: String,
    pub justification: String,
    pub depth: usize,
    pub is_hypothesis: bool,
    pub highlight: bool,
}

/// A subproof a correct rule application must contain
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubproofExpectation {
    pub assumption: String,
    pub conclusion: String,
}

impl SubproofExpectation {
    fn new(assumption: &str, conclusion: &str) -> Self {
        SubproofExpectation {
            assumption: assumption.to_owned(),
            conclusion: conclusion.to_owned(),
        }
    }
}

/// Which side of `φ ↔ ψ` is given as the second premise of a `↔E` scenario
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// One practice round: a rule, its operands, the premises shown and the subproofs expected.
///
/// A scenario is never changed once built; a new round builds a new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    rule: InferenceRule,
    phi: String,
    psi: String,
    chi: String,
    context: Vec<ProofLine>,
    subproofs: Vec<SubproofExpectation>,
}

impl Scenario {
    /// Lays out the premises and expected subproofs of `rule` applied to the operands.
    ///
    /// `φ`, `ψ` and `χ` are expected in pretty-printed canonical form. `asserted` is only
    /// consulted for `↔E`.
    ///
    /// # Example
    /// ```
    /// use logicdrill::{InferenceRule, Scenario, Side};
    ///
    /// let s = Scenario::assemble(InferenceRule::DisjunctionIntro, "P", "(Q ∧ R)", "S", Side::Left);
    /// assert_eq!(s.chi(), "P ∨ (Q ∧ R)");
    /// assert!(s.subproofs().is_empty());
    /// assert_eq!(s.context()[0].formula, "P");
    /// ```
    pub fn assemble(rule: InferenceRule, phi: &str, psi: &str, chi: &str, asserted: Side) -> Self {
        use InferenceRule::*;
        let mut chi = chi.to_owned();
        let (premises, subproofs) = match rule {
            DisjunctionElim => (
                vec![pretty_print(&format!("{} ∨ {}", phi, psi))],
                vec![
                    SubproofExpectation::new(phi, &chi),
                    SubproofExpectation::new(psi, &chi),
                ],
            ),
            DisjunctionIntro => {
                chi = pretty_print(&format!("{} ∨ {}", phi, psi));
                (vec![phi.to_owned()], vec![])
            }
            BiconditionalIntro => (
                vec![],
                vec![
                    SubproofExpectation::new(phi, psi),
                    SubproofExpectation::new(psi, phi),
                ],
            ),
            BiconditionalElim => {
                let (given, other) = match asserted {
                    Side::Left => (phi, psi),
                    Side::Right => (psi, phi),
                };
                chi = other.to_owned();
                (
                    vec![
                        pretty_print(&format!("{} ↔ {}", phi, psi)),
                        given.to_owned(),
                    ],
                    vec![],
                )
            }
            NegationElim => {
                chi = FALSUM.to_owned();
                (
                    vec![phi.to_owned(), pretty_print(&format!("¬{}", phi))],
                    vec![],
                )
            }
            IndirectProof => (
                vec![],
                vec![SubproofExpectation::new(
                    &pretty_print(&format!("¬{}", chi)),
                    FALSUM,
                )],
            ),
        };
        Scenario {
            rule,
            phi: phi.to_owned(),
            psi: psi.to_owned(),
            chi,
            context: premise_lines(premises),
            subproofs,
        }
    }

    pub fn rule(&self) -> InferenceRule {
        self.rule
    }

    pub fn phi(&self) -> &str {
        &self.phi
    }

    pub fn psi(&self) -> &str {
        &self.psi
    }

    /// The formula the rule application concludes
    pub fn chi(&self) -> &str {
        &self.chi
    }

    pub fn context(&self) -> &[ProofLine] {
        &self.context
    }

    pub fn subproofs(&self) -> &[SubproofExpectation] {
        &self.subproofs
    }
}

fn premise_lines(premises: Vec<String>) -> Vec<ProofLine> {
    let last = premises.len().saturating_sub(1);
    premises
        .into_iter()
        .enumerate()
        .map(|(i, formula)| ProofLine {
            id: (i + 1).to_string(),
            formula,
            justification: PREMISE.to_owned(),
            depth: 0,
            is_hypothesis: i == last,
            highlight: false,
        })
        .collect()
}

/// Draws random scenarios
#[derive(Clone, Debug, Default)]
pub struct ScenarioBuilder {
    config: GeneratorConfig,
}

impl ScenarioBuilder {
    pub fn new(config: GeneratorConfig) -> Self {
        ScenarioBuilder { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Draws a random operand, pretty-printed in canonical symbols
    pub fn formula<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let raw = Formatter::ascii().render(&self.config.generate(rng));
        pretty_print(&normalize_symbols(&raw))
    }

    /// Draws φ, ψ and χ, then a rule uniformly, and builds a scenario for them
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Scenario {
        let operands = self.operands(rng);
        let rule = InferenceRule::ALL[rng.gen_range(0..InferenceRule::ALL.len())];
        self.finish(rule, operands, rng)
    }

    pub fn build_with_rule<R: Rng + ?Sized>(&self, rule: InferenceRule, rng: &mut R) -> Scenario {
        let operands = self.operands(rng);
        self.finish(rule, operands, rng)
    }

    fn operands<R: Rng + ?Sized>(&self, rng: &mut R) -> [String; 3] {
        let phi = self.formula(rng);
        let psi = self.formula(rng);
        let chi = self.formula(rng);
        [phi, psi, chi]
    }

    fn finish<R: Rng + ?Sized>(
        &self,
        rule: InferenceRule,
        [phi, psi, chi]: [String; 3],
        rng: &mut R,
    ) -> Scenario {
        let asserted = if rng.gen::<bool>() {
            Side::Left
        } else {
            Side::Right
        };
        let scenario = Scenario::assemble(rule, &phi, &psi, &chi, asserted);
        debug!(
            rule = %rule,
            description = rule.description(),
            phi = %scenario.phi(),
            psi = %scenario.psi(),
            chi = %scenario.chi(),
            subproofs = scenario.subproofs().len(),
            "built scenario"
        );
        scenario
    }
}

/// Builds a scenario with the default settings and the thread-local random source
pub fn build_scenario() -> Scenario {
    ScenarioBuilder::default().build(&mut rand::thread_rng())
}
