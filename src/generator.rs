use crate::{
    formatter::Formatter,
    formula::{BinaryOp, Formula, UnaryOp},
    types::*,
};
use rand::{seq::SliceRandom, Rng};
#[cfg(feature = "use-serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The connectives a generator may use
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "use-serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "use-serde", serde(default))]
pub struct ConnectiveSet {
    pub unary: Vec<UnaryOp>,
    pub binary: Vec<BinaryOp>,
}

impl ConnectiveSet {
    /// `~` and `& v -> <->`
    pub fn all() -> Self {
        ConnectiveSet {
            unary: UnaryOp::ALL.to_vec(),
            binary: BinaryOp::ALL.to_vec(),
        }
    }

    pub fn empty() -> Self {
        ConnectiveSet {
            unary: Vec::new(),
            binary: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.unary.is_empty() && self.binary.is_empty()
    }
}

impl Default for ConnectiveSet {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Clone, Copy)]
enum Category {
    Unary,
    Binary,
}

/// Parameters of a random formula
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "use-serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "use-serde", serde(default))]
pub struct GeneratorConfig {
    pub depth: Depth,
    pub connectives: ConnectiveSet,
    /// Chance of stopping with an atom before `depth` is exhausted
    pub stop_probability: f64,
}

impl GeneratorConfig {
    pub const DEFAULT_DEPTH: Depth = 2;
    pub const DEFAULT_STOP_PROBABILITY: f64 = 0.25;

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Formula {
        self.generate_at(self.depth, rng)
    }

    fn generate_at<R: Rng + ?Sized>(&self, depth: Depth, rng: &mut R) -> Formula {
        if depth == 0 || rng.gen::<f64>() < self.stop_probability {
            return random_atom(rng);
        }

        if self.connectives.is_empty() {
            debug!("no connectives configured, falling back to an atom");
            return random_atom(rng);
        }

        let category = if self.connectives.binary.is_empty() {
            Category::Unary
        } else if self.connectives.unary.is_empty() || rng.gen::<bool>() {
            Category::Binary
        } else {
            Category::Unary
        };

        match category {
            Category::Unary => {
                let op = *self
                    .connectives
                    .unary
                    .choose(rng)
                    .unwrap_or(&UnaryOp::Not);
                Formula::unary(op, self.generate_at(depth - 1, rng))
            }
            Category::Binary => {
                let op = *self
                    .connectives
                    .binary
                    .choose(rng)
                    .unwrap_or(&BinaryOp::And);
                let left = self.generate_at(depth - 1, rng);
                let right = self.generate_at(depth - 1, rng);
                Formula::binary(op, left, right)
            }
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            depth: Self::DEFAULT_DEPTH,
            connectives: ConnectiveSet::all(),
            stop_probability: Self::DEFAULT_STOP_PROBABILITY,
        }
    }
}

fn random_atom<R: Rng + ?Sized>(rng: &mut R) -> Formula {
    Formula::Atom(ATOMS[rng.gen_range(0..ATOMS.len())])
}

/// Generates a random formula with at most `depth` nested connectives.
pub fn generate<R: Rng + ?Sized>(
    depth: Depth,
    connectives: &ConnectiveSet,
    rng: &mut R,
) -> Formula {
    GeneratorConfig {
        depth,
        connectives: connectives.clone(),
        ..GeneratorConfig::default()
    }
    .generate(rng)
}

/// Generates a random formula in raw ASCII notation, e.g. `((~P) -> (Q v R))`.
///
/// # Example
/// ```
/// use logicdrill::generator::{generate_formula, ConnectiveSet};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let atom = generate_formula(0, &ConnectiveSet::all(), &mut rng);
/// assert!(["P", "Q", "R", "S"].contains(&atom.as_str()));
/// ```
pub fn generate_formula<R: Rng + ?Sized>(
    depth: Depth,
    connectives: &ConnectiveSet,
    rng: &mut R,
) -> String {
    Formatter::ascii().render(&generate(depth, connectives, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{normalize_symbols, pretty_print};
    use rand::{rngs::StdRng, SeedableRng};

    fn only_allowed_tokens(s: &str, connectives: &ConnectiveSet) -> bool {
        let mut rest = s.to_owned();
        // longest spellings first, `->` is inside `<->`
        let mut spellings: Vec<&str> = connectives
            .binary
            .iter()
            .map(|op| op.ascii())
            .chain(connectives.unary.iter().map(|op| op.ascii()))
            .collect();
        spellings.sort_by_key(|s| std::cmp::Reverse(s.len()));
        for spelling in spellings {
            rest = rest.replace(spelling, "");
        }
        rest.chars()
            .all(|c| matches!(c, 'P' | 'Q' | 'R' | 'S' | '(' | ')' | ' '))
    }

    fn balanced(s: &str) -> bool {
        let mut open = 0i32;
        for c in s.chars() {
            match c {
                '(' => open += 1,
                ')' => open -= 1,
                _ => (),
            }
            if open < 0 {
                return false;
            }
        }
        open == 0
    }

    /// The connectives picked by `negation` and the low four bits of `binary_mask`
    fn subset(negation: bool, binary_mask: u8) -> ConnectiveSet {
        ConnectiveSet {
            unary: if negation { vec![UnaryOp::Not] } else { vec![] },
            binary: BinaryOp::ALL
                .iter()
                .enumerate()
                .filter(|&(i, _)| binary_mask & (1 << i) != 0)
                .map(|(_, op)| *op)
                .collect(),
        }
    }

    #[test]
    fn negation_only() {
        let connectives = subset(true, 0);
        let config = GeneratorConfig {
            depth: 3,
            connectives: connectives.clone(),
            stop_probability: 0.0,
        };
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..50 {
            let f = config.generate(&mut rng);
            assert_eq!(f.depth(), 3);
            let raw = Formatter::ascii().render(&f);
            assert!(raw.starts_with("(~(~(~") && raw.ends_with(")))"));
            assert!(only_allowed_tokens(&raw, &connectives));
        }
    }

    #[test]
    fn depth_zero_is_a_bare_atom() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..200 {
            let f = generate_formula(0, &ConnectiveSet::all(), &mut rng);
            assert_eq!(f.len(), 1);
            assert!("PQRS".contains(&f));
        }
    }

    #[test]
    fn empty_connectives_fall_back_to_atoms() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let f = generate(4, &ConnectiveSet::empty(), &mut rng);
            assert!(matches!(f, Formula::Atom(_)));
        }
    }

    #[test]
    fn respects_configured_connectives() {
        let connectives = ConnectiveSet {
            unary: vec![],
            binary: vec![BinaryOp::Implies],
        };
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..200 {
            let f = generate_formula(3, &connectives, &mut rng);
            assert!(!f.contains('~') && !f.contains('&') && !f.contains(" v "));
            assert!(!f.contains("<->"));
            assert!(only_allowed_tokens(&f, &connectives));
        }
    }

    #[test]
    fn stop_probability_one_always_stops() {
        let config = GeneratorConfig {
            depth: 4,
            stop_probability: 1.0,
            ..GeneratorConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        assert!(config.generate(&mut rng).is_atomic());
    }

    #[test]
    fn zero_stop_probability_reaches_full_depth() {
        let config = GeneratorConfig {
            stop_probability: 0.0,
            ..GeneratorConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(config.generate(&mut rng).depth(), 2);
    }

    #[test]
    fn same_seed_same_formula() {
        let a = generate_formula(3, &ConnectiveSet::all(), &mut StdRng::seed_from_u64(42));
        let b = generate_formula(3, &ConnectiveSet::all(), &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[cfg(feature = "use-serde")]
    #[test]
    fn config_from_json() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"depth": 3, "connectives": {"binary": ["v", "->"]}}"#)
                .unwrap();
        assert_eq!(config.depth, 3);
        assert!(config.connectives.unary.is_empty());
        assert_eq!(config.connectives.binary, vec![BinaryOp::Or, BinaryOp::Implies]);
        assert_eq!(config.stop_probability, 0.25);
    }

    quickcheck! {
        fn generated_formulas_are_well_formed(
            seed: u64,
            depth: u8,
            negation: bool,
            binary_mask: u8
        ) -> bool {
            let depth = Depth::from(depth % 5);
            let connectives = subset(negation, binary_mask);
            let mut rng = StdRng::seed_from_u64(seed);
            let f = generate(depth, &connectives, &mut rng);
            let raw = Formatter::ascii().render(&f);
            !raw.is_empty()
                && f.depth() <= depth
                && balanced(&raw)
                && only_allowed_tokens(&raw, &connectives)
                && Formatter::ascii().read(&raw).as_ref() == Ok(&f)
        }

        fn normalized_rendering_is_the_canonical_display(seed: u64) -> bool {
            let mut rng = StdRng::seed_from_u64(seed);
            let f = generate(3, &ConnectiveSet::all(), &mut rng);
            let raw = Formatter::ascii().render(&f);
            pretty_print(&normalize_symbols(&raw)) == f.to_string()
        }
    }
}
