/// Type alias for the nesting depth of a formula (see [`Formula::depth`][crate::Formula::depth])
pub type Depth = u32;

/// A propositional letter. The set is fixed; none of the letters collides with a connective
/// spelling such as `v`, so symbol normalization can never rewrite an atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Atom {
    P,
    Q,
    R,
    S,
}

/// Every atom, in alphabetical order
pub const ATOMS: [Atom; 4] = [Atom::P, Atom::Q, Atom::R, Atom::S];

impl Atom {
    pub fn letter(self) -> char {
        match self {
            Atom::P => 'P',
            Atom::Q => 'Q',
            Atom::R => 'R',
            Atom::S => 'S',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        ATOMS.iter().copied().find(|a| a.letter() == c)
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
