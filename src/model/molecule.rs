use std::fmt;

use serde::Serialize;

use super::Atom;

/// Rendered strand count for a bond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BondMultiplicity {
    /// One strand. Also used for any order outside `{2, 3}`.
    Single,
    /// Two parallel strands.
    Double,
    /// Three parallel strands.
    Triple,
}

impl BondMultiplicity {
    /// Map a raw molfile bond order onto a strand count.
    #[must_use]
    pub fn from_order(order: i32) -> Self {
        match order {
            2 => Self::Double,
            3 => Self::Triple,
            _ => Self::Single,
        }
    }

    /// Number of strands drawn.
    #[must_use]
    pub fn strands(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Double => 2,
            Self::Triple => 3,
        }
    }
}

/// A bond between two atoms of the same molecule.
///
/// `atom_a == atom_b` is accepted: such a bond has zero length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bond {
    /// 0-based index of the first atom.
    pub atom_a: usize,
    /// 0-based index of the second atom.
    pub atom_b: usize,
    /// Raw bond order as read from the file (1, 2, 3 expected).
    pub order: i32,
}

impl Bond {
    /// Create a bond from 0-based atom indices.
    #[must_use]
    pub fn new(atom_a: usize, atom_b: usize, order: i32) -> Self {
        Self {
            atom_a,
            atom_b,
            order,
        }
    }

    /// Strand count used for rendering.
    #[must_use]
    pub fn multiplicity(&self) -> BondMultiplicity {
        BondMultiplicity::from_order(self.order)
    }

    /// Whether both endpoints are the same atom.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.atom_a == self.atom_b
    }
}

/// A bond refers to an atom index outside the molecule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BondIndexError {
    /// Position of the offending bond in the bond list.
    pub bond: usize,
    /// The out-of-range atom index.
    pub atom: usize,
    /// Number of atoms in the molecule.
    pub atom_count: usize,
}

impl fmt::Display for BondIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bond {} references atom {} but the molecule has {} atoms",
            self.bond + 1,
            self.atom + 1,
            self.atom_count
        )
    }
}

impl std::error::Error for BondIndexError {}

/// Parsed atom/bond structure, independent of its visual representation.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Molecule {
    name: String,
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
}

impl Molecule {
    /// Build a molecule, checking that every bond index lies in
    /// `0..atoms.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`BondIndexError`] for the first bond with an out-of-range
    /// endpoint.
    pub fn new(
        name: impl Into<String>,
        atoms: Vec<Atom>,
        bonds: Vec<Bond>,
    ) -> Result<Self, BondIndexError> {
        let atom_count = atoms.len();
        for (i, bond) in bonds.iter().enumerate() {
            for atom in [bond.atom_a, bond.atom_b] {
                if atom >= atom_count {
                    return Err(BondIndexError {
                        bond: i,
                        atom,
                        atom_count,
                    });
                }
            }
        }
        Ok(Self {
            name: name.into(),
            atoms,
            bonds,
        })
    }

    /// Title from the first header line (may be empty).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Atoms in file order.
    #[must_use]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Bonds in file order.
    #[must_use]
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Resolve both endpoint atoms of a bond.
    ///
    /// Always `Some` for bonds of this molecule.
    #[must_use]
    pub fn endpoints(&self, bond: &Bond) -> Option<(&Atom, &Atom)> {
        Some((self.atoms.get(bond.atom_a)?, self.atoms.get(bond.atom_b)?))
    }

    /// Whether the molecule has neither atoms nor bonds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty() && self.bonds.is_empty()
    }
}
