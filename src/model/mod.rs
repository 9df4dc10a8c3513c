//! In-memory molecule: atoms in file order and the bonds that index them.
//!
//! A [`Molecule`] is built once by [`crate::io::molfile::parse`] and is
//! read-only afterwards. Bond endpoints are 0-based positions in the atom
//! list, so atom order is significant.

mod atom;
mod molecule;

pub use atom::{Atom, ElementClass};
pub use molecule::{Bond, BondIndexError, BondMultiplicity, Molecule};
