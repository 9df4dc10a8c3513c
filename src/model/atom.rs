use glam::Vec3;
use serde::Serialize;

/// Two-way element classification used for atom styling.
///
/// Only hydrogen is distinguished; every other symbol (including unknown or
/// empty ones) falls into [`ElementClass::Heavy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementClass {
    /// Symbol is exactly `"H"`.
    Hydrogen,
    /// Anything else.
    Heavy,
}

impl ElementClass {
    /// Classify a trimmed element symbol. Case-sensitive: `"h"` is heavy.
    #[must_use]
    pub fn of(symbol: &str) -> Self {
        if symbol == "H" {
            Self::Hydrogen
        } else {
            Self::Heavy
        }
    }
}

/// A single atom record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Atom {
    position: Vec3,
    element: String,
}

impl Atom {
    /// Create an atom. `element` is stored as given (callers trim it).
    pub fn new(position: Vec3, element: impl Into<String>) -> Self {
        Self {
            position,
            element: element.into(),
        }
    }

    /// Cartesian position. May contain NaN components when parsed leniently.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Element symbol, possibly empty.
    #[must_use]
    pub fn element(&self) -> &str {
        &self.element
    }

    /// Styling class of this atom's element.
    #[must_use]
    pub fn class(&self) -> ElementClass {
        ElementClass::of(&self.element)
    }

    /// Whether every position component is finite.
    #[must_use]
    pub fn has_finite_position(&self) -> bool {
        self.position.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hydrogen_is_exact_and_case_sensitive() {
        assert_eq!(ElementClass::of("H"), ElementClass::Hydrogen);
        assert_eq!(ElementClass::of("h"), ElementClass::Heavy);
        assert_eq!(ElementClass::of("He"), ElementClass::Heavy);
        assert_eq!(ElementClass::of(""), ElementClass::Heavy);
    }

    #[test]
    fn nan_position_is_not_finite() {
        let atom = Atom::new(Vec3::new(f32::NAN, 0.0, 0.0), "C");
        assert!(!atom.has_finite_position());
        assert_eq!(atom.class(), ElementClass::Heavy);
    }
}
