//! MDL molfile (V2000 connection table) reader.
//!
//! Layout, by 0-based line index:
//!
//! - 0..3: header block (line 0 is the molecule name)
//! - 3: counts line, atom count in columns 0..3, bond count in 3..6
//! - next `atoms` lines: x 0..10, y 10..20, z 20..30, element 31..34
//! - next `bonds` lines: atom a 0..3, atom b 3..6 (1-based), order 6..9
//!
//! Anything after the bond block (`M  END`, property lines) is ignored.
//! How unreadable fields are handled is chosen by [`ParseOptions`].

use glam::Vec3;

use super::columns::{records, ColumnRange, Record};
use crate::error::MolviewError;
use crate::model::{Atom, Bond, Molecule};
use crate::options::ParseOptions;

/// 0-based index of the counts line.
pub const COUNTS_LINE: usize = 3;

const ATOM_COUNT: ColumnRange = 0..3;
const BOND_COUNT: ColumnRange = 3..6;

const ATOM_X: ColumnRange = 0..10;
const ATOM_Y: ColumnRange = 10..20;
const ATOM_Z: ColumnRange = 20..30;
const ATOM_ELEMENT: ColumnRange = 31..34;

const BOND_ATOM_A: ColumnRange = 0..3;
const BOND_ATOM_B: ColumnRange = 3..6;
const BOND_ORDER: ColumnRange = 6..9;

const V3000_TAG: &str = "V3000";

/// Atom and bond counts declared on the counts line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    /// Number of atom records that follow.
    pub atoms: usize,
    /// Number of bond records after the atoms.
    pub bonds: usize,
}

/// Parse molfile text with the default (strict) options.
///
/// # Errors
///
/// Returns [`MolviewError::Malformed`] if a field cannot be read or a bond
/// references a missing atom.
pub fn parse(text: &str) -> Result<Molecule, MolviewError> {
    parse_with(text, &ParseOptions::default())
}

/// Parse molfile text.
///
/// In strict mode every counts, coordinate, index and order field must be
/// numeric and the file must contain every declared record. In lenient mode
/// those problems are logged and replaced (NaN coordinates, zero counts,
/// order 0). Bond indices are validated in both modes.
///
/// # Errors
///
/// Returns [`MolviewError::Malformed`] naming the offending line.
pub fn parse_with(
    text: &str,
    options: &ParseOptions,
) -> Result<Molecule, MolviewError> {
    let lines: Vec<Record<'_>> = records(text).collect();
    let line = |index: usize| {
        lines
            .get(index)
            .copied()
            .unwrap_or_else(|| Record::missing(index + 1))
    };

    let name = line(0).text().trim().to_owned();
    let counts = read_counts(line(COUNTS_LINE), options)?;

    let atom_start = COUNTS_LINE + 1;
    let atoms = (0..counts.atoms)
        .map(|i| read_atom(line(atom_start + i), options))
        .collect::<Result<Vec<_>, _>>()?;

    let bond_start = atom_start + counts.atoms;
    let bonds = (0..counts.bonds)
        .map(|i| read_bond(line(bond_start + i), options))
        .collect::<Result<Vec<_>, _>>()?;

    let molecule = Molecule::new(name, atoms, bonds).map_err(|e| {
        MolviewError::malformed(bond_start + e.bond + 1, e.to_string())
    })?;

    log::debug!(
        "parsed molfile '{}': {} atoms, {} bonds",
        molecule.name(),
        molecule.atoms().len(),
        molecule.bonds().len()
    );
    Ok(molecule)
}

/// Read the counts line.
///
/// # Errors
///
/// Strict mode only: missing line, non-numeric counts, or a V3000 tag.
pub fn read_counts(
    record: Record<'_>,
    options: &ParseOptions,
) -> Result<Counts, MolviewError> {
    if options.is_strict() {
        if !record.is_present() {
            return Err(MolviewError::malformed(
                record.number(),
                "file ends before the counts line",
            ));
        }
        if record.text().contains(V3000_TAG) {
            return Err(MolviewError::malformed(
                record.number(),
                "V3000 connection tables are not supported",
            ));
        }
    }

    Ok(Counts {
        atoms: read_count(record, ATOM_COUNT, "atom count", options)?,
        bonds: read_count(record, BOND_COUNT, "bond count", options)?,
    })
}

fn read_count(
    record: Record<'_>,
    cols: ColumnRange,
    what: &str,
    options: &ParseOptions,
) -> Result<usize, MolviewError> {
    match record.int(cols) {
        Some(n) if n >= 0 => Ok(n as usize),
        _ if options.is_strict() => Err(MolviewError::malformed(
            record.number(),
            format!("invalid {what}"),
        )),
        _ => {
            log::warn!(
                "line {}: unreadable {what}, reading as 0",
                record.number()
            );
            Ok(0)
        }
    }
}

fn read_atom(
    record: Record<'_>,
    options: &ParseOptions,
) -> Result<Atom, MolviewError> {
    require_present(record, "atom block", options)?;
    let x = read_coordinate(record, ATOM_X, "x", options)?;
    let y = read_coordinate(record, ATOM_Y, "y", options)?;
    let z = read_coordinate(record, ATOM_Z, "z", options)?;
    Ok(Atom::new(Vec3::new(x, y, z), record.field(ATOM_ELEMENT)))
}

fn read_coordinate(
    record: Record<'_>,
    cols: ColumnRange,
    axis: &str,
    options: &ParseOptions,
) -> Result<f32, MolviewError> {
    match record.float(cols) {
        Some(v) if v.is_finite() || !options.is_strict() => Ok(v),
        _ if options.is_strict() => Err(MolviewError::malformed(
            record.number(),
            format!("invalid {axis} coordinate in atom line"),
        )),
        _ => {
            log::warn!(
                "line {}: unreadable {axis} coordinate, using NaN",
                record.number()
            );
            Ok(f32::NAN)
        }
    }
}

fn read_bond(
    record: Record<'_>,
    options: &ParseOptions,
) -> Result<Bond, MolviewError> {
    require_present(record, "bond block", options)?;
    let atom_a = read_atom_index(record, BOND_ATOM_A, "first")?;
    let atom_b = read_atom_index(record, BOND_ATOM_B, "second")?;

    let order = match record.int(BOND_ORDER) {
        Some(order) => i32::try_from(order).unwrap_or(0),
        None if options.is_strict() => {
            return Err(MolviewError::malformed(
                record.number(),
                "invalid bond order value",
            ));
        }
        None => {
            log::warn!(
                "line {}: unreadable bond order, drawing as single",
                record.number()
            );
            0
        }
    };

    let bond = Bond::new(atom_a, atom_b, order);
    if bond.is_degenerate() {
        log::debug!(
            "line {}: bond connects atom {} to itself",
            record.number(),
            atom_a + 1
        );
    }
    Ok(bond)
}

/// 1-based index field converted to 0-based. Unreadable or non-positive
/// indices cannot name an atom in either mode.
fn read_atom_index(
    record: Record<'_>,
    cols: ColumnRange,
    which: &str,
) -> Result<usize, MolviewError> {
    record
        .int(cols)
        .filter(|&n| n >= 1)
        .map(|n| (n - 1) as usize)
        .ok_or_else(|| {
            MolviewError::malformed(
                record.number(),
                format!("invalid {which} atom index"),
            )
        })
}

fn require_present(
    record: Record<'_>,
    block: &str,
    options: &ParseOptions,
) -> Result<(), MolviewError> {
    if record.is_present() || !options.is_strict() {
        return Ok(());
    }
    Err(MolviewError::malformed(
        record.number(),
        format!("file ends inside the {block}"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BondMultiplicity;

    const ASPIRIN: &str = include_str!("../../assets/molecules/aspirin.mol");

    const SMALL: &str = "\
propanal-ish
  test

  3  2  0  0  0  0  0  0  0  0999 V2000
    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0
    1.5000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0
    2.1000    1.0000    0.0000 O   0  0  0  0  0  0  0  0  0  0  0  0
  1  2  1  0
  2  3  2  0
M  END
";

    #[test]
    fn parses_small_molecule() {
        let mol = parse(SMALL).unwrap();
        assert_eq!(mol.name(), "propanal-ish");
        assert_eq!(mol.atoms().len(), 3);
        assert_eq!(mol.bonds().len(), 2);
        assert_eq!(mol.atoms()[1].position(), Vec3::new(1.5, 0.0, 0.0));
        assert_eq!(mol.atoms()[2].element(), "O");
        assert_eq!(mol.bonds()[0], Bond::new(0, 1, 1));
        assert_eq!(mol.bonds()[1].multiplicity(), BondMultiplicity::Double);
    }

    #[test]
    fn counts_match_record_lengths() {
        let mol = parse(ASPIRIN).unwrap();
        assert_eq!(mol.name(), "aspirin");
        assert_eq!(mol.atoms().len(), 21);
        assert_eq!(mol.bonds().len(), 21);
        let hydrogens =
            mol.atoms().iter().filter(|a| a.element() == "H").count();
        assert_eq!(hydrogens, 8);
        assert_eq!(mol.bonds()[20], Bond::new(12, 20, 1));
    }

    #[test]
    fn crlf_input_parses_identically() {
        let crlf = SMALL.replace('\n', "\r\n");
        assert_eq!(parse(&crlf).unwrap(), parse(SMALL).unwrap());
    }

    #[test]
    fn trailing_spaces_do_not_matter() {
        let padded: String =
            SMALL.lines().map(|l| format!("{l}    \n")).collect();
        let trimmed: String =
            SMALL.lines().map(|l| format!("{}\n", l.trim_end())).collect();
        assert_eq!(parse(&padded).unwrap(), parse(SMALL).unwrap());
        assert_eq!(parse(&trimmed).unwrap(), parse(SMALL).unwrap());
    }

    #[test]
    fn counts_line_is_positional_not_detected() {
        // A blank comment line shifted away would put the counts elsewhere;
        // here line 3 is an atom line and its first columns are read as
        // counts.
        let text = "name\n\n  1  0  0  0  0  0  0  0  0  0999 V2000\n\
                    \x20   0.0000    0.0000    0.0000 C   0\n";
        let err = parse(text).unwrap_err();
        assert!(matches!(err, MolviewError::Malformed { line: 4, .. }));
    }

    #[test]
    fn missing_element_is_empty() {
        let text = "\n\n\n  1  0\n    1.0000    2.0000    3.0000\n";
        let mol = parse(text).unwrap();
        assert_eq!(mol.atoms()[0].element(), "");
    }

    #[test]
    fn strict_rejects_bad_coordinate() {
        let text = SMALL.replace("    1.5000", "    1.5x00");
        let err = parse(&text).unwrap_err();
        match err {
            MolviewError::Malformed { line, details } => {
                assert_eq!(line, 6);
                assert!(details.contains("x coordinate"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn strict_rejects_non_finite_coordinate_text() {
        for (x, y, axis) in [("nan", "0.0000", "x"), ("0.0000", "inf", "y")] {
            let text = format!("x\n\n\n  1  0\n{x:>10}{y:>10}    0.0000 C\n");
            match parse(&text).unwrap_err() {
                MolviewError::Malformed { line, details } => {
                    assert_eq!(line, 5);
                    assert!(details.contains(&format!("{axis} coordinate")));
                }
                other => panic!("unexpected error: {other}"),
            }
        }

        let text = "x\n\n\n  1  0\n       nan  infinity    0.0000 C\n";
        let mol = parse_with(text, &ParseOptions::lenient()).unwrap();
        assert!(mol.atoms()[0].position().x.is_nan());
        assert!(mol.atoms()[0].position().y.is_infinite());
    }

    #[test]
    fn lenient_propagates_nan() {
        let text = SMALL.replace("    1.5000", "    1.5x00");
        let mol = parse_with(&text, &ParseOptions::lenient()).unwrap();
        assert!(mol.atoms()[1].position().x.is_nan());
        assert_eq!(mol.atoms()[1].position().y, 0.0);
    }

    #[test]
    fn strict_rejects_truncated_file() {
        let truncated: String =
            SMALL.lines().take(7).map(|l| format!("{l}\n")).collect();
        let err = parse(&truncated).unwrap_err();
        assert!(matches!(err, MolviewError::Malformed { line: 8, .. }));
    }

    #[test]
    fn lenient_truncated_atoms_read_as_nan() {
        let text = "x\n\n\n  2  0\n    1.0000    1.0000    1.0000 C\n";
        let mol = parse_with(text, &ParseOptions::lenient()).unwrap();
        assert_eq!(mol.atoms().len(), 2);
        assert!(!mol.atoms()[1].has_finite_position());
        assert_eq!(mol.atoms()[1].element(), "");
    }

    #[test]
    fn bond_index_out_of_range_is_rejected_in_both_modes() {
        let text = SMALL.replace("  2  3  2  0", "  2  4  2  0");
        for options in [ParseOptions::default(), ParseOptions::lenient()] {
            let err = parse_with(&text, &options).unwrap_err();
            assert!(matches!(err, MolviewError::Malformed { line: 9, .. }));
        }
    }

    #[test]
    fn zero_bond_index_is_rejected() {
        let text = SMALL.replace("  1  2  1  0", "  0  2  1  0");
        let err = parse_with(&text, &ParseOptions::lenient()).unwrap_err();
        assert!(matches!(err, MolviewError::Malformed { line: 8, .. }));
    }

    #[test]
    fn lenient_bad_order_is_single() {
        let text = SMALL.replace("  2  3  2  0", "  2  3  ?  0");
        assert!(parse(&text).is_err());
        let mol = parse_with(&text, &ParseOptions::lenient()).unwrap();
        assert_eq!(mol.bonds()[1].order, 0);
        assert_eq!(mol.bonds()[1].multiplicity(), BondMultiplicity::Single);
    }

    #[test]
    fn lenient_bad_counts_read_as_zero() {
        let text = SMALL.replace("  3  2  0  0", " ab  2  0  0");
        assert!(parse(&text).is_err());
        // Zero atoms: the atom lines are then read as bond lines.
        let err = parse_with(&text, &ParseOptions::lenient()).unwrap_err();
        assert!(matches!(err, MolviewError::Malformed { .. }));

        let empty = parse_with("\n\n\n ab cd\n", &ParseOptions::lenient())
            .unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn degenerate_bond_is_accepted() {
        let text = SMALL.replace("  1  2  1  0", "  2  2  1  0");
        let mol = parse(&text).unwrap();
        assert!(mol.bonds()[0].is_degenerate());
    }

    #[test]
    fn strict_rejects_v3000_and_missing_counts() {
        let v3000 = "x\n\n\n  0  0  0     0  0            999 V3000\n";
        assert!(parse(v3000).is_err());
        let err = parse("only\ntwo\n").unwrap_err();
        assert!(matches!(err, MolviewError::Malformed { line: 4, .. }));
    }
}
