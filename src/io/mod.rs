//! Molfile reading.
//!
//! [`columns`] slices fixed-width records; [`molfile`] walks the header,
//! counts line, atom block and bond block of a V2000 connection table.

pub mod columns;
pub mod molfile;
