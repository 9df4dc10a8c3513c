//! Crate-level error types.

use std::fmt;

/// Errors produced by the molview crate.
#[derive(Debug)]
pub enum MolviewError {
    /// Fetching the molfile text failed (transport failure).
    Fetch(String),
    /// The molfile text does not describe a valid molecule.
    Malformed {
        /// 1-based line number the problem was detected on.
        line: usize,
        /// Human-readable description.
        details: String,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Failed to spawn a background thread.
    ThreadSpawn(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl MolviewError {
    /// Shorthand for a [`MolviewError::Malformed`] at `line`.
    pub fn malformed(line: usize, details: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            details: details.into(),
        }
    }
}

impl fmt::Display for MolviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(msg) => write!(f, "fetch error: {msg}"),
            Self::Malformed { line, details } => {
                write!(f, "malformed molfile: {details} (at line {line})")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ThreadSpawn(e) => {
                write!(f, "failed to spawn thread: {e}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for MolviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::ThreadSpawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MolviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn malformed_display_names_line() {
        let err = MolviewError::malformed(5, "invalid x coordinate");
        assert_eq!(
            err.to_string(),
            "malformed molfile: invalid x coordinate (at line 5)"
        );
    }

    #[test]
    fn io_error_exposes_source() {
        let err: MolviewError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.source().is_some());
        assert!(MolviewError::Fetch("timeout".into()).source().is_none());
    }
}
