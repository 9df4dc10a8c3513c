use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What the molfile reader does with fields it cannot interpret.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Validation {
    /// Reject the file with a `Malformed` error naming the line.
    #[default]
    Strict,
    /// Keep going: bad coordinates become NaN, bad counts read as zero,
    /// bad bond orders render as single bonds. Bond indices are still
    /// checked.
    Lenient,
}

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[schemars(title = "Parsing", inline)]
#[serde(default)]
/// Molfile reader behavior.
pub struct ParseOptions {
    /// Handling of non-numeric or missing fields.
    #[schemars(title = "Validation")]
    pub validation: Validation,
}

impl ParseOptions {
    /// Options with lenient validation.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            validation: Validation::Lenient,
        }
    }

    /// Whether malformed fields are errors.
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.validation == Validation::Strict
    }
}
