use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::features::{Feature, FeatureSet};

/// Password length used when nothing else is requested.
pub const DEFAULT_LENGTH: usize = 10;

/// Strategy used to compose a password.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    /// Pronounceable passwords built from phonetic units.
    #[default]
    Phonemes,
    /// Every character drawn independently from a flat alphabet.
    Random,
}

/// Requested shape of a generated password.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct Policy {
    /// Exact number of characters in the password.
    pub length: usize,
    /// At least one digit must appear.
    pub require_digit: bool,
    /// At least one uppercase letter must appear.
    pub require_upper: bool,
    /// At least one symbol must appear.
    pub require_symbol: bool,
    /// Avoid vowels (and the look-alike digits `0` and `1`).
    pub exclude_vowels: bool,
    /// Avoid characters that are easily confused when read back.
    pub exclude_ambiguous: bool,
    /// Extra characters that must never appear.
    pub remove_chars: String,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            require_digit: true,
            require_upper: true,
            require_symbol: false,
            exclude_vowels: false,
            exclude_ambiguous: false,
            remove_chars: String::new(),
        }
    }
}

impl Policy {
    /// Policy with the default feature requirements and the given length.
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    /// Features every password generated under this policy must contain.
    pub fn required_features(&self) -> FeatureSet {
        let mut required = FeatureSet::empty();
        if self.require_digit {
            required.insert(Feature::Digit);
        }
        if self.require_upper {
            required.insert(Feature::Upper);
        }
        if self.require_symbol {
            required.insert(Feature::Symbol);
        }
        required
    }

    /// Whether `feature` is mandatory under this policy.
    pub fn requires(&self, feature: Feature) -> bool {
        match feature {
            Feature::Digit => self.require_digit,
            Feature::Upper => self.require_upper,
            Feature::Symbol => self.require_symbol,
        }
    }
}
