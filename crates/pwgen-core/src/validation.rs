use crate::charset::CharacterSets;
use crate::error::{Error, Result};
use crate::features::Feature;
use crate::policy::{GenerationMode, Policy};

/// Shortest password that can carry every feature `policy` requires.
///
/// Phonemic passwords place digits and symbols in front of a unit, so each
/// of them costs one character on top of the unit itself; uppercase is
/// applied to a unit in place. Random passwords need one character per
/// required class.
pub fn minimum_length(policy: &Policy, mode: GenerationMode) -> usize {
    match mode {
        GenerationMode::Phonemes => {
            1 + usize::from(policy.require_digit) + usize::from(policy.require_symbol)
        }
        GenerationMode::Random => policy.required_features().len().max(1),
    }
}

/// Validate that a policy can be satisfied before generating anything.
///
/// This checks:
/// - the length is positive and long enough for the mandatory features
/// - phonemic generation is not asked to avoid vowels
/// - exclusions leave at least one character for each mandatory class
/// - random generation keeps a non-empty pool
pub fn validate_policy(policy: &Policy, mode: GenerationMode) -> Result<()> {
    if policy.length == 0 {
        return Err(Error::InvalidPolicy(
            "password length must be positive".to_string(),
        ));
    }

    if mode == GenerationMode::Phonemes && policy.exclude_vowels {
        return Err(Error::InvalidPolicy(
            "pronounceable passwords need vowels; use random mode to exclude them".to_string(),
        ));
    }

    let minimum = minimum_length(policy, mode);
    if policy.length < minimum {
        return Err(Error::InvalidPolicy(format!(
            "length {} cannot hold the required features ({}); need at least {}",
            policy.length,
            policy.required_features(),
            minimum
        )));
    }

    let sets = CharacterSets::new(policy, mode);
    for feature in Feature::ALL {
        if policy.requires(feature) && sets.for_feature(feature).is_empty() {
            return Err(Error::EmptyAlphabet(feature.to_string()));
        }
    }

    if mode == GenerationMode::Random && sets.pool(policy).is_empty() {
        return Err(Error::EmptyAlphabet("password".to_string()));
    }

    Ok(())
}
