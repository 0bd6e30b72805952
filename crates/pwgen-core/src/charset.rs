use std::collections::BTreeSet;

use crate::features::Feature;
use crate::policy::{GenerationMode, Policy};

pub const DIGITS: &str = "0123456789";
pub const UPPERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
/// Characters that are easy to misread for one another.
pub const AMBIGUOUS: &str = "B8G6I1l0OQDS5Z2";
/// Removed by `exclude_vowels`, together with the digits that pass for vowels.
pub const VOWELS: &str = "01aeiouyAEIOUY";

/// Set of characters a policy forbids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharFilter {
    excluded: BTreeSet<char>,
}

impl CharFilter {
    /// Build the exclusion set for `policy` under `mode`.
    ///
    /// Vowel exclusion only applies to flat random passwords; phonemic
    /// passwords cannot be built without vowels and reject such policies
    /// during validation.
    pub fn from_policy(policy: &Policy, mode: GenerationMode) -> Self {
        let mut excluded: BTreeSet<char> = policy.remove_chars.chars().collect();
        if policy.exclude_ambiguous {
            excluded.extend(AMBIGUOUS.chars());
        }
        if policy.exclude_vowels && mode == GenerationMode::Random {
            excluded.extend(VOWELS.chars());
        }
        Self { excluded }
    }

    pub fn allows(&self, ch: char) -> bool {
        !self.excluded.contains(&ch)
    }

    pub fn allows_str(&self, text: &str) -> bool {
        text.chars().all(|ch| self.allows(ch))
    }
}

/// An ordered, filtered list of characters to draw from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Keep the characters of `base` that `filter` allows, in order.
    pub fn filtered(base: &str, filter: &CharFilter) -> Self {
        Self {
            chars: base.chars().filter(|ch| filter.allows(*ch)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    fn extend(&mut self, other: &Alphabet) {
        self.chars.extend_from_slice(&other.chars);
    }
}

/// Filtered alphabets for every character class a generator may draw from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSets {
    pub filter: CharFilter,
    pub lowers: Alphabet,
    pub digits: Alphabet,
    pub uppers: Alphabet,
    pub symbols: Alphabet,
}

impl CharacterSets {
    pub fn new(policy: &Policy, mode: GenerationMode) -> Self {
        let filter = CharFilter::from_policy(policy, mode);
        Self {
            lowers: Alphabet::filtered(LOWERS, &filter),
            digits: Alphabet::filtered(DIGITS, &filter),
            uppers: Alphabet::filtered(UPPERS, &filter),
            symbols: Alphabet::filtered(SYMBOLS, &filter),
            filter,
        }
    }

    /// Alphabet backing a mandatory feature.
    pub fn for_feature(&self, feature: Feature) -> &Alphabet {
        match feature {
            Feature::Digit => &self.digits,
            Feature::Upper => &self.uppers,
            Feature::Symbol => &self.symbols,
        }
    }

    /// Flat pool for random passwords: lowercase letters plus every class
    /// the policy asks for.
    pub fn pool(&self, policy: &Policy) -> Alphabet {
        let mut pool = self.lowers.clone();
        if policy.require_digit {
            pool.extend(&self.digits);
        }
        if policy.require_upper {
            pool.extend(&self.uppers);
        }
        if policy.require_symbol {
            pool.extend(&self.symbols);
        }
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguous_exclusion_filters_digits() {
        let policy = Policy {
            exclude_ambiguous: true,
            ..Policy::default()
        };
        let sets = CharacterSets::new(&policy, GenerationMode::Phonemes);
        assert_eq!(sets.digits, Alphabet::filtered("3479", &CharFilter::default()));
        assert!(!sets.uppers.contains('O'));
        assert!(!sets.lowers.contains('l'));
    }

    #[test]
    fn vowel_exclusion_only_in_random_mode() {
        let policy = Policy {
            exclude_vowels: true,
            ..Policy::default()
        };
        let phonemes = CharFilter::from_policy(&policy, GenerationMode::Phonemes);
        let random = CharFilter::from_policy(&policy, GenerationMode::Random);
        assert!(phonemes.allows('a'));
        assert!(!random.allows('a'));
        assert!(!random.allows('1'));
        assert!(random.allows('b'));
    }

    #[test]
    fn pool_follows_required_classes() {
        let policy = Policy {
            require_digit: false,
            require_upper: true,
            require_symbol: true,
            remove_chars: "xyz".to_string(),
            ..Policy::default()
        };
        let sets = CharacterSets::new(&policy, GenerationMode::Random);
        let pool = sets.pool(&policy);
        assert_eq!(pool.len(), 23 + 26 + SYMBOLS.len());
        assert!(!pool.contains('5'));
        assert!(!pool.contains('x'));
        assert!(pool.contains('X'));
    }
}
