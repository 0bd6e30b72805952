use std::fmt;

use crate::charset::SYMBOLS;

/// A character class a policy can make mandatory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    Digit,
    Upper,
    Symbol,
}

impl Feature {
    pub const ALL: [Feature; 3] = [Feature::Digit, Feature::Upper, Feature::Symbol];

    /// Classify a single password character.
    pub fn of_char(ch: char) -> Option<Feature> {
        if ch.is_ascii_digit() {
            Some(Feature::Digit)
        } else if ch.is_ascii_uppercase() {
            Some(Feature::Upper)
        } else if SYMBOLS.contains(ch) {
            Some(Feature::Symbol)
        } else {
            None
        }
    }

    fn bit(self) -> u8 {
        match self {
            Feature::Digit => 0b001,
            Feature::Upper => 0b010,
            Feature::Symbol => 0b100,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Feature::Digit => "digit",
            Feature::Upper => "uppercase",
            Feature::Symbol => "symbol",
        };
        f.write_str(name)
    }
}

/// Small copyable set of [`Feature`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureSet {
    bits: u8,
}

impl FeatureSet {
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    pub fn insert(&mut self, feature: Feature) {
        self.bits |= feature.bit();
    }

    pub fn contains(self, feature: Feature) -> bool {
        self.bits & feature.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// True when every feature of `other` is also in `self`.
    pub fn is_superset(self, other: FeatureSet) -> bool {
        self.bits & other.bits == other.bits
    }

    /// Features of `required` not present in `self`.
    pub fn missing_from(self, required: FeatureSet) -> FeatureSet {
        FeatureSet {
            bits: required.bits & !self.bits,
        }
    }

    pub fn iter(self) -> impl Iterator<Item = Feature> {
        Feature::ALL
            .into_iter()
            .filter(move |feature| self.contains(*feature))
    }

    /// Record every feature found in `text`.
    pub fn scan(text: &str) -> FeatureSet {
        let mut set = FeatureSet::empty();
        for feature in text.chars().filter_map(Feature::of_char) {
            set.insert(feature);
        }
        set
    }
}

impl FromIterator<Feature> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        let mut set = FeatureSet::empty();
        for feature in iter {
            set.insert(feature);
        }
        set
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.iter().map(|feature| feature.to_string()).collect();
        if names.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&names.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_characters() {
        assert_eq!(Feature::of_char('7'), Some(Feature::Digit));
        assert_eq!(Feature::of_char('Q'), Some(Feature::Upper));
        assert_eq!(Feature::of_char('~'), Some(Feature::Symbol));
        assert_eq!(Feature::of_char('q'), None);
    }

    #[test]
    fn missing_features() {
        let required: FeatureSet = [Feature::Digit, Feature::Symbol].into_iter().collect();
        let mut satisfied = FeatureSet::empty();
        satisfied.insert(Feature::Digit);
        satisfied.insert(Feature::Upper);

        let missing = satisfied.missing_from(required);
        assert_eq!(missing.iter().collect::<Vec<_>>(), vec![Feature::Symbol]);
        assert!(!satisfied.is_superset(required));

        satisfied.insert(Feature::Symbol);
        assert!(satisfied.is_superset(required));
        assert!(satisfied.missing_from(required).is_empty());
    }

    #[test]
    fn scan_and_display() {
        let set = FeatureSet::scan("ab3D");
        assert!(set.contains(Feature::Digit) && set.contains(Feature::Upper));
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_string(), "digit, uppercase");
        assert_eq!(FeatureSet::empty().to_string(), "none");
    }
}
