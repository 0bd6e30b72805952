use serde::Serialize;

/// Sound class of a phonetic unit. A unit is exactly one of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitClass {
    Vowel,
    Consonant,
}

/// One phonetic element: a single letter, vowel pair, or consonant digraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhonemeUnit {
    pub text: &'static str,
    pub class: UnitClass,
    pub may_start_word: bool,
}

impl PhonemeUnit {
    const fn vowel(text: &'static str) -> Self {
        Self {
            text,
            class: UnitClass::Vowel,
            may_start_word: true,
        }
    }

    const fn consonant(text: &'static str) -> Self {
        Self {
            text,
            class: UnitClass::Consonant,
            may_start_word: true,
        }
    }

    /// Consonant cluster that never opens a word (`gh`, `ng`).
    const fn trailing_consonant(text: &'static str) -> Self {
        Self {
            text,
            class: UnitClass::Consonant,
            may_start_word: false,
        }
    }

    pub fn is_vowel(&self) -> bool {
        self.class == UnitClass::Vowel
    }

    pub fn is_consonant(&self) -> bool {
        self.class == UnitClass::Consonant
    }

    /// Two-letter units, whatever their class.
    pub fn is_diphthong(&self) -> bool {
        self.text.len() == 2
    }

    pub fn width(&self) -> usize {
        self.text.len()
    }
}

/// The unit catalog, indexed by uniform draws over its length.
pub static ELEMENTS: &[PhonemeUnit] = &[
    PhonemeUnit::vowel("a"),
    PhonemeUnit::vowel("ae"),
    PhonemeUnit::vowel("ah"),
    PhonemeUnit::vowel("ai"),
    PhonemeUnit::consonant("b"),
    PhonemeUnit::consonant("c"),
    PhonemeUnit::consonant("ch"),
    PhonemeUnit::consonant("d"),
    PhonemeUnit::vowel("e"),
    PhonemeUnit::vowel("ee"),
    PhonemeUnit::vowel("ei"),
    PhonemeUnit::consonant("f"),
    PhonemeUnit::consonant("g"),
    PhonemeUnit::trailing_consonant("gh"),
    PhonemeUnit::consonant("h"),
    PhonemeUnit::vowel("i"),
    PhonemeUnit::vowel("ie"),
    PhonemeUnit::consonant("j"),
    PhonemeUnit::consonant("k"),
    PhonemeUnit::consonant("l"),
    PhonemeUnit::consonant("m"),
    PhonemeUnit::consonant("n"),
    PhonemeUnit::trailing_consonant("ng"),
    PhonemeUnit::vowel("o"),
    PhonemeUnit::vowel("oh"),
    PhonemeUnit::vowel("oo"),
    PhonemeUnit::consonant("p"),
    PhonemeUnit::consonant("ph"),
    PhonemeUnit::consonant("qu"),
    PhonemeUnit::consonant("r"),
    PhonemeUnit::consonant("s"),
    PhonemeUnit::consonant("sh"),
    PhonemeUnit::consonant("t"),
    PhonemeUnit::consonant("th"),
    PhonemeUnit::vowel("u"),
    PhonemeUnit::consonant("v"),
    PhonemeUnit::consonant("w"),
    PhonemeUnit::consonant("x"),
    PhonemeUnit::consonant("y"),
    PhonemeUnit::consonant("z"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_units_are_short_lowercase_words() {
        assert_eq!(ELEMENTS.len(), 40);
        for unit in ELEMENTS {
            assert!(
                (1..=2).contains(&unit.width()),
                "unit '{}' should have one or two letters",
                unit.text
            );
            assert!(unit.text.chars().all(|ch| ch.is_ascii_lowercase()));
            assert_eq!(unit.is_diphthong(), unit.width() == 2);
            assert_ne!(unit.is_vowel(), unit.is_consonant());
        }
    }

    #[test]
    fn only_gh_and_ng_cannot_start_a_word() {
        let trailing: Vec<&str> = ELEMENTS
            .iter()
            .filter(|unit| !unit.may_start_word)
            .map(|unit| unit.text)
            .collect();
        assert_eq!(trailing, vec!["gh", "ng"]);
    }

    #[test]
    fn catalog_class_counts() {
        let vowels = ELEMENTS.iter().filter(|unit| unit.is_vowel()).count();
        let consonants = ELEMENTS.len() - vowels;
        assert_eq!(vowels, 13);
        assert_eq!(consonants, 27);
    }

    #[test]
    fn single_letter_units_cover_every_start_class() {
        for class in [UnitClass::Vowel, UnitClass::Consonant] {
            assert!(ELEMENTS.iter().any(|unit| {
                unit.class == class && unit.may_start_word && !unit.is_diphthong()
            }));
        }
    }
}
