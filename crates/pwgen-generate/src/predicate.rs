//! Which unit may come next.
//!
//! The constraint for a position depends only on the previous unit (or the
//! lack of one) and on a single biased draw taken once per position. The
//! same draw then filters every candidate the sampler rejects for that
//! position.

use crate::elements::{PhonemeUnit, UnitClass};
use crate::errors::GenerationError;
use crate::source::RandomSource;

/// A probability expressed as `numerator` chances out of `denominator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chance {
    pub numerator: usize,
    pub denominator: usize,
}

impl Chance {
    pub const fn new(numerator: usize, denominator: usize) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Draw once and report whether the event happened.
    pub fn hits(self, source: &mut dyn RandomSource) -> Result<bool, GenerationError> {
        Ok(source.next_below(self.denominator)? < self.numerator)
    }
}

/// At a word start, the next unit is a vowel with this probability.
pub const START_WITH_VOWEL: Chance = Chance::new(5, 10);
/// After a vowel, the next unit is another vowel with this probability.
pub const VOWEL_AFTER_VOWEL: Chance = Chance::new(4, 10);

/// Where the next unit lands relative to the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Start of the password. Digits are injected in front of a unit, so
    /// a unit that follows one is handled as a word start by the injector.
    WordStart,
    AfterConsonant,
    AfterVowel,
}

impl Position {
    pub fn of(previous: Option<&PhonemeUnit>) -> Self {
        match previous {
            None => Position::WordStart,
            Some(unit) if unit.is_consonant() => Position::AfterConsonant,
            Some(_) => Position::AfterVowel,
        }
    }

    pub fn is_word_start(self) -> bool {
        self == Position::WordStart
    }
}

/// Requirements a candidate unit must meet for one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint {
    pub class: UnitClass,
    pub must_start_word: bool,
    pub forbid_vowel_diphthong: bool,
    /// Widest unit that still fits in the remaining length.
    pub max_width: usize,
}

impl Constraint {
    pub fn accepts(&self, unit: &PhonemeUnit) -> bool {
        if unit.class != self.class {
            return false;
        }
        if self.must_start_word && !unit.may_start_word {
            return false;
        }
        if self.forbid_vowel_diphthong && unit.is_vowel() && unit.is_diphthong() {
            return false;
        }
        unit.width() <= self.max_width
    }

    fn for_position(position: Position, class: UnitClass, max_width: usize) -> Self {
        Self {
            class,
            must_start_word: position == Position::WordStart,
            forbid_vowel_diphthong: position == Position::AfterVowel,
            max_width,
        }
    }

    /// Every constraint `select_constraint` can produce for `max_width`.
    pub fn reachable(max_width: usize) -> Vec<Constraint> {
        vec![
            Self::for_position(Position::WordStart, UnitClass::Vowel, max_width),
            Self::for_position(Position::WordStart, UnitClass::Consonant, max_width),
            Self::for_position(Position::AfterConsonant, UnitClass::Vowel, max_width),
            Self::for_position(Position::AfterVowel, UnitClass::Vowel, max_width),
            Self::for_position(Position::AfterVowel, UnitClass::Consonant, max_width),
        ]
    }
}

/// Compute the constraint for the unit at `position`.
///
/// Word starts and vowels consume one bias draw; a consonant is always
/// followed by a vowel and consumes none.
pub fn select_constraint(
    position: Position,
    max_width: usize,
    source: &mut dyn RandomSource,
) -> Result<Constraint, GenerationError> {
    let class = match position {
        Position::WordStart => {
            if START_WITH_VOWEL.hits(source)? {
                UnitClass::Vowel
            } else {
                UnitClass::Consonant
            }
        }
        Position::AfterConsonant => UnitClass::Vowel,
        Position::AfterVowel => {
            if VOWEL_AFTER_VOWEL.hits(source)? {
                UnitClass::Vowel
            } else {
                UnitClass::Consonant
            }
        }
    };
    Ok(Constraint::for_position(position, class, max_width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::ELEMENTS;
    use crate::source::ScriptedSource;

    fn unit(text: &str) -> &'static PhonemeUnit {
        ELEMENTS
            .iter()
            .find(|unit| unit.text == text)
            .expect("unit in catalog")
    }

    #[test]
    fn position_follows_previous_unit() {
        assert_eq!(Position::of(None), Position::WordStart);
        assert_eq!(Position::of(Some(unit("t"))), Position::AfterConsonant);
        assert_eq!(Position::of(Some(unit("oo"))), Position::AfterVowel);
    }

    #[test]
    fn word_start_bias_picks_class() {
        let mut source = ScriptedSource::new([4, 5]);
        let vowel = select_constraint(Position::WordStart, 2, &mut source).unwrap();
        let consonant = select_constraint(Position::WordStart, 2, &mut source).unwrap();
        assert_eq!(vowel.class, UnitClass::Vowel);
        assert_eq!(consonant.class, UnitClass::Consonant);
        assert!(vowel.must_start_word && consonant.must_start_word);
        assert!(!consonant.accepts(unit("ng")));
        assert!(consonant.accepts(unit("th")));
    }

    #[test]
    fn consonant_is_always_followed_by_vowel_without_drawing() {
        let mut source = ScriptedSource::new([]);
        let constraint = select_constraint(Position::AfterConsonant, 2, &mut source).unwrap();
        assert_eq!(constraint.class, UnitClass::Vowel);
        assert!(constraint.accepts(unit("ee")));
        assert!(!constraint.accepts(unit("ng")));
        assert_eq!(source.consumed(), 0);
    }

    #[test]
    fn vowel_is_never_followed_by_vowel_diphthong() {
        let mut source = ScriptedSource::new([3, 4]);
        let vowel = select_constraint(Position::AfterVowel, 2, &mut source).unwrap();
        assert_eq!(vowel.class, UnitClass::Vowel);
        assert!(vowel.accepts(unit("e")));
        assert!(!vowel.accepts(unit("ae")));

        let consonant = select_constraint(Position::AfterVowel, 2, &mut source).unwrap();
        assert_eq!(consonant.class, UnitClass::Consonant);
        assert!(consonant.accepts(unit("ng")));
    }

    #[test]
    fn width_limit_excludes_two_letter_units() {
        let constraint = Constraint::for_position(Position::AfterConsonant, UnitClass::Vowel, 1);
        assert!(constraint.accepts(unit("a")));
        assert!(!constraint.accepts(unit("ai")));
    }

    #[test]
    fn every_reachable_constraint_has_a_candidate() {
        for constraint in Constraint::reachable(1) {
            assert!(
                ELEMENTS.iter().any(|unit| constraint.accepts(unit)),
                "no unit for {constraint:?}"
            );
        }
    }
}
