use pwgen_core::{Alphabet, CharacterSets, Feature, FeatureSet};

use crate::elements::PhonemeUnit;
use crate::errors::GenerationError;
use crate::predicate::{Chance, Position};
use crate::source::RandomSource;

/// Chance of placing a digit in front of an eligible unit.
pub const DIGIT: Chance = Chance::new(3, 10);
/// Chance of placing a symbol in front of an eligible unit.
pub const SYMBOL: Chance = Chance::new(2, 10);
/// Chance of uppercasing an eligible unit.
pub const UPPERCASE: Chance = Chance::new(2, 10);

/// What the injector decided for one accepted unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Injection {
    pub digit: Option<char>,
    pub symbol: Option<char>,
    pub uppercase: bool,
}

impl Injection {
    pub fn features(&self) -> FeatureSet {
        let mut features = FeatureSet::empty();
        if self.digit.is_some() {
            features.insert(Feature::Digit);
        }
        if self.symbol.is_some() {
            features.insert(Feature::Symbol);
        }
        if self.uppercase {
            features.insert(Feature::Upper);
        }
        features
    }

    /// Text to append: digit, then symbol, then the unit itself.
    pub fn render(&self, unit: &PhonemeUnit) -> String {
        let mut text = String::with_capacity(unit.width() + 2);
        text.extend(self.digit);
        text.extend(self.symbol);
        if self.uppercase {
            text.push_str(&unit.text.to_ascii_uppercase());
        } else {
            text.push_str(unit.text);
        }
        text
    }
}

/// Decides digit, symbol and uppercase injection around accepted units.
#[derive(Debug, Clone, Copy)]
pub struct Injector<'a> {
    sets: &'a CharacterSets,
    required: FeatureSet,
}

impl<'a> Injector<'a> {
    pub fn new(sets: &'a CharacterSets, required: FeatureSet) -> Self {
        Self { sets, required }
    }

    /// Uppercasing is only offered when the result stays inside the filter.
    pub fn can_uppercase(&self, unit: &PhonemeUnit) -> bool {
        self.sets
            .filter
            .allows_str(&unit.text.to_ascii_uppercase())
    }

    pub fn inject(
        &self,
        unit: &PhonemeUnit,
        position: Position,
        source: &mut dyn RandomSource,
    ) -> Result<Injection, GenerationError> {
        let mut injection = Injection::default();

        if self.required.contains(Feature::Digit) && unit.may_start_word {
            injection.digit = self.pick(DIGIT, &self.sets.digits, source)?;
        }

        if self.required.contains(Feature::Symbol) && unit.may_start_word {
            injection.symbol = self.pick(SYMBOL, &self.sets.symbols, source)?;
        }

        // A symbol between the digit and the unit cancels the digit's effect.
        let follows_digit = injection.digit.is_some() && injection.symbol.is_none();
        let upper_eligible = position.is_word_start() || follows_digit || unit.is_consonant();
        if self.required.contains(Feature::Upper) && upper_eligible && self.can_uppercase(unit) {
            injection.uppercase = UPPERCASE.hits(source)?;
        }

        Ok(injection)
    }

    fn pick(
        &self,
        chance: Chance,
        alphabet: &Alphabet,
        source: &mut dyn RandomSource,
    ) -> Result<Option<char>, GenerationError> {
        if !chance.hits(source)? {
            return Ok(None);
        }
        let index = source.next_below(alphabet.len())?;
        match alphabet.get(index) {
            Some(ch) => Ok(Some(ch)),
            None => Err(GenerationError::RandomSource(format!(
                "draw {index} is outside an alphabet of {}",
                alphabet.len()
            ))),
        }
    }
}
