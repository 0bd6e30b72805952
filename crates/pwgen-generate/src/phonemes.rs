use pwgen_core::{
    CharFilter, CharacterSets, Error, FeatureSet, GenerationMode, Policy, validate_policy,
};
use tracing::{debug, trace, warn};

use crate::elements::{ELEMENTS, PhonemeUnit, UnitClass};
use crate::engine::Generator;
use crate::errors::GenerationError;
use crate::injector::{Injection, Injector};
use crate::model::{GenerateOptions, GeneratedPassword, GenerationReport, RestartReason};
use crate::predicate::{Constraint, Position, select_constraint};
use crate::sampler::{admits_any, sample_unit};
use crate::source::RandomSource;

/// Lifecycle of one password attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Empty,
    Building,
    Complete,
}

/// Outcome of appending a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Complete,
    Restart(RestartReason),
}

/// Mutable state of the attempt in progress.
#[derive(Debug)]
struct GenerationState {
    target: usize,
    output: String,
    previous: Option<&'static PhonemeUnit>,
    satisfied: FeatureSet,
    phase: Phase,
}

impl GenerationState {
    fn new(target: usize) -> Self {
        Self {
            target,
            output: String::with_capacity(target + 2),
            previous: None,
            satisfied: FeatureSet::empty(),
            phase: Phase::Empty,
        }
    }

    fn remaining(&self) -> usize {
        self.target.saturating_sub(self.output.len())
    }

    fn append(&mut self, unit: &'static PhonemeUnit, injection: &Injection) {
        self.output.push_str(&injection.render(unit));
        for feature in injection.features().iter() {
            self.satisfied.insert(feature);
        }
        self.previous = Some(unit);
        self.phase = Phase::Building;
    }

    /// Decide what happens after the last append. A restart leaves the
    /// state exactly as `new` built it.
    fn settle(&mut self, required: FeatureSet) -> Step {
        let len = self.output.len();
        if len < self.target {
            return Step::Continue;
        }
        let reason = if len > self.target {
            RestartReason::Overflow
        } else if self.satisfied.is_superset(required) {
            self.phase = Phase::Complete;
            return Step::Complete;
        } else {
            RestartReason::MissingFeatures(self.satisfied.missing_from(required))
        };
        self.reset();
        Step::Restart(reason)
    }

    fn reset(&mut self) {
        self.output.clear();
        self.previous = None;
        self.satisfied = FeatureSet::empty();
        self.phase = Phase::Empty;
    }

    fn into_password(self) -> String {
        debug_assert_eq!(self.phase, Phase::Complete);
        self.output
    }
}

/// Pronounceable password generator built on the phonetic unit catalog.
#[derive(Debug, Clone)]
pub struct PhonemeGenerator {
    policy: Policy,
    sets: CharacterSets,
    required: FeatureSet,
    options: GenerateOptions,
}

impl PhonemeGenerator {
    /// Validate `policy` and prepare the filtered alphabets.
    pub fn new(policy: Policy, options: GenerateOptions) -> Result<Self, GenerationError> {
        if options.max_attempts == 0 {
            return Err(GenerationError::InvalidOptions(
                "max_attempts must be positive".to_string(),
            ));
        }
        validate_policy(&policy, GenerationMode::Phonemes)?;
        let sets = CharacterSets::new(&policy, GenerationMode::Phonemes);
        check_units_available(&policy, &sets.filter)?;
        let required = policy.required_features();
        Ok(Self {
            policy,
            sets,
            required,
            options,
        })
    }
}

/// Generate one pronounceable password with the default options.
pub fn generate_password(
    policy: &Policy,
    source: &mut dyn RandomSource,
) -> Result<String, GenerationError> {
    let generator = PhonemeGenerator::new(policy.clone(), GenerateOptions::default())?;
    Ok(generator.generate(source)?.password)
}

/// Every constraint the predicate can produce must leave at least one unit,
/// even with a single character left, or sampling would never end.
fn check_units_available(policy: &Policy, filter: &CharFilter) -> Result<(), Error> {
    for constraint in Constraint::reachable(1) {
        if !admits_any(&constraint, filter) {
            let class = match constraint.class {
                UnitClass::Vowel => "vowel",
                UnitClass::Consonant => "consonant",
            };
            return Err(Error::EmptyAlphabet(format!("{class} unit")));
        }
    }

    if policy.require_upper {
        let capable = Constraint::reachable(1)
            .into_iter()
            .filter(|constraint| constraint.must_start_word)
            .any(|constraint| {
                ELEMENTS.iter().any(|unit| {
                    constraint.accepts(unit)
                        && filter.allows_str(unit.text)
                        && filter.allows_str(&unit.text.to_ascii_uppercase())
                })
            });
        if !capable {
            return Err(Error::EmptyAlphabet("uppercase".to_string()));
        }
    }

    Ok(())
}

impl Generator for PhonemeGenerator {
    fn mode(&self) -> GenerationMode {
        GenerationMode::Phonemes
    }

    fn policy(&self) -> &Policy {
        &self.policy
    }

    fn generate(
        &self,
        source: &mut dyn RandomSource,
    ) -> Result<GeneratedPassword, GenerationError> {
        let injector = Injector::new(&self.sets, self.required);
        let mut report = GenerationReport::new();
        let mut state = GenerationState::new(self.policy.length);
        report.record_attempt();

        loop {
            let position = Position::of(state.previous);
            let constraint = select_constraint(position, state.remaining(), source)?;
            let sampled = sample_unit(&constraint, &self.sets.filter, source)?;
            report.record_unit();
            report.record_rejected(sampled.rejected);

            let injection = injector.inject(sampled.unit, position, source)?;
            if injection.digit.is_some() {
                report.record_digit();
            }
            if injection.symbol.is_some() {
                report.record_symbol();
            }
            if injection.uppercase {
                report.record_uppercase();
            }
            state.append(sampled.unit, &injection);
            trace!(
                class = ?sampled.unit.class,
                width = sampled.unit.width(),
                rejected = sampled.rejected,
                filled = state.output.len(),
                "unit accepted"
            );

            match state.settle(self.required) {
                Step::Continue => {}
                Step::Complete => {
                    return Ok(GeneratedPassword {
                        password: state.into_password(),
                        report,
                    });
                }
                Step::Restart(reason) => {
                    report.record_restart(reason);
                    debug!(
                        attempt = report.attempts,
                        reason = %reason,
                        "discarding password attempt"
                    );
                    if report.attempts >= self.options.max_attempts {
                        warn!(
                            attempts = report.attempts,
                            restarts = report.restarts,
                            "password attempt budget exhausted"
                        );
                        return Err(GenerationError::AttemptsExhausted {
                            attempts: report.attempts,
                        });
                    }
                    report.record_attempt();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ScriptedSource;
    use pwgen_core::Feature;

    fn unit(text: &str) -> &'static PhonemeUnit {
        ELEMENTS
            .iter()
            .find(|unit| unit.text == text)
            .expect("unit in catalog")
    }

    fn bare(length: usize) -> Policy {
        Policy {
            length,
            require_digit: false,
            require_upper: false,
            ..Policy::default()
        }
    }

    #[test]
    fn state_restart_clears_everything() {
        let mut state = GenerationState::new(3);
        let injection = Injection {
            digit: Some('4'),
            ..Injection::default()
        };
        state.append(unit("a"), &injection);
        assert_eq!(state.phase, Phase::Building);
        assert_eq!(state.settle(FeatureSet::empty()), Step::Continue);

        state.append(unit("ch"), &Injection::default());
        let required: FeatureSet = [Feature::Digit, Feature::Upper].into_iter().collect();
        let step = state.settle(required);
        assert_eq!(state.output, "");
        assert_eq!(state.previous, None);
        assert!(state.satisfied.is_empty());
        assert_eq!(state.phase, Phase::Empty);
        assert!(matches!(step, Step::Restart(RestartReason::Overflow)));
    }

    #[test]
    fn missing_feature_is_reported() {
        let mut state = GenerationState::new(1);
        state.append(unit("a"), &Injection::default());
        let required: FeatureSet = [Feature::Upper].into_iter().collect();
        match state.settle(required) {
            Step::Restart(RestartReason::MissingFeatures(missing)) => {
                assert!(missing.contains(Feature::Upper));
            }
            other => panic!("unexpected step {other:?}"),
        }
    }

    #[test]
    fn scripted_password_without_features() {
        let generator = PhonemeGenerator::new(bare(3), GenerateOptions::default()).unwrap();
        // start: consonant draw, "th"; after consonant: "e".
        let mut source = ScriptedSource::new([7, 33, 8]);
        let generated = generator.generate(&mut source).unwrap();
        assert_eq!(generated.password, "the");
        assert_eq!(generated.report.attempts, 1);
        assert_eq!(generated.report.units, 2);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn generate_password_matches_generator() {
        let password = generate_password(&bare(3), &mut ScriptedSource::new([7, 33, 8])).unwrap();
        assert_eq!(password, "the");
    }

    #[test]
    fn zero_attempt_budget_is_rejected() {
        let err = PhonemeGenerator::new(bare(8), GenerateOptions { max_attempts: 0 })
            .unwrap_err();
        assert!(matches!(err, GenerationError::InvalidOptions(_)));
    }

    #[test]
    fn removing_every_vowel_is_infeasible() {
        let policy = Policy {
            remove_chars: "aeiou".to_string(),
            ..bare(8)
        };
        let err = PhonemeGenerator::new(policy, GenerateOptions::default()).unwrap_err();
        assert_eq!(
            err,
            GenerationError::Policy(Error::EmptyAlphabet("vowel unit".to_string()))
        );
    }

    #[test]
    fn uppercase_needs_an_uppercasable_start_unit() {
        let policy = Policy {
            require_upper: true,
            remove_chars: "ABCDEFGHIJKLMNOPQRSTUVWXYZ".to_string(),
            ..bare(8)
        };
        let err = PhonemeGenerator::new(policy, GenerateOptions::default()).unwrap_err();
        assert_eq!(
            err,
            GenerationError::Policy(Error::EmptyAlphabet("uppercase".to_string()))
        );
    }
}
