use pwgen_core::{
    Alphabet, CharacterSets, Feature, FeatureSet, GenerationMode, Policy, validate_policy,
};
use tracing::{debug, warn};

use crate::engine::Generator;
use crate::errors::GenerationError;
use crate::model::{GenerateOptions, GeneratedPassword, GenerationReport, RestartReason};
use crate::source::RandomSource;

/// Flat generator drawing every character independently from one pool.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    policy: Policy,
    pool: Alphabet,
    required: FeatureSet,
    options: GenerateOptions,
}

impl RandomGenerator {
    pub fn new(policy: Policy, options: GenerateOptions) -> Result<Self, GenerationError> {
        if options.max_attempts == 0 {
            return Err(GenerationError::InvalidOptions(
                "max_attempts must be positive".to_string(),
            ));
        }
        validate_policy(&policy, GenerationMode::Random)?;
        let pool = CharacterSets::new(&policy, GenerationMode::Random).pool(&policy);
        let required = policy.required_features();
        Ok(Self {
            policy,
            pool,
            required,
            options,
        })
    }

    pub fn pool(&self) -> &Alphabet {
        &self.pool
    }
}

impl Generator for RandomGenerator {
    fn mode(&self) -> GenerationMode {
        GenerationMode::Random
    }

    fn policy(&self) -> &Policy {
        &self.policy
    }

    fn generate(
        &self,
        source: &mut dyn RandomSource,
    ) -> Result<GeneratedPassword, GenerationError> {
        let mut report = GenerationReport::new();
        let mut password = String::with_capacity(self.policy.length);

        for attempt in 1..=self.options.max_attempts {
            report.record_attempt();
            password.clear();

            for _ in 0..self.policy.length {
                let index = source.next_below(self.pool.len())?;
                let Some(ch) = self.pool.get(index) else {
                    return Err(GenerationError::RandomSource(format!(
                        "draw {index} is outside a pool of {}",
                        self.pool.len()
                    )));
                };
                match Feature::of_char(ch) {
                    Some(Feature::Digit) => report.record_digit(),
                    Some(Feature::Symbol) => report.record_symbol(),
                    Some(Feature::Upper) => report.record_uppercase(),
                    None => {}
                }
                report.record_unit();
                password.push(ch);
            }

            let satisfied = FeatureSet::scan(&password);
            if satisfied.is_superset(self.required) {
                return Ok(GeneratedPassword { password, report });
            }

            let reason = RestartReason::MissingFeatures(satisfied.missing_from(self.required));
            report.record_restart(reason);
            debug!(attempt, reason = %reason, "discarding password attempt");
        }

        warn!(
            attempts = report.attempts,
            restarts = report.restarts,
            "password attempt budget exhausted"
        );
        Err(GenerationError::AttemptsExhausted {
            attempts: report.attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ScriptedSource;

    #[test]
    fn pool_order_is_lowers_digits_uppers_symbols() {
        let policy = Policy {
            require_symbol: true,
            ..Policy::default()
        };
        let generator = RandomGenerator::new(policy, GenerateOptions::default()).unwrap();
        let pool = generator.pool();
        assert_eq!(pool.get(0), Some('a'));
        assert_eq!(pool.get(26), Some('0'));
        assert_eq!(pool.get(36), Some('A'));
        assert_eq!(pool.get(62), Some('!'));
    }

    #[test]
    fn missing_feature_restarts_the_attempt() {
        let policy = Policy {
            length: 2,
            ..Policy::default()
        };
        let generator = RandomGenerator::new(policy, GenerateOptions::default()).unwrap();
        // "ab" lacks both features, "7Q" has them.
        let mut source = ScriptedSource::new([0, 1, 33, 52]);
        let generated = generator.generate(&mut source).unwrap();
        assert_eq!(generated.password, "7Q");
        assert_eq!(generated.report.attempts, 2);
        assert_eq!(generated.report.restart_reasons["missing_features"], 1);
        assert_eq!(generated.report.injected_digits, 1);
    }

    #[test]
    fn budget_exhaustion_is_an_error() {
        let policy = Policy {
            length: 2,
            ..Policy::default()
        };
        let generator =
            RandomGenerator::new(policy, GenerateOptions { max_attempts: 2 }).unwrap();
        let mut source = ScriptedSource::new([0, 0, 1, 1]);
        assert_eq!(
            generator.generate(&mut source).unwrap_err(),
            GenerationError::AttemptsExhausted { attempts: 2 }
        );
    }
}
