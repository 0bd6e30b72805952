use std::time::Instant;

use pwgen_core::{GenerationMode, Policy};
use tracing::{info, warn};

use crate::errors::GenerationError;
use crate::model::{GenerateOptions, GeneratedPassword, GenerationReport};
use crate::phonemes::PhonemeGenerator;
use crate::random::RandomGenerator;
use crate::source::RandomSource;

/// A password generator bound to one validated policy.
pub trait Generator: std::fmt::Debug {
    fn mode(&self) -> GenerationMode;

    fn policy(&self) -> &Policy;

    /// Produce one password that satisfies the policy.
    fn generate(&self, source: &mut dyn RandomSource)
    -> Result<GeneratedPassword, GenerationError>;
}

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub passwords: Vec<String>,
    pub totals: GenerationReport,
}

/// Entry point for generating passwords under a policy.
#[derive(Debug)]
pub struct GenerationEngine {
    generator: Box<dyn Generator>,
}

impl GenerationEngine {
    pub fn new(
        policy: Policy,
        mode: GenerationMode,
        options: GenerateOptions,
    ) -> Result<Self, GenerationError> {
        let generator: Box<dyn Generator> = match mode {
            GenerationMode::Phonemes => Box::new(PhonemeGenerator::new(policy, options)?),
            GenerationMode::Random => Box::new(RandomGenerator::new(policy, options)?),
        };
        Ok(Self { generator })
    }

    pub fn generator(&self) -> &dyn Generator {
        self.generator.as_ref()
    }

    pub fn generate_one(
        &self,
        source: &mut dyn RandomSource,
    ) -> Result<GeneratedPassword, GenerationError> {
        let generated = self.generator.generate(source)?;
        info!(
            mode = ?self.generator.mode(),
            length = generated.password.len(),
            attempts = generated.report.attempts,
            restarts = generated.report.restarts,
            rejected_draws = generated.report.rejected_draws,
            "password generated"
        );
        Ok(generated)
    }

    /// Generate `count` passwords from one stream, stopping at the first
    /// error.
    pub fn run(
        &self,
        count: usize,
        source: &mut dyn RandomSource,
    ) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let policy = self.generator.policy();
        info!(
            mode = ?self.generator.mode(),
            length = policy.length,
            count,
            required = %policy.required_features(),
            "generation started"
        );

        let mut passwords = Vec::with_capacity(count);
        let mut totals = GenerationReport::new();
        for index in 0..count {
            match self.generate_one(source) {
                Ok(generated) => {
                    totals.absorb(&generated.report);
                    passwords.push(generated.password);
                }
                Err(err) => {
                    warn!(index, error = %err, "generation failed");
                    return Err(err);
                }
            }
        }

        info!(
            passwords = passwords.len(),
            attempts = totals.attempts,
            restarts = totals.restarts,
            duration_ms = start.elapsed().as_millis() as u64,
            "generation completed"
        );
        Ok(GenerationResult { passwords, totals })
    }
}
