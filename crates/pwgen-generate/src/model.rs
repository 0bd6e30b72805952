use std::collections::BTreeMap;
use std::fmt;

use pwgen_core::FeatureSet;
use serde::{Deserialize, Serialize};

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Maximum attempts to build a single password before giving up.
    pub max_attempts: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            max_attempts: 10_000,
        }
    }
}

/// Why an attempt was thrown away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartReason {
    /// Target length reached without these mandatory features.
    MissingFeatures(FeatureSet),
    /// Injected characters pushed the output past the target length.
    Overflow,
}

impl RestartReason {
    pub fn code(&self) -> &'static str {
        match self {
            RestartReason::MissingFeatures(_) => "missing_features",
            RestartReason::Overflow => "overflow",
        }
    }
}

impl fmt::Display for RestartReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestartReason::MissingFeatures(missing) => write!(f, "missing {missing}"),
            RestartReason::Overflow => f.write_str("length overflow"),
        }
    }
}

/// Counters for a single generated password.
///
/// Injection counters only describe the attempt that was kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub attempts: u32,
    pub restarts: u32,
    pub units: u64,
    pub rejected_draws: u64,
    pub restart_reasons: BTreeMap<String, u64>,
    pub injected_digits: u64,
    pub injected_symbols: u64,
    pub uppercased_units: u64,
}

impl GenerationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_attempt(&mut self) {
        self.attempts += 1;
        self.injected_digits = 0;
        self.injected_symbols = 0;
        self.uppercased_units = 0;
    }

    pub fn record_unit(&mut self) {
        self.units += 1;
    }

    pub fn record_rejected(&mut self, count: u64) {
        self.rejected_draws += count;
    }

    pub fn record_restart(&mut self, reason: RestartReason) {
        self.restarts += 1;
        *self
            .restart_reasons
            .entry(reason.code().to_string())
            .or_insert(0) += 1;
    }

    pub fn record_digit(&mut self) {
        self.injected_digits += 1;
    }

    pub fn record_symbol(&mut self) {
        self.injected_symbols += 1;
    }

    pub fn record_uppercase(&mut self) {
        self.uppercased_units += 1;
    }

    /// Fold another password's counters into a run total.
    pub fn absorb(&mut self, other: &GenerationReport) {
        self.attempts += other.attempts;
        self.restarts += other.restarts;
        self.units += other.units;
        self.rejected_draws += other.rejected_draws;
        for (code, count) in &other.restart_reasons {
            *self.restart_reasons.entry(code.clone()).or_insert(0) += count;
        }
        self.injected_digits += other.injected_digits;
        self.injected_symbols += other.injected_symbols;
        self.uppercased_units += other.uppercased_units;
    }
}

/// A finished password and how it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPassword {
    pub password: String,
    pub report: GenerationReport,
}
