use std::path::PathBuf;

use clap::Parser;
use pwgen_core::{GenerationMode, POLICY_VERSION, Policy};

use crate::config::{OutputConfig, PwgenConfig};
use crate::logging::Verbosity;
use crate::seed::{SeedError, SeedSource};

/// Passwords shorter than this are always drawn by the flat generator.
pub const MIN_PHONEME_LENGTH: usize = 5;

#[derive(Parser, Debug)]
#[command(name = "pwgen", version, about = "Generate pronounceable passwords")]
pub struct Cli {
    /// Length of each password.
    #[arg(value_name = "LENGTH")]
    pub length: Option<usize>,
    /// Number of passwords to generate.
    #[arg(value_name = "COUNT")]
    pub count: Option<usize>,
    /// Number of passwords to generate (flag form).
    #[arg(short = 'N', long, value_name = "COUNT", conflicts_with = "count")]
    pub num_passwords: Option<usize>,
    /// Include at least one capital letter.
    #[arg(short = 'c', long, overrides_with = "no_capitalize")]
    pub capitalize: bool,
    /// Don't include capital letters.
    #[arg(short = 'A', long, overrides_with = "capitalize")]
    pub no_capitalize: bool,
    /// Include at least one number.
    #[arg(short = 'n', long, overrides_with = "no_numerals")]
    pub numerals: bool,
    /// Don't include numbers.
    #[arg(short = '0', long, overrides_with = "numerals")]
    pub no_numerals: bool,
    /// Include at least one special symbol.
    #[arg(short = 'y', long)]
    pub symbols: bool,
    /// Remove these characters from every character set.
    #[arg(short = 'r', long, value_name = "CHARS")]
    pub remove_chars: Option<String>,
    /// Generate completely random passwords.
    #[arg(short = 's', long)]
    pub secure: bool,
    /// Don't include ambiguous characters.
    #[arg(short = 'B', long)]
    pub ambiguous: bool,
    /// Don't use any vowels (implies random passwords).
    #[arg(short = 'v', long)]
    pub no_vowels: bool,
    /// Print the passwords in columns.
    #[arg(short = 'C', overrides_with = "one_per_line")]
    pub columns: bool,
    /// Print one password per line.
    #[arg(short = '1', overrides_with = "columns")]
    pub one_per_line: bool,
    /// Seed for a reproducible stream.
    #[arg(long, value_name = "N", conflicts_with = "seed_file")]
    pub seed: Option<u64>,
    /// Seed the stream from the SHA-256 of a file, with an optional salt.
    #[arg(short = 'H', long, value_name = "PATH[#SALT]")]
    pub seed_file: Option<String>,
    /// TOML configuration file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Attempts per password before giving up.
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<u32>,
    /// Append JSON logs to this file.
    #[arg(long, value_name = "PATH")]
    pub log_json: Option<PathBuf>,
    /// Only log errors.
    #[arg(short = 'q', long)]
    pub quiet: bool,
    /// Log restarts and per-password counters.
    #[arg(long)]
    pub verbose: bool,
    /// Print the generation counters as JSON on stderr.
    #[arg(long)]
    pub report: bool,
    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    pub print_config: bool,
}

/// Everything a run needs once flags and the config file are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub policy: Policy,
    pub mode: GenerationMode,
    pub max_attempts: u32,
    pub columns: bool,
    /// `None` means "pick from the layout".
    pub count: Option<usize>,
    pub seed: SeedSource,
}

impl RunSettings {
    /// Settings rendered back as a config file.
    pub fn to_config(&self) -> PwgenConfig {
        PwgenConfig {
            policy_version: POLICY_VERSION.to_string(),
            max_attempts: self.max_attempts,
            secure: self.mode == GenerationMode::Random,
            policy: self.policy.clone(),
            output: OutputConfig {
                columns: Some(self.columns),
                count: self.count,
            },
        }
    }
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }

    /// Merge flags over `config`. Flags win; unset flags keep file values.
    pub fn resolve(
        &self,
        config: PwgenConfig,
        stdout_is_terminal: bool,
    ) -> Result<RunSettings, SeedError> {
        let mut policy = config.policy;
        if let Some(length) = self.length {
            policy.length = length;
        }
        if self.capitalize {
            policy.require_upper = true;
        }
        if self.no_capitalize {
            policy.require_upper = false;
        }
        if self.numerals {
            policy.require_digit = true;
        }
        if self.no_numerals {
            policy.require_digit = false;
        }
        if self.symbols {
            policy.require_symbol = true;
        }
        if let Some(chars) = &self.remove_chars {
            policy.remove_chars = chars.clone();
        }
        if self.ambiguous {
            policy.exclude_ambiguous = true;
        }
        if self.no_vowels {
            policy.exclude_vowels = true;
        }

        let mode = if self.secure
            || config.secure
            || policy.exclude_vowels
            || policy.length < MIN_PHONEME_LENGTH
        {
            GenerationMode::Random
        } else {
            GenerationMode::Phonemes
        };

        // One or two characters leave no room for every class.
        if policy.length <= 2 {
            policy.require_upper = false;
        }
        if policy.length <= 1 {
            policy.require_digit = false;
        }

        let columns = if self.columns {
            true
        } else if self.one_per_line {
            false
        } else {
            config.output.columns.unwrap_or(stdout_is_terminal)
        };

        let seed = match (&self.seed_file, self.seed) {
            (Some(spec), _) => SeedSource::parse_file_spec(spec)?,
            (None, Some(seed)) => SeedSource::Number(seed),
            (None, None) => SeedSource::Entropy,
        };

        Ok(RunSettings {
            policy,
            mode,
            max_attempts: self.max_attempts.unwrap_or(config.max_attempts),
            columns,
            count: self.count.or(self.num_passwords).or(config.output.count),
            seed,
        })
    }
}
