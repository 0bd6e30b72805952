//! Core contracts and helpers for pwgen.
//!
//! This crate defines the password policy, the character sets passwords are
//! built from, the feature bookkeeping shared by every generator, and the
//! up-front feasibility checks run before any generation starts.

pub mod charset;
pub mod error;
pub mod features;
pub mod policy;
pub mod validation;

pub use charset::{Alphabet, CharFilter, CharacterSets};
pub use error::{Error, Result};
pub use features::{Feature, FeatureSet};
pub use policy::{DEFAULT_LENGTH, GenerationMode, Policy};
pub use validation::{minimum_length, validate_policy};

/// Current contract version for serialized policy documents.
pub const POLICY_VERSION: &str = "0.1";
