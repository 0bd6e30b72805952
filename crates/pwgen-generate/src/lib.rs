//! Pronounceable password generation engine for pwgen.
//!
//! Passwords are composed from phonetic units drawn from a fixed catalog
//! under alternation rules, with digits, symbols and uppercase injected
//! around accepted units. A flat random generator covers the "secure" mode.
//! Every generator is a pure function of the draw stream it is given.

pub mod elements;
pub mod engine;
pub mod errors;
pub mod injector;
pub mod model;
pub mod phonemes;
pub mod predicate;
pub mod random;
pub mod sampler;
pub mod source;

pub use elements::{ELEMENTS, PhonemeUnit, UnitClass};
pub use engine::{GenerationEngine, GenerationResult, Generator};
pub use errors::GenerationError;
pub use model::{GenerateOptions, GeneratedPassword, GenerationReport, RestartReason};
pub use phonemes::{PhonemeGenerator, generate_password};
pub use random::RandomGenerator;
pub use source::{RandomSource, RngSource, ScriptedSource};
