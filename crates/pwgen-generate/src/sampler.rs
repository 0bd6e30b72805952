use pwgen_core::CharFilter;

use crate::elements::{ELEMENTS, PhonemeUnit};
use crate::errors::GenerationError;
use crate::predicate::Constraint;
use crate::source::RandomSource;

/// A unit picked by the sampler and the draws it took to find it.
#[derive(Debug, Clone, Copy)]
pub struct Sampled {
    pub unit: &'static PhonemeUnit,
    pub rejected: u64,
}

/// Draw units uniformly from the catalog until one satisfies `constraint`
/// and contains no character `filter` excludes.
///
/// The loop has no retry bound of its own; the generator checks up front
/// that every constraint it can produce has an admissible unit.
pub fn sample_unit(
    constraint: &Constraint,
    filter: &CharFilter,
    source: &mut dyn RandomSource,
) -> Result<Sampled, GenerationError> {
    let mut rejected = 0_u64;
    loop {
        let index = source.next_below(ELEMENTS.len())?;
        let Some(unit) = ELEMENTS.get(index) else {
            return Err(GenerationError::RandomSource(format!(
                "draw {index} is outside a catalog of {}",
                ELEMENTS.len()
            )));
        };
        if constraint.accepts(unit) && filter.allows_str(unit.text) {
            return Ok(Sampled { unit, rejected });
        }
        rejected += 1;
    }
}

/// Whether `constraint` has at least one unit `filter` lets through.
pub fn admits_any(constraint: &Constraint, filter: &CharFilter) -> bool {
    ELEMENTS
        .iter()
        .any(|unit| constraint.accepts(unit) && filter.allows_str(unit.text))
}
