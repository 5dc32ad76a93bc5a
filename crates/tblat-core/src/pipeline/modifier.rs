use super::error::ModifierError;
use super::modifiers::{HoppingGenerator, PositionModifier, SiteStateModifier};
use crate::core::connectivity::Connectivity;
use crate::core::models::candidate::CandidateStructure;
use crate::core::models::finalized::FinalizedStructure;

/// Uniform storage for structure modifiers.
///
/// Behaves like a common base for the modifier kinds without inheritance: the
/// set of kinds is closed and small, so this is a tagged union with value
/// semantics. Payloads hold their callbacks behind shared handles, so cloning
/// a `Modifier` is cheap and the payload outlives any one pipeline.
///
/// Adding a new kind means adding one variant, one `From` impl, and its arms
/// in the capability queries and the two dispatch methods.
#[derive(Clone)]
pub struct Modifier {
    payload: Payload,
}

#[derive(Clone)]
enum Payload {
    SiteState(SiteStateModifier),
    Position(PositionModifier),
    Hopping(HoppingGenerator),
}

impl Modifier {
    /// Whether this modifier participates in the candidate pass.
    pub fn applies_to_candidate(&self) -> bool {
        matches!(self.payload, Payload::SiteState(_) | Payload::Position(_))
    }

    /// Whether this modifier participates in the finalized pass.
    pub fn applies_to_finalized(&self) -> bool {
        matches!(self.payload, Payload::Hopping(_))
    }

    pub fn is_generator(&self) -> bool {
        matches!(self.payload, Payload::Hopping(_))
    }

    /// Applies this modifier to a candidate structure. A no-op for payload
    /// kinds that only act on the finalized stage.
    pub fn apply_to_candidate(
        &self,
        candidate: &mut CandidateStructure,
        connectivity: &impl Connectivity,
    ) -> Result<(), ModifierError> {
        match &self.payload {
            Payload::SiteState(modifier) => modifier.apply_to(candidate, connectivity),
            Payload::Position(modifier) => modifier.apply_to(candidate),
            Payload::Hopping(_) => {}
        }
        Ok(())
    }

    /// Applies this modifier to a finalized structure. A no-op for payload
    /// kinds that only act on the candidate stage.
    pub fn apply_to_finalized(
        &self,
        finalized: &mut FinalizedStructure,
    ) -> Result<(), ModifierError> {
        match &self.payload {
            Payload::Hopping(generator) => generator.apply_to(finalized),
            Payload::SiteState(_) | Payload::Position(_) => Ok(()),
        }
    }
}

impl From<SiteStateModifier> for Modifier {
    fn from(modifier: SiteStateModifier) -> Self {
        Self {
            payload: Payload::SiteState(modifier),
        }
    }
}

impl From<PositionModifier> for Modifier {
    fn from(modifier: PositionModifier) -> Self {
        Self {
            payload: Payload::Position(modifier),
        }
    }
}

impl From<HoppingGenerator> for Modifier {
    fn from(generator: HoppingGenerator) -> Self {
        Self {
            payload: Payload::Hopping(generator),
        }
    }
}
