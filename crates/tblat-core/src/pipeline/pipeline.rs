use super::error::ModifierError;
use super::modifier::Modifier;
use crate::core::connectivity::Connectivity;
use crate::core::models::candidate::CandidateStructure;
use crate::core::models::finalized::FinalizedStructure;
use tracing::{info, instrument};

/// An ordered sequence of modifiers applied over one construction job.
///
/// Order is caller-significant: modifiers execute strictly in sequence, and a
/// later modifier sees the cumulative effect of every earlier one (validity
/// flags, updated positions, registered families). The pipeline never
/// reorders or parallelizes within a pass.
#[derive(Clone, Default)]
pub struct ModifierPipeline {
    modifiers: Vec<Modifier>,
}

impl ModifierPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a modifier; any of the payload kinds converts implicitly.
    pub fn push(&mut self, modifier: impl Into<Modifier>) {
        self.modifiers.push(modifier.into());
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Modifier> {
        self.modifiers.iter()
    }

    /// Applies, in order, every modifier that acts on the candidate stage,
    /// skipping the others.
    ///
    /// # Errors
    ///
    /// The first failing modifier aborts the pass; earlier mutations are not
    /// rolled back.
    #[instrument(skip_all, name = "candidate_pass")]
    pub fn run_candidate_pass(
        &self,
        candidate: &mut CandidateStructure,
        connectivity: &impl Connectivity,
    ) -> Result<(), ModifierError> {
        let sites_before = candidate.valid_count();
        let mut applied = 0;
        for modifier in &self.modifiers {
            if modifier.applies_to_candidate() {
                modifier.apply_to_candidate(candidate, connectivity)?;
                applied += 1;
            }
        }
        info!(
            applied,
            sites_before,
            sites_after = candidate.valid_count(),
            "Candidate pass complete."
        );
        Ok(())
    }

    /// Applies, in order, every modifier that acts on the finalized stage,
    /// skipping the others.
    ///
    /// # Errors
    ///
    /// The first failing modifier aborts the pass; families registered by
    /// earlier modifiers remain.
    #[instrument(skip_all, name = "finalized_pass")]
    pub fn run_finalized_pass(
        &self,
        finalized: &mut FinalizedStructure,
    ) -> Result<(), ModifierError> {
        let mut applied = 0;
        for modifier in &self.modifiers {
            if modifier.applies_to_finalized() {
                modifier.apply_to_finalized(finalized)?;
                applied += 1;
            }
        }
        info!(
            applied,
            families = finalized.family_count(),
            "Finalized pass complete."
        );
        Ok(())
    }
}

impl From<Vec<Modifier>> for ModifierPipeline {
    fn from(modifiers: Vec<Modifier>) -> Self {
        Self { modifiers }
    }
}

impl Extend<Modifier> for ModifierPipeline {
    fn extend<I: IntoIterator<Item = Modifier>>(&mut self, iter: I) {
        self.modifiers.extend(iter);
    }
}
