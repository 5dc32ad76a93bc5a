use crate::core::connectivity::Connectivity;
use crate::core::models::candidate::CandidateStructure;
use crate::core::models::finalized::FinalizedStructure;
use crate::core::models::ids::SiteIndex;
use crate::pipeline::error::ModifierError;
use crate::pipeline::pipeline::ModifierPipeline;
use tracing::{info, instrument};

/// Outcome of a complete construction job.
#[derive(Debug, Clone)]
pub struct BuildResult {
    /// The pruned, renumbered structure after both passes.
    pub finalized: FinalizedStructure,
    /// Candidate-index → finalized-index mapping; `None` for pruned sites.
    pub site_mapping: Vec<Option<SiteIndex>>,
}

/// Runs a full construction job: candidate pass, finalization, finalized
/// pass.
///
/// The candidate structure is consumed; callers needing to retry after a
/// failure rebuild it from the external structure builder, since passes
/// mutate in place and are not rolled back.
#[instrument(skip_all, name = "lattice_build_workflow")]
pub fn run(
    mut candidate: CandidateStructure,
    connectivity: &impl Connectivity,
    pipeline: &ModifierPipeline,
) -> Result<BuildResult, ModifierError> {
    info!(
        sites = candidate.site_count(),
        modifiers = pipeline.len(),
        "Starting lattice build."
    );

    pipeline.run_candidate_pass(&mut candidate, connectivity)?;

    let (mut finalized, site_mapping) = FinalizedStructure::from_candidate(&candidate);
    info!(surviving_sites = finalized.site_count(), "Candidate finalized.");

    pipeline.run_finalized_pass(&mut finalized)?;

    Ok(BuildResult {
        finalized,
        site_mapping,
    })
}
