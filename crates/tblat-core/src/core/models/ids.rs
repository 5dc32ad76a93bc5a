use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a site into the parallel site arrays of a structure.
///
/// Candidate-stage and finalized-stage indices are distinct spaces: the
/// finalizer renumbers surviving sites contiguously.
pub type SiteIndex = usize;

/// Dense identifier of a sublattice within a structure's registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SublatticeId(pub u32);

impl SublatticeId {
    pub fn as_index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SublatticeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
