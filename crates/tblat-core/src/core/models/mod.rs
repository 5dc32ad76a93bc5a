//! Data models for the two stages of lattice construction.
//!
//! Sites are stored column-wise: `positions`, `valid`, and `sublattices` are
//! index-aligned parallel arrays, and a site index refers to the same physical
//! site in all of them.

pub mod candidate;
pub mod finalized;
pub mod ids;
pub mod sublattice;

pub use candidate::CandidateStructure;
pub use finalized::{FinalizedStructure, HoppingFamily};
pub use ids::{SiteIndex, SublatticeId};
pub use sublattice::{SubIdRef, SublatticeRegistry};
