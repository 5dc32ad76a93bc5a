//! # tblat Core Library
//!
//! A high-performance library for building and modifying tight-binding lattice
//! structure models: spatial sites grouped by sublattice, connected by named
//! hopping families carrying complex-valued weights.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models for the two
//!   stages of lattice construction (`CandidateStructure`, `FinalizedStructure`),
//!   the sublattice name registry, and the connectivity query boundary used by
//!   neighbor-count pruning.
//!
//! - **[`pipeline`]: The Logic Core.** This stateful layer implements the
//!   structure-modifier pipeline: user-supplied transformations (site
//!   invalidation, geometric deformation, hopping generation) wrapped in a
//!   type-erased [`pipeline::Modifier`] value and applied in caller order over
//!   the two construction stages, including iterative neighbor-count pruning.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing
//!   layer. It ties the pipeline and core together to execute a complete
//!   construction job: candidate pass, finalization, finalized pass.

pub mod core;
pub mod pipeline;
pub mod workflows;
