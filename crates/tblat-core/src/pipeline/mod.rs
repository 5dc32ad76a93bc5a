//! # Pipeline Module
//!
//! This module implements the structure-modifier pipeline: user-supplied
//! transformations of a lattice under construction, wrapped in type-erased
//! [`Modifier`] values and applied in caller order across the two
//! construction stages.
//!
//! ## Overview
//!
//! A construction job runs two passes over one ordered pipeline. The
//! *candidate pass* applies site-state and position modifiers to the
//! [`CandidateStructure`](crate::core::models::CandidateStructure), including
//! iterative neighbor-count pruning after site-state changes. After the
//! external finalizer compacts the survivors, the *finalized pass* applies
//! hopping generators to the
//! [`FinalizedStructure`](crate::core::models::FinalizedStructure),
//! appending new hopping families.
//!
//! ## Architecture
//!
//! - **Modifier Kinds** ([`modifiers`]) - Site-state, position, and
//!   hopping-generator payloads wrapping shared user callbacks
//! - **Type Erasure** ([`modifier`]) - The uniform [`Modifier`] value with
//!   capability queries and two-stage dispatch
//! - **Pruning** ([`pruning`]) - Worklist fixed-point removal of
//!   under-connected sites
//! - **Orchestration** ([`pipeline`]) - The ordered [`ModifierPipeline`] and
//!   its two pass entry points
//! - **Error Handling** ([`error`]) - Configuration and callback-contract
//!   violations, reported fail-fast

pub mod error;
pub mod modifier;
pub mod modifiers;
pub mod pipeline;
pub mod pruning;

pub use error::ModifierError;
pub use modifier::Modifier;
pub use modifiers::{HoppingGenerator, HoppingPairs, PositionModifier, SiteStateModifier};
pub use pipeline::ModifierPipeline;
