//! # Core Module
//!
//! This module provides the fundamental data structures for tight-binding
//! lattice construction in tblat, serving as the stateless foundation that the
//! modifier pipeline operates on.
//!
//! ## Overview
//!
//! Lattice construction moves through two representations. The *candidate*
//! stage holds the full superset of spatial sites with per-site validity
//! flags; the *finalized* stage holds the pruned, contiguously renumbered
//! survivors plus the hopping (bond) topology. Both store sites column-wise
//! in index-aligned parallel arrays.
//!
//! ## Architecture
//!
//! - **Site Representation** ([`models`]) - Parallel-array structures for the
//!   candidate and finalized stages, sublattice identifiers and name registry
//! - **Connectivity Boundary** ([`connectivity`]) - The query interface the
//!   external neighbor-search collaborator fulfils, plus a concrete
//!   adjacency-list implementation

pub mod connectivity;
pub mod models;
