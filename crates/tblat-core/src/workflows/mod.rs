//! # Workflows Module
//!
//! The highest-level, user-facing layer: complete lattice-construction
//! procedures that tie the [`core`](crate::core) models and the
//! [`pipeline`](crate::pipeline) together.

pub mod build;
