//! # atelier-core
//!
//! Shared foundation for the atelier generation-assist pipeline: the
//! per-request data model exchanged between the retrieval and review stages,
//! the provider capability traits, the error taxonomy, and the tuning
//! constants the fusion and scoring stages are calibrated with.
//!
//! This crate is dependency-light and does no I/O. Provider implementations
//! (vector index, keyword index, catalog store, template store, docs store)
//! live with the external collaborators and are injected through the traits
//! in [`traits`].

pub mod config;
pub mod errors;
pub mod model;
pub mod traits;

pub use errors::{AtelierError, AtelierResult};
