//! Domain models for meridian.
//!
//! # Core Concepts
//!
//! ## Synchronized State
//!
//! - [`TagHierarchy`]: the two-level tag taxonomy (primary categories and
//!   their secondary items) as served by the portal. The local copy is a
//!   mirror of the remote authority, updated only after the portal confirms
//!   a mutation.
//!
//! ## Static Reference Data
//!
//! - [`OrganRecord`]: symptoms, diagnosis, diseases, treatment and advice
//!   for a named organ or body part. Loaded once, never mutated; lookup by
//!   name falls back to a generic record for unknown names.
//!
//! ## Acknowledgements
//!
//! Every mutating portal endpoint answers with an [`Ack`]-shaped JSON body:
//! a boolean `success` plus an optional human-readable `message`. Anything
//! other than `success: true` is a failure.

mod organ;
mod profile;
mod tags;

pub use organ::*;
pub use profile::*;
pub use tags::*;
