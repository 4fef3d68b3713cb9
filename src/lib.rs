//! Client-side core of the meridian knowledge portal.
//!
//! The portal backend owns the tag taxonomy and user profile; this crate
//! mirrors the taxonomy locally ([`store::TagStore`]), projects it into
//! terminal surfaces ([`view`]), resolves organ names to static reference
//! content ([`content`]), and submits profile updates ([`client`]). The
//! [`app::App`] controller ties the pieces together: remote call, local
//! mirror on confirmation, one notification per attempted action, full
//! re-projection of every surface.

pub mod app;
pub mod client;
pub mod config;
pub mod content;
pub mod models;
pub mod notify;
pub mod store;
pub mod view;
