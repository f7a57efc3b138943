//! Adoption platform connecting rescue organizations with adopters.
//!
//! The crate ships two halves:
//!
//! - [`server`] - The Axum API backend (run via the binary)
//! - [`client`] - A typed reqwest client for the API
//!
//! The [`model`] module holds the wire DTOs shared by both.

pub mod client;
pub mod model;
pub mod server;
