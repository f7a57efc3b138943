//! HTTP request handlers.
//!
//! Each module covers one API resource. Handlers authenticate through the
//! [`AuthGuard`](super::middleware::auth::AuthGuard), convert wire DTOs into
//! service parameters, and convert domain models back into DTOs for the
//! response. Business rules live in the service layer, not here.

pub mod admin;
pub mod application;
pub mod auth;
pub mod chat;
pub mod notification;
pub mod param;
pub mod pet;
pub mod rescue;
pub mod user;
