//! Shared wire types (DTOs) used by both the server and the typed API client.
//!
//! These types define the JSON shapes exchanged over `/api/v1`. The server
//! converts domain models into DTOs at the controller boundary; the client
//! deserializes responses into them. Timestamps are serialized as Unix seconds.

pub mod admin;
pub mod api;
pub mod application;
pub mod auth;
pub mod chat;
pub mod notification;
pub mod pet;
pub mod rescue;
pub mod user;
