//! One module per API resource, plus the shared request helpers.

pub mod admin;
pub mod application;
pub mod auth;
pub mod chat;
pub mod helper;
pub mod notification;
pub mod pet;
pub mod rescue;
pub mod user;
