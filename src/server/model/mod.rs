//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Enum-like columns (pet species/status, application status) are parsed into real
//! enums here; an unknown stored value surfaces as an internal error.

pub mod application;
pub mod audit;
pub mod chat;
pub mod notification;
pub mod pet;
pub mod rescue;
pub mod staff;
pub mod user;
