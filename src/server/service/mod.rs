//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and in-memory services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Side Effects**: Creating notifications and audit entries where operations demand them

pub mod admin;
pub mod application;
pub mod auth;
pub mod chat;
pub mod notification;
pub mod permission;
pub mod pet;
pub mod rescue;
pub mod sanitizer;
pub mod user;
