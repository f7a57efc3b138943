//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

pub mod application;
pub mod audit_log;
pub mod chat;
pub mod chat_participant;
pub mod message;
pub mod notification;
pub mod pet;
pub mod rating;
pub mod rescue;
pub mod staff_member;
pub mod user;

#[cfg(test)]
mod test;
