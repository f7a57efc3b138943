pub mod prelude;

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
