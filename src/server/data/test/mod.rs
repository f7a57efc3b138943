mod application;
mod chat;
mod chat_participant;
mod message;
mod notification;
mod pet;
mod rating;
mod user;
