use crate::server::{
    data::message::MessageRepository, error::AppError, model::chat::PostMessageParam,
};
use test_utils::{builder::TestBuilder, factory};

mod get_by_chat;
