use crate::server::{
    data::chat::ChatRepository, error::AppError, model::chat::OpenChatParam,
};
use test_utils::{builder::TestBuilder, factory};

mod find_existing;
mod get_by_user;
