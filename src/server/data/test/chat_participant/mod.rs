use crate::server::{data::chat_participant::ChatParticipantRepository, error::AppError};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod ensure;
mod mark_read;
