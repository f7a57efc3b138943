use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, UpdateUserParam},
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod find_by_email;
mod get_all_paginated;
