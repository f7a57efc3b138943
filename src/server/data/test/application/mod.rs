use crate::server::{
    data::application::ApplicationRepository,
    error::AppError,
    model::application::{ApplicationStatus, CreateApplicationParam},
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_rescue_paginated;
mod get_pending_unreminded_before;
mod set_status;
