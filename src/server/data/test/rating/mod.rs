use crate::server::{
    data::rating::RatingRepository, error::AppError, model::pet::RatePetParam,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod upsert;
