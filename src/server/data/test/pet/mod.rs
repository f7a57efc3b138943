use crate::server::{
    data::pet::PetRepository,
    error::AppError,
    model::pet::{PetFilterParam, PetStatus, Species, UpdatePetParam},
};
use test_utils::{builder::TestBuilder, factory};

mod get_filtered_paginated;
mod get_unrated_available;
mod update;
