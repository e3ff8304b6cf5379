use crate::{data::favorite::FavoriteRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
