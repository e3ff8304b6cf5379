use crate::{data::catch::CatchRepository, error::AppError};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod add_count;
mod get_by_user;
