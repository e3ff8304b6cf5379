use crate::{data::wallet::WalletRepository, error::AppError};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_or_create;
mod set_balance;
