use crate::error::{internal::InternalError, AppError};

/// Parses a Discord user ID stored as text in a ledger row.
///
/// SQLite has no unsigned 64-bit integer, so wallet, catch and favorite rows keep the
/// snowflake as a string.
///
/// # Returns
/// - `Ok(u64)` - The user ID
/// - `Err(AppError::InternalErr(ParseStringId))` - The column held something else
pub fn parse_user_id(value: String) -> Result<u64, AppError> {
    value
        .parse::<u64>()
        .map_err(|source| InternalError::ParseStringId { value, source }.into())
}
