use crate::error::AppError;

/// Ownership check: a caller may only act on their own user record. The
/// caller id comes from the verified token; this is just the equality
/// check and error mapping.
pub fn validate_owner(caller_id: i64, target_id: i64) -> Result<(), AppError> {
    if caller_id != target_id {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}
