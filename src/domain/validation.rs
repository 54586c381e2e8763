use std::path::Path;

use crate::domain::AppError;

/// Asserts a filesystem path exists before it is read from or written to.
///
/// Fails with [`AppError::PathMissing`] carrying the offending path. No side
/// effects beyond the check.
pub fn ensure_exists(path: &Path) -> Result<(), AppError> {
    if !path.exists() {
        return Err(AppError::PathMissing(path.to_path_buf()));
    }
    Ok(())
}
