use tracing::warn;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::utils::errors::AppError;

/// Verify that the authenticated user owns the resource carrying the given
/// owner id.
///
/// Callers must fetch the resource before running this check so a missing
/// resource surfaces as 404 rather than 403. The comparison is strictly
/// against the owner id stored on the resource at creation time.
pub fn ensure_course_owner(auth_user: &AuthUser, owner_id: Uuid) -> Result<(), AppError> {
    if auth_user.0.id != owner_id {
        warn!(
            user.id = %auth_user.0.id,
            owner.id = %owner_id,
            "Ownership check failed"
        );
        return Err(AppError::forbidden());
    }

    Ok(())
}
