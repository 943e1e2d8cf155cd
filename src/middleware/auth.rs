use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Basic};
use tracing::{debug, warn};

use crate::modules::users::model::User;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::password::verify_password;

/// Extractor that authenticates the request with HTTP Basic credentials and
/// provides the matching user record.
///
/// The decision runs fresh on every request: parse the credential pair,
/// look the user up by email address, verify the presented password against
/// the stored bcrypt hash. An absent or malformed `Authorization` header,
/// an unknown email, and a wrong password all render the identical 401
/// response; only the server-side log distinguishes them.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(credentials) = parts.headers.typed_get::<Authorization<Basic>>() else {
            warn!("Auth header missing or not Basic");
            return Err(AppError::access_denied());
        };

        let Some(user) = UserService::find_by_email(&state.db, credentials.username()).await?
        else {
            warn!(email = %credentials.username(), "Authentication failure: unknown email");
            return Err(AppError::access_denied());
        };

        if !verify_password(credentials.password(), &user.password)? {
            warn!(email = %user.email_address, "Authentication failure: bad password");
            return Err(AppError::access_denied());
        }

        debug!(user.id = %user.id, email = %user.email_address, "Authentication successful");
        Ok(AuthUser(user))
    }
}
