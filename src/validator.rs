use axum::extract::rejection::JsonRejection;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::utils::errors::AppError;

fn collect_messages(errors: &ValidationErrors) -> Vec<String> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect()
}

/// JSON extractor that runs the DTO's `validate()` after deserializing.
///
/// Body problems and constraint violations both render as 400 with an
/// `errors` list, one message per violated constraint.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
                    return AppError::validation(vec![
                        "Missing 'Content-Type: application/json' header".to_string(),
                    ]);
                }

                let error_msg = rejection.body_text();

                if error_msg.contains("missing field") {
                    let field = error_msg
                        .split("missing field `")
                        .nth(1)
                        .and_then(|s| s.split('`').next())
                        .unwrap_or("unknown");
                    return AppError::validation(vec![format!("{} is required", field)]);
                }

                if error_msg.contains("invalid type") {
                    return AppError::validation(vec![
                        "Invalid field type in request".to_string(),
                    ]);
                }

                AppError::validation(vec!["Invalid request body".to_string()])
            })?;

        value
            .validate()
            .map_err(|errors| AppError::validation(collect_messages(&errors)))?;

        Ok(ValidatedJson(value))
    }
}
