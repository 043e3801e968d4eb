//! Request body extractors that reject with [`AppError`].
//!
//! Malformed bodies and failed validation both answer 400 with a single
//! message. When a DTO reports several problems the struct-level ("required
//! fields") error wins, otherwise the first field in alphabetical order.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use edusync_core::AppError;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

/// Key `validator` uses for struct-level (schema) errors.
const SCHEMA_ERRORS_KEY: &str = "__all__";

fn first_error_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();

    let (field, errors) = match field_errors.get_key_value(SCHEMA_ERRORS_KEY) {
        Some(entry) => entry,
        None => match field_errors.iter().min_by_key(|(field, _)| *field) {
            Some(entry) => entry,
            None => return "Invalid request body".to_string(),
        },
    };

    errors
        .first()
        .and_then(|error| error.message.as_ref())
        .map(|msg| msg.to_string())
        .unwrap_or_else(|| format!("{field} is invalid"))
}

fn rejection_message(rejection: &JsonRejection) -> String {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            "Missing 'Content-Type: application/json' header".to_string()
        }
        JsonRejection::JsonDataError(_) => "Invalid field type in request".to_string(),
        JsonRejection::JsonSyntaxError(_) => "Request body is not valid JSON".to_string(),
        _ => "Invalid request body".to_string(),
    }
}

/// `Json<T>` with an [`AppError`] rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection_message(&rejection)))?;

        Ok(JsonBody(value))
    }
}

/// Deserializes the body and runs its `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let JsonBody(value) = JsonBody::<T>::from_request(req, state).await?;

        value
            .validate()
            .map_err(|errors| AppError::validation(first_error_message(&errors)))?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edusync_models::RegisterRequest;

    fn message_for(username: &str, email: &str, password: &str) -> String {
        let dto = RegisterRequest {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        };
        first_error_message(&dto.validate().unwrap_err())
    }

    #[test]
    fn test_required_message_wins() {
        assert_eq!(
            message_for("", "bad", "1"),
            "Username, email, and password are required."
        );
    }

    #[test]
    fn test_first_field_alphabetically() {
        assert_eq!(message_for("ada", "bad", "1"), "Invalid email format.");
        assert_eq!(
            message_for("ada", "ada@example.com", "1"),
            "Password must be at least 6 characters long."
        );
    }
}
