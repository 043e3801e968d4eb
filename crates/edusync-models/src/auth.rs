//! Authentication DTOs and the session user.
//!
//! Request DTOs default every field to the empty string so that an absent
//! field and an empty one fail the same struct-level "required" check, whose
//! message takes precedence over per-field format errors.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::users::User;

pub const CREDENTIALS_REQUIRED: &str = "Username, email, and password are required.";
pub const LOGIN_FIELDS_REQUIRED: &str = "Email and password are required.";
pub const INVALID_CREDENTIALS: &str = "Invalid email or password.";

/// `local@domain.tld`: no whitespace, exactly one `@`, a dot after it.
pub static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Registration and full user replacement body.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "require_registration_fields", skip_on_field_errors = false))]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    #[validate(regex(path = *EMAIL_RE, message = "Invalid email format."))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 6, message = "Password must be at least 6 characters long."))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "require_login_fields", skip_on_field_errors = false))]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(regex(path = *EMAIL_RE, message = "Invalid email format."))]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

fn required(message: &'static str) -> ValidationError {
    ValidationError::new("required").with_message(Cow::Borrowed(message))
}

fn require_registration_fields(dto: &RegisterRequest) -> Result<(), ValidationError> {
    if dto.username.is_empty() || dto.email.is_empty() || dto.password.is_empty() {
        return Err(required(CREDENTIALS_REQUIRED));
    }
    Ok(())
}

fn require_login_fields(dto: &LoginRequest) -> Result<(), ValidationError> {
    if dto.email.is_empty() || dto.password.is_empty() {
        return Err(required(LOGIN_FIELDS_REQUIRED));
    }
    Ok(())
}

/// The authenticated-user marker kept in the session.
///
/// Local logins store the user document's hex id; GitHub logins store the
/// GitHub account id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
}

impl From<User> for SessionUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: Some(user.email),
        }
    }
}
