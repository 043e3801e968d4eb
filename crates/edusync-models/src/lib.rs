//! # EduSync Models
//!
//! Resource schemas, stored document shapes and request DTOs.
//!
//! # Modules
//!
//! - [`schema`]: the declarative field-requirement lists and the validator that
//!   turns a JSON body into a storable document
//! - [`json`]: conversion of stored documents back into API JSON
//! - [`students`], [`courses`], [`enrollments`]: the schemas of the generic resources
//! - [`users`]: user documents and their public view
//! - [`auth`]: registration/login DTOs and the session user
//!
//! # Example
//!
//! ```ignore
//! use edusync_models::courses::COURSES;
//!
//! let document = COURSES.validate(&body)?;
//! let id = COURSES.parse_id("665f1c2b9d3e4a0012345678")?;
//! ```

pub mod auth;
pub mod courses;
pub mod enrollments;
pub mod json;
pub mod schema;
pub mod students;
pub mod users;

pub use auth::{LoginRequest, RegisterRequest, SessionUser};
pub use courses::COURSES;
pub use enrollments::ENROLLMENTS;
pub use json::{bson_to_json, document_to_json};
pub use schema::{Field, FieldKind, ResourceSchema, SchemaError};
pub use students::STUDENTS;
pub use users::{NewUser, User, UserRecord};
