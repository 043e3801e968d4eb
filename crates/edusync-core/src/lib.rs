//! # EduSync Core
//!
//! Foundational types shared by every EduSync crate:
//!
//! - [`errors`]: the application error taxonomy and its HTTP rendering
//! - [`password`]: bcrypt password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use edusync_core::errors::AppError;
//! use edusync_core::password::{hash_password, verify_password};
//!
//! let error = AppError::not_found("Course not found.");
//! let hash = hash_password("secure_password")?;
//! assert!(verify_password("secure_password", &hash)?);
//! ```

pub mod errors;
pub mod password;

pub use errors::AppError;
pub use password::{hash_password, verify_password};
