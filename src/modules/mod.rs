//! Feature modules.
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: store access and business rules
//! - `model.rs`: response types
//! - `router.rs`: the module's routes
//!
//! Students, courses and enrollments have only a router; their handlers are the
//! generic ones in [`resource`].

pub mod auth;
pub mod courses;
pub mod enrollments;
pub mod resource;
pub mod students;
pub mod users;
