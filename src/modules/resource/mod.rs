//! CRUD over a declarative [`ResourceSchema`](edusync_models::ResourceSchema).
//!
//! Students, courses and enrollments share these handlers. Each resource router
//! attaches its schema as an `Extension`, and the handlers read it from there
//! to know the collection, the field list and the wording of messages.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
