//! # EduSync API
//!
//! A REST API for a school information system built with Axum and MongoDB.
//! It manages students, courses, enrollments and users, with session-based
//! authentication through local credentials or GitHub OAuth.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── config/           # Environment configuration (database, session, GitHub, server)
//! ├── middleware/       # Session auth gate and extractors
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Register, login, logout, GitHub OAuth
//! │   ├── resource/    # Generic schema-driven CRUD handlers
//! │   ├── students/    # Student routes
//! │   ├── courses/     # Course routes
//! │   ├── enrollments/ # Enrollment routes
//! │   └── users/       # User routes
//! └── ...
//! ```
//!
//! Workspace crates:
//!
//! - `edusync-core`: `AppError` and password hashing
//! - `edusync-db`: the `DocumentStore` trait, MongoDB and in-memory backends
//! - `edusync-models`: resource schemas, user documents and DTOs
//!
//! ## Authentication
//!
//! `POST /login` and `GET /github/callback` store the user in a server-side
//! session. Reads are public; creating, replacing and deleting documents
//! requires a session user.
//!
//! ## Quick Start
//!
//! ```bash
//! MONGODB_URL=mongodb://localhost:27017
//! MONGODB_DATABASE=edusync_api
//! # or run without MongoDB:
//! DATABASE_BACKEND=memory
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Application configuration
//! - [`db`]: Store gateway and application state initialization
//! - [`logging`]: Tracing setup and request logging
//! - [`middleware`]: Authentication middleware and extractors
//! - [`modules`]: Feature modules
//! - [`router`]: Main application router
//! - [`state`]: Shared application state
//! - [`validator`]: Request body extractors

pub mod config;
pub mod db;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

pub use edusync_core;
pub use edusync_db;
pub use edusync_models;
