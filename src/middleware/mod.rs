//! Middleware and extractors for session authentication.
//!
//! # Modules
//!
//! - [`auth`]: the `require_auth` gate and the [`AuthUser`](auth::AuthUser) extractor
//! - [`session`]: typed wrappers over the `tower-sessions` session
//!
//! # Authentication Flow
//!
//! 1. `POST /login` (or the GitHub callback) stores a `SessionUser` in the session
//! 2. The session cookie is sent back on later requests
//! 3. `require_auth` loads the session user and rejects the request with 401 if
//!    there is none
//! 4. Handlers take `AuthUser` to read the user

pub mod auth;
pub mod session;
