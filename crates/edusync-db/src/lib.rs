//! # EduSync DB
//!
//! Document store access for the EduSync API.
//!
//! Controllers never talk to a driver directly. They receive a [`Store`]
//! (a shared [`DocumentStore`] trait object) through application state. Two
//! backends implement the trait:
//!
//! - [`MongoStore`]: the production backend, built on the official `mongodb` driver
//! - [`MemoryStore`]: an insertion-ordered in-process store used by tests and
//!   `DATABASE_BACKEND=memory`
//!
//! [`StoreGateway`] owns the one-time initialization of the process-wide handle.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use edusync_db::{MongoStore, Store, StoreGateway};
//!
//! let gateway = StoreGateway::new();
//! let store = gateway
//!     .initialize(|| async {
//!         let mongo = MongoStore::connect("mongodb://localhost:27017", "edusync_api").await?;
//!         Ok(Arc::new(mongo) as Store)
//!     })
//!     .await?;
//! let courses = store.find_all("courses").await?;
//! ```

pub mod gateway;
pub mod memory;
pub mod mongo;
pub mod store;

pub use gateway::StoreGateway;
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use store::{DocumentStore, ReplaceOutcome, Store, StoreError, StoreResult};

// Re-export the document types for callers that build filters or documents.
pub use bson::{Bson, Document, oid::ObjectId};
