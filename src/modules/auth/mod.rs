pub mod controller;
pub mod github;
pub mod model;
pub mod router;
pub mod service;
