//! HTTP handlers for the catalog CRUD and search routes.

pub mod catalog;
pub use catalog::*;
