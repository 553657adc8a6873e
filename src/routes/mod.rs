//! Routers for the catalog API and the common service endpoints.

mod catalog;
mod common;
pub use catalog::catalog_routes;
pub use common::common_routes;
