//! Catalogo Auto: REST backend for an automobile catalog, backed by PostgreSQL.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use model::{Auto, NewAuto, StatoAuto};
pub use repository::{AutoRepository, PgAutoRepository};
pub use routes::{catalog_routes, common_routes};
pub use service::AutoService;
pub use state::AppState;
pub use store::{ensure_catalog_schema, ensure_database_exists};
