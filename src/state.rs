//! Shared application state handed to every handler.

use crate::service::AutoService;
use sqlx::PgPool;

/// Cloned per request by the router. The pool is kept alongside the service
/// for the readiness probe.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub service: AutoService,
}

impl AppState {
    pub fn new(pool: PgPool, service: AutoService) -> Self {
        AppState { pool, service }
    }
}
