//! Runtime configuration loaded from environment variables.

use crate::error::AppError;

/// Server and database settings.
///
/// All fields have defaults suitable for local development.
///
/// | Env Var                    | Default                              |
/// |----------------------------|--------------------------------------|
/// | `DATABASE_URL`             | `postgres://localhost/catalogo_auto` |
/// | `HOST`                     | `0.0.0.0`                            |
/// | `PORT`                     | `3000`                               |
/// | `DATABASE_MAX_CONNECTIONS` | `5`                                  |
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/catalogo_auto".into());
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = parse_var("PORT", 3000)?;
        let max_connections = parse_var("DATABASE_MAX_CONNECTIONS", 5)?;
        Ok(AppConfig {
            database_url,
            host,
            port,
            max_connections,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::Config(format!("{name} is not a valid value: '{raw}'"))),
        Err(_) => Ok(default),
    }
}
