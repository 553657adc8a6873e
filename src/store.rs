//! Catalog table DDL and database bootstrap. Both run at startup so a fresh
//! PostgreSQL instance is usable without manual setup.

use crate::error::AppError;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

const CATALOG_DDL: &str = "
    CREATE TABLE IF NOT EXISTS auto (
        id BIGSERIAL PRIMARY KEY,
        marca TEXT NOT NULL,
        modello TEXT NOT NULL,
        anno_produzione INTEGER NOT NULL,
        prezzo NUMERIC NOT NULL,
        stato TEXT NOT NULL CHECK (stato IN ('DISPONIBILE', 'VENDUTA'))
    )
";

/// Create the `auto` table if it is missing.
pub async fn ensure_catalog_schema(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(CATALOG_DDL).execute(pool).await?;
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::Config(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await.map_err(AppError::Db)?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await
            .map_err(AppError::Db)?;
    if !exists.0 {
        let quoted = quote_ident(&db_name);
        sqlx::query(&format!("CREATE DATABASE {}", quoted))
            .execute(&mut conn)
            .await
            .map_err(AppError::Db)?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::Config("DATABASE_URL: no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_name_comes_from_the_url_path() {
        let (admin, name) =
            parse_db_name_from_url("postgres://user:pw@localhost:5432/catalogo_auto").unwrap();
        assert_eq!(admin, "postgres://user:pw@localhost:5432/postgres");
        assert_eq!(name, "catalogo_auto");
    }

    #[test]
    fn query_string_is_not_part_of_the_db_name() {
        let (_, name) =
            parse_db_name_from_url("postgres://localhost/catalogo_auto?sslmode=disable").unwrap();
        assert_eq!(name, "catalogo_auto");
    }
}
