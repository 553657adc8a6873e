//! Persistence port for the catalog and its PostgreSQL adapter.

use crate::error::AppError;
use crate::model::{Auto, NewAuto, Page, PageRequest, SearchFilter};
use crate::sql::{search_count, search_select, COLUMNS};
use async_trait::async_trait;
use sqlx::PgPool;

/// Data access used by the catalog service. Object-safe so the service can
/// be exercised against an in-memory double.
#[async_trait]
pub trait AutoRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Auto>, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Auto>, AppError>;
    /// Insert when `id` is `None`, full overwrite of the matching row otherwise.
    async fn save(&self, id: Option<i64>, draft: &NewAuto) -> Result<Auto, AppError>;
    /// Reports whether a row was removed. Removing an absent id is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;
    async fn search(
        &self,
        filter: &SearchFilter,
        page: &PageRequest,
    ) -> Result<Page<Auto>, AppError>;
}

pub struct PgAutoRepository {
    pool: PgPool,
}

impl PgAutoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AutoRepository for PgAutoRepository {
    async fn find_all(&self) -> Result<Vec<Auto>, AppError> {
        let sql = format!("SELECT {} FROM auto ORDER BY id", COLUMNS);
        let autos = sqlx::query_as::<_, Auto>(&sql).fetch_all(&self.pool).await?;
        Ok(autos)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Auto>, AppError> {
        let sql = format!("SELECT {} FROM auto WHERE id = $1", COLUMNS);
        let auto = sqlx::query_as::<_, Auto>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(auto)
    }

    async fn save(&self, id: Option<i64>, draft: &NewAuto) -> Result<Auto, AppError> {
        let auto = match id {
            None => {
                let sql = format!(
                    "INSERT INTO auto (marca, modello, anno_produzione, prezzo, stato) \
                     VALUES ($1, $2, $3, $4, $5) RETURNING {}",
                    COLUMNS
                );
                tracing::debug!(sql = %sql, "insert auto");
                sqlx::query_as::<_, Auto>(&sql)
                    .bind(&draft.marca)
                    .bind(&draft.modello)
                    .bind(draft.anno_produzione)
                    .bind(draft.prezzo)
                    .bind(draft.stato)
                    .fetch_one(&self.pool)
                    .await?
            }
            Some(id) => {
                let sql = format!(
                    "UPDATE auto SET marca = $1, modello = $2, anno_produzione = $3, \
                     prezzo = $4, stato = $5 WHERE id = $6 RETURNING {}",
                    COLUMNS
                );
                tracing::debug!(sql = %sql, id, "overwrite auto");
                sqlx::query_as::<_, Auto>(&sql)
                    .bind(&draft.marca)
                    .bind(&draft.modello)
                    .bind(draft.anno_produzione)
                    .bind(draft.prezzo)
                    .bind(draft.stato)
                    .bind(id)
                    .fetch_one(&self.pool)
                    .await?
            }
        };
        Ok(auto)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM auto WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn search(
        &self,
        filter: &SearchFilter,
        page: &PageRequest,
    ) -> Result<Page<Auto>, AppError> {
        let count_q = search_count(filter);
        tracing::debug!(sql = %count_q.sql, "search count");
        let mut count = sqlx::query_as::<_, (i64,)>(&count_q.sql);
        for param in &count_q.params {
            count = count.bind(param.clone());
        }
        let (total_elements,) = count.fetch_one(&self.pool).await?;

        let select_q = search_select(filter, page);
        tracing::debug!(sql = %select_q.sql, "search select");
        let mut select = sqlx::query_as::<_, Auto>(&select_q.sql);
        for param in &select_q.params {
            select = select.bind(param.clone());
        }
        let content = select.fetch_all(&self.pool).await?;

        Ok(Page::new(content, page, total_elements))
    }
}
