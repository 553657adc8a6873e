//! Catalog operations on top of the repository. Policy lives here: which
//! lookups are errors, how search filters are normalized, and what the
//! client-facing messages say.

use std::sync::Arc;

use crate::dto::{AutoResponse, PageResponse};
use crate::error::{AppError, AppResult};
use crate::model::{NewAuto, PageRequest, SearchFilter};
use crate::repository::AutoRepository;

pub const MSG_SEARCH_EMPTY: &str =
    "Nessuna auto trovata con i criteri di ricerca specificati.";

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Auto non trovata con ID: {id}"))
}

/// Catalog use cases. Cloning shares the underlying repository.
#[derive(Clone)]
pub struct AutoService {
    repo: Arc<dyn AutoRepository>,
}

impl AutoService {
    pub fn new(repo: Arc<dyn AutoRepository>) -> Self {
        AutoService { repo }
    }

    pub async fn find_all(&self) -> AppResult<Vec<AutoResponse>> {
        let autos = self.repo.find_all().await?;
        Ok(autos.into_iter().map(AutoResponse::from).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<AutoResponse> {
        let auto = self.repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
        Ok(auto.into())
    }

    pub async fn create(&self, draft: NewAuto) -> AppResult<AutoResponse> {
        let auto = self.repo.save(None, &draft).await?;
        tracing::info!(id = auto.id, marca = %auto.marca, "auto inserita nel catalogo");
        Ok(auto.into())
    }

    /// Full replace. The row must exist before anything is written.
    pub async fn update(&self, id: i64, draft: NewAuto) -> AppResult<AutoResponse> {
        self.repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
        let auto = self.repo.save(Some(id), &draft).await?;
        tracing::info!(id, "auto aggiornata");
        Ok(auto.into())
    }

    /// Removing an id that is not in the catalog is not an error.
    pub async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let deleted = self.repo.delete_by_id(id).await?;
        if deleted {
            tracing::info!(id, "auto rimossa dal catalogo");
        } else {
            tracing::debug!(id, "delete senza effetto, id assente");
        }
        Ok(())
    }

    /// Filtered, paged search. `marca` matches case-insensitively, so the
    /// value is folded here and compared against a folded column. A page
    /// with no rows is reported as not found rather than as an empty page.
    pub async fn search(
        &self,
        mut filter: SearchFilter,
        page: PageRequest,
    ) -> AppResult<PageResponse<AutoResponse>> {
        if let Some(marca) = &mut filter.marca {
            *marca = marca.to_lowercase();
        }
        let result = self.repo.search(&filter, &page).await?;
        if result.content.is_empty() {
            return Err(AppError::NotFound(MSG_SEARCH_EMPTY.to_string()));
        }
        Ok(result.into())
    }
}
