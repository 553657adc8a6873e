//! HTTP handlers for the catalog routes. Each handler stays thin: decode,
//! validate, delegate to the service, encode.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::dto::{AutoRequest, AutoResponse, PageResponse, SearchQuery};
use crate::error::{AppError, AppResult};
use crate::model::{NewAuto, PageRequest, SearchFilter, Sort, SortDir, SortField, DEFAULT_PAGE_SIZE};
use crate::service::validate_request;
use crate::state::AppState;

// ---- GET /catalog ----

pub async fn list_autos(State(state): State<AppState>) -> AppResult<Json<Vec<AutoResponse>>> {
    let autos = state.service.find_all().await?;
    Ok(Json(autos))
}

// ---- GET /catalog/:id ----

pub async fn get_auto(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<AutoResponse>> {
    let auto = state.service.find_by_id(id).await?;
    Ok(Json(auto))
}

// ---- POST /catalog ----

pub async fn create_auto(
    State(state): State<AppState>,
    body: Result<Json<AutoRequest>, JsonRejection>,
) -> AppResult<Json<AutoResponse>> {
    let draft = validate_body(body)?;
    let created = state.service.create(draft).await?;
    Ok(Json(created))
}

// ---- PUT /catalog/:id ----

/// Full replace. The body is validated before the row is looked up, so an
/// invalid payload for a missing id still answers 400.
pub async fn update_auto(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<AutoRequest>, JsonRejection>,
) -> AppResult<Json<AutoResponse>> {
    let draft = validate_body(body)?;
    let updated = state.service.update(id, draft).await?;
    Ok(Json(updated))
}

// ---- DELETE /catalog/:id ----

pub async fn delete_auto(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<StatusCode> {
    state.service.delete_by_id(id).await?;
    Ok(StatusCode::OK)
}

// ---- GET /catalog/search ----

pub async fn search_autos(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<PageResponse<AutoResponse>>> {
    let page = page_request(&query)?;
    let filter = SearchFilter {
        marca: query.marca,
        stato: query.stato,
        prezzo_min: query.prezzo_min,
        prezzo_max: query.prezzo_max,
    };
    let result = state.service.search(filter, page).await?;
    Ok(Json(result))
}

/// A body axum cannot deserialize (malformed JSON, mistyped field) answers
/// 400, the same class as a failed field check.
fn validate_body(body: Result<Json<AutoRequest>, JsonRejection>) -> AppResult<NewAuto> {
    let Json(body) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    validate_request(&body).map_err(AppError::Validation)
}

fn page_request(query: &SearchQuery) -> AppResult<PageRequest> {
    let size = query.size.unwrap_or(DEFAULT_PAGE_SIZE);
    if size == 0 {
        return Err(AppError::BadRequest(
            "La dimensione della pagina deve essere maggiore di 0".to_string(),
        ));
    }
    let sort = match query.sort.as_deref() {
        Some(raw) => parse_sort(raw)?,
        None => Sort::default(),
    };
    Ok(PageRequest {
        page: query.page.unwrap_or(0),
        size,
        sort,
    })
}

/// `sort=campo` or `sort=campo,direzione`. The field must be one of the
/// sortable columns; the direction defaults to ascending.
fn parse_sort(raw: &str) -> AppResult<Sort> {
    let (field_raw, dir_raw) = match raw.split_once(',') {
        Some((field, dir)) => (field.trim(), Some(dir.trim())),
        None => (raw.trim(), None),
    };
    let field = SortField::parse(field_raw).ok_or_else(|| {
        AppError::BadRequest(format!("Campo di ordinamento non valido: '{field_raw}'"))
    })?;
    let direction = match dir_raw {
        None | Some("") => SortDir::Asc,
        Some(dir) if dir.eq_ignore_ascii_case("asc") => SortDir::Asc,
        Some(dir) if dir.eq_ignore_ascii_case("desc") => SortDir::Desc,
        Some(dir) => {
            return Err(AppError::BadRequest(format!(
                "Direzione di ordinamento non valida: '{dir}'"
            )))
        }
    };
    Ok(Sort { field, direction })
}
