//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Fixed body for unexpected failures; internals are never exposed.
pub const INTERNAL_ERROR_BODY: &str = "Errore interno del server";

/// One field validation failure, keyed by the wire field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("config: {0}")]
    Config(String),
    #[error("{0}")]
    NotFound(String),
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            AppError::Validation(errors) => {
                let mut body = serde_json::Map::new();
                for e in errors {
                    body.insert(e.field.to_string(), e.message.into());
                }
                (StatusCode::BAD_REQUEST, Json(serde_json::Value::Object(body))).into_response()
            }
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            AppError::Db(sqlx::Error::RowNotFound) => {
                (StatusCode::NOT_FOUND, "Auto non trovata".to_string()).into_response()
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "unhandled database error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
            }
            AppError::Config(message) => {
                tracing::error!(error = %message, "configuration error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn not_found_maps_to_404_with_message() {
        let response = AppError::NotFound("Auto non trovata con ID: 7".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let response = AppError::BadRequest("parametro non valido".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn row_not_found_maps_to_404_and_other_db_errors_to_500() {
        let response = AppError::Db(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::Db(sqlx::Error::PoolClosed).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn validation_body_maps_field_to_message() {
        let response = AppError::Validation(vec![
            FieldError {
                field: "marca",
                message: "La marca è obbligatoria",
            },
            FieldError {
                field: "prezzo",
                message: "Il prezzo deve essere maggiore o uguale a 0",
            },
        ])
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["marca"], "La marca è obbligatoria");
        assert_eq!(json["prezzo"], "Il prezzo deve essere maggiore o uguale a 0");
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unexpected_errors_never_leak_detail() {
        let response = AppError::Db(sqlx::Error::WorkerCrashed).into_response();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(bytes.as_ref(), INTERNAL_ERROR_BODY.as_bytes());
    }
}
