//! Catalog routes. The literal `/catalog/search` segment takes precedence
//! over `/catalog/:id`, so `search` is never parsed as an id.

use crate::handlers::catalog::{
    create_auto, delete_auto, get_auto, list_autos, search_autos, update_auto,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn catalog_routes(state: AppState) -> Router {
    Router::new()
        .route("/catalog", get(list_autos).post(create_auto))
        .route("/catalog/search", get(search_autos))
        .route(
            "/catalog/:id",
            get(get_auto).put(update_auto).delete(delete_auto),
        )
        .with_state(state)
}
