//! Wire shapes: the request body, the response projection, the search query
//! string, and the paginated-search envelope.

use crate::model::{Auto, Page, StatoAuto};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Incoming create/update body. Every field is optional at the serde level so
/// an omitted field surfaces as a per-field validation message instead of a
/// deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoRequest {
    pub marca: Option<String>,
    pub modello: Option<String>,
    pub anno_produzione: Option<i32>,
    pub prezzo: Option<Decimal>,
    pub stato: Option<String>,
}

/// Outgoing projection of a persisted row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoResponse {
    pub id: i64,
    pub marca: String,
    pub modello: String,
    pub anno_produzione: i32,
    pub prezzo: Decimal,
    pub stato: StatoAuto,
}

impl From<Auto> for AutoResponse {
    fn from(auto: Auto) -> Self {
        AutoResponse {
            id: auto.id,
            marca: auto.marca,
            modello: auto.modello,
            anno_produzione: auto.anno_produzione,
            prezzo: auto.prezzo,
            stato: auto.stato,
        }
    }
}

/// Query-string parameters of `GET /catalog/search`. An illegal `stato`
/// token fails deserialization and is rejected before the handler runs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub marca: Option<String>,
    pub prezzo_min: Option<Decimal>,
    pub prezzo_max: Option<Decimal>,
    pub stato: Option<StatoAuto>,
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Option<String>,
}

/// One page of search results plus the metadata a client needs to page on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: i64,
    pub total_pages: u32,
}

impl From<Page<Auto>> for PageResponse<AutoResponse> {
    fn from(page: Page<Auto>) -> Self {
        PageResponse {
            content: page.content.into_iter().map(AutoResponse::from).collect(),
            page: page.page,
            size: page.size,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
        }
    }
}
