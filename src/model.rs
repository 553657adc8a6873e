//! Catalog domain types: the persisted `Auto` row, its sale status, the
//! validated draft, and the search/pagination value types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Sale status of a listed automobile. Stored and serialized as its
/// uppercase token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "TEXT", rename_all = "UPPERCASE")]
pub enum StatoAuto {
    Disponibile,
    Venduta,
}

impl StatoAuto {
    /// Token match is case-sensitive: only the exact uppercase forms are legal.
    pub fn parse(token: &str) -> Option<StatoAuto> {
        match token {
            "DISPONIBILE" => Some(StatoAuto::Disponibile),
            "VENDUTA" => Some(StatoAuto::Venduta),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatoAuto::Disponibile => "DISPONIBILE",
            StatoAuto::Venduta => "VENDUTA",
        }
    }
}

impl fmt::Display for StatoAuto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted catalog row. `id` is assigned by the database.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Auto {
    pub id: i64,
    pub marca: String,
    pub modello: String,
    pub anno_produzione: i32,
    pub prezzo: Decimal,
    pub stato: StatoAuto,
}

/// Validated, id-less draft of an `Auto`: the payload of an insert or of a
/// full-replace update.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAuto {
    pub marca: String,
    pub modello: String,
    pub anno_produzione: i32,
    pub prezzo: Decimal,
    pub stato: StatoAuto,
}

/// Optional search predicates; `None` means the filter is not applied.
/// Active filters are combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilter {
    pub marca: Option<String>,
    pub stato: Option<StatoAuto>,
    pub prezzo_min: Option<Decimal>,
    pub prezzo_max: Option<Decimal>,
}

/// Sortable fields of the catalog, named as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Marca,
    Modello,
    AnnoProduzione,
    Prezzo,
    Stato,
}

impl SortField {
    pub fn parse(name: &str) -> Option<SortField> {
        match name {
            "id" => Some(SortField::Id),
            "marca" => Some(SortField::Marca),
            "modello" => Some(SortField::Modello),
            "annoProduzione" => Some(SortField::AnnoProduzione),
            "prezzo" => Some(SortField::Prezzo),
            "stato" => Some(SortField::Stato),
            _ => None,
        }
    }

    /// Column the field sorts on.
    pub fn column(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Marca => "marca",
            SortField::Modello => "modello",
            SortField::AnnoProduzione => "anno_produzione",
            SortField::Prezzo => "prezzo",
            SortField::Stato => "stato",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDir::Asc => "ASC",
            SortDir::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDir,
}

impl Default for Sort {
    fn default() -> Self {
        Sort {
            field: SortField::Id,
            direction: SortDir::Asc,
        }
    }
}

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Page index (0-based), page size, and row order of a search request.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort: Sort,
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: Sort::default(),
        }
    }
}

impl PageRequest {
    // Saturates: u32::MAX * u32::MAX does not fit in i64, and a wrapped
    // negative offset would be rejected by Postgres.
    pub fn offset(&self) -> i64 {
        i64::from(self.page).saturating_mul(i64::from(self.size))
    }
}

/// One page of rows plus the totals a client needs to keep paging.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: i64,
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: i64) -> Self {
        let size = i64::from(request.size.max(1));
        let total_pages = ((total_elements + size - 1) / size) as u32;
        Page {
            content,
            page: request.page,
            size: request.size,
            total_elements,
            total_pages,
        }
    }
}
