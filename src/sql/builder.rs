//! Builds the parametrized search queries: one WHERE clause, composed from
//! the optional filters, shared by the page SELECT and the COUNT.

use crate::model::{PageRequest, SearchFilter};
use crate::sql::params::BindValue;

/// Columns of the `auto` table in SELECT order.
pub const COLUMNS: &str = "id, marca, modello, anno_produzione, prezzo, stato";

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> usize {
        let n = self.params.len() + 1;
        self.params.push(v);
        n
    }
}

/// Appends the AND-combined predicates for the active filters. The marca
/// value arrives already lowercased; the column is lowered in SQL so the
/// match is case-insensitive and exact.
fn push_filters(q: &mut QueryBuf, filter: &SearchFilter) {
    let mut parts = Vec::new();
    if let Some(marca) = &filter.marca {
        let n = q.push_param(BindValue::Text(marca.clone()));
        parts.push(format!("LOWER(marca) = ${}", n));
    }
    if let Some(stato) = filter.stato {
        let n = q.push_param(BindValue::Stato(stato));
        parts.push(format!("stato = ${}", n));
    }
    if let Some(min) = filter.prezzo_min {
        let n = q.push_param(BindValue::Money(min));
        parts.push(format!("prezzo >= ${}::numeric", n));
    }
    if let Some(max) = filter.prezzo_max {
        let n = q.push_param(BindValue::Money(max));
        parts.push(format!("prezzo <= ${}::numeric", n));
    }
    if !parts.is_empty() {
        q.sql.push_str(" WHERE ");
        q.sql.push_str(&parts.join(" AND "));
    }
}

/// Page query: filtered rows in the requested order, LIMIT/OFFSET from the
/// page index and size.
pub fn search_select(filter: &SearchFilter, page: &PageRequest) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("SELECT {} FROM auto", COLUMNS);
    push_filters(&mut q, filter);
    q.sql.push_str(&format!(
        " ORDER BY {} {} LIMIT {} OFFSET {}",
        page.sort.field.column(),
        page.sort.direction.as_sql(),
        page.size,
        page.offset()
    ));
    q
}

/// Count query over the same WHERE clause.
pub fn search_count(filter: &SearchFilter) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = "SELECT COUNT(*) FROM auto".to_string();
    push_filters(&mut q, filter);
    q
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Sort, SortDir, SortField, StatoAuto};
    use rust_decimal::Decimal;

    #[test]
    fn no_filters_selects_everything_ordered_by_id() {
        let q = search_select(&SearchFilter::default(), &PageRequest::default());
        assert_eq!(
            q.sql,
            "SELECT id, marca, modello, anno_produzione, prezzo, stato FROM auto \
             ORDER BY id ASC LIMIT 20 OFFSET 0"
        );
        assert!(q.params.is_empty());
    }

    #[test]
    fn active_filters_are_and_combined_in_order() {
        let filter = SearchFilter {
            marca: Some("fiat".into()),
            stato: Some(StatoAuto::Venduta),
            prezzo_min: Some(Decimal::from(1000)),
            prezzo_max: Some(Decimal::from(9000)),
        };
        let q = search_select(&filter, &PageRequest::default());
        assert!(q.sql.contains(
            "WHERE LOWER(marca) = $1 AND stato = $2 \
             AND prezzo >= $3::numeric AND prezzo <= $4::numeric"
        ));
        assert_eq!(
            q.params,
            vec![
                BindValue::Text("fiat".into()),
                BindValue::Stato(StatoAuto::Venduta),
                BindValue::Money(Decimal::from(1000)),
                BindValue::Money(Decimal::from(9000)),
            ]
        );
    }

    #[test]
    fn placeholder_numbering_follows_active_filters_only() {
        let filter = SearchFilter {
            prezzo_max: Some(Decimal::from(9000)),
            ..SearchFilter::default()
        };
        let q = search_select(&filter, &PageRequest::default());
        assert!(q.sql.contains("WHERE prezzo <= $1::numeric"));
        assert_eq!(q.params.len(), 1);
    }

    #[test]
    fn count_shares_the_where_clause() {
        let filter = SearchFilter {
            marca: Some("fiat".into()),
            ..SearchFilter::default()
        };
        let q = search_count(&filter);
        assert_eq!(q.sql, "SELECT COUNT(*) FROM auto WHERE LOWER(marca) = $1");
        assert_eq!(q.params, vec![BindValue::Text("fiat".into())]);
    }

    #[test]
    fn pagination_and_sort_shape_the_tail() {
        let page = PageRequest {
            page: 2,
            size: 10,
            sort: Sort {
                field: SortField::Prezzo,
                direction: SortDir::Desc,
            },
        };
        let q = search_select(&SearchFilter::default(), &page);
        assert!(q.sql.ends_with("ORDER BY prezzo DESC LIMIT 10 OFFSET 20"));
    }
}
