//! Typed bind values for the hand-built search queries.

use crate::model::StatoAuto;
use rust_decimal::Decimal;
use sqlx::encode::{Encode, IsNull};
use sqlx::postgres::{PgTypeInfo, Postgres};
use sqlx::Database;

/// A value bound to one `$n` placeholder of a search query. Every variant is
/// sent as text; the builder casts money placeholders to `numeric` in SQL.
#[derive(Clone, Debug, PartialEq)]
pub enum BindValue {
    Text(String),
    Money(Decimal),
    Stato(StatoAuto),
}

impl<'q> Encode<'q, Postgres> for BindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            BindValue::Text(s) => {
                let s_ref: &str = s.as_str();
                <&str as Encode<Postgres>>::encode_by_ref(&s_ref, buf)
            }
            BindValue::Money(d) => {
                let text = d.to_string();
                <&str as Encode<Postgres>>::encode_by_ref(&text.as_str(), buf)
            }
            BindValue::Stato(stato) => {
                <&str as Encode<Postgres>>::encode_by_ref(&stato.as_str(), buf)
            }
        }
    }
}

impl sqlx::Type<Postgres> for BindValue {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("TEXT")
    }
}
