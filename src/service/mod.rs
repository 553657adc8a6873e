//! AutoService: catalog use cases plus request validation.

mod catalog;
mod validation;
pub use catalog::{AutoService, MSG_SEARCH_EMPTY};
pub use validation::{validate_request, MIN_ANNO_PRODUZIONE};
