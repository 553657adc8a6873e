//! Request validation. Every rule is checked in one pass and all failing
//! fields are reported together, keyed by wire field name.

use crate::dto::AutoRequest;
use crate::error::FieldError;
use crate::model::{NewAuto, StatoAuto};
use rust_decimal::Decimal;

/// Oldest production year the catalog accepts.
pub const MIN_ANNO_PRODUZIONE: i32 = 1900;

pub const MSG_MARCA_REQUIRED: &str = "La marca è obbligatoria";
pub const MSG_MODELLO_REQUIRED: &str = "Il modello è obbligatorio";
pub const MSG_ANNO_MIN: &str = "L'anno di produzione deve essere maggiore di 1900";
pub const MSG_PREZZO_REQUIRED: &str = "Il prezzo è obbligatorio";
pub const MSG_PREZZO_MIN: &str = "Il prezzo deve essere maggiore o uguale a 0";
pub const MSG_STATO_REQUIRED: &str = "Lo stato è obbligatorio";
pub const MSG_STATO_TOKEN: &str = "Lo stato deve essere 'DISPONIBILE' o 'VENDUTA'";

/// Checks every field of `req` and hands back either the typed draft or the
/// full list of violations, one per failing field. A missing field fails its
/// own rule; it never aborts the walk.
pub fn validate_request(req: &AutoRequest) -> Result<NewAuto, Vec<FieldError>> {
    let mut errors = Vec::new();

    let marca = match &req.marca {
        Some(m) if !m.trim().is_empty() => Some(m.clone()),
        _ => {
            errors.push(FieldError {
                field: "marca",
                message: MSG_MARCA_REQUIRED,
            });
            None
        }
    };

    let modello = match &req.modello {
        Some(m) if !m.trim().is_empty() => Some(m.clone()),
        _ => {
            errors.push(FieldError {
                field: "modello",
                message: MSG_MODELLO_REQUIRED,
            });
            None
        }
    };

    let anno_produzione = match req.anno_produzione {
        Some(anno) if anno >= MIN_ANNO_PRODUZIONE => Some(anno),
        _ => {
            errors.push(FieldError {
                field: "annoProduzione",
                message: MSG_ANNO_MIN,
            });
            None
        }
    };

    let prezzo = match req.prezzo {
        Some(p) if p >= Decimal::ZERO => Some(p),
        Some(_) => {
            errors.push(FieldError {
                field: "prezzo",
                message: MSG_PREZZO_MIN,
            });
            None
        }
        None => {
            errors.push(FieldError {
                field: "prezzo",
                message: MSG_PREZZO_REQUIRED,
            });
            None
        }
    };

    let stato = match req.stato.as_deref() {
        Some(token) => match StatoAuto::parse(token) {
            Some(stato) => Some(stato),
            None => {
                errors.push(FieldError {
                    field: "stato",
                    message: MSG_STATO_TOKEN,
                });
                None
            }
        },
        None => {
            errors.push(FieldError {
                field: "stato",
                message: MSG_STATO_REQUIRED,
            });
            None
        }
    };

    match (marca, modello, anno_produzione, prezzo, stato) {
        (Some(marca), Some(modello), Some(anno_produzione), Some(prezzo), Some(stato)) => {
            Ok(NewAuto {
                marca,
                modello,
                anno_produzione,
                prezzo,
                stato,
            })
        }
        _ => Err(errors),
    }
}
