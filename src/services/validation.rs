//! Validation of credit payloads.
//!
//! Turns a raw [`Payload`] into typed, invariant-respecting values. Fields
//! are checked in a fixed order (cliente, monto, tasa_interes, plazo,
//! fecha_otorgamiento) and only the first failure is reported.

use chrono::NaiveDate;

use crate::models::{
    credito::{CreditoParcial, NuevoCredito},
    payload::{FieldValue, Payload},
};

pub const CLIENTE: &str = "cliente";
pub const MONTO: &str = "monto";
pub const TASA_INTERES: &str = "tasa_interes";
pub const PLAZO: &str = "plazo";
pub const FECHA_OTORGAMIENTO: &str = "fecha_otorgamiento";

/// Writable fields in declaration order.
pub const CAMPOS: [&str; 5] = [CLIENTE, MONTO, TASA_INTERES, PLAZO, FECHA_OTORGAMIENTO];

const FECHA_FORMATO: &str = "%Y-%m-%d";

/// The first field of a payload that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate a payload that must carry every writable field.
///
/// Missing fields are reported before any per-field rule runs, in
/// declaration order.
pub fn validate_full(payload: &Payload) -> Result<NuevoCredito, ValidationError> {
    if let Some(campo) = CAMPOS.into_iter().find(|campo| !payload.contains(campo)) {
        return Err(missing(campo));
    }

    let parcial = validate_partial(payload)?;

    Ok(NuevoCredito {
        cliente: parcial.cliente.ok_or_else(|| missing(CLIENTE))?,
        monto: parcial.monto.ok_or_else(|| missing(MONTO))?,
        tasa_interes: parcial.tasa_interes.ok_or_else(|| missing(TASA_INTERES))?,
        plazo: parcial.plazo.ok_or_else(|| missing(PLAZO))?,
        fecha_otorgamiento: parcial
            .fecha_otorgamiento
            .ok_or_else(|| missing(FECHA_OTORGAMIENTO))?,
    })
}

/// Validate only the fields present in the payload.
pub fn validate_partial(payload: &Payload) -> Result<CreditoParcial, ValidationError> {
    // Struct fields are evaluated in order, which fixes the reporting order
    Ok(CreditoParcial {
        cliente: payload.get(CLIENTE).map(parse_cliente).transpose()?,
        monto: payload
            .get(MONTO)
            .map(|value| {
                parse_non_negative(
                    value,
                    MONTO,
                    "monto debe ser numérico",
                    "monto no puede ser negativo",
                )
            })
            .transpose()?,
        tasa_interes: payload
            .get(TASA_INTERES)
            .map(|value| {
                parse_non_negative(
                    value,
                    TASA_INTERES,
                    "tasa_interes debe ser numérica",
                    "tasa_interes no puede ser negativa",
                )
            })
            .transpose()?,
        plazo: payload.get(PLAZO).map(parse_plazo).transpose()?,
        fecha_otorgamiento: payload.get(FECHA_OTORGAMIENTO).map(parse_fecha).transpose()?,
    })
}

fn missing(campo: &'static str) -> ValidationError {
    ValidationError::new(campo, format!("Falta el campo obligatorio: {campo}"))
}

fn parse_cliente(value: &FieldValue) -> Result<String, ValidationError> {
    match value {
        FieldValue::Text(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        _ => Err(ValidationError::new(CLIENTE, "cliente inválido")),
    }
}

fn parse_non_negative(
    value: &FieldValue,
    field: &'static str,
    not_numeric: &str,
    negative: &str,
) -> Result<f64, ValidationError> {
    let number = to_f64(value).ok_or_else(|| ValidationError::new(field, not_numeric))?;
    if number < 0.0 {
        return Err(ValidationError::new(field, negative));
    }
    Ok(number)
}

fn parse_plazo(value: &FieldValue) -> Result<i64, ValidationError> {
    let plazo = to_i64(value).ok_or_else(|| ValidationError::new(PLAZO, "plazo debe ser entero"))?;
    if plazo <= 0 {
        return Err(ValidationError::new(
            PLAZO,
            "plazo debe ser un entero mayor a 0",
        ));
    }
    Ok(plazo)
}

fn parse_fecha(value: &FieldValue) -> Result<NaiveDate, ValidationError> {
    let invalid = || {
        ValidationError::new(
            FECHA_OTORGAMIENTO,
            "fecha_otorgamiento debe tener formato YYYY-MM-DD",
        )
    };

    let FieldValue::Text(text) = value else {
        return Err(invalid());
    };

    // Reject non-padded forms such as 2024-1-5
    NaiveDate::parse_from_str(text, FECHA_FORMATO)
        .ok()
        .filter(|date| date.format(FECHA_FORMATO).to_string() == *text)
        .ok_or_else(invalid)
}

/// Finite float from a JSON number or numeric text.
fn to_f64(value: &FieldValue) -> Option<f64> {
    let number = match value {
        FieldValue::Number(number) => number.as_f64()?,
        FieldValue::Text(text) => text.trim().parse::<f64>().ok()?,
        FieldValue::Null | FieldValue::Other => return None,
    };
    number.is_finite().then_some(number)
}

/// Integer from a JSON number (fractions truncated) or integer text.
fn to_i64(value: &FieldValue) -> Option<i64> {
    match value {
        FieldValue::Number(number) => number.as_i64().or_else(|| {
            let float = number.as_f64()?;
            (float.is_finite() && float.abs() < i64::MAX as f64).then(|| float.trunc() as i64)
        }),
        FieldValue::Text(text) => text.trim().parse::<i64>().ok(),
        FieldValue::Null | FieldValue::Other => None,
    }
}
