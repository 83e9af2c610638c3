//! Utilidades de validación
//!
//! Validadores personalizados usados por los DTOs de entrada a través de
//! `#[validate(custom = "...")]`.

use rust_decimal::Decimal;
use validator::ValidationError;

/// Validar que un string no esté vacío
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// Validar que un importe sea estrictamente positivo
pub fn validate_positive_amount(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() || value.is_zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("actual".into(), &value.to_string());
        error.message = Some("must be greater than zero".into());
        return Err(error);
    }
    Ok(())
}
