//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! de formularios y conversión de tipos.

use chrono::NaiveDate;
use validator::ValidationError;

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Fecha de un campo informativo; si no es válida se ignora
pub fn parse_form_date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(|v| validate_date(v).ok())
}

/// Validar que un string no esté vacío (campo requerido del formulario)
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some("This field is required".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date() {
        assert_eq!(
            validate_date("2026-10-14").ok(),
            NaiveDate::from_ymd_opt(2026, 10, 14)
        );
        assert!(validate_date("14/10/2026").is_err());
    }

    #[test]
    fn test_parse_form_date_ignores_garbage() {
        assert_eq!(parse_form_date(Some("tomorrow")), None);
        assert_eq!(parse_form_date(None), None);
        assert!(parse_form_date(Some(" 2026-12-24 ")).is_some());
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("secret").is_ok());
    }
}
