use crate::error::{FabricaError, FabricaResult};
use validator::{Validate, ValidationErrors};

pub fn validate_model<T: Validate>(model: &T) -> FabricaResult<()> {
    match model.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_messages = format_validation_errors(&errors);
            Err(FabricaError::invalid_argument("model", error_messages))
        }
    }
}

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = match &error.code {
                std::borrow::Cow::Borrowed("length") => {
                    format!("Length validation failed for field '{}'", field)
                }
                std::borrow::Cow::Borrowed("range") => {
                    format!("Value out of range for field '{}'", field)
                }
                std::borrow::Cow::Borrowed("negative_value") => {
                    format!("Field '{}' must not be negative", field)
                }
                std::borrow::Cow::Borrowed("required") => {
                    format!("Field '{}' is required", field)
                }
                _ => format!("Validation failed for field '{}': {}", field, error.code),
            };
            messages.push(message);
        }
    }

    messages.join(", ")
}

/// Boundary check for the `productId` query parameter. A missing, zero
/// or negative id is rejected before any store access.
pub fn validate_product_id(product_id: Option<i64>) -> FabricaResult<i64> {
    match product_id {
        None => Err(FabricaError::invalid_argument(
            "productId",
            "productId is required",
        )),
        Some(id) if id <= 0 => Err(FabricaError::invalid_argument(
            "productId",
            format!("productId must be a positive integer, got {}", id),
        )),
        Some(id) => Ok(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use fabrica_models::BomHeader;

    #[test]
    fn test_validate_model_folds_field_errors_into_one_message() {
        let header = BomHeader {
            id: 1,
            product_id: 1,
            bom_code: "".to_string(),
            bom_name: "Widget assembly".to_string(),
            version: 0,
            is_active: true,
            created_at: Utc::now(),
        };

        let err = validate_model(&header).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ARGUMENT");

        let message = err.public_message();
        assert!(message.contains("bom_code"));
        assert!(message.contains("version"));
    }

    #[test]
    fn test_validate_product_id_positive() {
        assert_eq!(validate_product_id(Some(42)).unwrap(), 42);
        assert_eq!(validate_product_id(Some(1)).unwrap(), 1);
    }

    #[test]
    fn test_validate_product_id_zero() {
        let err = validate_product_id(Some(0)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_validate_product_id_negative() {
        let err = validate_product_id(Some(-5)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_validate_product_id_missing() {
        let err = validate_product_id(None).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ARGUMENT");
        assert!(err.public_message().contains("required"));
    }
}
