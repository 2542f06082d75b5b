//! Product master records.
//!
//! A product is both the item a BOM builds and the material a BOM line
//! consumes. This service never mutates product records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A product master record with its code, display name and unit of
/// measure.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, Validate, PartialEq)]
pub struct Product {
    pub id: i64,
    #[validate(length(min = 1, max = 64, message = "Product code must be between 1 and 64 characters"))]
    pub code: String,
    #[validate(length(min = 1, max = 255, message = "Product name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 16, message = "Unit of measure must be between 1 and 16 characters"))]
    pub unit: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
