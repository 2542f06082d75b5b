//! Work center reference data.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A named resource (machine, line or station) an operation line
/// executes on. Read-only reference data.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, Validate, PartialEq)]
pub struct WorkCenter {
    pub id: i64,
    #[validate(length(min = 1, max = 255, message = "Work center name must be between 1 and 255 characters"))]
    pub name: String,
}
