//! Bill-of-materials records and their derived costs.
//!
//! A BOM header identifies one version of a product's BOM; material and
//! operation lines carry the quantities, times and rates the cost
//! roll-up is computed from. All monetary and time arithmetic is done in
//! `Decimal` so that repeated aggregation of the same lines yields the
//! same result to the last digit.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use crate::work_center::WorkCenter;

/// One version of a product's bill of materials.
///
/// The store enforces no uniqueness of the active flag: several headers
/// for the same product may be active at once. Resolution breaks the tie
/// by version, then creation time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, Validate, PartialEq)]
pub struct BomHeader {
    pub id: i64,
    pub product_id: i64,
    #[validate(length(min = 1, max = 64, message = "BOM code must be between 1 and 64 characters"))]
    pub bom_code: String,
    #[validate(length(min = 1, max = 255, message = "BOM name must be between 1 and 255 characters"))]
    pub bom_name: String,
    #[validate(range(min = 1, message = "BOM version must be a positive integer"))]
    pub version: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// One material consumed by a BOM.
///
/// `material_id` may dangle: the referenced product can be removed after
/// the line was authored, and the line must still be read and costed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, Validate, PartialEq)]
pub struct BomMaterialLine {
    pub id: i64,
    pub bom_id: i64,
    pub material_id: i64,
    #[validate(custom = "validate_non_negative")]
    pub quantity: Decimal,
    #[validate(custom = "validate_non_negative")]
    pub unit_cost: Decimal,
}

impl BomMaterialLine {
    /// Quantity × unit cost.
    pub fn line_total(&self) -> Decimal {
        self.quantity * self.unit_cost
    }
}

/// One labor/machine step within a BOM, costed per hour.
///
/// Operations may share a sequence number (parallel or alternate steps);
/// the line id is the secondary ordering key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, Validate, PartialEq)]
pub struct BomOperationLine {
    pub id: i64,
    pub bom_id: i64,
    pub work_center_id: Option<i64>,
    pub sequence: i32,
    #[validate(custom = "validate_non_negative")]
    pub setup_minutes: Decimal,
    #[validate(custom = "validate_non_negative")]
    pub run_minutes: Decimal,
    #[validate(custom = "validate_non_negative")]
    pub cost_per_hour: Decimal,
}

impl BomOperationLine {
    /// Setup plus run time, in minutes.
    pub fn total_time(&self) -> Decimal {
        self.setup_minutes + self.run_minutes
    }

    /// Hourly rate applied to the total time.
    ///
    /// Evaluated as `total_time × cost_per_hour ÷ 60`: multiplying first
    /// keeps the quotient exact whenever the product is divisible by 60.
    pub fn operation_cost(&self) -> Decimal {
        self.total_time() * self.cost_per_hour / Decimal::from(60)
    }
}

/// Product fields a resolvable material reference is enriched with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolvedMaterial {
    pub code: String,
    pub name: String,
    pub unit: String,
}

/// A material line as read from the store, with its outer-joined
/// product. `material` is `None` when the reference dangles; the line is
/// still present and still contributes to the cost roll-up.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialLineDetail {
    pub line: BomMaterialLine,
    pub material: Option<ResolvedMaterial>,
}

/// An operation line as read from the store, with its outer-joined work
/// center.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationLineDetail {
    pub line: BomOperationLine,
    pub work_center: Option<WorkCenter>,
}

fn validate_non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::new("negative_value"));
    }
    Ok(())
}
