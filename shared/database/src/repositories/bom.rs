//! BOM Repository
//!
//! Read-only access to BOM headers and their material/operation lines.
//! Line queries outer-join the referenced product or work center so a
//! dangling reference surfaces as an absent enrichment, never as a
//! dropped row.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use fabrica_models::{
    BomHeader, BomMaterialLine, BomOperationLine, MaterialLineDetail, OperationLineDetail,
    ResolvedMaterial, WorkCenter,
};

pub struct BomRepository {
    pool: PgPool,
}

impl BomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All active headers for a product, highest version first, then
    /// most recently created.
    pub async fn find_active_headers(&self, product_id: i64) -> Result<Vec<BomHeader>> {
        let rows: Vec<BomHeaderRow> = sqlx::query_as(
            r#"
            SELECT id, product_id, bom_code, bom_name, version, is_active, created_at
            FROM bom_header
            WHERE product_id = $1 AND is_active = TRUE
            ORDER BY version DESC, created_at DESC
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch active BOM headers")?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    /// Material lines for a header with their outer-joined product.
    pub async fn find_material_lines(&self, bom_id: i64) -> Result<Vec<MaterialLineDetail>> {
        let rows: Vec<MaterialLineRow> = sqlx::query_as(
            r#"
            SELECT m.id, m.bom_id, m.material_id, m.quantity, m.unit_cost,
                   p.code AS material_code, p.name AS material_name, p.unit AS material_unit
            FROM bom_materials m
            LEFT JOIN products p ON p.id = m.material_id
            WHERE m.bom_id = $1
            ORDER BY COALESCE(p.name, ''), m.id
            "#,
        )
        .bind(bom_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch BOM material lines")?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    /// Operation lines for a header with their outer-joined work center.
    pub async fn find_operation_lines(&self, bom_id: i64) -> Result<Vec<OperationLineDetail>> {
        let rows: Vec<OperationLineRow> = sqlx::query_as(
            r#"
            SELECT o.id, o.bom_id, o.work_center_id, o.sequence,
                   o.setup_minutes, o.run_minutes, o.cost_per_hour,
                   w.name AS work_center_name
            FROM bom_operations o
            LEFT JOIN work_centers w ON w.id = o.work_center_id
            WHERE o.bom_id = $1
            ORDER BY o.sequence, o.id
            "#,
        )
        .bind(bom_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch BOM operation lines")?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }
}

#[derive(Debug, FromRow)]
struct BomHeaderRow {
    id: i64,
    product_id: i64,
    bom_code: String,
    bom_name: String,
    version: i32,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl From<BomHeaderRow> for BomHeader {
    fn from(row: BomHeaderRow) -> Self {
        Self {
            id: row.id,
            product_id: row.product_id,
            bom_code: row.bom_code,
            bom_name: row.bom_name,
            version: row.version,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct MaterialLineRow {
    id: i64,
    bom_id: i64,
    material_id: i64,
    quantity: Decimal,
    unit_cost: Decimal,
    material_code: Option<String>,
    material_name: Option<String>,
    material_unit: Option<String>,
}

impl From<MaterialLineRow> for MaterialLineDetail {
    fn from(row: MaterialLineRow) -> Self {
        let material = match (row.material_code, row.material_name, row.material_unit) {
            (Some(code), Some(name), Some(unit)) => Some(ResolvedMaterial { code, name, unit }),
            _ => None,
        };

        Self {
            line: BomMaterialLine {
                id: row.id,
                bom_id: row.bom_id,
                material_id: row.material_id,
                quantity: row.quantity,
                unit_cost: row.unit_cost,
            },
            material,
        }
    }
}

#[derive(Debug, FromRow)]
struct OperationLineRow {
    id: i64,
    bom_id: i64,
    work_center_id: Option<i64>,
    sequence: i32,
    setup_minutes: Decimal,
    run_minutes: Decimal,
    cost_per_hour: Decimal,
    work_center_name: Option<String>,
}

impl From<OperationLineRow> for OperationLineDetail {
    fn from(row: OperationLineRow) -> Self {
        let work_center = match (row.work_center_id, &row.work_center_name) {
            (Some(id), Some(name)) => Some(WorkCenter {
                id,
                name: name.clone(),
            }),
            _ => None,
        };

        Self {
            line: BomOperationLine {
                id: row.id,
                bom_id: row.bom_id,
                work_center_id: row.work_center_id,
                sequence: row.sequence,
                setup_minutes: row.setup_minutes,
                run_minutes: row.run_minutes,
                cost_per_hour: row.cost_per_hour,
            },
            work_center,
        }
    }
}
