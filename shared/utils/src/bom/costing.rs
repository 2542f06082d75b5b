//! Cost Aggregator
//!
//! Rolls a BOM's material and operation lines up into per-line and total
//! costs. Pure arithmetic over already-loaded lines; all computation is
//! in `Decimal`.

use fabrica_models::{MaterialLineDetail, OperationLineDetail, ResolvedMaterial};
use rust_decimal::Decimal;

/// One material line of a cost sheet. `material` stays `None` for a
/// dangling reference; the line still carries its cost.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialCostLine {
    pub id: i64,
    pub material_id: i64,
    pub material: Option<ResolvedMaterial>,
    pub quantity: Decimal,
    pub unit_cost: Decimal,
    pub total_cost: Decimal,
}

/// One operation line of a cost sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationCostLine {
    pub id: i64,
    pub work_center_id: Option<i64>,
    pub work_center_name: Option<String>,
    pub sequence: i32,
    pub setup_minutes: Decimal,
    pub run_minutes: Decimal,
    pub total_time: Decimal,
    pub cost_per_hour: Decimal,
    pub operation_cost: Decimal,
}

/// Cost sheet totals. An empty line set totals zero, never an error.
#[derive(Debug, Clone, PartialEq)]
pub struct BomCostTotals {
    pub material_cost: Decimal,
    pub operation_cost: Decimal,
    pub total_cost: Decimal,
}

/// A fully costed BOM: deterministically ordered lines plus totals.
#[derive(Debug, Clone, PartialEq)]
pub struct BomCostSheet {
    pub materials: Vec<MaterialCostLine>,
    pub operations: Vec<OperationCostLine>,
    pub totals: BomCostTotals,
}

/// Aggregates the cost of one BOM from its lines.
#[derive(Debug, Default)]
pub struct CostAggregator;

impl CostAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Cost the given lines. Materials are ordered by resolved product
    /// name (a dangling reference keys as the empty string and sorts
    /// first), with the line id as secondary key; operations by sequence
    /// number, then line id.
    pub fn aggregate(
        &self,
        materials: Vec<MaterialLineDetail>,
        operations: Vec<OperationLineDetail>,
    ) -> BomCostSheet {
        let mut materials: Vec<MaterialCostLine> =
            materials.into_iter().map(material_cost_line).collect();
        materials.sort_by(|a, b| {
            let a_key = a.material.as_ref().map(|m| m.name.as_str()).unwrap_or("");
            let b_key = b.material.as_ref().map(|m| m.name.as_str()).unwrap_or("");
            a_key.cmp(b_key).then(a.id.cmp(&b.id))
        });

        let mut operations: Vec<OperationCostLine> =
            operations.into_iter().map(operation_cost_line).collect();
        operations.sort_by_key(|op| (op.sequence, op.id));

        let material_cost: Decimal = materials.iter().map(|line| line.total_cost).sum();
        let operation_cost: Decimal = operations.iter().map(|line| line.operation_cost).sum();

        BomCostSheet {
            materials,
            operations,
            totals: BomCostTotals {
                material_cost,
                operation_cost,
                total_cost: material_cost + operation_cost,
            },
        }
    }
}

fn material_cost_line(detail: MaterialLineDetail) -> MaterialCostLine {
    let total_cost = detail.line.line_total();
    MaterialCostLine {
        id: detail.line.id,
        material_id: detail.line.material_id,
        material: detail.material,
        quantity: detail.line.quantity,
        unit_cost: detail.line.unit_cost,
        total_cost,
    }
}

fn operation_cost_line(detail: OperationLineDetail) -> OperationCostLine {
    let total_time = detail.line.total_time();
    let operation_cost = detail.line.operation_cost();
    OperationCostLine {
        id: detail.line.id,
        work_center_id: detail.line.work_center_id,
        work_center_name: detail.work_center.map(|wc| wc.name),
        sequence: detail.line.sequence,
        setup_minutes: detail.line.setup_minutes,
        run_minutes: detail.line.run_minutes,
        total_time,
        cost_per_hour: detail.line.cost_per_hour,
        operation_cost,
    }
}
