//! Property tests for the cost roll-up.

use proptest::prelude::*;
use rust_decimal::Decimal;

use fabrica_models::{
    BomMaterialLine, BomOperationLine, MaterialLineDetail, OperationLineDetail, ResolvedMaterial,
};

use super::costing::CostAggregator;

fn money() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000, 0u32..=4).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn material_lines() -> impl Strategy<Value = Vec<MaterialLineDetail>> {
    proptest::collection::vec(
        (money(), money(), proptest::option::of("[A-Za-z][A-Za-z ]{0,19}")),
        0..8,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (quantity, unit_cost, name))| {
                let id = i as i64 + 1;
                MaterialLineDetail {
                    line: BomMaterialLine {
                        id,
                        bom_id: 1,
                        material_id: id + 100,
                        quantity,
                        unit_cost,
                    },
                    material: name.map(|name| ResolvedMaterial {
                        code: format!("P-{:03}", id),
                        name,
                        unit: "pcs".to_string(),
                    }),
                }
            })
            .collect::<Vec<_>>()
    })
}

fn operation_lines() -> impl Strategy<Value = Vec<OperationLineDetail>> {
    proptest::collection::vec((0i32..50, money(), money(), money()), 0..8).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (sequence, setup, run, rate))| {
                let id = i as i64 + 1;
                OperationLineDetail {
                    line: BomOperationLine {
                        id,
                        bom_id: 1,
                        work_center_id: None,
                        sequence,
                        setup_minutes: setup,
                        run_minutes: run,
                        cost_per_hour: rate,
                    },
                    work_center: None,
                }
            })
            .collect::<Vec<_>>()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// material_cost is exactly the sum of quantity × unit_cost over the
    /// input lines, and total_cost is exactly the sum of the two
    /// sub-totals.
    #[test]
    fn prop_totals_are_sums_of_line_costs(
        materials in material_lines(),
        operations in operation_lines(),
    ) {
        let sheet = CostAggregator::new().aggregate(materials.clone(), operations);

        let material_cost: Decimal = materials.iter().map(|d| d.line.line_total()).sum();
        let operation_cost: Decimal = sheet.operations.iter().map(|op| op.operation_cost).sum();

        prop_assert_eq!(sheet.totals.material_cost, material_cost);
        prop_assert_eq!(sheet.totals.operation_cost, operation_cost);
        prop_assert_eq!(sheet.totals.total_cost, material_cost + operation_cost);
    }

    /// Every input line appears on the sheet, dangling references
    /// included.
    #[test]
    fn prop_no_line_is_dropped(
        materials in material_lines(),
        operations in operation_lines(),
    ) {
        let sheet = CostAggregator::new().aggregate(materials.clone(), operations.clone());
        prop_assert_eq!(sheet.materials.len(), materials.len());
        prop_assert_eq!(sheet.operations.len(), operations.len());
    }

    /// The sheet does not depend on the order rows were read in.
    #[test]
    fn prop_row_order_does_not_change_the_sheet(
        (materials, shuffled_materials) in material_lines()
            .prop_flat_map(|lines| (Just(lines.clone()), Just(lines).prop_shuffle())),
        (operations, shuffled_operations) in operation_lines()
            .prop_flat_map(|lines| (Just(lines.clone()), Just(lines).prop_shuffle())),
    ) {
        let aggregator = CostAggregator::new();
        let reference = aggregator.aggregate(materials, operations);
        let reordered = aggregator.aggregate(shuffled_materials, shuffled_operations);
        prop_assert_eq!(reference, reordered);
    }

    /// Aggregating the same input twice yields the same sheet to the
    /// last digit.
    #[test]
    fn prop_repeated_aggregation_is_identical(
        materials in material_lines(),
        operations in operation_lines(),
    ) {
        let aggregator = CostAggregator::new();
        let first = aggregator.aggregate(materials.clone(), operations.clone());
        let second = aggregator.aggregate(materials, operations);
        prop_assert_eq!(first, second);
    }
}
