//! # Fabrica Core Domain Models
//!
//! Domain models for the Fabrica manufacturing master-data service. All
//! models serialize with serde and validate with the validator crate.
//!
//! ## Key Models
//!
//! - **Product**: a product master record (code, display name, unit of measure)
//! - **BomHeader**: one version of a product's bill of materials
//! - **BomMaterialLine** / **BomOperationLine**: the costed lines of a BOM
//! - **WorkCenter**: the resource an operation line executes on
//!
//! The `MaterialLineDetail` / `OperationLineDetail` read models carry the
//! outer-joined reference data explicitly: a dangling material or work
//! center reference is an absent enrichment, never a dropped line.

pub mod bom;
pub mod product;
pub mod work_center;

pub use bom::{
    BomHeader, BomMaterialLine, BomOperationLine, MaterialLineDetail, OperationLineDetail,
    ResolvedMaterial,
};
pub use product::Product;
pub use work_center::WorkCenter;
