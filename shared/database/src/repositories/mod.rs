pub mod bom;
pub mod product;
pub mod work_center;

pub use bom::BomRepository;
pub use product::ProductRepository;
pub use work_center::WorkCenterRepository;
