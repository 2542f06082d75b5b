use axum::{routing::get, Router};

use crate::{handlers::*, AppState};

pub fn create_api_routes() -> Router<AppState> {
    Router::new()
        .route("/health/detailed", get(detailed_health_check))
        .route("/boms", get(list_boms))
        .route("/boms/preview", get(preview_resolved_bom))
        .route("/products", get(list_products))
        .route("/products/:id", get(get_product))
        .route("/work-centers", get(list_work_centers))
}
