use axum::http::{header, Method};
use axum::middleware;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::app_state::AppState;
use crate::system::middleware::request_logger::request_logger;

/// Маршруты API, статика фронтенда и общие слои
pub fn configure_routes(state: AppState, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    api_routes()
        .with_state(state)
        .route("/health", get(|| async { "ok" }))
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        // Справочники для формы правила комиссии
        .route("/api/catalog/sellers", get(handlers::catalog::list_sellers))
        .route(
            "/api/catalog/product-types",
            get(handlers::catalog::list_product_types),
        )
        .route(
            "/api/catalog/product-categories",
            get(handlers::catalog::list_product_categories),
        )
        .route(
            "/api/store/currencies",
            get(handlers::catalog::list_currencies),
        )
        // A001 Commission rule
        .route(
            "/api/commission/rules",
            post(handlers::a001_commission_rule::create),
        )
        // A002 Product attributes
        .route(
            "/api/products/:id/attributes",
            get(handlers::a002_product_attribute::get_attributes)
                .post(handlers::a002_product_attribute::save_attributes),
        )
        // A003 Inventory item
        .route(
            "/api/inventory-items/:id",
            get(handlers::a003_inventory_item::get_by_id),
        )
        .route(
            "/api/inventory-items/:id/attributes",
            post(handlers::a003_inventory_item::save_attributes),
        )
}
