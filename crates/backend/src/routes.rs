use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::shared::data::db::Store;

/// Конфигурация всех роутов приложения
pub fn configure_routes(store: Store) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Item handlers
        .route(
            "/api/item",
            get(handlers::a001_item::list_all).post(handlers::a001_item::create),
        )
        .route(
            "/api/item/:id",
            get(handlers::a001_item::get_by_id)
                .put(handlers::a001_item::update)
                .delete(handlers::a001_item::delete),
        )
        // A002 Supplier handlers
        .route(
            "/api/supplier",
            get(handlers::a002_supplier::list_all).post(handlers::a002_supplier::create),
        )
        .route(
            "/api/supplier/:id",
            get(handlers::a002_supplier::get_by_id)
                .put(handlers::a002_supplier::update)
                .delete(handlers::a002_supplier::delete),
        )
        // A003 Supplier item stock handlers
        .route(
            "/api/supplier_item_stock",
            get(handlers::a003_supplier_item_stock::list_all)
                .post(handlers::a003_supplier_item_stock::create),
        )
        .route(
            "/api/supplier_item_stock/:id",
            get(handlers::a003_supplier_item_stock::get_by_id)
                .delete(handlers::a003_supplier_item_stock::delete),
        )
        .route(
            "/api/supplier_item_stock/:id/item",
            post(handlers::a003_supplier_item_stock::repoint_item),
        )
        .route(
            "/api/supplier_item_stock/:id/increase",
            post(handlers::a003_supplier_item_stock::increase),
        )
        .route(
            "/api/supplier_item_stock/:id/decrease",
            post(handlers::a003_supplier_item_stock::decrease),
        )
        .with_state(store)
}
