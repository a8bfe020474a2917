use axum::{
    extract::{Path, State},
    Json,
};
use contracts::domain::a003_supplier_item_stock::{
    RepointItemDto, StockAmountDto, SupplierItemStock, SupplierItemStockDto,
};

use super::ApiError;
use crate::domain::a003_supplier_item_stock;
use crate::shared::data::db::Store;

/// GET /api/supplier_item_stock
pub async fn list_all(
    State(store): State<Store>,
) -> Result<Json<Vec<SupplierItemStock>>, ApiError> {
    Ok(Json(a003_supplier_item_stock::service::list_all(&store).await?))
}

/// GET /api/supplier_item_stock/:id
pub async fn get_by_id(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<SupplierItemStock>, ApiError> {
    Ok(Json(
        a003_supplier_item_stock::service::get_by_id(&store, &id).await?,
    ))
}

/// POST /api/supplier_item_stock
pub async fn create(
    State(store): State<Store>,
    Json(dto): Json<SupplierItemStockDto>,
) -> Result<Json<SupplierItemStock>, ApiError> {
    Ok(Json(
        a003_supplier_item_stock::service::create(&store, dto).await?,
    ))
}

/// POST /api/supplier_item_stock/:id/item
pub async fn repoint_item(
    State(store): State<Store>,
    Path(id): Path<String>,
    Json(dto): Json<RepointItemDto>,
) -> Result<Json<SupplierItemStock>, ApiError> {
    Ok(Json(
        a003_supplier_item_stock::service::repoint_item(&store, &id, dto.item_id).await?,
    ))
}

/// POST /api/supplier_item_stock/:id/increase
pub async fn increase(
    State(store): State<Store>,
    Path(id): Path<String>,
    Json(dto): Json<StockAmountDto>,
) -> Result<Json<SupplierItemStock>, ApiError> {
    Ok(Json(
        a003_supplier_item_stock::service::increase(&store, &id, &dto.amount).await?,
    ))
}

/// POST /api/supplier_item_stock/:id/decrease
pub async fn decrease(
    State(store): State<Store>,
    Path(id): Path<String>,
    Json(dto): Json<StockAmountDto>,
) -> Result<Json<SupplierItemStock>, ApiError> {
    Ok(Json(
        a003_supplier_item_stock::service::decrease(&store, &id, &dto.amount).await?,
    ))
}

/// DELETE /api/supplier_item_stock/:id
pub async fn delete(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<SupplierItemStock>, ApiError> {
    Ok(Json(
        a003_supplier_item_stock::service::delete(&store, &id).await?,
    ))
}
