use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::common::InventoryError;
use serde_json::json;

/// Ошибка операции в виде HTTP ответа `{"error": "..."}`
#[derive(Debug)]
pub struct ApiError(pub InventoryError);

impl From<InventoryError> for ApiError {
    fn from(e: InventoryError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            InventoryError::NotFound { .. } => StatusCode::NOT_FOUND,
            InventoryError::InsufficientStock { .. } => StatusCode::CONFLICT,
            InventoryError::RecordTooLarge { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            InventoryError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::Quantity;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (InventoryError::not_found("item", "1"), StatusCode::NOT_FOUND),
            (
                InventoryError::InsufficientStock {
                    id: "1".into(),
                    requested: Quantity::from(2),
                    available: Quantity::from(1),
                },
                StatusCode::CONFLICT,
            ),
            (
                InventoryError::RecordTooLarge {
                    collection: "item",
                    size: 2000,
                    limit: 1024,
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                InventoryError::Storage("disk".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn test_response_status() {
        let response = ApiError(InventoryError::not_found("supplier", "x")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
