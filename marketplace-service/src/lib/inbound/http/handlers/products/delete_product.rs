use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::CatalogServicePort;
use crate::domain::user::models::Identity;
use crate::inbound::http::router::AppState;

pub async fn delete_product(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<u64>,
) -> Result<ApiSuccess<DeleteProductResponseData>, ApiError> {
    state
        .catalog_service
        .delete_product(&identity, ProductId(id))
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                DeleteProductResponseData {
                    message: "product deleted".to_string(),
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteProductResponseData {
    pub message: String,
}
