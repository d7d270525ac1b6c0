use axum::extract::State;
use axum::http::StatusCode;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::ProductData;
use crate::domain::product::ports::CatalogServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ProductData>>, ApiError> {
    state
        .catalog_service
        .list_products()
        .await
        .map_err(ApiError::from)
        .map(|products| {
            let data: Vec<ProductData> = products.iter().map(ProductData::from).collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}
