use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::ProductData;
use crate::domain::product::models::Price;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::ProductName;
use crate::domain::product::models::UpdateProductCommand;
use crate::domain::product::ports::CatalogServicePort;
use crate::domain::user::models::Identity;
use crate::inbound::http::router::AppState;
use crate::product::errors::ProductError;

pub async fn update_product(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<u64>,
    Json(body): Json<UpdateProductRequestBody>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .catalog_service
        .update_product(&identity, ProductId(id), command)
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::OK, product.into()))
}

/// HTTP request body for updating a product (raw JSON)
///
/// Both fields optional; only provided fields are applied.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateProductRequestBody {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl UpdateProductRequestBody {
    fn try_into_command(self) -> Result<UpdateProductCommand, ProductError> {
        // Validation happens here - errors are automatically converted via #[from]
        let name = self.name.map(ProductName::new).transpose()?;
        let price = self.price.map(Price::new).transpose()?;

        Ok(UpdateProductCommand { name, price })
    }
}
