use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::ProductData;
use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::models::Price;
use crate::domain::product::models::ProductName;
use crate::domain::product::ports::CatalogServicePort;
use crate::domain::user::models::Identity;
use crate::inbound::http::router::AppState;
use crate::product::errors::PriceError;
use crate::product::errors::ProductNameError;

pub async fn create_product(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(body): Json<CreateProductRequestBody>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    state
        .catalog_service
        .create_product(&identity, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::CREATED, product.into()))
}

/// HTTP request body for creating a product (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateProductRequestBody {
    name: Option<String>,
    price: Option<f64>,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateProductRequestError {
    #[error("name and price are required")]
    MissingField,

    #[error("{0}")]
    Name(#[from] ProductNameError),

    #[error("{0}")]
    Price(#[from] PriceError),
}

impl CreateProductRequestBody {
    fn try_into_command(self) -> Result<CreateProductCommand, ParseCreateProductRequestError> {
        let name = self
            .name
            .filter(|s| !s.is_empty())
            .ok_or(ParseCreateProductRequestError::MissingField)?;
        let price = self
            .price
            .ok_or(ParseCreateProductRequestError::MissingField)?;

        let name = ProductName::new(name)?;
        let price = Price::new(price)?;

        Ok(CreateProductCommand::new(name, price))
    }
}

impl From<ParseCreateProductRequestError> for ApiError {
    fn from(err: ParseCreateProductRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
