use serde::Serialize;

use crate::domain::product::models::Product;

pub mod create_product;
pub mod delete_product;
pub mod list_products;
pub mod update_product;

/// Wire representation of a product, shared by every catalog handler.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductData {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub seller: String,
}

impl From<&Product> for ProductData {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name.as_str().to_string(),
            price: product.price.value(),
            seller: product.seller.as_str().to_string(),
        }
    }
}
