use async_trait::async_trait;

use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::models::NewProduct;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::UpdateProductCommand;
use crate::domain::user::models::Identity;
use crate::product::errors::ProductError;

/// Port for catalog service operations.
#[async_trait]
pub trait CatalogServicePort: Send + Sync + 'static {
    /// Add a product to the catalog on behalf of `identity`.
    ///
    /// # Returns
    /// Created product with a freshly assigned id
    ///
    /// # Errors
    /// * `SellerRequired` - Identity does not hold the seller role
    async fn create_product(
        &self,
        identity: &Identity,
        command: CreateProductCommand,
    ) -> Result<Product, ProductError>;

    /// Apply a partial update to an existing product.
    ///
    /// Only fields present in the command change; the rest keep their
    /// stored values. The role check runs before the existence lookup.
    ///
    /// # Errors
    /// * `SellerRequired` - Identity does not hold the seller role
    /// * `NotFound` - No product with this id
    async fn update_product(
        &self,
        identity: &Identity,
        id: ProductId,
        command: UpdateProductCommand,
    ) -> Result<Product, ProductError>;

    /// Remove a product from the catalog.
    ///
    /// Deleting an id that is not present is a no-op success.
    ///
    /// # Errors
    /// * `SellerRequired` - Identity does not hold the seller role
    async fn delete_product(&self, identity: &Identity, id: ProductId)
        -> Result<(), ProductError>;

    /// List the whole catalog, ordered by id. No authentication required.
    async fn list_products(&self) -> Result<Vec<Product>, ProductError>;
}

/// Persistence operations for the product catalog.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Persist a new product, assigning it the next monotonic id.
    async fn create(&self, new_product: NewProduct) -> Result<Product, ProductError>;

    /// Retrieve a product by id.
    ///
    /// # Returns
    /// Optional product entity (None if not found)
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductError>;

    /// Retrieve all products, ordered by id.
    async fn list_all(&self) -> Result<Vec<Product>, ProductError>;

    /// Replace a stored product.
    ///
    /// # Errors
    /// * `NotFound` - No product with this id
    async fn update(&self, product: Product) -> Result<Product, ProductError>;

    /// Remove a product. Removing an absent id is a no-op.
    async fn delete(&self, id: ProductId) -> Result<(), ProductError>;
}
