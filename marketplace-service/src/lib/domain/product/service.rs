use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::models::NewProduct;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::UpdateProductCommand;
use crate::domain::user::models::Identity;
use crate::domain::user::models::Role;
use crate::product::errors::ProductError;
use crate::product::ports::CatalogServicePort;
use crate::product::ports::ProductRepository;

/// Domain service for the product catalog.
///
/// All mutations pass through one seller-role predicate; listing is open.
/// Generic over the repository for testability.
pub struct CatalogService<PR>
where
    PR: ProductRepository,
{
    repository: Arc<PR>,
}

impl<PR> CatalogService<PR>
where
    PR: ProductRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

/// The single authorization predicate guarding every catalog mutation.
fn require_seller(identity: &Identity) -> Result<(), ProductError> {
    match identity.role {
        Role::Seller => Ok(()),
        _ => Err(ProductError::SellerRequired),
    }
}

#[async_trait]
impl<PR> CatalogServicePort for CatalogService<PR>
where
    PR: ProductRepository,
{
    async fn create_product(
        &self,
        identity: &Identity,
        command: CreateProductCommand,
    ) -> Result<Product, ProductError> {
        require_seller(identity)?;

        let product = self
            .repository
            .create(NewProduct {
                name: command.name,
                price: command.price,
                seller: identity.username.clone(),
            })
            .await?;

        tracing::info!(
            product_id = %product.id,
            seller = %product.seller,
            "product created"
        );

        Ok(product)
    }

    async fn update_product(
        &self,
        identity: &Identity,
        id: ProductId,
        command: UpdateProductCommand,
    ) -> Result<Product, ProductError> {
        // Role check before the lookup, so non-sellers learn nothing about
        // which ids exist.
        require_seller(identity)?;

        let mut product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        if let Some(new_name) = command.name {
            product.name = new_name;
        }

        if let Some(new_price) = command.price {
            product.price = new_price;
        }

        self.repository.update(product).await
    }

    async fn delete_product(
        &self,
        identity: &Identity,
        id: ProductId,
    ) -> Result<(), ProductError> {
        require_seller(identity)?;

        self.repository.delete(id).await?;

        tracing::info!(product_id = %id, "product deleted");

        Ok(())
    }

    async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        self.repository.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::product::models::Price;
    use crate::domain::product::models::ProductName;
    use crate::domain::user::models::Username;

    mock! {
        pub TestProductRepository {}

        #[async_trait]
        impl ProductRepository for TestProductRepository {
            async fn create(&self, new_product: NewProduct) -> Result<Product, ProductError>;
            async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductError>;
            async fn list_all(&self) -> Result<Vec<Product>, ProductError>;
            async fn update(&self, product: Product) -> Result<Product, ProductError>;
            async fn delete(&self, id: ProductId) -> Result<(), ProductError>;
        }
    }

    fn identity(username: &str, role: Role) -> Identity {
        Identity {
            username: Username::new(username.to_string()).unwrap(),
            role,
        }
    }

    fn widget(id: u64) -> Product {
        Product {
            id: ProductId(id),
            name: ProductName::new("Widget".to_string()).unwrap(),
            price: Price::new(9.99).unwrap(),
            seller: Username::new("alice".to_string()).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_create_product_records_creating_seller() {
        let mut repository = MockTestProductRepository::new();

        repository
            .expect_create()
            .withf(|new_product| {
                new_product.name.as_str() == "Widget"
                    && new_product.price.value() == 9.99
                    && new_product.seller.as_str() == "alice"
            })
            .times(1)
            .returning(|new_product| {
                Ok(Product {
                    id: ProductId(1),
                    name: new_product.name,
                    price: new_product.price,
                    seller: new_product.seller,
                })
            });

        let service = CatalogService::new(Arc::new(repository));

        let command = CreateProductCommand::new(
            ProductName::new("Widget".to_string()).unwrap(),
            Price::new(9.99).unwrap(),
        );

        let product = service
            .create_product(&identity("alice", Role::Seller), command)
            .await
            .expect("Create failed");

        assert_eq!(product.id, ProductId(1));
        assert_eq!(product.seller.as_str(), "alice");
    }

    #[tokio::test]
    async fn test_mutations_rejected_for_buyers() {
        // The repository must never be touched when the role check fails
        let mut repository = MockTestProductRepository::new();
        repository.expect_create().times(0);
        repository.expect_find_by_id().times(0);
        repository.expect_update().times(0);
        repository.expect_delete().times(0);

        let service = CatalogService::new(Arc::new(repository));
        let buyer = identity("bob", Role::Buyer);

        let create = service
            .create_product(
                &buyer,
                CreateProductCommand::new(
                    ProductName::new("Widget".to_string()).unwrap(),
                    Price::new(9.99).unwrap(),
                ),
            )
            .await;
        assert!(matches!(create, Err(ProductError::SellerRequired)));

        let update = service
            .update_product(
                &buyer,
                ProductId(1),
                UpdateProductCommand {
                    name: None,
                    price: Some(Price::new(1.0).unwrap()),
                },
            )
            .await;
        assert!(matches!(update, Err(ProductError::SellerRequired)));

        let delete = service.delete_product(&buyer, ProductId(1)).await;
        assert!(matches!(delete, Err(ProductError::SellerRequired)));
    }

    #[tokio::test]
    async fn test_any_seller_may_update_anothers_product() {
        let mut repository = MockTestProductRepository::new();

        repository
            .expect_find_by_id()
            .with(eq(ProductId(1)))
            .times(1)
            .returning(|_| Ok(Some(widget(1))));
        repository
            .expect_update()
            .times(1)
            .returning(|product| Ok(product));

        let service = CatalogService::new(Arc::new(repository));

        // carol did not create the product; seller role alone suffices
        let result = service
            .update_product(
                &identity("carol", Role::Seller),
                ProductId(1),
                UpdateProductCommand {
                    name: None,
                    price: Some(Price::new(12.0).unwrap()),
                },
            )
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_applies_only_provided_fields() {
        let mut repository = MockTestProductRepository::new();

        repository
            .expect_find_by_id()
            .with(eq(ProductId(1)))
            .times(1)
            .returning(|_| Ok(Some(widget(1))));
        repository
            .expect_update()
            .withf(|product| {
                product.name.as_str() == "Widget" && product.price.value() == 12.0
            })
            .times(1)
            .returning(|product| Ok(product));

        let service = CatalogService::new(Arc::new(repository));

        let updated = service
            .update_product(
                &identity("alice", Role::Seller),
                ProductId(1),
                UpdateProductCommand {
                    name: None,
                    price: Some(Price::new(12.0).unwrap()),
                },
            )
            .await
            .expect("Update failed");

        assert_eq!(updated.name.as_str(), "Widget");
        assert_eq!(updated.price.value(), 12.0);
    }

    #[tokio::test]
    async fn test_update_unknown_product() {
        let mut repository = MockTestProductRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = CatalogService::new(Arc::new(repository));

        let result = service
            .update_product(
                &identity("alice", Role::Seller),
                ProductId(42),
                UpdateProductCommand {
                    name: None,
                    price: None,
                },
            )
            .await;

        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_unknown_product_is_noop_success() {
        let mut repository = MockTestProductRepository::new();

        repository
            .expect_delete()
            .with(eq(ProductId(42)))
            .times(1)
            .returning(|_| Ok(()));

        let service = CatalogService::new(Arc::new(repository));

        let result = service
            .delete_product(&identity("alice", Role::Seller), ProductId(42))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_list_requires_no_identity() {
        let mut repository = MockTestProductRepository::new();

        repository
            .expect_list_all()
            .times(1)
            .returning(|| Ok(vec![widget(1), widget(2)]));

        let service = CatalogService::new(Arc::new(repository));

        let products = service.list_products().await.expect("List failed");
        assert_eq!(products.len(), 2);
    }
}
