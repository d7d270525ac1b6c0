use std::collections::BTreeMap;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::product::models::NewProduct;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::ProductRepository;
use crate::product::errors::ProductError;

/// In-memory implementation of ProductRepository.
///
/// Ids come from an atomic counter, so concurrent creates get distinct
/// ids and deletion never frees an id for reuse. The BTreeMap keeps
/// listings ordered by id.
pub struct InMemoryProductRepository {
    products: RwLock<BTreeMap<u64, Product>>,
    next_id: AtomicU64,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, new_product: NewProduct) -> Result<Product, ProductError> {
        let id = ProductId(self.next_id.fetch_add(1, Ordering::Relaxed));

        let product = Product {
            id,
            name: new_product.name,
            price: new_product.price,
            seller: new_product.seller,
        };

        self.products
            .write()
            .await
            .insert(id.value(), product.clone());
        tracing::debug!(product_id = %id, "product stored");

        Ok(product)
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductError> {
        let products = self.products.read().await;
        Ok(products.get(&id.value()).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Product>, ProductError> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn update(&self, product: Product) -> Result<Product, ProductError> {
        let mut products = self.products.write().await;

        if !products.contains_key(&product.id.value()) {
            return Err(ProductError::NotFound(product.id));
        }

        products.insert(product.id.value(), product.clone());
        tracing::debug!(product_id = %product.id, "product updated");

        Ok(product)
    }

    async fn delete(&self, id: ProductId) -> Result<(), ProductError> {
        let mut products = self.products.write().await;

        if products.remove(&id.value()).is_none() {
            tracing::debug!(product_id = %id, "product absent, nothing to delete");
        } else {
            tracing::debug!(product_id = %id, "product removed");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::models::Price;
    use crate::domain::product::models::ProductName;
    use crate::domain::user::models::Username;

    fn new_product(name: &str) -> NewProduct {
        NewProduct {
            name: ProductName::new(name.to_string()).unwrap(),
            price: Price::new(9.99).unwrap(),
            seller: Username::new("alice".to_string()).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_ids_are_monotonic() {
        let repository = InMemoryProductRepository::new();

        let first = repository.create(new_product("Widget")).await.unwrap();
        let second = repository.create(new_product("Gadget")).await.unwrap();

        assert_eq!(first.id, ProductId(1));
        assert_eq!(second.id, ProductId(2));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_deletion() {
        let repository = InMemoryProductRepository::new();

        repository.create(new_product("Widget")).await.unwrap();
        let second = repository.create(new_product("Gadget")).await.unwrap();

        repository.delete(second.id).await.unwrap();

        let third = repository.create(new_product("Gizmo")).await.unwrap();
        assert_eq!(third.id, ProductId(3));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repository = InMemoryProductRepository::new();

        let product = repository.create(new_product("Widget")).await.unwrap();

        repository.delete(product.id).await.expect("First delete failed");
        repository
            .delete(product.id)
            .await
            .expect("Repeated delete failed");
        repository
            .delete(ProductId(999))
            .await
            .expect("Unknown-id delete failed");
    }

    #[tokio::test]
    async fn test_update_unknown_product() {
        let repository = InMemoryProductRepository::new();

        let product = Product {
            id: ProductId(42),
            name: ProductName::new("Widget".to_string()).unwrap(),
            price: Price::new(9.99).unwrap(),
            seller: Username::new("alice".to_string()).unwrap(),
        };

        let result = repository.update(product).await;
        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let repository = InMemoryProductRepository::new();

        repository.create(new_product("Widget")).await.unwrap();
        repository.create(new_product("Gadget")).await.unwrap();
        repository.create(new_product("Gizmo")).await.unwrap();

        let products = repository.list_all().await.unwrap();
        let ids: Vec<u64> = products.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
