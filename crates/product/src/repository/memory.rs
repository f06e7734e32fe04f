use crate::{
    abstract_trait::product::repository::{
        ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
    },
    domain::requests::product::CreateProductRequest,
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use chrono::Utc;
use shared::errors::RepositoryError;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error};
use uuid::Uuid;

/// Store provider backed by a process-local vector, kept in insertion order.
///
/// Clones share the same records, so one handle can serve as both the
/// command and the query half of a [`super::ProductRepository`].
#[derive(Clone, Default)]
pub struct MemoryProductRepository {
    products: Arc<RwLock<Vec<ProductModel>>>,
}

impl MemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> Vec<ProductModel> {
        self.products.read().await.clone()
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for MemoryProductRepository {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let now = Utc::now().naive_utc();

        let product = ProductModel {
            id: Uuid::new_v4(),
            name: req.name.clone(),
            price: req.price,
            quantity: req.quantity,
            created_at: Some(now),
            updated_at: Some(now),
        };

        self.products.write().await.push(product.clone());

        debug!("Stored product {} in memory", product.id);
        Ok(product)
    }

    async fn save_products(
        &self,
        products: &[ProductModel],
    ) -> Result<Vec<ProductModel>, RepositoryError> {
        let mut stored = self.products.write().await;

        // resolve every position first so a missing row leaves the batch unapplied
        let mut positions = Vec::with_capacity(products.len());
        for product in products {
            match stored.iter().position(|p| p.id == product.id) {
                Some(idx) => positions.push(idx),
                None => {
                    error!("❌ Product ID {} not present in memory store", product.id);
                    return Err(RepositoryError::NotFound);
                }
            }
        }

        let now = Utc::now().naive_utc();
        let mut saved = Vec::with_capacity(products.len());

        for (idx, product) in positions.into_iter().zip(products) {
            let row = &mut stored[idx];
            row.name = product.name.clone();
            row.price = product.price;
            row.quantity = product.quantity;
            row.updated_at = Some(now);
            saved.push(row.clone());
        }

        Ok(saved)
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for MemoryProductRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<ProductModel>, RepositoryError> {
        let stored = self.products.read().await;
        Ok(stored.iter().find(|p| p.name == name).cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<ProductModel>, RepositoryError> {
        let stored = self.products.read().await;
        Ok(stored
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn request(name: &str, quantity: i32) -> CreateProductRequest {
        CreateProductRequest {
            name: name.into(),
            price: Decimal::new(1500, 2),
            quantity,
        }
    }

    #[tokio::test]
    async fn test_find_by_ids_returns_each_row_once() {
        let store = MemoryProductRepository::new();
        let a = store.create_product(&request("a", 1)).await.unwrap();
        let b = store.create_product(&request("b", 2)).await.unwrap();

        let found = store.find_by_ids(&[a.id, a.id, b.id]).await.unwrap();

        assert_eq!(found.len(), 2);
    }

    #[tokio::test]
    async fn test_save_unknown_product_applies_nothing() {
        let store = MemoryProductRepository::new();
        let mut known = store.create_product(&request("known", 5)).await.unwrap();
        known.quantity = 1;

        let mut ghost = known.clone();
        ghost.id = Uuid::new_v4();

        let err = store.save_products(&[known.clone(), ghost]).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));

        let rows = store.snapshot().await;
        assert_eq!(rows[0].quantity, 5);
    }

    #[tokio::test]
    async fn test_clones_share_records() {
        let store = MemoryProductRepository::new();
        let other = store.clone();

        store.create_product(&request("shared", 3)).await.unwrap();

        assert!(other.find_by_name("shared").await.unwrap().is_some());
    }
}
