use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::requests::product::CreateProductRequest, model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        product: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products (name, price, quantity, created_at, updated_at)
            VALUES ($1, $2, $3, current_timestamp, current_timestamp)
            RETURNING id, name, price, quantity, created_at, updated_at
            "#,
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(product.quantity)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {}: {:?}", product.name, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created product ID {} ({})", result.id, result.name);
        Ok(result)
    }

    async fn save_products(
        &self,
        products: &[ProductModel],
    ) -> Result<Vec<ProductModel>, RepositoryError> {
        info!("💾 Saving batch of {} products", products.len());

        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to begin transaction: {:?}", e);
            RepositoryError::from(e)
        })?;

        let mut saved = Vec::with_capacity(products.len());

        for product in products {
            let row = sqlx::query_as::<_, ProductModel>(
                r#"
                UPDATE products
                SET name = $2,
                    price = $3,
                    quantity = $4,
                    updated_at = current_timestamp
                WHERE id = $1
                RETURNING id, name, price, quantity, created_at, updated_at
                "#,
            )
            .bind(product.id)
            .bind(&product.name)
            .bind(product.price)
            .bind(product.quantity)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to save product ID {}: {:?}", product.id, err);
                RepositoryError::from(err)
            })?;

            // dropping `tx` on the early return rolls the batch back
            let row = row.ok_or_else(|| {
                error!("❌ Product ID {} vanished before save", product.id);
                RepositoryError::NotFound
            })?;

            saved.push(row);
        }

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit product batch: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("🔄 Saved {} products", saved.len());
        Ok(saved)
    }
}
