use crate::{
    domain::requests::product::CreateProductRequest, model::product::Product as ProductModel,
};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError>;

    /// Persists every record in one write; either all rows land or none do.
    async fn save_products(
        &self,
        products: &[ProductModel],
    ) -> Result<Vec<ProductModel>, RepositoryError>;
}
