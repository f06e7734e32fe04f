use crate::model::product::Product as ProductModel;
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_by_name(&self, name: &str) -> Result<Option<ProductModel>, RepositoryError>;
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<ProductModel>, RepositoryError>;
}
