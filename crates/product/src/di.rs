use crate::{
    abstract_trait::product::repository::{DynProductCommandRepository, DynProductQueryRepository},
    repository::{ProductCommandRepository, ProductQueryRepository, ProductRepository},
};
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_repository: ProductRepository,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_repository", &self.product_repository)
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let query =
            Arc::new(ProductQueryRepository::new(pool.clone())) as DynProductQueryRepository;
        let command =
            Arc::new(ProductCommandRepository::new(pool)) as DynProductCommandRepository;

        Self {
            product_repository: ProductRepository::new(query, command),
        }
    }
}
