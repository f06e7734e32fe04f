use crate::{
    abstract_trait::product::repository::{DynProductCommandRepository, DynProductQueryRepository},
    domain::requests::product::{
        CreateProductRequest, FindProductRequest, UpdateProductQuantityRequest,
    },
    model::product::Product as ProductModel,
};
use shared::errors::ServiceError;
use std::{collections::HashSet, fmt};
use tracing::{error, info};
use uuid::Uuid;

/// Records-access facade over an injected product store.
///
/// Stock checks in [`ProductRepository::update_quantity`] run before the
/// batch write and are not re-checked at write time; two concurrent calls
/// against the same product can both pass the check.
#[derive(Clone)]
pub struct ProductRepository {
    query: DynProductQueryRepository,
    command: DynProductCommandRepository,
}

impl fmt::Debug for ProductRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductRepository")
            .field("query", &"Arc<dyn ProductQueryRepositoryTrait>")
            .field("command", &"Arc<dyn ProductCommandRepositoryTrait>")
            .finish()
    }
}

impl ProductRepository {
    pub fn new(query: DynProductQueryRepository, command: DynProductCommandRepository) -> Self {
        Self { query, command }
    }

    pub async fn create(&self, req: &CreateProductRequest) -> Result<ProductModel, ServiceError> {
        info!("🆕 Creating product: {}", req.name);

        let product = self.command.create_product(req).await?;

        Ok(product)
    }

    /// Absence is reported as `None`; the caller decides whether it is an error.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<ProductModel>, ServiceError> {
        let product = self.query.find_by_name(name).await?;

        if product.is_none() {
            info!("ℹ️ No product named {}", name);
        }

        Ok(product)
    }

    /// Resolves every requested id or fails with [`ServiceError::MissingEntity`].
    /// The order of the returned records is whatever the store yields.
    pub async fn find_all_by_id(
        &self,
        products: &[FindProductRequest],
    ) -> Result<Vec<ProductModel>, ServiceError> {
        let mut seen = HashSet::with_capacity(products.len());
        let ids: Vec<Uuid> = products
            .iter()
            .map(|p| p.id)
            .filter(|id| seen.insert(*id))
            .collect();

        let found = self.query.find_by_ids(&ids).await?;

        if found.len() != ids.len() {
            error!(
                "❌ Requested {} products but resolved {}",
                ids.len(),
                found.len()
            );
            return Err(ServiceError::MissingEntity);
        }

        Ok(found)
    }

    /// Deducts each request's `delta_quantity` from the stored stock and
    /// saves the whole batch in one write. Nothing is written when any
    /// check fails.
    pub async fn update_quantity(
        &self,
        products: &[UpdateProductQuantityRequest],
    ) -> Result<Vec<ProductModel>, ServiceError> {
        if let Some(bad) = products.iter().find(|p| p.delta_quantity < 0) {
            error!(
                "❌ Rejecting negative delta {} for product ID {}",
                bad.delta_quantity, bad.id
            );
            return Err(ServiceError::InvalidDelta);
        }

        let lookup: Vec<FindProductRequest> =
            products.iter().map(FindProductRequest::from).collect();

        let stored = self.find_all_by_id(&lookup).await?;

        let products_to_update = stored
            .into_iter()
            .map(|mut product| {
                let request = products
                    .iter()
                    .find(|p| p.id == product.id)
                    .ok_or(ServiceError::NotFound)?;

                let remaining = product
                    .quantity
                    .checked_sub(request.delta_quantity)
                    .filter(|q| *q >= 0)
                    .ok_or_else(|| {
                        error!(
                            "❌ Product ID {} has {} in stock, {} requested",
                            product.id, product.quantity, request.delta_quantity
                        );
                        ServiceError::InsufficientStock
                    })?;

                product.quantity = remaining;
                Ok(product)
            })
            .collect::<Result<Vec<_>, ServiceError>>()?;

        let saved = self.command.save_products(&products_to_update).await?;

        info!("✅ Updated stock for {} products", saved.len());
        Ok(saved)
    }
}
