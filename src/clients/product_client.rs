//! # Product Client
//!
//! Provides a high-level API for interacting with the `Product` actor.
use crate::clients::actor_client::ActorClient;
use crate::framework::ResourceClient;
use crate::model::Product;
use crate::product_actor::ProductError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    /// Validates and stores a product, returning it with its id assigned.
    ///
    /// A rule violation comes back as [`ProductError::Validation`]; the caller is expected
    /// to re-present the submitted form with those messages.
    #[instrument(skip(self, product))]
    pub async fn create_product(
        &self,
        product: impl Into<Option<Product>> + Send,
    ) -> Result<Product, ProductError> {
        let product = product.into();
        debug!(?product, "create_product called");
        self.inner.create(product).await.map_err(Into::into)
    }

    /// Replaces the stored product with the same id. `Ok(None)` if there is none.
    #[instrument(skip(self, product))]
    pub async fn update_product(
        &self,
        product: impl Into<Option<Product>> + Send,
    ) -> Result<Option<Product>, ProductError> {
        let product = product.into();
        debug!(?product, "update_product called");
        self.inner.update(product).await.map_err(Into::into)
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }
}
