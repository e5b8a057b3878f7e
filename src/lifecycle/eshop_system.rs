use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

use crate::clients::{CarClient, ProductClient};
use crate::config::EshopConfig;

/// An actor task ended abnormally during shutdown.
#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] JoinError),
}

/// The runtime orchestrator for the catalogue.
///
/// `EshopSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the actors
/// - **Handing out clients**: one typed client per entity type, cheap to clone
///
/// # Example
///
/// ```ignore
/// let system = EshopSystem::new(&EshopConfig::default());
/// let product = system.product_client.create_product(Product::new("Widget", 3)).await?;
/// system.shutdown().await?;
/// ```
pub struct EshopSystem {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Client for interacting with the Car actor
    pub car_client: CarClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl EshopSystem {
    /// Creates the actors and spawns each in its own Tokio task.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &EshopConfig) -> Self {
        // A zero-capacity channel would panic; clap already rejects it on the command line.
        let capacity = config.channel_capacity.max(1);
        let (product_actor, product_client) = crate::product_actor::new(capacity);
        let (car_actor, car_client) = crate::car_actor::new(capacity);

        let product_handle = tokio::spawn(product_actor.run());
        let car_handle = tokio::spawn(car_actor.run());

        info!(channel_capacity = capacity, "System started");

        Self {
            product_client,
            car_client,
            handles: vec![product_handle, car_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the channels; each actor drains its queue and exits.
    /// Clones of the clients held elsewhere keep their actor alive, so drop them first.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down system...");

        drop(self.product_client);
        drop(self.car_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
