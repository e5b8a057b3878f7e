//! Scripted catalogue session: the same steps a browser user would take through the
//! product and car forms.

use clap::Parser;
use eshop_actors::clients::ActorClient;
use eshop_actors::config::EshopConfig;
use eshop_actors::lifecycle::{setup_tracing, EshopSystem};
use eshop_actors::model::{Car, Product};
use eshop_actors::product_actor::ProductError;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = EshopConfig::parse();
    setup_tracing(config.log_format);

    info!("Starting catalogue");
    let system = EshopSystem::new(&config);

    let span = tracing::info_span!("product_session");
    async {
        let products = &system.product_client;

        let shampoo = products
            .create_product(Product::new("Sampo Cap Bambang", 100))
            .await?;
        products
            .create_product(Product::new("Sampo Cap Usep", 50).with_id("usep-001"))
            .await?;

        // An invalid submission is an expected outcome, not a fault.
        match products.create_product(Product::new("  ", -3)).await {
            Err(ProductError::Validation(rejection)) => {
                for violation in rejection.violations() {
                    info!(field = violation.field, message = %violation.message, "Form error");
                }
            }
            other => info!(?other, "Unexpected create outcome"),
        }

        let mut edited = shampoo.clone();
        edited.quantity = 80;
        products.update_product(edited).await?;

        for product in products.find_all().await? {
            info!(id = product.id.as_deref(), name = %product.name, quantity = product.quantity, "Listed");
        }

        if let Some(id) = shampoo.id.as_deref() {
            products.delete_by_id(id).await?;
        }
        products.delete_by_id("never-existed").await?;
        Ok::<_, ProductError>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("car_session");
    async {
        let cars = &system.car_client;
        let civic = cars.create_car(Car::new("Civic", "red", 2)).await?;

        let repainted = Car {
            color: "blue".into(),
            ..civic
        };
        cars.update_car(repainted).await?;

        let missing = cars.find_by_id("no-such-car").await?;
        info!(found = missing.is_some(), "Lookup of unknown car");
        info!(count = cars.find_all().await?.len(), "Cars listed");
        Ok::<_, eshop_actors::car_actor::CarError>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;
    info!("Catalogue session completed");
    Ok(())
}
