use eshop_actors::clients::ActorClient;
use eshop_actors::config::EshopConfig;
use eshop_actors::lifecycle::EshopSystem;
use eshop_actors::model::{Car, Product};
use eshop_actors::product_actor::validation::{NAME_REQUIRED, QUANTITY_NON_NEGATIVE};
use eshop_actors::product_actor::ProductError;

/// Full end-to-end test of the product lifecycle through the real actors.
#[tokio::test]
async fn test_product_lifecycle() {
    let system = EshopSystem::new(&EshopConfig::default());
    let products = &system.product_client;

    assert!(products.find_all().await.unwrap().is_empty());

    // Create without id: one is generated
    let bambang = products
        .create_product(Product::new("Sampo Cap Bambang", 100))
        .await
        .expect("Failed to create product");
    let bambang_id = bambang.id.clone().expect("id should be assigned");
    assert!(!bambang_id.is_empty());

    // Create with id: it is kept
    let usep = products
        .create_product(Product::new("Sampo Cap Usep", 50).with_id("a0f9de45-90b1-437d-a0bf-d0821dde9096"))
        .await
        .unwrap();
    assert_eq!(usep.id.as_deref(), Some("a0f9de45-90b1-437d-a0bf-d0821dde9096"));

    // Round trip
    assert_eq!(products.find_by_id(&bambang_id).await.unwrap(), Some(bambang.clone()));

    // Update replaces in place
    let renamed = Product {
        name: "Sampo Cap Bambang Baru".into(),
        ..bambang.clone()
    };
    assert_eq!(products.update_product(renamed.clone()).await.unwrap(), Some(renamed.clone()));
    assert_eq!(products.find_all().await.unwrap(), vec![renamed, usep.clone()]);

    // Delete, then delete again
    products.delete_by_id(&bambang_id).await.unwrap();
    products.delete_by_id(&bambang_id).await.unwrap();
    assert_eq!(products.find_by_id(&bambang_id).await.unwrap(), None);
    assert_eq!(products.find_all().await.unwrap(), vec![usep]);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_invalid_product_is_rejected_with_every_violation() {
    let system = EshopSystem::new(&EshopConfig::default());

    let err = system
        .product_client
        .create_product(Product::new("", -3))
        .await
        .unwrap_err();

    let ProductError::Validation(rejection) = err else {
        panic!("expected a validation failure, got {err:?}");
    };
    assert_eq!(
        rejection.messages().collect::<Vec<_>>(),
        vec![NAME_REQUIRED, QUANTITY_NON_NEGATIVE]
    );
    assert_eq!(rejection.for_field("name").collect::<Vec<_>>(), vec![NAME_REQUIRED]);

    // Nothing was stored
    assert!(system.product_client.find_all().await.unwrap().is_empty());

    let err = system.product_client.create_product(None::<Product>).await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid product: validation failed: Product must not be null");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_update_leaves_store_untouched() {
    let system = EshopSystem::new(&EshopConfig::default());
    let products = &system.product_client;

    let stored = products.create_product(Product::new("Widget", 5)).await.unwrap();
    let broken = Product {
        quantity: -1,
        ..stored.clone()
    };

    assert!(matches!(
        products.update_product(broken).await,
        Err(ProductError::Validation(_))
    ));
    assert_eq!(products.find_all().await.unwrap(), vec![stored]);

    // Valid but unknown id: not found, not an error
    let ghost = Product::new("Ghost", 1).with_id("99");
    assert_eq!(products.update_product(ghost).await, Ok(None));

    system.shutdown().await.unwrap();
}

/// Cars have no validation rules: every attribute value is accepted.
#[tokio::test]
async fn test_car_lifecycle_enforces_no_constraints() {
    let system = EshopSystem::new(&EshopConfig::default());
    let cars = &system.car_client;

    let odd = cars.create_car(Car::new("", "", -1)).await.unwrap();
    let id = odd.id.clone().unwrap();

    let repainted = Car {
        color: "blue".into(),
        ..odd
    };
    assert_eq!(cars.update_car(repainted.clone()).await.unwrap(), Some(repainted.clone()));
    assert_eq!(cars.find_by_id(&id).await.unwrap(), Some(repainted));

    cars.delete_by_id(&id).await.unwrap();
    assert!(cars.find_all().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

/// Many client clones hitting one actor: every create lands with a distinct id.
#[tokio::test]
async fn test_concurrent_creates() {
    let system = EshopSystem::new(&EshopConfig {
        channel_capacity: 2,
        ..EshopConfig::default()
    });

    let mut handles = vec![];
    for i in 0..25 {
        let client = system.product_client.clone();
        handles.push(tokio::spawn(async move {
            client.create_product(Product::new(format!("Item {i}"), i)).await
        }));
    }

    let mut ids = std::collections::HashSet::new();
    for handle in handles {
        let product = handle.await.unwrap().expect("create should succeed");
        ids.insert(product.id.unwrap());
    }
    assert_eq!(ids.len(), 25);
    assert_eq!(system.product_client.find_all().await.unwrap().len(), 25);

    system.shutdown().await.unwrap();
}
