use eshop_actors::clients::{ActorClient, ProductClient};
use eshop_actors::framework::{mock::MockClient, EntityService, ResourceActor};
use eshop_actors::model::Product;

/// Real Product actor with a pinned id generator.
#[tokio::test]
async fn test_product_actor_with_deterministic_ids() {
    let counter = std::sync::Arc::new(std::sync::atomic::AtomicU64::new(1));
    let service = EntityService::<Product>::new().with_id_generator(move || {
        let id = counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        format!("product_{id}")
    });

    let (actor, generic_client) = ResourceActor::with_service(8, service);
    let handle = tokio::spawn(actor.run());
    let client = ProductClient::new(generic_client);

    let first = client.create_product(Product::new("A", 1)).await.unwrap();
    let second = client.create_product(Product::new("B", 2)).await.unwrap();
    assert_eq!(first.id.as_deref(), Some("product_1"));
    assert_eq!(second.id.as_deref(), Some("product_2"));

    let b_prime = Product {
        name: "X".into(),
        ..second
    };
    client.update_product(b_prime.clone()).await.unwrap();
    assert_eq!(client.find_all().await.unwrap(), vec![first, b_prime]);

    drop(client);
    handle.await.unwrap();
}

/// Client logic against a mocked actor: the edit page flow (look up, then save).
#[tokio::test]
async fn test_edit_flow_against_mock() {
    let stored = Product::new("Widget", 3).with_id("p-1");
    let mut mock = MockClient::<Product>::new();
    mock.expect_find_by_id("p-1").return_ok(Some(stored.clone()));
    mock.expect_update().return_ok(Some(Product { quantity: 4, ..stored.clone() }));
    mock.expect_find_by_id("gone").return_ok(None);

    let client = ProductClient::new(mock.client());

    let mut editing = client.find_by_id("p-1").await.unwrap().expect("product exists");
    editing.quantity = 4;
    let saved = client.update_product(editing).await.unwrap();
    assert_eq!(saved.map(|p| p.quantity), Some(4));

    // Unknown id: the edit page would redirect to the list instead
    assert_eq!(client.find_by_id("gone").await.unwrap(), None);

    mock.verify();
}
