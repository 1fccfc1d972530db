//! Delivery zone repository behavior against a real SQLite database.

use shared::models::{DeliveryZoneCreate, DeliveryZoneUpdate, StoreCreate};
use storefront_server::db::repository::{delivery_zone, store, RepoError};
use storefront_server::db::DbService;

struct Fixture {
    db: DbService,
    store_id: i64,
    _dir: tempfile::TempDir,
}

async fn setup() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("vitrina-test.db");
    let db = DbService::new(db_path.to_str().unwrap()).await.unwrap();

    let created = store::create(
        &db.pool,
        StoreCreate {
            slug: "tacos-mari".into(),
            name: "Tacos Mari".into(),
            whatsapp_number: "5215500000000".into(),
            address: None,
        },
    )
    .await
    .unwrap();

    Fixture {
        db,
        store_id: created.id,
        _dir: dir,
    }
}

fn zone(name: &str, sort_order: Option<i64>) -> DeliveryZoneCreate {
    DeliveryZoneCreate {
        name: name.into(),
        fixed_price: 30.0,
        free_delivery_threshold: None,
        estimated_time_minutes: None,
        description: None,
        sort_order,
    }
}

#[tokio::test]
async fn sort_order_is_unique_per_store() {
    let fx = setup().await;
    delivery_zone::create(&fx.db.pool, fx.store_id, zone("Centro", Some(1)))
        .await
        .unwrap();
    let err = delivery_zone::create(&fx.db.pool, fx.store_id, zone("Norte", Some(1)))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));
}

#[tokio::test]
async fn update_cannot_collide_sort_orders() {
    let fx = setup().await;
    delivery_zone::create(&fx.db.pool, fx.store_id, zone("Centro", Some(1)))
        .await
        .unwrap();
    let norte = delivery_zone::create(&fx.db.pool, fx.store_id, zone("Norte", Some(2)))
        .await
        .unwrap();

    let err = delivery_zone::update(
        &fx.db.pool,
        norte.id,
        DeliveryZoneUpdate {
            sort_order: Some(1),
            ..DeliveryZoneUpdate::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));

    // moving to a free slot works, and an update that keeps the current
    // value is not a collision with itself
    let moved = delivery_zone::update(
        &fx.db.pool,
        norte.id,
        DeliveryZoneUpdate {
            sort_order: Some(5),
            ..DeliveryZoneUpdate::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(moved.sort_order, 5);

    let renamed = delivery_zone::update(
        &fx.db.pool,
        norte.id,
        DeliveryZoneUpdate {
            name: Some("Norte Chico".into()),
            ..DeliveryZoneUpdate::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(renamed.sort_order, 5);
}

#[tokio::test]
async fn omitted_sort_order_appends_after_the_highest() {
    let fx = setup().await;
    let a = delivery_zone::create(&fx.db.pool, fx.store_id, zone("Centro", None))
        .await
        .unwrap();
    let b = delivery_zone::create(&fx.db.pool, fx.store_id, zone("Norte", None))
        .await
        .unwrap();
    assert_eq!(a.sort_order, 0);
    assert_eq!(b.sort_order, 1);

    // the listing comes back in that order
    let zones = delivery_zone::find_all(&fx.db.pool, fx.store_id).await.unwrap();
    assert_eq!(
        zones.iter().map(|z| z.name.as_str()).collect::<Vec<_>>(),
        ["Centro", "Norte"]
    );
}

#[tokio::test]
async fn sibling_stores_do_not_share_the_sort_space() {
    let fx = setup().await;
    let other = store::create(
        &fx.db.pool,
        StoreCreate {
            slug: "tacos-luz".into(),
            name: "Tacos Luz".into(),
            whatsapp_number: "5215500000001".into(),
            address: None,
        },
    )
    .await
    .unwrap();

    delivery_zone::create(&fx.db.pool, fx.store_id, zone("Centro", Some(1)))
        .await
        .unwrap();
    // same sort_order under a different store is fine
    delivery_zone::create(&fx.db.pool, other.id, zone("Centro", Some(1)))
        .await
        .unwrap();
}
