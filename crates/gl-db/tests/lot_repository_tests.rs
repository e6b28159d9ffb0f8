mod common;

use common::{create_test_context, create_test_event, create_test_lot};

use gl_db::{DbError, EventRepository, LotPatch, LotRepository};

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_valid_lot_when_created_then_can_be_found_by_id() {
    // Given: A fresh tenant database
    let (ctx, _dir) = create_test_context().await;
    let repo = LotRepository::new(&ctx);
    let lot = create_test_lot("First Lot");

    // When: Creating the lot
    repo.create(&lot).await.unwrap();

    // Then: Finding by ID returns the lot
    let result = repo.find_by_id(lot.id).await.unwrap();
    assert_that!(result, some(anything()));
    let found = result.unwrap();
    assert_that!(found.id, eq(lot.id));
    assert_that!(found.title, eq("First Lot"));
    assert_that!(found.quantity, eq(100));
    assert_that!(found.value, eq(25.0));
    assert_that!(found.sold_out, eq(false));
    assert_that!(found.buyers, is_empty());
}

#[tokio::test]
async fn given_lot_attached_to_event_when_finding_by_event_then_returns_it() {
    // Given: An event with one attached lot and one detached lot
    let (ctx, _dir) = create_test_context().await;
    let events = EventRepository::new(&ctx);
    let repo = LotRepository::new(&ctx);

    let event = create_test_event("Halloween Party");
    events.create(&event).await.unwrap();

    let mut attached = create_test_lot("First Lot");
    attached.event_id = Some(event.id);
    repo.create(&attached).await.unwrap();

    let detached = create_test_lot("Door Sales");
    repo.create(&detached).await.unwrap();

    // When: Finding lots by event
    let lots = repo.find_by_event(event.id).await.unwrap();

    // Then: Only the attached lot is returned
    assert_that!(lots, len(eq(1)));
    assert_that!(lots[0].id, eq(attached.id));
}

#[tokio::test]
async fn given_existing_lot_when_updated_partially_then_other_fields_survive() {
    // Given: A gendered lot
    let (ctx, _dir) = create_test_context().await;
    let repo = LotRepository::new(&ctx);
    let mut lot = create_test_lot("Ladies First Lot");
    lot.female_lot = true;
    repo.create(&lot).await.unwrap();

    // When: Marking it sold out
    let updated = repo
        .update(
            lot.id,
            &LotPatch {
                sold_out: Some(true),
                ..LotPatch::default()
            },
        )
        .await
        .unwrap();

    // Then: Sold out changed, gender flag and price survived
    assert_that!(updated.sold_out, eq(true));
    assert_that!(updated.female_lot, eq(true));
    assert_that!(updated.value, eq(25.0));
}

#[tokio::test]
async fn given_missing_lot_when_updated_then_returns_not_found() {
    // Given: An empty tenant database
    let (ctx, _dir) = create_test_context().await;
    let repo = LotRepository::new(&ctx);

    // When: Updating a lot that doesn't exist
    let result = repo.update(Uuid::new_v4(), &LotPatch::default()).await;

    // Then: NotFound
    assert!(matches!(result, Err(DbError::NotFound { .. })));
}

#[tokio::test]
async fn given_buyers_when_added_then_kept_in_purchase_order() {
    // Given: A lot with no buyers
    let (ctx, _dir) = create_test_context().await;
    let repo = LotRepository::new(&ctx);
    let lot = create_test_lot("First Lot");
    repo.create(&lot).await.unwrap();

    let first = Uuid::new_v4();
    let second = Uuid::new_v4();

    // When: Two purchases land
    repo.add_buyer(lot.id, first).await.unwrap();
    let updated = repo.add_buyer(lot.id, second).await.unwrap();

    // Then: Buyers are recorded in order
    assert_that!(updated.buyers, eq(&vec![first, second]));
}

#[tokio::test]
async fn given_buyer_when_removed_then_others_survive() {
    // Given: A lot with two buyers
    let (ctx, _dir) = create_test_context().await;
    let repo = LotRepository::new(&ctx);
    let lot = create_test_lot("First Lot");
    repo.create(&lot).await.unwrap();

    let keeper = Uuid::new_v4();
    let refunded = Uuid::new_v4();
    repo.add_buyer(lot.id, keeper).await.unwrap();
    repo.add_buyer(lot.id, refunded).await.unwrap();

    // When: Refunding one buyer
    let updated = repo.remove_buyer(lot.id, refunded).await.unwrap();

    // Then: Only the other buyer remains
    assert_that!(updated.buyers, eq(&vec![keeper]));
}

#[tokio::test]
async fn given_missing_lot_when_adding_buyer_then_returns_not_found() {
    // Given: An empty tenant database
    let (ctx, _dir) = create_test_context().await;
    let repo = LotRepository::new(&ctx);

    // When: Recording a purchase against a lot that doesn't exist
    let result = repo.add_buyer(Uuid::new_v4(), Uuid::new_v4()).await;

    // Then: NotFound
    assert!(matches!(result, Err(DbError::NotFound { .. })));
}

#[tokio::test]
async fn given_existing_lot_when_deleted_then_not_found_by_queries() {
    // Given: A lot
    let (ctx, _dir) = create_test_context().await;
    let repo = LotRepository::new(&ctx);
    let lot = create_test_lot("First Lot");
    repo.create(&lot).await.unwrap();

    // When: Soft deleting it
    repo.delete(lot.id).await.unwrap();

    // Then: Invisible everywhere
    assert_that!(repo.find_by_id(lot.id).await.unwrap(), none());
    assert_that!(repo.find_all().await.unwrap(), is_empty());
}
