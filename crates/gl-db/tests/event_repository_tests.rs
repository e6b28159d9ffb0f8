mod common;

use common::{create_test_context, create_test_event};

use gl_db::{DbError, EventPatch, EventRepository};

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_valid_event_when_created_then_can_be_found_by_id() {
    // Given: A fresh tenant database
    let (ctx, _dir) = create_test_context().await;
    let repo = EventRepository::new(&ctx);
    let event = create_test_event("Halloween Party");

    // When: Creating the event
    repo.create(&event).await.unwrap();

    // Then: Finding by ID returns the event
    let result = repo.find_by_id(event.id).await.unwrap();
    assert_that!(result, some(anything()));
    let found = result.unwrap();
    assert_that!(found.id, eq(event.id));
    assert_that!(found.title, eq("Halloween Party"));
    assert_that!(found.base_price, eq(30.0));
    assert_that!(found.female_base_price, eq(20.0));
    assert_that!(found.male_base_price, eq(40.0));
}

#[tokio::test]
async fn given_empty_database_when_finding_nonexistent_id_then_returns_none() {
    // Given: An empty tenant database
    let (ctx, _dir) = create_test_context().await;
    let repo = EventRepository::new(&ctx);

    // When: Finding an event that doesn't exist
    let result = repo.find_by_id(Uuid::new_v4()).await.unwrap();

    // Then: Returns None
    assert_that!(result, none());
}

#[tokio::test]
async fn given_existing_event_when_updated_partially_then_other_fields_survive() {
    // Given: An event
    let (ctx, _dir) = create_test_context().await;
    let repo = EventRepository::new(&ctx);
    let event = create_test_event("Halloween Party");
    repo.create(&event).await.unwrap();

    // When: Updating only the title
    let updated = repo
        .update(
            event.id,
            &EventPatch {
                title: Some("New Year Party".to_string()),
                ..EventPatch::default()
            },
        )
        .await
        .unwrap();

    // Then: Title changed, prices survived
    assert_that!(updated.title, eq("New Year Party"));
    assert_that!(updated.base_price, eq(30.0));
    assert_that!(updated.male_base_price, eq(40.0));
}

#[tokio::test]
async fn given_missing_event_when_updated_then_returns_not_found() {
    // Given: An empty tenant database
    let (ctx, _dir) = create_test_context().await;
    let repo = EventRepository::new(&ctx);

    // When: Updating an event that doesn't exist
    let result = repo.update(Uuid::new_v4(), &EventPatch::default()).await;

    // Then: NotFound
    assert!(matches!(result, Err(DbError::NotFound { .. })));
}

#[tokio::test]
async fn given_deleted_event_when_updated_then_returns_not_found() {
    // Given: A soft-deleted event
    let (ctx, _dir) = create_test_context().await;
    let repo = EventRepository::new(&ctx);
    let event = create_test_event("Halloween Party");
    repo.create(&event).await.unwrap();
    repo.delete(event.id).await.unwrap();

    // When: Updating it
    let result = repo.update(event.id, &EventPatch::default()).await;

    // Then: Indistinguishable from a missing event
    assert!(matches!(result, Err(DbError::NotFound { .. })));
}

#[tokio::test]
async fn given_existing_event_when_deleted_then_not_found_by_queries() {
    // Given: An event
    let (ctx, _dir) = create_test_context().await;
    let repo = EventRepository::new(&ctx);
    let event = create_test_event("Halloween Party");
    repo.create(&event).await.unwrap();

    // When: Soft deleting it
    repo.delete(event.id).await.unwrap();

    // Then: Invisible to find_by_id and find_all
    assert_that!(repo.find_by_id(event.id).await.unwrap(), none());
    assert_that!(repo.find_all().await.unwrap(), is_empty());
}

#[tokio::test]
async fn given_missing_event_when_deleted_then_returns_not_found() {
    // Given: An empty tenant database
    let (ctx, _dir) = create_test_context().await;
    let repo = EventRepository::new(&ctx);

    // When: Deleting an event that doesn't exist
    let result = repo.delete(Uuid::new_v4()).await;

    // Then: NotFound
    assert!(matches!(result, Err(DbError::NotFound { .. })));
}

#[tokio::test]
async fn given_deleted_event_when_deleted_again_then_returns_not_found() {
    // Given: A soft-deleted event
    let (ctx, _dir) = create_test_context().await;
    let repo = EventRepository::new(&ctx);
    let event = create_test_event("Halloween Party");
    repo.create(&event).await.unwrap();
    repo.delete(event.id).await.unwrap();

    // When: Deleting it again
    let result = repo.delete(event.id).await;

    // Then: NotFound
    assert!(matches!(result, Err(DbError::NotFound { .. })));
}

#[tokio::test]
async fn given_multiple_events_when_finding_all_then_excludes_deleted() {
    // Given: Two events, one deleted
    let (ctx, _dir) = create_test_context().await;
    let repo = EventRepository::new(&ctx);
    let event1 = create_test_event("Event One");
    let event2 = create_test_event("Event Two");
    repo.create(&event1).await.unwrap();
    repo.create(&event2).await.unwrap();
    repo.delete(event1.id).await.unwrap();

    // When: Listing events
    let events = repo.find_all().await.unwrap();

    // Then: Only the live one remains
    assert_that!(events, len(eq(1)));
    assert_that!(events[0].id, eq(event2.id));
}
