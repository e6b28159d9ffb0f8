mod common;

use common::{create_test_context, create_test_event, create_test_guest_list};

use gl_db::{DbError, EventRepository, GuestListPatch, GuestListRepository};

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_valid_list_when_created_then_can_be_found_by_id() {
    // Given: A fresh tenant database
    let (ctx, _dir) = create_test_context().await;
    let repo = GuestListRepository::new(&ctx);
    let list = create_test_guest_list("VIP List");

    // When: Creating the list
    repo.create(&list).await.unwrap();

    // Then: Finding by ID returns the list
    let result = repo.find_by_id(list.id).await.unwrap();
    assert_that!(result, some(anything()));
    let found = result.unwrap();
    assert_that!(found.id, eq(list.id));
    assert_that!(found.title, eq("VIP List"));
    assert_that!(found.is_exam, eq(false));
}

#[tokio::test]
async fn given_list_attached_to_event_when_finding_by_event_then_returns_it() {
    // Given: An event with one attached list and one detached list
    let (ctx, _dir) = create_test_context().await;
    let events = EventRepository::new(&ctx);
    let repo = GuestListRepository::new(&ctx);

    let event = create_test_event("Halloween Party");
    events.create(&event).await.unwrap();

    let mut attached = create_test_guest_list("VIP List");
    attached.event_id = Some(event.id);
    attached.event_name = Some(event.title.clone());
    repo.create(&attached).await.unwrap();

    let detached = create_test_guest_list("Walk-ins");
    repo.create(&detached).await.unwrap();

    // When: Finding lists by event
    let lists = repo.find_by_event(event.id).await.unwrap();

    // Then: Only the attached list is returned, with the denormalized name
    assert_that!(lists, len(eq(1)));
    assert_that!(lists[0].id, eq(attached.id));
    assert_that!(lists[0].event_name, some(eq("Halloween Party")));
}

#[tokio::test]
async fn given_existing_list_when_updated_partially_then_other_fields_survive() {
    // Given: An exam list
    let (ctx, _dir) = create_test_context().await;
    let repo = GuestListRepository::new(&ctx);
    let mut list = create_test_guest_list("Promoter Exam");
    list.is_exam = true;
    repo.create(&list).await.unwrap();

    // When: Updating only the title
    let updated = repo
        .update(
            list.id,
            &GuestListPatch {
                title: Some("Promoter Exam II".to_string()),
                ..GuestListPatch::default()
            },
        )
        .await
        .unwrap();

    // Then: Title changed, exam flag survived
    assert_that!(updated.title, eq("Promoter Exam II"));
    assert_that!(updated.is_exam, eq(true));
}

#[tokio::test]
async fn given_missing_list_when_updated_then_returns_not_found() {
    // Given: An empty tenant database
    let (ctx, _dir) = create_test_context().await;
    let repo = GuestListRepository::new(&ctx);

    // When: Updating a list that doesn't exist
    let result = repo
        .update(Uuid::new_v4(), &GuestListPatch::default())
        .await;

    // Then: NotFound
    assert!(matches!(result, Err(DbError::NotFound { .. })));
}

#[tokio::test]
async fn given_existing_list_when_deleted_then_not_found_by_queries() {
    // Given: A list
    let (ctx, _dir) = create_test_context().await;
    let repo = GuestListRepository::new(&ctx);
    let list = create_test_guest_list("VIP List");
    repo.create(&list).await.unwrap();

    // When: Soft deleting it
    repo.delete(list.id).await.unwrap();

    // Then: Invisible everywhere
    assert_that!(repo.find_by_id(list.id).await.unwrap(), none());
    assert_that!(repo.find_all().await.unwrap(), is_empty());
}

#[tokio::test]
async fn given_missing_list_when_deleted_then_returns_not_found() {
    // Given: An empty tenant database
    let (ctx, _dir) = create_test_context().await;
    let repo = GuestListRepository::new(&ctx);

    // When: Deleting a list that doesn't exist
    let result = repo.delete(Uuid::new_v4()).await;

    // Then: NotFound
    assert!(matches!(result, Err(DbError::NotFound { .. })));
}

#[tokio::test]
async fn given_deleted_list_when_finding_by_event_then_excluded() {
    // Given: An event with one attached list, later deleted
    let (ctx, _dir) = create_test_context().await;
    let repo = GuestListRepository::new(&ctx);

    let event_id = Uuid::new_v4();
    let mut list = create_test_guest_list("VIP List");
    list.event_id = Some(event_id);
    repo.create(&list).await.unwrap();
    repo.delete(list.id).await.unwrap();

    // When: Finding lists by event
    let lists = repo.find_by_event(event_id).await.unwrap();

    // Then: Empty
    assert_that!(lists, is_empty());
}
