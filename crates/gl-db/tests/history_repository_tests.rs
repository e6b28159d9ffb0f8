mod common;

use common::{create_test_attendee, create_test_context, create_test_history};

use gl_db::{DbError, HistoryRepository};

use chrono::{Duration, Utc};
use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_valid_history_when_created_then_can_be_found_by_id() {
    // Given: A fresh tenant database
    let (ctx, _dir) = create_test_context().await;
    let repo = HistoryRepository::new(&ctx);
    let mut history = create_test_history("Friday VIP");
    history.event_name = Some("Halloween Party".to_string());
    history.list_id = Some(Uuid::new_v4());

    // When: Archiving the list
    repo.create(&history).await.unwrap();

    // Then: Finding by ID returns the snapshot
    let result = repo.find_by_id(history.id).await.unwrap();
    assert_that!(result, some(anything()));
    let found = result.unwrap();
    assert_that!(found.name, eq("Friday VIP"));
    assert_that!(found.event_name, some(eq("Halloween Party")));
    assert_that!(found.list_id, eq(history.list_id));
    assert_that!(found.attendees, is_empty());
}

#[tokio::test]
async fn given_histories_when_listed_then_most_recent_list_first() {
    // Given: Two archives a week apart
    let (ctx, _dir) = create_test_context().await;
    let repo = HistoryRepository::new(&ctx);

    let mut older = create_test_history("Last Week");
    older.list_date = Utc::now() - Duration::days(7);
    repo.create(&older).await.unwrap();

    let recent = create_test_history("Tonight");
    repo.create(&recent).await.unwrap();

    // When: Listing all histories
    let histories = repo.find_all().await.unwrap();

    // Then: Newest list date comes first
    assert_that!(histories, len(eq(2)));
    assert_that!(histories[0].name, eq("Tonight"));
    assert_that!(histories[1].name, eq("Last Week"));
}

#[tokio::test]
async fn given_attendee_when_added_then_settlement_data_round_trips() {
    // Given: An archived list
    let (ctx, _dir) = create_test_context().await;
    let repo = HistoryRepository::new(&ctx);
    let history = create_test_history("Friday VIP");
    repo.create(&history).await.unwrap();

    let user_id = Uuid::new_v4();
    let mut attendee = create_test_attendee(user_id);
    attendee.ticket.paying = false;
    attendee.ticket.reason = Some("staff".to_string());

    // When: Recording the attendee
    let updated = repo.add_attendee(history.id, &attendee).await.unwrap();

    // Then: Rounds and ticket survive storage
    assert_that!(updated.attendees, len(eq(1)));
    assert_that!(updated.attendees[0].user_id, eq(user_id));
    assert_that!(updated.attendees[0].first_round, eq(true));
    assert_that!(updated.attendees[0].ticket.paying, eq(false));
    assert_that!(updated.attendees[0].ticket.reason, some(eq("staff")));
}

#[tokio::test]
async fn given_known_attendee_when_upserted_then_entry_replaced_in_place() {
    // Given: An archive with one attendee, first round only
    let (ctx, _dir) = create_test_context().await;
    let repo = HistoryRepository::new(&ctx);
    let history = create_test_history("Friday VIP");
    repo.create(&history).await.unwrap();

    let user_id = Uuid::new_v4();
    repo.add_attendee(history.id, &create_test_attendee(user_id))
        .await
        .unwrap();

    // When: Upserting the same user with the second round marked
    let mut attendee = create_test_attendee(user_id);
    attendee.second_round = true;
    let updated = repo.upsert_attendee(history.id, &attendee, None).await.unwrap();

    // Then: Still one entry, with both rounds
    assert_that!(updated.attendees, len(eq(1)));
    assert_that!(updated.attendees[0].second_round, eq(true));
}

#[tokio::test]
async fn given_unknown_attendee_when_upserted_then_appended() {
    // Given: An archive with one attendee
    let (ctx, _dir) = create_test_context().await;
    let repo = HistoryRepository::new(&ctx);
    let history = create_test_history("Friday VIP");
    repo.create(&history).await.unwrap();
    repo.add_attendee(history.id, &create_test_attendee(Uuid::new_v4()))
        .await
        .unwrap();

    // When: Upserting a user not on the list
    let newcomer = create_test_attendee(Uuid::new_v4());
    let updated = repo
        .upsert_attendee(history.id, &newcomer, None)
        .await
        .unwrap();

    // Then: Appended as a second entry
    assert_that!(updated.attendees, len(eq(2)));
    assert_that!(updated.attendees[1].user_id, eq(newcomer.user_id));
}

#[tokio::test]
async fn given_exam_archive_when_graded_then_score_stored() {
    // Given: An exam list archive
    let (ctx, _dir) = create_test_context().await;
    let repo = HistoryRepository::new(&ctx);
    let mut history = create_test_history("Promoter Exam");
    history.is_exam = true;
    repo.create(&history).await.unwrap();

    // When: Upserting an attendee with a score
    let attendee = create_test_attendee(Uuid::new_v4());
    let updated = repo
        .upsert_attendee(history.id, &attendee, Some(8.5))
        .await
        .unwrap();

    // Then: The score lands on the history
    assert_that!(updated.exam_score, some(eq(8.5)));
    let found = repo.find_by_id(history.id).await.unwrap().unwrap();
    assert_that!(found.exam_score, some(eq(8.5)));
}

#[tokio::test]
async fn given_existing_history_when_deleted_then_gone_for_good() {
    // Given: An archive
    let (ctx, _dir) = create_test_context().await;
    let repo = HistoryRepository::new(&ctx);
    let history = create_test_history("Friday VIP");
    repo.create(&history).await.unwrap();

    // When: Deleting it
    repo.delete(history.id).await.unwrap();

    // Then: Hard deleted
    assert_that!(repo.find_by_id(history.id).await.unwrap(), none());
    assert_that!(repo.find_all().await.unwrap(), is_empty());
}

#[tokio::test]
async fn given_missing_history_when_deleted_then_returns_not_found() {
    // Given: An empty tenant database
    let (ctx, _dir) = create_test_context().await;
    let repo = HistoryRepository::new(&ctx);

    // When: Deleting an archive that doesn't exist
    let result = repo.delete(Uuid::new_v4()).await;

    // Then: NotFound
    assert!(matches!(result, Err(DbError::NotFound { .. })));
}
