//! Integration tests for database operations.

use marginalia::db::{
    count_posts, count_remarks, count_remarks_for_post, create_post, create_remark, create_user,
    delete_post, get_post_by_id, get_posts_with_authors, get_remarks_with_authors, Database,
};
use tempfile::TempDir;

async fn setup_db() -> (Database, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.sqlite");
    let db = Database::new(&db_path)
        .await
        .expect("Failed to create database");
    (db, temp_dir)
}

/// Create a user with a placeholder hash. These tests never verify
/// passwords, so a real argon2 hash would only slow them down.
async fn make_user(db: &Database, username: &str) -> i64 {
    create_user(db.pool(), username, "placeholder-hash")
        .await
        .expect("Failed to create user")
}

#[tokio::test]
async fn test_create_and_get_post() {
    let (db, _temp_dir) = setup_db().await;
    let user_id = make_user(&db, "alice").await;

    let post_id = create_post(
        db.pool(),
        user_id,
        "Hello, marginalia!",
        "2024-01-01T10:00:00+00:00",
    )
    .await
    .expect("Failed to create post");
    assert!(post_id > 0);

    let post = get_post_by_id(db.pool(), post_id)
        .await
        .expect("Failed to get post")
        .expect("Post not found");
    assert_eq!(post.user_id, user_id);
    assert_eq!(post.content, "Hello, marginalia!");
    assert_eq!(post.created_at, "2024-01-01T10:00:00+00:00");

    // Non-existent post
    let missing = get_post_by_id(db.pool(), 9999)
        .await
        .expect("Failed to query");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_posts_listed_newest_first() {
    let (db, _temp_dir) = setup_db().await;
    let alice = make_user(&db, "alice").await;
    let bob = make_user(&db, "bob").await;

    create_post(db.pool(), alice, "oldest", "2024-01-01T10:00:00+00:00")
        .await
        .unwrap();
    create_post(db.pool(), bob, "middle", "2024-01-02T10:00:00+00:00")
        .await
        .unwrap();
    create_post(db.pool(), alice, "newest", "2024-01-03T10:00:00+00:00")
        .await
        .unwrap();

    let posts = get_posts_with_authors(db.pool())
        .await
        .expect("Failed to list posts");

    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0].content, "newest");
    assert_eq!(posts[1].content, "middle");
    assert_eq!(posts[2].content, "oldest");
    assert_eq!(posts[0].author_username, "alice");
    assert_eq!(posts[1].author_username, "bob");
}

#[tokio::test]
async fn test_posts_with_equal_timestamps_order_by_id() {
    let (db, _temp_dir) = setup_db().await;
    let alice = make_user(&db, "alice").await;

    let first = create_post(db.pool(), alice, "first", "2024-01-01T10:00:00+00:00")
        .await
        .unwrap();
    let second = create_post(db.pool(), alice, "second", "2024-01-01T10:00:00+00:00")
        .await
        .unwrap();

    let posts = get_posts_with_authors(db.pool())
        .await
        .expect("Failed to list posts");

    // Ties on created_at fall back to id, newest insert first
    assert_eq!(posts[0].id, second);
    assert_eq!(posts[1].id, first);
}

#[tokio::test]
async fn test_create_and_list_remarks() {
    let (db, _temp_dir) = setup_db().await;
    let alice = make_user(&db, "alice").await;
    let bob = make_user(&db, "bob").await;

    let post_id = create_post(db.pool(), alice, "A post worth remarking on", "2024-01-01T10:00:00+00:00")
        .await
        .unwrap();

    let remark_id = create_remark(
        db.pool(),
        post_id,
        bob,
        "worth remarking",
        "Agreed!",
        "2024-01-01T11:00:00+00:00",
    )
    .await
    .expect("Failed to create remark");
    assert!(remark_id > 0);

    create_remark(
        db.pool(),
        post_id,
        alice,
        "A post",
        "Thanks for reading",
        "2024-01-01T12:00:00+00:00",
    )
    .await
    .expect("Failed to create remark");

    let remarks = get_remarks_with_authors(db.pool())
        .await
        .expect("Failed to list remarks");

    // Oldest first, with the authors' usernames joined in
    assert_eq!(remarks.len(), 2);
    assert_eq!(remarks[0].highlighted_text, "worth remarking");
    assert_eq!(remarks[0].remark_text, "Agreed!");
    assert_eq!(remarks[0].author_username, "bob");
    assert_eq!(remarks[1].author_username, "alice");
    assert!(remarks[0].created_at < remarks[1].created_at);

    assert_eq!(count_remarks_for_post(db.pool(), post_id).await.unwrap(), 2);
}

#[tokio::test]
async fn test_delete_post_cascades_to_remarks() {
    let (db, _temp_dir) = setup_db().await;
    let alice = make_user(&db, "alice").await;
    let bob = make_user(&db, "bob").await;

    let doomed = create_post(db.pool(), alice, "doomed post", "2024-01-01T10:00:00+00:00")
        .await
        .unwrap();
    let survivor = create_post(db.pool(), bob, "surviving post", "2024-01-01T11:00:00+00:00")
        .await
        .unwrap();

    create_remark(db.pool(), doomed, bob, "doomed", "rip", "2024-01-01T12:00:00+00:00")
        .await
        .unwrap();
    create_remark(db.pool(), doomed, alice, "post", "indeed", "2024-01-01T13:00:00+00:00")
        .await
        .unwrap();
    create_remark(
        db.pool(),
        survivor,
        alice,
        "surviving",
        "lucky",
        "2024-01-01T14:00:00+00:00",
    )
    .await
    .unwrap();

    assert_eq!(count_remarks(db.pool()).await.unwrap(), 3);

    delete_post(db.pool(), doomed)
        .await
        .expect("Failed to delete post");

    // The post and both of its remarks are gone
    assert!(get_post_by_id(db.pool(), doomed).await.unwrap().is_none());
    assert_eq!(count_remarks_for_post(db.pool(), doomed).await.unwrap(), 0);

    // The other post and its remark are untouched
    assert!(get_post_by_id(db.pool(), survivor).await.unwrap().is_some());
    assert_eq!(count_remarks(db.pool()).await.unwrap(), 1);
    assert_eq!(
        count_remarks_for_post(db.pool(), survivor).await.unwrap(),
        1
    );
}

#[tokio::test]
async fn test_delete_missing_post_is_noop() {
    let (db, _temp_dir) = setup_db().await;
    let alice = make_user(&db, "alice").await;
    create_post(db.pool(), alice, "still here", "2024-01-01T10:00:00+00:00")
        .await
        .unwrap();

    delete_post(db.pool(), 9999)
        .await
        .expect("Deleting a missing post should not error");

    assert_eq!(count_posts(db.pool()).await.unwrap(), 1);
}

#[tokio::test]
async fn test_counts_start_at_zero() {
    let (db, _temp_dir) = setup_db().await;

    assert_eq!(count_posts(db.pool()).await.unwrap(), 0);
    assert_eq!(count_remarks(db.pool()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_reopening_database_preserves_data() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.sqlite");

    let db = Database::new(&db_path)
        .await
        .expect("Failed to create database");
    let alice = make_user(&db, "alice").await;
    create_post(db.pool(), alice, "persistent", "2024-01-01T10:00:00+00:00")
        .await
        .unwrap();
    drop(db);

    // Migrations must tolerate an already-migrated file
    let db = Database::new(&db_path)
        .await
        .expect("Failed to reopen database");
    let posts = get_posts_with_authors(db.pool())
        .await
        .expect("Failed to list posts");
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].content, "persistent");
}
