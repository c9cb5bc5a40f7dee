use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::notes::DEFAULT_COLOR;
use crate::tests::helper;

#[sqlx::test]
async fn test_add_note(pool: sqlx::PgPool) {
    let mut app = helper::setup_test_app(pool.clone()).await;

    let note_id = helper::add_note(&mut app, "Groceries", "Milk, eggs").await;

    let note = helper::find_note(&pool, &note_id).await;
    assert!(note.is_some());
    let note = note.unwrap();
    assert_eq!(note_id, note.id);
    assert_eq!("Groceries", note.title);
    assert_eq!("Milk, eggs", note.body);
    assert_eq!("u1", note.created_by_user_id);
    assert_eq!(None, note.parent_id);
    assert_eq!(None, note.tag);
}

#[sqlx::test]
async fn test_add_note_generates_unique_ids(pool: sqlx::PgPool) {
    let mut app = helper::setup_test_app(pool.clone()).await;

    let first = helper::add_note(&mut app, "Groceries", "Milk, eggs").await;
    let second = helper::add_note(&mut app, "Groceries", "Milk, eggs").await;
    let third = helper::add_note(&mut app, "Groceries", "Milk, eggs").await;

    assert_ne!(first, second);
    assert_ne!(second, third);
    assert_ne!(first, third);
    assert_eq!(3, helper::count_notes(&pool).await);
}

#[sqlx::test]
async fn test_add_note_default_color(pool: sqlx::PgPool) {
    let mut app = helper::setup_test_app(pool.clone()).await;

    // missing color
    let note_id = helper::add_note(&mut app, "Groceries", "Milk, eggs").await;
    let note = helper::find_note(&pool, &note_id).await.unwrap();
    assert_eq!(Some(DEFAULT_COLOR.to_string()), note.color);

    // explicit null color
    let payload = json!({
        "title": "Groceries",
        "body": "Milk, eggs",
        "created_by_user_id": "u1",
        "color": null,
    });
    let (status_code, note_id, _) = helper::maybe_add_note(&mut app, &payload).await;
    assert_eq!(StatusCode::CREATED, status_code);
    let note = helper::find_note(&pool, &note_id.unwrap()).await.unwrap();
    assert_eq!(Some(DEFAULT_COLOR.to_string()), note.color);
}

#[sqlx::test]
async fn test_add_note_with_all_fields(pool: sqlx::PgPool) {
    let mut app = helper::setup_test_app(pool.clone()).await;

    // the parent does not have to exist
    let parent_id = Uuid::new_v4();

    let payload = json!({
        "title": "Groceries",
        "body": "Milk, eggs",
        "parent_id": parent_id,
        "created_by_user_id": "toprak",
        "color": "#FF0000",
        "tag": "home",
    });
    let (status_code, note_id, error) = helper::maybe_add_note(&mut app, &payload).await;
    assert_eq!(StatusCode::CREATED, status_code);
    assert_eq!(None, error);

    let note = helper::find_note(&pool, &note_id.unwrap()).await.unwrap();
    assert_eq!(Some(parent_id), note.parent_id);
    assert_eq!("toprak", note.created_by_user_id);
    assert_eq!(Some("#FF0000".to_string()), note.color);
    assert_eq!(Some("home".to_string()), note.tag);
}

#[sqlx::test]
async fn test_add_note_missing_required_fields(pool: sqlx::PgPool) {
    let mut app = helper::setup_test_app(pool.clone()).await;

    for missing in ["title", "body", "created_by_user_id"] {
        let mut payload = json!({
            "title": "Groceries",
            "body": "Milk, eggs",
            "created_by_user_id": "u1",
        });
        payload.as_object_mut().unwrap().remove(missing);

        let (status_code, note_id, error) = helper::maybe_add_note(&mut app, &payload).await;
        assert_eq!(StatusCode::BAD_REQUEST, status_code);
        assert_eq!(None, note_id);

        let error = error.unwrap();
        assert_eq!("Data error", error.message);
        assert!(
            error
                .description
                .unwrap()
                .contains(&format!("missing field `{missing}`"))
        );
    }

    // null is as good as missing
    let payload = json!({
        "title": null,
        "body": "Milk, eggs",
        "created_by_user_id": "u1",
    });
    let (status_code, _, error) = helper::maybe_add_note(&mut app, &payload).await;
    assert_eq!(StatusCode::BAD_REQUEST, status_code);
    assert_eq!("Data error", error.unwrap().message);

    assert_eq!(0, helper::count_notes(&pool).await);
}

#[sqlx::test]
async fn test_add_note_invalid_parent_id(pool: sqlx::PgPool) {
    let mut app = helper::setup_test_app(pool.clone()).await;

    let payload = json!({
        "title": "Groceries",
        "body": "Milk, eggs",
        "parent_id": "some-id",
        "created_by_user_id": "u1",
    });
    let (status_code, _, error) = helper::maybe_add_note(&mut app, &payload).await;
    assert_eq!(StatusCode::BAD_REQUEST, status_code);

    let error = error.unwrap();
    assert_eq!("Data error", error.message);
    assert!(error.description.unwrap().contains("parent_id"));

    assert_eq!(0, helper::count_notes(&pool).await);
}
