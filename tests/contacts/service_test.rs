//! Tests for `src/contacts/service.rs` — normalization and not-found handling.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use rolodex::contacts::service::{ContactService, SqlContactService};
use rolodex::contacts::store::ContactStore;
use rolodex::contacts::NewContact;

async fn setup_service() -> SqlContactService {
    let opts = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(opts)
        .await
        .expect("pool should connect");

    rolodex::db::apply_migrations(&pool)
        .await
        .expect("migrations should apply");

    SqlContactService::new(ContactStore::new(pool))
}

fn new_contact(first: &str, last: &str, email: &str, phone: &str) -> NewContact {
    NewContact {
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        email: email.to_owned(),
        phone: phone.to_owned(),
    }
}

#[tokio::test]
async fn create_assigns_positive_id_and_normalizes() {
    let service = setup_service().await;

    let created = service
        .create(new_contact(
            "  Jane ",
            " Doe  ",
            "  Jane.Doe@Example.COM ",
            " (123) 456-7890 ",
        ))
        .await
        .expect("create should succeed");

    assert!(created.id > 0);
    assert_eq!(created.first_name, "Jane");
    assert_eq!(created.last_name, "Doe");
    assert_eq!(created.email, "jane.doe@example.com");
    assert_eq!(created.phone, "(123) 456-7890");
}

#[tokio::test]
async fn create_then_get_by_id_round_trips() {
    let service = setup_service().await;

    let created = service
        .create(new_contact("Jane", "Doe", "jane@example.com", "0123456789"))
        .await
        .expect("create should succeed");

    let fetched = service
        .get_by_id(created.id)
        .await
        .expect("get should succeed")
        .expect("contact should exist");

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn update_absent_id_returns_none_and_mutates_nothing() {
    let service = setup_service().await;
    service
        .create(new_contact("Jane", "Doe", "jane@example.com", "0123456789"))
        .await
        .expect("create should succeed");

    let result = service
        .update(
            99999,
            new_contact("Mallory", "Mallet", "m@example.com", "0123456789"),
        )
        .await
        .expect("update should succeed");
    assert!(result.is_none());

    let all = service.get_all().await.expect("get_all should succeed");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].first_name, "Jane");
}

#[tokio::test]
async fn update_present_id_overwrites_and_preserves_id() {
    let service = setup_service().await;
    let created = service
        .create(new_contact("Jane", "Doe", "jane@example.com", "0123456789"))
        .await
        .expect("create should succeed");

    let updated = service
        .update(
            created.id,
            new_contact("Janet", "Doer", " Janet@Example.com", "0987654321"),
        )
        .await
        .expect("update should succeed")
        .expect("contact should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.first_name, "Janet");
    assert_eq!(updated.email, "janet@example.com");
}

#[tokio::test]
async fn delete_absent_id_returns_false() {
    let service = setup_service().await;
    assert!(!service.delete(99999).await.expect("delete should succeed"));
}

#[tokio::test]
async fn empty_and_whitespace_queries_behave_like_get_all() {
    let service = setup_service().await;
    service
        .create(new_contact("Bob", "Zimmer", "bob@example.com", "0123456789"))
        .await
        .expect("create should succeed");
    service
        .create(new_contact("Alice", "Young", "alice@example.com", "0123456789"))
        .await
        .expect("create should succeed");

    let all = service.get_all().await.expect("get_all should succeed");
    let empty = service.search("").await.expect("search should succeed");
    let blank = service.search("   ").await.expect("search should succeed");

    assert_eq!(empty, all);
    assert_eq!(blank, all);
}

#[tokio::test]
async fn search_requires_every_term_to_match_some_field() {
    let service = setup_service().await;
    service
        .create(new_contact("Jane", "Doe", "jane@example.com", "0123456789"))
        .await
        .expect("create should succeed");
    service
        .create(new_contact("Jane", "Smith", "smith@example.com", "0123456789"))
        .await
        .expect("create should succeed");
    service
        .create(new_contact("John", "Quill", "doe.jane@example.com", "0123456789"))
        .await
        .expect("create should succeed");

    let found = service
        .search("Jane Doe")
        .await
        .expect("search should succeed");

    // Jane Doe matches on names; John Quill matches both terms via email.
    let firsts: Vec<&str> = found.iter().map(|c| c.first_name.as_str()).collect();
    assert_eq!(firsts, ["Jane", "John"]);
}
