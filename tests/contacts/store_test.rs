//! Tests for `src/contacts/store.rs` against in-memory SQLite.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use rolodex::contacts::search::SearchFilter;
use rolodex::contacts::store::ContactStore;
use rolodex::contacts::NewContact;

async fn setup_pool() -> SqlitePool {
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
    pool
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
async fn insert_then_fetch_by_id_round_trips() {
    let store = ContactStore::new(setup_pool().await);
    let jane = new_contact("Jane", "Doe", "jane.doe@example.com", "(123) 456-7890");

    let id = store.insert(&jane).await.expect("insert should succeed");
    assert!(id > 0);

    let fetched = store
        .fetch_by_id(id)
        .await
        .expect("fetch should succeed")
        .expect("row should exist");

    assert_eq!(fetched.id, id);
    assert_eq!(fetched.first_name, "Jane");
    assert_eq!(fetched.last_name, "Doe");
    assert_eq!(fetched.email, "jane.doe@example.com");
    assert_eq!(fetched.phone, "(123) 456-7890");
}

#[tokio::test]
async fn fetch_by_id_returns_none_for_absent_row() {
    let store = ContactStore::new(setup_pool().await);
    let fetched = store.fetch_by_id(99999).await.expect("fetch should succeed");
    assert!(fetched.is_none());
}

#[tokio::test]
async fn fetch_all_returns_canonical_order() {
    let store = ContactStore::new(setup_pool().await);
    store
        .insert(&new_contact("bob", "Zimmer", "bob@example.com", "0123456789"))
        .await
        .expect("insert should succeed");
    store
        .insert(&new_contact("Alice", "Young", "alice@example.com", "0123456789"))
        .await
        .expect("insert should succeed");
    store
        .insert(&new_contact("alice", "Abbott", "abbott@example.com", "0123456789"))
        .await
        .expect("insert should succeed");

    let all = store.fetch_all().await.expect("fetch should succeed");
    let names: Vec<(&str, &str)> = all
        .iter()
        .map(|c| (c.first_name.as_str(), c.last_name.as_str()))
        .collect();

    // First name ascending (case-insensitive), then last name ascending.
    assert_eq!(
        names,
        [("alice", "Abbott"), ("Alice", "Young"), ("bob", "Zimmer")]
    );
}

#[tokio::test]
async fn search_single_term_matches_any_field() {
    let store = ContactStore::new(setup_pool().await);
    store
        .insert(&new_contact("Jane", "Doe", "jane@example.com", "0123456789"))
        .await
        .expect("insert should succeed");
    store
        .insert(&new_contact("John", "Smith", "doe.fan@example.com", "0123456789"))
        .await
        .expect("insert should succeed");
    store
        .insert(&new_contact("Mary", "Major", "mary@example.com", "0123456789"))
        .await
        .expect("insert should succeed");

    let filter = SearchFilter::parse("doe").expect("should parse");
    let found = store.search(&filter).await.expect("search should succeed");

    // Matches Jane by last name and John by email, case-insensitively.
    let firsts: Vec<&str> = found.iter().map(|c| c.first_name.as_str()).collect();
    assert_eq!(firsts, ["Jane", "John"]);
}

#[tokio::test]
async fn search_terms_are_and_combined_across_fields() {
    let store = ContactStore::new(setup_pool().await);
    store
        .insert(&new_contact("Jane", "Doe", "jane@example.com", "0123456789"))
        .await
        .expect("insert should succeed");
    store
        .insert(&new_contact("Jane", "Smith", "smith@example.com", "0123456789"))
        .await
        .expect("insert should succeed");
    store
        .insert(&new_contact("John", "Doe", "john@example.com", "0123456789"))
        .await
        .expect("insert should succeed");

    let filter = SearchFilter::parse("Jane Doe").expect("should parse");
    let found = store.search(&filter).await.expect("search should succeed");

    // Every returned record must match both terms somewhere.
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].first_name, "Jane");
    assert_eq!(found[0].last_name, "Doe");
}

#[tokio::test]
async fn search_matches_substrings() {
    let store = ContactStore::new(setup_pool().await);
    store
        .insert(&new_contact("Jane", "Doe", "jane@example.com", "0123456789"))
        .await
        .expect("insert should succeed");

    let filter = SearchFilter::parse("AN").expect("should parse");
    let found = store.search(&filter).await.expect("search should succeed");
    assert_eq!(found.len(), 1);
}

#[tokio::test]
async fn update_overwrites_all_fields_and_keeps_id() {
    let store = ContactStore::new(setup_pool().await);
    let id = store
        .insert(&new_contact("Jane", "Doe", "jane@example.com", "0123456789"))
        .await
        .expect("insert should succeed");

    store
        .update(
            id,
            &new_contact("Janet", "Doer", "janet@example.com", "0987654321"),
        )
        .await
        .expect("update should succeed");

    let fetched = store
        .fetch_by_id(id)
        .await
        .expect("fetch should succeed")
        .expect("row should exist");
    assert_eq!(fetched.id, id);
    assert_eq!(fetched.first_name, "Janet");
    assert_eq!(fetched.last_name, "Doer");
    assert_eq!(fetched.email, "janet@example.com");
    assert_eq!(fetched.phone, "0987654321");
}

#[tokio::test]
async fn delete_reports_whether_a_row_was_removed() {
    let store = ContactStore::new(setup_pool().await);
    let id = store
        .insert(&new_contact("Jane", "Doe", "jane@example.com", "0123456789"))
        .await
        .expect("insert should succeed");

    assert!(store.delete(id).await.expect("delete should succeed"));
    assert!(!store.delete(id).await.expect("delete should succeed"));
    assert!(store
        .fetch_by_id(id)
        .await
        .expect("fetch should succeed")
        .is_none());
}
