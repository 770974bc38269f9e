//! Business operations over contacts, behind a substitutable trait.
//!
//! The API layer holds an `Arc<dyn ContactService>`, so tests can stand in
//! an in-memory fake without touching SQLite.

use async_trait::async_trait;
use tracing::debug;

use super::search::SearchFilter;
use super::store::ContactStore;
use super::{Contact, ContactError, NewContact};

/// Contact operations exposed to the API layer.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// All contacts in canonical order.
    async fn get_all(&self) -> Result<Vec<Contact>, ContactError>;

    /// Contacts matching a free-text query. An empty or whitespace-only
    /// query behaves exactly like [`ContactService::get_all`].
    async fn search(&self, query: &str) -> Result<Vec<Contact>, ContactError>;

    /// A single contact by id, or `None` if absent.
    async fn get_by_id(&self, id: i64) -> Result<Option<Contact>, ContactError>;

    /// Normalize and persist a new contact, returning it with its
    /// store-assigned id.
    async fn create(&self, contact: NewContact) -> Result<Contact, ContactError>;

    /// Overwrite an existing contact. Returns `None` (and mutates nothing)
    /// when the id is absent; the id itself is never changed.
    async fn update(&self, id: i64, contact: NewContact)
        -> Result<Option<Contact>, ContactError>;

    /// Delete by id. Returns whether a row was actually removed.
    async fn delete(&self, id: i64) -> Result<bool, ContactError>;
}

/// [`ContactService`] backed by the SQL store.
#[derive(Debug, Clone)]
pub struct SqlContactService {
    store: ContactStore,
}

impl SqlContactService {
    /// Create a service over the given store.
    pub fn new(store: ContactStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ContactService for SqlContactService {
    async fn get_all(&self) -> Result<Vec<Contact>, ContactError> {
        self.store.fetch_all().await
    }

    async fn search(&self, query: &str) -> Result<Vec<Contact>, ContactError> {
        match SearchFilter::parse(query) {
            Some(filter) => {
                debug!(terms = filter.terms().len(), "running filtered search");
                self.store.search(&filter).await
            }
            None => self.store.fetch_all().await,
        }
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Contact>, ContactError> {
        self.store.fetch_by_id(id).await
    }

    async fn create(&self, contact: NewContact) -> Result<Contact, ContactError> {
        let contact = contact.normalized();
        let id = self.store.insert(&contact).await?;
        Ok(contact.into_contact(id))
    }

    async fn update(
        &self,
        id: i64,
        contact: NewContact,
    ) -> Result<Option<Contact>, ContactError> {
        // Existence check first: an absent id must not cause any mutation.
        if self.store.fetch_by_id(id).await?.is_none() {
            return Ok(None);
        }
        let contact = contact.normalized();
        self.store.update(id, &contact).await?;
        Ok(Some(contact.into_contact(id)))
    }

    async fn delete(&self, id: i64) -> Result<bool, ContactError> {
        self.store.delete(id).await
    }
}
