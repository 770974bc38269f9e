//! Contact domain: entity types, search filter, SQL store, and service trait.
//!
//! A contact is a flat record with no relationships. Ids are assigned by
//! SQLite on insert and never change afterwards; unpersisted data lives in
//! [`NewContact`], persisted rows in [`Contact`]. Deletes are hard deletes.

pub mod search;
pub mod service;
pub mod store;

use serde::{Deserialize, Serialize};

/// A persisted contact. `id` is store-assigned and strictly positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Database ID.
    pub id: i64,
    /// Given name, 1–64 characters.
    pub first_name: String,
    /// Family name, 1–64 characters.
    pub last_name: String,
    /// Email address, stored trimmed and lower-cased.
    pub email: String,
    /// Phone number, 10–256 characters.
    pub phone: String,
}

/// Contact data that has not been persisted yet (create or update payload).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
}

impl NewContact {
    /// Canonical form for persistence: all fields trimmed, email lower-cased.
    pub fn normalized(self) -> Self {
        Self {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email: self.email.trim().to_lowercase(),
            phone: self.phone.trim().to_owned(),
        }
    }

    /// Attach a store-assigned id, producing the persisted entity.
    pub(crate) fn into_contact(self, id: i64) -> Contact {
        Contact {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
        }
    }
}

/// Errors from the contact subsystem.
///
/// Data-access faults are terminal for the request that triggered them;
/// nothing here is retried.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    /// Database operation failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
