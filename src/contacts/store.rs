//! SQL data access for contacts.
//!
//! Every operation acquires a dedicated pooled connection for its duration
//! and releases it on drop, success or failure. All statements are
//! parameterized; the only compound operation is the insert, whose
//! auto-assigned id is read off the same statement result.

use sqlx::SqlitePool;
use tracing::trace;

use super::search::SearchFilter;
use super::{Contact, ContactError, NewContact};

/// Row type returned by SQLite queries for contacts.
type ContactRow = (i64, String, String, String, String);

const GET_ALL: &str = "SELECT id, first_name, last_name, email, phone FROM contacts \
                       ORDER BY first_name COLLATE NOCASE, last_name COLLATE NOCASE";

const GET_BY_ID: &str = "SELECT id, first_name, last_name, email, phone FROM contacts \
                         WHERE id = ?1";

const INSERT: &str = "INSERT INTO contacts (first_name, last_name, email, phone) \
                      VALUES (?1, ?2, ?3, ?4)";

const UPDATE: &str = "UPDATE contacts SET first_name = ?1, last_name = ?2, \
                      email = ?3, phone = ?4 WHERE id = ?5";

const DELETE: &str = "DELETE FROM contacts WHERE id = ?1";

fn from_row((id, first_name, last_name, email, phone): ContactRow) -> Contact {
    Contact {
        id,
        first_name,
        last_name,
        email,
        phone,
    }
}

/// SQLite-backed contact storage.
#[derive(Debug, Clone)]
pub struct ContactStore {
    pool: SqlitePool,
}

impl ContactStore {
    /// Create a store backed by the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch all contacts in canonical order (first name, then last name).
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Database`] on SQLite failure.
    pub async fn fetch_all(&self) -> Result<Vec<Contact>, ContactError> {
        let mut conn = self.pool.acquire().await?;
        let rows: Vec<ContactRow> = sqlx::query_as(GET_ALL).fetch_all(&mut *conn).await?;
        Ok(rows.into_iter().map(from_row).collect())
    }

    /// Fetch contacts matching a parsed search filter, in canonical order.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Database`] on SQLite failure.
    pub async fn search(&self, filter: &SearchFilter) -> Result<Vec<Contact>, ContactError> {
        let (clause, binds) = filter.to_sql();
        let sql = format!(
            "SELECT id, first_name, last_name, email, phone FROM contacts \
             WHERE {clause} \
             ORDER BY first_name COLLATE NOCASE, last_name COLLATE NOCASE"
        );

        let mut conn = self.pool.acquire().await?;
        let mut query = sqlx::query_as::<_, ContactRow>(&sql);
        for pattern in binds {
            query = query.bind(pattern);
        }
        let rows = query.fetch_all(&mut *conn).await?;
        Ok(rows.into_iter().map(from_row).collect())
    }

    /// Fetch a single contact by id, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Database`] on SQLite failure.
    pub async fn fetch_by_id(&self, id: i64) -> Result<Option<Contact>, ContactError> {
        let mut conn = self.pool.acquire().await?;
        let row: Option<ContactRow> = sqlx::query_as(GET_BY_ID)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row.map(from_row))
    }

    /// Insert a new contact and return the auto-generated id.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Database`] on SQLite failure.
    pub async fn insert(&self, contact: &NewContact) -> Result<i64, ContactError> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query(INSERT)
            .bind(&contact.first_name)
            .bind(&contact.last_name)
            .bind(&contact.email)
            .bind(&contact.phone)
            .execute(&mut *conn)
            .await?;
        let id = result.last_insert_rowid();
        trace!(contact_id = id, "contact inserted");
        Ok(id)
    }

    /// Overwrite all four fields of an existing row. The id never changes.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Database`] on SQLite failure.
    pub async fn update(&self, id: i64, contact: &NewContact) -> Result<(), ContactError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query(UPDATE)
            .bind(&contact.first_name)
            .bind(&contact.last_name)
            .bind(&contact.email)
            .bind(&contact.phone)
            .bind(id)
            .execute(&mut *conn)
            .await?;
        trace!(contact_id = id, "contact updated");
        Ok(())
    }

    /// Delete a contact by id. Returns whether a row was actually removed.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Database`] on SQLite failure.
    pub async fn delete(&self, id: i64) -> Result<bool, ContactError> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query(DELETE).bind(id).execute(&mut *conn).await?;
        Ok(result.rows_affected() > 0)
    }
}
