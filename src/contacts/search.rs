//! Free-text search filter over contacts.
//!
//! A raw query is trimmed and split on whitespace runs. Each term becomes a
//! case-insensitive substring OR-group over first name, last name, and email;
//! the per-term groups are AND-ed. Every term must match at least one field,
//! but different terms may match different fields.

/// A parsed, non-empty search filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    terms: Vec<String>,
}

impl SearchFilter {
    /// Parse a raw query string into a filter.
    ///
    /// Returns `None` when the trimmed query is empty; the caller treats
    /// that as "no filter, return everything".
    pub fn parse(raw: &str) -> Option<Self> {
        let terms: Vec<String> = raw
            .split_whitespace()
            .map(str::to_owned)
            .collect();
        if terms.is_empty() {
            return None;
        }
        Some(Self { terms })
    }

    /// The individual search terms, in input order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Render the filter as a SQL `WHERE` fragment plus ordered bind values.
    ///
    /// Each term contributes `(first_name LIKE ? OR last_name LIKE ? OR
    /// email LIKE ?)` with the same `%term%` pattern bound three times;
    /// groups are joined with ` AND `. SQLite `LIKE` is case-insensitive
    /// for ASCII, which supplies the case-insensitive match semantics.
    pub fn to_sql(&self) -> (String, Vec<String>) {
        let mut binds = Vec::new();
        let groups: Vec<&str> = self
            .terms
            .iter()
            .map(|term| {
                let pattern = format!("%{term}%");
                binds.push(pattern.clone());
                binds.push(pattern.clone());
                binds.push(pattern);
                "(first_name LIKE ? OR last_name LIKE ? OR email LIKE ?)"
            })
            .collect();
        (groups.join(" AND "), binds)
    }
}
