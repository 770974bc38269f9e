//! Rolodex — a contact management HTTP service.
//!
//! Single Rust binary. Serves a JSON API over one SQLite-backed `contacts`
//! table: list, search, create, update, delete. Every response is wrapped in
//! a uniform `{success, data, message, errors}` envelope.
//!
//! See `DESIGN.md` for full architecture documentation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod contacts;
pub mod db;
pub mod logging;
