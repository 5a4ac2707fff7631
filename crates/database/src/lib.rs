//! # dbprobe Database Crate
//!
//! Everything that talks to PostgreSQL lives here. The rest of the workspace
//! only sees the `CatalogConnector` and `TableCatalog` traits and `DbError`.
//!
//! ## Public API
//!
//! - `PgConnector`: opens one `PgConnection` from a URL (no pool), optionally
//!   bounded by a connect timeout.
//! - `PgCatalog`: lists the tables of a schema and counts rows of a table.
//! - `ConnectionTarget`: the host/port/database of a URL, safe to print.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod catalog;
pub mod connection;
pub mod error;

// Re-export the key components to create a clean, public-facing API.
pub use catalog::{quote_ident, CatalogConnector, PgCatalog, TableCatalog};
pub use connection::{connect, parse_url, ConnectionTarget, PgConnector};
pub use error::DbError;
