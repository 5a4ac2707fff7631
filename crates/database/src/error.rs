use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Invalid connection string: {0}")]
    InvalidUrl(#[source] sqlx::Error),

    #[error("Failed to connect to the database: {0}")]
    ConnectionError(#[from] sqlx::Error),

    #[error("Timed out after {0:?} waiting for the database to accept the connection")]
    ConnectTimeout(Duration),

    #[error("Failed to list tables in schema '{schema}': {source}")]
    CatalogError {
        schema: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Table \"{0}\" does not exist")]
    MissingTable(String),

    #[error("Row count query on \"{table}\" failed: {source}")]
    QueryError {
        table: String,
        #[source]
        source: sqlx::Error,
    },
}
