use crate::error::DbError;
use async_trait::async_trait;
use sqlx::postgres::PgConnection;
use sqlx::Connection;

/// SQLSTATE for "undefined_table".
const UNDEFINED_TABLE: &str = "42P01";

/// Lists base tables and views of one schema. No `ORDER BY`: rows come back in
/// whatever order the server produces them.
const LIST_TABLES_SQL: &str = "\
    SELECT table_name::text \
    FROM information_schema.tables \
    WHERE table_schema = $1";

/// The read-only queries a probe run needs from an open database session.
///
/// `PgCatalog` is the real implementation; tests substitute an in-memory one.
#[async_trait]
pub trait TableCatalog: Send {
    /// Returns the names of all tables in `schema`.
    async fn list_tables(&mut self, schema: &str) -> Result<Vec<String>, DbError>;

    /// Returns `SELECT COUNT(*)` for a single table.
    async fn count_rows(&mut self, table: &str) -> Result<i64, DbError>;

    /// Ends the session.
    async fn close(self) -> Result<(), DbError>;
}

/// Opens a `TableCatalog`.
#[async_trait]
pub trait CatalogConnector: Send + Sync {
    type Catalog: TableCatalog;

    /// A printable description of where `connect` goes. Must not include
    /// credentials.
    fn target(&self) -> String;

    async fn connect(&self) -> Result<Self::Catalog, DbError>;
}

/// A `TableCatalog` backed by one PostgreSQL connection.
#[derive(Debug)]
pub struct PgCatalog {
    conn: PgConnection,
}

impl PgCatalog {
    pub fn new(conn: PgConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl TableCatalog for PgCatalog {
    async fn list_tables(&mut self, schema: &str) -> Result<Vec<String>, DbError> {
        sqlx::query_scalar::<_, String>(LIST_TABLES_SQL)
            .bind(schema)
            .fetch_all(&mut self.conn)
            .await
            .map_err(|source| DbError::CatalogError {
                schema: schema.to_string(),
                source,
            })
    }

    async fn count_rows(&mut self, table: &str) -> Result<i64, DbError> {
        let sql = format!("SELECT COUNT(*) FROM {}", quote_ident(table));

        sqlx::query_scalar::<_, i64>(&sql)
            .fetch_one(&mut self.conn)
            .await
            .map_err(|source| classify_probe_error(table, source))
    }

    async fn close(self) -> Result<(), DbError> {
        self.conn.close().await?;
        Ok(())
    }
}

/// Quotes an SQL identifier so it is matched exactly, case included.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn classify_probe_error(table: &str, source: sqlx::Error) -> DbError {
    match &source {
        sqlx::Error::Database(db) if db.code().as_deref() == Some(UNDEFINED_TABLE) => {
            DbError::MissingTable(table.to_string())
        }
        _ => DbError::QueryError {
            table: table.to_string(),
            source,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_mixed_case_names() {
        assert_eq!(quote_ident("User"), "\"User\"");
        assert_eq!(quote_ident("Status_People"), "\"Status_People\"");
    }

    #[test]
    fn doubles_embedded_quotes() {
        assert_eq!(quote_ident("a\"b"), "\"a\"\"b\"");
        assert_eq!(
            quote_ident("x\"; DROP TABLE t; --"),
            "\"x\"\"; DROP TABLE t; --\""
        );
    }

    #[test]
    fn non_database_errors_are_plain_query_errors() {
        let err = classify_probe_error("User", sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::QueryError { ref table, .. } if table == "User"));
    }
}
