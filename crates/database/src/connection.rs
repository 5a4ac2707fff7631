use crate::catalog::{CatalogConnector, PgCatalog};
use crate::error::DbError;
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Where a connection string points, without its credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionTarget {
    pub host: String,
    pub port: u16,
    pub database: String,
}

impl ConnectionTarget {
    /// Describes parsed options. PostgreSQL falls back to the user name when no
    /// database is given, so we do the same.
    pub fn from_options(options: &PgConnectOptions) -> Self {
        Self {
            host: options.get_host().to_string(),
            port: options.get_port(),
            database: options
                .get_database()
                .unwrap_or_else(|| options.get_username())
                .to_string(),
        }
    }
}

impl fmt::Display for ConnectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}/{}", self.host, self.port, self.database)
    }
}

/// Parses a `postgresql://` URL into connection options.
pub fn parse_url(url: &str) -> Result<PgConnectOptions, DbError> {
    PgConnectOptions::from_str(url).map_err(DbError::InvalidUrl)
}

/// Opens a single connection to the PostgreSQL database.
///
/// No pool is created; the caller owns the connection and is expected to close
/// it. With `timeout` unset the driver and OS defaults decide how long an
/// unreachable host blocks.
pub async fn connect(
    options: &PgConnectOptions,
    timeout: Option<Duration>,
) -> Result<PgConnection, DbError> {
    let connecting = PgConnection::connect_with(options);

    let conn = match timeout {
        Some(limit) => tokio::time::timeout(limit, connecting)
            .await
            .map_err(|_| DbError::ConnectTimeout(limit))??,
        None => connecting.await?,
    };

    Ok(conn)
}

/// Connects to PostgreSQL from a connection URL.
///
/// The URL is kept private and never shows up in `Debug` output or logs.
pub struct PgConnector {
    url: String,
    timeout: Option<Duration>,
}

impl PgConnector {
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}

impl fmt::Debug for PgConnector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgConnector")
            .field("target", &self.target())
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[async_trait]
impl CatalogConnector for PgConnector {
    type Catalog = PgCatalog;

    fn target(&self) -> String {
        match parse_url(&self.url) {
            Ok(options) => ConnectionTarget::from_options(&options).to_string(),
            Err(_) => "<invalid connection string>".to_string(),
        }
    }

    async fn connect(&self) -> Result<PgCatalog, DbError> {
        let options = parse_url(&self.url)?;
        let conn = connect(&options, self.timeout).await?;
        tracing::debug!(db = %ConnectionTarget::from_options(&options), "Connection established");
        Ok(PgCatalog::new(conn))
    }
}
