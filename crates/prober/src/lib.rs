//! # dbprobe Prober Crate
//!
//! Runs one connectivity probe: connect, list the tables of a schema, count
//! rows in each configured table, close. Output goes to a `Console`.
//!
//! Failures are handled in two tiers:
//!
//! - connecting and listing the catalog: a failure prints one connection
//!   error and ends the run;
//! - each row count: a failure prints a warning and the next probe runs.
//!
//! Neither tier is an `Err` from `run_probe`. Only failing to write the
//! transcript itself is.

pub mod console;
pub mod error;
pub mod summary;

pub use console::Console;
pub use error::ProbeError;
pub use summary::{ProbeResult, ProbeSummary};

use configuration::ProbeConfig;
use database::{CatalogConnector, TableCatalog};
use std::io::Write;

/// Runs the probe described by `config` against whatever `connector` opens.
pub async fn run_probe<C, W>(
    connector: &C,
    config: &ProbeConfig,
    console: &mut Console<W>,
) -> Result<ProbeSummary, ProbeError>
where
    C: CatalogConnector,
    W: Write,
{
    let target = connector.target();
    console.connecting(&target)?;

    let mut catalog = match connector.connect().await {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(db = %target, error = %e, "Connection failed");
            console.connection_error(&e)?;
            return Ok(ProbeSummary::ConnectionFailed(e));
        }
    };
    console.connected()?;

    let tables = match catalog.list_tables(&config.schema).await {
        Ok(tables) => tables,
        Err(e) => {
            tracing::error!(schema = %config.schema, error = %e, "Catalog query failed");
            console.connection_error(&e)?;
            return Ok(ProbeSummary::ConnectionFailed(e));
        }
    };
    tracing::info!(schema = %config.schema, count = tables.len(), "Tables listed");
    console.tables(&tables)?;

    let mut probes = Vec::with_capacity(config.probes.len());
    if !tables.is_empty() {
        if !config.probes.is_empty() {
            console.probes_start()?;
        }
        for target in &config.probes {
            let outcome = catalog.count_rows(&target.table).await;
            match &outcome {
                Ok(rows) => {
                    tracing::info!(table = %target.table, rows, "Row count probed");
                    console.row_count(target, *rows)?;
                }
                Err(e) => {
                    tracing::warn!(table = %target.table, error = %e, "Row count probe failed");
                    console.probe_warning(target, e)?;
                }
            }
            probes.push(ProbeResult {
                target: target.clone(),
                outcome,
            });
        }
    } else {
        tracing::info!(schema = %config.schema, "No tables found, skipping row counts");
    }

    if let Err(e) = catalog.close().await {
        tracing::warn!(error = %e, "Failed to close the connection cleanly");
    }
    console.completed()?;

    Ok(ProbeSummary::Completed { tables, probes })
}
