use configuration::ProbeTarget;
use database::DbError;
use std::io::{self, Write};

/// Writes the human-readable probe transcript.
///
/// Each step is written as soon as it happens, so a hang (e.g. an unreachable
/// host) is visible on the terminal while it lasts.
pub struct Console<W> {
    out: W,
}

impl Console<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn connecting(&mut self, target: &str) -> io::Result<()> {
        self.line(format_args!("Attempting to connect to PostgreSQL at {target}..."))
    }

    pub fn connected(&mut self) -> io::Result<()> {
        self.line(format_args!("✅ Connection established!"))
    }

    pub fn tables(&mut self, tables: &[String]) -> io::Result<()> {
        self.blank()?;
        self.line(format_args!("📊 Tables found ({}):", tables.len()))?;
        for table in tables {
            self.line(format_args!("  - {table}"))?;
        }
        Ok(())
    }

    /// Separates the table list from the row counts.
    pub fn probes_start(&mut self) -> io::Result<()> {
        self.blank()
    }

    pub fn row_count(&mut self, target: &ProbeTarget, rows: i64) -> io::Result<()> {
        self.line(format_args!(
            "🔢 {} in table {}: {rows}",
            target.label(),
            target.table
        ))
    }

    pub fn probe_warning(&mut self, target: &ProbeTarget, error: &DbError) -> io::Result<()> {
        self.line(format_args!(
            "⚠️  Error querying table {}: {error}",
            target.table
        ))
    }

    pub fn completed(&mut self) -> io::Result<()> {
        self.blank()?;
        self.line(format_args!("✅ Probe completed successfully!"))
    }

    pub fn connection_error(&mut self, error: &DbError) -> io::Result<()> {
        self.line(format_args!("❌ Connection error: {error}"))
    }

    fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }
}
