use configuration::ProbeTarget;
use database::DbError;

/// What a probe run found. Returned alongside the console transcript so the
/// caller (and the tests) can inspect the result without parsing text.
#[derive(Debug)]
pub enum ProbeSummary {
    /// Connecting or listing the catalog failed; nothing else ran.
    ConnectionFailed(DbError),
    /// The catalog was listed; `probes` is empty when no tables were found.
    Completed {
        tables: Vec<String>,
        probes: Vec<ProbeResult>,
    },
}

impl ProbeSummary {
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    /// Number of probes that failed. Zero when the run never got that far.
    pub fn failed_probes(&self) -> usize {
        match self {
            Self::ConnectionFailed(_) => 0,
            Self::Completed { probes, .. } => {
                probes.iter().filter(|p| p.outcome.is_err()).count()
            }
        }
    }
}

/// The row count of one probe target, or why it could not be read.
#[derive(Debug)]
pub struct ProbeResult {
    pub target: ProbeTarget,
    pub outcome: Result<i64, DbError>,
}
