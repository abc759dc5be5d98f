use crate::domain::model::LicenseRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Outcome of one remote lookup. The request URL is kept so findings can
/// point back at their source.
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub url: String,
    pub records: Vec<LicenseRecord>,
}

/// Remote license lookup, queried once per station with its query parameters.
#[async_trait]
pub trait LicenseLookup: Send + Sync {
    async fn fetch(&self, query: &[(&'static str, String)]) -> Result<LookupOutcome>;
}

/// Reporting interface for driver findings, injected instead of ad-hoc
/// printing so tests can capture output.
pub trait ReportSink: Send {
    fn info(&mut self, message: String);
    fn warn(&mut self, message: String);
}

/// Production sink backed by tracing.
#[derive(Debug, Default)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn info(&mut self, message: String) {
        tracing::info!("{message}");
    }

    fn warn(&mut self, message: String) {
        tracing::warn!("{message}");
    }
}
