//! Report sink trait and the publisher that drives every configured sink.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{error, info};

use crate::reports::error::ReportError;
use crate::reports::AnalysisReport;

#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Short format name used in logs, e.g. `json`.
    fn name(&self) -> &'static str;

    /// Write the report and return where it landed.
    async fn publish(&self, report: &AnalysisReport) -> Result<PathBuf, ReportError>;
}

/// Outcome of one publish round.
#[derive(Debug, Default)]
pub struct PublishSummary {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(&'static str, String)>,
}

impl PublishSummary {
    pub fn succeeded(&self) -> usize {
        self.written.len()
    }
}

#[derive(Default)]
pub struct ReportPublisher {
    sinks: Vec<Box<dyn ReportSink>>,
}

impl ReportPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sink(mut self, sink: impl ReportSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Run every sink; a failing sink is recorded and does not stop the others.
    pub async fn publish(&self, report: &AnalysisReport) -> PublishSummary {
        let mut summary = PublishSummary::default();
        for sink in &self.sinks {
            match sink.publish(report).await {
                Ok(path) => {
                    info!(format = sink.name(), symbol = %report.symbol, path = %path.display(), "Report written");
                    summary.written.push(path);
                }
                Err(e) => {
                    error!(format = sink.name(), symbol = %report.symbol, error = %e, "Report generation failed");
                    summary.failed.push((sink.name(), e.to_string()));
                }
            }
        }
        summary
    }
}

pub(crate) async fn write_report(path: &Path, contents: &[u8]) -> Result<(), ReportError> {
    let write_err = |source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir).await.map_err(write_err)?;
    }
    tokio::fs::write(path, contents).await.map_err(write_err)
}
