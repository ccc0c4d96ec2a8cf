//! Machine-readable JSON report.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::reports::error::ReportError;
use crate::reports::publisher::{write_report, ReportSink};
use crate::reports::AnalysisReport;

pub struct JsonReportSink {
    output_dir: PathBuf,
}

impl JsonReportSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

#[async_trait]
impl ReportSink for JsonReportSink {
    fn name(&self) -> &'static str {
        "json"
    }

    async fn publish(&self, report: &AnalysisReport) -> Result<PathBuf, ReportError> {
        let path = self.output_dir.join(report.file_name("json"));
        let body = serde_json::to_vec_pretty(report)?;
        write_report(&path, &body).await?;
        Ok(path)
    }
}
