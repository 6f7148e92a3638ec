//! Saved estimate reports

use std::fs;
use std::path::Path;

use decorcost_domain::model::{CostEstimate, VisionAnalysis};
use decorcost_types::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Vision analysis together with the estimate derived from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateReport {
    pub vision_analysis: VisionAnalysis,
    pub cost_estimates: CostEstimate,
}

/// Write a report as pretty JSON, creating parent directories
pub fn write_report(path: &Path, report: &EstimateReport) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let content = serde_json::to_string_pretty(report)?;
    fs::write(path, content)?;
    info!(path = %path.display(), "saved estimate report");
    Ok(())
}
