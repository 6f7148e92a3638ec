//! Estimation Service - core use case
//!
//! 1. Read the vision collaborator's output
//! 2. Load the catalog (configured file or bundled)
//! 3. Run the estimator
//! 4. Optionally save the report

use std::path::{Path, PathBuf};

use decorcost_domain::model::{Catalog, CostEstimate, VisionAnalysis};
use decorcost_domain::repository::CatalogRepository;
use decorcost_domain::estimate_analysis;
use decorcost_infra::{
    parse_vision_response, read_vision_file, write_report, BundledCatalogRepository,
    EstimateReport, FileCatalogRepository,
};
use decorcost_types::Result;
use tracing::info;

use crate::config::Config;

/// Options for one estimation run
#[derive(Debug, Clone, Default)]
pub struct EstimationOptions {
    /// Catalog file overriding the configured one
    pub catalog_override: Option<PathBuf>,

    /// Where to save the report, if anywhere
    pub output_path: Option<PathBuf>,
}

impl EstimationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(mut self, path: PathBuf) -> Self {
        self.catalog_override = Some(path);
        self
    }

    pub fn with_output(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }
}

/// Result of an estimation run
#[derive(Debug, Clone)]
pub struct EstimationOutcome {
    pub report: EstimateReport,

    /// Where the catalog came from
    pub catalog_source: String,

    /// Number of catalog entries that were available
    pub catalog_size: usize,
}

impl EstimationOutcome {
    pub fn estimate(&self) -> &CostEstimate {
        &self.report.cost_estimates
    }

    pub fn analysis(&self) -> &VisionAnalysis {
        &self.report.vision_analysis
    }

    /// Items with no catalog price
    pub fn unmapped_count(&self) -> usize {
        self.report
            .cost_estimates
            .economy
            .items
            .iter()
            .filter(|line| line.is_unmapped())
            .count()
    }
}

/// Pick the catalog source: explicit override, then config, then bundled
pub fn catalog_repository(config: &Config, catalog_override: Option<&Path>) -> Box<dyn CatalogRepository> {
    match catalog_override.or(config.catalog_path.as_deref()) {
        Some(path) => Box::new(FileCatalogRepository::new(path.to_path_buf())),
        None => Box::new(BundledCatalogRepository),
    }
}

/// Build a report from a raw vision response and a loaded catalog
pub fn estimate_from_response(response: &str, catalog: &Catalog) -> Result<EstimateReport> {
    let analysis = parse_vision_response(response)?;
    Ok(EstimateReport {
        cost_estimates: estimate_analysis(&analysis, catalog),
        vision_analysis: analysis,
    })
}

/// Main entry point: estimate costs from a saved vision response file
pub fn estimate_from_vision_file(
    vision_path: &Path,
    config: &Config,
    options: &EstimationOptions,
) -> Result<EstimationOutcome> {
    let analysis = read_vision_file(vision_path)?;

    let repo = catalog_repository(config, options.catalog_override.as_deref());
    let catalog = repo.load();
    info!(
        source = %repo.describe(),
        entries = catalog.len(),
        items = analysis.items.len(),
        "estimating"
    );

    let report = EstimateReport {
        cost_estimates: estimate_analysis(&analysis, &catalog),
        vision_analysis: analysis,
    };

    if let Some(ref output) = options.output_path {
        write_report(output, &report)?;
    }

    Ok(EstimationOutcome {
        report,
        catalog_source: repo.describe(),
        catalog_size: catalog.len(),
    })
}
