//! Infrastructure layer - file-backed catalog, vision response reader, reports

pub mod catalog_loader;
pub mod persistence;
pub mod report_writer;
pub mod vision_reader;

pub use catalog_loader::CatalogLoader;
pub use persistence::{BundledCatalogRepository, FileCatalogRepository};
pub use report_writer::{write_report, EstimateReport};
pub use vision_reader::{extract_json_from_response, parse_vision_response, read_vision_file};
