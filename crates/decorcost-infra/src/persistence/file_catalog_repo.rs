//! Catalog repositories backed by files or the bundled resource

use std::path::{Path, PathBuf};

use decorcost_domain::model::Catalog;
use decorcost_domain::repository::CatalogRepository;

use crate::catalog_loader::CatalogLoader;

/// Catalog read from a JSON or TOML file on every load
pub struct FileCatalogRepository {
    path: PathBuf,
}

impl FileCatalogRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogRepository for FileCatalogRepository {
    fn load(&self) -> Catalog {
        CatalogLoader::load_or_empty(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Catalog compiled into the binary
#[derive(Default)]
pub struct BundledCatalogRepository;

impl CatalogRepository for BundledCatalogRepository {
    fn load(&self) -> Catalog {
        CatalogLoader::bundled()
    }

    fn describe(&self) -> String {
        "bundled".to_string()
    }
}
