//! Offline catalog source: the `GET /components` payload saved to disk.

use std::path::PathBuf;

use async_trait::async_trait;
use log::info;

use crate::catalog::{Catalog, CatalogError, CatalogSource, ComponentRecord};

pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        info!("Loading catalog from {}", self.path.display());
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::Io(format!("{}: {e}", self.path.display())))?;
        Catalog::from_json(&body)
    }

    async fn get_component(&self, id: &str) -> Result<ComponentRecord, CatalogError> {
        let catalog = self.load_catalog().await?;
        catalog
            .find_component(id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    async fn list_categories(&self) -> Result<Vec<String>, CatalogError> {
        let catalog = self.load_catalog().await?;
        Ok(catalog.category_keys().map(str::to_string).collect())
    }
}
