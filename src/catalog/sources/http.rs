//! REST catalog source.
//!
//! Endpoints, relative to the base URL:
//! - `GET /components` returns the whole catalog
//! - `GET /components/{id}` returns one component (404 when unknown)
//! - `GET /categories` returns the category keys

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use crate::catalog::{Catalog, CatalogError, CatalogPayload, CatalogSource, ComponentRecord};

pub struct HttpCatalogSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCatalogSource {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout ({}), using defaults", e);
                reqwest::Client::new()
            });
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues a GET and returns the response body on success.
    async fn get(&self, path: &str) -> Result<(u16, String), CatalogError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        debug!("Catalog API response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        Ok((status, body))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let (status, body) = self.get(path).await?;
        if !(200..300).contains(&status) {
            warn!("Catalog API error: {} - {}", status, body);
            return Err(CatalogError::Api {
                status,
                message: body,
            });
        }
        serde_json::from_str(&body).map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        info!("Loading catalog from {}/components", self.base_url);
        let value: serde_json::Value = self.get_json("/components").await?;
        let catalog = Catalog::new(CatalogPayload::from_value(value)?.into_categories())?;
        info!(
            "Catalog loaded: {} categories, {} components",
            catalog.len(),
            catalog.component_count()
        );
        Ok(catalog)
    }

    async fn get_component(&self, id: &str) -> Result<ComponentRecord, CatalogError> {
        match self.get_json(&format!("/components/{id}")).await {
            Err(CatalogError::Api { status: 404, .. }) => Err(CatalogError::NotFound(id.to_string())),
            other => other,
        }
    }

    async fn list_categories(&self) -> Result<Vec<String>, CatalogError> {
        self.get_json("/categories").await
    }
}
