mod file;
mod http;

use std::sync::Arc;

use log::info;

use crate::catalog::CatalogSource;
use crate::core::config::ResolvedConfig;

pub use file::FileCatalogSource;
pub use http::HttpCatalogSource;

/// Build a source from the resolved config. A catalog file wins over the API.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn CatalogSource> {
    match &config.catalog_file {
        Some(path) => {
            info!("Using catalog file {}", path.display());
            Arc::new(FileCatalogSource::new(path.clone()))
        }
        None => {
            info!("Using catalog API at {}", config.base_url);
            Arc::new(HttpCatalogSource::new(config.base_url.clone(), config.timeout))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    fn config(catalog_file: Option<PathBuf>) -> ResolvedConfig {
        ResolvedConfig {
            language: crate::Lang::Zh,
            initial_category: None,
            base_url: "http://localhost:8000/api".to_string(),
            timeout: Duration::from_secs(1),
            catalog_file,
        }
    }

    #[test]
    fn test_build_source_prefers_file() {
        assert_eq!(build_source(&config(Some(PathBuf::from("c.json")))).name(), "file");
        assert_eq!(build_source(&config(None)).name(), "http");
    }
}
