use std::fmt;

use async_trait::async_trait;

use super::types::{Catalog, ComponentRecord};

/// Errors raised while loading catalog data.
///
/// None of these are retried. The caller reports them and keeps whatever
/// state it had before the request.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Transport failure (timeout, DNS, connection refused).
    Network(String),
    /// The server answered with a non-success status.
    Api { status: u16, message: String },
    /// The requested component id does not exist.
    NotFound(String),
    /// The payload could not be decoded.
    Parse(String),
    /// The payload decoded but breaks a catalog invariant.
    Invalid(String),
    /// Local catalog file could not be read.
    Io(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Network(msg) => write!(f, "network error: {msg}"),
            CatalogError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            CatalogError::NotFound(id) => write!(f, "component not found: {id}"),
            CatalogError::Parse(msg) => write!(f, "parse error: {msg}"),
            CatalogError::Invalid(msg) => write!(f, "invalid catalog: {msg}"),
            CatalogError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Read-only access to a component catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Fetches the whole catalog in one request.
    async fn load_catalog(&self) -> Result<Catalog, CatalogError>;

    /// Fetches a single component by id.
    async fn get_component(&self, id: &str) -> Result<ComponentRecord, CatalogError>;

    /// Lists category keys in display order.
    async fn list_categories(&self) -> Result<Vec<String>, CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CatalogError::Api {
                status: 503,
                message: "down".to_string()
            }
            .to_string(),
            "API error (HTTP 503): down"
        );
        assert_eq!(
            CatalogError::NotFound("slider".to_string()).to_string(),
            "component not found: slider"
        );
        assert_eq!(
            CatalogError::Network("refused".to_string()).to_string(),
            "network error: refused"
        );
    }
}
