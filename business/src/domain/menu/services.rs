use async_trait::async_trait;

use super::model::MenuItem;

/// Service port for the external menu catalog.
///
/// Infallible by contract: on any failure (network, empty body, unexpected
/// shape) the adapter returns a fixed fallback list instead of an error, so
/// callers never need failure handling for this call.
#[async_trait]
pub trait MenuCatalogService: Send + Sync {
    async fn fetch_menu(&self) -> Vec<MenuItem>;
}
