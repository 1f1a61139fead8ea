use serde_json::Value;

use crate::backend::{BackendError, BackendResult, ChatBackend};

/// Product names known to the assistant service, fetched once per session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCatalog {
    products: Vec<String>,
}

impl ProductCatalog {
    pub fn new(products: Vec<String>) -> Self {
        Self { products }
    }

    /// Normalises the listing body.
    ///
    /// Accepts `{success, products: [...]}`, `{products: [...]}` or a bare
    /// array. Non-string entries are skipped; any other shape is malformed.
    pub fn from_response(body: Value) -> BackendResult<Self> {
        let items = match body {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("products") {
                Some(Value::Array(items)) => items,
                Some(other) => {
                    return Err(BackendError::Malformed(format!(
                        "`products` is not a list: {}",
                        other
                    )))
                }
                None => {
                    return Err(BackendError::Malformed(
                        "no `products` field in response".to_string(),
                    ))
                }
            },
            other => {
                return Err(BackendError::Malformed(format!(
                    "unexpected product listing: {}",
                    other
                )))
            }
        };

        let mut products = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::String(name) => products.push(name),
                other => log::warn!("Skipping non-string product entry: {}", other),
            }
        }

        Ok(Self::new(products))
    }

    pub fn products(&self) -> &[String] {
        &self.products
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }
}

/// Fetches the catalog. Never fails: every error degrades to an empty catalog.
pub async fn load_catalog(backend: &dyn ChatBackend) -> ProductCatalog {
    let body = match backend.fetch_products().await {
        Ok(body) => body,
        Err(e) => {
            log::error!("❌ Error fetching product names: {}", e);
            return ProductCatalog::default();
        }
    };

    match ProductCatalog::from_response(body) {
        Ok(catalog) if catalog.is_empty() => {
            log::error!("❌ No products found in response");
            catalog
        }
        Ok(catalog) => {
            log::info!("✓ Product catalog loaded: {} products", catalog.len());
            catalog
        }
        Err(e) => {
            log::error!("❌ Error reading product names: {}", e);
            ProductCatalog::default()
        }
    }
}
