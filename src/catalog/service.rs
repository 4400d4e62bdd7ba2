use std::fmt;

use async_trait::async_trait;

use super::types::{CategoryItem, FoodItem, OrderItem};

/// Errors that can occur while listing a catalog resource.
/// Every variant is shown to the user verbatim, so `Display` carries the detail.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Client misconfigured (unusable base URL).
    Config(String),
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// API returned a non-success status.
    Api { status: u16, message: String },
    /// Response body was not a JSON array of records.
    Parse(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Config(msg) => write!(f, "config error: {msg}"),
            CatalogError::Network(msg) => write!(f, "network error: {msg}"),
            CatalogError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            CatalogError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// The read-only collections the catalog API exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Foods,
    Categories,
    Orders,
}

impl Resource {
    pub fn path(self) -> &'static str {
        match self {
            Resource::Foods => "foods",
            Resource::Categories => "categories",
            Resource::Orders => "orders",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Server-side filters for the food listing.
///
/// An absent filter is left out of the request entirely, so the server
/// does no filtering on that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FoodFilter {
    /// Exact category id.
    pub category: Option<u64>,
    /// Name substring, matched by the server.
    pub name: Option<String>,
}

impl FoodFilter {
    /// Derives the filter from the dashboard's selection and search box.
    /// An empty search text means "no name filter".
    pub fn from_selection(selected_category: Option<u64>, search_text: &str) -> Self {
        Self {
            category: selected_category,
            name: (!search_text.is_empty()).then(|| search_text.to_string()),
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.category.is_none() && self.name.is_none()
    }

    /// Query parameters in the `json-server` style the API understands.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(category) = self.category {
            pairs.push(("category_like", category.to_string()));
        }
        if let Some(ref name) = self.name {
            pairs.push(("name_like", name.clone()));
        }
        pairs
    }
}

#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Returns the name of the service, for logs.
    fn name(&self) -> &str;

    /// Lists foods matching the filter.
    async fn list_foods(&self, filter: &FoodFilter) -> Result<Vec<FoodItem>, CatalogError>;

    /// Lists every category.
    async fn list_categories(&self) -> Result<Vec<CategoryItem>, CatalogError>;

    /// Lists the order history.
    async fn list_orders(&self) -> Result<Vec<OrderItem>, CatalogError>;
}
