//! HTTP implementation of the catalog service.
//!
//! Talks to a `json-server` style REST API: every resource is a plain
//! `GET /<resource>` returning a JSON array, and filters travel as
//! `<field>_like` query parameters.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::service::{CatalogError, CatalogService, FoodFilter, Resource};
use super::types::{CategoryItem, FoodItem, OrderItem};

pub struct HttpCatalog {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches one resource and decodes its records.
    pub async fn list<T: DeserializeOwned>(
        &self,
        resource: Resource,
        query: &[(&'static str, String)],
    ) -> Result<Vec<T>, CatalogError> {
        let url = format!("{}/{}", self.base_url, resource.path());
        info!("Catalog request: GET {} query={:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    CatalogError::Config(e.to_string())
                } else {
                    CatalogError::Network(e.to_string())
                }
            })?;

        debug!("Catalog response status for {}: {}", resource, response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Catalog API error on {}: {} - {}", resource, status, err_body);
            return Err(CatalogError::Api {
                status,
                message: err_body,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        decode_records(resource, body)
    }
}

/// Decodes a response body into records, one element at a time.
///
/// The body itself must be an array. Elements that fail to decode (missing
/// identity fields, invalid price) are dropped and logged rather than
/// failing the whole listing.
pub fn decode_records<T: DeserializeOwned>(
    resource: Resource,
    body: Value,
) -> Result<Vec<T>, CatalogError> {
    let items = match body {
        Value::Array(items) => items,
        other => {
            return Err(CatalogError::Parse(format!(
                "expected a JSON array of {resource}, got {}",
                json_kind(&other)
            )));
        }
    };

    let total = items.len();
    let records: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<T>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Dropping {} record #{}: {}", resource, index, e);
                None
            }
        })
        .collect();

    debug!("Decoded {}/{} {} records", records.len(), total, resource);
    Ok(records)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[async_trait]
impl CatalogService for HttpCatalog {
    fn name(&self) -> &str {
        "http"
    }

    async fn list_foods(&self, filter: &FoodFilter) -> Result<Vec<FoodItem>, CatalogError> {
        if filter.is_unfiltered() {
            debug!("Listing the full menu");
        }
        self.list(Resource::Foods, &filter.query_pairs()).await
    }

    async fn list_categories(&self) -> Result<Vec<CategoryItem>, CatalogError> {
        self.list(Resource::Categories, &[]).await
    }

    async fn list_orders(&self) -> Result<Vec<OrderItem>, CatalogError> {
        self.list(Resource::Orders, &[]).await
    }
}
