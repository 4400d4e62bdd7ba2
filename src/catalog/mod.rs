pub mod http;
pub mod service;
pub mod types;

pub use http::HttpCatalog;
pub use service::{CatalogError, CatalogService, FoodFilter, Resource};
pub use types::{CategoryItem, FoodItem, OrderItem, Price, PriceError};
