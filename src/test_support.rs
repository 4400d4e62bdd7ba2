//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::catalog::{
    CatalogError, CatalogService, CategoryItem, FoodFilter, FoodItem, OrderItem, Price,
};
use crate::core::gateway::{NavParams, Navigator, Notifier};

pub fn food(id: u64, name: &str, category: Option<u64>, price: f64) -> FoodItem {
    FoodItem {
        id,
        name: name.to_string(),
        description: format!("{name}, freshly made"),
        category,
        price: Price::new(price).unwrap(),
        thumbnail_url: Some(format!("https://img.example.com/{id}.png")),
    }
}

pub fn category(id: u64, title: &str) -> CategoryItem {
    CategoryItem {
        id,
        title: title.to_string(),
        image_url: None,
    }
}

pub fn order(id: u64, name: &str, price: f64, thumbnail_url: Option<&str>) -> OrderItem {
    OrderItem {
        id,
        name: name.to_string(),
        description: String::new(),
        price: Price::new(price).unwrap(),
        thumbnail_url: thumbnail_url.map(str::to_string),
    }
}

pub fn sample_foods() -> Vec<FoodItem> {
    vec![
        food(1, "Ao molho", Some(1), 19.9),
        food(2, "Veggie", Some(2), 21.0),
        food(3, "Onion soup", Some(3), 12.5),
        food(4, "Minestrone", Some(3), 14.0),
        food(5, "Pumpkin soup", Some(3), 13.0),
        food(6, "Tomato soup", Some(1), 11.0),
    ]
}

pub fn sample_categories() -> Vec<CategoryItem> {
    vec![category(1, "Massas"), category(2, "Carnes"), category(3, "Sopas")]
}

/// In-memory catalog that filters like the real server.
///
/// Food requests whose name filter was registered with [`hold_search`]
/// block until the returned sender fires, to force out-of-order completion.
///
/// [`hold_search`]: StubCatalog::hold_search
pub struct StubCatalog {
    foods: Result<Vec<FoodItem>, CatalogError>,
    categories: Result<Vec<CategoryItem>, CatalogError>,
    orders: Result<Vec<OrderItem>, CatalogError>,
    food_requests: Mutex<Vec<FoodFilter>>,
    held: Mutex<HashMap<String, oneshot::Receiver<()>>>,
}

impl StubCatalog {
    pub fn new(foods: Vec<FoodItem>, categories: Vec<CategoryItem>) -> Self {
        Self {
            foods: Ok(foods),
            categories: Ok(categories),
            orders: Ok(Vec::new()),
            food_requests: Mutex::new(Vec::new()),
            held: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_orders(mut self, orders: Vec<OrderItem>) -> Self {
        self.orders = Ok(orders);
        self
    }

    pub fn fail_foods(mut self, error: CatalogError) -> Self {
        self.foods = Err(error);
        self
    }

    pub fn fail_categories(mut self, error: CatalogError) -> Self {
        self.categories = Err(error);
        self
    }

    pub fn fail_orders(mut self, error: CatalogError) -> Self {
        self.orders = Err(error);
        self
    }

    /// Holds the next food request searching for `name` until released.
    pub fn hold_search(&self, name: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.held.lock().unwrap().insert(name.to_string(), rx);
        tx
    }

    /// Every food filter received, in arrival order.
    pub fn food_requests(&self) -> Vec<FoodFilter> {
        self.food_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogService for StubCatalog {
    fn name(&self) -> &str {
        "stub"
    }

    async fn list_foods(&self, filter: &FoodFilter) -> Result<Vec<FoodItem>, CatalogError> {
        self.food_requests.lock().unwrap().push(filter.clone());

        let gate = filter
            .name
            .as_ref()
            .and_then(|name| self.held.lock().unwrap().remove(name));
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        let foods = self.foods.clone()?;
        Ok(foods
            .into_iter()
            .filter(|f| filter.category.is_none_or(|c| f.category == Some(c)))
            .filter(|f| filter.name.as_ref().is_none_or(|n| f.name.contains(n.as_str())))
            .collect())
    }

    async fn list_categories(&self) -> Result<Vec<CategoryItem>, CatalogError> {
        self.categories.clone()
    }

    async fn list_orders(&self) -> Result<Vec<OrderItem>, CatalogError> {
        self.orders.clone()
    }
}

/// Records every navigation and alert.
#[derive(Default)]
pub struct RecordingGateway {
    navigations: Mutex<Vec<(String, NavParams)>>,
    alerts: Mutex<Vec<(String, String)>>,
}

impl RecordingGateway {
    pub fn navigations(&self) -> Vec<(String, NavParams)> {
        self.navigations.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<(String, String)> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Navigator for RecordingGateway {
    fn navigate(&self, screen: &str, params: NavParams) {
        self.navigations
            .lock()
            .unwrap()
            .push((screen.to_string(), params));
    }
}

impl Notifier for RecordingGateway {
    fn alert(&self, title: &str, detail: &str) {
        self.alerts
            .lock()
            .unwrap()
            .push((title.to_string(), detail.to_string()));
    }
}
