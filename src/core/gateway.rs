//! # Host Gateways
//!
//! The core never renders anything. When it needs to move to another
//! screen or tell the user something went wrong, it goes through one of
//! these traits, implemented by whatever front end hosts the view models.

use serde_json::{Map, Value};

/// Screen that shows a single dish.
pub const FOOD_DETAILS_SCREEN: &str = "FoodDetails";

/// Parameters passed along with a navigation request.
pub type NavParams = Map<String, Value>;

pub trait Navigator: Send + Sync {
    /// Fire-and-forget: nothing is awaited or returned.
    fn navigate(&self, screen: &str, params: NavParams);
}

pub trait Notifier: Send + Sync {
    fn alert(&self, title: &str, detail: &str);
}

/// A user-facing message, produced when a fetch fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub detail: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
        }
    }
}
