use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative, finite amount of money as sent by the catalog API.
///
/// Records carrying a negative or non-finite price fail to deserialize,
/// so every `Price` in the app is safe to hand to the formatter.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> Result<Self, PriceError> {
        if !amount.is_finite() {
            return Err(PriceError::NonFinite(amount));
        }
        if amount < 0.0 {
            return Err(PriceError::Negative(amount));
        }
        // Normalizes -0.0
        Ok(Price(amount + 0.0))
    }

    pub fn amount(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = PriceError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Price::new(amount)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> f64 {
        price.0
    }
}

/// Why an amount was refused as a price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceError {
    Negative(f64),
    NonFinite(f64),
}

impl fmt::Display for PriceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceError::Negative(v) => write!(f, "price must not be negative (got {v})"),
            PriceError::NonFinite(v) => write!(f, "price must be a finite number (got {v})"),
        }
    }
}

impl std::error::Error for PriceError {}

/// A dish on the menu, as returned by `GET /foods`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Id of the owning [`CategoryItem`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<u64>,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// A menu category, as returned by `GET /categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryItem {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A past purchase, as returned by `GET /orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}
