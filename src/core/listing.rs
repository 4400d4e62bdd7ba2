//! Display records: a catalog record plus its formatted price.

use serde::Serialize;

use crate::catalog::{FoodItem, OrderItem, Price};
use crate::core::price::PriceFormatter;

/// Anything with an id and a price can be listed.
pub trait Priced {
    fn id(&self) -> u64;
    fn price(&self) -> Price;
}

impl Priced for FoodItem {
    fn id(&self) -> u64 {
        self.id
    }

    fn price(&self) -> Price {
        self.price
    }
}

impl Priced for OrderItem {
    fn id(&self) -> u64 {
        self.id
    }

    fn price(&self) -> Price {
        self.price
    }
}

/// A record ready to render. Serializes flat, with an extra `formattedPrice`.
///
/// Fields are private: the formatted price can only come from the formatter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing<T> {
    #[serde(flatten)]
    record: T,
    #[serde(rename = "formattedPrice")]
    formatted_price: String,
}

impl<T: Priced> Listing<T> {
    pub fn new(record: T, formatter: &PriceFormatter) -> Self {
        let formatted_price = formatter.format(record.price());
        Self {
            record,
            formatted_price,
        }
    }

    pub fn id(&self) -> u64 {
        self.record.id()
    }
}

impl<T> Listing<T> {
    pub fn record(&self) -> &T {
        &self.record
    }

    pub fn formatted_price(&self) -> &str {
        &self.formatted_price
    }

    pub fn into_record(self) -> T {
        self.record
    }
}

/// Maps a freshly fetched response into display records, preserving order.
pub fn with_prices<T: Priced>(records: Vec<T>, formatter: &PriceFormatter) -> Vec<Listing<T>> {
    records
        .into_iter()
        .map(|record| Listing::new(record, formatter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::price::CurrencyLocale;
    use crate::test_support::{food, order};
    use serde_json::json;

    #[test]
    fn test_mapping_preserves_every_field() {
        let formatter = PriceFormatter::new(CurrencyLocale::PtBr);
        let foods = vec![
            food(1, "Ao molho", Some(1), 19.9),
            food(2, "Veggie", Some(2), 21.0),
            food(3, "A la Camarón", None, 79.9),
        ];

        let listed = with_prices(foods.clone(), &formatter);

        assert_eq!(listed.len(), foods.len());
        for (listing, original) in listed.iter().zip(&foods) {
            assert_eq!(listing.record(), original);
            assert_eq!(listing.formatted_price(), formatter.format(original.price));
        }
    }

    #[test]
    fn test_order_listing_serializes_flat() {
        let formatter = PriceFormatter::default();
        let listing = Listing::new(order(1, "Pizza", 42.5, Some("x")), &formatter);

        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Pizza",
                "description": "",
                "price": 42.5,
                "thumbnail_url": "x",
                "formattedPrice": "$42.50"
            })
        );
    }

    #[test]
    fn test_into_record_round_trips() {
        let formatter = PriceFormatter::default();
        let original = food(9, "Soup", Some(3), 12.0);
        let listing = Listing::new(original.clone(), &formatter);
        assert_eq!(listing.id(), 9);
        assert_eq!(listing.into_record(), original);
    }
}
