//! # Orders View Model
//!
//! Order history: fetched once when the screen mounts, formatted, shown.

use log::{info, warn};

use crate::catalog::{CatalogError, OrderItem};
use crate::core::action::{Effect, FetchRequest};
use crate::core::gateway::Notice;
use crate::core::listing::{Listing, with_prices};
use crate::core::price::PriceFormatter;

pub const ORDERS_FAILED_TITLE: &str = "Failed to load orders";

#[derive(Debug)]
pub enum OrdersAction {
    /// Screen mounted (or remounted by the host).
    Mount,
    OrdersLoaded(Result<Vec<OrderItem>, CatalogError>),
}

#[derive(Debug, Clone)]
pub struct OrdersState {
    pub orders: Vec<Listing<OrderItem>>,
    pub loading: bool,
    formatter: PriceFormatter,
}

impl OrdersState {
    pub fn new(formatter: PriceFormatter) -> Self {
        Self {
            orders: Vec::new(),
            loading: false,
            formatter,
        }
    }

    /// Requests the order history unless a request is already pending.
    pub fn load_orders(&mut self) -> Option<Effect> {
        if self.loading {
            return None;
        }
        self.loading = true;
        Some(Effect::Fetch(FetchRequest::Orders))
    }
}

pub fn update(state: &mut OrdersState, action: OrdersAction) -> Vec<Effect> {
    match action {
        OrdersAction::Mount => state.load_orders().into_iter().collect(),
        OrdersAction::OrdersLoaded(result) => {
            state.loading = false;
            match result {
                Ok(orders) => {
                    info!("Loaded {} orders", orders.len());
                    state.orders = with_prices(orders, &state.formatter);
                    vec![]
                }
                Err(e) => {
                    warn!("Order fetch failed: {}", e);
                    vec![Effect::Alert(Notice::new(
                        ORDERS_FAILED_TITLE,
                        format!("Detail: {e}"),
                    ))]
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::order;
    use serde_json::json;

    #[test]
    fn test_mount_requests_orders_once() {
        let mut state = OrdersState::new(PriceFormatter::default());
        assert_eq!(
            update(&mut state, OrdersAction::Mount),
            vec![Effect::Fetch(FetchRequest::Orders)]
        );
        // Still pending: a second mount does not double-fetch.
        assert!(update(&mut state, OrdersAction::Mount).is_empty());
    }

    #[test]
    fn test_loaded_orders_get_formatted_price() {
        let mut state = OrdersState::new(PriceFormatter::default());
        update(&mut state, OrdersAction::Mount);
        update(
            &mut state,
            OrdersAction::OrdersLoaded(Ok(vec![order(1, "Pizza", 42.5, Some("x"))])),
        );

        assert!(!state.loading);
        assert_eq!(
            serde_json::to_value(&state.orders).unwrap(),
            json!([{
                "id": 1,
                "name": "Pizza",
                "description": "",
                "price": 42.5,
                "thumbnail_url": "x",
                "formattedPrice": "$42.50"
            }])
        );
    }

    #[test]
    fn test_failure_alerts_and_keeps_previous_orders() {
        let mut state = OrdersState::new(PriceFormatter::default());
        update(&mut state, OrdersAction::Mount);
        update(
            &mut state,
            OrdersAction::OrdersLoaded(Ok(vec![order(1, "Pizza", 42.5, None)])),
        );

        update(&mut state, OrdersAction::Mount);
        let effects = update(
            &mut state,
            OrdersAction::OrdersLoaded(Err(CatalogError::Parse("bad body".to_string()))),
        );

        assert_eq!(
            effects,
            vec![Effect::Alert(Notice::new(
                ORDERS_FAILED_TITLE,
                "Detail: parse error: bad body"
            ))]
        );
        assert_eq!(state.orders.len(), 1);
        assert!(!state.loading);
    }
}
