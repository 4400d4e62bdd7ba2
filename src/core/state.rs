//! # Application State
//!
//! Core business state for Menuboard. Domain logic only, no TUI types.
//! Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── dashboard: DashboardState   // menu screen: foods, categories, filters
//! └── orders: OrdersState         // order history screen
//! ```
//!
//! The two screens share nothing but the price formatter configuration.
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::dashboard::DashboardState;
use crate::core::orders::OrdersState;
use crate::core::price::PriceFormatter;

#[derive(Debug, Clone)]
pub struct App {
    pub dashboard: DashboardState,
    pub orders: OrdersState,
}

impl App {
    pub fn new(formatter: PriceFormatter) -> Self {
        Self {
            dashboard: DashboardState::new(formatter),
            orders: OrdersState::new(formatter),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(PriceFormatter::new(config.currency_locale))
    }
}
