//! # Actions
//!
//! Everything that can happen in Menuboard becomes an `Action`.
//! User types in the search box? That's `DashboardAction::SetSearchText`.
//! API responds? That's `DashboardAction::FoodsLoaded { .. }`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns the effects the host must carry out.
//! No I/O here. Fetching, navigating and alerting happen in the runtime.
//!
//! ```text
//! State + Action  →  update()  →  New State + Vec<Effect>
//! ```

use crate::catalog::FoodFilter;
use crate::core::dashboard::{self, DashboardAction};
use crate::core::gateway::{NavParams, Notice};
use crate::core::orders::{self, OrdersAction};
use crate::core::state::App;

#[derive(Debug)]
pub enum Action {
    Dashboard(DashboardAction),
    Orders(OrdersAction),
}

impl Action {
    /// True for actions that carry the result of a fetch.
    pub fn is_completion(&self) -> bool {
        matches!(
            self,
            Action::Dashboard(DashboardAction::FoodsLoaded { .. })
                | Action::Dashboard(DashboardAction::CategoriesLoaded(_))
                | Action::Orders(OrdersAction::OrdersLoaded(_))
        )
    }
}

impl From<DashboardAction> for Action {
    fn from(action: DashboardAction) -> Self {
        Action::Dashboard(action)
    }
}

impl From<OrdersAction> for Action {
    fn from(action: OrdersAction) -> Self {
        Action::Orders(action)
    }
}

/// A catalog request the runtime should issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Foods { generation: u64, filter: FoodFilter },
    Categories,
    Orders,
}

/// Side effects requested by `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Fetch(FetchRequest),
    Navigate {
        screen: &'static str,
        params: NavParams,
    },
    Alert(Notice),
}

pub fn update(app: &mut App, action: Action) -> Vec<Effect> {
    match action {
        Action::Dashboard(action) => dashboard::update(&mut app.dashboard, action),
        Action::Orders(action) => orders::update(&mut app.orders, action),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;
    use crate::core::price::PriceFormatter;

    #[test]
    fn test_update_routes_to_screen() {
        let mut app = App::new(PriceFormatter::default());
        let effects = update(&mut app, OrdersAction::Mount.into());
        assert_eq!(effects, vec![Effect::Fetch(FetchRequest::Orders)]);
        assert!(app.orders.loading);
        assert!(!app.dashboard.loading_foods);
    }

    #[test]
    fn test_completion_detection() {
        assert!(Action::from(OrdersAction::OrdersLoaded(Ok(vec![]))).is_completion());
        assert!(
            Action::from(DashboardAction::CategoriesLoaded(Err(CatalogError::Network(
                "down".to_string()
            ))))
            .is_completion()
        );
        assert!(!Action::from(DashboardAction::SelectCategory(1)).is_completion());
        assert!(!Action::from(OrdersAction::Mount).is_completion());
    }
}
