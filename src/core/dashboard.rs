//! # Dashboard View Model
//!
//! Owns the menu screen: the food list, the category bar, and the two
//! filters (selected category, search text) that decide what the food
//! list shows.
//!
//! ```text
//! DashboardState
//! ├── foods: Vec<Listing<FoodItem>>   // latest applied food response, formatted
//! ├── categories: Vec<CategoryItem>   // fetched once at mount
//! ├── selected_category: Option<u64>  // toggled by tapping a category
//! ├── search_text: String             // verbatim search box contents
//! ├── generation: u64                 // id of the newest food request
//! └── loading_foods: bool             // newest food request still pending
//! ```
//!
//! ## Supersession
//!
//! Every filter change issues a new food request tagged with the next
//! generation. Older requests are not cancelled; when they complete, their
//! generation no longer matches and the result is dropped. The list always
//! reflects the most recently *issued* request (last-issued wins).

use log::{debug, info, warn};

use crate::catalog::{CatalogError, CategoryItem, FoodFilter, FoodItem};
use crate::core::action::{Effect, FetchRequest};
use crate::core::gateway::{FOOD_DETAILS_SCREEN, NavParams, Notice};
use crate::core::listing::{Listing, with_prices};
use crate::core::price::PriceFormatter;

pub const FOODS_FAILED_TITLE: &str = "Failed to load dishes";
pub const CATEGORIES_FAILED_TITLE: &str = "Failed to load categories";

#[derive(Debug)]
pub enum DashboardAction {
    /// Screen shown for the first time: load categories and the full menu.
    Mount,
    /// Category tapped.
    SelectCategory(u64),
    /// Search box edited.
    SetSearchText(String),
    /// Food tapped.
    OpenDetail(u64),
    FoodsLoaded {
        generation: u64,
        result: Result<Vec<FoodItem>, CatalogError>,
    },
    CategoriesLoaded(Result<Vec<CategoryItem>, CatalogError>),
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    pub foods: Vec<Listing<FoodItem>>,
    pub categories: Vec<CategoryItem>,
    pub selected_category: Option<u64>,
    pub search_text: String,
    pub generation: u64,
    pub loading_foods: bool,
    formatter: PriceFormatter,
}

impl DashboardState {
    pub fn new(formatter: PriceFormatter) -> Self {
        Self {
            foods: Vec::new(),
            categories: Vec::new(),
            selected_category: None,
            search_text: String::new(),
            generation: 0,
            loading_foods: false,
            formatter,
        }
    }

    pub fn formatter(&self) -> &PriceFormatter {
        &self.formatter
    }

    /// Filter for the current selection and search text.
    pub fn filter(&self) -> FoodFilter {
        FoodFilter::from_selection(self.selected_category, &self.search_text)
    }

    /// Issues a food request for the current filters, superseding any
    /// request still in flight.
    pub fn refresh_foods(&mut self) -> Effect {
        self.generation += 1;
        self.loading_foods = true;
        let filter = self.filter();
        debug!(
            "Dashboard food refresh: generation={} filter={:?}",
            self.generation, filter
        );
        Effect::Fetch(FetchRequest::Foods {
            generation: self.generation,
            filter,
        })
    }

    pub fn refresh_categories(&self) -> Effect {
        Effect::Fetch(FetchRequest::Categories)
    }

    pub fn is_selected(&self, category_id: u64) -> bool {
        self.selected_category == Some(category_id)
    }

    pub fn food(&self, food_id: u64) -> Option<&Listing<FoodItem>> {
        self.foods.iter().find(|food| food.id() == food_id)
    }
}

pub fn update(state: &mut DashboardState, action: DashboardAction) -> Vec<Effect> {
    match action {
        DashboardAction::Mount => {
            vec![state.refresh_categories(), state.refresh_foods()]
        }

        DashboardAction::SelectCategory(id) => {
            if state.is_selected(id) {
                state.selected_category = None;
            } else if state.categories.iter().any(|c| c.id == id) {
                state.selected_category = Some(id);
            } else {
                warn!("Ignoring selection of unknown category {}", id);
                return vec![];
            }
            vec![state.refresh_foods()]
        }

        DashboardAction::SetSearchText(text) => {
            if text == state.search_text {
                return vec![];
            }
            state.search_text = text;
            vec![state.refresh_foods()]
        }

        DashboardAction::OpenDetail(food_id) => {
            if state.food(food_id).is_none() {
                warn!("Ignoring detail request for unlisted food {}", food_id);
                return vec![];
            }
            let mut params = NavParams::new();
            params.insert("id".to_string(), food_id.into());
            vec![Effect::Navigate {
                screen: FOOD_DETAILS_SCREEN,
                params,
            }]
        }

        DashboardAction::FoodsLoaded { generation, result } => {
            if generation != state.generation {
                debug!(
                    "Dropping stale food response: generation={} current={}",
                    generation, state.generation
                );
                return vec![];
            }
            state.loading_foods = false;
            match result {
                Ok(foods) => {
                    info!("Loaded {} foods (generation {})", foods.len(), generation);
                    state.foods = with_prices(foods, &state.formatter);
                    vec![]
                }
                Err(e) => {
                    warn!("Food fetch failed: {}", e);
                    vec![Effect::Alert(Notice::new(
                        FOODS_FAILED_TITLE,
                        format!("Detail: {e}"),
                    ))]
                }
            }
        }

        DashboardAction::CategoriesLoaded(result) => match result {
            Ok(categories) => {
                info!("Loaded {} categories", categories.len());
                state.categories = categories;
                // A selection must point at a listed category.
                if let Some(id) = state.selected_category
                    && !state.categories.iter().any(|c| c.id == id)
                {
                    state.selected_category = None;
                    return vec![state.refresh_foods()];
                }
                vec![]
            }
            Err(e) => {
                warn!("Category fetch failed: {}", e);
                vec![Effect::Alert(Notice::new(
                    CATEGORIES_FAILED_TITLE,
                    format!("Detail: {e}"),
                ))]
            }
        },
    }
}
