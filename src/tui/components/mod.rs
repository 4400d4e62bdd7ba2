//! # TUI Components
//!
//! Stateless components (props in, pixels out):
//! - `CategoryBar`: horizontal category strip with selection and cursor
//! - `AlertPopup`: modal failure notice
//! - `FoodDetail`: modal pane opened by navigation to the detail screen
//!
//! Stateful components (event-driven):
//! - `SearchBox`: single-line search input, emits the new text on change

pub mod category_bar;
pub mod popup;
pub mod search_box;

pub use category_bar::CategoryBar;
pub use popup::{AlertPopup, FoodDetail};
pub use search_box::{SearchBox, SearchEvent};
