//! Menuboard library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Screen shown when the front end starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartScreen {
    #[default]
    Dashboard,
    Orders,
}
