//! # Core Application Logic
//!
//! This module contains Menuboard's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (view models)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Runtime (effects)    │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  Catalog   │      │   Tests    │
//!     │  Adapter   │      │  (HTTP)    │      │  (stubs)   │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, both screens' state in one place
//! - [`action`]: The `Action` and `Effect` enums, and the top-level `update()`
//! - [`dashboard`] / [`orders`]: per-screen view models
//! - [`price`] / [`listing`]: currency formatting and display records
//! - [`gateway`]: navigation and alert traits the host implements
//! - [`runtime`]: executes effects on tokio
//! - [`config`]: layered configuration

pub mod action;
pub mod config;
pub mod dashboard;
pub mod gateway;
pub mod listing;
pub mod orders;
pub mod price;
pub mod runtime;
pub mod state;
