//! # Runtime
//!
//! Carries out the effects `update()` asks for. Fetches run as tokio tasks
//! and report back by sending exactly one completion `Action` over a
//! channel; the owner of the state applies it with `update()` like any
//! other action. Nothing here touches view-model state directly.
//!
//! ```text
//!  Controller ──dispatch──▶ update() ──Vec<Effect>──▶ Runtime
//!      ▲                                               │
//!      │                     tokio::spawn(fetch) ◀─────┤ Fetch
//!      └──── completion Action ◀── channel ◀───────────┘
//!                                 Navigator / Notifier ◀─ Navigate / Alert
//! ```

use log::{debug, info, warn};
use std::sync::Arc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::catalog::CatalogService;
use crate::core::action::{Action, Effect, FetchRequest, update};
use crate::core::dashboard::DashboardAction;
use crate::core::gateway::{Navigator, Notifier};
use crate::core::orders::OrdersAction;
use crate::core::state::App;

pub struct Runtime {
    catalog: Arc<dyn CatalogService>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    tx: UnboundedSender<Action>,
}

impl Runtime {
    pub fn new(
        catalog: Arc<dyn CatalogService>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        tx: UnboundedSender<Action>,
    ) -> Self {
        Self {
            catalog,
            navigator,
            notifier,
            tx,
        }
    }

    /// Executes one effect. Fetches are spawned and return immediately.
    pub fn execute(&self, effect: Effect) {
        match effect {
            Effect::Fetch(request) => self.spawn_fetch(request),
            Effect::Navigate { screen, params } => self.navigator.navigate(screen, params),
            Effect::Alert(notice) => self.notifier.alert(&notice.title, &notice.detail),
        }
    }

    fn spawn_fetch(&self, request: FetchRequest) {
        info!(
            "Spawning {} fetch: {:?}",
            self.catalog.name(),
            request
        );
        let catalog = self.catalog.clone();
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let action: Action = match request {
                FetchRequest::Foods { generation, filter } => DashboardAction::FoodsLoaded {
                    generation,
                    result: catalog.list_foods(&filter).await,
                }
                .into(),
                FetchRequest::Categories => {
                    DashboardAction::CategoriesLoaded(catalog.list_categories().await).into()
                }
                FetchRequest::Orders => {
                    OrdersAction::OrdersLoaded(catalog.list_orders().await).into()
                }
            };
            if tx.send(action).is_err() {
                warn!("Failed to deliver fetch result: receiver dropped");
            }
        });
    }
}

/// Owns the app state and drives it: applies actions, runs the resulting
/// effects, and folds completions back in.
///
/// Must be used from within a tokio runtime.
pub struct Controller {
    pub app: App,
    runtime: Runtime,
    rx: UnboundedReceiver<Action>,
    in_flight: usize,
}

impl Controller {
    pub fn new(
        app: App,
        catalog: Arc<dyn CatalogService>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            app,
            runtime: Runtime::new(catalog, navigator, notifier, tx),
            rx,
            in_flight: 0,
        }
    }

    /// Applies an action and executes every effect it produces.
    pub fn dispatch(&mut self, action: impl Into<Action>) {
        let action = action.into();
        debug!("Dispatching: {:?}", action);
        for effect in update(&mut self.app, action) {
            if matches!(effect, Effect::Fetch(_)) {
                self.in_flight += 1;
            }
            self.runtime.execute(effect);
        }
    }

    /// Number of fetches issued whose completion has not been applied yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Applies every completion that has already arrived, without waiting.
    /// Returns how many were applied.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.rx.try_recv() {
            self.apply_completion(action);
            applied += 1;
        }
        applied
    }

    /// Waits for the next completion and applies it.
    /// Returns false if nothing is in flight.
    pub async fn next_completion(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }
        match self.rx.recv().await {
            Some(action) => {
                self.apply_completion(action);
                true
            }
            None => false,
        }
    }

    /// Waits until every issued fetch has completed and been applied.
    pub async fn settle(&mut self) {
        while self.next_completion().await {}
    }

    fn apply_completion(&mut self, action: Action) {
        debug_assert!(action.is_completion(), "not a completion: {action:?}");
        self.in_flight = self.in_flight.saturating_sub(1);
        self.dispatch(action);
    }

    // Screen operations

    pub fn mount_dashboard(&mut self) {
        self.dispatch(DashboardAction::Mount);
    }

    pub fn refresh_foods(&mut self) {
        let effect = self.app.dashboard.refresh_foods();
        self.in_flight += 1;
        self.runtime.execute(effect);
    }

    pub fn refresh_categories(&mut self) {
        let effect = self.app.dashboard.refresh_categories();
        self.in_flight += 1;
        self.runtime.execute(effect);
    }

    pub fn select_category(&mut self, id: u64) {
        self.dispatch(DashboardAction::SelectCategory(id));
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.dispatch(DashboardAction::SetSearchText(text.into()));
    }

    pub fn open_detail(&mut self, food_id: u64) {
        self.dispatch(DashboardAction::OpenDetail(food_id));
    }

    pub fn load_orders(&mut self) {
        self.dispatch(OrdersAction::Mount);
    }
}
