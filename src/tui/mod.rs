//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders both screens,
//! and translates keyboard events into calls on the core `Controller`.
//!
//! This is the only module that knows about ratatui and crossterm. It also
//! hosts the core's gateways: navigation and alerts arrive here as
//! `UiMessage`s over a channel and are turned into overlays.
//!
//! ## Redraw Strategy
//!
//! - **Fetching**: polls every ~80ms so completions show up promptly.
//! - **Idle**: sleeps up to 500ms, only redraws on input, resize, or a
//!   message from the core.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::widgets::ListState;
use serde_json::Value;

use crate::StartScreen;
use crate::catalog::HttpCatalog;
use crate::core::config::ResolvedConfig;
use crate::core::gateway::{FOOD_DETAILS_SCREEN, NavParams, Navigator, Notice, Notifier};
use crate::core::runtime::Controller;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{SearchBox, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Orders,
}

impl From<StartScreen> for Screen {
    fn from(start: StartScreen) -> Self {
        match start {
            StartScreen::Dashboard => Screen::Dashboard,
            StartScreen::Orders => Screen::Orders,
        }
    }
}

/// Which dashboard widget receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Search,
    Categories,
    Foods,
}

impl Focus {
    fn next(self) -> Focus {
        match self {
            Focus::Search => Focus::Categories,
            Focus::Categories => Focus::Foods,
            Focus::Foods => Focus::Search,
        }
    }

    fn prev(self) -> Focus {
        match self {
            Focus::Search => Focus::Foods,
            Focus::Categories => Focus::Search,
            Focus::Foods => Focus::Categories,
        }
    }
}

/// Messages from the core's gateways to the event loop.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum UiMessage {
    Navigate { screen: String, params: NavParams },
    Alert(Notice),
}

/// Navigator + Notifier that forward to the event loop.
struct UiGateway {
    tx: mpsc::Sender<UiMessage>,
}

impl UiGateway {
    fn send(&self, message: UiMessage) {
        if self.tx.send(message).is_err() {
            warn!("UI message dropped: event loop gone");
        }
    }
}

impl Navigator for UiGateway {
    fn navigate(&self, screen: &str, params: NavParams) {
        self.send(UiMessage::Navigate {
            screen: screen.to_string(),
            params,
        });
    }
}

impl Notifier for UiGateway {
    fn alert(&self, title: &str, detail: &str) {
        self.send(UiMessage::Alert(Notice::new(title, detail)));
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub(crate) struct TuiState {
    pub screen: Screen,
    pub focus: Focus,
    pub search: SearchBox,
    pub category_cursor: usize,
    pub food_list: ListState,
    pub order_list: ListState,
    /// Food shown in the detail pane (set by navigation).
    pub detail: Option<u64>,
    pub alert: Option<Notice>,
    orders_mounted: bool,
}

impl TuiState {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            focus: Focus::Search, // User expects to type immediately
            search: SearchBox::new(),
            category_cursor: 0,
            food_list: ListState::default(),
            order_list: ListState::default(),
            detail: None,
            alert: None,
            orders_mounted: false,
        }
    }

    /// Mounts whatever the current screen needs on first display.
    fn ensure_mounted(&mut self, controller: &mut Controller) {
        if self.screen == Screen::Orders && !self.orders_mounted {
            controller.load_orders();
            self.orders_mounted = true;
        }
    }

    /// Applies a gateway message. An alert arriving while another is
    /// visible is dropped.
    pub fn receive(&mut self, message: UiMessage) {
        match message {
            UiMessage::Navigate { screen, params } if screen == FOOD_DETAILS_SCREEN => {
                match params.get("id").and_then(Value::as_u64) {
                    Some(id) => self.detail = Some(id),
                    None => warn!("Detail navigation without a numeric id: {:?}", params),
                }
            }
            UiMessage::Navigate { screen, .. } => {
                warn!("Navigation to unknown screen '{}'", screen);
            }
            UiMessage::Alert(notice) => {
                if self.alert.is_none() {
                    self.alert = Some(notice);
                } else {
                    debug!("Alert suppressed, one already visible: {:?}", notice);
                }
            }
        }
    }

    /// Keeps cursors inside the lists after they were replaced.
    pub fn clamp_selection(&mut self, app: &App) {
        clamp(&mut self.food_list, app.dashboard.foods.len());
        clamp(&mut self.order_list, app.orders.orders.len());
        self.category_cursor = self
            .category_cursor
            .min(app.dashboard.categories.len().saturating_sub(1));
        if let Some(id) = self.detail
            && app.dashboard.food(id).is_none()
        {
            self.detail = None;
        }
    }
}

fn clamp(list: &mut ListState, len: usize) {
    if len == 0 {
        list.select(None);
    } else {
        let index = list.selected().unwrap_or(0).min(len - 1);
        list.select(Some(index));
    }
}

/// Turns on bracketed paste for the lifetime of the guard, so a pasted
/// search term arrives as one `TuiEvent::Paste` instead of keystrokes.
struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

/// Whether the event loop keeps running.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Routes one terminal event: overlays first, then the active screen.
fn handle_event(controller: &mut Controller, tui: &mut TuiState, event: TuiEvent) -> Flow {
    if event == TuiEvent::ForceQuit {
        return Flow::Quit;
    }
    if event == TuiEvent::Resize {
        return Flow::Continue;
    }

    // Modal overlays swallow everything until dismissed
    if tui.alert.is_some() {
        if matches!(event, TuiEvent::Escape | TuiEvent::Submit) {
            tui.alert = None;
        }
        return Flow::Continue;
    }
    if tui.detail.is_some() {
        if matches!(
            event,
            TuiEvent::Escape | TuiEvent::Submit | TuiEvent::Backspace
        ) {
            tui.detail = None;
        }
        return Flow::Continue;
    }

    if event == TuiEvent::SwitchScreen {
        tui.screen = match tui.screen {
            Screen::Dashboard => Screen::Orders,
            Screen::Orders => Screen::Dashboard,
        };
        tui.ensure_mounted(controller);
        return Flow::Continue;
    }

    match tui.screen {
        Screen::Orders => handle_orders_event(controller, tui, event),
        Screen::Dashboard => handle_dashboard_event(controller, tui, event),
    }
}

fn handle_orders_event(controller: &mut Controller, tui: &mut TuiState, event: TuiEvent) -> Flow {
    let len = controller.app.orders.orders.len();
    match event {
        TuiEvent::Escape => tui.screen = Screen::Dashboard,
        TuiEvent::InputChar('r') => controller.load_orders(),
        TuiEvent::Up => move_selection(&mut tui.order_list, len, -1),
        TuiEvent::Down => move_selection(&mut tui.order_list, len, 1),
        _ => {}
    }
    Flow::Continue
}

fn handle_dashboard_event(
    controller: &mut Controller,
    tui: &mut TuiState,
    event: TuiEvent,
) -> Flow {
    match event {
        TuiEvent::Escape => return Flow::Quit,
        TuiEvent::FocusNext => tui.focus = tui.focus.next(),
        TuiEvent::FocusPrev => tui.focus = tui.focus.prev(),
        _ => match tui.focus {
            Focus::Search => match event {
                TuiEvent::Down => tui.focus = Focus::Categories,
                _ => {
                    if let Some(SearchEvent::Changed(text)) = tui.search.handle_event(&event) {
                        controller.set_search_text(text);
                    }
                }
            },
            Focus::Categories => {
                let categories = &controller.app.dashboard.categories;
                match event {
                    TuiEvent::Left => tui.category_cursor = tui.category_cursor.saturating_sub(1),
                    TuiEvent::Right => {
                        if tui.category_cursor + 1 < categories.len() {
                            tui.category_cursor += 1;
                        }
                    }
                    TuiEvent::Up => tui.focus = Focus::Search,
                    TuiEvent::Down => tui.focus = Focus::Foods,
                    TuiEvent::Submit | TuiEvent::InputChar(' ') => {
                        if let Some(category) = categories.get(tui.category_cursor) {
                            let id = category.id;
                            controller.select_category(id);
                        }
                    }
                    // Typing jumps back to the search box
                    TuiEvent::InputChar(_) | TuiEvent::Paste(_) | TuiEvent::Backspace => {
                        tui.focus = Focus::Search;
                        return handle_dashboard_event(controller, tui, event);
                    }
                    _ => {}
                }
            }
            Focus::Foods => {
                let len = controller.app.dashboard.foods.len();
                match event {
                    TuiEvent::Up if tui.food_list.selected().unwrap_or(0) == 0 => {
                        tui.focus = Focus::Categories;
                    }
                    TuiEvent::Up => move_selection(&mut tui.food_list, len, -1),
                    TuiEvent::Down => move_selection(&mut tui.food_list, len, 1),
                    TuiEvent::Submit => {
                        if let Some(food) = tui
                            .food_list
                            .selected()
                            .and_then(|i| controller.app.dashboard.foods.get(i))
                        {
                            let id = food.id();
                            controller.open_detail(id);
                        }
                    }
                    TuiEvent::InputChar(_) | TuiEvent::Paste(_) | TuiEvent::Backspace => {
                        tui.focus = Focus::Search;
                        return handle_dashboard_event(controller, tui, event);
                    }
                    _ => {}
                }
            }
        },
    }
    Flow::Continue
}

fn move_selection(list: &mut ListState, len: usize, delta: isize) {
    if len == 0 {
        list.select(None);
        return;
    }
    let current = list.selected().unwrap_or(0) as isize;
    let next = (current + delta).clamp(0, len as isize - 1);
    list.select(Some(next as usize));
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    info!(
        "Starting TUI: base_url={} locale={}",
        config.base_url,
        config.currency_locale.tag()
    );

    let (ui_tx, ui_rx) = mpsc::channel();
    let gateway = Arc::new(UiGateway { tx: ui_tx });
    let catalog = Arc::new(HttpCatalog::new(config.base_url.clone()));
    let mut controller = Controller::new(
        App::from_config(&config),
        catalog,
        gateway.clone(),
        gateway,
    );
    let mut tui = TuiState::new(config.start_screen.into());

    controller.mount_dashboard();
    tui.ensure_mounted(&mut controller);

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new();
    if let Err(ref e) = terminal_mode_guard {
        warn!("Bracketed paste unavailable: {}", e);
    }
    let result = event_loop(&mut terminal, &mut controller, &mut tui, &ui_rx);
    drop(terminal_mode_guard);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    controller: &mut Controller,
    tui: &mut TuiState,
    ui_rx: &mpsc::Receiver<UiMessage>,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &controller.app, tui))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short while fetches are pending, long when idle
        let timeout = if controller.in_flight() > 0 {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(controller, tui, event) == Flow::Quit {
                info!("Quit requested");
                return Ok(());
            }
        }

        // Fold in fetch completions, then whatever they asked the host to do
        if controller.drain() > 0 {
            needs_redraw = true;
        }
        while let Ok(message) = ui_rx.try_recv() {
            debug!("Event loop received: {:?}", message);
            tui.receive(message);
            needs_redraw = true;
        }
        tui.clamp_selection(&controller.app);
    }
}
