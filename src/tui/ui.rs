use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, List, ListItem, Paragraph};

use crate::catalog::{FoodItem, OrderItem};
use crate::core::listing::Listing;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{AlertPopup, CategoryBar, FoodDetail};
use crate::tui::{Focus, Screen, TuiState};

/// Brand orange, used for prices and the active selection.
pub const ACCENT: Color = Color::Rgb(0xFF, 0xB8, 0x4D);

pub fn accent() -> Style {
    Style::new().fg(ACCENT)
}

/// A rectangle `width_percent` wide and `height` rows tall, centered in `area`.
pub fn centered_rect(area: Rect, width_percent: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Percentage(width_percent)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    draw_title_bar(frame, title_area, app, tui);

    match tui.screen {
        Screen::Dashboard => draw_dashboard(frame, main_area, app, tui),
        Screen::Orders => draw_orders(frame, main_area, app, tui),
    }

    let help = match tui.screen {
        Screen::Dashboard => "Tab focus · ←/→ category · Enter select · Ctrl+O orders · Esc quit",
        Screen::Orders => "↑/↓ move · r reload · Ctrl+O dashboard · Esc back",
    };
    frame.render_widget(
        Span::styled(help, Style::new().add_modifier(Modifier::DIM)),
        help_area,
    );

    // Overlays: detail pane below, alert on top.
    if let Some(food_id) = tui.detail
        && let Some(food) = app.dashboard.food(food_id)
    {
        let category = food
            .record()
            .category
            .and_then(|id| app.dashboard.categories.iter().find(|c| c.id == id));
        FoodDetail { food, category }.render(frame, main_area);
    }
    if let Some(ref notice) = tui.alert {
        let full = frame.area();
        AlertPopup { notice }.render(frame, full);
    }
}

fn draw_title_bar(frame: &mut Frame, area: Rect, app: &App, tui: &TuiState) {
    let tab = |label: &'static str, active: bool| {
        if active {
            Span::styled(label, accent().add_modifier(Modifier::BOLD | Modifier::REVERSED))
        } else {
            Span::raw(label)
        }
    };

    let loading = match tui.screen {
        Screen::Dashboard => app.dashboard.loading_foods,
        Screen::Orders => app.orders.loading,
    };

    let mut spans = vec![
        Span::styled("Menuboard ", Style::new().add_modifier(Modifier::BOLD)),
        tab(" Dashboard ", tui.screen == Screen::Dashboard),
        Span::raw(" "),
        tab(" Orders ", tui.screen == Screen::Orders),
    ];
    if loading {
        spans.push(Span::styled(
            "  Loading...",
            Style::new().add_modifier(Modifier::DIM),
        ));
    }
    frame.render_widget(Line::from(spans), area);
}

fn draw_dashboard(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [search_area, categories_area, foods_area] =
        Layout::vertical([Length(3), Length(3), Min(0)]).areas(area);

    tui.search.focused = tui.focus == Focus::Search && tui.detail.is_none();
    tui.search.render(frame, search_area);

    CategoryBar {
        categories: &app.dashboard.categories,
        selected: app.dashboard.selected_category,
        cursor: tui.category_cursor,
        focused: tui.focus == Focus::Categories,
    }
    .render(frame, categories_area);

    let block = Block::bordered()
        .title("Dishes")
        .border_style(focus_border(tui.focus == Focus::Foods));

    if app.dashboard.foods.is_empty() {
        let message = if app.dashboard.loading_foods {
            "Loading dishes..."
        } else {
            "No dishes found"
        };
        let empty = Paragraph::new(Span::styled(
            message,
            Style::new().add_modifier(Modifier::DIM),
        ))
        .block(block);
        frame.render_widget(empty, foods_area);
        return;
    }

    let items: Vec<ListItem> = app.dashboard.foods.iter().map(food_item).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(highlight(tui.focus == Focus::Foods))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, foods_area, &mut tui.food_list);
}

fn draw_orders(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let block = Block::bordered().title("My orders").border_style(accent());

    if app.orders.orders.is_empty() {
        let message = if app.orders.loading {
            "Loading orders..."
        } else {
            "No orders yet"
        };
        let empty = Paragraph::new(Span::styled(
            message,
            Style::new().add_modifier(Modifier::DIM),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app.orders.orders.iter().map(order_item).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(highlight(true))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut tui.order_list);
}

fn food_item(food: &Listing<FoodItem>) -> ListItem<'_> {
    let record = food.record();
    priced_item(&record.name, &record.description, food.formatted_price())
}

fn order_item(order: &Listing<OrderItem>) -> ListItem<'_> {
    let record = order.record();
    priced_item(&record.name, &record.description, order.formatted_price())
}

fn priced_item<'a>(name: &'a str, description: &'a str, price: &'a str) -> ListItem<'a> {
    let mut lines = vec![Line::from(vec![
        Span::styled(name, Style::new().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(price, accent()),
    ])];
    if !description.is_empty() {
        lines.push(Line::from(Span::styled(
            description,
            Style::new().add_modifier(Modifier::DIM),
        )));
    }
    ListItem::new(Text::from(lines))
}

fn focus_border(focused: bool) -> Style {
    if focused {
        accent()
    } else {
        Style::new().add_modifier(Modifier::DIM)
    }
}

fn highlight(focused: bool) -> Style {
    if focused {
        Style::new().add_modifier(Modifier::REVERSED)
    } else {
        Style::new().add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(area, 60, 7);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 7);
        assert_eq!(popup.x, 20);
        assert!(popup.y >= 16 && popup.y <= 17);
    }
}
