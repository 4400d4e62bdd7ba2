//! # CategoryBar Component
//!
//! Horizontal strip of category titles. The selected category (the active
//! filter) is drawn filled; the keyboard cursor is underlined while the bar
//! has focus. When the strip is wider than the area, it scrolls so that the
//! cursor stays visible.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::catalog::CategoryItem;
use crate::tui::component::Component;
use crate::tui::ui::{ACCENT, accent};

pub struct CategoryBar<'a> {
    pub categories: &'a [CategoryItem],
    pub selected: Option<u64>,
    pub cursor: usize,
    pub focused: bool,
}

impl CategoryBar<'_> {
    fn label(category: &CategoryItem) -> String {
        format!(" {} ", category.title)
    }

    /// Index of the first category to draw so the cursor fits in `width`.
    fn first_visible(&self, width: usize) -> usize {
        let mut used = 0;
        let mut first = self.cursor.min(self.categories.len().saturating_sub(1));
        for index in (0..=first).rev() {
            let Some(category) = self.categories.get(index) else {
                break;
            };
            used += Self::label(category).chars().count() + 1;
            if used > width {
                break;
            }
            first = index;
        }
        first
    }
}

impl Component for CategoryBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            accent()
        } else {
            Style::new().add_modifier(Modifier::DIM)
        };
        let block = Block::bordered()
            .title("Categories")
            .border_style(border_style);

        if self.categories.is_empty() {
            let empty = Paragraph::new(Span::styled(
                "No categories",
                Style::new().add_modifier(Modifier::DIM),
            ))
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner_width = area.width.saturating_sub(2) as usize;
        let first = self.first_visible(inner_width);

        let mut spans = Vec::new();
        for (index, category) in self.categories.iter().enumerate().skip(first) {
            let mut style = if self.selected == Some(category.id) {
                Style::new().bg(ACCENT).fg(Color::Black)
            } else {
                Style::new()
            };
            if self.focused && index == self.cursor {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
            }
            spans.push(Span::styled(Self::label(category), style));
            spans.push(Span::raw(" "));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}
