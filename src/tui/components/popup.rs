//! Modal overlays: failure alerts and the food detail pane.
//!
//! Both clear the area beneath them and are dismissed with Esc or Enter.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::catalog::{CategoryItem, FoodItem};
use crate::core::gateway::Notice;
use crate::core::listing::Listing;
use crate::tui::component::Component;
use crate::tui::ui::{accent, centered_rect};

pub struct AlertPopup<'a> {
    pub notice: &'a Notice,
}

impl Component for AlertPopup<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let popup = centered_rect(area, 60, 7);
        let text = Text::from(vec![
            Line::from(self.notice.detail.as_str()),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to dismiss",
                Style::new().add_modifier(Modifier::DIM),
            )),
        ]);
        let paragraph = Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .title(self.notice.title.as_str())
                    .border_style(Style::new().fg(Color::Red)),
            );
        frame.render_widget(Clear, popup);
        frame.render_widget(paragraph, popup);
    }
}

pub struct FoodDetail<'a> {
    pub food: &'a Listing<FoodItem>,
    pub category: Option<&'a CategoryItem>,
}

impl Component for FoodDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let popup = centered_rect(area, 70, 10);
        let record = self.food.record();
        let label = Style::new().add_modifier(Modifier::DIM);

        let mut lines = vec![
            Line::from(Span::styled(
                record.name.as_str(),
                Style::new().add_modifier(Modifier::BOLD),
            )),
            Line::from(record.description.as_str()),
            Line::from(""),
            Line::from(vec![
                Span::styled("Price     ", label),
                Span::styled(self.food.formatted_price(), accent()),
            ]),
        ];
        if let Some(category) = self.category {
            lines.push(Line::from(vec![
                Span::styled("Category  ", label),
                Span::raw(category.title.as_str()),
            ]));
        }
        if let Some(ref url) = record.thumbnail_url {
            lines.push(Line::from(vec![
                Span::styled("Image     ", label),
                Span::raw(url.as_str()),
            ]));
        }

        let paragraph = Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .title("Dish details")
                    .border_style(accent()),
            );
        frame.render_widget(Clear, popup);
        frame.render_widget(paragraph, popup);
    }
}
