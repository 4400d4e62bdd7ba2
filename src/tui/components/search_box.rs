//! # SearchBox Component
//!
//! Single-line text input for the dashboard's food search. Edits happen
//! at the end of the line only. Every edit emits the full new text; the
//! caller forwards it verbatim to the view model (no debounce).

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::ui::accent;

const PLACEHOLDER: &str = "What food are you looking for?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    Changed(String),
}

#[derive(Debug, Default)]
pub struct SearchBox {
    text: String,
    /// Prop: draws the cursor and a highlighted border.
    pub focused: bool,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.text.push(*c);
            }
            TuiEvent::Paste(data) => {
                let line: String = data.chars().filter(|c| !c.is_control()).collect();
                if line.is_empty() {
                    return None;
                }
                self.text.push_str(&line);
            }
            TuiEvent::Backspace => {
                self.text.pop()?;
            }
            _ => return None,
        }
        Some(SearchEvent::Changed(self.text.clone()))
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            accent()
        } else {
            Style::new().add_modifier(Modifier::DIM)
        };
        let content = if self.text.is_empty() {
            Span::styled(PLACEHOLDER, Style::new().add_modifier(Modifier::DIM))
        } else {
            Span::raw(self.text.as_str())
        };
        let paragraph = Paragraph::new(content).block(
            Block::bordered()
                .title("Search")
                .border_style(border_style),
        );
        frame.render_widget(paragraph, area);

        if self.focused {
            let width = self.text.chars().count() as u16;
            let x = (area.x + 1 + width).min(area.right().saturating_sub(2));
            frame.set_cursor_position(Position::new(x, area.y + 1));
        }
    }
}
